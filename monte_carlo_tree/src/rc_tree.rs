use crate::tree::Node;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

pub struct RcNodeContent<T> {
    data: T,
    parent: Weak<Self>,
    children: RefCell<Vec<RcNode<T>>>,
}

/// Wraps a NodeContent with a reference-counted owner.
/// Children are owned through `Rc`, the parent only through `Weak`,
/// so dropping the root handle drops the whole tree.
pub type RcNode<T> = Rc<RcNodeContent<T>>;

impl<T> Node for RcNode<T> {
    type Handle = Self;
    type Data = T;

    fn data(&self) -> &Self::Data {
        &self.data
    }

    fn get_handle(&self) -> Self::Handle {
        self.clone()
    }

    fn parent(&self) -> Option<Self::Handle> {
        self.parent.upgrade()
    }

    fn children(&self) -> Vec<Self::Handle> {
        self.children.borrow().iter().cloned().collect()
    }

    fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    fn new_child(&self, data: T) -> RcNode<T> {
        let child = Rc::new(RcNodeContent {
            parent: Rc::downgrade(self),
            children: RefCell::default(),
            data,
        });

        self.children.borrow_mut().push(child.clone());

        child
    }

    fn new_root(data: T) -> RcNode<T> {
        Rc::new(RcNodeContent {
            parent: Weak::new(),
            children: RefCell::default(),
            data,
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for RcNodeContent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RcNodeContent")
            .field("data", &self.data)
            .field("children", &self.children.borrow().len())
            .finish()
    }
}
