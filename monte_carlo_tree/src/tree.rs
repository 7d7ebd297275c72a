use std::borrow::Borrow;

/// A tree node that owns its children and can walk back up to its parent.
pub trait Node: Sized {
    type Handle: Borrow<Self> + Clone;
    type Data;

    fn data(&self) -> &Self::Data;
    fn get_handle(&self) -> Self::Handle;

    /// None for the root, or once the parent has been dropped.
    fn parent(&self) -> Option<Self::Handle>;
    fn children(&self) -> Vec<Self::Handle>;
    fn child_count(&self) -> usize;

    fn new_child(&self, data: Self::Data) -> Self::Handle;
    fn new_root(data: Self::Data) -> Self::Handle;

    fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }
}
