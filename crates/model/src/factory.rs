use segbar_core::SegmentNode;
use std::{fmt, rc::Rc};

type FactoryFn<S> = dyn Fn(&S) -> Option<Box<dyn SegmentNode>>;

/// Callback turning a segment into a freshly created node.
///
/// Returning `None` means the factory could not produce a usable node; the
/// skin skips that segment. Clones share the same callback.
pub struct NodeFactory<S> {
    inner: Rc<FactoryFn<S>>,
}

impl<S> NodeFactory<S> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&S) -> Option<Box<dyn SegmentNode>> + 'static,
    {
        Self { inner: Rc::new(f) }
    }

    /// Invoke the factory for one segment.
    pub fn create(&self, segment: &S) -> Option<Box<dyn SegmentNode>> {
        (self.inner)(segment)
    }
}

impl<S> Clone for NodeFactory<S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<S> fmt::Debug for NodeFactory<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeFactory")
            .field("ptr", &Rc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}
