/// A single cell of the chain.
///
/// A node without a value is the trailing sentinel: it never has a successor
/// and never sits in the interior of a chain.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// A value node, already followed by a fresh sentinel.
    pub(crate) fn new(value: T) -> Self {
        Node {
            value: Some(value),
            next: Some(Box::new(Node::sentinel())),
        }
    }

    pub(crate) fn sentinel() -> Self {
        Node {
            value: None,
            next: None,
        }
    }

    /// A value node placed in front of `next`.
    pub(crate) fn linked(value: T, next: Box<Node<T>>) -> Self {
        Node {
            value: Some(value),
            next: Some(next),
        }
    }

    /// Is this node live (not the sentinel)?
    pub(crate) fn is_live(&self) -> bool {
        self.value.is_some()
    }

    /// Walks to the sentinel reachable from this node and turns it into a
    /// value node with a new sentinel behind it.
    pub(crate) fn append(&mut self, value: T) {
        let mut node = self;
        while node.is_live() {
            node = node.successor_mut();
        }
        *node = Node::new(value);
    }

    pub(crate) fn successor(&self) -> &Node<T> {
        self.next
            .as_deref()
            .expect("live node must have a successor")
    }

    pub(crate) fn successor_mut(&mut self) -> &mut Node<T> {
        self.next
            .as_deref_mut()
            .expect("live node must have a successor")
    }

    /// Detaches this node's successor and links this node to the one after it.
    pub(crate) fn unlink_next(&mut self) -> Box<Node<T>> {
        let mut removed = self.next.take().expect("live node must have a successor");
        self.next = removed.next.take();
        removed
    }

    /// Detaches the successor, leaving this node without one.
    pub(crate) fn take_next(&mut self) -> Box<Node<T>> {
        self.next.take().expect("live node must have a successor")
    }

    pub(crate) fn into_value(self) -> T {
        self.value.expect("unlinked node must be live")
    }
}
