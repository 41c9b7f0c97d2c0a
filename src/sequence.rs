use crate::{
    errors::{Result, SequenceError},
    node::Node,
    slice::StepRange,
};
use core::fmt;
use core::ops::{Index, IndexMut};
use tracing::{debug, trace};

/// An array-style sequence stored as a singly linked chain of nodes.
///
/// The chain always ends in an empty sentinel node. Every positional access
/// walks from the head, so reaching position `k` costs `k` link hops. Appends
/// walk the whole chain as well: there is no cached tail.
pub struct Sequence<T> {
    head: Box<Node<T>>,
    len: usize,
}

/// Borrowing iterator over the values of a [`Sequence`], front to back.
///
/// Each call to [`Sequence::iter`] starts an independent traversal.
pub struct Iter<'a, T> {
    node: &'a Node<T>,
    remaining: usize,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> {
    /// Create an empty sequence whose head is the bare sentinel.
    pub fn new() -> Self {
        Self {
            head: Box::new(Node::sentinel()),
            len: 0,
        }
    }

    /// Create a sequence holding the elements of `values` in iteration order.
    pub fn from_elements<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut seq = Self::new();
        seq.concat(values);
        seq
    }

    /// Create a sequence holding a single element.
    pub fn from_value(value: T) -> Self {
        let mut seq = Self::new();
        seq.append(value);
        seq
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Push a value to the back. Walks the full chain to reach the sentinel.
    pub fn append(&mut self, value: T) {
        self.len += 1;
        self.head.append(value);
    }

    /// Append every element of `values` in iteration order.
    pub fn concat<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.append(value);
        }
    }

    /// Get a reference to the element at `index`. Negative indices count from the back.
    pub fn get(&self, index: isize) -> Result<&T> {
        let pos = self.normalize(index)?;
        Ok(self.value_at(pos))
    }

    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let pos = self.normalize(index)?;
        Ok(self.value_at_mut(pos))
    }

    /// Overwrite the element at `index`, returning the previous value.
    pub fn set(&mut self, index: isize, value: T) -> Result<T> {
        let pos = self.normalize(index)?;
        Ok(core::mem::replace(self.value_at_mut(pos), value))
    }

    /// Remove and return the element at `index`.
    pub fn delete(&mut self, index: isize) -> Result<T> {
        let pos = self.normalize(index)?;
        let removed = if pos == 0 {
            let successor = self.head.take_next();
            core::mem::replace(&mut self.head, successor)
        } else {
            self.node_at_mut(pos - 1).unlink_next()
        };
        self.len -= 1;
        trace!(pos, len = self.len, "deleted element");
        Ok(removed.into_value())
    }

    /// Insert `value` so that it ends up at `index`, shifting later elements back.
    ///
    /// `index == len` appends; otherwise the index must be valid for reads.
    pub fn insert(&mut self, index: isize, value: T) -> Result<()> {
        if index == self.len as isize {
            self.append(value);
            trace!(pos = index, len = self.len, "inserted element at end");
            return Ok(());
        }
        let pos = self.normalize(index)?;
        if pos == 0 {
            let old_head = core::mem::replace(&mut self.head, Box::new(Node::sentinel()));
            *self.head = Node::linked(value, old_head);
        } else {
            let prev = self.node_at_mut(pos - 1);
            let occupant = prev.take_next();
            prev.next = Some(Box::new(Node::linked(value, occupant)));
        }
        self.len += 1;
        trace!(pos, len = self.len, "inserted element");
        Ok(())
    }

    /// Exchange the elements at `a` and `b`.
    pub fn swap(&mut self, a: isize, b: isize) -> Result<()> {
        let a = self.normalize(a)?;
        let b = self.normalize(b)?;
        self.swap_positions(a, b);
        Ok(())
    }

    /// Clone the elements selected by `(start, stop, step)` into a new vector.
    ///
    /// Bounds follow half-open stepped range rules: out-of-range bounds are
    /// clamped and a negative `step` walks backwards. Each element is read
    /// with a separate positional lookup.
    pub fn slice(&self, start: Option<isize>, stop: Option<isize>, step: isize) -> Result<Vec<T>>
    where
        T: Clone,
    {
        StepRange::resolve(start, stop, step, self.len)?
            .map(|index| self.get(index).cloned())
            .collect()
    }

    /// Iterate values in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: &*self.head,
            remaining: self.len,
        }
    }

    /// Map `index` in `[-len, len - 1]` onto `[0, len - 1]`.
    fn normalize(&self, index: isize) -> Result<usize> {
        let len = self.len as isize;
        if index < -len || index >= len {
            return Err(SequenceError::out_of_range(index, self.len));
        }
        Ok(index.rem_euclid(len) as usize)
    }

    fn node_at(&self, pos: usize) -> &Node<T> {
        let mut node = &*self.head;
        for _ in 0..pos {
            node = node.successor();
        }
        node
    }

    fn node_at_mut(&mut self, pos: usize) -> &mut Node<T> {
        let mut node = &mut *self.head;
        for _ in 0..pos {
            node = node.successor_mut();
        }
        node
    }

    fn value_at(&self, pos: usize) -> &T {
        self.node_at(pos)
            .value
            .as_ref()
            .expect("position below len must be live")
    }

    fn value_at_mut(&mut self, pos: usize) -> &mut T {
        self.node_at_mut(pos)
            .value
            .as_mut()
            .expect("position below len must be live")
    }

    /// Each side is reached by its own walk from the head.
    fn swap_positions(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let left = self.node_at_mut(a).value.take();
        let right = core::mem::replace(&mut self.node_at_mut(b).value, left);
        self.node_at_mut(a).value = right;
    }
}

impl<T: Ord> Sequence<T> {
    /// Is every element no greater than its successor?
    pub fn is_sorted(&self) -> bool {
        let mut node = &*self.head;
        for _ in 1..self.len {
            let next = node.successor();
            if node.value > next.value {
                return false;
            }
            node = next;
        }
        true
    }

    /// Position of the first occurrence of the largest element.
    pub fn max_index(&self) -> Option<usize> {
        self.extremum_index(|candidate, best| candidate > best)
    }

    /// Position of the first occurrence of the smallest element.
    pub fn min_index(&self) -> Option<usize> {
        self.extremum_index(|candidate, best| candidate < best)
    }

    /// Sorts in place with a plain bubble sort.
    ///
    /// Always runs `len - 1` passes, even once the elements are in order.
    /// Adjacent pairs are compared along a running traversal; every swap goes
    /// through positional access and pays a walk from the head.
    pub fn bubble_sort(&mut self) {
        let len = self.len;
        let passes = len.saturating_sub(1);
        debug!(len, passes, "bubble sort started");

        let mut swaps = 0usize;
        for pass in 0..passes {
            let limit = len - pass - 1;
            let mut from = 0;
            while let Some(pos) = self.next_inversion(from, limit) {
                self.swap_positions(pos, pos + 1);
                swaps += 1;
                from = pos + 1;
            }
        }
        debug!(len, passes, swaps, "bubble sort finished");
    }

    /// The best-so-far candidate is re-read through a positional walk on every
    /// comparison; ties keep the earlier position.
    fn extremum_index(&self, better: impl Fn(&T, &T) -> bool) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let mut best = 0;
        for (pos, value) in self.iter().enumerate() {
            if better(value, self.value_at(best)) {
                best = pos;
            }
        }
        Some(best)
    }

    /// First position in `from..limit` whose element is greater than the next one.
    fn next_inversion(&self, from: usize, limit: usize) -> Option<usize> {
        if from >= limit {
            return None;
        }
        let mut node = self.node_at(from);
        for pos in from..limit {
            let next = node.successor();
            if node.value > next.value {
                return Some(pos);
            }
            node = next;
        }
        None
    }
}

impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        let mut link = self.head.next.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.concat(iter);
    }
}

impl<T> Index<isize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: isize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<isize> for Sequence<T> {
    fn index_mut(&mut self, index: isize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (pos, value) in self.iter().enumerate() {
            if pos > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.node.value.as_ref()?;
        self.node = self.node.successor();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> core::iter::FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
