//! Array-style sequence stored in a singly linked chain of nodes.
//!
//! [`Sequence`] supports positional reads and writes (including negative
//! indices), insertion, deletion, swaps and stepped slices. Every positional
//! access walks the chain from its head. On top of that it offers order
//! queries and an in-place bubble sort. The [`sweep`] module times that sort
//! over sorted, mostly sorted and shuffled inputs.

mod errors;
mod node;
mod sequence;
mod slice;
pub mod sweep;

pub use errors::{Result, SequenceError};
pub use sequence::{Iter, Sequence};
