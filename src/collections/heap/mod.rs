//! Heaps

pub mod slice;
mod render;

use alloc::vec::Vec;
use core::fmt;
use core::iter::FromIterator;
use log::*;

pub use self::render::{Array, Tree};

/// Number of children of each node; the heap is binary.
const ARITY: usize = 2;

/// Which end of the order sits at the root of a heap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Every element is `<=` its children, so the root is the least.
    Min,
    /// Every element is `>=` its children, so the root is the greatest.
    Max,
}

impl Direction {
    /// Whether `x` must be nearer to the root than `y`.
    #[inline] pub fn precedes<T: Ord + ?Sized>(self, x: &T, y: &T) -> bool {
        match self { Direction::Min => x < y, Direction::Max => x > y }
    }
}

impl Default for Direction {
    #[inline] fn default() -> Self { Direction::Min }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self { Direction::Min => "min-heap", Direction::Max => "max-heap" })
    }
}

/// Extraction from a heap with no elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyHeapError;

impl fmt::Display for EmptyHeapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str("heap is empty") }
}

impl core::error::Error for EmptyHeapError {}

/// Growable binary heap in terms of `Vec`
///
/// The root is the least element for a [`Direction::Min`] heap and the
/// greatest for a [`Direction::Max`] one. Equal elements leave in no
/// particular order.
#[derive(Clone, Debug)]
pub struct Heap<T> {
    direction: Direction,
    data: Vec<T>,
}

/// Heap of integers
pub type IntHeap = Heap<i64>;

impl<T> Heap<T> {
    /// Make a new empty heap.
    #[inline] pub fn new(direction: Direction) -> Self { Heap { direction, data: Vec::new() } }

    /// Make a new empty min-heap.
    #[inline] pub fn new_min() -> Self { Self::new(Direction::Min) }

    /// Make a new empty max-heap.
    #[inline] pub fn new_max() -> Self { Self::new(Direction::Max) }

    /// Return the direction the heap was made with.
    #[inline] pub fn direction(&self) -> Direction { self.direction }

    /// Return number of elements in heap.
    #[inline] pub fn len     (&self) -> usize { self.data.len() }

    /// Alias of [`len`](Self::len).
    #[inline] pub fn size    (&self) -> usize { self.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Return the elements in heap order: index 0 is the root and the children
    /// of `i` are at `2i+1` and `2i+2`.
    #[inline] pub fn as_slice(&self) -> &[T] { &self.data[..] }

    /// Return a reference to root element, or `None` if heap empty.
    #[inline] pub fn peek(&self) -> Option<&T> { self.data.first() }

    /// Return a copy of the root element, or the default value if heap empty.
    #[inline] pub fn peek_or_default(&self) -> T where T: Clone + Default {
        self.peek().cloned().unwrap_or_default()
    }

    /// Remove all elements, keeping the direction.
    #[inline] pub fn clear(&mut self) {
        trace!("clear {} of {} elements", self.direction, self.data.len());
        self.data.clear()
    }

    /// Return a `Vec` of elements of heap in unspecified order.
    #[inline] pub fn into_vec(self) -> Vec<T> { self.data }

    /// Display the heap as a tree, one node per line.
    #[inline] pub fn tree(&self) -> Tree<'_, T> { Tree(self) }

    /// Display the heap as its backing array.
    #[inline] pub fn array(&self) -> Array<'_, T> { Array(self) }

    fn components(&mut self) -> (Direction, &mut Vec<T>) { (self.direction, &mut self.data) }
}

impl<T: Ord> Heap<T> {
    /// Build a heap of the elements of `v`.
    #[inline] pub fn from_vec(direction: Direction, mut v: Vec<T>) -> Self {
        slice::build(ARITY, |a, b| direction.precedes(a, b), &mut v[..]);
        Heap { direction, data: v }
    }

    /// Push an element into the heap.
    #[inline] pub fn push(&mut self, x: T) {
        let (dir, data) = self.components();
        data.push(x);
        slice::sift_up(ARITY, |a, b| dir.precedes(a, b), &mut data[..]);
        trace!("push into {}: length {}", dir, data.len());
    }

    /// Pop the root element off the heap and return it; return `None` if heap empty.
    #[inline] pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            debug!("pop from empty {}", self.direction);
            return None;
        }
        let (dir, data) = self.components();
        slice::pop_root(ARITY, |a, b| dir.precedes(a, b), &mut data[..]);
        let x = data.pop();
        trace!("pop from {}: length {}", dir, data.len());
        x
    }

    /// Remove and return the root element.
    ///
    /// # Failures
    ///
    /// Returns `EmptyHeapError` if heap empty, leaving it empty.
    #[inline] pub fn extract_top(&mut self) -> Result<T, EmptyHeapError> { self.pop().ok_or(EmptyHeapError) }

    /// Return a `Vec` of elements of heap in the order they would be popped.
    #[inline] pub fn into_sorted_vec(self) -> Vec<T> {
        let Heap { direction, mut data } = self;
        slice::sort(ARITY, |a, b| direction.precedes(a, b), &mut data[..]);
        data.reverse();
        data
    }
}

impl<T> Default for Heap<T> {
    #[inline] fn default() -> Self { Self::new(Direction::default()) }
}

impl<T: Ord> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for x in iter { self.push(x) }
    }
}

/// Collects into a min-heap.
impl<T: Ord> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(Direction::Min, iter.into_iter().collect())
    }
}
