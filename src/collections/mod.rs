//! Collection types

pub mod heap;

pub use self::heap::{Direction, EmptyHeapError, Heap, IntHeap};
