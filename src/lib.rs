//! Binary heaps whose ordering direction, min or max, is chosen at construction.
//!
//! ```
//! use dirheap::collections::{Direction, Heap};
//!
//! let mut h = Heap::new(Direction::Max);
//! for x in [5, 2, 8] { h.push(x) }
//! assert_eq!(h.peek(), Some(&8));
//! assert_eq!(h.extract_top(), Ok(8));
//! ```

#![no_std]

#![deny(missing_debug_implementations)]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;
#[cfg(test)]
extern crate std;

pub mod collections;

mod util;
