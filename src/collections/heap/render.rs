//! Read-only renderings of a heap

use alloc::string::String;
use core::fmt;

use super::Heap;

/// Displays a heap as a tree, one node per line, left child before right.
#[derive(Debug)]
pub struct Tree<'a, T>(pub(super) &'a Heap<T>);

/// Displays a heap as its backing array, in heap order.
#[derive(Debug)]
pub struct Array<'a, T>(pub(super) &'a Heap<T>);

impl<'a, T: fmt::Display> fmt::Display for Tree<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let &Tree(h) = self;
        if h.is_empty() { return f.write_str("Empty heap") }
        writeln!(f, "Heap as tree ({}):", h.direction())?;
        node(f, h.as_slice(), 0, &mut String::new(), true)
    }
}

impl<'a, T: fmt::Display> fmt::Display for Array<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let &Array(h) = self;
        if h.is_empty() { return f.write_str("Empty heap") }
        write!(f, "Heap as array ({}): [", h.direction())?;
        for (k, x) in h.as_slice().iter().enumerate() {
            if k > 0 { f.write_str(" ")? }
            write!(f, "{}", x)?;
        }
        f.write_str("]")
    }
}

// A left child is drawn as `last` only when it has no right sibling.
fn node<T: fmt::Display>(f: &mut fmt::Formatter, xs: &[T], n: usize, prefix: &mut String, last: bool) -> fmt::Result {
    if n >= xs.len() { return Ok(()) }
    writeln!(f, "{}{}{}", prefix, if last { "└── " } else { "┌── " }, xs[n])?;
    let l = prefix.len();
    prefix.push_str(if last { "    " } else { "│   " });
    let (a, b) = (2*n + 1, 2*n + 2);
    let has_b = b < xs.len();
    if a < xs.len() { node(f, xs, a, prefix, !has_b)? }
    if has_b { node(f, xs, b, prefix, true)? }
    prefix.truncate(l);
    Ok(())
}

#[cfg(test)] mod tests {
    use std::format;
    use std::vec::*;

    use super::super::*;

    #[test] fn empty_renders_placeholder() {
        let h = IntHeap::new_max();
        assert_eq!(format!("{}", h.tree()), "Empty heap");
        assert_eq!(format!("{}", h.array()), "Empty heap");
    }

    #[test] fn array_lists_heap_order() {
        let mut h = IntHeap::new_min();
        for &x in &[5, 2, 8] { h.push(x) }
        assert_eq!(format!("{}", h.array()), "Heap as array (min-heap): [2 5 8]");
    }

    #[test] fn tree_of_three() {
        let mut h = IntHeap::new_min();
        for &x in &[5, 2, 8] { h.push(x) }
        assert_eq!(format!("{}", h.tree()),
                   "Heap as tree (min-heap):\n\
                    └── 2\n    ┌── 5\n    └── 8\n");
    }

    #[test] fn tree_nests_prefixes() {
        let h = Heap::from_vec(Direction::Max, Vec::from(&[4, 3, 2, 1][..]));
        assert_eq!(h.as_slice(), &[4, 3, 2, 1]);
        assert_eq!(format!("{}", h.tree()),
                   "Heap as tree (max-heap):\n\
                    └── 4\n    ┌── 3\n    │   └── 1\n    └── 2\n");
    }

    #[test] fn rendering_leaves_heap_intact() {
        let mut h = IntHeap::new_max();
        for &x in &[1, 9, 4] { h.push(x) }
        let before = Vec::from(h.as_slice());
        let _ = format!("{}{}", h.tree(), h.array());
        assert_eq!(h.as_slice(), &before[..]);
    }
}
