//! Heap operations on slices
//!
//! Every function takes the arity of the heap and a predicate `f`, where
//! `f(x,y)` is whether `x` must be nearer to the root than `y`. A min-heap
//! passes `<`, a max-heap `>`.

use crate::util::*;

/// Given a slice `xs` which is all but the last element already a heap, extend
/// the heap to include the last element.
/// `xs` being empty is an error.
#[inline] pub fn sift_up<A, F: Fn(&A, &A) -> bool>(arity: usize, f: F, xs: &mut [A]) {
    assert!(!xs.is_empty());
    let mut n = xs.len() - 1;
    while n > 0 {
        let m = parent(arity, n);
        if !f(&xs[n], &xs[m]) { return };
        xs.swap(m, n);
        n = m;
    }
}

/// Given a slice `xs` which is already a heap, move the root to the end of the
/// slice and retract the heap to exclude it.
/// `xs` being empty is an error.
#[inline] pub fn pop_root<A, F: Fn(&A, &A) -> bool>(arity: usize, f: F, xs: &mut [A]) {
    assert!(!xs.is_empty());
    let l = xs.len() - 1;
    xs.swap(0, l);
    sift_down(arity, f, &mut xs[0..l], 0);
}

/// Make `xs` a heap.
#[inline] pub fn build<A, F: Fn(&A, &A) -> bool>(arity: usize, f: F, xs: &mut [A]) {
    if xs.len() <= 1 { return };
    for k in (0..=parent(arity, xs.len() - 1)).rev() { sift_down(arity, &f, xs, k) }
}

/// Given a slice `xs` which is already a heap, sort it so that the element
/// nearest the root comes last.
#[inline] pub fn sort<A, F: Fn(&A, &A) -> bool>(arity: usize, f: F, xs: &mut [A]) {
    for l in (1..xs.len()).rev() {
        // l+1 rather than l here lest we miss last element, as we have 2 half-open ranges
        pop_root(arity, &f, &mut xs[0..l+1]);
    }
}

/// Move the element at `m` away from the root until it no longer violates
/// order with any of its children.
#[inline] pub fn sift_down<A, F: Fn(&A, &A) -> bool>(arity: usize, f: F, xs: &mut [A], mut m: usize) {
    let g: &dyn Fn(Option<&A>, Option<&A>) -> bool = &|opt_x, opt_y| map_opt_2_or(false, &f, opt_x, opt_y);
    loop {
        if m >= xs.len() { return };
        let n = {
            let mut n = m;
            for k in (0..arity).map(|k| child(arity, m, k)) { if g(xs.get(k), Some(&xs[n])) { n = k } }
            n
        };
        if m == n { return };
        xs.swap(m, n);
        m = n;
    }
}

/// Whether no element of `xs` must be nearer to the root than its parent.
#[inline] pub fn is_heap<A, F: Fn(&A, &A) -> bool>(arity: usize, f: F, xs: &[A]) -> bool {
    (1..xs.len()).all(|n| !f(&xs[n], &xs[parent(arity, n)]))
}
