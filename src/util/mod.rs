#[cfg(test)] mod abc;
#[cfg(test)] pub use self::abc::*;

#[inline] pub fn map_opt_2_or<A, B, C, F: Fn(A, B) -> C>(c: C, f: F, opt_a: Option<A>, opt_b: Option<B>) -> C {
    match (opt_a, opt_b) { (Some(a), Some(b)) => f(a, b), _ => c }
}

/// Index of the `k`th child of node `n` in an `arity`-ary heap.
#[inline] pub fn child(arity: usize, n: usize, k: usize) -> usize { arity*n + k + 1 }

/// Index of the parent of node `n`, which must not be the root.
#[inline] pub fn parent(arity: usize, n: usize) -> usize { (n-1)/arity }

#[cfg(test)] mod tests {
    use super::*;

    #[quickcheck] fn parent_of_child(arity: usize, n: usize, k: usize) -> quickcheck::TestResult {
        if arity < 2 || arity > 16 || n > 1 << 20 { return quickcheck::TestResult::discard() }
        let k = k % arity;
        quickcheck::TestResult::from_bool(parent(arity, child(arity, n, k)) == n)
    }

    #[test] fn map_opt_2_or_defaults_on_none() {
        assert!(map_opt_2_or(true, |a: u8, b: u8| a < b, None, Some(0)));
        assert!(!map_opt_2_or(true, |a: u8, b: u8| a < b, Some(1), Some(0)));
    }
}
