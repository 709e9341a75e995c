#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate dirheap;

use dirheap::collections::*;
use dirheap::collections::heap::slice;

fuzz_target!(|data: &[u8]| {
    if 0 == data.len() { return; }
    let dir = if data[0] & 1 == 0 { Direction::Min } else { Direction::Max };
    let data = &data[1..];
    let mut h = Heap::new(dir);
    // Model kept sorted so that its last element is the one to pop next.
    let mut model: Vec<u8> = Vec::new();
    for xs in data.windows(2) {
        let (c, x) = (xs[0], xs[1]);
        match c % 3 {
            0 => {
                h.push(x);
                let k = match dir {
                    Direction::Min => model.partition_point(|&y| y > x),
                    Direction::Max => model.partition_point(|&y| y < x),
                };
                model.insert(k, x);
            },
            1 => assert_eq!(h.extract_top().ok(), model.pop()),
            _ => assert_eq!(h.peek(), model.last()),
        }
        assert_eq!(h.len(), model.len());
        assert!(slice::is_heap(2, |a, b| dir.precedes(a, b), h.as_slice()));
    }
});
