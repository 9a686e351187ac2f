//! Enumeration of set partitions as restricted growth strings.
//!
//! A set partition of `n` elements is represented as a sequence `a` of `n`
//! part indices such that `a[0] == 0` and each `a[i]` is at most one more
//! than the maximum of `a[..i]`. Elements `i` and `j` are in the same part
//! exactly when `a[i] == a[j]`, and the parts are numbered in order of
//! their first element.
//!
//! Sequences are enumerated in lexicographic order, from all zeros (one part)
//! up to `0, 1, ..., n - 1` (`n` singleton parts), using the algorithm from
//! TAoCP 7.2.1.5, Algorithm H. See
//! <http://www-cs-faculty.stanford.edu/~uno/fasc3b.ps.gz> page 27.
//!
//! To enumerate, call `increment()` until it returns `false` and look at
//! `get()` in between. The sequence is owned by the enumerator and rewritten
//! in place, so `get()` borrows it only until the next `increment()`. Use
//! `set_partitions` for an `Iterator` that copies each sequence out.

use arrayvec::ArrayVec;
use std::ops::Deref;

use crate::error::{Error, Result};

/// Observer notified by the set partition enumerators of every change of part
/// assignment, so that it can maintain the parts incrementally.
///
/// A no-op implementation is available for `()`; `VecBlocks` keeps the list of
/// element indices of each part.
pub trait Blocks : Default
{
    /// Reset to the one-part partition of `n` elements
    fn reset(&mut self, n: usize);

    /// Set the number of non-empty parts to `m`
    fn set_limit(&mut self, m: usize);

    /// Increment the number of non-empty parts
    fn inc_limit(&mut self);

    /// Notify addition of element `idx` to part `part`
    ///
    /// Elements are added to a part in increasing order.
    fn add(&mut self, idx: usize, part: usize);

    /// Notify removal of element `idx` from part `part`
    ///
    /// This is always the last element added to that part.
    fn remove(&mut self, idx: usize, part: usize);
}

impl Blocks for ()
{
    fn reset(&mut self, _: usize) {}
    fn set_limit(&mut self, _: usize) {}
    fn inc_limit(&mut self) {}
    fn add(&mut self, _: usize, _: usize) {}
    fn remove(&mut self, _: usize, _: usize) {}
}

/// Maintains the parts of a set partition as `Vec`s of element indices.
///
/// Pass this as the `Blocks` implementation to `SetPartitions` or
/// `SmallSetPartitions`.
#[derive(Clone, Debug, Default)]
pub struct VecBlocks
{
    blocks: Vec<Vec<usize>>,
    n: usize
}

impl VecBlocks
{
    /// Return the non-empty parts, each listing its elements in increasing order
    pub fn blocks(&self) -> &[Vec<usize>] {
        &self.blocks[..self.n]
    }

    fn enlarge(&mut self, new_n: usize)
    {
        if self.blocks.len() < new_n {
            self.blocks.resize_with(new_n, Vec::new);
        }
    }
}

impl Blocks for VecBlocks
{
    fn reset(&mut self, n: usize)
    {
        self.blocks.truncate(n);
        for s in self.blocks.iter_mut() {
            s.clear();
        }
        if n > 0 {
            self.enlarge(1);
            self.blocks[0].extend(0..n);
        }
        self.n = if n > 0 {1} else {0};
    }

    fn set_limit(&mut self, m: usize)
    {
        self.n = m;
    }

    fn inc_limit(&mut self)
    {
        self.n += 1;
    }

    fn add(&mut self, idx: usize, part: usize)
    {
        self.enlarge(part + 1);
        self.blocks[part].push(idx);
    }

    fn remove(&mut self, _: usize, part: usize)
    {
        self.blocks[part].pop();
    }
}

macro_rules! impl_set_partitions {
    ($SP:ident, $T:ty) => {
        impl<H: Blocks> $SP<H> {
            /// Returns the restricted growth string of the current partition
            pub fn get(&self) -> &[$T] {
                &self.a
            }

            /// Returns the size of the set being partitioned
            pub fn len(&self) -> usize {
                self.a.len()
            }

            /// Returns `true` if the set being partitioned is empty
            pub fn is_empty(&self) -> bool {
                self.a.is_empty()
            }

            /// Returns the number of non-empty parts of the current partition.
            ///
            /// This is 0 for the partition of the empty set.
            pub fn num_parts(&self) -> usize {
                if let Some(al) = self.a.last() {
                    if *al == self.m {
                        return self.m as usize + 1;
                    }
                }
                self.m as usize
            }

            /// Returns the observer maintaining the parts
            pub fn blocks(&self) -> &H {
                &self.h
            }

            /// Reset to the one-part partition
            pub fn reset(&mut self) {
                let n = self.a.len();
                for ai in self.a.iter_mut() {
                    *ai = 0;
                }
                for bi in self.b.iter_mut() {
                    *bi = 1;
                }
                self.m = if n > 1 {1} else {0};
                self.h.reset(n);
            }

            /// Move to the next partition in lexicographic order of restricted growth
            /// strings, returning `true`, or back to the one-part partition, returning `false`.
            #[inline]
            pub fn increment(&mut self) -> bool {
                let n = self.a.len();
                if let Some(al) = self.a.last_mut() {
                    if *al != self.m {
                        self.h.remove(n - 1, *al as usize);
                        *al += 1;
                        self.h.add(n - 1, *al as usize);
                        if *al == self.m {
                            self.h.inc_limit();
                        }
                        return true;
                    }
                } else {
                    return false;
                }

                self.increment_slowpath()
            }

            fn increment_slowpath(&mut self) -> bool {
                let n = self.len();
                if n <= 1 {
                    return false;
                }

                // a[0] is always 0 and b[0] always 1, so this stops at j == 0 at the latest
                let mut j = n - 2;
                while self.a[j] == self.b[j] {
                    j -= 1;
                }
                if j == 0 {
                    self.reset();
                    return false;
                }

                for k in ((j + 1)..n).rev() {
                    self.h.remove(k, self.a[k] as usize);
                }

                let m = {
                    let aj = &mut self.a[j];
                    self.h.remove(j, *aj as usize);
                    *aj += 1;
                    self.h.add(j, *aj as usize);
                    let bj = self.b[j];
                    if *aj == bj {bj + 1} else {bj}
                };
                j += 1;

                for k in j..n {
                    self.a[k] = 0;
                    self.h.add(k, 0);
                }
                for bi in &mut self.b[j..] {
                    *bi = m;
                }
                self.m = m;
                self.h.set_limit(self.m as usize);
                true
            }
        }

        impl<H: Blocks> Deref for $SP<H> {
            type Target = [$T];

            fn deref(&self) -> &[$T] {
                self.get()
            }
        }

        impl<H: Blocks> AsRef<[$T]> for $SP<H> {
            fn as_ref(&self) -> &[$T] {
                self.get()
            }
        }
    }
}

/// Enumerates the partitions of a set of arbitrary size, storing the
/// restricted growth string in a `Vec`.
///
/// For sets of at most 16 elements, `SmallSetPartitions` avoids the allocation.
#[derive(Debug, Clone)]
pub struct SetPartitions<H: Blocks = ()>
{
    a: Vec<usize>,
    b: Vec<usize>,
    m: usize,
    h: H
}

impl<H: Blocks> SetPartitions<H>
{
    /// Start at the one-part partition of a set of `n` elements
    pub fn with_size(n: usize) -> Self {
        let mut r = SetPartitions {
            a: vec![0; n],
            b: vec![1; n.saturating_sub(1)],
            m: if n > 1 {1} else {0},
            h: H::default()
        };
        r.h.reset(n);
        r
    }

    /// Returns the maximum set size supported by this type
    pub fn max_len() -> usize {usize::MAX}
}

impl_set_partitions!(SetPartitions, usize);

/// Capacity of `SmallSetPartitions`; larger sets have more than 2^32 partitions anyway.
pub const SMALL_CAPACITY: usize = 16;

/// Enumerates the partitions of a set of at most `SMALL_CAPACITY` elements,
/// storing the restricted growth string as `u8`s in an `ArrayVec`.
#[derive(Debug, Clone)]
pub struct SmallSetPartitions<H: Blocks = ()>
{
    a: ArrayVec<u8, SMALL_CAPACITY>,
    b: ArrayVec<u8, SMALL_CAPACITY>,
    m: u8,
    h: H
}

impl<H: Blocks> SmallSetPartitions<H>
{
    /// Start at the one-part partition of a set of `n` elements.
    ///
    /// Fails with `Error::CapacityExceeded` if `n` exceeds `SMALL_CAPACITY`.
    pub fn try_with_size(n: usize) -> Result<Self> {
        if n > SMALL_CAPACITY {
            return Err(Error::CapacityExceeded {len: n, capacity: SMALL_CAPACITY});
        }
        let mut r = SmallSetPartitions {
            a: (0..n).map(|_| 0).collect(),
            b: (1..n).map(|_| 1).collect(),
            m: if n > 1 {1} else {0},
            h: H::default()
        };
        r.h.reset(n);
        Ok(r)
    }

    /// Returns the maximum set size supported by this type
    pub fn max_len() -> usize {SMALL_CAPACITY}
}

impl_set_partitions!(SmallSetPartitions, u8);

/// Iterator over all partitions of a set of `n` elements, returned by `set_partitions`.
///
/// Each item is the number of parts and a copy of the restricted growth string.
#[derive(Debug, Clone)]
pub struct SetPartitionsIter
{
    sp: SetPartitions,
    first: bool,
    done: bool
}

impl Iterator for SetPartitionsIter
{
    type Item = (usize, Vec<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
        } else if !self.sp.increment() {
            self.done = true;
            return None;
        }
        Some((self.sp.num_parts(), self.sp.get().to_vec()))
    }
}

/// Iterate over the partitions of a set of `n` elements in lexicographic
/// order of their restricted growth strings.
///
/// The first item is `(1, [0; n])` and the last `(n, [0, 1, ..., n - 1])`;
/// for `n == 0` the only item is `(0, [])`. Use `SetPartitions` directly to
/// avoid copying each string.
pub fn set_partitions(n: usize) -> SetPartitionsIter
{
    SetPartitionsIter {sp: SetPartitions::with_size(n), first: true, done: false}
}

/// Checks if a sequence is a restricted growth string.
pub fn is_rgs(seq: &[usize]) -> bool
{
    let mut m = 0;
    for &ai in seq {
        if ai > m {
            return false;
        }
        if ai == m {
            m += 1;
        }
    }
    true
}

/// Split `seq` into the parts described by the restricted growth string `rgs`.
///
/// Element `seq[i]` goes to part `rgs[i]`; within a part elements keep their
/// order in `seq`.
///
/// ```
/// use multiset_combinatorics::partition_from_rgs;
///
/// let parts = partition_from_rgs(&['a', 'b', 'c', 'd'], &[0, 1, 0, 2]).unwrap();
/// assert_eq!(parts, vec![vec!['a', 'c'], vec!['b'], vec!['d']]);
/// ```
pub fn partition_from_rgs<T: Clone>(seq: &[T], rgs: &[usize]) -> Result<Vec<Vec<T>>>
{
    if seq.len() != rgs.len() {
        return Err(Error::LengthMismatch {expected: seq.len(), found: rgs.len()});
    }
    if !is_rgs(rgs) {
        return Err(Error::InvalidRgs);
    }
    let m = rgs.iter().max().map_or(0, |x| x + 1);
    let mut parts = vec![Vec::new(); m];
    for (x, &i) in seq.iter().zip(rgs) {
        parts[i].push(x.clone());
    }
    Ok(parts)
}

// for enumeration it's required and sufficient to test that we are enumerating all restricted growth sequences of length n in lexicographic order
#[cfg(test)]
mod tests {
    use super::{Blocks, VecBlocks};

    macro_rules! test {
        ($T:ty, $new:expr) => {
            fn range(n: usize) -> ::std::ops::Range<usize> {
                0..::std::cmp::min(n, <$T>::max_len().saturating_add(1))
            }

            fn digits(s: &$T) -> Vec<usize> {
                s.get().iter().map(|x| *x as usize).collect()
            }

            #[test]
            fn blocks() {
                for n in range(9) {
                    let mut s = $new(n);

                    loop {
                        check_blocks(&digits(&s), s.blocks());
                        if !s.increment() {break;}
                    }
                    check_blocks(&digits(&s), s.blocks());
                }
            }

            #[test]
            fn zeroes() {
                for n in range(12) {
                    let mut s = $new(n);

                    assert_eq!(s.len(), n);
                    assert!(digits(&s).iter().all(|x| *x == 0));

                    loop {
                        if !s.increment() {break;}
                    }

                    assert_eq!(s.len(), n);
                    assert!(digits(&s).iter().all(|x| *x == 0));
                }
            }

            #[test]
            fn lexicographic() {
                for n in range(10) {
                    let mut s = $new(n);
                    let mut last: Option<Vec<usize>> = None;
                    loop {
                        let cur = digits(&s);
                        if let Some(last) = &last {
                            assert!(*last < cur);
                        }
                        last = Some(cur);

                        if !s.increment() {break;}
                    }
                    if n > 0 {
                        assert_eq!(last, Some((0..n).collect()));
                    }
                }
            }

            #[test]
            fn restricted_growth_of_len_n() {
                for n in range(11) {
                    let mut s = $new(n);

                    loop {
                        let a = digits(&s);
                        assert_eq!(a.len(), n);
                        assert!(crate::is_rgs(&a));
                        assert_eq!(s.num_parts(), a.iter().max().map_or(0, |x| x + 1));

                        if !s.increment() {break;}
                    }
                }
            }

            #[test]
            fn all() {
                for n in range(12) {
                    let mut s = $new(n);
                    let mut i = 0;
                    loop {
                        i += 1;
                        if !s.increment() {break;}
                    }

                    assert_eq!(Some(i), crate::bell(s.len()));
                }
            }

            #[test]
            fn stirling_buckets() {
                for n in range(10) {
                    let mut s = $new(n);
                    let mut buckets = vec![0u64; n + 1];
                    loop {
                        buckets[s.num_parts()] += 1;
                        if !s.increment() {break;}
                    }

                    for (k, count) in buckets.into_iter().enumerate() {
                        assert_eq!(Some(count), crate::stirling2(n, k));
                    }
                }
            }

            #[test]
            fn reset() {
                for n in range(9) {
                    let mut s = $new(n);
                    let new = $new(n);
                    loop {
                        let mut r = s.clone();
                        r.reset();
                        assert_eq!((&new.a, &new.b, &new.m), (&r.a, &r.b, &r.m));
                        check_blocks(&digits(&r), r.blocks());
                        if !s.increment() {break;}
                    }
                }
            }
        }
    }

    fn compute_blocks(s: &[usize]) -> Vec<Vec<usize>> {
        let mut r = vec![Vec::new(); s.len()];
        for (idx, &i) in s.iter().enumerate() {
            r[i].push(idx);
        }
        while r.last().map_or(false, |last| last.is_empty()) {
            r.pop();
        }
        r
    }

    mod noblocks {
        fn check_blocks(_: &[usize], _: &()) {}

        mod vec {
            use super::check_blocks;
            test!(crate::SetPartitions, crate::SetPartitions::<()>::with_size);
        }

        mod small {
            use super::check_blocks;
            fn new(n: usize) -> crate::SmallSetPartitions {
                crate::SmallSetPartitions::try_with_size(n).unwrap()
            }
            test!(crate::SmallSetPartitions, new);
        }
    }

    mod vecblocks {
        fn check_blocks(s: &[usize], h: &crate::VecBlocks) {
            assert_eq!(h.blocks(), &*super::compute_blocks(s));
        }

        mod vec {
            use super::check_blocks;
            test!(crate::SetPartitions<crate::VecBlocks>, crate::SetPartitions::<crate::VecBlocks>::with_size);
        }

        mod small {
            use super::check_blocks;
            fn new(n: usize) -> crate::SmallSetPartitions<crate::VecBlocks> {
                crate::SmallSetPartitions::try_with_size(n).unwrap()
            }
            test!(crate::SmallSetPartitions<crate::VecBlocks>, new);
        }
    }

    #[test]
    fn vec_blocks_reset() {
        let mut h = VecBlocks::default();
        h.reset(3);
        assert_eq!(h.blocks(), &[vec![0, 1, 2]]);
        h.reset(0);
        assert!(h.blocks().is_empty());
    }

    #[test]
    fn small_capacity() {
        assert!(crate::SmallSetPartitions::<()>::try_with_size(16).is_ok());
        assert_eq!(
            crate::SmallSetPartitions::<()>::try_with_size(17).unwrap_err(),
            crate::Error::CapacityExceeded {len: 17, capacity: 16}
        );
    }

    #[test]
    fn iterator() {
        let all: Vec<_> = crate::set_partitions(3).collect();
        assert_eq!(all, vec![
            (1, vec![0, 0, 0]),
            (2, vec![0, 0, 1]),
            (2, vec![0, 1, 0]),
            (2, vec![0, 1, 1]),
            (3, vec![0, 1, 2]),
        ]);

        assert_eq!(crate::set_partitions(0).collect::<Vec<_>>(), vec![(0, vec![])]);
        assert_eq!(crate::set_partitions(1).collect::<Vec<_>>(), vec![(1, vec![0])]);
    }

    #[test]
    fn is_rgs() {
        assert!(crate::is_rgs(&[]));
        assert!(crate::is_rgs(&[0, 1, 0, 2, 1]));
        assert!(!crate::is_rgs(&[1]));
        assert!(!crate::is_rgs(&[0, 2]));
        assert!(!crate::is_rgs(&[0, 1, 3]));
    }

    #[test]
    fn partition_from_rgs() {
        let parts = crate::partition_from_rgs(&['a', 'b', 'c', 'd', 'e'], &[0, 1, 0, 2, 1]).unwrap();
        assert_eq!(parts, vec![vec!['a', 'c'], vec!['b', 'e'], vec!['d']]);

        assert_eq!(
            crate::partition_from_rgs(&['a', 'b'], &[0]),
            Err(crate::Error::LengthMismatch {expected: 2, found: 1})
        );
        assert_eq!(crate::partition_from_rgs(&['a', 'b'], &[0, 2]), Err(crate::Error::InvalidRgs));
        assert_eq!(crate::partition_from_rgs::<char>(&[], &[]), Ok(vec![]));
    }
}
