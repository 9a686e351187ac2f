//! Partitions of a multiset into sub-multisets.
//!
//! Elements that compare equal are interchangeable, so two partitions that
//! only differ by which copy of a value went to which part are the same
//! partition and are produced once. Three strategies are used:
//!
//! - all elements distinct: every restricted growth string over the element
//!   positions is a different partition;
//! - all elements equal: only the part sizes matter, which is an integer
//!   partition of the number of elements;
//! - otherwise: restricted growth strings over the positions, skipping any
//!   whose canonical key (each position replaced by the first position
//!   holding an equal value, parts sorted) was already produced.

use ahash::AHashSet;
use log::debug;

use crate::integer::IntegerPartitions;
use crate::multiset::Multiset;
use crate::rgs::{SetPartitions, VecBlocks};

#[derive(Debug, Clone)]
struct Rgs
{
    sp: SetPartitions<VecBlocks>,
    first: bool
}

impl Rgs
{
    fn new(n: usize) -> Self {
        Rgs {sp: SetPartitions::with_size(n), first: true}
    }

    fn advance(&mut self) -> bool {
        if self.first {
            self.first = false;
            true
        } else {
            self.sp.increment()
        }
    }

    fn blocks(&self) -> &[Vec<usize>] {
        self.sp.blocks().blocks()
    }
}

#[derive(Debug, Clone)]
enum Strategy
{
    Done,
    Whole,
    Distinct(Rgs),
    Mixed(Rgs, AHashSet<Vec<Vec<usize>>>),
    Uniform(IntegerPartitions)
}

/// Iterator over the distinct partitions of a multiset.
///
/// Each partition is a `Vec` of non-empty parts. Parts list the elements in
/// group order of the multiset, and partitions come in a canonical order that
/// only depends on the multiset, not on the order of the input.
#[derive(Debug, Clone)]
pub struct MultisetPartitions<T>
{
    items: Vec<T>,
    canon: Vec<usize>,
    exact_parts: Option<usize>,
    strategy: Strategy
}

impl<T: Clone> MultisetPartitions<T>
{
    /// Enumerate the partitions of `multiset`, only those with exactly
    /// `exact_parts` parts if given.
    ///
    /// Asking for more parts than elements gives no partitions. The empty
    /// multiset has a single partition, with no parts.
    pub fn new(multiset: Multiset<T>, exact_parts: Option<usize>) -> Self {
        let n = multiset.len();
        let items = multiset.expand();

        let mut canon = Vec::with_capacity(n);
        for c in multiset.counts() {
            let first = canon.len();
            canon.extend(std::iter::repeat(first).take(c));
        }

        let strategy = match exact_parts {
            Some(m) if m > n => Strategy::Done,
            _ if n == 0 => Strategy::Whole,
            Some(0) => Strategy::Done,
            Some(1) => Strategy::Whole,
            _ if !multiset.has_variety() => Strategy::Uniform(IntegerPartitions::new(n, exact_parts, None)),
            _ if multiset.distinct() == n => Strategy::Distinct(Rgs::new(n)),
            _ => Strategy::Mixed(Rgs::new(n), AHashSet::new())
        };
        debug!(
            "partitions of a multiset of {} elements ({} distinct) into {:?} parts: {}",
            n,
            multiset.distinct(),
            exact_parts,
            match &strategy {
                Strategy::Done => "none",
                Strategy::Whole => "whole",
                Strategy::Distinct(_) => "set partitions",
                Strategy::Mixed(..) => "deduplicated set partitions",
                Strategy::Uniform(_) => "integer partitions"
            }
        );

        MultisetPartitions {items, canon, exact_parts, strategy}
    }
}

fn values<T: Clone>(items: &[T], blocks: &[Vec<usize>]) -> Vec<Vec<T>>
{
    blocks.iter()
        .map(|b| b.iter().map(|&i| items[i].clone()).collect())
        .collect()
}

impl<T: Clone> Iterator for MultisetPartitions<T>
{
    type Item = Vec<Vec<T>>;

    fn next(&mut self) -> Option<Vec<Vec<T>>> {
        let MultisetPartitions {items, canon, exact_parts, strategy} = self;
        let exact_parts = *exact_parts;
        let wanted = |parts: usize| exact_parts.map_or(true, |m| m == parts);

        loop {
            match strategy {
                Strategy::Done => return None,
                Strategy::Whole => {
                    *strategy = Strategy::Done;
                    if items.is_empty() {
                        return Some(Vec::new());
                    }
                    return Some(vec![items.clone()]);
                }
                Strategy::Uniform(parts) => {
                    let p = parts.advance()?;
                    if !wanted(p.num_parts()) {
                        continue;
                    }
                    // smallest parts first
                    let x = &items[0];
                    return Some(p.iter().rev()
                        .flat_map(|(size, count)| std::iter::repeat(size).take(count))
                        .map(|size| vec![x.clone(); size])
                        .collect());
                }
                Strategy::Distinct(rgs) => {
                    if !rgs.advance() {
                        *strategy = Strategy::Done;
                        continue;
                    }
                    let blocks = rgs.blocks();
                    if wanted(blocks.len()) {
                        return Some(values(items, blocks));
                    }
                }
                Strategy::Mixed(rgs, seen) => {
                    if !rgs.advance() {
                        *strategy = Strategy::Done;
                        continue;
                    }
                    let blocks = rgs.blocks();
                    if !wanted(blocks.len()) {
                        continue;
                    }
                    let mut key: Vec<Vec<usize>> = blocks.iter()
                        .map(|b| b.iter().map(|&i| canon[i]).collect())
                        .collect();
                    key.sort_unstable();
                    if seen.insert(key) {
                        return Some(values(items, blocks));
                    }
                }
            }
        }
    }
}

/// Enumerate the distinct partitions of the multiset of `items`, only those
/// with exactly `exact_parts` parts if given.
///
/// ```
/// use multiset_combinatorics::multiset_partitions;
///
/// let all: Vec<_> = multiset_partitions(&[1, 1, 2], None).collect();
/// assert_eq!(all, vec![
///     vec![vec![1, 1, 2]],
///     vec![vec![1, 1], vec![2]],
///     vec![vec![1, 2], vec![1]],
///     vec![vec![1], vec![1], vec![2]],
/// ]);
/// ```
pub fn multiset_partitions<T: Ord + Clone>(items: &[T], exact_parts: Option<usize>) -> MultisetPartitions<T>
{
    MultisetPartitions::new(Multiset::from_ord(items.iter().cloned()), exact_parts)
}

/// Enumerate the partitions of the set `{0, 1, ..., n - 1}`, only those with
/// exactly `exact_parts` parts if given.
pub fn range_partitions(n: usize, exact_parts: Option<usize>) -> MultisetPartitions<usize>
{
    MultisetPartitions::new(Multiset::from_ord(0..n), exact_parts)
}

#[cfg(test)]
mod tests {
    use super::{multiset_partitions, range_partitions, MultisetPartitions};
    use crate::Multiset;
    use std::collections::BTreeSet;

    fn normalized<T: Ord + Clone>(p: &[Vec<T>]) -> Vec<Vec<T>> {
        let mut p: Vec<Vec<T>> = p.iter().map(|part| {
            let mut part = part.clone();
            part.sort();
            part
        }).collect();
        p.sort();
        p
    }

    // every distinct partition, found by brute force over all set partitions of the positions
    fn brute_force<T: Ord + Clone>(items: &[T], exact_parts: Option<usize>) -> BTreeSet<Vec<Vec<T>>> {
        range_partitions(items.len(), exact_parts)
            .map(|p| {
                let parts: Vec<Vec<T>> = p.iter().map(|b| b.iter().map(|&i| items[i].clone()).collect()).collect();
                normalized(&parts)
            })
            .collect()
    }

    #[test]
    fn repeated_element() {
        let all: Vec<_> = multiset_partitions(&[1, 1, 2], None).collect();
        assert_eq!(all, vec![
            vec![vec![1, 1, 2]],
            vec![vec![1, 1], vec![2]],
            vec![vec![1, 2], vec![1]],
            vec![vec![1], vec![1], vec![2]],
        ]);

        let two: Vec<_> = multiset_partitions(&[2, 1, 1], Some(2)).collect();
        assert_eq!(two, vec![vec![vec![1, 1], vec![2]], vec![vec![1, 2], vec![1]]]);
    }

    #[test]
    fn distinct_elements() {
        let two: Vec<_> = multiset_partitions(&[1, 2, 3, 4], Some(2)).collect();
        assert_eq!(two, vec![
            vec![vec![1, 2, 3], vec![4]],
            vec![vec![1, 2, 4], vec![3]],
            vec![vec![1, 2], vec![3, 4]],
            vec![vec![1, 3, 4], vec![2]],
            vec![vec![1, 3], vec![2, 4]],
            vec![vec![1, 4], vec![2, 3]],
            vec![vec![1], vec![2, 3, 4]],
        ]);

        let one: Vec<_> = multiset_partitions(&[1, 2, 3, 4], Some(1)).collect();
        assert_eq!(one, vec![vec![vec![1, 2, 3, 4]]]);
    }

    #[test]
    fn identical_elements() {
        let all: Vec<_> = multiset_partitions(&[1, 1, 1], None).collect();
        assert_eq!(all, vec![
            vec![vec![1, 1, 1]],
            vec![vec![1], vec![1, 1]],
            vec![vec![1], vec![1], vec![1]],
        ]);

        let two: Vec<_> = multiset_partitions(&['x'; 6], Some(2)).collect();
        assert_eq!(two, vec![
            vec![vec!['x'], vec!['x'; 5]],
            vec![vec!['x'; 2], vec!['x'; 4]],
            vec![vec!['x'; 3], vec!['x'; 3]],
        ]);
    }

    #[test]
    fn input_order_does_not_matter() {
        let a: Vec<_> = multiset_partitions(&[1, 2, 2, 1], Some(2)).collect();
        let b: Vec<_> = multiset_partitions(&[1, 1, 2, 2], Some(2)).collect();
        assert_eq!(a, b);

        let c: Vec<_> = multiset_partitions(&[3, 2], None).collect();
        let d: Vec<_> = multiset_partitions(&[2, 3], None).collect();
        assert_eq!(c, d);
    }

    #[test]
    fn bell_and_stirling() {
        for n in 0..8 {
            assert_eq!(Some(range_partitions(n, None).count() as u64), crate::bell(n));
            for k in 0..=n + 1 {
                assert_eq!(Some(range_partitions(n, Some(k)).count() as u64), crate::stirling2(n, k));
            }
        }
        assert_eq!(range_partitions(5, None).count(), 52);
        assert_eq!(range_partitions(5, Some(2)).count(), 15);
    }

    #[test]
    fn too_many_parts() {
        assert_eq!(multiset_partitions(&[1, 1, 2], Some(4)).count(), 0);
        assert_eq!(multiset_partitions(&[1, 1, 1], Some(4)).count(), 0);
        assert_eq!(range_partitions(3, Some(4)).count(), 0);
        assert_eq!(multiset_partitions(&[1, 2], Some(0)).count(), 0);
    }

    #[test]
    fn empty() {
        let all: Vec<Vec<Vec<u8>>> = multiset_partitions(&[], None).collect();
        assert_eq!(all, vec![Vec::<Vec<u8>>::new()]);
        assert_eq!(multiset_partitions::<u8>(&[], Some(0)).count(), 1);
        assert_eq!(multiset_partitions::<u8>(&[], Some(1)).count(), 0);
    }

    #[test]
    fn exactly_once() {
        let inputs: [&[char]; 6] = [
            &['a', 'a', 'b', 'b'],
            &['a', 'a', 'b', 'b', 'c'],
            &['a', 'a', 'a', 'b'],
            &['a', 'b', 'c', 'd'],
            &['a', 'b', 'a', 'c', 'a'],
            &['c', 'a', 'b', 'b', 'a', 'c'],
        ];
        for items in inputs.iter() {
            let mut sorted = items.to_vec();
            sorted.sort();
            for m in [None, Some(1), Some(2), Some(3), Some(4)] {
                let mut seen = BTreeSet::new();
                for p in multiset_partitions(items, m) {
                    assert!(p.iter().all(|part| !part.is_empty()));
                    if let Some(m) = m {
                        assert_eq!(p.len(), m);
                    }
                    let mut union: Vec<char> = p.iter().flatten().copied().collect();
                    union.sort();
                    assert_eq!(union, sorted);
                    assert!(seen.insert(normalized(&p)), "{:?} produced twice", p);
                }
                assert_eq!(seen, brute_force(items, m));
            }
        }
    }

    #[test]
    fn counts() {
        assert_eq!(multiset_partitions(&['a', 'a', 'b', 'b'], None).count(), 9);
        assert_eq!(multiset_partitions(&['a', 'a', 'b', 'b', 'c'], None).count(), 26);
    }

    #[test]
    fn equality_only_elements() {
        let ms = Multiset::from_eq(vec![0.5, 1.5, 0.5]);
        let all: Vec<_> = MultisetPartitions::new(ms, None).collect();
        assert_eq!(all, vec![
            vec![vec![0.5, 0.5, 1.5]],
            vec![vec![0.5, 0.5], vec![1.5]],
            vec![vec![0.5, 1.5], vec![0.5]],
            vec![vec![0.5], vec![0.5], vec![1.5]],
        ]);
    }

    #[test]
    fn from_counts() {
        let ms = Multiset::from_counts(vec![("b", 1), ("a", 2)]);
        let all: Vec<_> = MultisetPartitions::new(ms, Some(2)).collect();
        assert_eq!(all, vec![
            vec![vec!["a", "a"], vec!["b"]],
            vec![vec!["a", "b"], vec!["a"]],
        ]);
    }
}
