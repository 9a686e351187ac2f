//! Permutations of a multiset, and the derangement and involution filters
//! built on them.
//!
//! Permutations are listed in lexicographic order of the group indices they
//! use. When every element is distinct the work is handed to `itertools`;
//! otherwise a backtracking search over the remaining multiplicities is
//! suspended between results, so each one is produced lazily.

use itertools::structs::Permutations;
use itertools::Itertools;
use log::debug;
use std::ops::Range;

use crate::multiset::Multiset;

#[derive(Debug, Clone)]
struct Backtrack
{
    // copies of each group not used by `path`
    counts: Vec<usize>,
    path: Vec<usize>,
    size: usize,
    first: bool
}

impl Backtrack
{
    fn new(counts: Vec<usize>, size: usize) -> Self {
        let mut r = Backtrack {counts, path: Vec::with_capacity(size), size, first: true};
        r.fill();
        r
    }

    // extend the path with the smallest group still available
    fn fill(&mut self) {
        while self.path.len() < self.size {
            match self.counts.iter().position(|&c| c > 0) {
                Some(g) => {
                    self.counts[g] -= 1;
                    self.path.push(g);
                }
                None => return
            }
        }
    }

    fn advance(&mut self) -> Option<&[usize]> {
        if self.first {
            self.first = false;
            return Some(&self.path);
        }
        while let Some(g) = self.path.pop() {
            self.counts[g] += 1;
            if let Some(h) = (g + 1..self.counts.len()).find(|&h| self.counts[h] > 0) {
                self.counts[h] -= 1;
                self.path.push(h);
                self.fill();
                return Some(&self.path);
            }
        }
        None
    }
}

#[derive(Debug, Clone)]
enum Engine
{
    Done,
    Once,
    Distinct(Permutations<Range<usize>>),
    Backtrack(Backtrack)
}

/// Iterator over the distinct permutations of a multiset, or of its
/// sub-multisets of a given size.
#[derive(Debug, Clone)]
pub struct MultisetPermutations<T>
{
    values: Vec<T>,
    engine: Engine
}

impl<T> MultisetPermutations<T>
{
    /// Enumerate the distinct arrangements of `size` elements of `multiset`;
    /// all of them when `size` is `None`.
    ///
    /// A size larger than the multiset gives nothing, while a size of zero
    /// (or an empty multiset) gives a single empty permutation.
    pub fn new(multiset: Multiset<T>, size: Option<usize>) -> Self {
        let total = multiset.len();
        let size = size.unwrap_or(total);
        let (values, counts): (Vec<T>, Vec<usize>) = multiset.into_groups().into_iter().unzip();

        let engine = if size > total {
            Engine::Done
        } else if size == 0 {
            Engine::Once
        } else if values.len() == total {
            Engine::Distinct((0..total).permutations(size))
        } else {
            Engine::Backtrack(Backtrack::new(counts, size))
        };
        debug!("permutations of {} of {} elements in {} groups: {}",
            size, total, values.len(), engine_name(&engine));
        MultisetPermutations {values, engine}
    }
}

fn engine_name(engine: &Engine) -> &'static str
{
    match engine {
        Engine::Done => "none",
        Engine::Once => "empty",
        Engine::Distinct(_) => "distinct",
        Engine::Backtrack(_) => "backtrack"
    }
}

impl<T: Clone> Iterator for MultisetPermutations<T>
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if let Engine::Once = self.engine {
            self.engine = Engine::Done;
            return Some(Vec::new());
        }
        let values = &self.values;
        match &mut self.engine {
            Engine::Done | Engine::Once => None,
            Engine::Distinct(perms) => perms.next()
                .map(|p| p.into_iter().map(|g| values[g].clone()).collect()),
            Engine::Backtrack(bt) => bt.advance()
                .map(|p| p.iter().map(|&g| values[g].clone()).collect())
        }
    }
}

/// Enumerate the distinct permutations of `size` elements of `items`
/// (all of them when `size` is `None`), in lexicographic order.
///
/// ```
/// use multiset_combinatorics::multiset_permutations;
///
/// let perms: Vec<String> = multiset_permutations(&['a', 'b', 'a'], None)
///     .map(|p| p.into_iter().collect())
///     .collect();
/// assert_eq!(perms, vec!["aab", "aba", "baa"]);
/// ```
pub fn multiset_permutations<T: Ord + Clone>(items: &[T], size: Option<usize>) -> MultisetPermutations<T>
{
    MultisetPermutations::new(Multiset::from_ord(items.iter().cloned()), size)
}

/// Enumerate the permutations of `items` that leave no element where it is
/// in the sorted sequence.
///
/// With repeated elements, a position may not receive any copy of the value
/// it holds in sorted order.
pub fn derangements<T: Ord + Clone>(items: &[T]) -> impl Iterator<Item = Vec<T>>
{
    let mut sorted = items.to_vec();
    sorted.sort();
    multiset_permutations(&sorted, None)
        .filter(move |p| p.iter().zip(&sorted).all(|(a, b)| a != b))
}

/// Enumerate the permutations of `0..n` that are their own inverse, in
/// lexicographic order.
pub fn involutions(n: usize) -> impl Iterator<Item = Vec<usize>>
{
    let identity: Vec<usize> = (0..n).collect();
    multiset_permutations(&identity, None)
        .filter(|p| p.iter().enumerate().all(|(i, &j)| p[j] == i))
}
