//! Combinations of a multiset.
//!
//! A combination is described by how many copies of each group it takes. The
//! count vectors are stepped through in lexicographically decreasing order,
//! which lists the combinations, written out in group order, in increasing
//! lexicographic order: as many copies of the first group as possible come
//! first.

use crate::multiset::Multiset;

/// Iterator over the distinct combinations of a given size of a multiset.
///
/// Each combination lists its elements in group order.
#[derive(Debug, Clone)]
pub struct MultisetCombinations<T>
{
    values: Vec<T>,
    avail: Vec<usize>,
    // suffix[i] is the number of elements in groups i..
    suffix: Vec<usize>,
    counts: Vec<usize>,
    first: bool,
    done: bool
}

impl<T> MultisetCombinations<T>
{
    /// Enumerate the combinations of `n` elements of `multiset`.
    ///
    /// There are none if `n` exceeds the size of the multiset; `n == 0` gives a
    /// single empty combination.
    pub fn new(multiset: Multiset<T>, n: usize) -> Self {
        let (values, avail): (Vec<T>, Vec<usize>) = multiset.into_groups().into_iter().unzip();
        let mut suffix = vec![0; avail.len() + 1];
        for i in (0..avail.len()).rev() {
            suffix[i] = suffix[i + 1] + avail[i];
        }
        let mut r = MultisetCombinations {
            counts: vec![0; avail.len()],
            done: n > suffix[0],
            values,
            avail,
            suffix,
            first: true
        };
        if !r.done {
            r.fill(0, n);
        }
        r
    }

    // take `rem` elements from groups `start..`, as early as possible
    fn fill(&mut self, start: usize, mut rem: usize) {
        for i in start..self.counts.len() {
            self.counts[i] = self.avail[i].min(rem);
            rem -= self.counts[i];
        }
    }

    /// Move to the next combination, returning `false` once they are exhausted
    fn step(&mut self) -> bool {
        let mut tail = 0;
        for j in (0..self.counts.len()).rev() {
            if self.counts[j] > 0 && tail < self.suffix[j + 1] {
                self.counts[j] -= 1;
                self.fill(j + 1, tail + 1);
                return true;
            }
            tail += self.counts[j];
        }
        false
    }

    /// Returns how many copies of each group the current combination takes
    pub fn taken(&self) -> &[usize] {
        &self.counts
    }
}

impl<T: Clone> Iterator for MultisetCombinations<T>
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
        } else if !self.step() {
            self.done = true;
            return None;
        }
        Some(self.values.iter()
            .zip(&self.counts)
            .flat_map(|(v, &c)| std::iter::repeat(v).take(c).cloned())
            .collect())
    }
}

/// Enumerate the distinct combinations of `n` elements of the multiset of `items`.
///
/// ```
/// use multiset_combinatorics::multiset_combinations;
///
/// let combs: Vec<String> = multiset_combinations(&['b', 'a', 'b', 'y'], 3)
///     .map(|c| c.into_iter().collect())
///     .collect();
/// assert_eq!(combs, vec!["abb", "aby", "bby"]);
/// ```
pub fn multiset_combinations<T: Ord + Clone>(items: &[T], n: usize) -> MultisetCombinations<T>
{
    MultisetCombinations::new(Multiset::from_ord(items.iter().cloned()), n)
}
