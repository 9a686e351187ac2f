//! Canonical representatives of cyclic sequences.
//!
//! The minlex form of a sequence is its lexicographically least rotation.
//! Treated as undirected, the rotations of the reversed sequence are
//! candidates too. Only readings that start at an occurrence of the minimum
//! element can be least, so the others are never compared.

use crate::error::{Error, Result};

/// Options for computing a minlex form.
///
/// ```
/// use multiset_combinatorics::Minlex;
///
/// let seq = [1, 0, 2];
/// assert_eq!(Minlex::new().apply(&seq).unwrap(), vec![0, 2, 1]);
/// assert_eq!(Minlex::new().undirected().apply(&seq).unwrap(), vec![0, 1, 2]);
/// ```
#[derive(Debug)]
pub struct Minlex<'a, T>
{
    undirected: bool,
    distinct: bool,
    known_min: Option<&'a T>
}

// holds only a reference to T, so copyable for any T
impl<'a, T> Clone for Minlex<'a, T>
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Minlex<'a, T> {}

impl<'a, T: Ord + Clone> Minlex<'a, T>
{
    /// Directed rotations, no assumption on the elements
    pub fn new() -> Self {
        Minlex {undirected: false, distinct: false, known_min: None}
    }

    /// Also consider the rotations of the reversed sequence
    pub fn undirected(mut self) -> Self {
        self.undirected = true;
        self
    }

    /// Promise that the elements are pairwise distinct.
    ///
    /// Only the neighbours of the minimum are then looked at to choose the
    /// direction. The result is unspecified if the promise is broken.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Use `min` as the minimum element instead of searching for it
    pub fn known_min(mut self, min: &'a T) -> Self {
        self.known_min = Some(min);
        self
    }

    /// Returns the minlex form of `seq`.
    ///
    /// Fails with `Error::MinNotFound` if a known minimum was given that
    /// does not occur in `seq`. The empty sequence is its own minlex form.
    pub fn apply(&self, seq: &[T]) -> Result<Vec<T>> {
        let Some(min) = self.known_min.or_else(|| seq.iter().min()) else {
            return Ok(Vec::new());
        };
        if seq.is_empty() {
            return Ok(Vec::new());
        }
        let Some(first) = seq.iter().position(|x| x == min) else {
            return Err(Error::MinNotFound);
        };

        let (start, reversed) = if self.distinct {
            let n = seq.len();
            let next = &seq[(first + 1) % n];
            let prev = &seq[(first + n - 1) % n];
            (first, self.undirected && prev < next)
        } else {
            least_reading(seq, min, self.undirected)
        };
        Ok(reading(seq, start, reversed).cloned().collect())
    }
}

impl<'a> Minlex<'a, char>
{
    /// Returns the minlex form of the characters of `s`.
    pub fn apply_str(&self, s: &str) -> Result<String> {
        let chars: Vec<char> = s.chars().collect();
        Ok(self.apply(&chars)?.into_iter().collect())
    }
}

impl<'a, T: Ord + Clone> Default for Minlex<'a, T>
{
    fn default() -> Self {
        Self::new()
    }
}

// the sequence read cyclically from `start`, backwards if `reversed`
fn reading<T>(seq: &[T], start: usize, reversed: bool) -> impl Iterator<Item = &T> + '_
{
    let n = seq.len();
    (0..n).map(move |j| {
        if reversed {
            &seq[(start + n - j) % n]
        } else {
            &seq[(start + j) % n]
        }
    })
}

fn least_reading<T: Ord>(seq: &[T], min: &T, undirected: bool) -> (usize, bool)
{
    let directions: &[bool] = if undirected { &[false, true] } else { &[false] };
    let mut best: Option<(usize, bool)> = None;
    for start in (0..seq.len()).filter(|&i| seq[i] == *min) {
        for &reversed in directions {
            let better = best.map_or(true, |(s, r)| {
                reading(seq, start, reversed).lt(reading(seq, s, r))
            });
            if better {
                best = Some((start, reversed));
            }
        }
    }
    best.unwrap_or((0, false))
}

fn canonical<T: Ord + Clone>(seq: &[T], undirected: bool) -> Vec<T>
{
    match seq.iter().min() {
        Some(min) => {
            let (start, reversed) = least_reading(seq, min, undirected);
            reading(seq, start, reversed).cloned().collect()
        }
        None => Vec::new()
    }
}

/// Returns the least rotation of `seq`.
///
/// ```
/// use multiset_combinatorics::minlex;
///
/// assert_eq!(minlex(&[1, 2, 0]), vec![0, 1, 2]);
/// ```
pub fn minlex<T: Ord + Clone>(seq: &[T]) -> Vec<T>
{
    canonical(seq, false)
}

/// Returns the least rotation of the characters of `s`.
pub fn minlex_str(s: &str) -> String
{
    let chars: Vec<char> = s.chars().collect();
    minlex(&chars).into_iter().collect()
}

// all words of length n over 0..k, in lexicographic order
fn words(n: usize, k: usize) -> impl Iterator<Item = Vec<usize>>
{
    let first = if n > 0 && k == 0 { None } else { Some(vec![0; n]) };
    std::iter::successors(first, move |w| {
        let mut w = w.clone();
        for d in w.iter_mut().rev() {
            *d += 1;
            if *d < k {
                return Some(w);
            }
            *d = 0;
        }
        None
    })
}

/// Enumerate the necklaces of length `n` over `k` colours, in lexicographic
/// order: one sequence over `0..k` per class of sequences equal under
/// rotation, the least member of each.
///
/// ```
/// use multiset_combinatorics::necklaces;
///
/// assert_eq!(necklaces(3, 2).collect::<Vec<_>>(), vec![
///     vec![0, 0, 0],
///     vec![0, 0, 1],
///     vec![0, 1, 1],
///     vec![1, 1, 1],
/// ]);
/// ```
pub fn necklaces(n: usize, k: usize) -> impl Iterator<Item = Vec<usize>>
{
    words(n, k).filter(|w| canonical(w, false) == *w)
}

/// Enumerate the bracelets of length `n` over `k` colours: like necklaces,
/// with reversal also making sequences equal.
pub fn bracelets(n: usize, k: usize) -> impl Iterator<Item = Vec<usize>>
{
    words(n, k).filter(|w| canonical(w, true) == *w)
}
