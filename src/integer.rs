//! Enumeration of the partitions of an integer.
//!
//! Partitions are produced in decreasing canonical order: the first one uses
//! as many copies of the largest allowed part as possible, the last one is all
//! ones (or the last arrangement that still fits in the allowed number of
//! parts). Each step breaks the smallest part larger than one into pieces one
//! smaller and takes constant time on average.

use log::trace;
use num_traits::PrimInt;
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// A partition of an integer, as part sizes with their multiplicities.
///
/// Sizes are kept in decreasing order without zero multiplicities, so two
/// partitions are equal exactly when they have the same parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct IntegerPartition
{
    parts: Vec<(usize, usize)>,
    num_parts: usize
}

impl IntegerPartition
{
    /// Iterate over `(size, multiplicity)` pairs, largest size first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, usize)> + '_ {
        self.parts.iter().copied()
    }

    /// Returns how many parts of the given size the partition has
    pub fn multiplicity(&self, size: usize) -> usize {
        self.parts.binary_search_by(|p| size.cmp(&p.0))
            .map_or(0, |i| self.parts[i].1)
    }

    /// Returns the total number of parts, counting multiplicities
    pub fn num_parts(&self) -> usize {
        self.num_parts
    }

    /// Returns the largest part, or `None` for the partition of zero
    pub fn largest(&self) -> Option<usize> {
        self.parts.first().map(|p| p.0)
    }

    /// Returns the partitioned integer
    pub fn total(&self) -> usize {
        self.parts.iter().map(|&(s, c)| s * c).sum()
    }

    /// Returns the partition as a map from part size to multiplicity
    pub fn to_map(&self) -> BTreeMap<usize, usize> {
        self.parts.iter().copied().collect()
    }

    /// Returns the parts, largest first, with repetitions
    pub fn to_vec(&self) -> Vec<usize> {
        self.parts.iter()
            .flat_map(|&(s, c)| std::iter::repeat(s).take(c))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Active,
    Done
}

/// Enumerator of the partitions of an integer, created by `integer_partitions`.
///
/// `advance()` rewrites a single owned partition in place and lends it until
/// the next call; the `Iterator` implementation clones it on every step.
#[derive(Debug, Clone)]
pub struct IntegerPartitions
{
    current: IntegerPartition,
    max_parts: usize,
    state: State
}

impl IntegerPartitions
{
    pub(crate) fn new(n: usize, max_parts: Option<usize>, max_value: Option<usize>) -> Self {
        let m = max_parts.map_or(n, |m| m.min(n));
        let k = max_value.map_or(n, |k| k.min(n));
        let mut current = IntegerPartition::default();

        if n == 0 {
            return IntegerPartitions {current, max_parts: 0, state: State::Fresh};
        }
        if m.saturating_mul(k) < n {
            trace!("integer partitions of {} into at most {} parts of at most {}: none", n, m, k);
            return IntegerPartitions {current, max_parts: m, state: State::Done};
        }

        let (q, r) = (n / k, n % k);
        current.parts.push((k, q));
        if r > 0 {
            current.parts.push((r, 1));
        }
        current.num_parts = q + (r > 0) as usize;
        IntegerPartitions {current, max_parts: m, state: State::Fresh}
    }

    /// Move to the next partition and return it, or `None` when exhausted.
    ///
    /// The same partition object is returned on every call.
    pub fn advance(&mut self) -> Option<&IntegerPartition> {
        match self.state {
            State::Fresh => self.state = State::Active,
            State::Active => if !self.step() {
                self.state = State::Done;
                return None;
            },
            State::Done => return None
        }
        Some(&self.current)
    }

    /// Pair every partition with its number of parts.
    pub fn with_size(self) -> impl Iterator<Item = (usize, IntegerPartition)> {
        self.map(|p| (p.num_parts(), p))
    }

    fn step(&mut self) -> bool {
        let p = &mut self.current;
        match p.parts.as_slice() {
            [] | [(1, _)] => return false,
            _ => {}
        }

        // the ones are always reused
        let mut reuse = 0;
        if let Some(&(1, c)) = p.parts.last() {
            p.parts.pop();
            p.num_parts -= c;
            reuse = c;
        }

        loop {
            // take one copy of the smallest part larger than one
            let Some(top) = p.parts.last_mut() else {
                return false;
            };
            let i = top.0;
            top.1 -= 1;
            if top.1 == 0 {
                p.parts.pop();
            }
            p.num_parts -= 1;
            reuse += i;

            // and break everything reused into pieces of size i - 1
            let i = i - 1;
            let (q, r) = (reuse / i, reuse % i);
            let need = q + (r > 0) as usize;
            if need > self.max_parts - p.num_parts {
                if p.parts.is_empty() {
                    return false;
                }
                continue;
            }

            p.parts.push((i, q));
            if r > 0 {
                p.parts.push((r, 1));
            }
            p.num_parts += need;
            return true;
        }
    }
}

impl Iterator for IntegerPartitions
{
    type Item = IntegerPartition;

    fn next(&mut self) -> Option<IntegerPartition> {
        self.advance().cloned()
    }
}

fn size<N: PrimInt>(x: N, what: &'static str) -> Result<usize>
{
    if x < N::zero() {
        return Err(Error::Negative {what});
    }
    Ok(x.to_usize().unwrap_or(usize::MAX))
}

fn bound<N: PrimInt>(x: Option<N>, what: &'static str) -> Result<Option<usize>>
{
    match x {
        None => Ok(None),
        Some(x) if x <= N::zero() => Err(Error::NonPositive {what}),
        Some(x) => Ok(Some(x.to_usize().unwrap_or(usize::MAX)))
    }
}

/// Enumerate the partitions of `n` into at most `max_parts` parts, each at
/// most `max_value`.
///
/// Both bounds default to `n`. Arguments are checked up front: a negative `n`
/// or a bound given as zero or less is an error, while bounds too small to
/// reach `n` just give no partitions. The partition of zero is the empty one.
///
/// ```
/// use multiset_combinatorics::integer_partitions;
///
/// let parts: Vec<Vec<usize>> = integer_partitions(6, Some(2), None).unwrap()
///     .map(|p| p.to_vec())
///     .collect();
/// assert_eq!(parts, vec![vec![6], vec![5, 1], vec![4, 2], vec![3, 3]]);
/// ```
pub fn integer_partitions<N: PrimInt>(n: N, max_parts: Option<N>, max_value: Option<N>) -> Result<IntegerPartitions>
{
    let n = size(n, "n")?;
    let m = bound(max_parts, "max_parts")?;
    let k = bound(max_value, "max_value")?;
    Ok(IntegerPartitions::new(n, m, k))
}
