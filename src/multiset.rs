//! Grouped representation of multisets.
//!
//! A `Multiset` is a list of distinct values with their multiplicities. How the
//! values are grouped and ordered depends on what the element type supports:
//!
//! - `from_ord` / `from_counts` (`Ord`): groups sorted by value, so that the
//!   same elements in any order give the same multiset;
//! - `from_hash` (`Hash + Eq`): groups in order of first occurrence;
//! - `from_eq` (`PartialEq` only): groups in order of first occurrence, found
//!   by linear scan in O(n^2).
//!
//! The generators of this crate enumerate in the order of the groups.

use ahash::AHashMap;
use std::collections::btree_map::{self, BTreeMap};
use std::hash::Hash;

/// A multiset, as `(value, multiplicity)` pairs with positive multiplicities
/// and pairwise distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Multiset<T>
{
    groups: Vec<(T, usize)>
}

impl<T> Multiset<T>
{
    /// Returns the `(value, multiplicity)` pairs
    pub fn groups(&self) -> &[(T, usize)] {
        &self.groups
    }

    /// Returns the number of elements, counting multiplicities
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.1).sum()
    }

    /// Returns `true` if the multiset has no elements
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the number of distinct values
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if the multiset holds at least two different values
    pub fn has_variety(&self) -> bool {
        self.groups.len() > 1
    }

    /// Iterate over the distinct values
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.groups.iter().map(|g| &g.0)
    }

    /// Returns the multiplicities, in group order
    pub fn counts(&self) -> Vec<usize> {
        self.groups.iter().map(|g| g.1).collect()
    }

    /// Consume the multiset, returning its `(value, multiplicity)` pairs
    pub fn into_groups(self) -> Vec<(T, usize)> {
        self.groups
    }
}

impl<T: Clone> Multiset<T>
{
    /// Returns all elements with repetitions, equal elements adjacent, in group order
    pub fn expand(&self) -> Vec<T> {
        self.groups.iter()
            .flat_map(|(v, c)| std::iter::repeat(v).take(*c).cloned())
            .collect()
    }
}

impl<T: Ord> Multiset<T>
{
    /// Group totally ordered elements, sorting the groups by value
    pub fn from_ord<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::from_counts(items.into_iter().map(|x| (x, 1)))
    }

    /// Build a multiset from `(value, multiplicity)` pairs.
    ///
    /// Pairs with the same value are merged and zero multiplicities dropped.
    pub fn from_counts<I: IntoIterator<Item = (T, usize)>>(pairs: I) -> Self {
        let mut map = BTreeMap::new();
        for (x, c) in pairs {
            match map.entry(x) {
                btree_map::Entry::Occupied(mut e) => *e.get_mut() += c,
                btree_map::Entry::Vacant(e) => {
                    e.insert(c);
                }
            }
        }
        Multiset {groups: map.into_iter().filter(|g| g.1 > 0).collect()}
    }
}

impl<T: Hash + Eq> Multiset<T>
{
    /// Group hashable elements, keeping the groups in order of first occurrence
    pub fn from_hash<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut map: AHashMap<T, (usize, usize)> = AHashMap::new();
        for x in items {
            let first = map.len();
            map.entry(x).or_insert((first, 0)).1 += 1;
        }
        let mut groups: Vec<(usize, T, usize)> = map.into_iter()
            .map(|(x, (first, c))| (first, x, c))
            .collect();
        groups.sort_unstable_by_key(|g| g.0);
        Multiset {groups: groups.into_iter().map(|(_, x, c)| (x, c)).collect()}
    }
}

impl<T: PartialEq> Multiset<T>
{
    /// Group elements that can only be compared for equality, keeping the groups
    /// in order of first occurrence
    pub fn from_eq<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut groups: Vec<(T, usize)> = Vec::new();
        for x in items {
            match groups.iter_mut().find(|g| g.0 == x) {
                Some(g) => g.1 += 1,
                None => groups.push((x, 1))
            }
        }
        Multiset {groups}
    }
}

impl<T: Ord> FromIterator<T> for Multiset<T>
{
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::from_ord(items)
    }
}

/// Returns `true` if `seq` contains two different elements.
pub fn has_variety<T: PartialEq>(seq: &[T]) -> bool
{
    seq.split_first().map_or(false, |(first, rest)| rest.iter().any(|x| x != first))
}

#[cfg(test)]
mod tests {
    use super::{has_variety, Multiset};

    #[test]
    fn from_ord() {
        let m = Multiset::from_ord("mississippi".chars());
        assert_eq!(m.groups(), &[('i', 4), ('m', 1), ('p', 2), ('s', 4)]);
        assert_eq!(m.len(), 11);
        assert_eq!(m.distinct(), 4);
        assert_eq!(m.expand().into_iter().collect::<String>(), "iiiimppssss");

        let collected: Multiset<char> = "ssissippimi".chars().collect();
        assert_eq!(collected, m);
    }

    #[test]
    fn from_hash() {
        let m = Multiset::from_hash("mississippi".chars());
        assert_eq!(m.groups(), &[('m', 1), ('i', 4), ('s', 4), ('p', 2)]);
        assert_eq!(m.counts(), vec![1, 4, 4, 2]);
    }

    #[test]
    fn from_eq() {
        let m = Multiset::from_eq(vec![1.5, 0.5, 1.5, 2.0]);
        assert_eq!(m.groups(), &[(1.5, 2), (0.5, 1), (2.0, 1)]);
        assert_eq!(m.values().copied().collect::<Vec<_>>(), vec![1.5, 0.5, 2.0]);
    }

    #[test]
    fn from_counts() {
        let m = Multiset::from_counts(vec![("b", 2), ("a", 0), ("c", 1), ("b", 1)]);
        assert_eq!(m.groups(), &[("b", 3), ("c", 1)]);
        assert!(m.has_variety());
        assert!(Multiset::from_counts(vec![("a", 0)]).is_empty());
    }

    #[test]
    fn variety() {
        assert!(has_variety(&[1, 2, 1]));
        assert!(!has_variety(&[1, 1, 1]));
        assert!(!has_variety::<u8>(&[]));
        assert!(!Multiset::from_ord(vec![3, 3]).has_variety());
    }
}
