#![deny(missing_docs)]

//! The **multiset-combinatorics** crate enumerates partitions, combinations
//! and permutations of multisets, along with the building blocks they rest
//! on: set partitions, integer partitions and canonical rotations.
//!
//! Set partitions are represented as restricted growth strings: one part
//! index per element, where each index is at most one more than all the
//! indices before it. `SetPartitions` and `SmallSetPartitions` step through
//! them in lexicographic order with `increment()`, optionally maintaining the
//! parts themselves through a `Blocks` observer such as `VecBlocks`.
//! See <http://www-cs-faculty.stanford.edu/~uno/fasc3b.ps.gz> page 27 for a
//! description of the algorithm.
//!
//! Elements of a multiset that compare equal are interchangeable, so every
//! generator over multisets produces each distinct result exactly once:
//!
//! - `multiset_partitions` / `MultisetPartitions` split a multiset into
//!   non-empty parts;
//! - `multiset_combinations` / `MultisetCombinations` choose sub-multisets of a
//!   given size;
//! - `multiset_permutations` / `MultisetPermutations` arrange them, with
//!   `derangements` and `involutions` as filters on top;
//! - `kbins` distributes a sequence into a number of bins, with a choice of
//!   which orders matter.
//!
//! `integer_partitions` enumerates the partitions of an integer with bounds on
//! the number and size of parts, and `minlex` gives the canonical rotation of
//! a cyclic sequence, from which `necklaces` and `bracelets` follow.
//!
//! # How to use
//!
//! Functions taking a slice group its elements by their total order. To group
//! elements that are only hashable, or only comparable for equality, build a
//! `Multiset` with `from_hash` or `from_eq` and pass it to the generator's
//! `new`.
//!
//! Generators are lazy iterators that copy out each result. The set and
//! integer partition enumerators also offer a streaming interface
//! (`increment()` / `get()`, `advance()`) that rewrites a single value in
//! place and lends it until the next step.
//!
//! Arguments outside the domain of a generator, like a negative integer to
//! partition, are reported as an `Error` when the generator is built. Requests
//! that merely have no solution, like more parts than elements, give empty
//! iterators.

mod combinations;
mod error;
mod integer;
mod kbins;
mod minlex;
mod multiset;
mod partitions;
mod permutations;
mod rgs;

pub use crate::combinations::{multiset_combinations, MultisetCombinations};
pub use crate::error::{Error, Result};
pub use crate::integer::{integer_partitions, IntegerPartition, IntegerPartitions};
pub use crate::kbins::{kbins, Kbins, KbinsOrder};
pub use crate::minlex::{bracelets, minlex, minlex_str, necklaces, Minlex};
pub use crate::multiset::{has_variety, Multiset};
pub use crate::partitions::{multiset_partitions, range_partitions, MultisetPartitions};
pub use crate::permutations::{derangements, involutions, multiset_permutations, MultisetPermutations};
pub use crate::rgs::{
    is_rgs, partition_from_rgs, set_partitions, Blocks, SetPartitions, SetPartitionsIter,
    SmallSetPartitions, VecBlocks, SMALL_CAPACITY
};

static BELL_NUMBERS: [u64; 26] = [
    1,
    1,
    2,
    5,
    15,
    52,
    203,
    877,
    4140,
    21147,
    115975,
    678570,
    4213597,
    27644437,
    190899322,
    1382958545,
    10480142147,
    82864869804,
    682076806159,
    5832742205057,
    51724158235372,
    474869816156751,
    4506715738447323,
    44152005855084346,
    445958869294805289,
    4638590332229999353
];

/// Number of partitions of a set of `n` elements.
///
/// Simply returns the `n`-th Bell number, or `None` if it's too large to fit into `u64`.
pub fn bell(n: usize) -> Option<u64>
{
    BELL_NUMBERS.get(n).copied()
}

/// Number of partitions of a set of `n` elements into exactly `k` non-empty
/// parts (Stirling number of the second kind).
///
/// Returns `None` if it's too large to fit into `u64`.
pub fn stirling2(n: usize, k: usize) -> Option<u64>
{
    if k > n {
        return Some(0);
    }
    // row[j] is S(i, j), kept only for the columns S(n, k) depends on
    let mut row = vec![0u64; k + 1];
    row[0] = 1;
    for i in 1..=n {
        let lo = std::cmp::max(1, k.saturating_sub(n - i));
        for j in (lo..=std::cmp::min(i, k)).rev() {
            row[j] = (j as u64).checked_mul(row[j])?.checked_add(row[j - 1])?;
        }
        row[0] = 0;
    }
    Some(row[k])
}
