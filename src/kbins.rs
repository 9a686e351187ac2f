//! Distributing a sequence of items into a fixed number of non-empty bins.
//!
//! Whether the order of the bins matters, and whether the order of the items
//! inside a bin matters, is chosen with `KbinsOrder`. Every variant is built
//! on the partition and permutation generators of this crate.

use itertools::Itertools;
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::integer::IntegerPartitions;
use crate::multiset::Multiset;
use crate::partitions::multiset_partitions;
use crate::permutations::{multiset_permutations, MultisetPermutations};

/// Which orders are significant when distributing items into bins.
///
/// With items `0, 1, 2` and two bins, `[[0], [1, 2]]`, `[[1, 2], [0]]`,
/// `[[2, 1], [0]]` and `[[0], [2, 1]]` are all the same result for
/// `Neither`, while `Both` tells them all apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KbinsOrder
{
    /// Items stay in sequence and are cut into consecutive runs
    Preserve,
    /// Neither the order of the bins nor the order inside a bin matters
    Neither,
    /// The order of the items inside a bin matters, the order of the bins
    /// does not
    ItemsOnly,
    /// The order of the bins matters, the order inside a bin does not
    BinsOnly,
    /// Both orders matter
    Both
}

/// Iterator returned by `kbins`.
pub type Kbins<'a, T> = Box<dyn Iterator<Item = Vec<Vec<T>>> + 'a>;

// cut positions splitting n items into k non-empty runs
fn cuts(n: usize, k: usize) -> impl Iterator<Item = Vec<usize>>
{
    (1..n).combinations(k - 1)
}

fn split<T: Clone>(seq: &[T], cuts: &[usize]) -> Vec<Vec<T>>
{
    let mut bins = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for &end in cuts.iter().chain(std::iter::once(&seq.len())) {
        bins.push(seq[start..end].to_vec());
        start = end;
    }
    bins
}

/// Distribute `items` into `k` non-empty bins in every way that is distinct
/// under `order`.
///
/// Equal items are interchangeable, so no result is produced twice. Asking
/// for zero bins is an error, while asking for more bins than items gives
/// nothing.
///
/// ```
/// use multiset_combinatorics::{kbins, KbinsOrder};
///
/// let bins: Vec<_> = kbins(&[0, 1, 2], 2, KbinsOrder::Preserve).unwrap().collect();
/// assert_eq!(bins, vec![
///     vec![vec![0], vec![1, 2]],
///     vec![vec![0, 1], vec![2]],
/// ]);
/// ```
pub fn kbins<'a, T: Ord + Clone + 'a>(items: &[T], k: usize, order: KbinsOrder) -> Result<Kbins<'a, T>>
{
    if k == 0 {
        return Err(Error::NonPositive {what: "k"});
    }
    let n = items.len();
    if k > n {
        trace!("{} bins of {} items: none", k, n);
        return Ok(Box::new(std::iter::empty()));
    }
    debug!("{} bins of {} items, {:?}", k, n, order);

    let items = items.to_vec();
    let bins: Kbins<'a, T> = match order {
        KbinsOrder::Preserve => Box::new(cuts(n, k).map(move |c| split(&items, &c))),
        KbinsOrder::Neither => Box::new(multiset_partitions(&items, Some(k))),
        KbinsOrder::BinsOnly => Box::new(multiset_partitions(&items, Some(k))
            .flat_map(|parts| MultisetPermutations::new(Multiset::from_ord(parts), None))),
        KbinsOrder::Both => Box::new(multiset_permutations(&items, None)
            .flat_map(move |perm| cuts(n, k).map(move |c| split(&perm, &c)))),
        KbinsOrder::ItemsOnly => Box::new(IntegerPartitions::new(n, Some(k), None)
            .filter(move |p| p.num_parts() == k)
            .flat_map(move |p| {
                // bin sizes, smallest first
                let cuts: Vec<usize> = p.iter().rev()
                    .flat_map(|(size, count)| std::iter::repeat(size).take(count))
                    .scan(0, |end, size| {
                        *end += size;
                        Some(*end)
                    })
                    .take(k - 1)
                    .collect();
                // bins of the same size are unordered: keep them sorted
                multiset_permutations(&items, None)
                    .map(move |perm| split(&perm, &cuts))
                    .filter(|bins| bins.windows(2).all(|w| w[0].len() != w[1].len() || w[0] <= w[1]))
            }))
    };
    Ok(bins)
}
