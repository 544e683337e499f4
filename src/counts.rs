use std::ops::{Index, IndexMut};
use std::slice::{Iter, SliceIndex};

use crate::scan::{scan_in_place, ScanMode};

/// Number of buckets for an 8-bit digit.
pub const RADIX_COUNTS: usize = 256;

/// Per-bucket count table for one digit.
///
/// During a counting pass each entry holds the number of elements seen so far in that bucket.
/// [`Counts::into_bucket_starts`] then turns it into the starting offset of each bucket in the
/// output, so that `table[0] == 0` and `table[i]` is the sum of the counts below `i`.
#[repr(C, align(64))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counts([usize; RADIX_COUNTS]);
pub type BucketStarts = Counts;

impl<I> Index<I> for Counts
where
    I: SliceIndex<[usize]>,
{
    type Output = I::Output;

    #[inline(always)]
    fn index(&self, index: I) -> &I::Output {
        &self.0[index]
    }
}

impl<I> IndexMut<I> for Counts
where
    I: SliceIndex<[usize]>,
{
    #[inline(always)]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.0[index]
    }
}

impl Default for Counts {
    fn default() -> Self {
        Counts([0usize; RADIX_COUNTS])
    }
}

impl Counts {
    #[inline(always)]
    pub fn clear(&mut self) {
        self.0.fill(0);
    }

    /// Sum over all buckets.
    #[inline]
    pub fn total(&self) -> usize {
        self.into_iter().sum()
    }

    /// Turn counts into exclusive prefix sums in place.
    #[inline]
    pub fn into_bucket_starts(&mut self) -> &BucketStarts {
        scan_in_place(&mut self.0, ScanMode::Exclusive);
        self
    }
}

/// Rank of the next element of `bucket` among the elements already counted in it.
///
/// Reads the running count and then increments it, so equal buckets receive ranks in the order
/// they are seen.
#[inline(always)]
pub fn rank_within_bucket(counts: &mut Counts, bucket: usize) -> usize {
    let rank = counts[bucket];
    counts[bucket] = rank + 1;

    rank
}

impl<'a> IntoIterator for &'a Counts {
    type Item = &'a usize;
    type IntoIter = Iter<'a, usize>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
