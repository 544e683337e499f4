//! `digit_pass` is one stable counting sort on a single 8-bit digit. It is the building block of
//! the LSD radix sort.
//!
//! The pass runs in three steps over a source of `n` elements:
//!
//!  1. count: scan left to right, recording each element's rank within its bucket in `offsets`
//!     and the per-bucket totals in `counts`
//!  2. prefix: turn `counts` into bucket start offsets (exclusive prefix sum over 256 entries)
//!  3. scatter: write each element to `starts[bucket] + offsets[i]`
//!
//! Equal buckets keep their input order because ranks are handed out in scan order.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * single-threaded
//!  * stable
//!  * O(n + 256)

use crate::counts::{rank_within_bucket, BucketStarts, Counts};
use crate::radix_key::KeyOrder;

/// Count buckets for `digit` and record each element's rank within its bucket.
///
/// `counts` is cleared first. `offsets` must be at least as long as `src`.
#[inline]
pub fn count_digit<I>(
    src: I,
    offsets: &mut [usize],
    counts: &mut Counts,
    digit: usize,
    order: KeyOrder,
) where
    I: Iterator<Item = i32>,
{
    counts.clear();

    for (value, offset) in src.zip(offsets.iter_mut()) {
        *offset = rank_within_bucket(counts, order.bucket_of(value, digit));
    }
}

/// Place the payload of every `(value, payload)` pair of `src` at its bucket start plus its rank.
///
/// The bucket is taken from `value`. Sorting values passes the value as its own payload, while
/// an ordering pass carries the element's input index.
#[inline]
pub fn scatter<I, T>(
    src: I,
    dst_bucket: &mut [T],
    offsets: &[usize],
    starts: &BucketStarts,
    digit: usize,
    order: KeyOrder,
) where
    I: Iterator<Item = (i32, T)>,
{
    for ((value, payload), offset) in src.zip(offsets) {
        let b = order.bucket_of(value, digit);
        dst_bucket[starts[b] + offset] = payload;
    }
}

/// Stable counting sort of `src` on `digit` into `dst_bucket`.
///
/// `src` is walked twice, so it must be cheap to clone. `dst_bucket` and `offsets` must have the
/// same length as `src`.
#[inline]
pub fn digit_pass<I, T>(
    src: I,
    dst_bucket: &mut [T],
    offsets: &mut [usize],
    counts: &mut Counts,
    digit: usize,
    order: KeyOrder,
) where
    I: Iterator<Item = (i32, T)> + Clone,
{
    debug_assert_eq!(dst_bucket.len(), offsets.len());

    count_digit(src.clone().map(|(value, _)| value), offsets, counts, digit, order);
    debug_assert_eq!(counts.total(), dst_bucket.len());

    let starts = counts.into_bucket_starts();
    scatter(src, dst_bucket, offsets, starts, digit, order);
}
