//! Prefix sums.
//!
//! [`inclusive_scan`] is the prefix sum kernel: `out[i] = in[0] + ... + in[i]`, computed in one
//! left-to-right pass with wrapping `i32` addition, so overflow wraps exactly like fixed-width
//! signed addition and is never an error. [`exclusive_scan`] shifts the sums by one position and
//! starts from zero.
//!
//! The radix sort turns its 256-entry count table into bucket start offsets with the same
//! running accumulation ([`scan_in_place`] in exclusive mode).

use crate::buffer_view::BufferView;
use crate::scratch::try_with_capacity;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Each output includes the element at its own position.
    Inclusive,
    /// Each output is the sum of the elements strictly before it.
    Exclusive,
}

/// Values that can be accumulated by a running sum.
pub trait Accumulate: Copy + Default {
    fn accumulate(self, rhs: Self) -> Self;
}

impl Accumulate for i32 {
    #[inline(always)]
    fn accumulate(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Accumulate for usize {
    #[inline(always)]
    fn accumulate(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

/// Advance the running total by `value` and return the output for that position.
#[inline(always)]
fn step<T: Accumulate>(running_total: &mut T, value: T, mode: ScanMode) -> T {
    let before = *running_total;
    *running_total = before.accumulate(value);

    match mode {
        ScanMode::Inclusive => *running_total,
        ScanMode::Exclusive => before,
    }
}

/// Replace every value with its prefix sum.
#[inline]
pub fn scan_in_place<T: Accumulate>(values: &mut [T], mode: ScanMode) {
    let mut running_total = T::default();

    for v in values.iter_mut() {
        *v = step(&mut running_total, *v, mode);
    }
}

/// Append the prefix sums of `values` to `out`.
#[inline]
pub fn scan_into<T, I>(values: I, out: &mut Vec<T>, mode: ScanMode)
where
    T: Accumulate,
    I: IntoIterator<Item = T>,
{
    let mut running_total = T::default();

    out.extend(
        values
            .into_iter()
            .map(|v| step(&mut running_total, v, mode)),
    );
}

fn scan_view(view: &BufferView, mode: ScanMode) -> Result<Vec<i32>> {
    let mut out = try_with_capacity(view.len())?;
    scan_into(view.iter(), &mut out, mode);

    Ok(out)
}

/// Inclusive running sum of every element in `view`.
///
/// # Errors
/// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the output cannot be allocated.
pub fn inclusive_scan(view: &BufferView) -> Result<Vec<i32>> {
    scan_view(view, ScanMode::Inclusive)
}

/// Exclusive running sum of every element in `view`. The first output is always zero.
///
/// # Errors
/// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the output cannot be allocated.
pub fn exclusive_scan(view: &BufferView) -> Result<Vec<i32>> {
    scan_view(view, ScanMode::Exclusive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_inclusive() {
        let data = [1i32, 2, 3, 4];
        let view = BufferView::open(&data[..]).unwrap();

        assert_eq!(inclusive_scan(&view).unwrap(), vec![1, 3, 6, 10]);
    }

    #[test]
    pub fn test_exclusive() {
        let data = [1i32, 2, 3, 4];
        let view = BufferView::open(&data[..]).unwrap();

        assert_eq!(exclusive_scan(&view).unwrap(), vec![0, 1, 3, 6]);
    }

    #[test]
    pub fn test_empty() {
        let data: [i32; 0] = [];
        let view = BufferView::open(&data[..]).unwrap();

        assert!(inclusive_scan(&view).unwrap().is_empty());
        assert!(exclusive_scan(&view).unwrap().is_empty());
    }

    #[test]
    pub fn test_wrapping() {
        let data = [i32::MAX, 1, i32::MIN, -1];
        let view = BufferView::open(&data[..]).unwrap();

        assert_eq!(
            inclusive_scan(&view).unwrap(),
            vec![i32::MAX, i32::MIN, 0, -1]
        );
    }

    #[test]
    pub fn test_in_place_counts() {
        let mut counts = [3usize, 0, 2, 5];
        scan_in_place(&mut counts, ScanMode::Exclusive);

        assert_eq!(counts, [0, 3, 3, 5]);

        let mut counts = [3usize, 0, 2, 5];
        scan_in_place(&mut counts, ScanMode::Inclusive);

        assert_eq!(counts, [3, 3, 5, 10]);
    }
}
