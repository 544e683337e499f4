//! Host-facing kernel entry points.
//!
//! Each entry point acquires a [`BufferView`] over the host object, runs one kernel under the
//! timing wrapper and returns the elapsed milliseconds with a freshly allocated result of the
//! same length and width as the input. Validation happens before the clock starts and before
//! anything is allocated.
//!
//! Besides the value kernels, [`radix_sort_indices`] returns the stable sort ordering of the
//! buffer as `u32` input indices.

use crate::buffer_view::{BufferSource, BufferView};
use crate::radix_key::KeyOrder;
use crate::scan::{exclusive_scan, inclusive_scan};
use crate::sorts::lsb_sort::{lsb_ordering, lsb_sort};
use crate::timing::{timed, Timed};
use crate::Result;
use tracing::debug;

/// Result of one kernel call. Value kernels produce `i32` elements, ordering kernels `u32`
/// indices.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelOutput<T = i32> {
    pub elapsed_ms: f64,
    pub result: Vec<T>,
}

impl<T> KernelOutput<T>
where
    T: bytemuck::Pod,
{
    #[inline]
    pub fn len(&self) -> usize {
        self.result.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    /// The result as native-endian bytes, exactly as long as the input region.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.result)
    }

    /// Owned copy of [`as_bytes`](Self::as_bytes) for handing to a host that wants its own
    /// byte sequence.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    #[inline]
    pub fn into_parts(self) -> (f64, Vec<T>) {
        (self.elapsed_ms, self.result)
    }
}

impl<T> From<Timed<Vec<T>>> for KernelOutput<T> {
    fn from(t: Timed<Vec<T>>) -> Self {
        Self {
            elapsed_ms: t.elapsed_ms,
            result: t.output,
        }
    }
}

fn run<B, T, F>(name: &'static str, source: &B, kernel: F) -> Result<KernelOutput<T>>
where
    B: BufferSource + ?Sized,
    F: FnOnce(&BufferView) -> Result<Vec<T>>,
{
    let view = BufferView::open(source)?;
    let len = view.len();

    let out = timed(|| kernel(&view)).transpose()?;
    view.release();

    debug!(
        kernel = name,
        len,
        elapsed_ms = out.elapsed_ms,
        "kernel complete"
    );

    Ok(out.into())
}

/// Inclusive prefix sum of the whole buffer, with wrapping addition.
///
/// # Errors
/// * [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the buffer cannot be read
/// * [`Error::InvalidWidth`](crate::Error::InvalidWidth) if the element width is not 4 bytes
/// * [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the output cannot be allocated
pub fn prefix_sum<B>(source: &B) -> Result<KernelOutput>
where
    B: BufferSource + ?Sized,
{
    run("prefix_sum", source, inclusive_scan)
}

/// Exclusive prefix sum of the whole buffer. Fails the same way as [`prefix_sum`].
pub fn prefix_sum_exclusive<B>(source: &B) -> Result<KernelOutput>
where
    B: BufferSource + ?Sized,
{
    run("prefix_sum_exclusive", source, exclusive_scan)
}

/// Stable LSD radix sort of the whole buffer by unsigned bit pattern.
///
/// Negative values sort after all non-negative values. Use
/// [`radix_sort_builder`] with [`RadixSortBuilder::with_signed_order`] for numeric order.
///
/// # Errors
/// Fails the same way as [`prefix_sum`].
pub fn radix_sort<B>(source: &B) -> Result<KernelOutput>
where
    B: BufferSource + ?Sized,
{
    radix_sort_builder(source).sort()
}

/// Stable sort ordering of the whole buffer: `result[i]` is the input index of the `i`th
/// element of [`radix_sort`]'s output, and equal elements keep ascending indices.
///
/// # Errors
/// Fails the same way as [`prefix_sum`], and with
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the buffer holds more than
/// `u32::MAX` elements.
pub fn radix_sort_indices<B>(source: &B) -> Result<KernelOutput<u32>>
where
    B: BufferSource + ?Sized,
{
    radix_sort_builder(source).sort_indices()
}

pub fn radix_sort_builder<B>(source: &B) -> RadixSortBuilder<'_, B>
where
    B: BufferSource + ?Sized,
{
    RadixSortBuilder::new(source)
}

pub struct RadixSortBuilder<'a, B: ?Sized> {
    source: &'a B,
    order: KeyOrder,
}

impl<'a, B> RadixSortBuilder<'a, B>
where
    B: BufferSource + ?Sized,
{
    pub(crate) fn new(source: &'a B) -> Self {
        Self {
            source,
            order: KeyOrder::default(),
        }
    }

    pub fn with_key_order(mut self, order: KeyOrder) -> Self {
        self.order = order;

        self
    }

    pub fn with_bit_pattern_order(mut self) -> Self {
        self.order = KeyOrder::BitPattern;

        self
    }

    pub fn with_signed_order(mut self) -> Self {
        self.order = KeyOrder::Signed;

        self
    }

    pub fn sort(self) -> Result<KernelOutput> {
        let order = self.order;

        run("radix_sort", self.source, |view| lsb_sort(view, order))
    }

    /// Sort, returning the input indices in sorted order instead of the values.
    pub fn sort_indices(self) -> Result<KernelOutput<u32>> {
        let order = self.order;

        run("radix_sort_indices", self.source, |view| {
            lsb_ordering(view, order)
        })
    }
}

/// Kernel methods on anything that can be exposed as a buffer.
pub trait BufferKernels: BufferSource {
    /// See [`prefix_sum`].
    fn prefix_sum(&self) -> Result<KernelOutput> {
        prefix_sum(self)
    }

    /// See [`prefix_sum_exclusive`].
    fn prefix_sum_exclusive(&self) -> Result<KernelOutput> {
        prefix_sum_exclusive(self)
    }

    /// See [`radix_sort`].
    fn radix_sort(&self) -> Result<KernelOutput> {
        radix_sort(self)
    }

    /// See [`radix_sort_indices`].
    fn radix_sort_indices(&self) -> Result<KernelOutput<u32>> {
        radix_sort_indices(self)
    }

    /// See [`radix_sort_builder`].
    fn radix_sort_builder(&self) -> RadixSortBuilder<'_, Self> {
        RadixSortBuilder::new(self)
    }
}

impl<T> BufferKernels for T where T: BufferSource + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer_view::HostBuffer;
    use crate::Error;

    #[test]
    pub fn test_prefix_sum() {
        let out = prefix_sum(&vec![1i32, 2, 3, 4]).unwrap();

        assert_eq!(out.result, vec![1, 3, 6, 10]);
        assert!(out.elapsed_ms >= 0.0);
    }

    #[test]
    pub fn test_radix_sort() {
        let out = radix_sort(&vec![5i32, 3, 8, 1, 9, 2]).unwrap();

        assert_eq!(out.result, vec![1, 2, 3, 5, 8, 9]);
        assert!(out.elapsed_ms >= 0.0);
    }

    #[test]
    pub fn test_builder_order() {
        let data = vec![-1i32, 0, 1];

        let out = radix_sort_builder(&data).with_signed_order().sort().unwrap();
        assert_eq!(out.result, vec![-1, 0, 1]);

        let out = radix_sort_builder(&data)
            .with_signed_order()
            .with_bit_pattern_order()
            .sort()
            .unwrap();
        assert_eq!(out.result, vec![0, 1, -1]);

        let out = data
            .radix_sort_builder()
            .with_key_order(KeyOrder::Signed)
            .sort()
            .unwrap();
        assert_eq!(out.result, vec![-1, 0, 1]);
    }

    #[test]
    pub fn test_radix_sort_indices() {
        let data = vec![5i32, 3, 8, 1, 9, 2];

        let out = radix_sort_indices(&data).unwrap();
        assert_eq!(out.result, vec![3, 5, 1, 0, 2, 4]);
        assert_eq!(out.as_bytes().len(), data.len() * 4);
        assert!(out.elapsed_ms >= 0.0);

        let out = data
            .radix_sort_builder()
            .with_signed_order()
            .sort_indices()
            .unwrap();
        assert_eq!(out.len(), data.len());

        let source = HostBuffer::new(&[0u8; 6], 2);
        assert_eq!(
            source.radix_sort_indices(),
            Err(Error::InvalidWidth { width: 2 })
        );
    }

    #[test]
    pub fn test_byte_output() {
        let data = [4i32, -3, 2];
        let bytes: &[u8] = bytemuck::cast_slice(&data);
        let source = HostBuffer::new(bytes, 4);

        let out = source.radix_sort().unwrap();
        assert_eq!(out.as_bytes().len(), bytes.len());
        assert_eq!(out.to_bytes().len(), bytes.len());

        let (elapsed_ms, result) = out.into_parts();
        assert!(elapsed_ms >= 0.0);
        assert_eq!(result, vec![2, 4, -3]);
    }

    #[test]
    pub fn test_rejects_before_running() {
        let bytes = [0u8; 8];

        for width in [1usize, 2, 8] {
            let source = HostBuffer::new(&bytes, width);

            assert_eq!(prefix_sum(&source), Err(Error::InvalidWidth { width }));
            assert_eq!(radix_sort(&source), Err(Error::InvalidWidth { width }));
        }

        let source = HostBuffer::unavailable(4);
        assert!(matches!(
            source.prefix_sum_exclusive(),
            Err(Error::InvalidArgument(_))
        ));
    }
}
