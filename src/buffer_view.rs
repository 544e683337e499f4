//! Read-only typed views over host-owned memory.
//!
//! A host binding hands the kernels an opaque object that can expose a flat byte region and a
//! declared per-element width. [`BufferSource`] is that seam. [`BufferView::open`] is the single
//! acquisition step shared by every kernel: it checks that the region is readable, that the
//! declared width is exactly 4 bytes and that the byte length is a whole number of elements.
//!
//! The view never owns the memory and cannot outlive the borrow of its source, so it cannot be
//! retained past the call that supplied it.

use crate::{Error, Result};
use std::iter::FusedIterator;
use std::slice::ChunksExact;
use tracing::debug;

/// Byte width of every element the kernels accept.
pub const ELEMENT_WIDTH: usize = 4;

/// A host object that can be exposed as a contiguous byte region.
pub trait BufferSource {
    /// Declared byte width of one element.
    fn item_size(&self) -> usize;

    /// The whole region as bytes, or `None` when it cannot be exposed as a flat span.
    fn bytes(&self) -> Option<&[u8]>;
}

impl BufferSource for [i32] {
    #[inline]
    fn item_size(&self) -> usize {
        ELEMENT_WIDTH
    }

    #[inline]
    fn bytes(&self) -> Option<&[u8]> {
        Some(bytemuck::cast_slice(self))
    }
}

impl BufferSource for [u32] {
    #[inline]
    fn item_size(&self) -> usize {
        ELEMENT_WIDTH
    }

    #[inline]
    fn bytes(&self) -> Option<&[u8]> {
        Some(bytemuck::cast_slice(self))
    }
}

impl BufferSource for Vec<i32> {
    #[inline]
    fn item_size(&self) -> usize {
        self.as_slice().item_size()
    }

    #[inline]
    fn bytes(&self) -> Option<&[u8]> {
        self.as_slice().bytes()
    }
}

impl BufferSource for Vec<u32> {
    #[inline]
    fn item_size(&self) -> usize {
        self.as_slice().item_size()
    }

    #[inline]
    fn bytes(&self) -> Option<&[u8]> {
        self.as_slice().bytes()
    }
}

/// Raw bytes plus a declared element width, as a binding layer receives them from its host.
#[derive(Debug, Clone, Copy)]
pub struct HostBuffer<'a> {
    bytes: Option<&'a [u8]>,
    item_size: usize,
}

impl<'a> HostBuffer<'a> {
    pub fn new(bytes: &'a [u8], item_size: usize) -> Self {
        Self {
            bytes: Some(bytes),
            item_size,
        }
    }

    /// A host object whose memory could not be acquired.
    pub fn unavailable(item_size: usize) -> Self {
        Self {
            bytes: None,
            item_size,
        }
    }
}

impl BufferSource for HostBuffer<'_> {
    #[inline]
    fn item_size(&self) -> usize {
        self.item_size
    }

    #[inline]
    fn bytes(&self) -> Option<&[u8]> {
        self.bytes
    }
}

/// Validated, read-only view of 32-bit elements.
#[derive(Debug, Clone, Copy)]
pub struct BufferView<'a> {
    bytes: &'a [u8],
}

impl<'a> BufferView<'a> {
    /// Acquire a view over `source`.
    ///
    /// # Errors
    /// * [`Error::InvalidArgument`] if the region cannot be exposed or is not a whole number of
    ///   elements
    /// * [`Error::InvalidWidth`] if the declared width is not [`ELEMENT_WIDTH`]
    pub fn open<B>(source: &'a B) -> Result<Self>
    where
        B: BufferSource + ?Sized,
    {
        let Some(bytes) = source.bytes() else {
            debug!("rejecting buffer: region is not readable");
            return Err(Error::invalid_argument(
                "buffer region cannot be exposed as a flat byte span",
            ));
        };

        let width = source.item_size();
        if width != ELEMENT_WIDTH {
            debug!(width, "rejecting buffer: unsupported element width");
            return Err(Error::invalid_width(width));
        }

        if bytes.len() % ELEMENT_WIDTH != 0 {
            debug!(len = bytes.len(), "rejecting buffer: ragged byte length");
            return Err(Error::invalid_argument(format!(
                "byte length {} is not a multiple of the element width {}",
                bytes.len(),
                ELEMENT_WIDTH
            )));
        }

        Ok(Self { bytes })
    }

    /// Element count.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() / ELEMENT_WIDTH
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Element at `index`. Callers must stay below [`len`](Self::len).
    #[inline]
    pub fn element_at(&self, index: usize) -> i32 {
        debug_assert!(
            index < self.len(),
            "element_at: index {} out of bounds for length {}",
            index,
            self.len()
        );

        let start = index * ELEMENT_WIDTH;
        bytemuck::pod_read_unaligned(&self.bytes[start..start + ELEMENT_WIDTH])
    }

    /// Elements in order.
    #[inline]
    pub fn iter(&self) -> Elements<'a> {
        Elements {
            chunks: self.bytes.chunks_exact(ELEMENT_WIDTH),
        }
    }

    /// Give the view back. Dropping it has the same effect.
    #[inline]
    pub fn release(self) {}
}

impl<'a> IntoIterator for &BufferView<'a> {
    type Item = i32;
    type IntoIter = Elements<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`BufferView`]. The region need not be 4-byte aligned.
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl Iterator for Elements<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        self.chunks.next().map(bytemuck::pod_read_unaligned)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Elements<'_> {}
impl FusedIterator for Elements<'_> {}
