//! Per-call scratch memory for the radix sort.
//!
//! One [`ScratchRegion`] is allocated at the start of a sort and dropped (or handed off as the
//! result) when the call returns, on every path. It holds two arrays addressed by [`Slot`], one
//! rank array and one count table. The slots hold element values when sorting values and input
//! indices when computing an ordering.

use crate::counts::Counts;
use crate::{Error, Result};
use std::mem::size_of;

/// Allocate an empty vec able to hold `len` values without reallocating.
///
/// # Errors
/// Returns [`Error::OutOfMemory`] when the allocator refuses the request.
pub(crate) fn try_with_capacity<T>(len: usize) -> Result<Vec<T>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| Error::out_of_memory(len.saturating_mul(size_of::<T>())))?;

    Ok(out)
}

fn try_zeroed<T: Default + Clone>(len: usize) -> Result<Vec<T>> {
    let mut out = try_with_capacity(len)?;
    out.resize(len, T::default());

    Ok(out)
}

/// One of the two arrays of a [`ScratchRegion`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Slot {
    Ping,
    Pong,
}

impl Slot {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Slot::Ping => Slot::Pong,
            Slot::Pong => Slot::Ping,
        }
    }
}

pub(crate) struct ScratchRegion<T = i32> {
    ping: Vec<T>,
    pong: Vec<T>,
    offsets: Vec<usize>,
    counts: Counts,
}

/// Disjoint borrows of a [`ScratchRegion`] for one pass.
pub(crate) struct PassBuffers<'a, T> {
    /// The slot that is not being written this pass.
    pub resting: &'a [T],
    pub destination: &'a mut [T],
    pub offsets: &'a mut [usize],
    pub counts: &'a mut Counts,
}

impl<T> ScratchRegion<T>
where
    T: Default + Clone,
{
    pub fn allocate(len: usize) -> Result<Self> {
        Ok(Self {
            ping: try_zeroed(len)?,
            pong: try_zeroed(len)?,
            offsets: try_zeroed(len)?,
            counts: Counts::default(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ping.len()
    }

    /// Borrow `destination` for writing alongside the other slot for reading.
    #[inline]
    pub fn pass_buffers(&mut self, destination: Slot) -> PassBuffers<'_, T> {
        let (resting, destination) = match destination {
            Slot::Ping => (&self.pong, &mut self.ping),
            Slot::Pong => (&self.ping, &mut self.pong),
        };

        PassBuffers {
            resting,
            destination,
            offsets: &mut self.offsets,
            counts: &mut self.counts,
        }
    }

    /// Release the region, keeping only `slot`.
    #[inline]
    pub fn into_slot(self, slot: Slot) -> Vec<T> {
        match slot {
            Slot::Ping => self.ping,
            Slot::Pong => self.pong,
        }
    }
}
