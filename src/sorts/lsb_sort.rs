//! `lsb_sort` is the full LSD radix sort over 32-bit elements: four [`digit_pass`]es, least
//! significant digit first, alternating between the two scratch slots.
//!
//! Pass roles are fixed by pass parity:
//!
//! | pass | reads  | writes |
//! |------|--------|--------|
//! | 0    | input  | pong   |
//! | 1    | pong   | ping   |
//! | 2    | ping   | pong   |
//! | 3    | pong   | ping   |
//!
//! so the final pass always lands in [`RESULT_SLOT`], which is handed to the caller as the
//! output without a copy. Nothing is allocated after the scratch region.
//!
//! [`lsb_ordering`] runs the same passes but keeps input indices in the scratch slots instead
//! of values. Each pass after the first reads the input through the previous pass's
//! permutation, and the result is the stable ordering of the input (`input[perm[i]]` is the
//! `i`th smallest element).
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * single-threaded
//!  * lsb-first
//!  * stable

use crate::buffer_view::BufferView;
use crate::radix_key::{KeyOrder, RadixKey};
use crate::scratch::{try_with_capacity, ScratchRegion, Slot};
use crate::sorts::digit_pass::digit_pass;
use crate::{Error, Result};
use tracing::trace;

/// Number of 8-bit digit passes for a 32-bit key.
pub const PASSES: usize = <u32 as RadixKey>::LEVELS;

/// Slot holding the sorted output after the last pass.
pub const RESULT_SLOT: Slot = Parity::of(PASSES - 1).destination();

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    #[inline]
    pub const fn of(pass: usize) -> Self {
        if pass & 1 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    #[inline]
    pub const fn destination(self) -> Slot {
        match self {
            Parity::Even => Slot::Pong,
            Parity::Odd => Slot::Ping,
        }
    }
}

/// Where a pass reads from.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Source {
    Input,
    Scratch(Slot),
}

impl Source {
    #[inline]
    pub fn of(pass: usize) -> Self {
        if pass == 0 {
            Source::Input
        } else {
            Source::Scratch(Parity::of(pass).destination().other())
        }
    }
}

#[inline]
fn trace_pass(pass: usize, parity: Parity, source: Source) {
    trace!(
        pass,
        ?parity,
        ?source,
        destination = ?parity.destination(),
        "radix pass"
    );
}

/// Sort every element of `view` into a fresh vec.
///
/// # Errors
/// Returns [`Error::OutOfMemory`] if the scratch region cannot be allocated. No partial output
/// is produced.
pub fn lsb_sort(view: &BufferView, order: KeyOrder) -> Result<Vec<i32>> {
    // By definition, this is already sorted
    if view.len() < 2 {
        let mut out = try_with_capacity(view.len())?;
        out.extend(view.iter());
        return Ok(out);
    }

    let mut scratch = ScratchRegion::<i32>::allocate(view.len())?;
    debug_assert_eq!(scratch.len(), view.len());

    for pass in 0..PASSES {
        let parity = Parity::of(pass);
        let source = Source::of(pass);
        let buffers = scratch.pass_buffers(parity.destination());

        trace_pass(pass, parity, source);

        match source {
            Source::Input => digit_pass(
                view.iter().map(|v| (v, v)),
                buffers.destination,
                buffers.offsets,
                buffers.counts,
                pass,
                order,
            ),
            Source::Scratch(slot) => {
                debug_assert_eq!(slot, parity.destination().other());

                digit_pass(
                    buffers.resting.iter().map(|v| (*v, *v)),
                    buffers.destination,
                    buffers.offsets,
                    buffers.counts,
                    pass,
                    order,
                )
            }
        }
    }

    Ok(scratch.into_slot(RESULT_SLOT))
}

/// Stable ordering of `view`: the input indices in the order [`lsb_sort`] would place their
/// elements. Equal keys keep ascending indices.
///
/// # Errors
/// * [`Error::InvalidArgument`] if the buffer has more elements than a `u32` index can address
/// * [`Error::OutOfMemory`] if the scratch region cannot be allocated
pub fn lsb_ordering(view: &BufferView, order: KeyOrder) -> Result<Vec<u32>> {
    let len = u32::try_from(view.len()).map_err(|_| {
        Error::invalid_argument(format!(
            "{} elements cannot be indexed with 32-bit indices",
            view.len()
        ))
    })?;

    if len < 2 {
        let mut out = try_with_capacity(view.len())?;
        out.extend(0..len);
        return Ok(out);
    }

    let mut scratch = ScratchRegion::<u32>::allocate(view.len())?;

    for pass in 0..PASSES {
        let parity = Parity::of(pass);
        let source = Source::of(pass);
        let buffers = scratch.pass_buffers(parity.destination());

        trace_pass(pass, parity, source);

        match source {
            Source::Input => digit_pass(
                view.iter().zip(0..len),
                buffers.destination,
                buffers.offsets,
                buffers.counts,
                pass,
                order,
            ),
            Source::Scratch(_) => digit_pass(
                buffers
                    .resting
                    .iter()
                    .map(|i| (view.element_at(*i as usize), *i)),
                buffers.destination,
                buffers.offsets,
                buffers.counts,
                pass,
                order,
            ),
        }
    }

    Ok(scratch.into_slot(RESULT_SLOT))
}
