//! # scansort
//!
//! scansort provides two bulk kernels over flat buffers of 32-bit integers: an inclusive prefix
//! sum and a stable least-significant-digit radix sort. Both read a host-owned buffer without
//! copying it and return a freshly allocated result together with the kernel's elapsed time in
//! milliseconds.
//!
//! ## Usage
//!
//! Anything implementing `BufferSource` can be handed to the kernels. `Vec<i32>`, `[i32]`,
//! `Vec<u32>` and `[u32]` work out-of-the-box, and `HostBuffer` wraps raw bytes plus a declared
//! element width as a language binding would receive them.
//!
//! ```
//! use scansort::BufferKernels;
//!
//! let out = vec![5i32, 3, 8, 1, 9, 2].radix_sort().unwrap();
//! assert_eq!(out.result, vec![1, 2, 3, 5, 8, 9]);
//!
//! let out = vec![1i32, 2, 3, 4].prefix_sum().unwrap();
//! assert_eq!(out.result, vec![1, 3, 6, 10]);
//! assert!(out.elapsed_ms >= 0.0);
//! ```
//!
//! ## Ordering
//!
//! By default the radix sort orders elements by their raw bit pattern read as unsigned, so
//! negative values sort after all non-negative values:
//!
//! ```
//! use scansort::{radix_sort, radix_sort_builder};
//!
//! assert_eq!(radix_sort(&vec![-1i32, 0, 1]).unwrap().result, vec![0, 1, -1]);
//!
//! let signed = radix_sort_builder(&vec![-1i32, 0, 1]).with_signed_order().sort().unwrap();
//! assert_eq!(signed.result, vec![-1, 0, 1]);
//! ```
//!
//! Bit-pattern order is the kernel's contract. Signed order is an opt-in extension on top of
//! it and is never selected by `radix_sort` or `radix_sort_indices`.
//!
//! ## Sort ordering
//!
//! `radix_sort_indices` runs the same passes over input indices and returns the stable
//! ordering of the buffer instead of its values:
//!
//! ```
//! use scansort::radix_sort_indices;
//!
//! let data = vec![30i32, 10, 20, 10];
//! let perm = radix_sort_indices(&data).unwrap().result;
//! assert_eq!(perm, vec![1, 3, 2, 0]);
//! ```
//!
//! ## Errors
//!
//! Buffers whose declared element width is not 4 bytes are rejected with `Error::InvalidWidth`,
//! buffers that cannot be read with `Error::InvalidArgument`, both before anything is allocated.
//! Allocation failure surfaces as `Error::OutOfMemory`. Nothing is retried.
//!
//! ## Logging
//!
//! Kernels emit `tracing` events: `debug` per call and on rejected buffers, `trace` per radix
//! pass. No subscriber is installed by this crate.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, <http://www.apache.org/licenses/LICENSE-2.0>
//! * MIT license, <http://opensource.org/licenses/MIT>
//!
//! at your option.

#[cfg(test)]
mod tests;

pub mod buffer_view;
pub mod counts;
mod error;
mod kernels;
pub mod radix_key;
pub mod scan;
mod scratch;
pub mod sorts;
mod timing;
mod utils;

#[cfg(any(test, feature = "bench"))]
pub use utils::test_utils;

pub use buffer_view::{BufferSource, BufferView, HostBuffer, ELEMENT_WIDTH};
pub use error::{Error, Result};
pub use kernels::*;
pub use radix_key::{KeyOrder, RadixKey};
pub use scratch::Slot;
pub use timing::{timed, Timed};
