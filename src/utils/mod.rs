#[cfg(any(test, feature = "bench"))]
pub mod test_utils;
