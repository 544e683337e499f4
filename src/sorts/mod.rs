pub mod digit_pass;
pub mod lsb_sort;

pub use digit_pass::*;
pub use lsb_sort::*;
