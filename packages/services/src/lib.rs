pub mod abstract_controls;

#[cfg(test)]
pub mod test_helpers;

pub use abstract_controls::*;
