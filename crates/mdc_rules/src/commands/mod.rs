//! Command families.

pub mod convert;
pub mod validate;
