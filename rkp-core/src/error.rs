//! Error types, re-exported from `rkp-error`

pub use rkp_error::{PowerError, Result};
