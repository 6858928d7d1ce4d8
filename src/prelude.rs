//! Prelude module for jalali_date crate.
//!
//! Re-exports the derive macros the date types share.

pub use derive_more::Display;
