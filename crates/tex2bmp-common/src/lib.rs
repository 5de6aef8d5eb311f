//! Common utilities for tex2bmp.
//!
//! This crate provides the pieces shared by the format crates:
//!
//! - [`BinaryReader`] - Bounds-checked little-endian reading from byte slices
//! - [`Error`] - The error raised when a read runs past the end of a buffer

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;
