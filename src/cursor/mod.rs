// src/cursor/mod.rs
//! The [`BitCursor`] type and its codec primitives
//!
//! Split by concern: [`core`] holds state, navigation, and the capacity
//! policy; [`bits`] the sub-byte codec; [`scalar`] the byte-aligned codec;
//! [`strings`] the text layer; [`search`] read-only scanning; [`splice`]
//! buffer surgery; [`accessors`] the generated convenience names.

pub mod accessors;
pub mod bits;
pub mod core;
pub mod scalar;
pub mod search;
pub mod splice;
pub mod strings;

pub use self::core::{BitCursor, CursorOptions, Endian};
pub use strings::{PrefixSize, StringKind, StringOptions};
