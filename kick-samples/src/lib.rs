//! # kick-samples
//!
//! Built-in drum sample tables for the kick drum machine, with a fixed-size
//! registry for indexed, read-only access. `no_std`, zero-allocation: every
//! sample is a static little-endian 16-bit PCM byte table generated by
//! `kick-tablegen`, and the registry holds only non-owning references.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Data | [`samples`] | Generated per-sample byte tables and length constants |
//! | Lookup | [`registry`] | Parallel (data, length) tables, checked accessors |
//!
//! ## Quick start
//!
//! ```
//! use kick_samples::registry;
//!
//! assert_eq!(registry::count(), 8);
//!
//! let snare = registry::get(1).unwrap();
//! assert_eq!(snare.len_bytes() as usize, snare.data().len());
//!
//! // Out-of-range lookups are None, never a panic.
//! assert!(registry::get(registry::count()).is_none());
//! ```
//!
//! The tables are immutable for the whole program, so they may be read from
//! any number of threads (or from interrupt context on embedded targets)
//! without synchronization.

#![no_std]

pub mod constants;
pub mod registry;
pub mod samples;
