//! Generated sample data tables, one module per sample.
//!
//! Each module is emitted by `kick-tablegen` and declares two items: the raw
//! little-endian 16-bit PCM bytes (`SAMPLENN`) and the paired byte length
//! constant (`SAMPLENN_LEN`). Regenerate with `kick-tablegen --emit-mod`
//! instead of editing by hand.

mod sample01;
mod sample02;
mod sample03;
mod sample04;
mod sample05;
mod sample06;
mod sample07;
mod sample08;

pub use sample01::{SAMPLE01, SAMPLE01_LEN};
pub use sample02::{SAMPLE02, SAMPLE02_LEN};
pub use sample03::{SAMPLE03, SAMPLE03_LEN};
pub use sample04::{SAMPLE04, SAMPLE04_LEN};
pub use sample05::{SAMPLE05, SAMPLE05_LEN};
pub use sample06::{SAMPLE06, SAMPLE06_LEN};
pub use sample07::{SAMPLE07, SAMPLE07_LEN};
pub use sample08::{SAMPLE08, SAMPLE08_LEN};
