//! Common types, macros and project tooling for PSX decompilation
//! work: the fixed-width type vocabulary and attribute shims that
//! hand-ported code leans on, plus the map-file progress tracker,
//! m2c context generator and asm-differ settings writer used by the
//! project workflow.

#[macro_use]
extern crate static_assertions;

#[macro_use]
extern crate lazy_static;

pub mod bits;
pub mod config;
pub mod ctx;
pub mod error;
pub mod fixed;
pub mod progress;
pub mod types;
pub mod utils;

mod asm;
mod macros;

#[cfg(test)]
mod test;

pub use crate::fixed::{fixed16, fixed32};
pub use crate::types::{f32, f64, s16, s32, s64, s8, u16, u32, u64, u8};
pub use crate::types::{Bool, FALSE, NULL, TRUE};
