//! Fixed-width type vocabulary shared by all ported code.
//!
//! Every alias maps to exactly one machine representation, regardless
//! of the host toolchain. The asserts at the bottom stop the build if
//! a port ever changes that.

#![allow(non_camel_case_types)]

use core::ffi::c_void;

pub type s8 = i8;
pub type s16 = i16;
pub type s32 = i32;
pub type s64 = i64;

pub type u8 = core::primitive::u8;
pub type u16 = core::primitive::u16;
pub type u32 = core::primitive::u32;
pub type u64 = core::primitive::u64;

pub type f32 = core::primitive::f32;
pub type f64 = core::primitive::f64;

/// The console boolean: a 32-bit signed integer. Rust's own `bool`
/// cannot carry that width, so ported code spells it `Bool` and
/// compares against [`TRUE`] and [`FALSE`].
pub type Bool = s32;

pub const TRUE: Bool = 1;
pub const FALSE: Bool = 0;

/// Null pointer constant for hand-ported pointer code.
pub const NULL: *const c_void = core::ptr::null();

const_assert!(core::mem::size_of::<s8>() == 1);
const_assert!(core::mem::size_of::<s16>() == 2);
const_assert!(core::mem::size_of::<s32>() == 4);
const_assert!(core::mem::size_of::<s64>() == 8);
const_assert!(core::mem::size_of::<u8>() == 1);
const_assert!(core::mem::size_of::<u16>() == 2);
const_assert!(core::mem::size_of::<u32>() == 4);
const_assert!(core::mem::size_of::<u64>() == 8);
const_assert!(core::mem::size_of::<f32>() == 4);
const_assert!(core::mem::size_of::<f64>() == 8);
const_assert!(core::mem::size_of::<Bool>() == 4);
