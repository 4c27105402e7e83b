//! Item-level shims for the attribute conventions ported code relies
//! on. Each one forwards to the native attribute; they are hints to
//! the compiler and never change semantics.

/// Number of elements in a fixed-size array.
///
/// ```
/// let palette = [0u16; 7];
/// assert_eq!(psx_common::array_count!(palette), 7);
/// ```
#[macro_export]
macro_rules! array_count {
    ($arr:expr) => {
        $arr.len()
    };
}

/// Marks a routine as a small internal helper the optimizer should
/// fold into its callers.
///
/// ```
/// psx_common::inline_hint!(fn mid(a: i32, b: i32) -> i32 { a + (b - a) / 2 });
/// assert_eq!(mid(0, 10), 5);
/// ```
#[macro_export]
macro_rules! inline_hint {
    ($item:item) => {
        #[inline]
        $item
    };
}

/// Keeps a routine out of line, e.g. so it holds a stable address for
/// overlay patching.
#[macro_export]
macro_rules! no_inline {
    ($item:item) => {
        #[inline(never)]
        $item
    };
}

/// Aligns a type definition to a power-of-two byte boundary. Only
/// placements `#[repr(align)]` accepts will build; anything else is a
/// compile error, never a silent default.
///
/// ```
/// psx_common::aligned!(16, struct DmaBlock([u8; 64]););
/// assert_eq!(core::mem::align_of::<DmaBlock>(), 16);
/// ```
#[macro_export]
macro_rules! aligned {
    ($boundary:literal, $item:item) => {
        #[repr(align($boundary))]
        $item
    };
}

/// Pins a static so the linker keeps it even when nothing in the call
/// graph references it (hand-written assembly and linker scripts do).
///
/// ```
/// psx_common::retain!(static JUMP_TABLE: [u32; 4] = [0; 4];);
///
/// fn main() {
///     assert_eq!(JUMP_TABLE.len(), 4);
/// }
/// ```
#[macro_export]
macro_rules! retain {
    ($item:item) => {
        #[used]
        $item
    };
}
