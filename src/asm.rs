//! Inclusion of raw assembly fragments for not-yet-ported routines.
//!
//! With the `generated-asm-macros` feature enabled the fallback below
//! is compiled out and a generator-produced `include_asm!` (e.g. from
//! splat) takes over.

/// Pulls `DIR/FUNC.s` into the text section verbatim, with assembler
/// reordering and `$at` protection switched off around the fragment.
/// A fragment that does not exist fails the build at assembly time.
#[cfg(not(feature = "generated-asm-macros"))]
#[macro_export]
macro_rules! include_asm {
    ($dir:literal, $func:literal) => {
        ::core::arch::global_asm!(
            ".section .text",
            ".set noat",
            ".set noreorder",
            concat!(".include \"", $dir, "/", $func, ".s\""),
            ".set reorder",
            ".set at",
        );
    };
}
