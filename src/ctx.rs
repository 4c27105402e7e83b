//! m2c context generation: preprocess a header with the project's
//! flags and strip the constructs m2c chokes on.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use bitflags::bitflags;

use crate::error::ToolError;

bitflags! {
    /// Rewrites applied to preprocessor output before m2c sees it.
    pub struct CleanupPasses: u32 {
        const STRIP_ATTRIBUTES = 1 << 0;
        const REWRITE_SIZEOF_LONG = 1 << 1;
    }
}

/// Option list for the system preprocessor: plain `-E -P` output with
/// the project's conventional include roots, plus caller extensions.
pub fn preprocessor_options(defines: &[String], include: &[String]) -> Vec<String> {
    let mut options = Vec::new();
    options.push("-E".to_string());
    options.push("-P".to_string());
    options.push("-Iinclude".to_string());
    options.push("-Isrc".to_string());
    options.push("-D_LANGUAGE_C".to_string());

    for s in defines {
        options.push(format!("-D{}", s));
    }

    for s in include {
        options.push(format!("-I{}", s));
    }

    options
}

pub fn preprocess(root: &Path, file: &Path, options: &[String]) -> Result<String, ToolError> {
    let output = Command::new("cpp")
        .args(options)
        .arg(file)
        .current_dir(root)
        .output()
        .map_err(|e| ToolError::PreprocessorUnavailable("cpp".to_string(), e))?;
    if !output.status.success() {
        return Err(ToolError::PreprocessorFailed(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Line-oriented cleanup. m2c does not understand `__attribute__` and
/// mis-sizes `long`, so neither may reach it.
pub fn clean(text: &str, passes: CleanupPasses) -> String {
    let mut output = Vec::new();
    for line in text.split('\n') {
        if passes.contains(CleanupPasses::STRIP_ATTRIBUTES) && line.contains("__attribute__") {
            continue;
        }
        if passes.contains(CleanupPasses::REWRITE_SIZEOF_LONG) {
            output.push(line.replace("sizeof(long)", "4"));
        } else {
            output.push(line.to_string());
        }
    }
    output.join("\n")
}

pub struct CtxReport {
    pub output: PathBuf,
    pub bytes: usize,
}

/// Preprocesses `input`, cleans the result and writes `ctx.c` at the
/// project root.
pub fn generate(
    root: &Path,
    input: &Path,
    defines: &[String],
    include: &[String],
    passes: CleanupPasses,
) -> Result<CtxReport, ToolError> {
    if !input.exists() {
        return Err(ToolError::InputNotFound(input.to_path_buf()));
    }
    let processed = preprocess(root, input, &preprocessor_options(defines, include))?;
    let cleaned = clean(&processed, passes);
    let out_path = root.join("ctx.c");
    let mut f = File::create(&out_path)?;
    write!(f, "{}", cleaned)?;
    Ok(CtxReport {
        output: out_path,
        bytes: cleaned.len(),
    })
}
