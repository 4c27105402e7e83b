//! Decompilation progress from the linker map.
//!
//! A symbol whose defining source is a `.c` file counts as ported;
//! one still fed from a `.s` fragment does not.

use std::fmt::Formatter;
use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Serialize;

use crate::error::ToolError;

lazy_static! {
    static ref MAP_SYMBOL: Regex =
        Regex::new(r"0x([0-9a-fA-F]+)\s+(\w+)\s+(\S+\.(c|s))").unwrap();
}

/// One symbol line from a GNU ld map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSymbol {
    pub name: String,
    pub addr: u64,
    pub source: String,
}

#[derive(Debug, Default)]
pub struct MapSummary {
    pub from_c: Vec<MapSymbol>,
    pub from_asm: Vec<MapSymbol>,
}

pub fn parse_map_file(path: &Path) -> Result<MapSummary, ToolError> {
    let content =
        fs::read_to_string(path).map_err(|_| ToolError::MapFileNotFound(path.to_path_buf()))?;
    Ok(scan_map(&content))
}

/// Symbol scan over raw map text. Map layouts vary between linkers;
/// the pattern covers the common `address name source` form.
pub fn scan_map(content: &str) -> MapSummary {
    let mut summary = MapSummary::default();
    for cap in MAP_SYMBOL.captures_iter(content) {
        let sym = MapSymbol {
            name: cap[2].to_string(),
            addr: u64::from_str_radix(&cap[1], 16).unwrap_or(0),
            source: cap[3].to_string(),
        };
        match &cap[4] {
            "c" => summary.from_c.push(sym),
            _ => summary.from_asm.push(sym),
        }
    }
    summary
}

/// Size of the original binary, for the byte columns. A missing
/// binary is a warning, not an error; the byte columns then read zero.
pub fn binary_size(path: &Path) -> u64 {
    match fs::metadata(path) {
        Ok(m) => m.len(),
        Err(_) => {
            println!("Warning: Binary not found: {}", path.display());
            0
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Progress {
    pub total_functions: usize,
    pub decompiled_functions: usize,
    pub function_percent: f64,
    pub total_bytes: u64,
    pub decompiled_bytes: u64,
    pub byte_percent: f64,
}

impl Progress {
    pub fn calculate(summary: &MapSummary, total_bytes: u64) -> Self {
        let total = summary.from_c.len() + summary.from_asm.len();
        let decompiled = summary.from_c.len();
        if total == 0 {
            return Self {
                total_functions: 0,
                decompiled_functions: 0,
                function_percent: 0.0,
                total_bytes,
                decompiled_bytes: 0,
                byte_percent: 0.0,
            };
        }
        let function_percent = decompiled as f64 / total as f64 * 100.0;
        // Byte accounting would need per-function sizes from the map;
        // the function ratio stands in for it.
        Self {
            total_functions: total,
            decompiled_functions: decompiled,
            function_percent,
            total_bytes,
            decompiled_bytes: (total_bytes as f64 * function_percent / 100.0) as u64,
            byte_percent: function_percent,
        }
    }
}

const BAR_WIDTH: usize = 40;

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "  Decompilation Progress")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f)?;
        writeln!(
            f,
            "  Functions: {:>5} / {:<5} ({:.1}%)",
            self.decompiled_functions, self.total_functions, self.function_percent
        )?;
        writeln!(
            f,
            "  Bytes:     {:>5} / {:<5} ({:.1}%)",
            self.decompiled_bytes, self.total_bytes, self.byte_percent
        )?;
        writeln!(f)?;
        let filled = (BAR_WIDTH as f64 * self.function_percent / 100.0) as usize;
        writeln!(
            f,
            "  [{}{}] {:.1}%",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            self.function_percent
        )
    }
}
