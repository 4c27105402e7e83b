//! Project settings shared with the asm-differ workflow.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ToolError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffSettings {
    pub arch: String,
    /// Original binary ripped from the disk image.
    pub baseimg: String,
    /// Binary produced by the build.
    pub myimg: String,
    pub mapfile: String,
    pub make_command: Vec<String>,
    pub source_directories: Vec<String>,
    pub objdump_executable: String,
    pub symbol_addrs_path: String,
    pub show_line_numbers: bool,
    pub show_rodata_refs: bool,
    /// Context lines shown around differences.
    pub context: u32,
}

impl Default for DiffSettings {
    fn default() -> Self {
        Self {
            arch: "mips".to_string(),
            baseimg: "disks/us/SLUS_000.00".to_string(),
            myimg: "build/us/game.bin".to_string(),
            mapfile: "build/us/game.map".to_string(),
            make_command: vec!["make".to_string()],
            source_directories: vec!["src".to_string(), "include".to_string()],
            objdump_executable: "mipsel-linux-gnu-objdump".to_string(),
            symbol_addrs_path: "config/symbols.us.txt".to_string(),
            show_line_numbers: true,
            show_rodata_refs: true,
            context: 3,
        }
    }
}

impl DiffSettings {
    pub fn load(path: &Path) -> Result<Self, ToolError> {
        let text = std::fs::read_to_string(path)
            .map_err(|_| ToolError::InputNotFound(path.to_path_buf()))?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn write_to_file(&self, f: &mut File) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self)?;
        write!(f, "{}", json)
    }
}
