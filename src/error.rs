use std::fmt::Formatter;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ToolError {
    MapFileNotFound(PathBuf),
    InputNotFound(PathBuf),
    PreprocessorUnavailable(String, std::io::Error),
    PreprocessorFailed(String),
    BadSettings(serde_json::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ToolError::MapFileNotFound(p) => {
                write!(f, "Error: Map file not found: {}", p.display())
            }
            ToolError::InputNotFound(p) => write!(f, "Error: File not found: {}", p.display()),
            ToolError::PreprocessorUnavailable(cmd, e) => {
                write!(f, "cannot run `{}': {}", cmd, e)
            }
            ToolError::PreprocessorFailed(stderr) => {
                write!(f, "preprocessor failed:\n{}", stderr)
            }
            ToolError::BadSettings(e) => write!(f, "bad settings file: {}", e),
            ToolError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl From<std::io::Error> for ToolError {
    fn from(e: std::io::Error) -> Self {
        ToolError::Io(e)
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        ToolError::BadSettings(e)
    }
}
