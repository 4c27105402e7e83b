use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{Parser, Subcommand};

use psx_common::config::DiffSettings;
use psx_common::ctx::{self, CleanupPasses};
use psx_common::error::ToolError;
use psx_common::progress::{self, Progress};

const SETTINGS_FILE: &str = "diff_settings.json";

#[derive(Parser)]
#[command(name = "psx-common", about = "PSX decompilation project tools")]
struct Cli {
    /// Be verbose
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    tool: Tool,
}

#[derive(Subcommand)]
enum Tool {
    /// Calculate decompilation progress from the linker map
    Progress {
        /// Linker map file; defaults to the mapfile from the settings
        map_file: Option<PathBuf>,

        /// Original binary for size reference; defaults to the base image
        binary: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a context file for m2c and decomp.me
    Ctx {
        /// File to preprocess
        #[arg(default_value = "include/common.h")]
        file: PathBuf,

        /// Define macro
        #[arg(short = 'D', default_value = "VERSION_US")]
        define: Vec<String>,

        /// Add directory to the include search path
        #[arg(short = 'I')]
        include: Vec<String>,

        /// Keep `__attribute__' lines instead of stripping them
        #[arg(long)]
        keep_attributes: bool,
    },

    /// Write the asm-differ settings file
    DiffConfig {
        /// Output file name
        #[arg(short, default_value = SETTINGS_FILE)]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        println!("{}", e);
        exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ToolError> {
    match &cli.tool {
        Tool::Progress {
            map_file,
            binary,
            json,
        } => {
            let (map_path, bin_path) = resolve_progress_inputs(map_file, binary)?;
            let summary = progress::parse_map_file(&map_path)?;
            if cli.verbose {
                println!(
                    "{} symbols from C, {} from assembly",
                    summary.from_c.len(),
                    summary.from_asm.len()
                );
            }
            let p = Progress::calculate(&summary, progress::binary_size(&bin_path));
            if *json {
                println!("{}", serde_json::to_string_pretty(&p)?);
            } else {
                println!("{}", p);
            }
        }
        Tool::Ctx {
            file,
            define,
            include,
            keep_attributes,
        } => {
            let mut passes = CleanupPasses::all();
            if *keep_attributes {
                passes.remove(CleanupPasses::STRIP_ATTRIBUTES);
            }
            println!("Generating context from: {}", file.display());
            let root = std::env::current_dir()?;
            let report = ctx::generate(&root, file, define, include, passes)?;
            println!("Context saved to: {}", report.output.display());
            println!("Size: {} bytes", report.bytes);
        }
        Tool::DiffConfig { output } => {
            let settings = DiffSettings::default();
            let mut f = File::create(output)?;
            settings.write_to_file(&mut f)?;
            if cli.verbose {
                println!("Settings written to {}", output.display());
            }
        }
    }
    Ok(())
}

fn resolve_progress_inputs(
    map_file: &Option<PathBuf>,
    binary: &Option<PathBuf>,
) -> Result<(PathBuf, PathBuf), ToolError> {
    if let (Some(m), Some(b)) = (map_file, binary) {
        return Ok((m.clone(), b.clone()));
    }
    let path = Path::new(SETTINGS_FILE);
    let settings = if path.exists() {
        DiffSettings::load(path)?
    } else {
        DiffSettings::default()
    };
    let map_path = match map_file {
        Some(m) => m.clone(),
        None => PathBuf::from(settings.mapfile),
    };
    let bin_path = match binary {
        Some(b) => b.clone(),
        None => PathBuf::from(settings.baseimg),
    };
    Ok((map_path, bin_path))
}
