//! Command-line interface implementation for the generator.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::DEFAULT_CONFIG_FILE;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Command-line arguments structure.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a white-label iOS WebXR project", long_about = None)]
pub struct Args {
    /// Path to the configuration JSON file
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the configuration JSON file (takes precedence over CONFIG)
    #[arg(short = 'f', long = "config-file", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Output directory (default: inside the template directory, named after the project)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Template directory (default: the generator's own directory)
    #[arg(short, long, value_name = "DIR")]
    pub template: Option<PathBuf>,

    /// Ask for every configuration value instead of reading a file
    #[arg(short, long, conflicts_with_all = ["config", "config_file"])]
    pub interactive: bool,

    /// Replace an existing output directory without asking
    #[arg(short = 'y', long = "yes")]
    pub skip_overwrite_check: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// `--config-file`, then the positional argument, then the default file name.
    pub fn config_path(&self) -> PathBuf {
        self.config_file
            .clone()
            .or_else(|| self.config.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Explicit template directory, or `home_dir`.
    pub fn template_dir(&self, home_dir: &Path) -> PathBuf {
        self.template.clone().unwrap_or_else(|| home_dir.to_path_buf())
    }
}

/// Directory containing the running executable, falling back to the current directory.
pub fn generator_home() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default()
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
