use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Debug, Parser)]
#[command(
    name = "lcdfm",
    about = "Browse a directory tree and open files by extension",
    version = version_tag()
)]
pub struct Args {
    /// Directory the browser never leaves
    pub root: PathBuf,

    /// Tab-separated `extension<TAB>program` table
    pub config: PathBuf,

    /// Write debug logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

pub fn parse_args<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args)
}

fn build_version_tag() -> Option<&'static str> {
    option_env!("LCDFM_BUILD_VERSION").and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}

fn version_tag() -> &'static str {
    build_version_tag().unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Routes `log` records to `path`; the terminal itself is owned by the UI.
pub fn init_logger(path: &Path) -> std::io::Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_file = File::create(path)?;
    let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    Ok(())
}
