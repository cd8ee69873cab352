//! Build command: assemble a factory or sysupgrade image

use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use safeloader_core::board;
use safeloader_core::builder::{build, BuildRequest};
use safeloader_core::Error as CoreError;

pub struct Args<'a> {
    pub board: &'a str,
    pub kernel: &'a Path,
    pub rootfs: &'a Path,
    pub output: &'a Path,
    pub revision: Option<&'a str>,
    pub add_jffs2_eof: bool,
    pub sysupgrade: bool,
}

pub fn run(args: Args<'_>) -> Result<(), Box<dyn Error>> {
    let profile = board::find(args.board)
        .ok_or_else(|| CoreError::UnknownBoard(args.board.to_string()))?;

    let revision = match args.revision {
        Some(rev) => parse_revision(rev)?,
        None => 0,
    };
    let timestamp = build_timestamp()?;

    let kernel = read_input(args.kernel)?;
    let rootfs = read_input(args.rootfs)?;

    log::debug!(
        "building {} image for {}",
        if args.sysupgrade { "sysupgrade" } else { "factory" },
        profile.id
    );

    let image = build(BuildRequest {
        profile,
        kernel,
        rootfs,
        revision,
        add_jffs2_eof: args.add_jffs2_eof,
        sysupgrade: args.sysupgrade,
        timestamp,
    })?;

    fs::write(args.output, &image)
        .map_err(|e| format!("unable to write `{}': {}", args.output.display(), e))?;

    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>, Box<dyn Error>> {
    fs::read(path)
        .map_err(|e| format!("unable to read `{}': {}", path.display(), e).into())
}

/// Parse a `-V` argument of the form `r123` (the `r` is optional)
fn parse_revision(value: &str) -> Result<u32, Box<dyn Error>> {
    let digits = value.strip_prefix('r').unwrap_or(value);
    digits
        .parse()
        .map_err(|_| format!("invalid revision `{}'", value).into())
}

/// Resolve the build timestamp, honouring SOURCE_DATE_EPOCH
///
/// An empty variable counts as unset; anything else must be a decimal Unix
/// timestamp.
fn build_timestamp() -> Result<DateTime<Utc>, Box<dyn Error>> {
    match env::var_os("SOURCE_DATE_EPOCH") {
        None => Ok(Utc::now()),
        Some(value) if value.is_empty() => Ok(Utc::now()),
        Some(value) => {
            let seconds: i64 = value
                .to_str()
                .and_then(|s| s.parse().ok())
                .ok_or("invalid SOURCE_DATE_EPOCH")?;
            DateTime::from_timestamp(seconds, 0).ok_or_else(|| "invalid SOURCE_DATE_EPOCH".into())
        }
    }
}
