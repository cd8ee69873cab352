//! CLI argument parsing
//!
//! The tool keeps the traditional single-letter option interface: the mode
//! is implied by which options are present (`-i`, `-x`/`-d`, `-z`, or the
//! build options), mirroring how device build systems invoke it.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "safeloader")]
#[command(version, about = "Build and inspect TP-Link SafeLoader firmware images")]
pub struct Cli {
    /// Show info about the given firmware image
    #[arg(short = 'i', value_name = "FILE")]
    pub info: Option<PathBuf>,

    /// Extract all partitions of a factory/OEM image (use with -d)
    #[arg(short = 'x', value_name = "FILE")]
    pub extract: Option<PathBuf>,

    /// Destination directory for extracted partitions
    #[arg(short = 'd', value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Convert a factory/OEM image into a sysupgrade image (use with -o)
    #[arg(short = 'z', value_name = "FILE")]
    pub convert: Option<PathBuf>,

    /// Create an image for the given board
    #[arg(short = 'B', value_name = "BOARD")]
    pub board: Option<String>,

    /// Kernel image to embed
    #[arg(short = 'k', value_name = "FILE")]
    pub kernel: Option<PathBuf>,

    /// Rootfs image to embed
    #[arg(short = 'r', value_name = "FILE")]
    pub rootfs: Option<PathBuf>,

    /// Output file
    #[arg(short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Revision number stored in the soft-version record (e.g. r123)
    #[arg(short = 'V', value_name = "REV")]
    pub revision: Option<String>,

    /// Add jffs2 end-of-filesystem markers to the rootfs
    #[arg(short = 'j')]
    pub jffs2: bool,

    /// Create a sysupgrade instead of a factory image
    #[arg(short = 'S')]
    pub sysupgrade: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
