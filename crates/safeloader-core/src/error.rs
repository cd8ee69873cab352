//! Error types for safeloader-core

use thiserror::Error;

/// Errors produced while building or parsing SafeLoader images
#[derive(Debug, Error)]
pub enum Error {
    /// Board id not present in the registry
    #[error("unsupported board `{0}`")]
    UnknownBoard(String),

    /// Kernel image does not fit the `firmware` flash partition
    #[error("kernel image too big (0x{size:x} bytes, firmware partition holds 0x{max:x})")]
    KernelTooBig {
        /// Kernel length in bytes
        size: usize,
        /// Size of the `firmware` flash partition
        max: u32,
    },

    /// An embedded partition exceeds its flash partition
    #[error("`{name}` partition too big (more than {max} bytes)")]
    PartitionTooBig {
        /// Partition name
        name: String,
        /// Size of the matching flash partition
        max: u32,
    },

    /// A textual partition table does not fit its 2048-byte window
    #[error("{0} partition table overflow")]
    TableOverflow(&'static str),

    /// A required partition is absent
    #[error("can not find `{0}` partition")]
    MissingPartition(String),

    /// No partition table header where one was expected
    #[error("no `{0}` partition table found")]
    InvalidTable(&'static str),

    /// A partition table row does not follow the grammar
    #[error("malformed `{0}` partition table entry")]
    MalformedEntry(&'static str),

    /// The flash partition table does not start with its 4-byte magic
    #[error("flash partition table magic mismatch")]
    BadMagic,

    /// Image or record shorter than its framing requires
    #[error("image truncated ({0} bytes)")]
    Truncated(usize),

    /// First sysupgrade partition does not precede the last
    #[error("`{first}` does not precede `{last}` in the flash layout")]
    SysupgradeWindow {
        /// Name of the first sysupgrade partition
        first: String,
        /// Name of the last sysupgrade partition
        last: String,
    },
}

/// Result type alias using the crate Error
pub type Result<T> = core::result::Result<T, Error>;
