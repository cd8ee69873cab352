//! safeloader-core - codec for the TP-Link SafeLoader container format
//!
//! The SafeLoader format is used by the stock bootloader of a family of
//! TP-Link devices (Pharos CPE/WBS, Archer routers, Deco mesh nodes, EAP
//! access points, range extenders). This crate implements the format
//! end-to-end:
//!
//! - [`board`] - the registry of supported boards and their flash layouts
//! - [`meta`] - the small framed metadata partitions (`soft-version`,
//!   `support-list`, `extra-para`) and the `partition-table` payload
//! - [`builder`] - assembly of factory and sysupgrade images
//! - [`container`] - parsing of existing images: dialect detection, the
//!   embedded partition table, extraction and sysupgrade conversion
//!
//! The crate operates purely on byte buffers; file handling, CLI parsing
//! and clock/environment access belong to the caller.
//!
//! # Example
//!
//! ```ignore
//! use safeloader_core::{board, builder::BuildRequest};
//!
//! let profile = board::find("CPE510").ok_or("unknown board")?;
//! let image = safeloader_core::builder::build(BuildRequest {
//!     profile,
//!     kernel,
//!     rootfs,
//!     revision: 0,
//!     add_jffs2_eof: false,
//!     sysupgrade: false,
//!     timestamp: chrono::Utc::now(),
//! })?;
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod board;
pub mod builder;
pub mod container;
pub mod error;
pub mod meta;
pub mod partition;

pub use error::{Error, Result};
