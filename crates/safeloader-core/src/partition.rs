//! Partition types and the textual partition table grammars
//!
//! Two closely related tables are stored as text inside SafeLoader images:
//!
//! - the *image partition table*, rows starting with `fwup-ptn` and ending
//!   with `\t\r\n`, which lists the payloads embedded in the image;
//! - the *flash partition table*, rows starting with `partition` and ending
//!   with `\n`, which describes the on-device flash geometry.
//!
//! Both live in a 2048-byte window, use fixed-width 5-hex offsets and end
//! with a NUL byte followed by 0xff fill. The parser never reads past the
//! window and caps names at 31 bytes.

use crate::{Error, Result};

/// Size of a textual partition table window
pub const PAYLOAD_TABLE_SIZE: usize = 0x800;

/// Longest partition name accepted by a table row
pub const MAX_NAME_LEN: usize = 31;

/// A named region of flash, either declared by a profile or parsed from a
/// partition table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashPartition {
    /// Partition name
    pub name: String,
    /// Base offset
    pub base: u32,
    /// Size in bytes
    pub size: u32,
}

/// A named payload embedded in a SafeLoader image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePartition {
    /// Partition name
    pub name: String,
    /// Payload bytes
    pub data: Vec<u8>,
}

/// Which of the two table grammars to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// `fwup-ptn` rows: payloads embedded in the image
    Image,
    /// `partition` rows: on-device flash geometry
    Flash,
}

impl TableKind {
    fn header(self) -> &'static [u8] {
        match self {
            TableKind::Image => b"fwup-ptn",
            TableKind::Flash => b"partition",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TableKind::Image => "fwup-ptn",
            TableKind::Flash => "partition",
        }
    }
}

/// Parse a textual partition table out of `buf`
///
/// Walks rows from the start of the buffer (bounded by the 2048-byte
/// window) and stops at the first line that does not begin with the table
/// header. The buffer must start with at least one row.
pub fn parse_table(buf: &[u8], kind: TableKind) -> Result<Vec<FlashPartition>> {
    let window = &buf[..buf.len().min(PAYLOAD_TABLE_SIZE)];
    let header = kind.header();

    if !window.starts_with(header) {
        log::debug!("no `{}` row at table start", kind.label());
        return Err(Error::InvalidTable(kind.label()));
    }

    let mut entries = Vec::new();
    let mut rest = window;
    while rest.starts_with(header) {
        // A row always ends in \n; a missing terminator means the text ran
        // into the 0xff fill and the table is over.
        let Some(end) = rest.iter().position(|&b| b == b'\n') else {
            break;
        };
        let mut line = &rest[..end];
        while let Some((&last, head)) = line.split_last() {
            if last == b'\r' || last == b'\t' {
                line = head;
            } else {
                break;
            }
        }
        entries.push(parse_row(line, kind)?);
        rest = &rest[end + 1..];
    }

    Ok(entries)
}

/// Parse one `<header> <name> base 0x%05x size 0x%05x` row
fn parse_row(line: &[u8], kind: TableKind) -> Result<FlashPartition> {
    let mut fields = line.split(|&b| b == b' ').filter(|f| !f.is_empty());

    let malformed = || Error::MalformedEntry(kind.label());

    let _header = fields.next().ok_or_else(malformed)?;
    let name = fields.next().ok_or_else(malformed)?;
    if fields.next() != Some(b"base".as_slice()) {
        return Err(malformed());
    }
    let base = parse_hex(fields.next().ok_or_else(malformed)?, kind)?;
    if fields.next() != Some(b"size".as_slice()) {
        return Err(malformed());
    }
    let size = parse_hex(fields.next().ok_or_else(malformed)?, kind)?;

    let name = &name[..name.len().min(MAX_NAME_LEN)];
    Ok(FlashPartition {
        name: String::from_utf8_lossy(name).into_owned(),
        base,
        size,
    })
}

fn parse_hex(token: &[u8], kind: TableKind) -> Result<u32> {
    let malformed = || Error::MalformedEntry(kind.label());
    let s = core::str::from_utf8(token).map_err(|_| malformed())?;
    let s = s.strip_prefix("0x").unwrap_or(s);
    u32::from_str_radix(s, 16).map_err(|_| malformed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[u8]) -> Vec<u8> {
        let mut buf = rows.to_vec();
        buf.push(0x00);
        buf.resize(PAYLOAD_TABLE_SIZE, 0xff);
        buf
    }

    #[test]
    fn parses_image_rows() {
        let buf = table(
            b"fwup-ptn partition-table base 0x00800 size 0x00800\t\r\n\
              fwup-ptn os-image base 0x01000 size 0x113b45\t\r\n\
              fwup-ptn file-system base 0x114b45 size 0x1d0004\t\r\n",
        );
        let entries = parse_table(&buf, TableKind::Image).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "partition-table");
        assert_eq!(entries[0].base, 0x800);
        assert_eq!(entries[0].size, 0x800);
        assert_eq!(entries[2].name, "file-system");
        assert_eq!(entries[2].base, 0x114b45);
        assert_eq!(entries[2].size, 0x1d0004);
    }

    #[test]
    fn parses_flash_rows() {
        let buf = table(
            b"partition fs-uboot base 0x00000 size 0x20000\n\
              partition os-image base 0x40000 size 0x1190000\n",
        );
        let entries = parse_table(&buf, TableKind::Flash).unwrap();
        assert_eq!(entries.len(), 2);
        // wider-than-5-hex offsets still parse
        assert_eq!(entries[1].size, 0x1190000);
    }

    #[test]
    fn stops_at_first_foreign_line() {
        let buf = table(b"partition a base 0x00000 size 0x10000\nsomething else\n");
        let entries = parse_table(&buf, TableKind::Flash).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn long_names_are_truncated() {
        let name = "x".repeat(40);
        let row = format!("partition {name} base 0x00000 size 0x10000\n");
        let entries = parse_table(&table(row.as_bytes()), TableKind::Flash).unwrap();
        assert_eq!(entries[0].name.len(), MAX_NAME_LEN);
    }

    #[test]
    fn rejects_missing_header() {
        let buf = table(b"fwup-ptn a base 0x0 size 0x1\t\r\n");
        assert!(matches!(
            parse_table(&buf, TableKind::Flash),
            Err(Error::InvalidTable("partition"))
        ));
    }

    #[test]
    fn rejects_malformed_rows() {
        let buf = table(b"partition name-only\n");
        assert!(parse_table(&buf, TableKind::Flash).is_err());
        let buf = table(b"partition a base 0xZZ size 0x1\n");
        assert!(parse_table(&buf, TableKind::Flash).is_err());
    }

    #[test]
    fn never_reads_past_the_window() {
        // a buffer larger than the window whose rows continue past 2048
        let mut buf = Vec::new();
        for i in 0..60 {
            buf.extend_from_slice(
                format!("partition name-{i:03} base 0x{:05x} size 0x10000\n", i * 0x10000)
                    .as_bytes(),
            );
        }
        assert!(buf.len() > PAYLOAD_TABLE_SIZE);
        let entries = parse_table(&buf, TableKind::Flash).unwrap();
        // rows at the window edge are cut off; nothing beyond is seen
        assert!(entries.len() < 60);
    }
}
