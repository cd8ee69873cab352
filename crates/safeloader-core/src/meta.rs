//! Meta partition records
//!
//! The `soft-version`, `support-list` and `extra-para` partitions share a
//! common framing: a `{u32 BE content length, u32 zero}` header, the content
//! bytes, and (depending on the board's [`PartTrail`]) a single trailing pad
//! byte. The `partition-table` partition is different: it is a raw
//! 2048-byte payload carrying the flash layout as text.

use chrono::{DateTime, Datelike, Utc};
use zerocopy::byteorder::big_endian::U32;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::board::{PartTrail, Profile, SoftVer};
use crate::partition::{FlashPartition, ImagePartition, PAYLOAD_TABLE_SIZE};
use crate::{Error, Result};

/// Size of the meta partition framing header
pub const META_HEADER_SIZE: usize = 8;

/// Meta partition framing header
#[repr(C)]
#[derive(FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
struct MetaHeader {
    length: U32,
    zero: U32,
}

/// The packed numeric `soft-version` record
///
/// Dates are binary-coded decimal. When the board's compat level is
/// non-zero, the record is followed by one more big-endian u32 holding it.
#[repr(C)]
#[derive(Debug, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
pub struct SoftVersion {
    /// Constant 0xff filler
    pub pad1: u8,
    /// Major version
    pub version_major: u8,
    /// Minor version
    pub version_minor: u8,
    /// Patch version
    pub version_patch: u8,
    /// Century of the build date (BCD)
    pub year_hi: u8,
    /// Year within the century (BCD)
    pub year_lo: u8,
    /// Month of the build date (BCD)
    pub month: u8,
    /// Day of the build date (BCD)
    pub day: u8,
    /// Revision number
    pub rev: U32,
}

impl SoftVersion {
    /// Borrow the packed record from the start of a meta partition's
    /// content, if there is enough of it
    pub fn parse(content: &[u8]) -> Option<&SoftVersion> {
        SoftVersion::ref_from_prefix(content).ok().map(|(v, _)| v)
    }
}

/// Binary-coded decimal representation of an integer in [0, 99]
fn bcd(v: u8) -> u8 {
    0x10 * (v / 10) + v % 10
}

/// Wrap content bytes in the meta partition framing
pub fn framed(name: &str, content: &[u8], trail: PartTrail) -> ImagePartition {
    let header = MetaHeader {
        length: U32::new(content.len() as u32),
        zero: U32::new(0),
    };

    let mut data = Vec::with_capacity(META_HEADER_SIZE + content.len() + 1);
    data.extend_from_slice(header.as_bytes());
    data.extend_from_slice(content);
    if let PartTrail::Pad(value) = trail {
        data.push(value);
    }

    ImagePartition {
        name: name.to_string(),
        data,
    }
}

/// Strip the meta framing from a partition payload, returning the content
///
/// The declared content length must fit the buffer; anything shorter is a
/// truncated record.
pub fn content(data: &[u8]) -> Result<&[u8]> {
    let (header, rest) =
        MetaHeader::ref_from_prefix(data).map_err(|_| Error::Truncated(data.len()))?;
    let len = header.length.get() as usize;
    rest.get(..len).ok_or(Error::Truncated(data.len()))
}

/// Generate the `partition-table` partition
///
/// A raw 2048-byte payload: the 4-byte magic, one `partition <name> base
/// 0x%05x size 0x%05x` line per flash partition, a NUL terminator, then
/// 0xff fill.
pub fn partition_table(name: &str, partitions: &[FlashPartition]) -> Result<ImagePartition> {
    let mut rows = String::new();
    for p in partitions {
        rows.push_str(&format!(
            "partition {} base 0x{:05x} size 0x{:05x}\n",
            p.name, p.base, p.size
        ));
    }

    if 4 + rows.len() + 1 > PAYLOAD_TABLE_SIZE {
        return Err(Error::TableOverflow("flash"));
    }

    let mut data = vec![0xff; PAYLOAD_TABLE_SIZE];
    data[..4].copy_from_slice(&[0x00, 0x04, 0x00, 0x00]);
    data[4..4 + rows.len()].copy_from_slice(rows.as_bytes());
    data[4 + rows.len()] = 0x00;

    Ok(ImagePartition {
        name: name.to_string(),
        data,
    })
}

/// Generate the `soft-version` partition
///
/// Text profiles emit their string with a trailing NUL. Numeric profiles
/// emit the packed record with the build date taken from `timestamp`; the
/// compat level field is only present when the profile declares a non-zero
/// level.
pub fn soft_version(
    profile: &Profile,
    name: &str,
    rev: u32,
    timestamp: DateTime<Utc>,
) -> ImagePartition {
    let (major, minor, patch) = match profile.soft_ver {
        SoftVer::Text(text) => {
            let mut content = text.as_bytes().to_vec();
            content.push(0);
            return framed(name, &content, profile.part_trail);
        }
        SoftVer::Numeric {
            major,
            minor,
            patch,
        } => (major, minor, patch),
    };

    let year = timestamp.year() as u32;
    let record = SoftVersion {
        pad1: 0xff,
        version_major: major,
        version_minor: minor,
        version_patch: patch,
        year_hi: bcd((year / 100) as u8),
        year_lo: bcd((year % 100) as u8),
        month: bcd(timestamp.month() as u8),
        day: bcd(timestamp.day() as u8),
        rev: U32::new(rev),
    };

    let mut content = record.as_bytes().to_vec();
    if profile.soft_ver_compat_level != 0 {
        content.extend_from_slice(&profile.soft_ver_compat_level.to_be_bytes());
    }

    framed(name, &content, profile.part_trail)
}

/// Generate the `support-list` partition
pub fn support_list(profile: &Profile, name: &str) -> ImagePartition {
    framed(name, profile.support_list.as_bytes(), profile.part_trail)
}

/// Generate the `extra-para` partition from the profile's marker bytes
pub fn extra_para(profile: &Profile, name: &str, marker: [u8; 2]) -> ImagePartition {
    framed(name, &marker, profile.part_trail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board;

    #[test]
    fn framing_layout() {
        let part = framed("support-list", b"SupportList:\r\n", PartTrail::Pad(0xff));
        assert_eq!(part.data.len(), 8 + 14 + 1);
        assert_eq!(&part.data[..4], &[0x00, 0x00, 0x00, 0x0e]);
        assert_eq!(&part.data[4..8], &[0; 4]);
        assert_eq!(&part.data[8..22], b"SupportList:\r\n");
        assert_eq!(part.data[22], 0xff);
    }

    #[test]
    fn no_trailing_pad_without_trail() {
        let part = framed("extra-para", &[0x01, 0x01], PartTrail::None);
        assert_eq!(part.data.len(), 8 + 2);
    }

    #[test]
    fn framing_round_trips() {
        for (payload, trail) in [
            (&b"soft_ver:7.0.0\n\0"[..], PartTrail::Pad(0xff)),
            (&b"\x01\x00"[..], PartTrail::Pad(0x00)),
            (&b"SupportList:\r\n"[..], PartTrail::None),
        ] {
            let part = framed("x", payload, trail);
            assert_eq!(content(&part.data).unwrap(), payload);
        }
    }

    #[test]
    fn content_rejects_truncated_records() {
        let part = framed("x", b"0123456789", PartTrail::None);
        assert!(content(&part.data[..8 + 4]).is_err());
        assert!(content(&[0x00, 0x00]).is_err());
    }

    #[test]
    fn soft_version_text_is_nul_terminated() {
        let profile = board::find("ARCHER-A7-V5").unwrap();
        let epoch = DateTime::from_timestamp(0, 0).unwrap();
        let part = soft_version(profile, "soft-version", 0, epoch);
        let content = content(&part.data).unwrap();
        assert_eq!(content, b"soft_ver:7.0.0\n\0");
    }

    #[test]
    fn soft_version_numeric_encodes_bcd_date() {
        // 2020-01-01 UTC
        let epoch = DateTime::from_timestamp(1_577_836_800, 0).unwrap();
        let profile = board::find("CPE510").unwrap();
        let part = soft_version(profile, "soft-version", 0x1234, epoch);
        let content = content(&part.data).unwrap();

        // compat level 0: record is truncated before the compat field
        assert_eq!(content.len(), 12);
        assert_eq!(content[0], 0xff);
        assert_eq!(&content[1..4], &[0, 0, 0]);
        assert_eq!(&content[4..8], &[0x20, 0x20, 0x01, 0x01]);
        assert_eq!(&content[8..12], &[0x00, 0x00, 0x12, 0x34]);
    }

    #[test]
    fn soft_version_keeps_compat_level_field() {
        let epoch = DateTime::from_timestamp(1_577_836_800, 0).unwrap();
        let profile = board::find("EAP225-OUTDOOR-V1").unwrap();
        assert_eq!(profile.soft_ver_compat_level, 1);
        let part = soft_version(profile, "soft-version", 0, epoch);
        let content = content(&part.data).unwrap();
        assert_eq!(content.len(), 16);
        assert_eq!(&content[12..16], &[0x00, 0x00, 0x00, 0x01]);
        // PartTrail::None: framing adds no pad byte
        assert_eq!(part.data.len(), 8 + 16);
    }

    #[test]
    fn partition_table_layout() {
        let parts = vec![
            FlashPartition {
                name: "fs-uboot".to_string(),
                base: 0x00000,
                size: 0x20000,
            },
            FlashPartition {
                name: "os-image".to_string(),
                base: 0x20000,
                size: 0x180000,
            },
        ];
        let part = partition_table("partition-table", &parts).unwrap();
        assert_eq!(part.data.len(), PAYLOAD_TABLE_SIZE);
        assert_eq!(&part.data[..4], &[0x00, 0x04, 0x00, 0x00]);

        let expected = b"partition fs-uboot base 0x00000 size 0x20000\n\
                         partition os-image base 0x20000 size 0x180000\n";
        assert_eq!(&part.data[4..4 + expected.len()], expected);
        assert_eq!(part.data[4 + expected.len()], 0x00);
        assert!(part.data[4 + expected.len() + 1..].iter().all(|&b| b == 0xff));
    }

    #[test]
    fn partition_table_fits_for_every_board() {
        for profile in board::all() {
            let parts: Vec<FlashPartition> = profile
                .partitions
                .iter()
                .map(|e| FlashPartition {
                    name: e.name.to_string(),
                    base: e.base,
                    size: e.size,
                })
                .collect();
            partition_table("partition-table", &parts)
                .unwrap_or_else(|_| panic!("{}: flash table overflow", profile.id));
        }
    }

    #[test]
    fn partition_table_overflow_is_fatal() {
        let parts: Vec<FlashPartition> = (0..64)
            .map(|i| FlashPartition {
                name: format!("a-rather-long-partition-name-{i:02}"),
                base: i * 0x10000,
                size: 0x10000,
            })
            .collect();
        assert!(matches!(
            partition_table("partition-table", &parts),
            Err(Error::TableOverflow("flash"))
        ));
    }
}
