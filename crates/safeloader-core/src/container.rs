//! SafeLoader container parsing
//!
//! SafeLoader images start with a 0x14-byte preamble carrying the image
//! size (big-endian u32) and a salted MD5 checksum. Four header variants
//! exist, told apart by heuristics on the bytes after the preamble:
//!
//! - **Default**: 0x1000-byte header with unspecified contents.
//! - **Vendor**: header starts with a big-endian u32 banner length followed
//!   by that many bytes of text, padded with 0xff.
//! - **Cloud**: header starts with the string `fw-type:Cloud`.
//! - **QNew**: reversed preamble (checksum before size, size excluding the
//!   preamble), a 0x3C-byte header starting with `?NEW`, then the usual
//!   0x1000 bytes.
//!
//! The image partition table sits after the header; payload bases in that
//! table are relative to its start.

use crate::partition::{self, FlashPartition, TableKind};
use crate::{Error, Result};

/// Size of the size/checksum preamble
pub const PREAMBLE_SIZE: usize = 0x14;

/// Size of the container header following the preamble
pub const HEADER_SIZE: usize = 0x1000;

/// Offset of the image partition table in default-layout images
pub const PAYLOAD_OFFSET: usize = PREAMBLE_SIZE + HEADER_SIZE;

/// Size of the `?NEW` header prefix
pub const QNEW_HEADER_SIZE: usize = 0x3C;

/// Offset of the image partition table in QNew images
pub const QNEW_PAYLOAD_OFFSET: usize = PREAMBLE_SIZE + QNEW_HEADER_SIZE + HEADER_SIZE;

/// Magic prefix of the flash partition table payload
pub const FLASH_TABLE_MAGIC: [u8; 4] = [0x00, 0x04, 0x00, 0x00];

/// Salt prepended to the image bytes when computing the MD5 checksum.
/// TP-Link uses the same salt for every device speaking this format.
pub(crate) const MD5_SALT: [u8; 16] = [
    0x7a, 0x2b, 0x15, 0xed, 0x9b, 0x98, 0x59, 0x6d, 0xe5, 0x04, 0xab, 0x44, 0xac, 0x2a, 0x9f, 0x4e,
];

/// SafeLoader container variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    /// Standard preamble, opaque 0x1000-byte header
    Default,
    /// Standard preamble, header carries a vendor banner
    Vendor,
    /// Standard preamble, header starts with `fw-type:Cloud`
    Cloud,
    /// Reversed preamble and a `?NEW` header prefix
    QNew,
}

impl ImageType {
    /// Offset of the image partition table for this variant
    pub fn payload_offset(self) -> usize {
        match self {
            ImageType::QNew => QNEW_PAYLOAD_OFFSET,
            _ => PAYLOAD_OFFSET,
        }
    }
}

/// A parsed SafeLoader image
#[derive(Debug, Clone)]
pub struct ImageInfo {
    /// Detected container variant
    pub kind: ImageType,
    /// Offset the embedded partition bases are relative to
    pub payload_offset: usize,
    /// Entries of the image partition table, in table order
    pub partitions: Vec<FlashPartition>,
}

impl ImageInfo {
    /// Find an embedded partition by name
    pub fn find(&self, name: &str) -> Option<&FlashPartition> {
        self.partitions.iter().find(|p| p.name == name)
    }
}

/// Classify an image and parse its embedded partition table
pub fn parse(data: &[u8]) -> Result<ImageInfo> {
    let header = data
        .get(PREAMBLE_SIZE..PREAMBLE_SIZE + 64)
        .ok_or(Error::Truncated(data.len()))?;

    let kind = if header.starts_with(b"?NEW") {
        ImageType::QNew
    } else if header.starts_with(b"fw-type:Cloud") {
        ImageType::Cloud
    } else {
        let word = u32::from_be_bytes([header[0], header[1], header[2], header[3]]);
        if word <= HEADER_SIZE as u32 {
            ImageType::Vendor
        } else {
            ImageType::Default
        }
    };

    let payload_offset = kind.payload_offset();
    log::debug!("detected {:?} image, payload at {:#x}", kind, payload_offset);

    let table = data
        .get(payload_offset..)
        .ok_or(Error::Truncated(data.len()))?;
    let partitions = partition::parse_table(table, TableKind::Image)?;

    Ok(ImageInfo {
        kind,
        payload_offset,
        partitions,
    })
}

/// Borrow the payload bytes of an embedded partition
pub fn partition_data<'a>(
    data: &'a [u8],
    info: &ImageInfo,
    entry: &FlashPartition,
) -> Result<&'a [u8]> {
    let start = info.payload_offset + entry.base as usize;
    data.get(start..start + entry.size as usize)
        .ok_or(Error::Truncated(data.len()))
}

/// Read the vendor banner of a Vendor-variant image, trimmed at the first
/// NUL byte
pub fn vendor_banner(data: &[u8]) -> Result<String> {
    let header = data
        .get(PREAMBLE_SIZE..PREAMBLE_SIZE + 4)
        .ok_or(Error::Truncated(data.len()))?;
    let len = u32::from_be_bytes([header[0], header[1], header[2], header[3]]) as usize;
    let banner = data
        .get(PREAMBLE_SIZE + 4..PREAMBLE_SIZE + 4 + len)
        .ok_or(Error::Truncated(data.len()))?;
    let end = banner.iter().position(|&b| b == 0).unwrap_or(banner.len());
    Ok(String::from_utf8_lossy(&banner[..end]).into_owned())
}

/// Parse the flash partition table stored inside the `partition-table`
/// embedded partition
pub fn flash_table(data: &[u8], info: &ImageInfo) -> Result<Vec<FlashPartition>> {
    let entry = info
        .find("partition-table")
        .ok_or_else(|| Error::MissingPartition("partition-table".to_string()))?;
    let payload = partition_data(data, info, entry)?;

    if payload.get(..4) != Some(FLASH_TABLE_MAGIC.as_slice()) {
        return Err(Error::BadMagic);
    }

    partition::parse_table(&payload[4..], TableKind::Flash)
}

/// Rewrite a factory/OEM image into sysupgrade layout
///
/// The `os-image` payload lands at offset 0; the gap up to the flash
/// offset of `file-system` (relative to `os-image`) is 0xff-filled; the
/// `file-system` payload follows.
pub fn convert_to_sysupgrade(data: &[u8]) -> Result<Vec<u8>> {
    let info = parse(data)?;

    let fwup_os = info
        .find("os-image")
        .ok_or_else(|| Error::MissingPartition("os-image".to_string()))?;
    let fwup_fs = info
        .find("file-system")
        .ok_or_else(|| Error::MissingPartition("file-system".to_string()))?;

    let flash = flash_table(data, &info)?;
    let flash_os = flash
        .iter()
        .find(|p| p.name == "os-image")
        .ok_or_else(|| Error::MissingPartition("os-image".to_string()))?;
    let flash_fs = flash
        .iter()
        .find(|p| p.name == "file-system")
        .ok_or_else(|| Error::MissingPartition("file-system".to_string()))?;

    let os_payload = partition_data(data, &info, fwup_os)?;
    let fs_payload = partition_data(data, &info, fwup_fs)?;

    let gap = (flash_fs.base - flash_os.base) as usize;
    if os_payload.len() > gap {
        return Err(Error::PartitionTooBig {
            name: fwup_os.name.clone(),
            max: flash_fs.base - flash_os.base,
        });
    }

    let mut image = vec![0xff; gap + fs_payload.len()];
    image[..os_payload.len()].copy_from_slice(os_payload);
    image[gap..].copy_from_slice(fs_payload);

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::PAYLOAD_TABLE_SIZE;

    /// Minimal image of the given variant with one `fwup-ptn` row
    fn sample(kind: ImageType) -> Vec<u8> {
        let offset = kind.payload_offset();
        let mut data = vec![0xff; offset + PAYLOAD_TABLE_SIZE + 0x100];
        match kind {
            ImageType::Default => {
                // first header word large enough to not look like a banner
                data[PREAMBLE_SIZE..PREAMBLE_SIZE + 4].copy_from_slice(&0x2000u32.to_be_bytes());
            }
            ImageType::Vendor => {
                data[PREAMBLE_SIZE..PREAMBLE_SIZE + 4].copy_from_slice(&5u32.to_be_bytes());
                data[PREAMBLE_SIZE + 4..PREAMBLE_SIZE + 9].copy_from_slice(b"acme\n");
            }
            ImageType::Cloud => {
                data[PREAMBLE_SIZE..PREAMBLE_SIZE + 13].copy_from_slice(b"fw-type:Cloud");
            }
            ImageType::QNew => {
                data[PREAMBLE_SIZE..PREAMBLE_SIZE + 4].copy_from_slice(b"?NEW");
            }
        }
        let row = b"fwup-ptn support-list base 0x00800 size 0x00100\t\r\n";
        data[offset..offset + row.len()].copy_from_slice(row);
        data[offset + row.len()] = 0x00;
        data
    }

    #[test]
    fn classifies_all_variants() {
        for kind in [
            ImageType::Default,
            ImageType::Vendor,
            ImageType::Cloud,
            ImageType::QNew,
        ] {
            let info = parse(&sample(kind)).unwrap();
            assert_eq!(info.kind, kind);
            assert_eq!(info.partitions.len(), 1);
            assert_eq!(info.partitions[0].name, "support-list");
        }
    }

    #[test]
    fn qnew_table_is_at_0x1050() {
        assert_eq!(ImageType::QNew.payload_offset(), 0x1050);
        assert_eq!(ImageType::Default.payload_offset(), 0x1814 - PAYLOAD_TABLE_SIZE);
    }

    #[test]
    fn vendor_banner_is_nul_trimmed() {
        let mut data = sample(ImageType::Vendor);
        data[PREAMBLE_SIZE + 8] = 0x00; // overwrite the trailing \n with NUL
        assert_eq!(vendor_banner(&data).unwrap(), "acme");
    }

    #[test]
    fn partition_data_is_bounds_checked() {
        let data = sample(ImageType::Default);
        let info = parse(&data).unwrap();
        let mut entry = info.partitions[0].clone();
        assert!(partition_data(&data, &info, &entry).is_ok());
        entry.size = 0x10_0000;
        assert!(matches!(
            partition_data(&data, &info, &entry),
            Err(Error::Truncated(_))
        ));
    }

    #[test]
    fn rejects_truncated_images() {
        assert!(matches!(parse(&[0u8; 16]), Err(Error::Truncated(16))));
        let short = vec![0xffu8; 0x100];
        assert!(parse(&short).is_err());
    }

    #[test]
    fn convert_matches_direct_sysupgrade_build() {
        use crate::board;
        use crate::builder::{build, BuildRequest};
        use chrono::DateTime;

        // with an erase-block aligned kernel the factory split and the
        // sysupgrade split agree, so converting the factory image must
        // reproduce the directly built sysupgrade image byte for byte
        let profile = board::find("ARCHER-A7-V5").unwrap();
        let kernel = vec![0xaa; 0x20000];
        let rootfs = vec![0xbb; 0x30000];
        let timestamp = DateTime::from_timestamp(1_577_836_800, 0).unwrap();

        let factory = build(BuildRequest {
            profile,
            kernel: kernel.clone(),
            rootfs: rootfs.clone(),
            revision: 0,
            add_jffs2_eof: false,
            sysupgrade: false,
            timestamp,
        })
        .unwrap();
        let converted = convert_to_sysupgrade(&factory).unwrap();

        let direct = build(BuildRequest {
            profile,
            kernel,
            rootfs,
            revision: 0,
            add_jffs2_eof: false,
            sysupgrade: true,
            timestamp,
        })
        .unwrap();

        assert_eq!(converted, direct);
    }

    #[test]
    fn flash_table_requires_magic() {
        let mut data = sample(ImageType::Default);
        let offset = ImageType::Default.payload_offset();
        // replace the table with one pointing at a bogus partition-table
        let row = b"fwup-ptn partition-table base 0x00800 size 0x00010\t\r\n";
        data[offset..offset + row.len()].copy_from_slice(row);
        data[offset + row.len()] = 0x00;
        // payload at table offset + 0x800 does not start with the magic
        let info = parse(&data).unwrap();
        assert!(matches!(flash_table(&data, &info), Err(Error::BadMagic)));
    }
}
