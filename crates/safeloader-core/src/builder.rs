//! Firmware image assembly
//!
//! Builds factory and sysupgrade images for a board profile. The profile's
//! flash layout is never modified: the assembler derives a working copy in
//! which the `firmware` region is split into `os-image` and `file-system`
//! around the kernel, then materialises the embedded partitions and emits
//! the requested container.

use chrono::{DateTime, Utc};
use md5::{Digest, Md5};

use crate::board::Profile;
use crate::container::{MD5_SALT, PAYLOAD_OFFSET, PREAMBLE_SIZE};
use crate::meta;
use crate::partition::{FlashPartition, ImagePartition, PAYLOAD_TABLE_SIZE};
use crate::{Error, Result};

/// End-of-filesystem marker appended to jffs2 root filesystems
pub const JFFS2_EOF_MARK: [u8; 4] = [0xde, 0xad, 0xc0, 0xde];

/// Erase-block alignment applied to the factory `file-system` split and to
/// jffs2 padding
const BLOCK_SIZE: usize = 0x10000;

/// A firmware build job
#[derive(Debug)]
pub struct BuildRequest<'a> {
    /// Board profile to build for
    pub profile: &'a Profile,
    /// Kernel image bytes
    pub kernel: Vec<u8>,
    /// Root filesystem bytes
    pub rootfs: Vec<u8>,
    /// Revision number stored in numeric soft-version records
    pub revision: u32,
    /// Append the jffs2 end-of-filesystem marker to the rootfs
    pub add_jffs2_eof: bool,
    /// Emit a sysupgrade image instead of a factory image
    pub sysupgrade: bool,
    /// Build timestamp (wall clock, or `SOURCE_DATE_EPOCH`)
    pub timestamp: DateTime<Utc>,
}

/// Build a firmware image
pub fn build(request: BuildRequest<'_>) -> Result<Vec<u8>> {
    let BuildRequest {
        profile,
        kernel,
        rootfs,
        revision,
        add_jffs2_eof,
        sysupgrade,
        timestamp,
    } = request;

    let names = profile.resolved_names();
    let (flash, fs_index) = firmware_layout(profile, kernel.len(), sysupgrade)?;
    let fs_entry = fs_index.map(|i| &flash[i]);

    let mut parts = vec![
        meta::partition_table(names.partition_table, &flash)?,
        meta::soft_version(profile, names.soft_ver, revision, timestamp),
        meta::support_list(profile, names.support_list),
        ImagePartition {
            name: names.os_image.to_string(),
            data: kernel,
        },
        rootfs_partition(names.file_system, rootfs, add_jffs2_eof, fs_entry),
    ];
    if let Some(marker) = profile.extra_para {
        parts.push(meta::extra_para(profile, names.extra_para, marker));
    }

    if sysupgrade {
        sysupgrade_image(
            &flash,
            &parts,
            profile.first_sysupgrade_partition,
            profile.last_sysupgrade_partition,
        )
    } else {
        factory_image(profile, &flash, &parts)
    }
}

/// Derive the flash layout for a build, splitting the `firmware` region
///
/// Returns the derived partition list and, if a split happened, the index
/// of the `file-system` entry. For factory images the `file-system` base
/// is aligned up to the next erase block.
fn firmware_layout(
    profile: &Profile,
    kernel_len: usize,
    sysupgrade: bool,
) -> Result<(Vec<FlashPartition>, Option<usize>)> {
    let names = profile.resolved_names();
    let mut flash: Vec<FlashPartition> = profile
        .partitions
        .iter()
        .map(|e| FlashPartition {
            name: e.name.to_string(),
            base: e.base,
            size: e.size,
        })
        .collect();

    let Some(index) = flash.iter().position(|p| p.name == "firmware") else {
        return Ok((flash, None));
    };
    let firmware = flash[index].clone();

    if kernel_len > firmware.size as usize {
        return Err(Error::KernelTooBig {
            size: kernel_len,
            max: firmware.size,
        });
    }

    let mut fs_base = firmware.base + kernel_len as u32;
    if !sysupgrade {
        fs_base = align_up(fs_base as usize, BLOCK_SIZE) as u32;
    }
    let fs_size = (firmware.base + firmware.size)
        .checked_sub(fs_base)
        .ok_or(Error::KernelTooBig {
            size: kernel_len,
            max: firmware.size,
        })?;

    flash[index] = FlashPartition {
        name: names.os_image.to_string(),
        base: firmware.base,
        size: kernel_len as u32,
    };
    flash.insert(
        index + 1,
        FlashPartition {
            name: names.file_system.to_string(),
            base: fs_base,
            size: fs_size,
        },
    );

    Ok((flash, Some(index + 1)))
}

/// Wrap the rootfs bytes into the `file-system` partition, padding to the
/// jffs2 end-of-filesystem marker when requested
fn rootfs_partition(
    name: &str,
    rootfs: Vec<u8>,
    add_jffs2_eof: bool,
    fs_entry: Option<&FlashPartition>,
) -> ImagePartition {
    let mut data = rootfs;

    if add_jffs2_eof {
        // Pad so that the marker ends on an erase-block boundary relative
        // to the partition's position in flash.
        let total = match fs_entry {
            Some(fs) => {
                align_up(data.len() + fs.base as usize, BLOCK_SIZE) + JFFS2_EOF_MARK.len()
                    - fs.base as usize
            }
            None => align_up(data.len(), BLOCK_SIZE) + JFFS2_EOF_MARK.len(),
        };
        data.resize(total - JFFS2_EOF_MARK.len(), 0xff);
        data.extend_from_slice(&JFFS2_EOF_MARK);
    }

    ImagePartition {
        name: name.to_string(),
        data,
    }
}

fn align_up(value: usize, align: usize) -> usize {
    (value + align - 1) & !(align - 1)
}

/// Emit a factory image
///
/// ```text
/// 0000..0004  image size (big endian)
/// 0004..0014  MD5 over salt plus everything from 0x14
/// 0014..0018  vendor banner length (0 if none)
/// 0018..1014  vendor banner, 0xff padded
/// 1014..1814  image partition table
/// 1814..      payloads, in table order
/// ```
fn factory_image(
    profile: &Profile,
    flash: &[FlashPartition],
    parts: &[ImagePartition],
) -> Result<Vec<u8>> {
    let payload_len: usize = parts.iter().map(|p| p.data.len()).sum();
    let total = PAYLOAD_OFFSET + PAYLOAD_TABLE_SIZE + payload_len;

    let mut image = vec![0xff; total];
    image[..4].copy_from_slice(&(total as u32).to_be_bytes());

    let vendor = profile.vendor.unwrap_or("");
    image[PREAMBLE_SIZE..PREAMBLE_SIZE + 4].copy_from_slice(&(vendor.len() as u32).to_be_bytes());
    image[PREAMBLE_SIZE + 4..PREAMBLE_SIZE + 4 + vendor.len()]
        .copy_from_slice(vendor.as_bytes());

    put_partitions(&mut image[PAYLOAD_OFFSET..], flash, parts)?;

    let digest = salted_md5(&image[PREAMBLE_SIZE..]);
    image[4..PREAMBLE_SIZE].copy_from_slice(&digest);

    Ok(image)
}

/// Write the image partition table and the payloads behind it
///
/// `buf` starts at the table; payload bases are relative to it, the first
/// payload landing right after the 2048-byte table window.
fn put_partitions(
    buf: &mut [u8],
    flash: &[FlashPartition],
    parts: &[ImagePartition],
) -> Result<()> {
    let mut table = String::new();
    let mut base = PAYLOAD_TABLE_SIZE;

    for part in parts {
        let entry = flash
            .iter()
            .find(|f| f.name == part.name)
            .ok_or_else(|| Error::MissingPartition(part.name.clone()))?;
        if part.data.len() > entry.size as usize {
            return Err(Error::PartitionTooBig {
                name: part.name.clone(),
                max: entry.size,
            });
        }

        buf[base..base + part.data.len()].copy_from_slice(&part.data);
        table.push_str(&format!(
            "fwup-ptn {} base 0x{:05x} size 0x{:05x}\t\r\n",
            part.name,
            base,
            part.data.len()
        ));
        if table.len() + 1 > PAYLOAD_TABLE_SIZE {
            return Err(Error::TableOverflow("image"));
        }

        base += part.data.len();
    }

    buf[..table.len()].copy_from_slice(table.as_bytes());
    buf[table.len()] = 0x00;

    Ok(())
}

/// Emit a sysupgrade image: the slice of flash between the first and last
/// sysupgrade partitions, with each payload at its flash offset
fn sysupgrade_image(
    flash: &[FlashPartition],
    parts: &[ImagePartition],
    first: &str,
    last: &str,
) -> Result<Vec<u8>> {
    let first_index = flash
        .iter()
        .position(|p| p.name == first)
        .ok_or_else(|| Error::MissingPartition(first.to_string()))?;
    let last_index = flash
        .iter()
        .position(|p| p.name == last)
        .ok_or_else(|| Error::MissingPartition(last.to_string()))?;
    if first_index >= last_index {
        return Err(Error::SysupgradeWindow {
            first: first.to_string(),
            last: last.to_string(),
        });
    }

    let last_payload = parts
        .iter()
        .find(|p| p.name == last)
        .ok_or_else(|| Error::MissingPartition(last.to_string()))?;

    let window_base = flash[first_index].base;
    let total = (flash[last_index].base - window_base) as usize + last_payload.data.len();
    let mut image = vec![0xff; total];

    for entry in &flash[first_index..=last_index] {
        let Some(part) = parts.iter().find(|p| p.name == entry.name) else {
            continue;
        };
        if part.data.len() > entry.size as usize {
            return Err(Error::PartitionTooBig {
                name: part.name.clone(),
                max: entry.size,
            });
        }
        let offset = (entry.base - window_base) as usize;
        image[offset..offset + part.data.len()].copy_from_slice(&part.data);
    }

    Ok(image)
}

fn salted_md5(data: &[u8]) -> [u8; 16] {
    let mut hasher = Md5::new();
    hasher.update(MD5_SALT);
    hasher.update(data);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board;
    use crate::container::{self, ImageType};
    use crate::meta::META_HEADER_SIZE;

    fn request<'a>(profile: &'a Profile, kernel_len: usize, rootfs_len: usize) -> BuildRequest<'a> {
        BuildRequest {
            profile,
            kernel: vec![0xaa; kernel_len],
            rootfs: vec![0xbb; rootfs_len],
            revision: 0,
            add_jffs2_eof: false,
            sysupgrade: false,
            timestamp: DateTime::from_timestamp(1_577_836_800, 0).unwrap(),
        }
    }

    #[test]
    fn factory_image_layout_cpe510() {
        let profile = board::find("CPE510").unwrap();
        let image = build(request(profile, 128 * 1024, 1024 * 1024)).unwrap();

        // total size preamble
        let total = u32::from_be_bytes(image[..4].try_into().unwrap());
        assert_eq!(total as usize, image.len());

        // vendor banner, 0xff padded
        let banner = b"CPE510(TP-LINK|UN|N300-5):1.0\r\n";
        assert_eq!(&image[0x14..0x18], &(banner.len() as u32).to_be_bytes());
        assert_eq!(&image[0x18..0x18 + banner.len()], banner);
        assert_eq!(image[0x18 + banner.len()], 0xff);

        // embedded table order and payload chaining
        let info = container::parse(&image).unwrap();
        let names: Vec<&str> = info.partitions.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["partition-table", "soft-version", "support-list", "os-image", "file-system"]
        );
        assert_eq!(info.partitions[0].base, 0x800);
        for pair in info.partitions.windows(2) {
            assert_eq!(pair[1].base, pair[0].base + pair[0].size);
        }
        let os = info.find("os-image").unwrap();
        assert_eq!(os.size, 128 * 1024);

        // MD5 envelope
        assert_eq!(&image[4..0x14], &salted_md5(&image[0x14..]));
    }

    #[test]
    fn factory_payloads_follow_the_table() {
        let profile = board::find("CPE510").unwrap();
        let image = build(request(profile, 0x1000, 0x2000)).unwrap();
        let info = container::parse(&image).unwrap();

        // concatenated payloads fill the image from 0x1814 to the end
        let mut concatenated = Vec::new();
        for entry in &info.partitions {
            concatenated.extend_from_slice(
                container::partition_data(&image, &info, entry).unwrap(),
            );
        }
        assert_eq!(&image[0x1814..], &concatenated[..]);
    }

    #[test]
    fn built_images_classify_as_vendor() {
        let with_banner = board::find("CPE510").unwrap();
        let image = build(request(with_banner, 0x1000, 0x1000)).unwrap();
        assert_eq!(container::parse(&image).unwrap().kind, ImageType::Vendor);

        // banner-less profiles get a zero length field, which still reads
        // back as a (empty) vendor banner
        let no_banner = board::find("ARCHER-A7-V5").unwrap();
        let image = build(request(no_banner, 0x1000, 0x1000)).unwrap();
        assert_eq!(container::parse(&image).unwrap().kind, ImageType::Vendor);
        assert_eq!(container::vendor_banner(&image).unwrap(), "");
    }

    #[test]
    fn sysupgrade_window_cpe510() {
        let profile = board::find("CPE510").unwrap();
        let kernel_len = 128 * 1024;
        let mut req = request(profile, kernel_len, 1024 * 1024);
        req.sysupgrade = true;
        let image = build(req).unwrap();

        // window: os-image (at the firmware base, 0x40000) .. support-list
        // (0x7b1000); the support-list payload is the framed text plus the
        // trailing pad byte.
        let support_len = META_HEADER_SIZE + profile.support_list.len() + 1;
        assert_eq!(image.len(), 0x7b1000 - 0x40000 + support_len);

        // kernel sits at the start of the window
        assert_eq!(&image[..kernel_len], &vec![0xaa; kernel_len][..]);
        // rootfs lands at the unaligned split right behind the kernel
        assert_eq!(image[kernel_len], 0xbb);
        // soft-version partition lands at its flash offset
        let soft_off = 0x7b0000 - 0x40000;
        assert_eq!(&image[soft_off..soft_off + 4], &[0x00, 0x00, 0x00, 0x0c]);
    }

    #[test]
    fn extra_para_is_appended_for_archer_a7() {
        let profile = board::find("ARCHER-A7-V5").unwrap();
        let image = build(request(profile, 0x20000, 0x40000)).unwrap();
        let info = container::parse(&image).unwrap();

        assert_eq!(info.partitions.len(), 6);
        let extra = info.find("extra-para").unwrap();
        let payload = container::partition_data(&image, &info, extra).unwrap();
        assert_eq!(crate::meta::content(payload).unwrap(), &[0x01, 0x00]);
        // framed marker plus the 0x00 trail byte
        assert_eq!(extra.size as usize, META_HEADER_SIZE + 2 + 1);
    }

    #[test]
    fn jffs2_tail_is_block_aligned() {
        let profile = board::find("CPE510").unwrap();
        let mut req = request(profile, 0x20000, 0x12345);
        req.add_jffs2_eof = true;
        let image = build(req).unwrap();
        let info = container::parse(&image).unwrap();

        let fs = info.find("file-system").unwrap();
        let payload = container::partition_data(&image, &info, fs).unwrap();
        assert_eq!(&payload[payload.len() - 4..], &JFFS2_EOF_MARK);
        // 0x20000 kernel keeps the file-system flash base block-aligned, so
        // the padded payload is a whole number of blocks plus the marker
        assert_eq!(payload.len() % BLOCK_SIZE, 4);
        assert!(payload[0x12345..payload.len() - 4].iter().all(|&b| b == 0xff));
    }

    #[test]
    fn oversized_kernel_is_rejected() {
        let profile = board::find("CPE510").unwrap();
        let firmware = profile
            .partitions
            .iter()
            .find(|p| p.name == "firmware")
            .unwrap();
        let err = build(request(profile, firmware.size as usize + 1, 0x1000)).unwrap_err();
        assert!(matches!(err, Error::KernelTooBig { .. }));
    }

    #[test]
    fn derived_layout_keeps_registry_untouched() {
        let profile = board::find("CPE510").unwrap();
        let before: Vec<_> = profile.partitions.to_vec();
        build(request(profile, 0x1000, 0x1000)).unwrap();
        assert_eq!(profile.partitions, &before[..]);
    }

    #[test]
    fn firmware_split_positions() {
        let profile = board::find("CPE510").unwrap();
        // factory: file-system aligned up to the next 64 KiB boundary
        let (flash, fs_index) = firmware_layout(profile, 0x21000, false).unwrap();
        let fs = &flash[fs_index.unwrap()];
        let os = &flash[fs_index.unwrap() - 1];
        assert_eq!(os.name, "os-image");
        assert_eq!(os.base, 0x40000);
        assert_eq!(os.size, 0x21000);
        assert_eq!(fs.base, 0x70000);
        assert_eq!(fs.size, 0x40000 + 0x770000 - 0x70000);

        // sysupgrade: no alignment
        let (flash, fs_index) = firmware_layout(profile, 0x21000, true).unwrap();
        assert_eq!(flash[fs_index.unwrap()].base, 0x61000);
    }
}
