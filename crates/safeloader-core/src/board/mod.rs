//! Board profile registry
//!
//! Every supported device is described by a [`Profile`]: the vendor banner
//! and support list the bootloader checks, the on-flash partition layout,
//! the padding and soft-version conventions of its SafeLoader dialect, and
//! the window of flash covered by sysupgrade images.
//!
//! The registry is a static, ordered table; [`find`] matches ids
//! case-insensitively and returns the first hit.

mod registry;

/// A flash partition as declared by a board profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashEntry {
    /// Partition name
    pub name: &'static str,
    /// Base offset in flash
    pub base: u32,
    /// Size in flash
    pub size: u32,
}

/// Trailing byte appended to meta partitions
///
/// Most boards pad each meta partition with a single byte after the
/// content; a few dialects omit the pad entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartTrail {
    /// Append one pad byte with the given value
    Pad(u8),
    /// No trailing pad byte
    None,
}

/// Contents of the `soft-version` record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftVer {
    /// Packed numeric record; build date and revision are filled in at
    /// build time
    Numeric {
        /// Major version
        major: u8,
        /// Minor version
        minor: u8,
        /// Patch version
        patch: u8,
    },
    /// Verbatim version string, NUL-terminated on emit
    Text(&'static str),
}

impl SoftVer {
    /// The numeric version "0.0.0", used when a profile does not override it
    pub const DEFAULT: SoftVer = SoftVer::Numeric {
        major: 0,
        minor: 0,
        patch: 0,
    };
}

/// Per-profile overrides for the well-known partition names
///
/// Unset fields fall back to the standard names; some dual-boot devices
/// suffix them (e.g. `os-image@1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionNames {
    /// Name override for `partition-table`
    pub partition_table: Option<&'static str>,
    /// Name override for `soft-version`
    pub soft_ver: Option<&'static str>,
    /// Name override for `os-image`
    pub os_image: Option<&'static str>,
    /// Name override for `support-list`
    pub support_list: Option<&'static str>,
    /// Name override for `file-system`
    pub file_system: Option<&'static str>,
    /// Name override for `extra-para`
    pub extra_para: Option<&'static str>,
}

impl PartitionNames {
    /// No overrides; every name resolves to its default
    pub const DEFAULT: PartitionNames = PartitionNames {
        partition_table: None,
        soft_ver: None,
        os_image: None,
        support_list: None,
        file_system: None,
        extra_para: None,
    };
}

/// The well-known partition names with profile overrides applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedNames {
    /// Name of the flash partition table partition
    pub partition_table: &'static str,
    /// Name of the software version partition
    pub soft_ver: &'static str,
    /// Name of the kernel partition
    pub os_image: &'static str,
    /// Name of the support list partition
    pub support_list: &'static str,
    /// Name of the root filesystem partition
    pub file_system: &'static str,
    /// Name of the extra-para partition
    pub extra_para: &'static str,
}

/// Firmware layout description for one board
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    /// Board id, matched case-insensitively against `-B`
    pub id: &'static str,
    /// Vendor banner stored in the factory image header
    pub vendor: Option<&'static str>,
    /// Support list text checked by the stock bootloader
    pub support_list: &'static str,
    /// Trailing pad policy for meta partitions
    pub part_trail: PartTrail,
    /// Software version record contents
    pub soft_ver: SoftVer,
    /// Compat level; non-zero extends the numeric soft-version record
    pub soft_ver_compat_level: u32,
    /// Marker bytes for boards that require an `extra-para` partition
    pub extra_para: Option<[u8; 2]>,
    /// On-flash partition layout, ascending by base
    pub partitions: &'static [FlashEntry],
    /// First flash partition covered by sysupgrade images
    pub first_sysupgrade_partition: &'static str,
    /// Last flash partition covered by sysupgrade images
    pub last_sysupgrade_partition: &'static str,
    /// Overrides for the well-known partition names
    pub partition_names: PartitionNames,
}

impl Profile {
    /// Resolve the well-known partition names, applying defaults where the
    /// profile does not override them
    pub fn resolved_names(&self) -> ResolvedNames {
        let n = &self.partition_names;
        ResolvedNames {
            partition_table: n.partition_table.unwrap_or("partition-table"),
            soft_ver: n.soft_ver.unwrap_or("soft-version"),
            os_image: n.os_image.unwrap_or("os-image"),
            support_list: n.support_list.unwrap_or("support-list"),
            file_system: n.file_system.unwrap_or("file-system"),
            extra_para: n.extra_para.unwrap_or("extra-para"),
        }
    }
}

/// Look up a board profile by id (case-insensitive, first match wins)
pub fn find(id: &str) -> Option<&'static Profile> {
    registry::BOARDS.iter().find(|b| b.id.eq_ignore_ascii_case(id))
}

/// All registered board profiles, in registry order
pub fn all() -> &'static [Profile] {
    registry::BOARDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive() {
        let board = find("archer-a7-v5").expect("board missing");
        assert_eq!(board.id, "ARCHER-A7-V5");
        assert!(find("ARCHER-A7-V5").is_some());
        assert!(find("no-such-board").is_none());
    }

    #[test]
    fn ids_are_unique() {
        let boards = all();
        for (i, a) in boards.iter().enumerate() {
            for b in &boards[i + 1..] {
                assert!(
                    !a.id.eq_ignore_ascii_case(b.id),
                    "duplicate board id {}",
                    a.id
                );
            }
        }
    }

    #[test]
    fn flash_layouts_are_ascending_and_disjoint() {
        for board in all() {
            for pair in board.partitions.windows(2) {
                assert!(
                    pair[0].base < pair[1].base,
                    "{}: `{}` and `{}` out of order",
                    board.id,
                    pair[0].name,
                    pair[1].name
                );
                assert!(
                    pair[0].base + pair[0].size <= pair[1].base,
                    "{}: `{}` overlaps `{}`",
                    board.id,
                    pair[0].name,
                    pair[1].name
                );
            }
        }
    }

    #[test]
    fn default_names_apply() {
        let names = find("CPE510").unwrap().resolved_names();
        assert_eq!(names.partition_table, "partition-table");
        assert_eq!(names.os_image, "os-image");
        assert_eq!(names.extra_para, "extra-para");
    }

    #[test]
    fn deco_m5_uses_suffixed_names() {
        let names = find("DECO-M5").unwrap().resolved_names();
        assert_eq!(names.partition_table, "partition-table@1");
        assert_eq!(names.os_image, "os-image@1");
        assert_eq!(names.file_system, "file-system@1");
        // not overridden
        assert_eq!(names.support_list, "support-list");
    }

    #[test]
    fn sysupgrade_windows_reference_known_partitions() {
        // os-image/file-system only exist after the firmware split, so a
        // window endpoint must name either a flash partition or one of the
        // names synthesised inside `firmware`.
        for board in all() {
            let names = board.resolved_names();
            for endpoint in [
                board.first_sysupgrade_partition,
                board.last_sysupgrade_partition,
            ] {
                let known = board.partitions.iter().any(|p| p.name == endpoint)
                    || endpoint == names.os_image
                    || endpoint == names.file_system;
                assert!(known, "{}: unknown sysupgrade endpoint {}", board.id, endpoint);
            }
        }
    }
}
