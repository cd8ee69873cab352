//! Static board table
//!
//! One entry per supported device, in the order lookups are resolved.
//! Banner, support-list and soft-version strings are byte-exact: the stock
//! bootloader compares them verbatim, so editing whitespace or line endings
//! here breaks factory images for that board.

use super::{FlashEntry, PartTrail, PartitionNames, Profile, SoftVer};

pub(super) static BOARDS: &[Profile] = &[
    /// CPE210/220 V1
    Profile {
        id: "CPE210",
        vendor: Some("CPE510(TP-LINK|UN|N300-5):1.0\r\n"),
        support_list: concat!(
            "SupportList:\r\n",
            "CPE210(TP-LINK|UN|N300-2):1.0\r\n",
            "CPE210(TP-LINK|UN|N300-2):1.1\r\n",
            "CPE210(TP-LINK|US|N300-2):1.1\r\n",
            "CPE210(TP-LINK|EU|N300-2):1.1\r\n",
            "CPE220(TP-LINK|UN|N300-2):1.1\r\n",
            "CPE220(TP-LINK|US|N300-2):1.1\r\n",
            "CPE220(TP-LINK|EU|N300-2):1.1\r\n",
        ),
        part_trail: PartTrail::Pad(0xff),
        soft_ver: SoftVer::DEFAULT,
        soft_ver_compat_level: 0,
        extra_para: None,
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "partition-table", base: 0x20000, size: 0x02000 },
            FlashEntry { name: "default-mac", base: 0x30000, size: 0x00020 },
            FlashEntry { name: "product-info", base: 0x31100, size: 0x00100 },
            FlashEntry { name: "signature", base: 0x32000, size: 0x00400 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0x770000 },
            FlashEntry { name: "soft-version", base: 0x7b0000, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0x7b1000, size: 0x00400 },
            FlashEntry { name: "user-config", base: 0x7c0000, size: 0x10000 },
            FlashEntry { name: "default-config", base: 0x7d0000, size: 0x10000 },
            FlashEntry { name: "log", base: 0x7e0000, size: 0x10000 },
            FlashEntry { name: "radio", base: 0x7f0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "support-list",
        partition_names: PartitionNames::DEFAULT,
    },
    /// CPE210 V2
    Profile {
        id: "CPE210V2",
        vendor: Some("CPE210(TP-LINK|UN|N300-2|00000000):2.0\r\n"),
        support_list: concat!(
            "SupportList:\r\n",
            "CPE210(TP-LINK|EU|N300-2|00000000):2.0\r\n",
            "CPE210(TP-LINK|EU|N300-2|45550000):2.0\r\n",
            "CPE210(TP-LINK|EU|N300-2|55530000):2.0\r\n",
            "CPE210(TP-LINK|UN|N300-2|00000000):2.0\r\n",
            "CPE210(TP-LINK|UN|N300-2|45550000):2.0\r\n",
            "CPE210(TP-LINK|UN|N300-2|55530000):2.0\r\n",
            "CPE210(TP-LINK|US|N300-2|55530000):2.0\r\n",
            "CPE210(TP-LINK|UN|N300-2):2.0\r\n",
            "CPE210(TP-LINK|EU|N300-2):2.0\r\n",
            "CPE210(TP-LINK|US|N300-2):2.0\r\n",
        ),
        part_trail: PartTrail::Pad(0xff),
        soft_ver: SoftVer::DEFAULT,
        soft_ver_compat_level: 0,
        extra_para: None,
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "partition-table", base: 0x20000, size: 0x02000 },
            FlashEntry { name: "default-mac", base: 0x30000, size: 0x00020 },
            FlashEntry { name: "product-info", base: 0x31100, size: 0x00100 },
            FlashEntry { name: "device-info", base: 0x31400, size: 0x00400 },
            FlashEntry { name: "signature", base: 0x32000, size: 0x00400 },
            FlashEntry { name: "device-id", base: 0x33000, size: 0x00100 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0x770000 },
            FlashEntry { name: "soft-version", base: 0x7b0000, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0x7b1000, size: 0x01000 },
            FlashEntry { name: "user-config", base: 0x7c0000, size: 0x10000 },
            FlashEntry { name: "default-config", base: 0x7d0000, size: 0x10000 },
            FlashEntry { name: "log", base: 0x7e0000, size: 0x10000 },
            FlashEntry { name: "radio", base: 0x7f0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "support-list",
        partition_names: PartitionNames::DEFAULT,
    },
    /// CPE210 V3
    Profile {
        id: "CPE210V3",
        vendor: Some("CPE210(TP-LINK|UN|N300-2|00000000):3.0\r\n"),
        support_list: concat!(
            "SupportList:\r\n",
            "CPE210(TP-LINK|EU|N300-2|45550000):3.0\r\n",
            "CPE210(TP-LINK|UN|N300-2|00000000):3.0\r\n",
            "CPE210(TP-LINK|US|N300-2|55530000):3.0\r\n",
            "CPE210(TP-LINK|UN|N300-2):3.0\r\n",
            "CPE210(TP-LINK|EU|N300-2):3.0\r\n",
            "CPE210(TP-LINK|EU|N300-2|45550000):3.1\r\n",
            "CPE210(TP-LINK|UN|N300-2|00000000):3.1\r\n",
            "CPE210(TP-LINK|US|N300-2|55530000):3.1\r\n",
            "CPE210(TP-LINK|EU|N300-2|45550000):3.20\r\n",
            "CPE210(TP-LINK|UN|N300-2|00000000):3.20\r\n",
            "CPE210(TP-LINK|US|N300-2|55530000):3.20\r\n",
        ),
        part_trail: PartTrail::Pad(0xff),
        soft_ver: SoftVer::DEFAULT,
        soft_ver_compat_level: 0,
        extra_para: None,
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "partition-table", base: 0x20000, size: 0x01000 },
            FlashEntry { name: "default-mac", base: 0x30000, size: 0x00020 },
            FlashEntry { name: "product-info", base: 0x31100, size: 0x00100 },
            FlashEntry { name: "device-info", base: 0x31400, size: 0x00400 },
            FlashEntry { name: "signature", base: 0x32000, size: 0x00400 },
            FlashEntry { name: "device-id", base: 0x33000, size: 0x00100 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0x770000 },
            FlashEntry { name: "soft-version", base: 0x7b0000, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0x7b1000, size: 0x01000 },
            FlashEntry { name: "user-config", base: 0x7c0000, size: 0x10000 },
            FlashEntry { name: "default-config", base: 0x7d0000, size: 0x10000 },
            FlashEntry { name: "log", base: 0x7e0000, size: 0x10000 },
            FlashEntry { name: "radio", base: 0x7f0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "support-list",
        partition_names: PartitionNames::DEFAULT,
    },
    /// CPE220 V2
    Profile {
        id: "CPE220V2",
        vendor: Some("CPE510(TP-LINK|UN|N300-5):1.0\r\n"),
        support_list: concat!(
            "SupportList:\r\n",
            "CPE220(TP-LINK|EU|N300-2|00000000):2.0\r\n",
            "CPE220(TP-LINK|EU|N300-2|45550000):2.0\r\n",
            "CPE220(TP-LINK|EU|N300-2|55530000):2.0\r\n",
            "CPE220(TP-LINK|UN|N300-2|00000000):2.0\r\n",
            "CPE220(TP-LINK|UN|N300-2|45550000):2.0\r\n",
            "CPE220(TP-LINK|UN|N300-2|55530000):2.0\r\n",
            "CPE220(TP-LINK|US|N300-2|55530000):2.0\r\n",
            "CPE220(TP-LINK|UN|N300-2):2.0\r\n",
            "CPE220(TP-LINK|EU|N300-2):2.0\r\n",
            "CPE220(TP-LINK|US|N300-2):2.0\r\n",
        ),
        part_trail: PartTrail::Pad(0xff),
        soft_ver: SoftVer::DEFAULT,
        soft_ver_compat_level: 0,
        extra_para: None,
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "partition-table", base: 0x20000, size: 0x02000 },
            FlashEntry { name: "default-mac", base: 0x30000, size: 0x00020 },
            FlashEntry { name: "product-info", base: 0x31100, size: 0x00100 },
            FlashEntry { name: "signature", base: 0x32000, size: 0x00400 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0x770000 },
            FlashEntry { name: "soft-version", base: 0x7b0000, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0x7b1000, size: 0x00400 },
            FlashEntry { name: "user-config", base: 0x7c0000, size: 0x10000 },
            FlashEntry { name: "default-config", base: 0x7d0000, size: 0x10000 },
            FlashEntry { name: "log", base: 0x7e0000, size: 0x10000 },
            FlashEntry { name: "radio", base: 0x7f0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "support-list",
        partition_names: PartitionNames::DEFAULT,
    },
    /// CPE510/520 V1
    Profile {
        id: "CPE510",
        vendor: Some("CPE510(TP-LINK|UN|N300-5):1.0\r\n"),
        support_list: concat!(
            "SupportList:\r\n",
            "CPE510(TP-LINK|UN|N300-5):1.0\r\n",
            "CPE510(TP-LINK|UN|N300-5):1.1\r\n",
            "CPE510(TP-LINK|UN|N300-5):1.1\r\n",
            "CPE510(TP-LINK|US|N300-5):1.1\r\n",
            "CPE510(TP-LINK|CA|N300-5):1.1\r\n",
            "CPE510(TP-LINK|EU|N300-5):1.1\r\n",
            "CPE520(TP-LINK|UN|N300-5):1.1\r\n",
            "CPE520(TP-LINK|US|N300-5):1.1\r\n",
            "CPE520(TP-LINK|EU|N300-5):1.1\r\n",
        ),
        part_trail: PartTrail::Pad(0xff),
        soft_ver: SoftVer::DEFAULT,
        soft_ver_compat_level: 0,
        extra_para: None,
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "partition-table", base: 0x20000, size: 0x02000 },
            FlashEntry { name: "default-mac", base: 0x30000, size: 0x00020 },
            FlashEntry { name: "product-info", base: 0x31100, size: 0x00100 },
            FlashEntry { name: "signature", base: 0x32000, size: 0x00400 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0x770000 },
            FlashEntry { name: "soft-version", base: 0x7b0000, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0x7b1000, size: 0x00400 },
            FlashEntry { name: "user-config", base: 0x7c0000, size: 0x10000 },
            FlashEntry { name: "default-config", base: 0x7d0000, size: 0x10000 },
            FlashEntry { name: "log", base: 0x7e0000, size: 0x10000 },
            FlashEntry { name: "radio", base: 0x7f0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "support-list",
        partition_names: PartitionNames::DEFAULT,
    },
    /// CPE510 V2
    Profile {
        id: "CPE510V2",
        vendor: Some("CPE510(TP-LINK|UN|N300-5):2.0\r\n"),
        support_list: concat!(
            "SupportList:\r\n",
            "CPE510(TP-LINK|EU|N300-5|00000000):2.0\r\n",
            "CPE510(TP-LINK|EU|N300-5|45550000):2.0\r\n",
            "CPE510(TP-LINK|EU|N300-5|55530000):2.0\r\n",
            "CPE510(TP-LINK|UN|N300-5|00000000):2.0\r\n",
            "CPE510(TP-LINK|UN|N300-5|45550000):2.0\r\n",
            "CPE510(TP-LINK|UN|N300-5|55530000):2.0\r\n",
            "CPE510(TP-LINK|US|N300-5|00000000):2.0\r\n",
            "CPE510(TP-LINK|US|N300-5|45550000):2.0\r\n",
            "CPE510(TP-LINK|US|N300-5|55530000):2.0\r\n",
            "CPE510(TP-LINK|UN|N300-5):2.0\r\n",
            "CPE510(TP-LINK|EU|N300-5):2.0\r\n",
            "CPE510(TP-LINK|US|N300-5):2.0\r\n",
        ),
        part_trail: PartTrail::Pad(0xff),
        soft_ver: SoftVer::DEFAULT,
        soft_ver_compat_level: 0,
        extra_para: None,
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "partition-table", base: 0x20000, size: 0x02000 },
            FlashEntry { name: "default-mac", base: 0x30000, size: 0x00020 },
            FlashEntry { name: "product-info", base: 0x31100, size: 0x00100 },
            FlashEntry { name: "signature", base: 0x32000, size: 0x00400 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0x770000 },
            FlashEntry { name: "soft-version", base: 0x7b0000, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0x7b1000, size: 0x00400 },
            FlashEntry { name: "user-config", base: 0x7c0000, size: 0x10000 },
            FlashEntry { name: "default-config", base: 0x7d0000, size: 0x10000 },
            FlashEntry { name: "log", base: 0x7e0000, size: 0x10000 },
            FlashEntry { name: "radio", base: 0x7f0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "support-list",
        partition_names: PartitionNames::DEFAULT,
    },
    /// CPE510 V3
    Profile {
        id: "CPE510V3",
        vendor: Some("CPE510(TP-LINK|UN|N300-5):3.0\r\n"),
        support_list: concat!(
            "SupportList:\r\n",
            "CPE510(TP-LINK|EU|N300-5|00000000):3.0\r\n",
            "CPE510(TP-LINK|EU|N300-5|45550000):3.0\r\n",
            "CPE510(TP-LINK|EU|N300-5|55530000):3.0\r\n",
            "CPE510(TP-LINK|UN|N300-5|00000000):3.0\r\n",
            "CPE510(TP-LINK|UN|N300-5|45550000):3.0\r\n",
            "CPE510(TP-LINK|UN|N300-5|55530000):3.0\r\n",
            "CPE510(TP-LINK|US|N300-5|00000000):3.0\r\n",
            "CPE510(TP-LINK|US|N300-5|45550000):3.0\r\n",
            "CPE510(TP-LINK|US|N300-5|55530000):3.0\r\n",
            "CPE510(TP-LINK|UN|N300-5):3.0\r\n",
            "CPE510(TP-LINK|EU|N300-5):3.0\r\n",
            "CPE510(TP-LINK|US|N300-5):3.0\r\n",
            "CPE510(TP-LINK|UN|N300-5|00000000):3.20\r\n",
            "CPE510(TP-LINK|US|N300-5|55530000):3.20\r\n",
            "CPE510(TP-LINK|EU|N300-5|45550000):3.20\r\n",
        ),
        part_trail: PartTrail::Pad(0xff),
        soft_ver: SoftVer::DEFAULT,
        soft_ver_compat_level: 0,
        extra_para: None,
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "partition-table", base: 0x20000, size: 0x02000 },
            FlashEntry { name: "default-mac", base: 0x30000, size: 0x00020 },
            FlashEntry { name: "product-info", base: 0x31100, size: 0x00100 },
            FlashEntry { name: "signature", base: 0x32000, size: 0x00400 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0x770000 },
            FlashEntry { name: "soft-version", base: 0x7b0000, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0x7b1000, size: 0x00400 },
            FlashEntry { name: "user-config", base: 0x7c0000, size: 0x10000 },
            FlashEntry { name: "default-config", base: 0x7d0000, size: 0x10000 },
            FlashEntry { name: "log", base: 0x7e0000, size: 0x10000 },
            FlashEntry { name: "radio", base: 0x7f0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "support-list",
        partition_names: PartitionNames::DEFAULT,
    },
    /// CPE610V1
    Profile {
        id: "CPE610V1",
        vendor: Some("CPE610(TP-LINK|UN|N300-5|00000000):1.0\r\n"),
        support_list: concat!(
            "SupportList:\r\n",
            "CPE610(TP-LINK|EU|N300-5|00000000):1.0\r\n",
            "CPE610(TP-LINK|EU|N300-5|45550000):1.0\r\n",
            "CPE610(TP-LINK|EU|N300-5|55530000):1.0\r\n",
            "CPE610(TP-LINK|UN|N300-5|00000000):1.0\r\n",
            "CPE610(TP-LINK|UN|N300-5|45550000):1.0\r\n",
            "CPE610(TP-LINK|UN|N300-5|55530000):1.0\r\n",
            "CPE610(TP-LINK|US|N300-5|55530000):1.0\r\n",
            "CPE610(TP-LINK|UN|N300-5):1.0\r\n",
            "CPE610(TP-LINK|EU|N300-5):1.0\r\n",
            "CPE610(TP-LINK|US|N300-5):1.0\r\n",
        ),
        part_trail: PartTrail::Pad(0xff),
        soft_ver: SoftVer::DEFAULT,
        soft_ver_compat_level: 0,
        extra_para: None,
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "partition-table", base: 0x20000, size: 0x02000 },
            FlashEntry { name: "default-mac", base: 0x30000, size: 0x00020 },
            FlashEntry { name: "product-info", base: 0x31100, size: 0x00100 },
            FlashEntry { name: "signature", base: 0x32000, size: 0x00400 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0x770000 },
            FlashEntry { name: "soft-version", base: 0x7b0000, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0x7b1000, size: 0x00400 },
            FlashEntry { name: "user-config", base: 0x7c0000, size: 0x10000 },
            FlashEntry { name: "default-config", base: 0x7d0000, size: 0x10000 },
            FlashEntry { name: "log", base: 0x7e0000, size: 0x10000 },
            FlashEntry { name: "radio", base: 0x7f0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "support-list",
        partition_names: PartitionNames::DEFAULT,
    },
    /// 
    Profile {
        id: "WBS210",
        vendor: Some("CPE510(TP-LINK|UN|N300-5):1.0\r\n"),
        support_list: concat!(
            "SupportList:\r\n",
            "WBS210(TP-LINK|UN|N300-2):1.20\r\n",
            "WBS210(TP-LINK|US|N300-2):1.20\r\n",
            "WBS210(TP-LINK|EU|N300-2):1.20\r\n",
        ),
        part_trail: PartTrail::Pad(0xff),
        soft_ver: SoftVer::DEFAULT,
        soft_ver_compat_level: 0,
        extra_para: None,
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "partition-table", base: 0x20000, size: 0x02000 },
            FlashEntry { name: "default-mac", base: 0x30000, size: 0x00020 },
            FlashEntry { name: "product-info", base: 0x31100, size: 0x00100 },
            FlashEntry { name: "signature", base: 0x32000, size: 0x00400 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0x770000 },
            FlashEntry { name: "soft-version", base: 0x7b0000, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0x7b1000, size: 0x00400 },
            FlashEntry { name: "user-config", base: 0x7c0000, size: 0x10000 },
            FlashEntry { name: "default-config", base: 0x7d0000, size: 0x10000 },
            FlashEntry { name: "log", base: 0x7e0000, size: 0x10000 },
            FlashEntry { name: "radio", base: 0x7f0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "support-list",
        partition_names: PartitionNames::DEFAULT,
    },
    /// 
    Profile {
        id: "WBS510",
        vendor: Some("CPE510(TP-LINK|UN|N300-5):1.0\r\n"),
        support_list: concat!(
            "SupportList:\r\n",
            "WBS510(TP-LINK|UN|N300-5):1.20\r\n",
            "WBS510(TP-LINK|US|N300-5):1.20\r\n",
            "WBS510(TP-LINK|EU|N300-5):1.20\r\n",
            "WBS510(TP-LINK|CA|N300-5):1.20\r\n",
        ),
        part_trail: PartTrail::Pad(0xff),
        soft_ver: SoftVer::DEFAULT,
        soft_ver_compat_level: 0,
        extra_para: None,
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "partition-table", base: 0x20000, size: 0x02000 },
            FlashEntry { name: "default-mac", base: 0x30000, size: 0x00020 },
            FlashEntry { name: "product-info", base: 0x31100, size: 0x00100 },
            FlashEntry { name: "signature", base: 0x32000, size: 0x00400 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0x770000 },
            FlashEntry { name: "soft-version", base: 0x7b0000, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0x7b1000, size: 0x00400 },
            FlashEntry { name: "user-config", base: 0x7c0000, size: 0x10000 },
            FlashEntry { name: "default-config", base: 0x7d0000, size: 0x10000 },
            FlashEntry { name: "log", base: 0x7e0000, size: 0x10000 },
            FlashEntry { name: "radio", base: 0x7f0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "support-list",
        partition_names: PartitionNames::DEFAULT,
    },
    /// A7-V5
    Profile {
        id: "ARCHER-A7-V5",
        vendor: None,
        support_list: concat!(
            "SupportList:\n",
            "{product_name:Archer A7,product_ver:5.0.0,special_id:45550000}\n",
            "{product_name:Archer A7,product_ver:5.0.0,special_id:55530000}\n",
            "{product_name:Archer A7,product_ver:5.0.0,special_id:43410000}\n",
            "{product_name:Archer A7,product_ver:5.0.0,special_id:4A500000}\n",
            "{product_name:Archer A7,product_ver:5.0.0,special_id:54570000}\n",
            "{product_name:Archer A7,product_ver:5.0.0,special_id:52550000}\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:7.0.0\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "factory-boot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "fs-uboot", base: 0x20000, size: 0x20000 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0xec0000 },
            FlashEntry { name: "default-mac", base: 0xf40000, size: 0x00200 },
            FlashEntry { name: "pin", base: 0xf40200, size: 0x00200 },
            FlashEntry { name: "device-id", base: 0xf40400, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0xf40500, size: 0x0fb00 },
            FlashEntry { name: "soft-version", base: 0xf50000, size: 0x00100 },
            FlashEntry { name: "extra-para", base: 0xf51000, size: 0x01000 },
            FlashEntry { name: "support-list", base: 0xf52000, size: 0x0a000 },
            FlashEntry { name: "profile", base: 0xf5c000, size: 0x04000 },
            FlashEntry { name: "default-config", base: 0xf60000, size: 0x10000 },
            FlashEntry { name: "user-config", base: 0xf70000, size: 0x40000 },
            FlashEntry { name: "certificate", base: 0xfb0000, size: 0x10000 },
            FlashEntry { name: "partition-table", base: 0xfc0000, size: 0x10000 },
            FlashEntry { name: "log", base: 0xfd0000, size: 0x20000 },
            FlashEntry { name: "radio", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// Archer A9 v6
    Profile {
        id: "ARCHER-A9-V6",
        vendor: None,
        support_list: concat!(
            "SupportList:\n",
            "{product_name:Archer A9,product_ver:6.0,special_id:55530000}\n",
            "{product_name:Archer A9,product_ver:6.0,special_id:45550000}\n",
            "{product_name:Archer A9,product_ver:6.0,special_id:52550000}\n",
            "{product_name:Archer A9,product_ver:6.0,special_id:4A500000}\n",
            "{product_name:Archer C90,product_ver:6.0,special_id:55530000}\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:1.1.0\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "factory-boot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "fs-uboot", base: 0x20000, size: 0x20000 },
            FlashEntry { name: "partition-table", base: 0x40000, size: 0x10000 },
            FlashEntry { name: "radio", base: 0x50000, size: 0x10000 },
            FlashEntry { name: "default-mac", base: 0x60000, size: 0x00200 },
            FlashEntry { name: "pin", base: 0x60200, size: 0x00200 },
            FlashEntry { name: "device-id", base: 0x60400, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0x60500, size: 0x0fb00 },
            FlashEntry { name: "soft-version", base: 0x70000, size: 0x01000 },
            FlashEntry { name: "extra-para", base: 0x71000, size: 0x01000 },
            FlashEntry { name: "support-list", base: 0x72000, size: 0x0a000 },
            FlashEntry { name: "profile", base: 0x7c000, size: 0x04000 },
            FlashEntry { name: "user-config", base: 0x80000, size: 0x10000 },
            FlashEntry { name: "ap-config", base: 0x90000, size: 0x10000 },
            FlashEntry { name: "apdef-config", base: 0xa0000, size: 0x10000 },
            FlashEntry { name: "router-config", base: 0xb0000, size: 0x10000 },
            FlashEntry { name: "firmware", base: 0xc0000, size: 0xf00000 },
            FlashEntry { name: "log", base: 0xfc0000, size: 0x20000 },
            FlashEntry { name: "certificate", base: 0xfe0000, size: 0x10000 },
            FlashEntry { name: "default-config", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// Archer AX23 v1
    Profile {
        id: "ARCHER-AX23-V1",
        vendor: Some(""),
        support_list: concat!(
            "SupportList:\n",
            "{product_name:Archer AX23,product_ver:1.0,special_id:45550000}\n",
            "{product_name:Archer AX23,product_ver:1.0,special_id:4A500000}\n",
            "{product_name:Archer AX23,product_ver:1.0,special_id:4B520000}\n",
            "{product_name:Archer AX23,product_ver:1.0,special_id:52550000}\n",
            "{product_name:Archer AX23,product_ver:1.0.0,special_id:43410000}\n",
            "{product_name:Archer AX23,product_ver:1.0.0,special_id:54570000}\n",
            "{product_name:Archer AX23,product_ver:1.0.0,special_id:55530000}\n",
            "{product_name:Archer AX23,product_ver:1.20,special_id:45550000}\n",
            "{product_name:Archer AX23,product_ver:1.20,special_id:4A500000}\n",
            "{product_name:Archer AX23,product_ver:1.20,special_id:52550000}\n",
            "{product_name:Archer AX23,product_ver:1.20,special_id:55530000}\n",
            "{product_name:Archer AX1800,product_ver:1.20,special_id:45550000}\n",
            "{product_name:Archer AX1800,product_ver:1.20,special_id:52550000}\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:3.0.3\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x40000 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0xf60000 },
            FlashEntry { name: "default-mac", base: 0xfa0000, size: 0x00200 },
            FlashEntry { name: "pin", base: 0xfa0200, size: 0x00100 },
            FlashEntry { name: "device-id", base: 0xfa0300, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0xfa0400, size: 0x0fc00 },
            FlashEntry { name: "default-config", base: 0xfb0000, size: 0x08000 },
            FlashEntry { name: "ap-def-config", base: 0xfb8000, size: 0x08000 },
            FlashEntry { name: "user-config", base: 0xfc0000, size: 0x0a000 },
            FlashEntry { name: "ag-config", base: 0xfca000, size: 0x04000 },
            FlashEntry { name: "certificate", base: 0xfce000, size: 0x02000 },
            FlashEntry { name: "ap-config", base: 0xfd0000, size: 0x06000 },
            FlashEntry { name: "router-config", base: 0xfd6000, size: 0x06000 },
            FlashEntry { name: "favicon", base: 0xfdc000, size: 0x02000 },
            FlashEntry { name: "logo", base: 0xfde000, size: 0x02000 },
            FlashEntry { name: "partition-table", base: 0xfe0000, size: 0x00800 },
            FlashEntry { name: "soft-version", base: 0xfe0800, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0xfe0900, size: 0x00400 },
            FlashEntry { name: "profile", base: 0xfe0d00, size: 0x03000 },
            FlashEntry { name: "extra-para", base: 0xfe3d00, size: 0x00100 },
            FlashEntry { name: "radio", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// C2v3
    Profile {
        id: "ARCHER-C2-V3",
        vendor: None,
        support_list: concat!(
            "SupportList:\n",
            "{product_name:ArcherC2,product_ver:3.0.0,special_id:00000000}\n",
            "{product_name:ArcherC2,product_ver:3.0.0,special_id:55530000}\n",
            "{product_name:ArcherC2,product_ver:3.0.0,special_id:45550000}\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:3.0.1\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "factory-boot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "fs-uboot", base: 0x20000, size: 0x10000 },
            FlashEntry { name: "firmware", base: 0x30000, size: 0x7a0000 },
            FlashEntry { name: "user-config", base: 0x7d0000, size: 0x04000 },
            FlashEntry { name: "default-mac", base: 0x7e0000, size: 0x00100 },
            FlashEntry { name: "device-id", base: 0x7e0100, size: 0x00100 },
            FlashEntry { name: "extra-para", base: 0x7e0200, size: 0x00100 },
            FlashEntry { name: "pin", base: 0x7e0300, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0x7e0400, size: 0x00400 },
            FlashEntry { name: "soft-version", base: 0x7e0800, size: 0x00400 },
            FlashEntry { name: "product-info", base: 0x7e0c00, size: 0x01400 },
            FlashEntry { name: "partition-table", base: 0x7e2000, size: 0x01000 },
            FlashEntry { name: "profile", base: 0x7e3000, size: 0x01000 },
            FlashEntry { name: "default-config", base: 0x7e4000, size: 0x04000 },
            FlashEntry { name: "merge-config", base: 0x7ec000, size: 0x02000 },
            FlashEntry { name: "qos-db", base: 0x7ee000, size: 0x02000 },
            FlashEntry { name: "radio", base: 0x7f0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// C25v1
    Profile {
        id: "ARCHER-C25-V1",
        vendor: None,
        support_list: concat!(
            "SupportList:\n",
            "{product_name:ArcherC25,product_ver:1.0.0,special_id:00000000}\n",
            "{product_name:ArcherC25,product_ver:1.0.0,special_id:55530000}\n",
            "{product_name:ArcherC25,product_ver:1.0.0,special_id:45550000}\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:1.0.0\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "factory-boot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "fs-uboot", base: 0x20000, size: 0x10000 },
            FlashEntry { name: "firmware", base: 0x30000, size: 0x7a0000 },
            FlashEntry { name: "user-config", base: 0x7d0000, size: 0x04000 },
            FlashEntry { name: "default-mac", base: 0x7e0000, size: 0x00100 },
            FlashEntry { name: "device-id", base: 0x7e0100, size: 0x00100 },
            FlashEntry { name: "extra-para", base: 0x7e0200, size: 0x00100 },
            FlashEntry { name: "pin", base: 0x7e0300, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0x7e0400, size: 0x00400 },
            FlashEntry { name: "soft-version", base: 0x7e0800, size: 0x00400 },
            FlashEntry { name: "product-info", base: 0x7e0c00, size: 0x01400 },
            FlashEntry { name: "partition-table", base: 0x7e2000, size: 0x01000 },
            FlashEntry { name: "profile", base: 0x7e3000, size: 0x01000 },
            FlashEntry { name: "default-config", base: 0x7e4000, size: 0x04000 },
            FlashEntry { name: "merge-config", base: 0x7ec000, size: 0x02000 },
            FlashEntry { name: "qos-db", base: 0x7ee000, size: 0x02000 },
            FlashEntry { name: "radio", base: 0x7f0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// C59v2
    Profile {
        id: "ARCHER-C59-V2",
        vendor: Some(""),
        support_list: concat!(
            "SupportList:\r\n",
            "{product_name:Archer C59,product_ver:2.0.0,special_id:00000000}\r\n",
            "{product_name:Archer C59,product_ver:2.0.0,special_id:43410000}\r\n",
            "{product_name:Archer C59,product_ver:2.0.0,special_id:45550000}\r\n",
            "{product_name:Archer C59,product_ver:2.0.0,special_id:55530000}\r\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:2.0.0 Build 20161206 rel.7303\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "factory-boot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "fs-uboot", base: 0x20000, size: 0x10000 },
            FlashEntry { name: "default-mac", base: 0x30000, size: 0x00200 },
            FlashEntry { name: "pin", base: 0x30200, size: 0x00200 },
            FlashEntry { name: "device-id", base: 0x30400, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0x30500, size: 0x0fb00 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0xe10000 },
            FlashEntry { name: "partition-table", base: 0xe50000, size: 0x10000 },
            FlashEntry { name: "soft-version", base: 0xe60000, size: 0x10000 },
            FlashEntry { name: "support-list", base: 0xe70000, size: 0x10000 },
            FlashEntry { name: "profile", base: 0xe80000, size: 0x10000 },
            FlashEntry { name: "default-config", base: 0xe90000, size: 0x10000 },
            FlashEntry { name: "user-config", base: 0xea0000, size: 0x40000 },
            FlashEntry { name: "usb-config", base: 0xee0000, size: 0x10000 },
            FlashEntry { name: "certificate", base: 0xef0000, size: 0x10000 },
            FlashEntry { name: "extra-para", base: 0xf00000, size: 0x10000 },
            FlashEntry { name: "qos-db", base: 0xf10000, size: 0x30000 },
            FlashEntry { name: "log", base: 0xfe0000, size: 0x10000 },
            FlashEntry { name: "radio", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// Archer C6 v2 (EU/RU/JP)
    Profile {
        id: "ARCHER-C6-V2",
        vendor: Some(""),
        support_list: concat!(
            "SupportList:\r\n",
            "{product_name:Archer A6,product_ver:2.0.0,special_id:45550000}\r\n",
            "{product_name:Archer A6,product_ver:2.0.0,special_id:52550000}\r\n",
            "{product_name:Archer C6,product_ver:2.0.0,special_id:45550000}\r\n",
            "{product_name:Archer C6,product_ver:2.0.0,special_id:52550000}\r\n",
            "{product_name:Archer C6,product_ver:2.0.0,special_id:4A500000}\r\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:1.9.1\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x00, 0x01]),
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "default-mac", base: 0x20000, size: 0x00200 },
            FlashEntry { name: "pin", base: 0x20200, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0x20300, size: 0x00200 },
            FlashEntry { name: "device-id", base: 0x20500, size: 0x0fb00 },
            FlashEntry { name: "firmware", base: 0x30000, size: 0x7a9400 },
            FlashEntry { name: "soft-version", base: 0x7d9400, size: 0x00100 },
            FlashEntry { name: "extra-para", base: 0x7d9500, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0x7d9600, size: 0x00200 },
            FlashEntry { name: "profile", base: 0x7d9800, size: 0x03000 },
            FlashEntry { name: "default-config", base: 0x7dc800, size: 0x03000 },
            FlashEntry { name: "partition-table", base: 0x7df800, size: 0x00800 },
            FlashEntry { name: "user-config", base: 0x7e0000, size: 0x0c000 },
            FlashEntry { name: "certificate", base: 0x7ec000, size: 0x04000 },
            FlashEntry { name: "radio", base: 0x7f0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// Archer C6 v2 (US) and A6 v2 (US/TW)
    Profile {
        id: "ARCHER-C6-V2-US",
        vendor: Some(""),
        support_list: concat!(
            "SupportList:\n",
            "{product_name:Archer A6,product_ver:2.0.0,special_id:55530000}\n",
            "{product_name:Archer A6,product_ver:2.0.0,special_id:54570000}\n",
            "{product_name:Archer C6,product_ver:2.0.0,special_id:55530000}\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:1.9.1\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x01]),
        partitions: &[
            FlashEntry { name: "factory-boot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "default-mac", base: 0x20000, size: 0x00200 },
            FlashEntry { name: "pin", base: 0x20200, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0x20300, size: 0x00200 },
            FlashEntry { name: "device-id", base: 0x20500, size: 0x0fb00 },
            FlashEntry { name: "fs-uboot", base: 0x30000, size: 0x20000 },
            FlashEntry { name: "firmware", base: 0x50000, size: 0xf89400 },
            FlashEntry { name: "soft-version", base: 0xfd9400, size: 0x00100 },
            FlashEntry { name: "extra-para", base: 0xfd9500, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0xfd9600, size: 0x00200 },
            FlashEntry { name: "profile", base: 0xfd9800, size: 0x03000 },
            FlashEntry { name: "default-config", base: 0xfdc800, size: 0x03000 },
            FlashEntry { name: "partition-table", base: 0xfdf800, size: 0x00800 },
            FlashEntry { name: "user-config", base: 0xfe0000, size: 0x0c000 },
            FlashEntry { name: "certificate", base: 0xfec000, size: 0x04000 },
            FlashEntry { name: "radio", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// Archer C6 v3
    Profile {
        id: "ARCHER-C6-V3",
        vendor: Some(""),
        support_list: concat!(
            "SupportList:\n",
            "{product_name:Archer C6,product_ver:3.20,special_id:55530000}{product_name:Archer C6,product_ver:3.20,special_id:45550000}{product_name:Archer C6,product_ver:3.20,special_id:52550000}{product_name:Archer C6,product_ver:3.20,special_id:4A500000}{product_name:Archer C6,product_ver:3.20,special_id:4B520000}{product_name:Archer C6,product_ver:3.0.0,special_id:42520000}",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:1.0.9\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x40000 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0xf60000 },
            FlashEntry { name: "default-mac", base: 0xfa0000, size: 0x00200 },
            FlashEntry { name: "pin", base: 0xfa0200, size: 0x00100 },
            FlashEntry { name: "device-id", base: 0xfa0300, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0xfa0400, size: 0x0fc00 },
            FlashEntry { name: "default-config", base: 0xfb0000, size: 0x08000 },
            FlashEntry { name: "ap-def-config", base: 0xfb8000, size: 0x08000 },
            FlashEntry { name: "user-config", base: 0xfc0000, size: 0x0a000 },
            FlashEntry { name: "ag-config", base: 0xfca000, size: 0x04000 },
            FlashEntry { name: "certificate", base: 0xfce000, size: 0x02000 },
            FlashEntry { name: "ap-config", base: 0xfd0000, size: 0x06000 },
            FlashEntry { name: "router-config", base: 0xfd6000, size: 0x06000 },
            FlashEntry { name: "favicon", base: 0xfdc000, size: 0x02000 },
            FlashEntry { name: "logo", base: 0xfde000, size: 0x02000 },
            FlashEntry { name: "partition-table", base: 0xfe0000, size: 0x00800 },
            FlashEntry { name: "soft-version", base: 0xfe0800, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0xfe0900, size: 0x00200 },
            FlashEntry { name: "profile", base: 0xfe0b00, size: 0x03000 },
            FlashEntry { name: "extra-para", base: 0xfe3b00, size: 0x00100 },
            FlashEntry { name: "radio", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// Archer A6 v3
    Profile {
        id: "ARCHER-A6-V3",
        vendor: Some(""),
        support_list: concat!(
            "SupportList:\n",
            "{product_name:Archer A6,product_ver:3.0.0,special_id:43410000}\n",
            "{product_name:Archer A6,product_ver:3.0.0,special_id:55530000}\n",
            "{product_name:Archer A6,product_ver:3.0.0,special_id:54570000}\n",
            "{product_name:Archer A6,product_ver:3.0.0,special_id:4A500000}\n",
            "{product_name:Archer A6,product_ver:3.20,special_id:45550000}\n",
            "{product_name:Archer A6,product_ver:3.20,special_id:52550000}\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:1.0.5\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x40000 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0xf60000 },
            FlashEntry { name: "default-mac", base: 0xfa0000, size: 0x00200 },
            FlashEntry { name: "pin", base: 0xfa0200, size: 0x00100 },
            FlashEntry { name: "device-id", base: 0xfa0300, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0xfa0400, size: 0x0fc00 },
            FlashEntry { name: "default-config", base: 0xfb0000, size: 0x08000 },
            FlashEntry { name: "ap-def-config", base: 0xfb8000, size: 0x08000 },
            FlashEntry { name: "user-config", base: 0xfc0000, size: 0x0a000 },
            FlashEntry { name: "ag-config", base: 0xfca000, size: 0x04000 },
            FlashEntry { name: "certificate", base: 0xfce000, size: 0x02000 },
            FlashEntry { name: "ap-config", base: 0xfd0000, size: 0x06000 },
            FlashEntry { name: "router-config", base: 0xfd6000, size: 0x06000 },
            FlashEntry { name: "favicon", base: 0xfdc000, size: 0x02000 },
            FlashEntry { name: "logo", base: 0xfde000, size: 0x02000 },
            FlashEntry { name: "partition-table", base: 0xfe0000, size: 0x00800 },
            FlashEntry { name: "soft-version", base: 0xfe0800, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0xfe0900, size: 0x00200 },
            FlashEntry { name: "profile", base: 0xfe0b00, size: 0x03000 },
            FlashEntry { name: "extra-para", base: 0xfe3b00, size: 0x00100 },
            FlashEntry { name: "radio", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// Archer C6U v1
    Profile {
        id: "ARCHER-C6U-V1",
        vendor: Some(""),
        support_list: concat!(
            "SupportList:\n",
            "{product_name:Archer C6U,product_ver:1.0.0,special_id:45550000}\n",
            "{product_name:Archer C6U,product_ver:1.0.0,special_id:52550000}\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:1.0.2\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x40000 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0xf60000 },
            FlashEntry { name: "default-mac", base: 0xfa0000, size: 0x00200 },
            FlashEntry { name: "pin", base: 0xfa0200, size: 0x00100 },
            FlashEntry { name: "device-id", base: 0xfa0300, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0xfa0400, size: 0x0fc00 },
            FlashEntry { name: "default-config", base: 0xfb0000, size: 0x08000 },
            FlashEntry { name: "ap-def-config", base: 0xfb8000, size: 0x08000 },
            FlashEntry { name: "user-config", base: 0xfc0000, size: 0x0c000 },
            FlashEntry { name: "certificate", base: 0xfcc000, size: 0x04000 },
            FlashEntry { name: "ap-config", base: 0xfd0000, size: 0x08000 },
            FlashEntry { name: "router-config", base: 0xfd8000, size: 0x08000 },
            FlashEntry { name: "partition-table", base: 0xfe0000, size: 0x00800 },
            FlashEntry { name: "soft-version", base: 0xfe0800, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0xfe0900, size: 0x00200 },
            FlashEntry { name: "profile", base: 0xfe0b00, size: 0x03000 },
            FlashEntry { name: "extra-para", base: 0xfe3b00, size: 0x00100 },
            FlashEntry { name: "radio", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// C60v2
    Profile {
        id: "ARCHER-C60-V2",
        vendor: Some(""),
        support_list: concat!(
            "SupportList:\r\n",
            "{product_name:Archer C60,product_ver:2.0.0,special_id:42520000}\r\n",
            "{product_name:Archer C60,product_ver:2.0.0,special_id:43410000}\r\n",
            "{product_name:Archer C60,product_ver:2.0.0,special_id:45550000}\r\n",
            "{product_name:Archer C60,product_ver:2.0.0,special_id:55530000}\r\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:2.0.0\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "factory-boot", base: 0x00000, size: 0x1fb00 },
            FlashEntry { name: "default-mac", base: 0x1fb00, size: 0x00200 },
            FlashEntry { name: "pin", base: 0x1fd00, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0x1fe00, size: 0x00100 },
            FlashEntry { name: "device-id", base: 0x1ff00, size: 0x00100 },
            FlashEntry { name: "fs-uboot", base: 0x20000, size: 0x10000 },
            FlashEntry { name: "firmware", base: 0x30000, size: 0x7a0000 },
            FlashEntry { name: "soft-version", base: 0x7d9500, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0x7d9600, size: 0x00100 },
            FlashEntry { name: "extra-para", base: 0x7d9700, size: 0x00100 },
            FlashEntry { name: "profile", base: 0x7d9800, size: 0x03000 },
            FlashEntry { name: "default-config", base: 0x7dc800, size: 0x03000 },
            FlashEntry { name: "partition-table", base: 0x7df800, size: 0x00800 },
            FlashEntry { name: "user-config", base: 0x7e0000, size: 0x0c000 },
            FlashEntry { name: "certificate", base: 0x7ec000, size: 0x04000 },
            FlashEntry { name: "radio", base: 0x7f0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// C60v3
    Profile {
        id: "ARCHER-C60-V3",
        vendor: Some(""),
        support_list: concat!(
            "SupportList:\r\n",
            "{product_name:Archer C60,product_ver:3.0.0,special_id:42520000}\r\n",
            "{product_name:Archer C60,product_ver:3.0.0,special_id:43410000}\r\n",
            "{product_name:Archer C60,product_ver:3.0.0,special_id:45550000}\r\n",
            "{product_name:Archer C60,product_ver:3.0.0,special_id:55530000}\r\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:3.0.0\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "factory-boot", base: 0x00000, size: 0x1fb00 },
            FlashEntry { name: "default-mac", base: 0x1fb00, size: 0x00200 },
            FlashEntry { name: "pin", base: 0x1fd00, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0x1fe00, size: 0x00100 },
            FlashEntry { name: "device-id", base: 0x1ff00, size: 0x00100 },
            FlashEntry { name: "fs-uboot", base: 0x20000, size: 0x10000 },
            FlashEntry { name: "firmware", base: 0x30000, size: 0x7a0000 },
            FlashEntry { name: "soft-version", base: 0x7d9500, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0x7d9600, size: 0x00100 },
            FlashEntry { name: "extra-para", base: 0x7d9700, size: 0x00100 },
            FlashEntry { name: "profile", base: 0x7d9800, size: 0x03000 },
            FlashEntry { name: "default-config", base: 0x7dc800, size: 0x03000 },
            FlashEntry { name: "partition-table", base: 0x7df800, size: 0x00800 },
            FlashEntry { name: "user-config", base: 0x7e0000, size: 0x0c000 },
            FlashEntry { name: "certificate", base: 0x7ec000, size: 0x04000 },
            FlashEntry { name: "radio", base: 0x7f0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// C7
    Profile {
        id: "ARCHER-C7-V4",
        vendor: None,
        support_list: concat!(
            "SupportList:\n",
            "{product_name:Archer C7,product_ver:4.0.0,special_id:00000000}\n",
            "{product_name:Archer C7,product_ver:4.0.0,special_id:41550000}\n",
            "{product_name:Archer C7,product_ver:4.0.0,special_id:45550000}\n",
            "{product_name:Archer C7,product_ver:4.0.0,special_id:4B520000}\n",
            "{product_name:Archer C7,product_ver:4.0.0,special_id:42520000}\n",
            "{product_name:Archer C7,product_ver:4.0.0,special_id:4A500000}\n",
            "{product_name:Archer C7,product_ver:4.0.0,special_id:52550000}\n",
            "{product_name:Archer C7,product_ver:4.0.0,special_id:54570000}\n",
            "{product_name:Archer C7,product_ver:4.0.0,special_id:55530000}\n",
            "{product_name:Archer C7,product_ver:4.0.0,special_id:43410000}\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:1.0.0\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "factory-boot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "fs-uboot", base: 0x20000, size: 0x20000 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0xec0000 },
            FlashEntry { name: "default-mac", base: 0xf00000, size: 0x00200 },
            FlashEntry { name: "pin", base: 0xf00200, size: 0x00200 },
            FlashEntry { name: "device-id", base: 0xf00400, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0xf00500, size: 0x0fb00 },
            FlashEntry { name: "soft-version", base: 0xf10000, size: 0x00100 },
            FlashEntry { name: "extra-para", base: 0xf11000, size: 0x01000 },
            FlashEntry { name: "support-list", base: 0xf12000, size: 0x0a000 },
            FlashEntry { name: "profile", base: 0xf1c000, size: 0x04000 },
            FlashEntry { name: "default-config", base: 0xf20000, size: 0x10000 },
            FlashEntry { name: "user-config", base: 0xf30000, size: 0x40000 },
            FlashEntry { name: "qos-db", base: 0xf70000, size: 0x40000 },
            FlashEntry { name: "certificate", base: 0xfb0000, size: 0x10000 },
            FlashEntry { name: "partition-table", base: 0xfc0000, size: 0x10000 },
            FlashEntry { name: "log", base: 0xfd0000, size: 0x20000 },
            FlashEntry { name: "radio", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// C7 v5
    Profile {
        id: "ARCHER-C7-V5",
        vendor: None,
        support_list: concat!(
            "SupportList:\n",
            "{product_name:Archer C7,product_ver:5.0.0,special_id:00000000}\n",
            "{product_name:Archer C7,product_ver:5.0.0,special_id:45550000}\n",
            "{product_name:Archer C7,product_ver:5.0.0,special_id:55530000}\n",
            "{product_name:Archer C7,product_ver:5.0.0,special_id:43410000}\n",
            "{product_name:Archer C7,product_ver:5.0.0,special_id:4A500000}\n",
            "{product_name:Archer C7,product_ver:5.0.0,special_id:54570000}\n",
            "{product_name:Archer C7,product_ver:5.0.0,special_id:52550000}\n",
            "{product_name:Archer C7,product_ver:5.0.0,special_id:4B520000}\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:7.0.0\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "factory-boot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "fs-uboot", base: 0x20000, size: 0x20000 },
            FlashEntry { name: "partition-table", base: 0x40000, size: 0x10000 },
            FlashEntry { name: "radio", base: 0x50000, size: 0x10000 },
            FlashEntry { name: "default-mac", base: 0x60000, size: 0x00200 },
            FlashEntry { name: "pin", base: 0x60200, size: 0x00200 },
            FlashEntry { name: "device-id", base: 0x60400, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0x60500, size: 0x0fb00 },
            FlashEntry { name: "soft-version", base: 0x70000, size: 0x01000 },
            FlashEntry { name: "extra-para", base: 0x71000, size: 0x01000 },
            FlashEntry { name: "support-list", base: 0x72000, size: 0x0a000 },
            FlashEntry { name: "profile", base: 0x7c000, size: 0x04000 },
            FlashEntry { name: "user-config", base: 0x80000, size: 0x40000 },
            FlashEntry { name: "firmware", base: 0xc0000, size: 0xf00000 },
            FlashEntry { name: "log", base: 0xfc0000, size: 0x20000 },
            FlashEntry { name: "certificate", base: 0xfe0000, size: 0x10000 },
            FlashEntry { name: "default-config", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// Deco M4R v4
    Profile {
        id: "DECO-M4R-V4",
        vendor: Some(""),
        support_list: concat!(
            "SupportList:\n",
            "{product_name:M4R,product_ver:4.0.0,special_id:55530000}\n",
            "{product_name:M4R,product_ver:4.0.0,special_id:45550000}\n",
            "{product_name:M4R,product_ver:4.0.0,special_id:4A500000}\n",
            "{product_name:M4R,product_ver:4.0.0,special_id:42340000}\n",
            "{product_name:M4R,product_ver:4.0.0,special_id:5A470000}\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:1.0.0\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x40000 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0xf60000 },
            FlashEntry { name: "default-mac", base: 0xfa0000, size: 0x00300 },
            FlashEntry { name: "device-id", base: 0xfa0300, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0xfa0400, size: 0x0fc00 },
            FlashEntry { name: "group-info", base: 0xfb0000, size: 0x04000 },
            FlashEntry { name: "user-config", base: 0xfb4000, size: 0x0c000 },
            FlashEntry { name: "device-config", base: 0xfc0000, size: 0x10000 },
            FlashEntry { name: "default-config", base: 0xfd0000, size: 0x10000 },
            FlashEntry { name: "partition-table", base: 0xfe0000, size: 0x00800 },
            FlashEntry { name: "soft-version", base: 0xfe0800, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0xfe0900, size: 0x00200 },
            FlashEntry { name: "profile", base: 0xfe0b00, size: 0x03000 },
            FlashEntry { name: "extra-para", base: 0xfe3b00, size: 0x00100 },
            FlashEntry { name: "radio", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// Deco M5
    Profile {
        id: "DECO-M5",
        vendor: Some(""),
        support_list: concat!(
            "SupportList:\n",
            "{product_name:M5,product_ver:1.0.0,special_id:55530000}\n",
            "{product_name:M5,product_ver:1.0.0,special_id:45550000}\n",
            "{product_name:M5,product_ver:1.0.0,special_id:43410000}\n",
            "{product_name:M5,product_ver:1.0.0,special_id:4A500000}\n",
            "{product_name:M5,product_ver:1.0.0,special_id:41550000}\n",
            "{product_name:M5,product_ver:1.0.0,special_id:4B520000}\n",
            "{product_name:M5,product_ver:1.0.0,special_id:49440000}\n",
            "{product_name:M5,product_ver:3.0.0,special_id:55530000}\n",
            "{product_name:M5,product_ver:3.0.0,special_id:45550000}\n",
            "{product_name:M5,product_ver:3.0.0,special_id:43410000}\n",
            "{product_name:M5,product_ver:3.0.0,special_id:4A500000}\n",
            "{product_name:M5,product_ver:3.0.0,special_id:41550000}\n",
            "{product_name:M5,product_ver:3.0.0,special_id:4B520000}\n",
            "{product_name:M5,product_ver:3.0.0,special_id:49440000}\n",
            "{product_name:M5,product_ver:3.0.0,special_id:53570000}\n",
            "{product_name:M5,product_ver:3.0.0,special_id:42340000}\n",
            "{product_name:M5,product_ver:3.0.0,special_id:54570000}\n",
            "{product_name:M5,product_ver:3.2.0,special_id:55530000}\n",
            "{product_name:M5,product_ver:3.2.0,special_id:45550000}\n",
            "{product_name:M5,product_ver:3.2.0,special_id:43410000}\n",
            "{product_name:M5,product_ver:3.2.0,special_id:4A500000}\n",
            "{product_name:M5,product_ver:3.2.0,special_id:41550000}\n",
            "{product_name:M5,product_ver:3.2.0,special_id:4B520000}\n",
            "{product_name:M5,product_ver:3.2.0,special_id:49440000}\n",
            "{product_name:M5,product_ver:3.2.0,special_id:53570000}\n",
            "{product_name:M5,product_ver:3.2.0,special_id:42340000}\n",
            "{product_name:M5,product_ver:3.2.0,special_id:54570000}\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::DEFAULT,
        soft_ver_compat_level: 0,
        extra_para: None,
        partitions: &[
            FlashEntry { name: "SBL1", base: 0x00000, size: 0x30000 },
            FlashEntry { name: "boot-config_0", base: 0x30000, size: 0x10000 },
            FlashEntry { name: "MIBIB", base: 0x40000, size: 0x10000 },
            FlashEntry { name: "boot-config_1", base: 0x50000, size: 0x10000 },
            FlashEntry { name: "QSEE", base: 0x60000, size: 0x60000 },
            FlashEntry { name: "CDT", base: 0xc0000, size: 0x10000 },
            FlashEntry { name: "DDRPARAMS", base: 0xd0000, size: 0x10000 },
            FlashEntry { name: "uboot-env", base: 0xe0000, size: 0x10000 },
            FlashEntry { name: "fs-uboot@0", base: 0xf0000, size: 0x80000 },
            FlashEntry { name: "radio", base: 0x170000, size: 0x0fff0 },
            FlashEntry { name: "bluetooth-XTAL", base: 0x17fff0, size: 0x00010 },
            FlashEntry { name: "default-mac", base: 0x180000, size: 0x01000 },
            FlashEntry { name: "device-id", base: 0x182000, size: 0x01000 },
            FlashEntry { name: "product-info", base: 0x183000, size: 0x05000 },
            FlashEntry { name: "support-list", base: 0x190000, size: 0x10000 },
            FlashEntry { name: "user-config", base: 0x200000, size: 0x10000 },
            FlashEntry { name: "device-config", base: 0x210000, size: 0x10000 },
            FlashEntry { name: "group-info", base: 0x220000, size: 0x10000 },
            FlashEntry { name: "partition-table@0", base: 0x230000, size: 0x02000 },
            FlashEntry { name: "os-image@0", base: 0x240000, size: 0x300000 },
            FlashEntry { name: "file-system@0", base: 0x540000, size: 0x790000 },
            FlashEntry { name: "soft-version@0", base: 0xcd0000, size: 0x10000 },
            FlashEntry { name: "profile@0", base: 0xce0000, size: 0x10000 },
            FlashEntry { name: "default-config@0", base: 0xcf0000, size: 0x10000 },
            FlashEntry { name: "partition-table@1", base: 0xd00000, size: 0x02000 },
            FlashEntry { name: "fs-uboot@1", base: 0xd10000, size: 0x80000 },
            FlashEntry { name: "os-image@1", base: 0xd90000, size: 0x400000 },
            FlashEntry { name: "file-system@1", base: 0x1190000, size: 0xc40000 },
            FlashEntry { name: "soft-version@1", base: 0x1dd0000, size: 0x10000 },
            FlashEntry { name: "profile@1", base: 0x1de0000, size: 0x10000 },
            FlashEntry { name: "default-config@1", base: 0x1df0000, size: 0x10000 },
            FlashEntry { name: "tm-sig", base: 0x1e00000, size: 0x200000 },
        ],
        first_sysupgrade_partition: "os-image@1",
        last_sysupgrade_partition: "file-system@1",
        partition_names: PartitionNames {
            partition_table: Some("partition-table@1"),
            soft_ver: Some("soft-version@1"),
            os_image: Some("os-image@1"),
            file_system: Some("file-system@1"),
            ..PartitionNames::DEFAULT
        },
    },
    /// EAP225-Outdoor v1
    Profile {
        id: "EAP225-OUTDOOR-V1",
        vendor: None,
        support_list: concat!(
            "SupportList:\r\n",
            "EAP225-Outdoor(TP-Link|UN|AC1200-D):1.0\r\n",
        ),
        part_trail: PartTrail::None,
        soft_ver: SoftVer::DEFAULT,
        soft_ver_compat_level: 1,
        extra_para: None,
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "partition-table", base: 0x20000, size: 0x02000 },
            FlashEntry { name: "default-mac", base: 0x30000, size: 0x01000 },
            FlashEntry { name: "support-list", base: 0x31000, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0x31100, size: 0x00400 },
            FlashEntry { name: "soft-version", base: 0x32000, size: 0x00100 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0xd80000 },
            FlashEntry { name: "user-config", base: 0xdc0000, size: 0x30000 },
            FlashEntry { name: "mutil-log", base: 0xf30000, size: 0x80000 },
            FlashEntry { name: "oops", base: 0xfb0000, size: 0x40000 },
            FlashEntry { name: "radio", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// EAP245 v1
    Profile {
        id: "EAP245-V1",
        vendor: None,
        support_list: concat!(
            "SupportList:\r\n",
            "EAP245(TP-LINK|UN|AC1750-D):1.0\r\n",
        ),
        part_trail: PartTrail::None,
        soft_ver: SoftVer::DEFAULT,
        soft_ver_compat_level: 0,
        extra_para: None,
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "partition-table", base: 0x20000, size: 0x02000 },
            FlashEntry { name: "default-mac", base: 0x30000, size: 0x01000 },
            FlashEntry { name: "support-list", base: 0x31000, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0x31100, size: 0x00400 },
            FlashEntry { name: "soft-version", base: 0x32000, size: 0x00100 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0xd80000 },
            FlashEntry { name: "user-config", base: 0xdc0000, size: 0x30000 },
            FlashEntry { name: "radio", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// EAP245 v3
    Profile {
        id: "EAP245-V3",
        vendor: None,
        support_list: concat!(
            "SupportList:\r\n",
            "EAP245(TP-Link|UN|AC1750-D):3.0\r\n",
            "EAP265 HD(TP-Link|UN|AC1750-D):1.0",
        ),
        part_trail: PartTrail::None,
        soft_ver: SoftVer::DEFAULT,
        soft_ver_compat_level: 1,
        extra_para: Some([0x01, 0x01]),
        partitions: &[
            FlashEntry { name: "factroy-boot", base: 0x00000, size: 0x40000 },
            FlashEntry { name: "fs-uboot", base: 0x40000, size: 0x40000 },
            FlashEntry { name: "partition-table", base: 0x80000, size: 0x10000 },
            FlashEntry { name: "default-mac", base: 0x90000, size: 0x01000 },
            FlashEntry { name: "support-list", base: 0x91000, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0x91100, size: 0x00400 },
            FlashEntry { name: "soft-version", base: 0x92000, size: 0x00100 },
            FlashEntry { name: "radio", base: 0xa0000, size: 0x10000 },
            FlashEntry { name: "extra-para", base: 0xb0000, size: 0x10000 },
            FlashEntry { name: "firmware", base: 0xc0000, size: 0xe40000 },
            FlashEntry { name: "config", base: 0xf00000, size: 0x30000 },
            FlashEntry { name: "mutil-log", base: 0xf30000, size: 0x80000 },
            FlashEntry { name: "oops", base: 0xfb0000, size: 0x40000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// TL-WA1201 v2
    Profile {
        id: "TL-WA1201-V2",
        vendor: Some(""),
        support_list: concat!(
            "SupportList:\n",
            "{product_name:TL-WA1201,product_ver:2.0.0,special_id:45550000}\n",
            "{product_name:TL-WA1201,product_ver:2.0.0,special_id:55530000}\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:1.0.1 Build 20200709 rel.66244\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x00, 0x01]),
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "default-mac", base: 0x20000, size: 0x00200 },
            FlashEntry { name: "pin", base: 0x20200, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0x20300, size: 0x00200 },
            FlashEntry { name: "device-id", base: 0x20500, size: 0x0fb00 },
            FlashEntry { name: "firmware", base: 0x30000, size: 0xce0000 },
            FlashEntry { name: "portal-logo", base: 0xd10000, size: 0x20000 },
            FlashEntry { name: "portal-back", base: 0xd30000, size: 0x200000 },
            FlashEntry { name: "soft-version", base: 0xf30000, size: 0x00200 },
            FlashEntry { name: "extra-para", base: 0xf30200, size: 0x00200 },
            FlashEntry { name: "support-list", base: 0xf30400, size: 0x00200 },
            FlashEntry { name: "profile", base: 0xf30600, size: 0x0fa00 },
            FlashEntry { name: "apdef-config", base: 0xf40000, size: 0x10000 },
            FlashEntry { name: "ap-config", base: 0xf50000, size: 0x10000 },
            FlashEntry { name: "redef-config", base: 0xf60000, size: 0x10000 },
            FlashEntry { name: "re-config", base: 0xf70000, size: 0x10000 },
            FlashEntry { name: "multidef-config", base: 0xf80000, size: 0x10000 },
            FlashEntry { name: "multi-config", base: 0xf90000, size: 0x10000 },
            FlashEntry { name: "clientdef-config", base: 0xfa0000, size: 0x10000 },
            FlashEntry { name: "client-config", base: 0xfb0000, size: 0x10000 },
            FlashEntry { name: "partition-table", base: 0xfc0000, size: 0x10000 },
            FlashEntry { name: "user-config", base: 0xfd0000, size: 0x10000 },
            FlashEntry { name: "certificate", base: 0xfe0000, size: 0x10000 },
            FlashEntry { name: "radio", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// TL-WR1043 v5
    Profile {
        id: "TLWR1043NV5",
        vendor: Some(""),
        support_list: concat!(
            "SupportList:\n",
            "{product_name:TL-WR1043N,product_ver:5.0.0,special_id:45550000}\n",
            "{product_name:TL-WR1043N,product_ver:5.0.0,special_id:55530000}\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::Text("soft_ver:1.0.0\n"),
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "factory-boot", base: 0x00000, size: 0x20000 },
            FlashEntry { name: "fs-uboot", base: 0x20000, size: 0x20000 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0xec0000 },
            FlashEntry { name: "default-mac", base: 0xf00000, size: 0x00200 },
            FlashEntry { name: "pin", base: 0xf00200, size: 0x00200 },
            FlashEntry { name: "device-id", base: 0xf00400, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0xf00500, size: 0x0fb00 },
            FlashEntry { name: "soft-version", base: 0xf10000, size: 0x01000 },
            FlashEntry { name: "extra-para", base: 0xf11000, size: 0x01000 },
            FlashEntry { name: "support-list", base: 0xf12000, size: 0x0a000 },
            FlashEntry { name: "profile", base: 0xf1c000, size: 0x04000 },
            FlashEntry { name: "default-config", base: 0xf20000, size: 0x10000 },
            FlashEntry { name: "user-config", base: 0xf30000, size: 0x40000 },
            FlashEntry { name: "qos-db", base: 0xf70000, size: 0x40000 },
            FlashEntry { name: "certificate", base: 0xfb0000, size: 0x10000 },
            FlashEntry { name: "partition-table", base: 0xfc0000, size: 0x10000 },
            FlashEntry { name: "log", base: 0xfd0000, size: 0x20000 },
            FlashEntry { name: "radio", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
    /// Mercusys MR70X
    Profile {
        id: "MR70X",
        vendor: Some(""),
        support_list: concat!(
            "SupportList:\n",
            "{product_name:MR70X,product_ver:1.0.0,special_id:45550000}\n",
            "{product_name:MR70X,product_ver:1.0.0,special_id:4A500000}\n",
            "{product_name:MR70X,product_ver:1.0.0,special_id:55530000}\n",
        ),
        part_trail: PartTrail::Pad(0x00),
        soft_ver: SoftVer::DEFAULT,
        soft_ver_compat_level: 0,
        extra_para: Some([0x01, 0x00]),
        partitions: &[
            FlashEntry { name: "fs-uboot", base: 0x00000, size: 0x40000 },
            FlashEntry { name: "firmware", base: 0x40000, size: 0xf60000 },
            FlashEntry { name: "default-mac", base: 0xfa0000, size: 0x00200 },
            FlashEntry { name: "pin", base: 0xfa0200, size: 0x00100 },
            FlashEntry { name: "device-id", base: 0xfa0300, size: 0x00100 },
            FlashEntry { name: "product-info", base: 0xfa0400, size: 0x0fc00 },
            FlashEntry { name: "default-config", base: 0xfb0000, size: 0x08000 },
            FlashEntry { name: "ap-def-config", base: 0xfb8000, size: 0x08000 },
            FlashEntry { name: "user-config", base: 0xfc0000, size: 0x0a000 },
            FlashEntry { name: "ag-config", base: 0xfca000, size: 0x04000 },
            FlashEntry { name: "certificate", base: 0xfce000, size: 0x02000 },
            FlashEntry { name: "ap-config", base: 0xfd0000, size: 0x06000 },
            FlashEntry { name: "router-config", base: 0xfd6000, size: 0x06000 },
            FlashEntry { name: "favicon", base: 0xfdc000, size: 0x02000 },
            FlashEntry { name: "logo", base: 0xfde000, size: 0x02000 },
            FlashEntry { name: "partition-table", base: 0xfe0000, size: 0x00800 },
            FlashEntry { name: "soft-version", base: 0xfe0800, size: 0x00100 },
            FlashEntry { name: "support-list", base: 0xfe0900, size: 0x00200 },
            FlashEntry { name: "profile", base: 0xfe0b00, size: 0x03000 },
            FlashEntry { name: "extra-para", base: 0xfe3b00, size: 0x00100 },
            FlashEntry { name: "radio", base: 0xff0000, size: 0x10000 },
        ],
        first_sysupgrade_partition: "os-image",
        last_sysupgrade_partition: "file-system",
        partition_names: PartitionNames::DEFAULT,
    },
];
