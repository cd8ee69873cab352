//! Info command: describe an existing firmware image

use std::error::Error;
use std::fs;
use std::path::Path;

use safeloader_core::container::{self, ImageType};
use safeloader_core::meta::{self, SoftVersion};

pub fn run(image: &Path) -> Result<(), Box<dyn Error>> {
    let data = fs::read(image)
        .map_err(|e| format!("can not read input firmware `{}': {}", image.display(), e))?;
    let info = container::parse(&data)?;

    if info.kind == ImageType::Vendor {
        println!("Firmware vendor string:");
        println!("{}", container::vendor_banner(&data)?);
    }

    println!("Firmware image partitions:");
    println!("{:<8} {:<8} {}", "base", "size", "name");
    for entry in &info.partitions {
        println!("{:08x} {:08x} {}", entry.base, entry.size, entry.name);
    }

    if let Some(entry) = info.find("soft-version") {
        let payload = container::partition_data(&data, &info, entry)?;
        let content = meta::content(payload)?;

        println!();
        println!("[Software version]");
        if content.iter().all(|b| b.is_ascii()) {
            let end = content.iter().position(|&b| b == 0).unwrap_or(content.len());
            println!("{}", String::from_utf8_lossy(&content[..end]));
        } else if let Some(version) = SoftVersion::parse(content) {
            println!(
                "Version: {}.{}.{}",
                version.version_major, version.version_minor, version.version_patch
            );
            println!(
                "Date: {:02x}{:02x}-{:02x}-{:02x}",
                version.year_hi, version.year_lo, version.month, version.day
            );
            println!("Revision: {}", version.rev.get());
        } else {
            println!("Failed to parse data");
        }
    }

    if let Some(entry) = info.find("support-list") {
        let payload = container::partition_data(&data, &info, entry)?;
        let content = meta::content(payload)?;

        println!();
        println!("[Support list]");
        println!("{}", String::from_utf8_lossy(content));
    }

    if info.find("partition-table").is_some() {
        let flash = container::flash_table(&data, &info)?;

        println!();
        println!("[Partition table]");
        println!("{:<8} {:<8} {}", "base", "size", "name");
        for entry in &flash {
            println!("{:08x} {:08x} {}", entry.base, entry.size, entry.name);
        }
    }

    Ok(())
}
