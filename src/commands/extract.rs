//! Extract command: write every embedded partition to a directory

use std::error::Error;
use std::fs;
use std::path::Path;

use safeloader_core::container;

pub fn run(image: &Path, dir: &Path) -> Result<(), Box<dyn Error>> {
    let meta = fs::metadata(dir)
        .map_err(|e| format!("failed to stat output directory `{}': {}", dir.display(), e))?;
    if !meta.is_dir() {
        return Err(format!("`{}' is not a directory", dir.display()).into());
    }

    let data = fs::read(image)
        .map_err(|e| format!("can not read input firmware `{}': {}", image.display(), e))?;
    let info = container::parse(&data)?;

    for entry in &info.partitions {
        // partition names come from the image; never let them escape dir
        if entry.name.contains(['/', '\\']) {
            return Err(format!("refusing to extract partition `{}'", entry.name).into());
        }

        let payload = container::partition_data(&data, &info, entry)?;
        let path = dir.join(&entry.name);
        fs::write(&path, payload)
            .map_err(|e| format!("can not write `{}': {}", path.display(), e))?;
        log::debug!("wrote {} bytes to {}", payload.len(), path.display());
    }

    Ok(())
}
