//! Convert command: rewrite a factory/OEM image as a sysupgrade image

use std::error::Error;
use std::fs;
use std::path::Path;

use safeloader_core::container;

pub fn run(image: &Path, output: &Path) -> Result<(), Box<dyn Error>> {
    let data = fs::read(image)
        .map_err(|e| format!("can not read input firmware `{}': {}", image.display(), e))?;

    let converted = container::convert_to_sysupgrade(&data)?;

    fs::write(output, &converted)
        .map_err(|e| format!("can not write `{}': {}", output.display(), e))?;

    Ok(())
}
