//! Writers that turn a recorded run into text files for external tools
//!
//! - `ovito`  per-frame particle dump for trajectory visualizers
//! - `series` bracketed arrays for plotting

pub mod ovito;
pub mod series;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::warn;

use crate::error::SimResult;

/// Open `path` for writing (creating missing parent directories), hand a
/// buffered writer to `write` and flush it.
pub fn save_with<F>(path: &Path, write: F) -> SimResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            warn!("creating missing output directory {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer)?;
    writer.flush()?;
    Ok(())
}
