use std::fs;
use std::io;
use std::path::Path;

use crate::reporting::logging;

pub trait WriteToFile {
    fn write_to_file(&self, path: &Path, data: &str) -> io::Result<()>;
}

/// Writes report files, creating or truncating them.
///
/// The handle is opened and closed within each call.
#[derive(Debug, Default)]
pub struct Writer;

impl WriteToFile for Writer {
    fn write_to_file(&self, path: &Path, data: &str) -> io::Result<()> {
        fs::write(path, data)?;
        logging::log_file_written(path, data.len());
        Ok(())
    }
}

/// Create the output directory and any missing parents
pub fn ensure_output_dir(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path)
}
