use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use tracing::debug;

use crate::GeneratorError;

fn path_string(name: &Path) -> String {
    name.as_os_str().to_string_lossy().to_string()
}

/// Writes `content` to `name` in a single pass, creating missing parent directories.
pub fn write_filename(name: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = name.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| {
            GeneratorError::FileCreationError(path_string(parent), err.to_string())
        })?;
    }
    let mut output_file = match File::create(name) {
        Ok(file) => file,
        Err(err) => {
            return Err(GeneratorError::FileCreationError(
                path_string(name),
                err.to_string(),
            ))
        }
    };
    output_file
        .write_all(content.as_bytes())
        .map_err(|err| GeneratorError::FileWriteError(path_string(name), err.to_string()))?;
    debug!("Wrote {} bytes to {}", content.len(), name.display());
    Ok(())
}
