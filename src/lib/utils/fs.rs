use std::{
    fs::{DirBuilder, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use color_eyre::{eyre::Context, Result};
use serde::Serialize;

pub fn create_file<'a>(path: &Path, filename: &'a str, buff_write: &'a [u8]) -> Result<()> {
    let file_path = path.join(filename);

    File::create(&file_path)
        .with_context(|| format!("Could not create file {file_path:?}"))?
        .write_all(buff_write)
        .with_context(|| format!("Could not write to file {file_path:?}"))
}

pub fn create_directory(path_create: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(path_create)
        .with_context(|| format!("Could not create directory {path_create:?}"))
}

/// Gets the absolute route for an element in the system given a path P,
/// without the extension is P belongs to a file
pub fn get_project_root_absolute_path(project_root: &Path) -> Result<PathBuf> {
    let canonical = std::fs::canonicalize(project_root)
        .with_context(|| format!("Could not resolve the absolute path of {project_root:?}"))?;
    log::trace!("Project root absolute path: {:?}", canonical);
    Ok(canonical)
}

/// Serializes `data` as pretty printed JSON into the file at `path`, creating
/// or truncating it
pub fn save_file<T>(path: &Path, data: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let file = File::create(path).with_context(|| format!("Could not create file {path:?}"))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .with_context(|| format!("Could not serialize data into {path:?}"))?;
    writer
        .flush()
        .with_context(|| format!("Could not write to file {path:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::Result;
    use tempfile::tempdir;

    #[test]
    fn test_save_file_as_json() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("data.json");

        save_file(&path, &vec!["a", "b"])?;

        let raw = std::fs::read_to_string(&path)?;
        let parsed: Vec<String> = serde_json::from_str(&raw)?;
        assert_eq!(parsed, vec!["a", "b"]);

        Ok(())
    }
}
