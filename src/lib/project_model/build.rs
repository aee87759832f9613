use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize, Clone, Default)]
pub struct BuildModel {
    /// Absolute path of the directory where every byproduct of the build is written
    pub output_dir: PathBuf,
}
