use std::borrow::Cow;
use std::path::PathBuf;

/// * `project_root` - the absolute path of the directory that holds the configuration file.
/// Every relative path declared on it is resolved against this one
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ProjectModel<'a> {
    pub name: Cow<'a, str>,
    pub authors: Vec<Cow<'a, str>>,
    pub compilation_db: bool,
    pub project_root: PathBuf,
}
