use core::fmt;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::domain::translation_unit::TranslationUnit;
use crate::impl_translation_unit_for;
use crate::utils::constants::error_messages;
use color_eyre::eyre::{eyre, Context, ContextCompat};
use color_eyre::Result;
use serde::Serialize;

/// A source file of a target.
///
/// * `path` - the absolute directory where the file lives
/// * `relative` - the path of the file as it was found relative to the project root,
///     used to mirror the source tree under the object files directory
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize)]
pub struct SourceFile<'a> {
    pub path: PathBuf,
    pub file_stem: Cow<'a, str>,
    pub extension: Cow<'a, str>,
    pub relative: PathBuf,
}

impl_translation_unit_for!(SourceFile<'a>);

impl<'a> fmt::Display for SourceFile<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.relative.display())
    }
}

impl<'a> SourceFile<'a> {
    /// Splits a path to a file into its [`SourceFile`] components
    pub fn from_path(file: &Path, project_root: &Path) -> Result<Self> {
        let parent = file
            .parent()
            .with_context(|| format!("{}: {file:?}", error_messages::ILL_FORMED_SOURCE_PATH))?;
        let file_stem = file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .with_context(|| format!("{}: {file:?}", error_messages::ILL_FORMED_SOURCE_PATH))?;
        let extension = file
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        let relative = file
            .strip_prefix(project_root)
            .map(Path::to_path_buf)
            .or_else(|_| file.file_name().map(PathBuf::from).ok_or(()))
            .map_err(|_| eyre!("{}: {file:?}", error_messages::ILL_FORMED_SOURCE_PATH))?;

        Ok(Self {
            path: parent.to_path_buf(),
            file_stem: Cow::Owned(file_stem.to_string()),
            extension: Cow::Owned(extension.to_string()),
            relative,
        })
    }
}

/// A source declared by the user: a concrete file, or a glob pattern that expands to
/// zero or more files
#[derive(Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Glob(GlobPattern),
}

impl Source {
    pub fn new(declared: &str, project_root: &Path) -> Self {
        if declared.contains(['*', '?', '[']) {
            // Only the declared part is a pattern, the project root is matched literally
            let root = glob::Pattern::escape(&project_root.to_string_lossy());
            Source::Glob(GlobPattern(PathBuf::from(root).join(declared)))
        } else {
            Source::File(project_root.join(declared))
        }
    }

    #[inline(always)]
    pub fn paths(&self) -> Result<Vec<PathBuf>> {
        match self {
            Source::File(file) => Ok(vec![file.to_path_buf()]),
            Source::Glob(pattern) => pattern.resolve(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct GlobPattern(pub PathBuf);

impl GlobPattern {
    #[inline(always)]
    fn resolve(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.0.to_str().unwrap_or_default();
        let mut paths = glob::glob(pattern)
            .with_context(|| format!("Invalid glob pattern: {pattern}"))?
            .map(|path| path.with_context(|| format!("Unreadable path matching {pattern}")))
            .collect::<Result<Vec<PathBuf>>>()?;
        paths.sort();
        Ok(paths)
    }
}

/// The ordered collection of the source files of a target
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize)]
pub struct SourceSet<'a> {
    pub sources: Vec<SourceFile<'a>>,
}

impl<'a> SourceSet<'a> {
    /// Resolves the user declared sources against the project root, expanding
    /// the glob patterns. Declaration order is kept
    pub fn resolve<S: AsRef<str>>(declared: &[S], project_root: &Path) -> Result<Self> {
        let mut sources = Vec::with_capacity(declared.len());

        for src in declared {
            for path in Source::new(src.as_ref(), project_root).paths()? {
                sources.push(SourceFile::from_path(&path, project_root)?);
            }
        }

        Ok(Self { sources })
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
