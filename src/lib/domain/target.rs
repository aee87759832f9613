//! The higher abstractions of the program

use crate::domain::commands::arguments::Arguments;
use crate::domain::commands::command_lines::{LinkerCommandLine, SourceCommandLine};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// The final product that will be made after the building process, along with the
/// command lines that produce it
#[derive(Debug, PartialEq, Eq, Serialize, Clone)]
pub struct Target<'a> {
    pub kind: TargetKind,
    pub driver: Cow<'a, str>,
    pub sources: Vec<SourceCommandLine<'a>>,
    pub linker: LinkerCommandLine<'a>,
    /// The static library targets, declared before this one, that this target links against
    pub dependencies: Vec<TargetIdentifier<'a>>,
    /// Where the executable or the static library is written to
    pub artifact: PathBuf,
    #[serde(skip)]
    pub enabled_for_current_program_iteration: bool,
}

impl<'a> Target<'a> {
    /// All the command lines of this target in execution order, each one with the
    /// program to invoke as its first element
    pub fn command_lines(&self) -> Vec<Arguments<'a>> {
        self.sources
            .iter()
            .map(|scl| {
                let mut full = Arguments::with_capacity(scl.args.len() + 1);
                full.push(self.driver.clone());
                full.extend_from_slice(&scl.args);
                full
            })
            .chain(std::iter::once(self.linker.full_command()))
            .collect()
    }
}

/// Strong type for storing the target unique identifier, which instead of being
/// composite within the [`Target`] struct, is externalized in this wrapped type, so
/// we can use a strong type on the targets containers
#[derive(Debug, PartialEq, Eq, Serialize, Default, Hash, Clone)]
pub struct TargetIdentifier<'a>(pub Cow<'a, str>);

impl<'a> From<&'a str> for TargetIdentifier<'a> {
    fn from(value: &'a str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl<'a> From<Cow<'a, str>> for TargetIdentifier<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self(value)
    }
}

impl<'a> From<String> for TargetIdentifier<'a> {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl<'a> TargetIdentifier<'a> {
    pub fn name(&self) -> &str {
        self.0.as_ref()
    }
}

impl<'a> fmt::Display for TargetIdentifier<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The different types of final products
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Default, Copy, Clone)]
pub enum TargetKind {
    #[default]
    #[serde(alias = "executable", alias = "exe")]
    Executable,
    #[serde(
        alias = "static lib",
        alias = "static-lib",
        alias = "static_lib",
        alias = "staticlib"
    )]
    StaticLib,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Executable => write!(f, "executable"),
            TargetKind::StaticLib => write!(f, "static library"),
        }
    }
}
