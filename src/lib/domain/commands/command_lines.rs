use crate::domain::commands::arguments::{Argument, Arguments};
use crate::domain::translation_unit::{TranslationUnit, TranslationUnitStatus};
use serde::Serialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Type for representing the command line that will be sent to the target compiler, and
/// store its different components
///
/// * directory*: the path where the translation unit lives
/// * filename*: the translation unit declared name on the fs with the extension
/// * args*: member that holds all the cmd arguments that will be passed to the compiler driver
/// * status*: A [`TranslationUnitStatus`] that represents the result of processing this
///     command line in the current iteration of the program
/// * byproduct*: the physical address on the filesystem where the compiled object file
///     will be dumped after building it
#[derive(Debug, Clone, Serialize, Eq, PartialEq)]
pub struct SourceCommandLine<'a> {
    pub directory: PathBuf,
    pub filename: String,
    pub args: Arguments<'a>,
    pub status: TranslationUnitStatus,
    pub byproduct: PathBuf,
}

impl<'a> SourceCommandLine<'a> {
    pub fn new<'b, T: TranslationUnit<'b>>(tu: &T, args: Arguments<'a>, byproduct: PathBuf) -> Self {
        Self {
            directory: tu.parent().clone(),
            filename: tu.filename(),
            args,
            status: TranslationUnitStatus::PendingToBuild,
            byproduct,
        }
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(Path::new(&self.filename))
    }
}

/// The command line that produces the final artifact of a target out of its object files.
/// Depending on the kind of the target, `program` is the compiler driver acting as the
/// linker, or the archiver
#[derive(Debug, Default, Serialize, Clone, Eq, PartialEq)]
pub struct LinkerCommandLine<'a> {
    pub program: Cow<'a, str>,
    pub args: Arguments<'a>,
    pub execution_result: TranslationUnitStatus,
}

impl<'a> LinkerCommandLine<'a> {
    pub fn new<P: Into<Cow<'a, str>>>(program: P, args: Arguments<'a>) -> Self {
        Self {
            program: program.into(),
            args,
            execution_result: TranslationUnitStatus::PendingToBuild,
        }
    }

    /// The full command line, with the program as its first element
    pub fn full_command(&self) -> Arguments<'a> {
        std::iter::once(Argument::from(self.program.clone()))
            .chain(self.args.iter().cloned())
            .collect()
    }
}
