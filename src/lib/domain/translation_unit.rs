//! The module which holds the higher and generic abstractions over a source file

use std::borrow::Cow;
use std::fmt::{Debug, Display};
use std::path::PathBuf;
use std::process::ExitStatus;

use color_eyre::Report;
use serde::Serialize;

/// Represents any kind of translation unit and the generic operations
/// applicable to all the implementors
pub trait TranslationUnit<'a>: Display + Debug {
    /// Returns the full path of the [`TranslationUnit`] behind the invocation, including
    /// the file stem and the extension
    ///
    /// # Examples
    ///
    /// ```
    /// use std::borrow::Cow;
    /// use std::path::PathBuf;
    /// use thenga::domain::translation_unit::TranslationUnit;
    /// use thenga::project_model::sourceset::SourceFile;
    ///
    /// let source_file = SourceFile {
    ///     path: PathBuf::from("/usr/src/othersrc"),
    ///     file_stem: Cow::from("ex2"),
    ///     extension: Cow::from("cpp"),
    ///     relative: PathBuf::from("othersrc/ex2.cpp"),
    /// };
    ///
    /// assert_eq!(source_file.path(), PathBuf::from("/usr/src/othersrc/ex2.cpp"));
    /// assert_eq!(source_file.filename(), "ex2.cpp");
    /// ```
    fn path(&self) -> PathBuf {
        self.parent().join(self.filename())
    }

    /// Returns only the path to the directory where the translation unit lives on the fs
    fn parent(&self) -> &PathBuf;

    /// Outputs the declared file stem (filename without extension) for this translation unit
    fn file_stem(&self) -> &Cow<'_, str>;

    /// Outputs the declared extension for `self`
    fn extension(&self) -> &Cow<'_, str>;

    /// Outputs the file stem concatenated with the extension for a given tu
    fn filename(&self) -> String {
        if self.extension().is_empty() {
            self.file_stem().to_string()
        } else {
            format!("{}.{}", self.file_stem(), self.extension())
        }
    }
}

#[macro_export]
macro_rules! impl_translation_unit_for {
    ($t:ty) => {
        impl<'a> TranslationUnit<'a> for $t {
            fn parent(&self) -> &PathBuf {
                &self.path
            }

            fn file_stem(&self) -> &Cow<'_, str> {
                &self.file_stem
            }

            fn extension(&self) -> &Cow<'_, str> {
                &self.extension
            }
        }
    };
}

/// The result of processing a command line of any kind: compiling a translation unit,
/// linking an executable or archiving a static library
#[derive(Debug, Default, Copy, Clone, Serialize, PartialEq, Eq)]
pub enum TranslationUnitStatus {
    /// The command line was generated but it was not executed yet
    #[default]
    PendingToBuild,
    /// The command line was executed and the process exited successfully
    Success,
    /// The process could not be spawned or it exited with a failure
    Error,
    /// Not processed in this iteration of the program
    Skipped,
}

impl From<color_eyre::Result<ExitStatus, Report>> for TranslationUnitStatus {
    fn from(value: color_eyre::Result<ExitStatus, Report>) -> Self {
        helpers::handle_command_execution_result(&value)
    }
}

impl From<&color_eyre::Result<ExitStatus, Report>> for TranslationUnitStatus {
    fn from(value: &color_eyre::Result<ExitStatus, Report>) -> Self {
        helpers::handle_command_execution_result(value)
    }
}

mod helpers {
    use crate::domain::translation_unit::TranslationUnitStatus;
    use std::process::ExitStatus;

    /// Convenient way of handle a command execution result avoiding duplicate code
    pub(crate) fn handle_command_execution_result(
        value: &color_eyre::Result<ExitStatus>,
    ) -> TranslationUnitStatus {
        match value {
            Ok(r) if r.success() => TranslationUnitStatus::Success,
            _ => TranslationUnitStatus::Error,
        }
    }
}
