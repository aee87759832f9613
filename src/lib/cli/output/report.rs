//! The summary of an invocation of `Thenga`, written under `<output_dir>/thenga`

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use color_eyre::{eyre::Context, Result};
use serde::Serialize;

use crate::domain::target::{Target, TargetIdentifier, TargetKind};
use crate::domain::translation_unit::TranslationUnitStatus;
use crate::project_model::compiler::CppCompiler;
use crate::utils::{
    self,
    constants::{error_messages, BUILD_REPORT_FILENAME, THENGA},
};

#[derive(Serialize, Debug)]
pub struct BuildReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub project: &'a str,
    pub compiler: CppCompiler,
    pub targets: Vec<TargetReport<'a>>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct TargetReport<'a> {
    pub name: &'a str,
    pub kind: TargetKind,
    pub artifact: &'a PathBuf,
    pub status: TranslationUnitStatus,
    pub sources: Vec<SourceReport<'a>>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct SourceReport<'a> {
    pub file: PathBuf,
    pub object: &'a PathBuf,
    pub status: TranslationUnitStatus,
}

impl<'a> BuildReport<'a> {
    pub fn new<'b, I>(project: &'a str, compiler: CppCompiler, targets: I) -> Self
    where
        'b: 'a,
        I: IntoIterator<Item = (&'a TargetIdentifier<'b>, &'a Target<'b>)>,
    {
        Self {
            generated_at: Utc::now(),
            project,
            compiler,
            targets: targets
                .into_iter()
                .map(|(identifier, target)| TargetReport::new(identifier, target))
                .collect(),
        }
    }

    /// Writes the report as `<output_dir>/thenga/build_report.json`
    pub fn save(&self, output_dir: &Path) -> Result<PathBuf> {
        let report_dir = output_dir.join(THENGA);
        utils::fs::create_directory(&report_dir)?;

        let report_path = report_dir.join(BUILD_REPORT_FILENAME);
        utils::fs::save_file(&report_path, self)
            .with_context(|| error_messages::FAILURE_SAVING_BUILD_REPORT)?;

        log::debug!("Build report saved at: {:?}", report_path);
        Ok(report_path)
    }
}

impl<'a> TargetReport<'a> {
    fn new<'b: 'a>(identifier: &'a TargetIdentifier<'b>, target: &'a Target<'b>) -> Self {
        Self {
            name: identifier.name(),
            kind: target.kind,
            artifact: &target.artifact,
            status: overall_status(target),
            sources: target
                .sources
                .iter()
                .map(|scl| SourceReport {
                    file: scl.path(),
                    object: &scl.byproduct,
                    status: scl.status,
                })
                .collect(),
        }
    }
}

/// A target succeeds when its final command line does, and fails as soon as any of its
/// command lines fails
fn overall_status(target: &Target<'_>) -> TranslationUnitStatus {
    let statuses = || {
        target
            .sources
            .iter()
            .map(|scl| scl.status)
            .chain(std::iter::once(target.linker.execution_result))
    };

    if statuses().any(|status| status == TranslationUnitStatus::Error) {
        TranslationUnitStatus::Error
    } else if statuses().all(|status| status == TranslationUnitStatus::Skipped) {
        TranslationUnitStatus::Skipped
    } else {
        target.linker.execution_result
    }
}
