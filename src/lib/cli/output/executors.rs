//! Contains helpers and data structures to be processed in a nice and neat way the commands generated to be executed
//! by Thenga

use std::path::Path;
use std::process::ExitStatus;

use crate::domain::commands::arguments::Arguments;
use crate::domain::target::{Target, TargetIdentifier, TargetKind};
use crate::domain::translation_unit::TranslationUnitStatus;
use crate::utils::constants::error_messages;
use color_eyre::eyre::{bail, eyre, Context, ContextCompat};
use color_eyre::{Report, Result};
use indexmap::IndexMap;

/// Runs the command lines of every enabled target, one target after the other, in the order
/// in which they were declared. Every command line status is recorded on its target
pub fn run_targets_generated_commands(
    targets: &mut IndexMap<TargetIdentifier<'_>, Target<'_>>,
    project_root: &Path,
) -> Result<()> {
    log::info!("Proceeding to execute the generated commands...");

    for idx in 0..targets.len() {
        let (identifier, target) = targets
            .get_index(idx)
            .with_context(|| format!("No target found at position {idx}"))?;

        if !target.enabled_for_current_program_iteration {
            log::debug!("Skipping the target: {identifier}. It is disabled for this iteration");
            helpers::mark_as_skipped(&mut targets[idx]);
            continue;
        }

        helpers::check_static_lib_dependencies_were_built(targets, idx)?;

        let (identifier, target) = targets
            .get_index_mut(idx)
            .with_context(|| format!("No target found at position {idx}"))?;
        log::info!("Building the {} target: {identifier}", target.kind);
        build_target(target, project_root)
            .with_context(|| format!("Failed to build the target: {identifier}"))?;
    }

    Ok(())
}

/// Compiles every translation unit of `target`, and then links or archives the object files
fn build_target(target: &mut Target<'_>, project_root: &Path) -> Result<()> {
    if let Some(artifacts_dir) = target.artifact.parent() {
        crate::utils::fs::create_directory(artifacts_dir)?;
    }

    for scl in target.sources.iter_mut() {
        if let Some(objects_dir) = scl.byproduct.parent() {
            crate::utils::fs::create_directory(objects_dir)?;
        }

        let r = execute_command(&target.driver, &scl.args, project_root);
        scl.status = TranslationUnitStatus::from(&r);

        if !r?.success() {
            bail!(
                "Ending the program, because the build of: {:?} failed",
                scl.filename
            );
        }
    }

    let linker = &mut target.linker;
    let r = execute_command(&linker.program, &linker.args, project_root);
    linker.execution_result = TranslationUnitStatus::from(&r);

    if !r?.success() {
        return Err(eyre!(
            "Ending the program, because the {} command line execution failed",
            match target.kind {
                TargetKind::Executable => "linker",
                TargetKind::StaticLib => "archiver",
            }
        ));
    }

    log::info!("Generated => {:?}", target.artifact);
    Ok(())
}

/// Executes a new [`std::process::Command`] to run the generated binary
/// after the build process in the specified shell
pub fn autorun_generated_binary(target: &Target<'_>, project_root: &Path) -> Result<()> {
    let binary = &target.artifact;
    log::info!("Executing the generated binary => {:?}", binary);

    let status = std::process::Command::new(binary)
        .current_dir(project_root)
        .spawn()
        .with_context(|| format!("Could not launch the binary {binary:?}"))?
        .wait()
        .with_context(|| format!("Command {binary:?} failed!"))?;

    if !status.success() {
        bail!("The execution of {binary:?} finished with {status}");
    }
    Ok(())
}

/// Executes a new [`std::process::Command`] for `program`, with the project root as the
/// working directory
fn execute_command(
    program: &str,
    arguments: &Arguments<'_>,
    project_root: &Path,
) -> Result<ExitStatus, Report> {
    log::trace!("Executing command => {program} {arguments}");

    std::process::Command::new(program)
        .args(arguments)
        .current_dir(project_root)
        .spawn()
        .with_context(|| format!("Could not launch {program}. Is it installed?"))?
        .wait()
        .with_context(|| format!("Command {program} {arguments} failed!"))
}

mod helpers {
    use super::*;

    pub(crate) fn mark_as_skipped(target: &mut Target<'_>) {
        target
            .sources
            .iter_mut()
            .for_each(|scl| scl.status = TranslationUnitStatus::Skipped);
        target.linker.execution_result = TranslationUnitStatus::Skipped;
    }

    /// The artifact of every static library that the target at `idx` links against must
    /// already be on the filesystem
    pub(crate) fn check_static_lib_dependencies_were_built(
        targets: &IndexMap<TargetIdentifier<'_>, Target<'_>>,
        idx: usize,
    ) -> Result<()> {
        let target = &targets[idx];
        for dependency in &target.dependencies {
            let lib = targets.get(dependency).with_context(|| {
                format!("{}: {dependency}", error_messages::MISSING_STATIC_LIB_ARTIFACT)
            })?;
            if !lib.artifact.exists() {
                bail!(
                    "{}: {dependency}. Expected at {:?}",
                    error_messages::MISSING_STATIC_LIB_ARTIFACT,
                    lib.artifact
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::builder::Builder;
    use crate::domain::env::BuildEnv;
    use crate::project_model::compiler::CppCompiler;
    use tempfile::tempdir;

    #[test]
    fn test_missing_static_lib_artifact_aborts_the_link() -> Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        let ola = BuildEnv::new(CppCompiler::GCC);
        let mut bld = Builder::new(root, &root.join("out"));

        bld.build_static_lib(&ola, "exampleThengaBuild.4", &["ex4_staticlib.cpp"])?;
        let mut cola = ola.clone();
        cola.append_libs(["exampleThengaBuild.4"]);
        bld.build_executable(&cola, "exampleThengaBuild.5", &["ex5_usestaticlib.cpp"])?;

        let targets = bld.targets_mut();
        targets[0].enabled_for_current_program_iteration = false;

        let result = run_targets_generated_commands(targets, root);
        assert!(result.is_err());
        assert_eq!(targets[0].linker.execution_result, TranslationUnitStatus::Skipped);
        assert_eq!(
            targets[1].sources[0].status,
            TranslationUnitStatus::PendingToBuild
        );

        Ok(())
    }

    #[test]
    fn test_disabled_targets_are_skipped() -> Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        let mut bld = Builder::new(root, &root.join("out"));
        bld.build_executable(
            &BuildEnv::new(CppCompiler::GCC),
            "exampleThengaBuild.1",
            &["ex1.cpp"],
        )?;

        let targets = bld.targets_mut();
        targets[0].enabled_for_current_program_iteration = false;

        run_targets_generated_commands(targets, root)?;
        assert_eq!(targets[0].sources[0].status, TranslationUnitStatus::Skipped);
        assert!(!root.join("out").exists());

        Ok(())
    }
}
