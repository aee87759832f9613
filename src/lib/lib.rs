pub mod cli;
pub mod compiler;
pub mod config_file;
pub mod domain;
pub mod project_model;
pub mod scenarios;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use crate::config_file;
    use crate::config_file::ThengaConfigFile;
    use crate::domain::target::TargetKind;
    use std::path::PathBuf;
    use std::{fs, path::Path, time::Instant};

    use crate::utils::constants::error_messages;
    use crate::{
        cli::{
            input::{CliArgs, Command},
            output::{executors, report::BuildReport},
        },
        compiler::{builder::Builder, compile_commands, generate_commands},
        project_model::ThengaModel,
        utils::{
            self,
            reader::{find_config_files, ConfigFile},
            template::create_templated_project,
        },
    };
    use color_eyre::{eyre::Context, Report, Result};

    /// The main work of the project. Runs the tasks
    /// inputted in the CLI
    pub fn run_thenga(cli_args: &CliArgs, project_root: &Path) -> std::result::Result<(), Report> {
        let abs_project_root = determine_absolute_path_of_the_project_root(cli_args, project_root)?;

        // If this run is just for create a new C++ project with the example targets,
        // create it and exit
        if it_is_template_creation_then_create(cli_args, &abs_project_root)? {
            return Ok(());
        };

        let config_files: Vec<ConfigFile> =
            find_config_files(&abs_project_root, &cli_args.match_files)?;

        for config_file in config_files {
            let cfg_path = &config_file.path;
            log::debug!(
                "Launching a Thenga work event for the configuration file: {:?}",
                cfg_path,
            );
            let raw_file = fs::read_to_string(cfg_path)
                .with_context(|| format!("{}: {:?}", error_messages::READ_CFG_FILE, cfg_path))?;

            let config: ThengaConfigFile<'_> = config_file::thenga_cfg_from_file(raw_file.as_str())
                .with_context(|| format!("{}: {:?}", error_messages::PARSE_CFG_FILE, cfg_path))?;

            let program_data = {
                // The model is only mutated within the scope of this block, and after it,
                // it will be read-only data
                let mut program_data: ThengaModel<'_> =
                    utils::reader::build_model(config, cli_args, config_file.project_root())
                        .with_context(|| error_messages::PROJECT_MODEL_MAPPING)?;
                helpers::enable_and_disable_targets_based_on_cli_inputs(&mut program_data, cli_args);

                program_data
            };

            perform_main_work(cli_args, &program_data, cfg_path)?;
        }

        Ok(())
    }

    /// Inspects the [`CliArgs`] main passed argument, and if it's [`Command::New`] just creates a
    /// new *C++* project at the *abs_project_root* and exits
    fn it_is_template_creation_then_create(
        cli_args: &CliArgs,
        abs_project_root: &Path,
    ) -> Result<bool> {
        if let Command::New {
            ref name,
            git,
            compiler,
        } = cli_args.command
        {
            create_templated_project(abs_project_root, name, git, compiler.into())?;
            return Ok(true);
        };
        Ok(false)
    }

    fn perform_main_work(
        cli_args: &CliArgs,
        program_data: &ThengaModel<'_>,
        cfg_path: &Path,
    ) -> Result<()> {
        let generate_commands_ts = Instant::now();

        let mut bld = generate_commands(program_data)
            .with_context(|| error_messages::FAILURE_GENERATING_COMMANDS)?;

        log::debug!(
            "Thenga took a total of {:?} ms on generating the commands",
            generate_commands_ts.elapsed().as_millis()
        );

        if program_data.project.compilation_db {
            compile_commands::map_generated_commands_to_compilation_db(
                &program_data.project.project_root,
                bld.targets().values(),
            )?;
        }

        let work_result = do_main_work_based_on_cli_input(cli_args, program_data, &mut bld)
            .with_context(|| {
                format!(
                    "{}: {:?}",
                    error_messages::FAILED_BUILD_FOR_CFG_FILE,
                    cfg_path
                )
            });

        if cli_args.command.ne(&Command::Plan) {
            // Written even when the build fails, so the failed command lines can be inspected
            BuildReport::new(
                &program_data.project.name,
                program_data.compiler.cpp_compiler,
                bld.targets(),
            )
            .save(&program_data.build.output_dir)?;
        }

        work_result.with_context(|| format!("Failed to complete the job for: {:?}", cfg_path))
    }

    fn do_main_work_based_on_cli_input(
        cli_args: &CliArgs,
        program_data: &ThengaModel<'_>,
        bld: &mut Builder<'_>,
    ) -> Result<()> {
        let project_root = &program_data.project.project_root;

        match cli_args.command {
            Command::Plan => {
                helpers::print_plan(bld);
                Ok(())
            }
            Command::Build => executors::run_targets_generated_commands(bld.targets_mut(), project_root),
            Command::Run => {
                executors::run_targets_generated_commands(bld.targets_mut(), project_root)?;
                for target in bld.targets().values() {
                    if target.enabled_for_current_program_iteration
                        && target.kind.eq(&TargetKind::Executable)
                    {
                        executors::autorun_generated_binary(target, project_root)?
                    }
                }
                Ok(())
            }
            Command::New { .. } => Ok(()),
        }
    }

    /// Resolves the full path of the location of the project's root on the fs. If the `--root`
    /// [`CliArgs`] arg is present, it will be used as the project root path, otherwise, the
    /// `project_root` received by the worker is used
    fn determine_absolute_path_of_the_project_root(
        cli_args: &CliArgs,
        project_root: &Path,
    ) -> Result<PathBuf> {
        let project_root = cli_args
            .root
            .as_deref()
            .map(Path::new)
            .unwrap_or(project_root);

        utils::fs::get_project_root_absolute_path(project_root)
            .with_context(|| error_messages::FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH)
    }

    mod helpers {
        use super::*;

        /// Restricts the targets processed on this iteration to the ones requested with
        /// `--targets`. Every target is enabled when the argument is absent
        pub(crate) fn enable_and_disable_targets_based_on_cli_inputs(
            program_data: &mut ThengaModel<'_>,
            cli_args: &CliArgs,
        ) {
            let Some(filtered_targets) = cli_args.targets.as_ref() else {
                program_data
                    .targets
                    .values_mut()
                    .for_each(|target| target.enabled_for_current_program_iteration = true);
                return;
            };

            for (target_identifier, target_data) in program_data.targets.iter_mut() {
                let target_name = target_identifier.name();
                let enabled = filtered_targets.iter().any(|t| t.eq(target_name));
                target_data.enabled_for_current_program_iteration = enabled;

                log::info!(
                    "Target: {target_name} is {} from CLI for this iteration of Thenga",
                    if enabled { "enabled" } else { "disabled" }
                );
            }

            for unknown in filtered_targets
                .iter()
                .filter(|t| !program_data.targets.keys().any(|k| k.name().eq(t.as_str())))
            {
                log::warn!("{}: {unknown}", error_messages::UNKNOWN_TARGET_FROM_CLI);
            }
        }

        pub(crate) fn print_plan(bld: &Builder<'_>) {
            for (identifier, target) in bld.targets() {
                if !target.enabled_for_current_program_iteration {
                    log::info!("[{identifier}] - disabled for this iteration");
                    continue;
                }

                log::info!("[{identifier}] - {} => {:?}", target.kind, target.artifact);
                for command_line in target.command_lines() {
                    log::info!("    {command_line}");
                }
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::utils::constants::CONFIG_FILE_MOCK;
        use clap::Parser;

        #[test]
        fn test_cli_targets_filter() -> Result<()> {
            let config = config_file::thenga_cfg_from_file(CONFIG_FILE_MOCK)?;
            let cli_args = CliArgs::parse_from([
                "",
                "--targets",
                "exampleThengaBuild.4,exampleThengaBuild.9",
                "build",
            ]);
            let mut model = utils::reader::build_model(config, &cli_args, Path::new("/project"))?;

            helpers::enable_and_disable_targets_based_on_cli_inputs(&mut model, &cli_args);

            let enabled: Vec<&str> = model
                .targets
                .iter()
                .filter(|(_, target)| target.enabled_for_current_program_iteration)
                .map(|(identifier, _)| identifier.name())
                .collect();
            assert_eq!(enabled, vec!["exampleThengaBuild.4"]);

            Ok(())
        }
    }
}
