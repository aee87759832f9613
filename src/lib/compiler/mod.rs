//! The core work of `Thenga`: maps the targets declared by the user into the command lines
//! that build them, for the compiler chosen in the configuration file

pub mod arguments;
pub mod builder;
pub mod compile_commands;

use color_eyre::{eyre::Context, Result};

use crate::domain::env::BuildEnv;
use crate::domain::target::TargetKind;
use crate::project_model::ThengaModel;

use self::builder::Builder;

/// Generates the command lines for every target of the project, in declaration order.
///
/// Every target starts from its own copy of the baseline [`BuildEnv`] of the project, appends
/// its flags and its libraries to it, and then asks the [`Builder`] for the executable or the
/// static library that it declares
pub fn generate_commands<'a>(model: &ThengaModel<'a>) -> Result<Builder<'a>> {
    let project_root = &model.project.project_root;
    let baseline = BuildEnv::baseline(&model.compiler, project_root);
    let mut bld = Builder::new(project_root, &model.build.output_dir);

    for (identifier, target) in model.targets.iter() {
        let mut env = baseline.clone();
        env.append_cc_flags(target.cc_flags.iter());
        env.append_libs(target.libs.iter().cloned());

        let generated = match target.kind {
            TargetKind::Executable => {
                bld.build_executable(&env, identifier.0.clone(), &target.sources)
            }
            TargetKind::StaticLib => {
                bld.build_static_lib(&env, identifier.0.clone(), &target.sources)
            }
        };
        generated.with_context(|| {
            format!("Failed to generate the commands for the target: {identifier}")
        })?;

        if let Some(generated) = bld.targets_mut().get_mut(identifier) {
            generated.enabled_for_current_program_iteration =
                target.enabled_for_current_program_iteration;
        }
    }

    Ok(bld)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::input::CliArgs;
    use crate::config_file;
    use crate::domain::target::TargetIdentifier;
    use crate::utils::{self, reader};
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn test_every_target_starts_from_the_baseline() -> Result<()> {
        let config = config_file::thenga_cfg_from_file(utils::constants::CONFIG_FILE_MOCK)?;
        let cli_args = CliArgs::parse_from(["", "plan"]);
        let model = reader::build_model(config, &cli_args, Path::new("/project"))?;

        let bld = generate_commands(&model)?;
        let targets = bld.targets();
        assert_eq!(targets.len(), model.targets.len());

        let first = &targets[0].sources[0].args;
        assert_eq!(first[0].value(), "-Wall");
        assert!(!first.iter().any(|arg| arg.value() == "-std=c++0x"));

        let threaded = targets[1].sources[0].args.to_string();
        assert!(threaded.starts_with("-Wall -std=c++0x"));
        assert!(targets[1].linker.args.iter().any(|arg| arg.value() == "-lpthread"));

        let lib_user = &targets[3];
        assert!(!lib_user.linker.args.iter().any(|arg| arg.value() == "-lpthread"));
        assert_eq!(
            lib_user.dependencies,
            vec![TargetIdentifier::from("exampleThengaBuild.4")]
        );
        assert!(lib_user.artifact.starts_with(Path::new("/project/build/gcc")));

        Ok(())
    }
}
