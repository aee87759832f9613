//! The `exampleThengaBuild` targets, declared straight over the [`Builder`] API.
//!
//! Every example takes its own copy of the `ola` environment, customizes it when it needs to,
//! and asks the builder for an executable or a static library. This is the same set of
//! targets that `thenga new` writes on the configuration file of a new project.
//!
//! ```rust
//! use std::path::Path;
//! use thenga::compiler::builder::Builder;
//! use thenga::domain::env::BuildEnv;
//! use thenga::project_model::compiler::CppCompiler;
//! use thenga::scenarios::example_thenga_build;
//!
//! let ola = BuildEnv::new(CppCompiler::GCC);
//! let mut bld = Builder::new(Path::new("/project"), Path::new("/project/out"));
//!
//! example_thenga_build(&ola, &mut bld).expect("the examples are well formed");
//! assert_eq!(bld.targets().len(), 6);
//! assert_eq!(ola, BuildEnv::new(CppCompiler::GCC));
//! ```

use color_eyre::Result;

use crate::compiler::builder::Builder;
use crate::domain::env::BuildEnv;

pub fn example_thenga_build<'a>(ola: &BuildEnv<'a>, bld: &mut Builder<'a>) -> Result<()> {
    // example 1: build a simple executable
    let cola = ola.clone();
    bld.build_executable(&cola, "exampleThengaBuild.1", &["ex1.cpp"])?;

    // example 2: the header is found on the include directory
    let cola = ola.clone();
    bld.build_executable(&cola, "exampleThengaBuild.2", &["ex2.cpp"])?;

    // example 2.1: same as the second one, with the source on a subdirectory
    let cola = ola.clone();
    bld.build_executable(&cola, "exampleThengaBuild.2.1", &["othersrc/ex2.cpp"])?;

    // example 3: threads
    let mut cola = ola.clone();
    cola.append_cc_flags(["-std=c++0x"]);
    cola.append_libs(["pthread"]);
    bld.build_executable(&cola, "exampleThengaBuild.3", &["ex3_thread.cpp"])?;

    // example 4: build a static library
    let cola = ola.clone();
    bld.build_static_lib(&cola, "exampleThengaBuild.4", &["ex4_staticlib.cpp"])?;

    // example 5: use the static library, found as libexampleThengaBuild.4.a
    let mut cola = ola.clone();
    cola.append_libs(["exampleThengaBuild.4"]);
    bld.build_executable(&cola, "exampleThengaBuild.5", &["ex5_usestaticlib.cpp"])?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::input::CliArgs;
    use crate::compiler::generate_commands;
    use crate::config_file;
    use crate::domain::target::{TargetIdentifier, TargetKind};
    use crate::utils::{reader, template::resources};
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn test_scenarios_match_the_project_template() -> Result<()> {
        let raw = resources::CONFIG_FILE.replace("<compiler>", "gcc");
        let config = config_file::thenga_cfg_from_file(&raw)?;
        let cli_args = CliArgs::parse_from(["", "plan"]);
        let root = Path::new("/project");
        let model = reader::build_model(config, &cli_args, root)?;

        let from_config = generate_commands(&model)?;

        let ola = BuildEnv::baseline(&model.compiler, root);
        let mut bld = Builder::new(root, &model.build.output_dir);
        example_thenga_build(&ola, &mut bld)?;

        assert_eq!(bld.targets(), from_config.targets());
        Ok(())
    }

    #[test]
    fn test_only_the_threaded_example_gets_extra_flags() -> Result<()> {
        let ola = BuildEnv::new(crate::project_model::compiler::CppCompiler::GCC);
        let mut bld = Builder::new(Path::new("/project"), Path::new("/project/out"));
        example_thenga_build(&ola, &mut bld)?;

        for (identifier, target) in bld.targets() {
            let uses_flag = target.sources[0]
                .args
                .iter()
                .any(|arg| arg.value() == "-std=c++0x");
            assert_eq!(uses_flag, identifier.name() == "exampleThengaBuild.3");
        }

        let first = &bld.targets()[0];
        assert_eq!(first.sources.len(), 1);
        assert_eq!(first.kind, TargetKind::Executable);
        assert_eq!(first.sources[0].args[0].value(), "-c");

        let last = &bld.targets()[5];
        assert_eq!(
            last.dependencies,
            vec![TargetIdentifier::from("exampleThengaBuild.4")]
        );
        assert_ne!(
            bld.targets()[1].sources[0].byproduct,
            bld.targets()[2].sources[0].byproduct
        );

        Ok(())
    }
}
