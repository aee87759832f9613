use crate::cli::input::CliArgs;
use crate::compiler::builder::validate_target_name;
use crate::domain::commands::arguments::Argument;
use crate::domain::target::{TargetIdentifier, TargetKind};
use crate::utils::constants::{dir_names, error_messages, CONFIG_FILE_EXT, CONFIG_FILE_NAME};
use crate::{
    config_file::{
        build::BuildAttribute, compiler::CompilerAttribute, project::ProjectAttribute,
        target::TargetAttribute, ThengaConfigFile,
    },
    project_model::{
        build::BuildModel, compiler::CompilerModel, project::ProjectModel, target::TargetModel,
        ThengaModel,
    },
};
use color_eyre::eyre::{bail, Context};
use color_eyre::Result;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Details about a found configuration file on the project
///
/// This is just a configuration file with a valid name found
/// at a valid path in some subdirectory
#[derive(Debug)]
pub struct ConfigFile {
    pub dir_entry: DirEntry,
    pub path: PathBuf,
}

impl ConfigFile {
    /// The directory that holds the configuration file. The relative paths declared on it
    /// are resolved against this one
    pub fn project_root(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }
}

/// Checks for the existence of the `thenga<any>.toml` configuration files
/// present in the project root, or one level below it, and returns a
/// collection of the ones found.
///
/// *base_path* - A parameter for receive an input via command line
/// parameter to indicate where the configuration files lives in
/// the client's project. Defaults to `.`
///
/// *filename_match* - When present, only the files whose name contains it are returned
///
/// This function fails if there's no configuration file
/// (or isn't present in any directory of the project)
pub fn find_config_files(
    base_path: &Path,
    filename_match: &Option<String>,
) -> Result<Vec<ConfigFile>> {
    log::debug!("Searching for Thenga configuration files...");
    let mut files = vec![];

    for e in WalkDir::new(base_path)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let Some(filename) = e.file_name().to_str() else {
            continue;
        };
        let file_match = filename_match.as_deref().unwrap_or(filename);

        if e.file_type().is_file()
            && filename.starts_with(CONFIG_FILE_NAME)
            && filename.ends_with(&format!(".{CONFIG_FILE_EXT}"))
            && filename.contains(file_match)
        {
            files.push(ConfigFile {
                path: e.path().to_path_buf(),
                dir_entry: e,
            })
        }
    }

    if files.is_empty() {
        bail!("{}: {base_path:?}", error_messages::NO_CFG_FILES_FOUND)
    } else {
        Ok(files)
    }
}

/// Validates the parsed configuration file, and maps it into a [`ThengaModel`]
///
/// *project_root* - the absolute path of the directory that holds the configuration file
pub fn build_model<'a>(
    config: ThengaConfigFile<'a>,
    cli_args: &'a CliArgs,
    project_root: &Path,
) -> Result<ThengaModel<'a>> {
    let project = assemble_project_model(config.project, project_root);
    let compiler = assemble_compiler_model(config.compiler, cli_args);
    let build = assemble_build_model(config.build, project_root);
    let targets = assemble_targets_model(config.targets)?;

    Ok(ThengaModel {
        project,
        compiler,
        build,
        targets,
    })
}

fn assemble_project_model<'a>(config: ProjectAttribute<'a>, project_root: &Path) -> ProjectModel<'a> {
    ProjectModel {
        name: Cow::Borrowed(config.name),
        authors: config
            .authors
            .map(|authors| authors.into_iter().map(Cow::Borrowed).collect())
            .unwrap_or_default(),
        compilation_db: config.compilation_db.unwrap_or_default(),
        project_root: project_root.to_path_buf(),
    }
}

fn assemble_compiler_model<'a>(
    config: CompilerAttribute<'a>,
    cli_args: &'a CliArgs,
) -> CompilerModel<'a> {
    let cc_flags = config
        .cc_flags
        .map(|args| args.into_iter().map(Argument::from).collect())
        .unwrap_or_default();

    let libs = config
        .libs
        .map(|libs| libs.into_iter().map(Cow::Borrowed).collect())
        .unwrap_or_default();

    let include_dirs = config
        .include_dirs
        .map(|dirs| dirs.into_iter().map(PathBuf::from).collect())
        .unwrap_or_else(|| vec![PathBuf::from(dir_names::DEFAULT_INCLUDE_DIR)]);

    let lib_dirs = config
        .lib_dirs
        .map(|dirs| dirs.into_iter().map(PathBuf::from).collect())
        .unwrap_or_default();

    CompilerModel {
        cpp_compiler: config.cpp_compiler,
        driver_path: cli_args
            .driver_path
            .as_deref()
            .or(config.driver_path)
            .map(Cow::Borrowed)
            .unwrap_or_default(),
        archiver: config.archiver.map(Cow::Borrowed).unwrap_or_default(),
        cpp_standard: config.cpp_standard,
        std_lib: config.std_lib,
        cc_flags,
        libs,
        include_dirs,
        lib_dirs,
    }
}

fn assemble_build_model(config: Option<BuildAttribute>, project_root: &Path) -> BuildModel {
    let output_dir = config
        .as_ref()
        .and_then(|build| build.output_dir)
        .map(|out_dir| out_dir.strip_prefix("./").unwrap_or(out_dir))
        .unwrap_or(dir_names::DEFAULT_OUTPUT_DIR);

    BuildModel {
        output_dir: project_root.join(output_dir),
    }
}

fn assemble_targets_model<'a>(
    targets: Vec<TargetAttribute<'a>>,
) -> Result<IndexMap<TargetIdentifier<'a>, TargetModel<'a>>> {
    // Every declared target, with its position and its kind, so a library can be checked
    // against the targets declared after the one that uses it
    let mut declared: IndexMap<&str, TargetKind> = IndexMap::with_capacity(targets.len());
    for target in &targets {
        validate_target_name(target.name)
            .with_context(|| error_messages::PROJECT_MODEL_MAPPING)?;
        if declared
            .insert(target.name, target.kind.unwrap_or_default())
            .is_some()
        {
            bail!("{}: {}", error_messages::DUPLICATED_TARGET, target.name);
        }
    }

    let mut models = IndexMap::with_capacity(targets.len());
    for (position, target) in targets.into_iter().enumerate() {
        if target.sources.is_empty() {
            bail!("{}: {}", error_messages::TARGET_WITHOUT_SOURCES, target.name);
        }

        let libs = target.libs.unwrap_or_default();
        for lib in &libs {
            helpers::check_linked_target(&declared, position, target.name, lib)?;
        }

        let model = TargetModel {
            kind: target.kind.unwrap_or_default(),
            sources: target.sources.into_iter().map(Cow::Borrowed).collect(),
            cc_flags: target
                .cc_flags
                .map(|args| args.into_iter().map(Argument::from).collect())
                .unwrap_or_default(),
            libs: libs.into_iter().map(Cow::Borrowed).collect(),
            enabled_for_current_program_iteration: true,
        };

        models.insert(TargetIdentifier::from(target.name), model);
    }

    Ok(models)
}

mod helpers {
    use super::*;

    /// A library that names a declared target must name a static library that was
    /// declared before `user`. Any other name is a system library
    pub(crate) fn check_linked_target(
        declared: &IndexMap<&str, TargetKind>,
        user_position: usize,
        user: &str,
        lib: &str,
    ) -> Result<()> {
        let Some((lib_position, _, kind)) = declared.get_full(lib) else {
            log::trace!("Library {lib} of the target {user} is treated as a system library");
            return Ok(());
        };

        if kind.ne(&TargetKind::StaticLib) {
            bail!(
                "{}. The target {user} links against {lib}, which is an {kind}",
                error_messages::LINKED_TARGET_IS_NOT_A_STATIC_LIB
            );
        }
        if lib_position >= user_position {
            bail!(
                "{}. The target {user} links against {lib}, declared after it",
                error_messages::STATIC_LIB_DECLARED_AFTER_ITS_USAGE
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config_file;
    use crate::project_model::compiler::CppCompiler;
    use crate::utils;
    use clap::Parser;
    use tempfile::tempdir;

    fn model_from(cfg: &str) -> Result<ThengaModel<'_>> {
        let config = config_file::thenga_cfg_from_file(cfg)?;
        let cli_args: &'static CliArgs = Box::leak(Box::new(CliArgs::parse_from(["", "plan"])));
        build_model(config, cli_args, Path::new("/project"))
    }

    #[test]
    fn test_project_model_with_minimal_config() -> Result<()> {
        const CONFIG_FILE_MOCK: &str = r#"
            [project]
            name = 'exampleThengaBuild'

            [compiler]
            cpp_compiler = 'clang'
        "#;

        let model = model_from(CONFIG_FILE_MOCK)?;

        let expected = ThengaModel {
            project: ProjectModel {
                name: "exampleThengaBuild".into(),
                authors: vec![],
                compilation_db: false,
                project_root: PathBuf::from("/project"),
            },
            compiler: CompilerModel {
                cpp_compiler: CppCompiler::CLANG,
                include_dirs: vec![PathBuf::from("include")],
                ..Default::default()
            },
            build: BuildModel {
                output_dir: Path::new("/project").join("out"),
            },
            targets: IndexMap::new(),
        };

        assert_eq!(model, expected);

        Ok(())
    }

    #[test]
    fn test_project_model_with_full_config() -> Result<()> {
        let model = model_from(utils::constants::CONFIG_FILE_MOCK)?;

        assert!(model.project.compilation_db);
        assert_eq!(model.compiler.cpp_compiler, CppCompiler::GCC);
        assert_eq!(model.compiler.cc_flags, vec![Argument::from("-Wall")]);
        assert_eq!(model.build.output_dir, Path::new("/project").join("build"));

        let names: Vec<&str> = model.targets.keys().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec![
                "exampleThengaBuild.1",
                "exampleThengaBuild.3",
                "exampleThengaBuild.4",
                "exampleThengaBuild.5"
            ]
        );

        let threaded = &model.targets[1];
        assert_eq!(threaded.kind, TargetKind::Executable);
        assert_eq!(threaded.cc_flags, vec![Argument::from("-std=c++0x")]);
        assert_eq!(threaded.libs, vec!["pthread"]);

        assert_eq!(model.targets[2].kind, TargetKind::StaticLib);
        assert_eq!(model.targets[3].libs, vec!["exampleThengaBuild.4"]);

        Ok(())
    }

    #[test]
    fn test_driver_path_from_cli_wins() -> Result<()> {
        const CONFIG_FILE_MOCK: &str = r#"
            [project]
            name = 'driver'

            [compiler]
            cpp_compiler = 'gcc'
            driver_path = 'g++-12'
        "#;

        let config = config_file::thenga_cfg_from_file(CONFIG_FILE_MOCK)?;
        let cli_args = CliArgs::parse_from(["", "--driver-path", "g++-13", "plan"]);
        let model = build_model(config, &cli_args, Path::new("/project"))?;
        assert_eq!(model.compiler.driver(), "g++-13");

        let config = config_file::thenga_cfg_from_file(CONFIG_FILE_MOCK)?;
        let cli_args = CliArgs::parse_from(["", "plan"]);
        let model = build_model(config, &cli_args, Path::new("/project"))?;
        assert_eq!(model.compiler.driver(), "g++-12");

        Ok(())
    }

    #[test]
    fn test_static_lib_must_precede_its_users() {
        const CONFIG_FILE_MOCK: &str = r#"
            [project]
            name = 'forward'

            [compiler]
            cpp_compiler = 'gcc'

            [[targets]]
            name = 'app'
            sources = [ 'main.cpp' ]
            libs = [ 'core' ]

            [[targets]]
            name = 'core'
            kind = 'static_lib'
            sources = [ 'core.cpp' ]
        "#;

        assert!(model_from(CONFIG_FILE_MOCK).is_err());
    }

    #[test]
    fn test_only_static_libs_can_be_linked_by_name() {
        const CONFIG_FILE_MOCK: &str = r#"
            [project]
            name = 'not_a_lib'

            [compiler]
            cpp_compiler = 'gcc'

            [[targets]]
            name = 'tool'
            sources = [ 'tool.cpp' ]

            [[targets]]
            name = 'app'
            sources = [ 'main.cpp' ]
            libs = [ 'tool' ]
        "#;

        assert!(model_from(CONFIG_FILE_MOCK).is_err());
    }

    #[test]
    fn test_ill_formed_targets_are_rejected() {
        const DUPLICATED: &str = r#"
            [project]
            name = 'dup'

            [compiler]
            cpp_compiler = 'gcc'

            [[targets]]
            name = 'app'
            sources = [ 'a.cpp' ]

            [[targets]]
            name = 'app'
            sources = [ 'b.cpp' ]
        "#;
        const NO_SOURCES: &str = r#"
            [project]
            name = 'empty'

            [compiler]
            cpp_compiler = 'gcc'

            [[targets]]
            name = 'app'
            sources = [ ]
        "#;
        const BAD_NAME: &str = r#"
            [project]
            name = 'bad'

            [compiler]
            cpp_compiler = 'gcc'

            [[targets]]
            name = 'my app'
            sources = [ 'main.cpp' ]
        "#;

        assert!(model_from(DUPLICATED).is_err());
        assert!(model_from(NO_SOURCES).is_err());
        assert!(model_from(BAD_NAME).is_err());
    }

    #[test]
    fn test_find_config_files() -> Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        std::fs::create_dir_all(root.join("nested"))?;
        std::fs::write(root.join("thenga.toml"), "")?;
        std::fs::write(root.join("nested").join("thenga_gcc.toml"), "")?;
        std::fs::write(root.join("Cargo.toml"), "")?;
        std::fs::write(root.join("thenga.json"), "")?;

        let found = find_config_files(root, &None)?;
        assert_eq!(found.len(), 2);
        assert!(found.iter().any(|cfg| cfg.project_root() == root.join("nested")));

        let filtered = find_config_files(root, &Some(String::from("gcc")))?;
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].path, root.join("nested").join("thenga_gcc.toml"));

        assert!(find_config_files(&root.join("nested"), &Some(String::from("msvc"))).is_err());

        Ok(())
    }
}
