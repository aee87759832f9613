use crate::domain::commands::arguments::Argument;
use crate::domain::target::Target;
use crate::utils;
use crate::utils::constants::{error_messages, COMPILATION_DATABASE};
use color_eyre::eyre::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub type CompileCommands<'a> = Vec<CompileCommand<'a>>;

/// Generates the `compile_commands.json` file on the project root, that acts as a compilation
/// database for some static analysis external tools, like `clang-tidy`, and populates it with
/// the generated commands for the translation units of every target
pub fn map_generated_commands_to_compilation_db<'a, 'b, I>(
    project_root: &Path,
    targets: I,
) -> Result<()>
where
    'a: 'b,
    I: IntoIterator<Item = &'b Target<'a>>,
{
    log::debug!("Generating the compilation database...");

    let compilation_db_entries: CompileCommands = targets
        .into_iter()
        .flat_map(|target| {
            target.sources.iter().map(move |scl| CompileCommand {
                directory: project_root,
                file: scl.path(),
                arguments: std::iter::once(Argument::from(target.driver.clone()))
                    .chain(scl.args.iter().cloned())
                    .collect(),
            })
        })
        .collect();

    utils::fs::save_file(
        &project_root.join(COMPILATION_DATABASE),
        &compilation_db_entries,
    )
    .with_context(|| error_messages::FAILURE_SAVING_COMPILATION_DB)
}

/// Data model for serialize the data that will be outputted
/// to the `compile_commands.json` compilation database file.
///
/// `directory` is the working directory of the command, which is always the project root
#[derive(Serialize, Debug)]
pub struct CompileCommand<'a> {
    pub directory: &'a Path,
    pub file: PathBuf,
    pub arguments: Vec<Argument<'a>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::builder::Builder;
    use crate::domain::env::BuildEnv;
    use crate::project_model::compiler::CppCompiler;
    use tempfile::tempdir;

    #[test]
    fn test_entries_run_from_the_project_root() -> Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        let mut bld = Builder::new(root, &root.join("out"));
        let env = BuildEnv::new(CppCompiler::GCC);
        bld.build_executable(&env, "exampleThengaBuild.2.1", &["othersrc/ex2.cpp"])?;

        map_generated_commands_to_compilation_db(root, bld.targets().values())?;

        let raw = std::fs::read_to_string(root.join(COMPILATION_DATABASE))?;
        let db: serde_json::Value = serde_json::from_str(&raw)?;
        assert_eq!(db[0]["directory"], root.to_string_lossy().into_owned());
        assert_eq!(
            db[0]["file"],
            root.join("othersrc").join("ex2.cpp").to_string_lossy().into_owned()
        );

        Ok(())
    }

    #[test]
    fn test_one_entry_per_translation_unit() -> Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        let mut bld = Builder::new(root, &root.join("out"));
        let env = BuildEnv::new(CppCompiler::CLANG);
        bld.build_executable(&env, "exampleThengaBuild.1", &["ex1.cpp"])?;
        bld.build_static_lib(&env, "exampleThengaBuild.4", &["ex4_staticlib.cpp"])?;

        map_generated_commands_to_compilation_db(root, bld.targets().values())?;

        let raw = std::fs::read_to_string(root.join(COMPILATION_DATABASE))?;
        let db: serde_json::Value = serde_json::from_str(&raw)?;
        let entries = db.as_array().expect("the database is a JSON array");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["directory"], root.to_string_lossy().into_owned());
        assert_eq!(entries[0]["file"], root.join("ex1.cpp").to_string_lossy().into_owned());
        assert_eq!(entries[0]["arguments"][0], "clang++");
        assert_eq!(
            entries[1]["file"],
            root.join("ex4_staticlib.cpp").to_string_lossy().into_owned()
        );

        Ok(())
    }
}
