pub mod resources;

use crate::project_model::compiler::CppCompiler;
use crate::utils;
use crate::utils::constants::dir_names;
use color_eyre::eyre::{bail, Context};
use color_eyre::{Report, Result};
use std::path::Path;
use std::process::Command;

/// Generates a new C++ project with the `exampleThengaBuild` targets: executables, a
/// static library and an executable that links against it.
///
/// Base template for the project files and folders:
///    - ./include
///        - ex2.h
///        - ex4_staticlib.h
///    - ./othersrc
///        - ex2.cpp
///    - ex1.cpp
///    - ex2.cpp
///    - ex3_thread.cpp
///    - ex4_staticlib.cpp
///    - ex5_usestaticlib.cpp
///    - thenga_<compiler>.toml
pub fn create_templated_project(
    base_path: &Path,
    project_name: &str,
    git: bool,
    compiler: CppCompiler,
) -> std::result::Result<(), Report> {
    let project_root = base_path.join(project_name);

    let path_include = project_root.join(dir_names::DEFAULT_INCLUDE_DIR);
    let path_othersrc = project_root.join("othersrc");

    check_project_root_available(&project_root)?;

    utils::fs::create_directory(&project_root)?;
    utils::fs::create_directory(&path_include)?;
    utils::fs::create_directory(&path_othersrc)?;

    utils::fs::create_file(&path_include, "ex2.h", resources::EX2_HEADER.as_bytes())?;
    utils::fs::create_file(
        &path_include,
        "ex4_staticlib.h",
        resources::EX4_STATICLIB_HEADER.as_bytes(),
    )?;
    utils::fs::create_file(&path_othersrc, "ex2.cpp", resources::EX2_OTHERSRC.as_bytes())?;

    utils::fs::create_file(&project_root, "ex1.cpp", resources::EX1.as_bytes())?;
    utils::fs::create_file(&project_root, "ex2.cpp", resources::EX2.as_bytes())?;
    utils::fs::create_file(&project_root, "ex3_thread.cpp", resources::EX3_THREAD.as_bytes())?;
    utils::fs::create_file(
        &project_root,
        "ex4_staticlib.cpp",
        resources::EX4_STATICLIB.as_bytes(),
    )?;
    utils::fs::create_file(
        &project_root,
        "ex5_usestaticlib.cpp",
        resources::EX5_USESTATICLIB.as_bytes(),
    )?;

    let template = match compiler {
        CppCompiler::MSVC => resources::CONFIG_FILE_MSVC.to_string(),
        CppCompiler::CLANG | CppCompiler::GCC => {
            resources::CONFIG_FILE.replace("<compiler>", compiler.as_ref())
        }
    }
    .replace("<project_name>", project_name);

    utils::fs::create_file(
        &project_root,
        &format!(
            "{}_{}.{}",
            utils::constants::CONFIG_FILE_NAME,
            compiler.as_ref(),
            utils::constants::CONFIG_FILE_EXT
        ),
        template.as_bytes(),
    )?;

    if git {
        initialize_git_repository(&project_root)?
    }

    log::info!("Created the project {project_name} at {project_root:?}");
    Ok(())
}

fn check_project_root_available(project_root: &Path) -> Result<()> {
    if !project_root.exists() {
        // if it doesn't exist, there is nothing that would be overwritten
        return Ok(());
    }

    if !is_empty_directory(project_root)? {
        bail!("Directory {project_root:?} is not empty")
    }

    Ok(())
}

fn is_empty_directory(path: &Path) -> Result<bool> {
    if !path.is_dir() {
        return Ok(false);
    }

    let is_empty = path
        .read_dir()
        .with_context(|| format!("Directory {path:?} is not readable"))?
        .next()
        .is_none();

    Ok(is_empty)
}

fn initialize_git_repository(project_root: &Path) -> Result<()> {
    let exit_status = Command::new("git")
        .current_dir(project_root)
        .arg("init")
        .spawn()
        .with_context(|| "Could not run \"git init\"")?
        .wait()
        .with_context(|| "An error occurred while waiting for \"git init\" to finish")?;

    match exit_status.code() {
        Some(0) => {}
        None => bail!("Process \"git init\" was terminated by external signal"),
        Some(error_code) => bail!("Process \"git init\" returned {}", error_code),
    };

    Ok(())
}
