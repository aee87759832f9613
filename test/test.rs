use clap::Parser;
use color_eyre::Result;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;
use thenga::cli::input::CliArgs;

fn compiler_available(driver: &str) -> bool {
    Command::new(driver)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[test]
fn test_new_projects_and_plan() -> Result<()> {
    let temp = tempdir()?;

    assert!(thenga::worker::run_thenga(
        &CliArgs::parse_from(["", "new", "clang_example", "--compiler", "clang"]),
        Path::new(temp.path())
    )
    .is_ok());

    assert!(thenga::worker::run_thenga(
        &CliArgs::parse_from(["", "new", "gcc_example", "--compiler", "gcc"]),
        Path::new(temp.path())
    )
    .is_ok());

    assert!(thenga::worker::run_thenga(
        &CliArgs::parse_from(["", "new", "msvc_example", "--compiler", "msvc"]),
        Path::new(temp.path())
    )
    .is_ok());

    // An already populated directory is never overwritten
    assert!(thenga::worker::run_thenga(
        &CliArgs::parse_from(["", "new", "gcc_example", "--compiler", "gcc"]),
        Path::new(temp.path())
    )
    .is_err());

    assert!(thenga::worker::run_thenga(
        &CliArgs::parse_from(["", "-vv", "plan"]),
        Path::new(temp.path())
    )
    .is_ok());

    // Planning generates the compilation database, but never runs any command
    for project in ["clang_example", "gcc_example", "msvc_example"] {
        let project_root = temp.path().join(project);
        assert!(project_root.join("compile_commands.json").exists());
        assert!(!project_root.join("out").exists());
    }

    Ok(temp.close()?)
}

#[test]
fn test_missing_config_files() -> Result<()> {
    let temp = tempdir()?;

    assert!(thenga::worker::run_thenga(
        &CliArgs::parse_from(["", "build"]),
        Path::new(temp.path())
    )
    .is_err());

    Ok(temp.close()?)
}

#[test]
fn test_build_and_run_the_gcc_examples() -> Result<()> {
    if !compiler_available("g++") || !compiler_available("ar") || cfg!(target_os = "windows") {
        return Ok(());
    }

    let temp = tempdir()?;
    thenga::worker::run_thenga(
        &CliArgs::parse_from(["", "new", "gcc_example", "--compiler", "gcc"]),
        Path::new(temp.path()),
    )?;

    let project_root = temp.path().join("gcc_example");
    thenga::worker::run_thenga(&CliArgs::parse_from(["", "run"]), &project_root)?;

    let artifacts = project_root.join("out").join("gcc");
    for name in [
        "exampleThengaBuild.1",
        "exampleThengaBuild.2",
        "exampleThengaBuild.2.1",
        "exampleThengaBuild.3",
        "exampleThengaBuild.5",
    ] {
        assert!(artifacts.join(name).is_file(), "{name} was not linked");
    }
    assert!(artifacts.join("libexampleThengaBuild.4.a").is_file());
    assert!(artifacts
        .join("obj_files")
        .join("exampleThengaBuild.2.1")
        .join("othersrc")
        .join("ex2.cpp.o")
        .is_file());

    let report = std::fs::read_to_string(
        project_root
            .join("out")
            .join("thenga")
            .join("build_report.json"),
    )?;
    let report: serde_json::Value = serde_json::from_str(&report)?;
    let targets = report["targets"]
        .as_array()
        .expect("the report lists the targets");
    assert_eq!(targets.len(), 6);
    assert!(targets.iter().all(|target| target["status"] == "Success"));

    Ok(temp.close()?)
}

#[test]
fn test_linking_without_the_static_lib_fails() -> Result<()> {
    if !compiler_available("g++") || cfg!(target_os = "windows") {
        return Ok(());
    }

    let temp = tempdir()?;
    thenga::worker::run_thenga(
        &CliArgs::parse_from(["", "new", "gcc_example", "--compiler", "gcc"]),
        Path::new(temp.path()),
    )?;

    let project_root = temp.path().join("gcc_example");
    let result = thenga::worker::run_thenga(
        &CliArgs::parse_from(["", "--targets", "exampleThengaBuild.5", "build"]),
        &project_root,
    );
    assert!(result.is_err());
    assert!(!project_root
        .join("out")
        .join("gcc")
        .join("exampleThengaBuild.5")
        .exists());

    Ok(temp.close()?)
}
