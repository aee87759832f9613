//! Constant value definitions to use across the whole program

pub const THENGA: &str = "thenga";

/// The names of the `Thenga` specific directories, not their paths
pub mod dir_names {
    pub const DEFAULT_OUTPUT_DIR: &str = "out";
    pub const DEFAULT_INCLUDE_DIR: &str = "include";
    pub const OBJECT_FILES: &str = "obj_files";
}

pub mod error_messages {
    pub const READ_CFG_FILE: &str = "Could not read the configuration file";
    pub const PARSE_CFG_FILE: &str = "Could not parse the configuration file";
    pub const NO_CFG_FILES_FOUND: &str = "No configuration files found for the project";
    pub const FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH: &str =
        "An unexpected error happened while resolving the absolute path to the project root";
    pub const FAILURE_GENERATING_COMMANDS: &str =
        "Failed to generate the commands for the project";
    pub const FAILED_BUILD_FOR_CFG_FILE: &str = "Failed to build the project for the config file";
    pub const PROJECT_MODEL_MAPPING: &str = "Error building the project model";
    pub const FAILURE_SAVING_COMPILATION_DB: &str = "Error saving the compilation database";
    pub const FAILURE_SAVING_BUILD_REPORT: &str = "Error saving the build report";
    pub const TARGET_WITHOUT_SOURCES: &str = "No source files were found for the target";
    pub const DUPLICATED_TARGET: &str = "A target with the same name was already declared";
    pub const INVALID_TARGET_NAME: &str =
        "Target names must start with an alphanumeric character or '_', and only contain \
        alphanumerics, '_', '.', '+' or '-'";
    pub const ILL_FORMED_SOURCE_PATH: &str = "Found an ill-formed path for a source file";
    pub const STATIC_LIB_DECLARED_AFTER_ITS_USAGE: &str =
        "A static library must be declared before the targets that link against it";
    pub const LINKED_TARGET_IS_NOT_A_STATIC_LIB: &str =
        "Only static library targets can be linked against by their name";
    pub const MISSING_STATIC_LIB_ARTIFACT: &str =
        "The static library to link against was not built";
    pub const ARTIFACT_PATH_COLLISION: &str =
        "The target would be written where another target or the object files already are";
    pub const UNKNOWN_TARGET_FROM_CLI: &str =
        "The target requested from the command line is not declared on the configuration file";
}

pub const CONFIG_FILE_NAME: &str = "thenga";
pub const CONFIG_FILE_EXT: &str = "toml";

pub const BINARY_EXTENSION: &str = if cfg!(target_os = "windows") {
    "exe"
} else {
    ""
};

pub const BUILD_REPORT_FILENAME: &str = "build_report.json";
pub const COMPILATION_DATABASE: &str = "compile_commands.json";

pub const TARGET_NAME_PATTERN: &str = r"^[A-Za-z0-9_][A-Za-z0-9_.+\-]*$";

#[cfg(test)]
pub const CONFIG_FILE_MOCK: &str = r#"
[project]
name = "exampleThengaBuild"
authors = ["thenga@example.org"]
compilation_db = true

[compiler]
cpp_compiler = "gcc"
cc_flags = [ "-Wall" ]

[build]
output_dir = "build"

[[targets]]
name = "exampleThengaBuild.1"
sources = [ "ex1.cpp" ]

[[targets]]
name = "exampleThengaBuild.3"
sources = [ "ex3_thread.cpp" ]
cc_flags = [ "-std=c++0x" ]
libs = [ "pthread" ]

[[targets]]
name = "exampleThengaBuild.4"
kind = "static_lib"
sources = [ "ex4_staticlib.cpp" ]

[[targets]]
name = "exampleThengaBuild.5"
sources = [ "ex5_usestaticlib.cpp" ]
libs = [ "exampleThengaBuild.4" ]
"#;
