//! The baseline compiler and linker settings of a project

use serde::Deserialize;

use crate::project_model::compiler::{CppCompiler, LanguageLevel, StdLib};

/// [`CompilerAttribute`] - Configuration properties for
/// targeting one of the supported compilers, and the settings that every target
/// of the project starts with
///
/// * `cpp_compiler` - One of the available compilers within Thenga.
/// Possible values are: `clang`, `gcc` and `msvc`
///
/// * `driver_path` - The command line name, or the path, of the compiler driver. Useful
/// when a concrete version of the compiler is required (`g++-13`, `clang++-17`)
///
/// * `archiver` - The program that bundles the object files into a static library.
/// `ar` for GCC and Clang, `lib` for MSVC when not specified
///
/// * `cpp_standard` - An string defining the version of the ISO
/// C++ standard that should be used on the compilation process. When absent, no
/// standard switch is passed and the default one of the compiler is used
///
/// * `std_lib` - The concrete C++ standard library (vendor specific)
/// to link the built code against. Only honored by Clang
///
/// * `cc_flags` - Extra arguments passed to the compiler for every translation unit
///
/// * `libs` - Libraries, by name, that every target is linked against
///
/// * `include_dirs` - Directories searched for headers. Defaults to `include`
///
/// * `lib_dirs` - Directories searched for libraries by the linker
///
/// ### Tests
///
/// ```rust
/// use thenga::config_file::compiler::CompilerAttribute;
/// use thenga::project_model::compiler::{CppCompiler, LanguageLevel, StdLib};
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[compiler]
///     cpp_compiler = 'clang'
///     driver_path = 'clang++-17'
///     cpp_standard = '17'
///     std_lib = 'libc++'
///     cc_flags = ['-Wall', '-Wextra']
///     libs = ['m']
///     lib_dirs = ['vendor/lib']
/// "#;
///
/// let config: CompilerAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the Thenga toml file");
///
/// assert_eq!(config.cpp_compiler, CppCompiler::CLANG);
/// assert_eq!(config.driver_path, Some("clang++-17"));
/// assert_eq!(config.archiver, None);
/// assert_eq!(config.cpp_standard, Some(LanguageLevel::CPP17));
/// assert_eq!(config.std_lib, Some(StdLib::LIBCPP));
/// assert_eq!(config.cc_flags, Some(vec!["-Wall", "-Wextra"]));
/// assert_eq!(config.libs, Some(vec!["m"]));
/// assert_eq!(config.include_dirs, None);
/// assert_eq!(config.lib_dirs, Some(vec!["vendor/lib"]));
/// ```
///
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
/// That commented tables aren't the real TOML, they are just there
/// for testing and exemplification purposes of the inner attributes
/// of the configuration file.
///
/// For a test over a real example, please look at the
/// [`thenga::config_file::ThengaConfigFile`] doc-test
#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct CompilerAttribute<'a> {
    pub cpp_compiler: CppCompiler,
    #[serde(borrow)]
    pub driver_path: Option<&'a str>,
    #[serde(borrow)]
    pub archiver: Option<&'a str>,
    pub cpp_standard: Option<LanguageLevel>,
    pub std_lib: Option<StdLib>,
    #[serde(borrow)]
    pub cc_flags: Option<Vec<&'a str>>,
    #[serde(borrow)]
    pub libs: Option<Vec<&'a str>>,
    #[serde(borrow)]
    pub include_dirs: Option<Vec<&'a str>>,
    #[serde(borrow)]
    pub lib_dirs: Option<Vec<&'a str>>,
}
