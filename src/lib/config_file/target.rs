//! Type for holds the Targets build details

use serde::Deserialize;

use crate::domain::target::TargetKind;

/// [`TargetAttribute`] - The type for holding the build details of every
/// user defined target. Targets are declared as an array of tables, and they
/// are built in the same order that they are declared
/// * `name` - The name of the target, and of the final byproduct. Other targets
/// link against a static library by listing this name on their `libs`
/// * `kind` - Determines which type of byproduct will be generated (executable, static library)
/// * `sources` - The sources to be included in the compilation of this target. Glob patterns
/// are accepted
/// * `cc_flags` - Compiler flags appended, only for this target, to the ones of the project
/// * `libs` - Libraries appended, only for this target, to the ones of the project
///
/// ### Tests
///
/// ```rust
/// use thenga::config_file::target::TargetAttribute;
/// use thenga::domain::target::TargetKind;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[[targets]]
///     name = 'exampleThengaBuild.5'
///     kind = 'executable'
///     sources = [ 'ex5_usestaticlib.cpp' ]
///     libs = [ 'exampleThengaBuild.4' ]
/// "#;
///
/// let config: TargetAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the Thenga toml file");
///
/// assert_eq!(config.name, "exampleThengaBuild.5");
/// assert_eq!(config.kind, Some(TargetKind::Executable));
/// assert_eq!(config.sources, vec!["ex5_usestaticlib.cpp"]);
/// assert_eq!(config.cc_flags, None);
/// assert_eq!(config.libs, Some(vec!["exampleThengaBuild.4"]));
/// ```
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
/// That commented tables aren't the real TOML, they are just there
/// for testing and exemplification purposes of the inner attributes
/// of the configuration file.
///
/// For a test over a real example, please look at the
/// [`thenga::config_file::ThengaConfigFile`] doc-test
#[derive(Debug, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TargetAttribute<'a> {
    pub name: &'a str,
    pub kind: Option<TargetKind>,
    #[serde(borrow)]
    pub sources: Vec<&'a str>,
    #[serde(borrow)]
    pub cc_flags: Option<Vec<&'a str>>,
    #[serde(borrow)]
    pub libs: Option<Vec<&'a str>>,
}
