//! file that contains the configuration options available
//! within Thenga to configure where the build process dumps its products
use serde::*;

/// [`BuildAttribute`] - Stores build process specific configuration
///
/// * `output_dir` - An string representing a relative to the root path
/// where the compiler should dump the files generated in the build process.
/// If isn't specified, `Thenga` will generate an `./out/...` folder
/// by default
///
/// ```rust
/// use thenga::config_file::build::BuildAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[build]
///     output_dir = 'build'
///"#;
///
/// let config: BuildAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the Thenga toml file");
///
/// assert_eq!(config.output_dir, Some("build"));
/// ```
#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BuildAttribute<'a> {
    #[serde(borrow)]
    pub output_dir: Option<&'a str>,
}
