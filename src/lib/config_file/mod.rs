//! root file for the crate where the datastructures that holds the TOML
//! parsed data lives.
pub mod build;
pub mod compiler;
pub mod project;
pub mod target;

use std::fmt::Debug;

use serde::Deserialize;

use self::{
    build::BuildAttribute, compiler::CompilerAttribute, project::ProjectAttribute,
    target::TargetAttribute,
};

/// ```rust
/// use thenga::config_file::{self, ThengaConfigFile};
/// use thenga::domain::target::TargetKind;
/// use thenga::project_model::compiler::CppCompiler;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     [project]
///     name = 'exampleThengaBuild'
///     authors = ['thenga@example.org']
///
///     [compiler]
///     cpp_compiler = 'gcc'
///
///     [[targets]]
///     name = 'exampleThengaBuild.3'
///     sources = [ 'ex3_thread.cpp' ]
///     cc_flags = [ '-std=c++0x' ]
///     libs = [ 'pthread' ]
///
///     [[targets]]
///     name = 'exampleThengaBuild.4'
///     kind = 'static_lib'
///     sources = [ 'ex4_staticlib.cpp' ]
/// "#;
///
/// let config: ThengaConfigFile = config_file::thenga_cfg_from_file(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the Thenga toml file");
///
/// assert_eq!(config.compiler.cpp_compiler, CppCompiler::GCC);
/// assert!(config.build.is_none());
///
/// let targets = &config.targets;
/// assert_eq!(targets.len(), 2);
///
/// let threaded = &targets[0];
/// assert_eq!(threaded.name, "exampleThengaBuild.3");
/// assert_eq!(threaded.sources, vec!["ex3_thread.cpp"]);
/// assert_eq!(threaded.cc_flags, Some(vec!["-std=c++0x"]));
/// assert_eq!(threaded.libs, Some(vec!["pthread"]));
/// assert!(threaded.kind.unwrap_or_default().eq(&TargetKind::Executable));
///
/// let static_lib = &targets[1];
/// assert_eq!(static_lib.kind, Some(TargetKind::StaticLib));
/// assert!(static_lib.libs.is_none());
/// ```
/// The [`ThengaConfigFile`] is the type that holds
/// the whole hierarchy of Thenga config file attributes
/// and properties
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct ThengaConfigFile<'a> {
    #[serde(borrow)]
    pub project: ProjectAttribute<'a>,
    #[serde(borrow)]
    pub compiler: CompilerAttribute<'a>,
    #[serde(borrow)]
    pub build: Option<BuildAttribute<'a>>,
    #[serde(borrow, default)]
    pub targets: Vec<TargetAttribute<'a>>,
}

pub fn thenga_cfg_from_file(cfg: &'_ str) -> Result<ThengaConfigFile<'_>, toml::de::Error> {
    <ThengaConfigFile>::deserialize(&mut toml::Deserializer::new(cfg))
}
