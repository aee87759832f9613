//! The [`Builder`] turns a request to build an executable or a static library, made with a
//! concrete [`BuildEnv`], into a [`Target`] that holds every command line needed to produce it.
//!
//! ```rust
//! use std::path::Path;
//! use thenga::compiler::builder::Builder;
//! use thenga::domain::env::BuildEnv;
//! use thenga::domain::target::TargetKind;
//! use thenga::project_model::compiler::CppCompiler;
//!
//! let ola = BuildEnv::new(CppCompiler::GCC);
//! let mut bld = Builder::new(Path::new("/project"), Path::new("/project/out"));
//!
//! let cola = ola.clone();
//! bld.build_static_lib(&cola, "exampleThengaBuild.4", &["ex4_staticlib.cpp"])
//!     .expect("the static library target is well formed");
//!
//! let mut cola = ola.clone();
//! cola.append_libs(["exampleThengaBuild.4"]);
//! let exe = bld.build_executable(&cola, "exampleThengaBuild.5", &["ex5_usestaticlib.cpp"])
//!     .expect("the executable target is well formed");
//!
//! assert_eq!(exe.kind, TargetKind::Executable);
//! assert_eq!(exe.dependencies[0].name(), "exampleThengaBuild.4");
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use color_eyre::eyre::{bail, Context};
use color_eyre::Result;
use indexmap::IndexMap;
use regex::Regex;

use super::arguments;
use crate::domain::commands::command_lines::{LinkerCommandLine, SourceCommandLine};
use crate::domain::env::BuildEnv;
use crate::domain::target::{Target, TargetIdentifier, TargetKind};
use crate::project_model::compiler::CppCompiler;
use crate::project_model::sourceset::SourceSet;
use crate::utils::constants::{dir_names, error_messages, TARGET_NAME_PATTERN};

#[derive(Debug)]
pub struct Builder<'a> {
    project_root: PathBuf,
    output_dir: PathBuf,
    targets: IndexMap<TargetIdentifier<'a>, Target<'a>>,
}

impl<'a> Builder<'a> {
    /// A builder that resolves the declared source files against `project_root`, and
    /// writes everything it produces below `output_dir`
    pub fn new(project_root: &Path, output_dir: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            targets: IndexMap::new(),
        }
    }

    /// Declares an executable called `name`, built out of `files` with the settings of `env`
    pub fn build_executable<N, S>(
        &mut self,
        env: &BuildEnv<'a>,
        name: N,
        files: &[S],
    ) -> Result<&Target<'a>>
    where
        N: Into<Cow<'a, str>>,
        S: AsRef<str>,
    {
        self.declare_target(env, TargetKind::Executable, name.into(), files)
    }

    /// Declares a static library called `name`, built out of `files` with the settings
    /// of `env`. Other targets can link against it by appending `name` to their libraries
    pub fn build_static_lib<N, S>(
        &mut self,
        env: &BuildEnv<'a>,
        name: N,
        files: &[S],
    ) -> Result<&Target<'a>>
    where
        N: Into<Cow<'a, str>>,
        S: AsRef<str>,
    {
        self.declare_target(env, TargetKind::StaticLib, name.into(), files)
    }

    /// The directory where the executables and the static libraries made with `compiler` live
    pub fn artifacts_dir(&self, compiler: CppCompiler) -> PathBuf {
        self.output_dir.join(compiler.as_ref())
    }

    /// The declared targets, in declaration order
    pub fn targets(&self) -> &IndexMap<TargetIdentifier<'a>, Target<'a>> {
        &self.targets
    }

    pub fn targets_mut(&mut self) -> &mut IndexMap<TargetIdentifier<'a>, Target<'a>> {
        &mut self.targets
    }

    fn declare_target<S: AsRef<str>>(
        &mut self,
        env: &BuildEnv<'a>,
        kind: TargetKind,
        name: Cow<'a, str>,
        files: &[S],
    ) -> Result<&Target<'a>> {
        validate_target_name(&name)?;
        let identifier = TargetIdentifier(name);
        if self.targets.contains_key(&identifier) {
            bail!("{}: {identifier}", error_messages::DUPLICATED_TARGET);
        }

        let sourceset = SourceSet::resolve(files, &self.project_root)
            .with_context(|| format!("Failed to resolve the sources of: {identifier}"))?;
        if sourceset.is_empty() {
            bail!("{}: {identifier}", error_messages::TARGET_WITHOUT_SOURCES);
        }

        let compiler = env.compiler;
        let artifacts_dir = self.artifacts_dir(compiler);
        let objects_root = artifacts_dir.join(dir_names::OBJECT_FILES);

        let artifact = artifacts_dir.join(match kind {
            TargetKind::Executable => compiler.executable_filename(identifier.name()),
            TargetKind::StaticLib => compiler.static_lib_filename(identifier.name()),
        });
        if artifact == objects_root || self.targets.values().any(|t| t.artifact == artifact) {
            bail!(
                "{}: {identifier} => {artifact:?}",
                error_messages::ARTIFACT_PATH_COLLISION
            );
        }

        let objects_dir = objects_root.join(identifier.name());
        let sources: Vec<SourceCommandLine<'a>> = sourceset
            .sources
            .iter()
            .map(|source| {
                let byproduct = arguments::object_file_path(&objects_dir, source, compiler);
                let args = arguments::compile_source(env, source, &byproduct);
                SourceCommandLine::new(source, args, byproduct)
            })
            .collect();

        let dependencies = self.static_lib_dependencies(env);

        let objects = sources.iter().map(|scl| &scl.byproduct);
        let linker = match kind {
            TargetKind::Executable => LinkerCommandLine::new(
                env.driver.clone(),
                arguments::link_executable(env, objects, &artifact, &artifacts_dir),
            ),
            TargetKind::StaticLib => LinkerCommandLine::new(
                env.archiver.clone(),
                arguments::archive_static_lib(compiler, objects, &artifact),
            ),
        };

        log::debug!(
            "Declared the {kind} target: {identifier}, with {} source file(s) => {:?}",
            sources.len(),
            artifact
        );

        let target = Target {
            kind,
            driver: env.driver.clone(),
            sources,
            linker,
            dependencies,
            artifact,
            enabled_for_current_program_iteration: true,
        };

        let (idx, _) = self.targets.insert_full(identifier, target);
        Ok(&self.targets[idx])
    }

    /// The libraries of `env` that name a static library target already declared
    fn static_lib_dependencies(&self, env: &BuildEnv<'a>) -> Vec<TargetIdentifier<'a>> {
        env.libs
            .iter()
            .map(|lib| TargetIdentifier(lib.clone()))
            .filter(|identifier| {
                self.targets
                    .get(identifier)
                    .is_some_and(|target| target.kind == TargetKind::StaticLib)
            })
            .collect()
    }
}

/// Checks that `name` can be safely used as part of a filename and as a linker library name
pub fn validate_target_name(name: &str) -> Result<()> {
    static TARGET_NAME: OnceLock<Regex> = OnceLock::new();
    let regex = match TARGET_NAME.get() {
        Some(regex) => regex,
        None => {
            let compiled = Regex::new(TARGET_NAME_PATTERN)
                .with_context(|| "Ill-formed target name pattern")?;
            TARGET_NAME.get_or_init(|| compiled)
        }
    };

    if regex.is_match(name) {
        Ok(())
    } else {
        bail!("{}. Found: {name:?}", error_messages::INVALID_TARGET_NAME)
    }
}
