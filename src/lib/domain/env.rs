//! The build environment: the set of compiler and linker settings that a target is built with.
//!
//! A project declares one baseline [`BuildEnv`]. Every target works over its own copy of it,
//! obtained with [`Clone`], so the flags and libraries appended for one target are never seen
//! by the baseline or by any other target.
//!
//! ```rust
//! use thenga::domain::env::BuildEnv;
//! use thenga::project_model::compiler::CppCompiler;
//!
//! let ola = BuildEnv::new(CppCompiler::GCC);
//!
//! let mut cola = ola.clone();
//! cola.append_cc_flags(["-std=c++0x"]);
//! cola.append_libs(["pthread"]);
//!
//! assert_eq!(cola.cc_flags.to_string(), "-std=c++0x");
//! assert!(ola.cc_flags.is_empty());
//! assert!(ola.libs.is_empty());
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::domain::commands::arguments::{Argument, Arguments};
use crate::project_model::compiler::{CompilerModel, CppCompiler};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEnv<'a> {
    pub compiler: CppCompiler,
    pub driver: Cow<'a, str>,
    pub archiver: Cow<'a, str>,
    pub cc_flags: Arguments<'a>,
    pub libs: Vec<Cow<'a, str>>,
    pub include_dirs: Vec<PathBuf>,
    pub lib_dirs: Vec<PathBuf>,
}

impl<'a> BuildEnv<'a> {
    /// An environment for `compiler` with its default driver and archiver, and no
    /// flags, libraries or search paths at all
    pub fn new(compiler: CppCompiler) -> Self {
        let model = CompilerModel {
            cpp_compiler: compiler,
            ..Default::default()
        };

        Self {
            compiler,
            driver: model.driver(),
            archiver: model.archiver(),
            cc_flags: Arguments::default(),
            libs: Vec::new(),
            include_dirs: Vec::new(),
            lib_dirs: Vec::new(),
        }
    }

    /// The environment declared by the user for the project. Relative search paths are
    /// resolved against the `project_root`
    pub fn baseline(model: &CompilerModel<'a>, project_root: &Path) -> Self {
        let mut cc_flags = Arguments::with_capacity(model.cc_flags.len() + 2);
        cc_flags.push_opt(model.language_level_arg());
        cc_flags.push_opt(model.stdlib_arg());
        cc_flags.extend_from_slice(&model.cc_flags);

        Self {
            compiler: model.cpp_compiler,
            driver: model.driver(),
            archiver: model.archiver(),
            cc_flags,
            libs: model.libs.clone(),
            include_dirs: model
                .include_dirs
                .iter()
                .map(|dir| project_root.join(dir))
                .collect(),
            lib_dirs: model
                .lib_dirs
                .iter()
                .map(|dir| project_root.join(dir))
                .collect(),
        }
    }

    /// Appends the given flags to the ones passed to the compiler for every translation unit
    pub fn append_cc_flags<I, T>(&mut self, flags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Argument<'a>>,
    {
        self.cc_flags.extend(flags);
    }

    /// Appends the given libraries, by name, to the ones passed to the linker
    pub fn append_libs<I, T>(&mut self, libs: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Cow<'a, str>>,
    {
        self.libs.extend(libs.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project_model::compiler::LanguageLevel;

    fn baseline_model() -> CompilerModel<'static> {
        CompilerModel {
            cpp_compiler: CppCompiler::GCC,
            cpp_standard: Some(LanguageLevel::CPP17),
            cc_flags: vec![Argument::from("-Wall")],
            libs: vec![Cow::Borrowed("m")],
            include_dirs: vec![PathBuf::from("include")],
            lib_dirs: vec![PathBuf::from("vendor/lib")],
            ..Default::default()
        }
    }

    #[test]
    fn test_baseline_from_model() {
        let root = Path::new("/project");
        let env = BuildEnv::baseline(&baseline_model(), root);

        assert_eq!(env.driver, "g++");
        assert_eq!(env.archiver, "ar");
        assert_eq!(env.cc_flags.to_string(), "-std=c++17 -Wall");
        assert_eq!(env.libs, vec!["m"]);
        assert_eq!(env.include_dirs, vec![root.join("include")]);
        assert_eq!(env.lib_dirs, vec![root.join("vendor/lib")]);
    }

    #[test]
    fn test_mutations_on_a_clone_are_not_shared() {
        let ola = BuildEnv::baseline(&baseline_model(), Path::new("/project"));
        let pristine = ola.clone();

        let mut first = ola.clone();
        first.append_cc_flags(["-std=c++0x"]);
        first.append_libs(["pthread"]);

        let mut second = ola.clone();
        second.append_libs([String::from("exampleThengaBuild.4")]);

        assert_eq!(ola, pristine);
        assert_eq!(first.cc_flags.to_string(), "-std=c++17 -Wall -std=c++0x");
        assert_eq!(first.libs, vec!["m", "pthread"]);
        assert_eq!(second.cc_flags, ola.cc_flags);
        assert_eq!(second.libs, vec!["m", "exampleThengaBuild.4"]);
    }

    #[test]
    fn test_new_env_has_no_flags() {
        let env = BuildEnv::new(CppCompiler::MSVC);
        assert_eq!(env.driver, "cl");
        assert_eq!(env.archiver, "lib");
        assert!(env.cc_flags.is_empty());
        assert!(env.include_dirs.is_empty());
    }
}
