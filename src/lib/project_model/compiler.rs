use core::fmt;
use std::borrow::Cow;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::commands::arguments::Argument;

/// The baseline compiler and linker settings declared for a project. Every target
/// starts its build from a copy of these settings
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct CompilerModel<'a> {
    pub cpp_compiler: CppCompiler,
    pub driver_path: Cow<'a, str>,
    pub archiver: Cow<'a, str>,
    pub cpp_standard: Option<LanguageLevel>,
    pub std_lib: Option<StdLib>,
    pub cc_flags: Vec<Argument<'a>>,
    pub libs: Vec<Cow<'a, str>>,
    pub include_dirs: Vec<PathBuf>,
    pub lib_dirs: Vec<PathBuf>,
}

impl<'a> CompilerModel<'a> {
    pub fn language_level(&self) -> Option<Cow<'static, str>> {
        self.cpp_standard.map(|level| {
            match self.cpp_compiler {
                CppCompiler::CLANG | CppCompiler::GCC => format!("-std=c++{level}"),
                CppCompiler::MSVC => format!("/std:c++{}", level.msvc_value()),
            }
            .into()
        })
    }

    pub fn language_level_arg(&self) -> Option<Argument<'a>> {
        self.language_level().map(Argument::from)
    }

    /// The `-stdlib=` flag. Only meaningful for Clang
    pub fn stdlib_arg(&self) -> Option<Argument<'a>> {
        match self.cpp_compiler {
            CppCompiler::CLANG => self.std_lib.as_ref().map(StdLib::as_arg),
            _ => None,
        }
    }

    /// The program that compiles and links the translation units
    pub fn driver(&self) -> Cow<'a, str> {
        self.cpp_compiler.get_driver(self)
    }

    /// The program that bundles the object files into a static library
    pub fn archiver(&self) -> Cow<'a, str> {
        self.cpp_compiler.get_archiver(self)
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize, Default)]
pub enum CppCompiler {
    #[default]
    #[serde(alias = "Clang", alias = "clang")]
    CLANG,
    #[serde(alias = "Msvc", alias = "msvc")]
    MSVC,
    #[serde(alias = "Gcc", alias = "gcc")]
    GCC,
}

impl fmt::Display for CppCompiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for CppCompiler {
    fn as_ref(&self) -> &str {
        match *self {
            CppCompiler::CLANG => "clang",
            CppCompiler::MSVC => "msvc",
            CppCompiler::GCC => "gcc",
        }
    }
}

impl CppCompiler {
    /// Returns an &str representing the compiler driver that will be called
    /// in the command line to generate the build events
    pub fn get_driver<'a>(&self, compiler_model: &CompilerModel<'a>) -> Cow<'a, str> {
        if !compiler_model.driver_path.is_empty() {
            compiler_model.driver_path.clone()
        } else {
            Cow::Borrowed(match *self {
                CppCompiler::CLANG => "clang++",
                CppCompiler::MSVC => "cl",
                CppCompiler::GCC => "g++",
            })
        }
    }

    pub fn get_archiver<'a>(&self, compiler_model: &CompilerModel<'a>) -> Cow<'a, str> {
        if !compiler_model.archiver.is_empty() {
            compiler_model.archiver.clone()
        } else {
            Cow::Borrowed(match *self {
                CppCompiler::CLANG | CppCompiler::GCC => "ar",
                CppCompiler::MSVC => "lib",
            })
        }
    }

    #[inline(always)]
    pub fn obj_file_extension(&self) -> &str {
        match *self {
            CppCompiler::CLANG | CppCompiler::GCC => "o",
            CppCompiler::MSVC => "obj",
        }
    }

    /// The filename of the static library generated for a target called `name`.
    ///
    /// This is the inverse of how the linker looks up a library passed by name, so
    /// a static library target can be linked later just by its target name
    ///
    /// ```rust
    /// use thenga::project_model::compiler::CppCompiler;
    ///
    /// assert_eq!(
    ///     CppCompiler::GCC.static_lib_filename("exampleThengaBuild.4"),
    ///     "libexampleThengaBuild.4.a"
    /// );
    /// assert_eq!(CppCompiler::MSVC.static_lib_filename("maths"), "maths.lib");
    /// ```
    pub fn static_lib_filename(&self, name: &str) -> String {
        match *self {
            CppCompiler::CLANG | CppCompiler::GCC => format!("lib{name}.a"),
            CppCompiler::MSVC => format!("{name}.lib"),
        }
    }

    /// The filename of the executable generated for a target called `name`. Dots in
    /// the target name are kept as they are
    pub fn executable_filename(&self, name: &str) -> String {
        if crate::utils::constants::BINARY_EXTENSION.is_empty() {
            name.to_string()
        } else {
            format!("{name}.{}", crate::utils::constants::BINARY_EXTENSION)
        }
    }

    /// The argument that asks the linker to link against the library called `name`
    pub fn link_library_arg<'a>(&self, name: &str) -> Argument<'a> {
        Argument::from(match *self {
            CppCompiler::CLANG | CppCompiler::GCC => format!("-l{name}"),
            CppCompiler::MSVC => self.static_lib_filename(name),
        })
    }

    /// The argument that adds `dir` to the linker search paths
    pub fn lib_dir_arg<'a>(&self, dir: &std::path::Path) -> Argument<'a> {
        Argument::from(match *self {
            CppCompiler::CLANG | CppCompiler::GCC => format!("-L{}", dir.display()),
            CppCompiler::MSVC => format!("/LIBPATH:{}", dir.display()),
        })
    }

    /// The argument that adds `dir` to the preprocessor include search paths
    pub fn include_dir_arg<'a>(&self, dir: &std::path::Path) -> Argument<'a> {
        Argument::from(match *self {
            CppCompiler::CLANG | CppCompiler::GCC => format!("-I{}", dir.display()),
            CppCompiler::MSVC => format!("/I{}", dir.display()),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LanguageLevel {
    #[serde(alias = "11")]
    CPP11,
    #[serde(alias = "14")]
    CPP14,
    #[serde(alias = "17")]
    CPP17,
    #[serde(alias = "20")]
    CPP20,
    #[serde(alias = "23")]
    CPP23,
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for LanguageLevel {
    fn as_ref(&self) -> &'static str {
        match *self {
            LanguageLevel::CPP11 => "11",
            LanguageLevel::CPP14 => "14",
            LanguageLevel::CPP17 => "17",
            LanguageLevel::CPP20 => "20",
            LanguageLevel::CPP23 => "23",
        }
    }
}

impl LanguageLevel {
    /// MSVC has no switch for C++11, and C++23 is still behind `latest`
    fn msvc_value(&self) -> &'static str {
        match *self {
            LanguageLevel::CPP11 | LanguageLevel::CPP14 => "14",
            LanguageLevel::CPP17 => "17",
            LanguageLevel::CPP20 => "20",
            LanguageLevel::CPP23 => "latest",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum StdLib {
    #[serde(alias = "libstdc++", alias = "stdlibc++")]
    STDLIBCPP,
    #[serde(alias = "libc++", alias = "libcpp")]
    LIBCPP,
}

impl StdLib {
    pub fn as_arg<'a>(&self) -> Argument<'a> {
        Argument::from(match *self {
            StdLib::STDLIBCPP => "-stdlib=libstdc++",
            StdLib::LIBCPP => "-stdlib=libc++",
        })
    }
}

impl fmt::Display for StdLib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for StdLib {
    fn as_ref(&self) -> &str {
        match *self {
            StdLib::STDLIBCPP => "libstdc++",
            StdLib::LIBCPP => "libc++",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_level_flag_per_compiler() {
        let mut model = CompilerModel {
            cpp_compiler: CppCompiler::GCC,
            ..Default::default()
        };
        assert_eq!(model.language_level(), None);

        model.cpp_standard = Some(LanguageLevel::CPP17);
        assert_eq!(model.language_level().as_deref(), Some("-std=c++17"));

        model.cpp_compiler = CppCompiler::MSVC;
        assert_eq!(model.language_level().as_deref(), Some("/std:c++17"));

        model.cpp_standard = Some(LanguageLevel::CPP11);
        assert_eq!(model.language_level().as_deref(), Some("/std:c++14"));
    }

    #[test]
    fn test_stdlib_flag_only_for_clang() {
        let mut model = CompilerModel {
            cpp_compiler: CppCompiler::GCC,
            std_lib: Some(StdLib::LIBCPP),
            ..Default::default()
        };
        assert_eq!(model.stdlib_arg(), None);

        model.cpp_compiler = CppCompiler::CLANG;
        assert_eq!(model.stdlib_arg(), Some(Argument::from("-stdlib=libc++")));
    }

    #[test]
    fn test_driver_and_archiver_overrides() {
        let mut model = CompilerModel {
            cpp_compiler: CppCompiler::GCC,
            ..Default::default()
        };
        assert_eq!(model.driver(), "g++");
        assert_eq!(model.archiver(), "ar");

        model.driver_path = Cow::Borrowed("g++-13");
        model.archiver = Cow::Borrowed("gcc-ar");
        assert_eq!(model.driver(), "g++-13");
        assert_eq!(model.archiver(), "gcc-ar");
    }

    #[test]
    fn test_linker_library_lookup_matches_static_lib_name() {
        let compiler = CppCompiler::CLANG;
        let name = "exampleThengaBuild.4";
        let lookup = compiler.link_library_arg(name);
        let looked_up_file = format!("lib{}.a", lookup.value().trim_start_matches("-l"));
        assert_eq!(looked_up_file, compiler.static_lib_filename(name));

        let msvc = CppCompiler::MSVC;
        assert_eq!(
            msvc.link_library_arg(name).value(),
            msvc.static_lib_filename(name)
        );
    }
}
