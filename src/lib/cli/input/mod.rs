use std::fmt::Display;

use clap::{Parser, Subcommand, ValueEnum};

use crate::project_model;

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use thenga::cli::input::{CliArgs, Command, CppCompiler};
///
/// let parser = CliArgs::parse_from(["", "-vv", "plan"]);
/// assert_eq!(2, parser.verbose);
/// assert_eq!(parser.command, Command::Plan);
///
/// let parser = CliArgs::parse_from(["", "--targets", "exampleThengaBuild.4,exampleThengaBuild.5", "build"]);
/// assert_eq!(parser.command, Command::Build);
/// assert_eq!(
///     parser.targets,
///     Some(vec![String::from("exampleThengaBuild.4"), String::from("exampleThengaBuild.5")])
/// );
///
/// // Create Template Project
/// let parser = CliArgs::parse_from(["", "new", "example", "--git", "--compiler", "gcc"]);
/// assert_eq!(
///     parser.command,
///     Command::New {
///         name: String::from("example"),
///         git: true,
///         compiler: CppCompiler::GCC,
///     }
/// );
/// ```
#[derive(Parser, Debug, Default)]
#[command(name = "Thenga")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Thenga is a build tool for small C and C++ projects",
    long_about = "Thenga builds executables and static libraries out of an ordered list of \
    targets, where every target starts from a copy of the build settings of the project"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Thenga maximum allowed verbosity level is: '-vv'")]
    pub verbose: u8,

    #[arg(short, long, help = "Allows the user to specify the project's root")]
    pub root: Option<String>,

    #[arg(
        short,
        long,
        help = "Only the configuration files whose name contains this value will be processed"
    )]
    pub match_files: Option<String>,

    #[arg(short, long, help = "Overrides the compiler driver declared on the configuration files")]
    pub driver_path: Option<String>,

    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Only the listed targets are processed on this invocation"
    )]
    pub targets: Option<Vec<String>>,
}

/// [`Command`] -  The core enum commands
#[derive(Subcommand, Debug, PartialEq, Eq, Default)]
pub enum Command {
    /// Builds every enabled target of the project
    #[default]
    Build,
    /// Builds the project, then runs every enabled executable
    Run,
    /// Prints the command lines generated for the project without running them
    Plan,
    /// Creates a new project with the example targets
    New {
        #[arg(help = "Name of the new project")]
        name: String,
        #[arg(long, help = "Initialize a new local git repo")]
        git: bool,
        #[arg(long, default_value_t = CppCompiler::CLANG, help = "Which compiler to use")]
        compiler: CppCompiler,
    },
}

/// [`CppCompiler`] The C++ compilers available within Thenga as a command line argument for the `new` argument
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum CppCompiler {
    CLANG,
    MSVC,
    GCC,
}

impl Display for CppCompiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            CppCompiler::CLANG => write!(f, "clang"),
            CppCompiler::MSVC => write!(f, "msvc"),
            CppCompiler::GCC => write!(f, "gcc"),
        }
    }
}

impl From<CppCompiler> for project_model::compiler::CppCompiler {
    fn from(value: CppCompiler) -> project_model::compiler::CppCompiler {
        match value {
            CppCompiler::CLANG => project_model::compiler::CppCompiler::CLANG,
            CppCompiler::MSVC => project_model::compiler::CppCompiler::MSVC,
            CppCompiler::GCC => project_model::compiler::CppCompiler::GCC,
        }
    }
}
