pub mod build;
pub mod compiler;
pub mod project;
pub mod sourceset;
pub mod target;

use indexmap::IndexMap;

use crate::domain::target::TargetIdentifier;

use self::{
    build::BuildModel, compiler::CompilerModel, project::ProjectModel, target::TargetModel,
};

/// The validated data of a configuration file, ready to be mapped into command lines.
/// The targets are kept in declaration order
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ThengaModel<'a> {
    pub project: ProjectModel<'a>,
    pub compiler: CompilerModel<'a>,
    pub build: BuildModel,
    pub targets: IndexMap<TargetIdentifier<'a>, TargetModel<'a>>,
}
