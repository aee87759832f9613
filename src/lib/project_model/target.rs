use crate::domain::commands::arguments::Argument;
use crate::domain::target::TargetKind;
use std::borrow::Cow;

/// A target as the user declared it. The `cc_flags` and the `libs` are the ones
/// appended, only for this target, to the baseline build environment
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct TargetModel<'a> {
    pub kind: TargetKind,
    pub sources: Vec<Cow<'a, str>>,
    pub cc_flags: Vec<Argument<'a>>,
    pub libs: Vec<Cow<'a, str>>,
    pub enabled_for_current_program_iteration: bool,
}
