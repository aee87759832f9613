pub mod commands;
pub mod env;
pub mod target;
pub mod translation_unit;
