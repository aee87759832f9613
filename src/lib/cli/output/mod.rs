pub mod executors;
pub mod report;
