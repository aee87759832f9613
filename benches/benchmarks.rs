//! Benchmarks tests for measuring the performance of the code
//!
//! Only the work done by `Thenga` itself is measured here: mapping a configuration file into
//! the project model, and generating the command lines of every target. The command lines
//! are never executed, so the numbers are not polluted by the compilers

use std::path::Path;

use clap::Parser;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use thenga::{
    cli::input::CliArgs,
    compiler::{builder::Builder, generate_commands},
    config_file::{self, ThengaConfigFile},
    domain::env::BuildEnv,
    project_model::compiler::CppCompiler,
    scenarios::example_thenga_build,
    utils::{reader::build_model, template::resources},
};

pub fn build_project_benchmark(c: &mut Criterion) {
    let raw_file = resources::CONFIG_FILE.replace("<compiler>", "clang");
    let cli_args = CliArgs::parse_from(["", "plan"]);
    let project_root = Path::new("/bench");

    c.bench_function("Parse the configuration file", |b| {
        b.iter(|| config_file::thenga_cfg_from_file(black_box(raw_file.as_str())))
    });

    c.bench_function("Build the project model", |b| {
        b.iter(|| {
            let config: ThengaConfigFile = config_file::thenga_cfg_from_file(raw_file.as_str())
                .expect("the template is a valid configuration file");
            build_model(black_box(config), &cli_args, project_root)
        })
    });

    let config: ThengaConfigFile = config_file::thenga_cfg_from_file(raw_file.as_str())
        .expect("the template is a valid configuration file");
    let program_data =
        build_model(config, &cli_args, project_root).expect("the template maps into a model");

    c.bench_function("Generate commands", |b| {
        b.iter(|| generate_commands(black_box(&program_data)))
    });

    c.bench_function("Declare the example targets", |b| {
        let ola = BuildEnv::new(CppCompiler::CLANG);
        b.iter(|| {
            let mut bld = Builder::new(project_root, &project_root.join("out"));
            example_thenga_build(black_box(&ola), &mut bld)
        })
    });
}

criterion_group!(benches, build_project_benchmark);
criterion_main!(benches);
