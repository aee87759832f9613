//! Generation of the concrete command line arguments for every supported compiler

use std::path::{Component, Path, PathBuf};

use crate::domain::commands::arguments::{Argument, Arguments};
use crate::domain::env::BuildEnv;
use crate::domain::translation_unit::TranslationUnit;
use crate::project_model::compiler::CppCompiler;
use crate::project_model::sourceset::SourceFile;

/// The arguments that compile, without linking, a single translation unit into `byproduct`
pub(crate) fn compile_source<'a>(
    env: &BuildEnv<'a>,
    source: &SourceFile,
    byproduct: &Path,
) -> Arguments<'a> {
    let mut args = Arguments::with_capacity(env.cc_flags.len() + env.include_dirs.len() + 6);

    if env.compiler.eq(&CppCompiler::MSVC) {
        args.push("/nologo");
        args.push("/EHsc");
    }
    args.extend_from_slice(&env.cc_flags);
    args.extend(
        env.include_dirs
            .iter()
            .map(|dir| env.compiler.include_dir_arg(dir)),
    );

    match env.compiler {
        CppCompiler::CLANG | CppCompiler::GCC => {
            args.push("-c");
            args.push(source.path());
            args.push("-o");
            args.push(byproduct);
        }
        CppCompiler::MSVC => {
            args.push("/c");
            args.push(source.path());
            args.push(format!("/Fo{}", byproduct.display()));
        }
    }

    args
}

/// The arguments for the compiler driver acting as the linker of an executable
pub(crate) fn link_executable<'a, 'b>(
    env: &BuildEnv<'a>,
    objects: impl Iterator<Item = &'b PathBuf>,
    artifact: &Path,
    artifacts_dir: &Path,
) -> Arguments<'a> {
    let mut args = Arguments::default();
    let compiler = env.compiler;

    if compiler.eq(&CppCompiler::MSVC) {
        args.push("/nologo");
    }
    args.extend(objects.map(Argument::from));

    match compiler {
        CppCompiler::CLANG | CppCompiler::GCC => {
            args.push("-o");
            args.push(artifact);
        }
        CppCompiler::MSVC => {
            args.push(format!("/Fe{}", artifact.display()));
            args.push("/link");
        }
    }

    args.extend(env.lib_dirs.iter().map(|dir| compiler.lib_dir_arg(dir)));
    args.push(compiler.lib_dir_arg(artifacts_dir));
    args.extend(env.libs.iter().map(|lib| compiler.link_library_arg(lib)));

    args
}

/// The arguments for the archiver that bundles the object files into a static library
pub(crate) fn archive_static_lib<'a, 'b>(
    compiler: CppCompiler,
    objects: impl Iterator<Item = &'b PathBuf>,
    artifact: &Path,
) -> Arguments<'a> {
    let mut args = Arguments::default();

    match compiler {
        CppCompiler::CLANG | CppCompiler::GCC => {
            args.push("rcs");
            args.push(artifact);
        }
        CppCompiler::MSVC => {
            args.push("/nologo");
            args.push(format!("/OUT:{}", artifact.display()));
        }
    }
    args.extend(objects.map(Argument::from));

    args
}

/// Where the object file for `source` is written to. The source tree of the project is
/// mirrored below `objects_dir`, so equally named files on different directories never
/// collide. The source extension is kept (`util.cpp` => `util.cpp.o`), so sources that
/// only differ on it never collide either
pub(crate) fn object_file_path(
    objects_dir: &Path,
    source: &SourceFile,
    compiler: CppCompiler,
) -> PathBuf {
    let relative: PathBuf = source
        .relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_os_string()),
            Component::ParentDir => Some("__".into()),
            _ => None,
        })
        .collect();

    let mut object = objects_dir.join(relative).into_os_string();
    object.push(".");
    object.push(compiler.obj_file_extension());
    PathBuf::from(object)
}
