pub const CONFIG_FILE: &str = include_str!("thenga.toml");
pub const CONFIG_FILE_MSVC: &str = include_str!("thenga_msvc.toml");

pub const EX1: &str = include_str!("ex1.cpp");
pub const EX2: &str = include_str!("ex2.cpp");
pub const EX2_HEADER: &str = include_str!("ex2.h");
pub const EX2_OTHERSRC: &str = include_str!("othersrc_ex2.cpp");
pub const EX3_THREAD: &str = include_str!("ex3_thread.cpp");
pub const EX4_STATICLIB: &str = include_str!("ex4_staticlib.cpp");
pub const EX4_STATICLIB_HEADER: &str = include_str!("ex4_staticlib.h");
pub const EX5_USESTATICLIB: &str = include_str!("ex5_usestaticlib.cpp");
