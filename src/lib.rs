// 公共API暴露
mod cli;
mod config;
mod error;
mod flags;
mod generator;
mod models;
mod parser;
mod utils;

pub use cli::{CliArgs, parse_args};
pub use config::{
    DEFAULT_PRESET, PRESETS, Preset, SourceDir, SourceLayout, ToolchainConfig, ToolchainFamily,
    find_preset,
};
pub use error::{Error, Result};
pub use flags::{WIDE_VECTOR_FLAG, resolve_flags};
pub use generator::{
    build_compile_database, generate_compile_commands, generated_message,
    render_compile_commands, write_compile_commands,
};
pub use models::{CompileCommand, FeatureFlags, FlagSet, SourceLanguage};
pub use parser::{Arch, TargetTriple, parse_target_triple};
pub use utils::{compute_absolute_path, is_debug_mode, quote_if_needed, set_debug_mode};
