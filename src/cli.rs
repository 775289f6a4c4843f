use crate::config::{DEFAULT_PRESET, find_preset};
use crate::error::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// 命令行参数结构
#[derive(Parser, Debug)]
#[command(
    name = "triple2clangd",
    version,
    about = "Generate compile_commands.json for the editor sources without building them"
)]
pub struct CliArgs {
    /// Target triple, e.g. x86_64-pc-windows-msvc or aarch64-w64-windows-gnu
    #[arg(short, long, conflicts_with = "preset")]
    pub target: Option<String>,

    /// Named target preset (default: msvc-x64-avx2)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// List the available presets and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Enable AVX2 (x86-64-v3) and raise the minimum Windows version
    #[arg(long = "avx2", visible_alias = "wide-vector")]
    pub wide_vector: bool,

    /// Compile .c files as C++
    #[arg(long)]
    pub cxx: bool,

    /// Project root that the source directories are relative to
    #[arg(short = 'C', long, default_value = ".")]
    pub root: PathBuf,

    /// Output file, relative to the project root
    #[arg(short, long, default_value = "compile_commands.json")]
    pub output: PathBuf,

    /// TOML file replacing the built-in source directory table
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Print debug messages
    #[arg(short, long)]
    pub debug: bool,
}

impl CliArgs {
    /// 确定本次使用的目标三元组与 wide-vector 开关
    ///
    /// 显式 --target 优先；否则使用预置（默认 msvc-x64-avx2），--avx2 会叠加到预置上。
    pub fn resolve_target(&self) -> Result<(String, bool)> {
        if let Some(target) = &self.target {
            return Ok((target.clone(), self.wide_vector));
        }
        let name = self.preset.as_deref().unwrap_or(DEFAULT_PRESET);
        let preset =
            find_preset(name).ok_or_else(|| Error::UnknownPreset(name.to_string()))?;
        Ok((
            preset.target.to_string(),
            preset.wide_vector || self.wide_vector,
        ))
    }
}

/// 解析命令行参数
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
