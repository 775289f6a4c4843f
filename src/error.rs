use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 生成 compile_commands.json 过程中可能出现的错误
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize compile commands: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse layout file: {0}")]
    Toml(#[from] toml::de::Error),

    /// 目标三元组中没有 `-`，无法拆出架构
    #[error("Invalid target triple '{0}': expected <arch>-<vendor>-<system>[-<abi>]")]
    InvalidTriple(String),

    /// 路径不是合法 UTF-8，无法原样写入 JSON
    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Unknown preset '{0}' (use --list-presets)")]
    UnknownPreset(String),
}
