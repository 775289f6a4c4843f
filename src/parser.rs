use crate::config::ToolchainFamily;
use crate::debug_println;
use crate::error::{Error, Result};

/// 目标架构，决定追加哪些架构相关的宏定义
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arch {
    X86_64,
    I686,
    /// aarch64 / arm64
    Arm64,
    /// 其余 arm 开头的 32 位 ARM（arm, armv7, thumbv7a ...）
    Arm,
    /// 无法识别的架构，不追加任何架构宏
    Unknown(String),
}

impl Arch {
    pub fn from_name(name: &str) -> Self {
        match name {
            "x86_64" => Arch::X86_64,
            "i686" => Arch::I686,
            "aarch64" | "arm64" => Arch::Arm64,
            _ if name.starts_with("arm") => Arch::Arm,
            _ => Arch::Unknown(name.to_string()),
        }
    }
}

/// 解析后的目标三元组
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetTriple {
    pub raw: String,
    pub arch: Arch,
    pub family: ToolchainFamily,
}

impl TargetTriple {
    /// 架构无法识别时给用户的提示；仍然继续生成，只是没有架构宏
    pub fn unknown_arch_warning(&self) -> Option<String> {
        match &self.arch {
            Arch::Unknown(name) => Some(format!(
                "Warning: unknown architecture '{}', no architecture defines will be added",
                name
            )),
            _ => None,
        }
    }
}

/// 解析 `<arch>-<vendor>-<system>[-<abi>]` 格式的目标三元组
///
/// 只使用第一个 `-` 之前的架构部分，以及整个字符串是否包含 msvc。
pub fn parse_target_triple(triple: &str) -> Result<TargetTriple> {
    debug_println!("[DEBUG parser] Parsing target triple: {}", triple);
    let (arch_name, _) = triple
        .split_once('-')
        .ok_or_else(|| Error::InvalidTriple(triple.to_string()))?;

    let arch = Arch::from_name(arch_name);
    let family = ToolchainFamily::from_triple(triple);
    debug_println!("[DEBUG parser] Arch: {:?}, family: {:?}", arch, family);

    Ok(TargetTriple {
        raw: triple.to_string(),
        arch,
        family,
    })
}
