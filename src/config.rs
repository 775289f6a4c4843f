use crate::debug_println;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 工具链风格：clang-cl (MSVC ABI) 或 clang (MinGW/GNU ABI)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolchainFamily {
    Msvc,
    Gnu,
}

impl ToolchainFamily {
    /// 三元组中只要出现 "msvc" 就按 clang-cl 处理
    pub fn from_triple(triple: &str) -> Self {
        if triple.contains("msvc") {
            ToolchainFamily::Msvc
        } else {
            ToolchainFamily::Gnu
        }
    }
}

#[derive(Debug)]
pub struct ToolchainConfig {
    pub family: ToolchainFamily,
    pub c_compiler: &'static str,
    pub cxx_compiler: &'static str,
    /// 紧跟在 --target 之后的参数（GNU 需要 -municode 选择 wmain/wWinMain）
    pub entry_flags: &'static [&'static str],
    pub c_std: &'static str,
    pub cxx_std: &'static str,
    pub optimize: &'static str,
    /// 只加在 C++ 参数上：异常模型与关闭 RTTI
    pub cxx_only_flags: &'static [&'static str],
    pub warning_level: &'static str,
    /// 强制按 C++ 编译
    pub force_cxx_flag: &'static str,
}

static MSVC_TOOLCHAIN: ToolchainConfig = ToolchainConfig {
    family: ToolchainFamily::Msvc,
    c_compiler: "clang-cl.exe",
    cxx_compiler: "clang-cl.exe",
    entry_flags: &[],
    c_std: "/std:c17",
    cxx_std: "/std:c++20",
    optimize: "/O2",
    cxx_only_flags: &["/EHsc", "/GR-"],
    warning_level: "/W4",
    force_cxx_flag: "/TP",
};

static GNU_TOOLCHAIN: ToolchainConfig = ToolchainConfig {
    family: ToolchainFamily::Gnu,
    c_compiler: "clang.exe",
    cxx_compiler: "clang++.exe",
    entry_flags: &["-municode"],
    c_std: "-std=gnu17",
    cxx_std: "-std=gnu++20",
    optimize: "-O2",
    cxx_only_flags: &["-fno-rtti"],
    warning_level: "-Wall",
    force_cxx_flag: "-xc++",
};

impl ToolchainConfig {
    pub fn for_family(family: ToolchainFamily) -> &'static ToolchainConfig {
        debug_println!("[DEBUG config] Selecting toolchain profile for {:?}", family);
        match family {
            ToolchainFamily::Msvc => &MSVC_TOOLCHAIN,
            ToolchainFamily::Gnu => &GNU_TOOLCHAIN,
        }
    }

    pub fn compiler(&self, cxx: bool) -> &'static str {
        if cxx { self.cxx_compiler } else { self.c_compiler }
    }
}

/// 预置的目标配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub target: &'static str,
    pub wide_vector: bool,
}

pub const DEFAULT_PRESET: &str = "msvc-x64-avx2";

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "msvc-x64-avx2",
        target: "x86_64-pc-windows-msvc",
        wide_vector: true,
    },
    Preset {
        name: "msvc-x64",
        target: "x86_64-pc-windows-msvc",
        wide_vector: false,
    },
    Preset {
        name: "msvc-x86",
        target: "i686-pc-windows-msvc",
        wide_vector: false,
    },
    Preset {
        name: "msvc-arm64",
        target: "aarch64-pc-windows-msvc",
        wide_vector: false,
    },
    Preset {
        name: "msvc-arm",
        target: "arm-pc-windows-msvc",
        wide_vector: false,
    },
    Preset {
        name: "gnu-x64-avx2",
        target: "x86_64-w64-windows-gnu",
        wide_vector: true,
    },
    Preset {
        name: "gnu-x64",
        target: "x86_64-w64-windows-gnu",
        wide_vector: false,
    },
    Preset {
        name: "gnu-x86",
        target: "i686-w64-windows-gnu",
        wide_vector: false,
    },
    Preset {
        name: "gnu-arm64",
        target: "aarch64-w64-windows-gnu",
        wide_vector: false,
    },
    Preset {
        name: "gnu-arm",
        target: "armv7-w64-windows-gnu",
        wide_vector: false,
    },
];

pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

/// 一个需要扫描的源码目录，以及该目录下文件额外的 -I 路径
/// includes 相对于 path 本身
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDir {
    pub path: String,
    #[serde(default)]
    pub includes: Vec<String>,
}

impl SourceDir {
    pub fn new(path: &str, includes: &[&str]) -> Self {
        SourceDir {
            path: path.to_string(),
            includes: includes.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// 源码目录表，按声明顺序扫描
///
/// ```toml
/// [[directory]]
/// path = "src"
/// includes = ["../scintilla/include"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLayout {
    #[serde(rename = "directory", default)]
    pub directories: Vec<SourceDir>,
}

impl Default for SourceLayout {
    /// 编辑器仓库的目录结构（相对于仓库根目录）
    fn default() -> Self {
        SourceLayout {
            directories: vec![
                SourceDir::new("src", &["../scintilla/include"]),
                SourceDir::new("scintilla/lexers", &["../include", "../lexlib"]),
                SourceDir::new("scintilla/lexlib", &["../include"]),
                SourceDir::new("scintilla/src", &["../include", "../lexlib"]),
                SourceDir::new("scintilla/win32", &["../include", "../src"]),
                SourceDir::new("matepath/src", &[]),
            ],
        }
    }
}

impl SourceLayout {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug_println!("[DEBUG config] Loading source layout from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let layout: SourceLayout = toml::from_str(content)?;
        debug_println!(
            "[DEBUG config] Source layout has {} directories",
            layout.directories.len()
        );
        Ok(layout)
    }
}
