use crate::config::ToolchainConfig;
use crate::debug_println;
use crate::models::{FeatureFlags, FlagSet};
use crate::parser::{Arch, TargetTriple};

/// 所有目标共用的宏定义
const COMMON_DEFINES: &[&str] = &[
    "NDEBUG",
    "_WINDOWS",
    "NOMINMAX",
    "WIN32_LEAN_AND_MEAN",
    "STRICT_TYPED_ITEMIDS",
    "UNICODE",
    "_UNICODE",
    "_CRT_SECURE_NO_WARNINGS",
    "_SCL_SECURE_NO_WARNINGS",
    "BOOST_REGEX_STANDALONE",
    "NO_CXX11_REGEX",
];

/// 跟在 /W4 或 -Wall 之后的警告
const COMMON_WARNINGS: &[&str] = &[
    "-Wextra",
    "-Wshadow",
    "-Wimplicit-fallthrough",
    "-Wformat=2",
    "-Wundef",
    "-Wcomma",
];

const CXX_WARNINGS: &[&str] = &["-Wold-style-cast"];

/// x86_64 启用 AVX2 时追加的指令集参数
pub const WIDE_VECTOR_FLAG: &str = "-march=x86-64-v3";

const WINVER_VISTA: &str = "0x0600";
const WINVER_WIN7: &str = "0x0601";
const WINVER_WIN8: &str = "0x0602";
const WINVER_WIN10: &str = "0x0A00";

/// 架构相关的宏与额外参数
struct ArchSettings {
    defines: Vec<String>,
    flags: Vec<&'static str>,
}

fn winver_defines(version: &str) -> [String; 2] {
    [
        format!("_WIN32_WINNT={}", version),
        format!("WINVER={}", version),
    ]
}

fn arch_settings(arch: &Arch, wide_vector: bool) -> ArchSettings {
    let (platform, version, flags) = match arch {
        Arch::X86_64 if wide_vector => ("_WIN64", WINVER_WIN7, vec![WIDE_VECTOR_FLAG]),
        Arch::X86_64 => ("_WIN64", WINVER_VISTA, Vec::new()),
        Arch::I686 => ("WIN32", WINVER_VISTA, Vec::new()),
        Arch::Arm64 => ("_WIN64", WINVER_WIN10, Vec::new()),
        Arch::Arm => ("WIN32", WINVER_WIN8, Vec::new()),
        Arch::Unknown(name) => {
            debug_println!("[DEBUG flags] Unknown arch '{}', no arch defines", name);
            return ArchSettings {
                defines: Vec::new(),
                flags: Vec::new(),
            };
        }
    };

    let mut defines = vec![platform.to_string()];
    defines.extend(winver_defines(version));
    ArchSettings { defines, flags }
}

/// 根据目标三元组与特性开关生成 C / C++ 两组编译参数
///
/// 纯函数：不访问文件系统。对同一次调用中的所有源文件只计算一次。
pub fn resolve_flags(target: &TargetTriple, features: FeatureFlags) -> FlagSet {
    debug_println!(
        "[DEBUG flags] Resolving flags for {} ({:?})",
        target.raw,
        features
    );
    let toolchain = ToolchainConfig::for_family(target.family);
    let target_flag = format!("--target={}", target.raw);

    let mut cflags: Vec<String> = vec![toolchain.compiler(false).to_string(), target_flag.clone()];
    let mut cxxflags: Vec<String> = vec![toolchain.compiler(true).to_string(), target_flag];
    // 语言覆盖参数紧跟在编译器与 --target 之后（第 3 个参数），且只加在 C++ 参数上
    if features.force_cxx {
        cxxflags.push(toolchain.force_cxx_flag.to_string());
    }
    for flag in toolchain.entry_flags {
        cflags.push(flag.to_string());
        cxxflags.push(flag.to_string());
    }

    cflags.extend(["-c", toolchain.c_std, toolchain.optimize].map(String::from));
    cxxflags.extend(["-c", toolchain.cxx_std, toolchain.optimize].map(String::from));
    cxxflags.extend(toolchain.cxx_only_flags.iter().map(|s| s.to_string()));

    let arch = arch_settings(&target.arch, features.wide_vector);
    for flag in &arch.flags {
        cflags.push(flag.to_string());
        cxxflags.push(flag.to_string());
    }

    let defines: Vec<String> = COMMON_DEFINES
        .iter()
        .map(|d| d.to_string())
        .chain(arch.defines)
        .map(|d| format!("-D{}", d))
        .collect();
    cflags.extend(defines.iter().cloned());
    cxxflags.extend(defines);

    let warnings: Vec<String> = std::iter::once(toolchain.warning_level)
        .chain(COMMON_WARNINGS.iter().copied())
        .map(String::from)
        .collect();
    cflags.extend(warnings.iter().cloned());
    cxxflags.extend(warnings);

    cxxflags.extend(CXX_WARNINGS.iter().map(|s| s.to_string()));
    if features.force_cxx {
        cflags.extend(CXX_WARNINGS.iter().map(|s| s.to_string()));
    }

    debug_println!("[DEBUG flags] C flags: {:?}", cflags);
    debug_println!("[DEBUG flags] C++ flags: {:?}", cxxflags);
    FlagSet {
        c: cflags,
        cxx: cxxflags,
    }
}
