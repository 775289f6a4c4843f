use crate::config::SourceLayout;
use crate::debug_println;
use crate::error::Result;
use crate::flags::resolve_flags;
use crate::models::{CompileCommand, FeatureFlags, FlagSet, SourceLanguage};
use crate::parser::TargetTriple;
use crate::utils::{compute_absolute_path, path_to_string, quote_if_needed};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 计算某个源码目录的 -I 参数，路径相对于该目录
fn include_flags(folder: &Path, includes: &[String]) -> Result<Vec<String>> {
    includes
        .iter()
        .map(|inc| -> Result<String> {
            let abs = compute_absolute_path(&folder.join(inc))?;
            let flag = format!("-I{}", quote_if_needed(&path_to_string(&abs)?));
            debug_println!("[DEBUG generator] Include flag: {}", flag);
            Ok(flag)
        })
        .collect()
}

/// 扫描单个目录（不递归），为每个 .c/.cpp/.cxx 文件追加一条编译命令
fn scan_directory(
    commands: &mut Vec<CompileCommand>,
    folder: &Path,
    flags: &FlagSet,
    includes: &[String],
    force_cxx: bool,
) -> Result<()> {
    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug_println!(
                "[DEBUG generator] Directory {} does not exist, skipping",
                folder.display()
            );
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let directory = path_to_string(folder)?;
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(language) = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(SourceLanguage::from_extension)
        else {
            continue;
        };

        // 强制 C++ 时 .c 文件也使用 C++ 参数
        let language = if force_cxx { SourceLanguage::Cxx } else { language };
        let file = path_to_string(&path)?;

        let mut arguments: Vec<&str> = flags
            .for_language(language)
            .iter()
            .map(String::as_str)
            .collect();
        arguments.extend(includes.iter().map(String::as_str));
        let quoted_file = quote_if_needed(&file);
        arguments.push(&quoted_file);

        let command = arguments.join(" ");
        debug_println!("[DEBUG generator] {} -> {}", file, command);
        commands.push(CompileCommand {
            directory: directory.clone(),
            command,
            file,
        });
    }
    Ok(())
}

/// 生成编译命令列表
///
/// 按目录表的声明顺序处理；同一目录内保持文件系统枚举顺序，不排序。
/// 目录不存在时该目录不产生任何记录。
pub fn generate_compile_commands(
    flags: &FlagSet,
    layout: &SourceLayout,
    base_dir: &Path,
    force_cxx: bool,
) -> Result<Vec<CompileCommand>> {
    debug_println!(
        "[DEBUG generator] Generating compile commands under {}",
        base_dir.display()
    );
    let mut commands = Vec::new();
    for dir in &layout.directories {
        let folder = compute_absolute_path(&base_dir.join(&dir.path))?;
        debug_println!("[DEBUG generator] Scanning {}", folder.display());
        let includes = include_flags(&folder, &dir.includes)?;
        scan_directory(&mut commands, &folder, flags, &includes, force_cxx)?;
    }
    debug_println!(
        "[DEBUG generator] Successfully generated {} compile commands",
        commands.len()
    );
    Ok(commands)
}

/// 序列化为 JSON Compilation Database 文本（制表符缩进，保留非 ASCII 字符）
pub fn render_compile_commands(commands: &[CompileCommand]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    commands.serialize(&mut ser)?;
    // serde_json 只输出合法 UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// 一次性整体写入，覆盖原有内容
pub fn write_compile_commands(path: &Path, commands: &[CompileCommand]) -> Result<()> {
    let content = render_compile_commands(commands)?;
    debug_println!(
        "[DEBUG generator] Writing {} bytes to {}",
        content.len(),
        path.display()
    );
    fs::write(path, content)?;
    Ok(())
}

/// 成功写出后打印的确认信息
pub fn generated_message(output: &Path, count: usize) -> String {
    format!("Generated {} ({} entries)", output.display(), count)
}

/// 完整流程：计算一次参数，扫描全部目录，写出 compile_commands.json
pub fn build_compile_database(
    target: &TargetTriple,
    features: FeatureFlags,
    layout: &SourceLayout,
    base_dir: &Path,
    output: &Path,
) -> Result<Vec<CompileCommand>> {
    let flags = resolve_flags(target, features);
    let commands = generate_compile_commands(&flags, layout, base_dir, features.force_cxx)?;
    write_compile_commands(output, &commands)?;
    Ok(commands)
}
