use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

// 全局调试控制标志，默认关闭
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// 设置调试模式
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::Relaxed);
}

/// 获取当前调试模式状态
pub fn is_debug_mode() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

/// 创建一个条件打印宏，只有在调试模式下才会打印
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::is_debug_mode() {
            println!($($arg)*);
        }
    };
}

/// 逻辑上计算绝对路径（不解析符号链接，也不要求路径存在）
/// 替代 std::fs::canonicalize，避免将映射驱动器解析为 UNC 路径
pub fn compute_absolute_path(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    // 逻辑消除 ".." 和 "."
    let mut clean_path = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                clean_path.pop();
            }
            Component::Normal(c) => {
                clean_path.push(c);
            }
            Component::RootDir => {
                clean_path.push(Component::RootDir.as_os_str());
            }
            Component::Prefix(prefix) => {
                clean_path.push(Component::Prefix(prefix).as_os_str());
            }
            Component::CurDir => {}
        }
    }

    if clean_path.as_os_str().is_empty() {
        Ok(PathBuf::from("."))
    } else {
        Ok(clean_path)
    }
}

/// 辅助函数：如果路径包含空格，则用引号包裹
pub fn quote_if_needed(path: &str) -> String {
    if path.contains(' ') {
        format!("\"{}\"", path)
    } else {
        path.to_string()
    }
}

/// 把路径转成命令行里使用的字符串
/// 非 UTF-8 路径直接报错，不做有损替换
pub fn path_to_string(path: &Path) -> Result<String> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| Error::NonUtf8Path(path.to_path_buf()))
}
