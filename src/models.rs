use serde::Serialize;

/// 编译命令结构，用于生成compile_commands.json
/// 字段顺序即 JSON 中键的顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileCommand {
    pub directory: String,
    pub command: String,
    pub file: String,
}

/// 源文件语言，决定使用哪一组编译参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage {
    C,
    Cxx,
}

impl SourceLanguage {
    /// 根据扩展名（不含点）识别源文件，区分大小写
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "c" => Some(SourceLanguage::C),
            "cpp" | "cxx" => Some(SourceLanguage::Cxx),
            _ => None,
        }
    }
}

/// 每次调用时的特性开关，不做持久化
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    /// 启用 AVX2 (x86-64-v3) 并把最低系统版本提高到 Windows 7
    pub wide_vector: bool,
    /// 把 .c 文件当作 C++ 编译（matepath 的 C 源文件就是这样构建的）
    pub force_cxx: bool,
}

/// 一次调用中共享的编译参数：C 与 C++ 各一份
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSet {
    pub c: Vec<String>,
    pub cxx: Vec<String>,
}

impl FlagSet {
    pub fn for_language(&self, language: SourceLanguage) -> &[String] {
        match language {
            SourceLanguage::C => &self.c,
            SourceLanguage::Cxx => &self.cxx,
        }
    }
}
