//! User-visible text in both supported languages

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PtreeError, ReadFailure};

/// Display language for indicators, messages and help.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Chinese
    #[default]
    Zh,
    /// English
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "zh" => Some(Language::Zh),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Language::Zh => &ZH,
            Language::En => &EN,
        }
    }
}

/// Static message table for one language.
pub struct Messages {
    pub description: &'static str,
    pub path_help: &'static str,
    pub depth_help: &'static str,
    pub exclude_help: &'static str,
    pub types_help: &'static str,
    pub no_color_help: &'static str,
    pub set_color_help: &'static str,
    pub set_lang_help: &'static str,
    pub version_help: &'static str,
    pub dir_indicator: &'static str,
    pub file_indicator: &'static str,
    pub interrupt_prompt_win: &'static str,
    pub interrupt_prompt_other: &'static str,
    pub program_terminated: &'static str,
    pub continue_running: &'static str,
    error_handler_interrupt: &'static str,
    permission_denied: &'static str,
    file_not_found: &'static str,
    error_generic: &'static str,
    error_path_not_exists: &'static str,
    error_not_directory: &'static str,
    error_depth_negative: &'static str,
    directory_tree: &'static str,
    filter_types: &'static str,
    color_updated: &'static str,
    color_on: &'static str,
    color_off: &'static str,
    language_updated: &'static str,
    settings_save_failed: &'static str,
}

static ZH: Messages = Messages {
    description: "显示清晰的目录树结构，支持自定义深度、排除选项和文件类型筛选。",
    path_help: "起始目录路径（默认：当前工作目录）",
    depth_help: "最大遍历深度",
    exclude_help: "要排除的文件夹或文件名称列表",
    types_help: "要显示的文件类型（不带点，如: txt py）",
    no_color_help: "禁用颜色显示，使用文本标识（[目录]/[文件]）",
    set_color_help: "设置默认颜色显示模式（on/off）",
    set_lang_help: "设置默认语言（zh/en）",
    version_help: "显示版本信息",
    dir_indicator: "[目录] ",
    file_indicator: "[文件] ",
    interrupt_prompt_win: "是否终止批处理作业? (是/否): ",
    interrupt_prompt_other: "是否终止程序? (是/否): ",
    program_terminated: "程序已终止。",
    continue_running: "继续运行...",
    error_handler_interrupt: "处理中断时出错: {e}",
    permission_denied: "[权限不足] {name}",
    file_not_found: "[未找到] {name}",
    error_generic: "[错误] {name}: {msg}",
    error_path_not_exists: "错误：路径 '{path}' 不存在。",
    error_not_directory: "错误：'{path}' 不是一个目录。",
    error_depth_negative: "错误：深度不能为负数，得到 {depth}。",
    directory_tree: "目录树: {path}",
    filter_types: "筛选类型: {types}",
    color_updated: "默认颜色设置已更新为: {state}",
    color_on: "启用",
    color_off: "禁用",
    language_updated: "默认语言已更新为: {lang}",
    settings_save_failed: "保存配置文件失败: {e}",
};

static EN: Messages = Messages {
    description: "Display a clear directory tree with custom depth, exclusion, and file type filtering.",
    path_help: "Starting directory path (default: current working directory)",
    depth_help: "Maximum traversal depth",
    exclude_help: "List of folder/file names to exclude",
    types_help: "File types to display (without dot, e.g., txt py)",
    no_color_help: "Disable color, use text indicators ([Dir]/[File])",
    set_color_help: "Set default color display mode (on/off)",
    set_lang_help: "Set default language (zh/en)",
    version_help: "Show version information",
    dir_indicator: "[Dir] ",
    file_indicator: "[File] ",
    interrupt_prompt_win: "Terminate batch job? (yes/no): ",
    interrupt_prompt_other: "Terminate program? (yes/no): ",
    program_terminated: "Program terminated.",
    continue_running: "Continuing running...",
    error_handler_interrupt: "Error handling interrupt: {e}",
    permission_denied: "[Permission Denied] {name}",
    file_not_found: "[Not Found] {name}",
    error_generic: "[Error] {name}: {msg}",
    error_path_not_exists: "Error: Path '{path}' does not exist.",
    error_not_directory: "Error: '{path}' is not a directory.",
    error_depth_negative: "Error: Depth cannot be negative, got {depth}.",
    directory_tree: "Directory tree: {path}",
    filter_types: "Filter types: {types}",
    color_updated: "Default color setting updated to: {state}",
    color_on: "enabled",
    color_off: "disabled",
    language_updated: "Default language updated to: {lang}",
    settings_save_failed: "Failed to save config file: {e}",
};

impl Messages {
    /// Inline annotation for a directory that could not be read.
    pub fn read_failure(&self, name: &str, failure: &ReadFailure) -> String {
        match failure {
            ReadFailure::PermissionDenied => self.permission_denied.replace("{name}", name),
            ReadFailure::NotFound => self.file_not_found.replace("{name}", name),
            ReadFailure::Other(msg) => self
                .error_generic
                .replace("{name}", name)
                .replace("{msg}", msg),
        }
    }

    /// Message printed on stderr for a fatal error.
    pub fn fatal(&self, err: &PtreeError) -> String {
        match err {
            PtreeError::PathNotFound(path) => self
                .error_path_not_exists
                .replace("{path}", &path.display().to_string()),
            PtreeError::NotADirectory(path) => self
                .error_not_directory
                .replace("{path}", &path.display().to_string()),
            PtreeError::InvalidDepth(depth) => self
                .error_depth_negative
                .replace("{depth}", &depth.to_string()),
            other => self.settings_save_failed.replace("{e}", &other.to_string()),
        }
    }

    pub fn directory_tree(&self, path: &str) -> String {
        self.directory_tree.replace("{path}", path)
    }

    pub fn filter_types(&self, types: &[String]) -> String {
        self.filter_types.replace("{types}", &types.join(", "))
    }

    pub fn interrupt_error(&self, e: &str) -> String {
        self.error_handler_interrupt.replace("{e}", e)
    }

    pub fn color_updated(&self, use_color: bool) -> String {
        let state = if use_color { self.color_on } else { self.color_off };
        self.color_updated.replace("{state}", state)
    }

    pub fn language_updated(&self, language: Language) -> String {
        self.language_updated.replace("{lang}", language.code())
    }

    /// Prompt shown when the user presses Ctrl-C.
    pub fn interrupt_prompt(&self) -> &'static str {
        if cfg!(windows) {
            self.interrupt_prompt_win
        } else {
            self.interrupt_prompt_other
        }
    }
}
