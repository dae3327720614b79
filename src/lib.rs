//! # Fixture Runner Library / Fixture Runner 库
//!
//! This library provides the core functionality for the Fixture Runner tool,
//! a configuration-driven test harness that drives a compiled executable
//! through fixture files of test cases and reports pass/fail statistics.
//!
//! 此库为 Fixture Runner 工具提供核心功能，
//! 这是一个配置驱动的测试装具，使用测试用例文件驱动已编译的可执行文件，
//! 并报告通过/失败统计。
//!
//! ## Modules / 模块
//!
//! - `core` - Core data models, fixture loading, and test execution engine
//! - `infra` - Infrastructure services like command execution and clipboard access
//! - `reporting` - Test result reporting and visualization
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 核心数据模型、测试用例加载和测试执行引擎
//! - `infra` - 基础设施服务，如命令执行和剪贴板访问
//! - `reporting` - 测试结果报告和可视化
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use core::models;
pub use core::config;
pub use core::execution;
pub use core::loader;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
