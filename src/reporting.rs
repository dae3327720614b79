//! # Reporting Module / 报告模块
//!
//! This module handles the generation and display of test reports in multiple
//! formats: the live console output, a styled HTML file, and machine-readable
//! JSON.
//!
//! 此模块处理多种格式的测试报告生成和显示：
//! 实时控制台输出、带样式的 HTML 文件和机器可读的 JSON。

pub mod console;
pub mod html;
pub mod json;

// Re-export common reporting functions
pub use console::{print_run_report, print_suite_footer, Progress};
pub use html::generate_html_report;
pub use json::write_json_report;
