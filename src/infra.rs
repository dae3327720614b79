//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the fixture runner,
//! including command execution, clipboard access, file system helpers, and
//! i18n support.
//!
//! 此模块为运行器提供基础设施服务，
//! 包括命令执行、剪贴板访问、文件系统辅助功能和国际化支持。

pub mod clipboard;
pub mod command;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
