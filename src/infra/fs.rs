//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides small path utilities used when locating the
//! configuration file and the fixture files it refers to.
//!
//! 此模块提供小型路径工具，
//! 用于定位配置文件及其引用的测试用例文件。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}

/// Resolves a possibly relative path against a base directory. Fixture paths
/// in the configuration are relative to the configuration file, not to the
/// current working directory.
///
/// 将可能为相对的路径相对于基目录解析。配置中的测试用例文件路径
/// 相对于配置文件本身，而不是当前工作目录。
pub fn resolve_from(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
