//! # Configuration Module / 配置模块
//!
//! This module defines the runner configuration loaded from a TOML file:
//! the command that runs the executable under test and the locations of the
//! two fixture files.
//!
//! 此模块定义了从 TOML 文件加载的运行器配置：
//! 运行被测可执行文件的命令，以及两个测试用例文件的位置。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The runner configuration, loaded from a `Fixtures.toml` file.
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration.
///
/// 从 `Fixtures.toml` 文件加载的运行器配置。
/// 每个字段都有默认值，因此空文件（甚至没有文件）也是有效配置。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunnerConfig {
    /// The command string that runs the executable under test. It may contain
    /// shell-style quoting and `~`/`$VAR` references, which are expanded when
    /// the command is parsed.
    ///
    /// 运行被测可执行文件的命令字符串。可以包含 shell 风格的引号
    /// 以及 `~`/`$VAR` 引用，在解析命令时展开。
    #[serde(default = "default_command")]
    pub command: String,
    /// The file with one test invocation per line.
    /// Relative paths are resolved against the configuration file's directory.
    ///
    /// 每行一个测试调用的文件。
    /// 相对路径相对于配置文件所在目录解析。
    #[serde(default = "default_tests_file")]
    pub tests: PathBuf,
    /// The file with one expected answer per line, parallel to `tests`.
    /// 每行一个预期答案的文件，与 `tests` 并列。
    #[serde(default = "default_answers_file")]
    pub answers: PathBuf,
    /// The language for the runner's output messages (e.g. "en", "zh-CN").
    /// When not set, the system locale is used.
    ///
    /// 运行器输出消息的语言（例如 "en"、"zh-CN"）。
    /// 未设置时使用系统区域设置。
    #[serde(default)]
    pub language: Option<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            tests: default_tests_file(),
            answers: default_answers_file(),
            language: None,
        }
    }
}

fn default_command() -> String {
    "./a.out".to_string()
}

fn default_tests_file() -> PathBuf {
    PathBuf::from("fp_tests.txt")
}

fn default_answers_file() -> PathBuf {
    PathBuf::from("fp_answers.txt")
}

/// Loads and parses a runner configuration file.
///
/// 加载并解析运行器配置文件。
pub fn load_runner_config(path: &Path) -> Result<RunnerConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let config: RunnerConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;
    Ok(config)
}
