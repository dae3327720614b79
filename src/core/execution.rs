//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! This module provides the core functionality for executing test cases.
//! It parses the configured command string into an invocation and runs a
//! single case against the executable under test, comparing its stdout
//! against the expected answer.
//!
//! 此模块为执行测试用例提供核心功能。
//! 它将配置的命令字符串解析为调用，并针对被测可执行文件运行单个用例，
//! 将其标准输出与预期答案进行比较。

use anyhow::{Context, Result};
use std::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::{
    core::models::{TestCase, TestResult},
    infra::command::{self, Captured},
};

/// The parsed form of the configured command string: the program to spawn,
/// its leading arguments, and the raw string for display and clipboard use.
///
/// 配置命令字符串的解析形式：要派生的程序、其前置参数，
/// 以及用于显示和剪贴板的原始字符串。
#[derive(Debug, Clone)]
pub struct Invocation {
    raw: String,
    program: String,
    args: Vec<String>,
}

impl Invocation {
    /// Parses a command string into an invocation. `~` and `$VAR` references
    /// are expanded and shell-style quoting is honored.
    ///
    /// 将命令字符串解析为调用。展开 `~` 和 `$VAR` 引用，
    /// 并遵循 shell 风格的引号。
    pub fn parse(raw: &str) -> Result<Self> {
        let expanded = shellexpand::full(raw)
            .with_context(|| format!("Failed to expand command: {raw}"))?
            .to_string();

        let parts = shlex::split(&expanded)
            .ok_or_else(|| anyhow::anyhow!("Failed to parse command: {}", expanded))?;

        if parts.is_empty() {
            return Err(anyhow::anyhow!("Empty command after parsing."));
        }

        let mut parts = parts.into_iter();
        let program = parts.next().unwrap_or_default();

        Ok(Self {
            raw: raw.to_string(),
            program,
            args: parts.collect(),
        })
    }

    /// The command string exactly as configured, unexpanded.
    /// 与配置完全一致的命令字符串，未展开。
    pub fn display(&self) -> &str {
        &self.raw
    }

    /// The full command line of one case, as pasted to the clipboard. It uses
    /// the unexpanded command string so the shell re-expands it on paste.
    ///
    /// 单个用例的完整命令行，用于粘贴到剪贴板。使用未展开的命令字符串，
    /// 以便 shell 在粘贴时重新展开。
    pub fn command_line(&self, args_joined: &str) -> String {
        format!("{} {}", self.raw, args_joined)
    }
}

/// Runs a single test case against the executable under test.
///
/// The case's arguments are appended to the invocation and the child's
/// trimmed stdout is compared against the expected answer. The exit status of
/// the child is deliberately ignored, and so is its stderr: only stdout
/// decides the result. A case cancelled by the stop token becomes `Skipped`.
///
/// # Arguments
/// * `case` - The test case to execute
/// * `invocation` - The parsed command for the executable under test
/// * `stop_token` - Cancels the case when it fires
///
/// 针对被测可执行文件运行单个测试用例。
///
/// 用例的参数被附加到调用后面，子进程裁剪后的标准输出与预期答案比较。
/// 子进程的退出状态被有意忽略，标准错误也是如此：只有标准输出决定结果。
/// 被停止令牌取消的用例记为 `Skipped`。
pub async fn run_test_case(
    case: TestCase,
    invocation: &Invocation,
    stop_token: &CancellationToken,
) -> Result<TestResult> {
    let start_time = Instant::now();

    let mut cmd = tokio::process::Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .args(&case.args)
        .kill_on_drop(true);

    let captured = command::spawn_and_capture(cmd, stop_token)
        .await
        .with_context(|| format!("Failed to run '{}'", invocation.program))?;

    match captured {
        Captured::Cancelled => Ok(TestResult::Skipped { case }),
        Captured::Finished { stdout, .. } => {
            let duration = start_time.elapsed();
            let output = stdout.trim().to_string();
            if output == case.expected {
                Ok(TestResult::Passed { case, duration })
            } else {
                Ok(TestResult::Failed {
                    case,
                    output,
                    duration,
                })
            }
        }
    }
}
