//! # Command Execution Module / 命令执行模块
//!
//! This module spawns child processes and captures their output, racing the
//! child against a cancellation token so a stopped run does not leave
//! processes behind.
//!
//! 此模块派生子进程并捕获其输出，同时让子进程与取消令牌竞争，
//! 这样被停止的运行不会遗留进程。

use std::process::Stdio;
use tokio_util::sync::CancellationToken;

/// The outcome of a captured child process.
/// 被捕获子进程的结果。
#[derive(Debug)]
pub enum Captured {
    /// The process ran to completion. / 进程运行完成。
    Finished {
        status: std::process::ExitStatus,
        stdout: String,
        stderr: String,
    },
    /// The stop token fired before the process finished; the child was killed.
    /// 停止令牌在进程完成前触发；子进程已被杀死。
    Cancelled,
}

/// Spawns a command and captures its stdout and stderr separately.
///
/// The caller is expected to have set `kill_on_drop` on the command: when the
/// stop token fires first, the child's future is dropped and the process is
/// reaped by tokio.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
/// * `stop_token` - Cancels the child when it fires.
///
/// 派生一个命令并分别捕获其 stdout 和 stderr。
///
/// 调用方应当已在命令上设置 `kill_on_drop`：当停止令牌先触发时，
/// 子进程的 future 被丢弃，进程由 tokio 回收。
///
/// # Arguments
/// * `cmd` - 要执行的 `tokio::process::Command`。
/// * `stop_token` - 触发时取消子进程。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
    stop_token: &CancellationToken,
) -> std::io::Result<Captured> {
    // Work that was cancelled before it started never spawns at all.
    // 在开始前已被取消的工作根本不会派生进程。
    if stop_token.is_cancelled() {
        return Ok(Captured::Cancelled);
    }

    // Configure the command to capture stdout and stderr.
    // 配置命令以捕获 stdout 和 stderr。
    let child = cmd.stdout(Stdio::piped()).stderr(Stdio::piped()).spawn()?;

    tokio::select! {
        biased;
        _ = stop_token.cancelled() => Ok(Captured::Cancelled),
        output = child.wait_with_output() => {
            let output = output?;
            Ok(Captured::Finished {
                status: output.status,
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}
