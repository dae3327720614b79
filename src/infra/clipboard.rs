//! # Clipboard Module / 剪贴板模块
//!
//! Copies text to the system clipboard by piping it into `xclip`.
//!
//! 通过管道将文本传给 `xclip`，复制到系统剪贴板。

use anyhow::{bail, Context, Result};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;

/// Copies the given text to the clipboard selection.
///
/// 将给定文本复制到剪贴板。
pub async fn copy(text: &str) -> Result<()> {
    let mut child = tokio::process::Command::new("xclip")
        .arg("-selection")
        .arg("clipboard")
        .stdin(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .context("Failed to launch xclip. Is it installed?")?;

    let mut stdin = child
        .stdin
        .take()
        .context("Failed to open stdin of xclip")?;
    stdin
        .write_all(text.as_bytes())
        .await
        .context("Failed to pipe text to xclip")?;
    // Close stdin so xclip takes ownership of the selection.
    drop(stdin);

    let status = child
        .wait()
        .await
        .context("Failed to wait for xclip to exit")?;
    if !status.success() {
        bail!("xclip exited with {}", status);
    }
    Ok(())
}
