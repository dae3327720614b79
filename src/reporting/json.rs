//! # JSON Reporting Module / JSON 报告模块
//!
//! Serializes a finished run into a machine-readable JSON file.
//!
//! 将一次完成的运行序列化为机器可读的 JSON 文件。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::models::RunReport;

/// Writes the run report as pretty-printed JSON.
///
/// 将运行报告写为带缩进的 JSON。
pub fn write_json_report(report: &RunReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize run report")?;
    fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))?;
    Ok(())
}
