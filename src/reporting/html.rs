//! # HTML Reporting Module / HTML 报告模块
//!
//! This module handles the generation of HTML test reports.
//! It creates a single styled HTML file with the run summary, one row per
//! suite, and the details of every failed test.
//!
//! 此模块处理 HTML 测试报告的生成。
//! 它创建单个带样式的 HTML 文件，包含运行摘要、每个套件一行的表格，
//! 以及每个失败测试的详细信息。

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::fs;
use std::path::Path;

use crate::core::models::RunReport;
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Generates an HTML report from a finished run.
///
/// # Arguments / 参数
/// * `report` - The run report to render / 要渲染的运行报告
/// * `output_path` - The file path where the HTML report will be saved
///                   保存 HTML 报告的文件路径
///
/// # Errors / 错误
/// Returns an error if the output file cannot be written.
/// 如果无法写入输出文件则返回错误。
pub fn generate_html_report(report: &RunReport, output_path: &Path) -> Result<()> {
    let markup = render_report(report);
    fs::write(output_path, markup.into_string())
        .with_context(|| format!("Failed to write HTML report to {}", output_path.display()))?;
    Ok(())
}

fn render_report(report: &RunReport) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (t!("html_report.title")) }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                h1 { (t!("html_report.main_header")) }
                p class="meta" {
                    (t!(
                        "html_report.generated_at",
                        time = report.generated_at.format("%Y-%m-%d %H:%M:%S")
                    ))
                }
                p class="meta" {
                    (t!("html_report.command_line")) " " code { (report.command) }
                }

                div class="summary" {
                    (summary_card(&t!("html_report.summary.total"), report.total_cases(), "total"))
                    (summary_card(&t!("html_report.summary.passed"), report.total_passed(), "passed"))
                    (summary_card(&t!("html_report.summary.failed"), report.total_failed(), "failed"))
                    (summary_card(&t!("html_report.summary.skipped"), report.total_skipped(), "skipped"))
                }

                table {
                    thead {
                        tr {
                            th { (t!("html_report.table.header.suite")) }
                            th { (t!("html_report.table.header.total")) }
                            th { (t!("html_report.table.header.passed")) }
                            th { (t!("html_report.table.header.failed")) }
                            th { (t!("html_report.table.header.skipped")) }
                            th { (t!("html_report.table.header.failed_rate")) }
                        }
                    }
                    tbody {
                        @for suite in &report.suites {
                            tr {
                                td { (suite.kind.label()) }
                                td { (suite.total) }
                                td class="passed" { (suite.passed) }
                                td class=(if suite.failed.is_empty() { "" } else { "failed" }) {
                                    (suite.failed_count())
                                }
                                td { (suite.skipped) }
                                td { (format!("{:.2}%", suite.failed_percent())) }
                            }
                        }
                    }
                }

                h2 { (t!("html_report.failed_tests_header")) }
                @if report.has_failures() {
                    table {
                        thead {
                            tr {
                                th { (t!("html_report.failed_table.header.id")) }
                                th { (t!("html_report.failed_table.header.args")) }
                                th { (t!("html_report.failed_table.header.output")) }
                                th { (t!("html_report.failed_table.header.expected")) }
                            }
                        }
                        tbody {
                            @for suite in &report.suites {
                                @for failed in &suite.failed {
                                    tr {
                                        td { (failed.id) }
                                        td { code { (failed.args) } }
                                        td { code { (failed.output) } }
                                        td { code { (failed.expected) } }
                                    }
                                }
                            }
                        }
                    }
                } @else {
                    p class="no-failures" { (t!("html_report.no_failures")) }
                }
            }
        }
    }
}

fn summary_card(label: &str, count: usize, class: &str) -> Markup {
    html! {
        div class={ "card " (class) } {
            span class="count" { (count) }
            span class="label" { (label) }
        }
    }
}
