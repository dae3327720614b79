//! # Console Reporting Module / 控制台报告模块
//!
//! This module handles the live progress line and the final report blocks in
//! the console, with internationalization support.
//!
//! 此模块处理控制台中的实时进度行和最终报告块，支持国际化。
//!
//! # Output Format / 输出格式
//! ```text
//! Ran 9 tests for addition (good: 8, bad: 1)
//!
//! ---- RESULTS ----
//! Tests for addition
//! Successful: 8
//! Failed: 1 (11.11%)
//!     Test #5
//!
//! ---- TOTAL ----
//! Successful: 42
//! Failed: 1 (2.33%)
//! ```

use colored::*;
use std::io::{self, Write};

use crate::core::models::{FailedCase, RunReport, SuiteReport};
use crate::infra::t;

/// The in-place progress line of a running suite. The line is redrawn with a
/// carriage return on every update and blanked before the suite footer, so a
/// finished suite leaves no progress residue behind.
///
/// 正在运行的套件的原地进度行。每次更新都用回车符重绘该行，
/// 并在套件结束行之前清空，因此完成的套件不会留下进度残留。
pub struct Progress {
    /// Whether the current console line still holds a progress line.
    /// 当前控制台行是否仍是进度行。
    active: bool,
}

impl Progress {
    pub fn new() -> Self {
        Self { active: false }
    }

    /// Redraws the progress line with the current counts.
    /// 使用当前计数重绘进度行。
    pub fn update(&mut self, kind_label: &str, done: usize, total: usize, good: usize, bad: usize) {
        print!(
            "\r{}     ",
            t!(
                "run.progress",
                kind = kind_label,
                done = done,
                total = total,
                good = good,
                bad = bad
            )
        );
        let _ = io::stdout().flush();
        self.active = true;
    }

    /// Overwrites the progress line with the detail of a failed case and
    /// moves to a fresh line.
    ///
    /// 用失败用例的详细信息覆盖进度行，并换到新行。
    pub fn fail_line(&mut self, failed: &FailedCase) {
        let detail = t!(
            "run.failure_detail",
            id = failed.id,
            args = failed.args,
            output = failed.output,
            answer = failed.expected
        );
        println!("\r{}{}", detail.red(), " ".repeat(12));
        self.active = false;
    }

    /// Blanks a leftover progress line, leaving the cursor at the line start.
    /// 清空残留的进度行，将光标留在行首。
    pub fn finish(&mut self) {
        if self.active {
            print!("{}\r", " ".repeat(120));
            let _ = io::stdout().flush();
            self.active = false;
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints the one-line summary of a finished suite.
/// 打印已完成套件的单行摘要。
pub fn print_suite_footer(report: &SuiteReport) {
    println!(
        "{}{}",
        t!(
            "run.suite_footer",
            total = report.total,
            kind = report.kind.label(),
            good = report.passed,
            bad = report.failed_count()
        ),
        " ".repeat(20)
    );
}

/// Prints the final report: one block per executed suite, and a total block
/// when more than one suite ran.
///
/// Suites with fewer than 15 failures list the failed test ids; beyond that
/// the listing is omitted to keep the report readable.
///
/// 打印最终报告：每个已执行套件一个块，运行了多个套件时再加一个总计块。
///
/// 失败少于 15 个的套件会列出失败测试的标识；超过则省略列表以保持报告可读。
pub fn print_run_report(report: &RunReport) {
    println!("\n{}", t!("report.results_banner").bold());
    for suite in &report.suites {
        print_suite_block(suite);
    }

    if report.suites.len() > 1 {
        println!("{}", t!("report.total_banner").bold());
        println!("{}", t!("report.successful", count = report.total_passed()));
        let failed_line = t!(
            "report.failed",
            count = report.total_failed(),
            percent = format!("{:.2}", report.failed_percent())
        );
        if report.has_failures() {
            println!("{}", failed_line.red());
        } else {
            println!("{}", failed_line);
        }
        if report.total_skipped() > 0 {
            println!(
                "{}",
                t!("report.skipped", count = report.total_skipped()).dimmed()
            );
        }
    }
}

fn print_suite_block(suite: &SuiteReport) {
    println!("{}", t!("report.suite_header", kind = suite.kind.label()));
    println!("{}", t!("report.successful", count = suite.passed));

    let failed_line = t!(
        "report.failed",
        count = suite.failed_count(),
        percent = format!("{:.2}", suite.failed_percent())
    );
    if suite.failed.is_empty() {
        println!("{}", failed_line);
    } else {
        println!("{}", failed_line.red());
    }

    if suite.skipped > 0 {
        println!("{}", t!("report.skipped", count = suite.skipped).dimmed());
    }

    if suite.failed_count() < 15 {
        for failed in &suite.failed {
            println!("{}", t!("report.failed_case", id = failed.id));
        }
    }
    println!();
}
