//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command for the Fixture Runner CLI,
//! which drives the executable under test through the fixture suites and
//! reports the results.
//!
//! 此模块实现了 Fixture Runner CLI 的 `run` 命令，
//! 使用测试套件驱动被测可执行文件并报告结果。

use anyhow::Result;
use colored::*;
use futures::{stream, StreamExt};
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        config::{self, RunnerConfig},
        execution::{run_test_case, Invocation},
        loader,
        models::{FailedCase, OpKind, RunReport, SuiteReport, TestResult, TestSuite},
        planner,
    },
    infra::{self, clipboard, t},
    reporting::{
        console::{print_run_report, print_suite_footer, Progress},
        html::generate_html_report,
        json::write_json_report,
    },
};

/// Executes the run command with the provided arguments.
///
/// # Arguments
/// * `suite` - Optional suite selector; `None` runs every non-empty suite
/// * `quiet` - Suppresses the per-test failure details
/// * `fail_fast` - Aborts after the first failed test
/// * `jobs` - Number of test cases to run in parallel
/// * `config` - Path to the runner configuration file
/// * `config_is_explicit` - Whether the config path was given on the command line
/// * `command_override` - Overrides the configured executable command
/// * `html` - Optional path for HTML report output
/// * `json` - Optional path for JSON report output
///
/// # Returns
/// A Result indicating success or failure of the command execution
#[allow(clippy::too_many_arguments)]
pub async fn execute(
    suite: Option<OpKind>,
    quiet: bool,
    fail_fast: bool,
    jobs: Option<usize>,
    config: PathBuf,
    config_is_explicit: bool,
    command_override: Option<String>,
    html: Option<PathBuf>,
    json: Option<PathBuf>,
) -> Result<()> {
    let (runner_config, fixture_base) = setup_and_parse_config(&config, config_is_explicit)?;

    // An explicit --lang wins over the configured language.
    // 显式的 --lang 优先于配置中的语言。
    if let Some(lang) = &runner_config.language {
        if env::args().all(|arg| arg != "--lang") {
            rust_i18n::set_locale(lang);
        }
    }

    let command = command_override.unwrap_or_else(|| runner_config.command.clone());
    let invocation = Invocation::parse(&command)?;

    let tests_path = infra::fs::resolve_from(&fixture_base, &runner_config.tests);
    let answers_path = infra::fs::resolve_from(&fixture_base, &runner_config.answers);
    let cases = loader::load_cases(&tests_path, &answers_path)?;

    println!(
        "{}",
        t!("run.driving_command", command = invocation.display().yellow())
    );
    println!(
        "{}",
        t!(
            "run.loaded_cases",
            count = cases.len(),
            tests = tests_path.display(),
            answers = answers_path.display()
        )
    );

    let overall_stop_token = setup_signal_handler()?;

    let plan = planner::plan_execution(cases, suite)?;

    if plan.empty_kind_count > 0 {
        println!(
            "{}",
            t!("run.empty_suites_skipped", count = plan.empty_kind_count).cyan()
        );
    }

    let jobs = jobs.unwrap_or(num_cpus::get() / 2 + 1).max(1);
    if jobs > 1 {
        println!("{}", t!("run.jobs", jobs = jobs).cyan());
    }

    let mut suite_reports = Vec::with_capacity(plan.suites.len());
    for test_suite in plan.suites {
        let report = run_suite(
            test_suite,
            &invocation,
            jobs,
            quiet,
            fail_fast,
            &overall_stop_token,
        )
        .await?;
        suite_reports.push(report);
    }

    let report = RunReport::new(invocation.display().to_string(), suite_reports);
    print_run_report(&report);

    if let Some(report_path) = &html {
        println!("{}", t!("run.writing_html", path = report_path.display()));
        if let Err(e) = generate_html_report(&report, report_path) {
            eprintln!("{} {}", t!("run.html_failed").red(), e);
        }
    }
    if let Some(report_path) = &json {
        println!("{}", t!("run.writing_json", path = report_path.display()));
        if let Err(e) = write_json_report(&report, report_path) {
            eprintln!("{} {}", t!("run.json_failed").red(), e);
        }
    }

    if report.has_failures() {
        anyhow::bail!("Some tests failed.");
    }
    if !report.interrupted {
        println!("{}", t!("run.all_passed").green().bold());
    }
    Ok(())
}

/// Locates and parses the runner configuration.
///
/// A missing default configuration file is not an error: the runner then uses
/// the built-in defaults against the current directory. An explicitly passed
/// path must exist. The returned base directory anchors relative fixture
/// paths.
///
/// 定位并解析运行器配置。
///
/// 默认配置文件缺失不是错误：运行器会在当前目录使用内置默认值。
/// 显式传入的路径必须存在。返回的基目录用于解析相对的测试用例文件路径。
fn setup_and_parse_config(
    config_path_arg: &Path,
    config_is_explicit: bool,
) -> Result<(RunnerConfig, PathBuf)> {
    if !config_path_arg.exists() && !config_is_explicit {
        println!("{}", t!("run.using_defaults").cyan());
        return Ok((RunnerConfig::default(), PathBuf::from(".")));
    }

    let config_path = infra::fs::absolute_path(config_path_arg)?;
    let runner_config = config::load_runner_config(&config_path)?;
    println!(
        "{}",
        t!("run.using_config", path = config_path.display())
    );

    let base = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok((runner_config, base))
}

/// Sets up a signal handler for graceful shutdown.
fn setup_signal_handler() -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    tokio::spawn(async move {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl-C");
        println!("\n{}", t!("run.shutdown_signal").yellow());
        token_clone.cancel();
    });

    Ok(token)
}

/// Runs one suite, handling results as they complete.
///
/// Cases are fed through `buffer_unordered(jobs)`; with `jobs == 1` they run
/// strictly in file order. Failures are printed as they arrive unless quiet.
/// Under fail-fast the first failure copies its invocation to the clipboard
/// and aborts the whole run; dropping the stream kills any in-flight children.
///
/// 运行一个套件，边完成边处理结果。
///
/// 用例通过 `buffer_unordered(jobs)` 执行；`jobs == 1` 时严格按文件顺序运行。
/// 除非启用静默模式，失败会在到达时打印。快速失败模式下，
/// 第一个失败会将其调用命令复制到剪贴板并中止整次运行；
/// 丢弃流会杀死仍在运行的子进程。
async fn run_suite(
    suite: TestSuite,
    invocation: &Invocation,
    jobs: usize,
    quiet: bool,
    fail_fast: bool,
    overall_stop_token: &CancellationToken,
) -> Result<SuiteReport> {
    let kind = suite.kind;
    let kind_label = kind.label();
    let total = suite.len();

    let mut progress = Progress::new();
    progress.update(&kind_label, 0, total, 0, 0);

    let mut results = stream::iter(
        suite
            .cases
            .into_iter()
            .map(|case| run_test_case(case, invocation, overall_stop_token)),
    )
    .buffer_unordered(jobs);

    let mut passed = 0usize;
    let mut skipped = 0usize;
    let mut failed: Vec<FailedCase> = Vec::new();

    while let Some(result) = results.next().await {
        match result? {
            TestResult::Passed { .. } => passed += 1,
            TestResult::Skipped { .. } => skipped += 1,
            TestResult::Failed { case, output, .. } => {
                let failed_case = FailedCase {
                    id: case.id,
                    args: case.args_joined(),
                    output,
                    expected: case.expected,
                };

                // Fail-fast shows the aborting failure even in quiet mode.
                // 快速失败模式即使在静默模式下也会显示导致中止的失败。
                if !quiet || fail_fast {
                    progress.fail_line(&failed_case);
                }

                if fail_fast {
                    let command_line = invocation.command_line(&failed_case.args);
                    match clipboard::copy(&command_line).await {
                        Ok(()) => println!(
                            "{}",
                            t!("run.clipboard_copied", command = &command_line).yellow()
                        ),
                        Err(e) => {
                            eprintln!("{}", t!("run.clipboard_failed", error = e).yellow())
                        }
                    }
                    anyhow::bail!(t!("run.fail_fast_abort"));
                }

                failed.push(failed_case);
            }
        }

        let done = passed + skipped + failed.len();
        progress.update(&kind_label, done, total, passed, failed.len());
    }

    progress.finish();
    failed.sort_by_key(|f| f.id);

    let report = SuiteReport {
        kind,
        total,
        passed,
        skipped,
        failed,
    };
    print_suite_footer(&report);
    Ok(report)
}
