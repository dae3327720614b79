//! # Error Handling Integration Tests / 错误处理集成测试
//!
//! This module contains integration tests for the runner's error paths:
//! broken configurations, broken fixture files, and missing executables.
//! Every scenario must produce a clear error instead of a crash.
//!
//! 此模块包含运行器错误路径的集成测试：
//! 损坏的配置、损坏的测试用例文件和缺失的可执行文件。
//! 每种场景都必须产生清晰的错误，而不是崩溃。

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

mod common;

fn runner() -> Command {
    let mut cmd = Command::cargo_bin("fixture-runner").unwrap();
    cmd.arg("run").arg("--lang").arg("en");
    cmd
}

#[cfg(test)]
mod config_error_tests {
    use super::*;

    /// An explicitly passed configuration path must exist.
    #[test]
    fn test_explicit_missing_config_fails() {
        let mut cmd = runner();
        cmd.arg("--config").arg("does_not_exist.toml");

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("does_not_exist.toml"));
    }

    /// Invalid TOML in the configuration file is reported with the path.
    #[test]
    fn test_invalid_toml_config_fails() {
        let temp_dir = tempdir().unwrap();
        let config = temp_dir.path().join("broken.toml");
        fs::write(&config, "command = \"echo\"\ntests = [unclosed\n").unwrap();

        let mut cmd = runner();
        cmd.arg("--config").arg(&config);

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Failed to parse configuration file"));
    }

    /// A wrongly typed field is a parse error, not a silent default.
    #[test]
    fn test_wrong_field_type_fails() {
        let temp_dir = tempdir().unwrap();
        let config = temp_dir.path().join("typed.toml");
        fs::write(&config, "command = 42\n").unwrap();

        let mut cmd = runner();
        cmd.arg("--config").arg(&config);

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Failed to parse configuration file"));
    }
}

#[cfg(test)]
mod fixture_error_tests {
    use super::*;

    /// A missing tests file is reported with its resolved path.
    #[test]
    fn test_missing_tests_file_fails() {
        let temp_dir = common::setup_fixture_dir(&["1 0 7"], &["1 0 7"]);
        fs::remove_file(temp_dir.path().join("fp_tests.txt")).unwrap();

        let mut cmd = runner();
        cmd.arg("--config").arg(common::config_path(&temp_dir));

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read tests file"));
    }

    /// A missing answers file is reported with its resolved path.
    #[test]
    fn test_missing_answers_file_fails() {
        let temp_dir = common::setup_fixture_dir(&["1 0 7"], &["1 0 7"]);
        fs::remove_file(temp_dir.path().join("fp_answers.txt")).unwrap();

        let mut cmd = runner();
        cmd.arg("--config").arg(common::config_path(&temp_dir));

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read answers file"));
    }

    /// Mismatched line counts between the two fixture files are a hard
    /// error naming both counts, never a silent truncation.
    ///
    /// 两个测试用例文件的行数不匹配是一个硬错误，会同时给出两个数量，
    /// 绝不会被静默截断。
    #[test]
    fn test_mismatched_fixture_lengths_fail() {
        let temp_dir = common::setup_fixture_dir(&["1 0 7", "2 0 7"], &["1 0 7"]);

        let mut cmd = runner();
        cmd.arg("--config").arg(common::config_path(&temp_dir));

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("2 test line(s) but 1 answer line(s)"));
    }

    /// A blank interior test line names its 1-based line number.
    #[test]
    fn test_blank_test_line_fails() {
        let temp_dir =
            common::setup_fixture_dir(&["1 0 7", "", "3 0 7"], &["1 0 7", "x", "3 0 7"]);

        let mut cmd = runner();
        cmd.arg("--config").arg(common::config_path(&temp_dir));

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Test line 2 is blank"));
    }

    /// A test line with too few fields names its line number.
    #[test]
    fn test_short_test_line_fails() {
        let temp_dir = common::setup_fixture_dir(&["1 0 7", "1 2"], &["1 0 7", "3"]);

        let mut cmd = runner();
        cmd.arg("--config").arg(common::config_path(&temp_dir));

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Test line 2 has 2 field(s)"));
    }

    /// A loader error keeps its full context chain on stderr: the message
    /// names the fixture files and still carries the underlying cause.
    ///
    /// 加载器错误在 stderr 上保留完整的上下文链：
    /// 消息会给出测试用例文件名，并且仍然带有底层原因。
    #[test]
    fn test_loader_error_keeps_cause() {
        let temp_dir = common::setup_fixture_dir(&["1 0 7", "2 0 7"], &["1 0 7"]);

        let mut cmd = runner();
        cmd.arg("--config").arg(common::config_path(&temp_dir));

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load test fixtures from"))
            .stderr(predicate::str::contains("2 test line(s) but 1 answer line(s)"));
    }

    /// An entirely empty tests file is an error.
    #[test]
    fn test_empty_tests_file_fails() {
        let temp_dir = common::setup_fixture_dir(&[""], &[""]);

        let mut cmd = runner();
        cmd.arg("--config").arg(common::config_path(&temp_dir));

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("no test cases"));
    }
}

#[cfg(test)]
mod executable_error_tests {
    use super::*;

    /// A missing executable aborts the whole run with the program name.
    #[test]
    fn test_missing_executable_fails() {
        let temp_dir = common::setup_fixture_dir(&["1 0 7"], &["1 0 7"]);

        let mut cmd = runner();
        cmd.arg("--config")
            .arg(common::config_path(&temp_dir))
            .arg("--command")
            .arg("this_command_definitely_does_not_exist_12345");

        cmd.assert().failure().stderr(predicate::str::contains(
            "this_command_definitely_does_not_exist_12345",
        ));
    }

    /// An empty command string is rejected before anything is spawned.
    #[test]
    fn test_empty_command_fails() {
        let temp_dir = common::setup_fixture_dir(&["1 0 7"], &["1 0 7"]);

        let mut cmd = runner();
        cmd.arg("--config")
            .arg(common::config_path(&temp_dir))
            .arg("--command")
            .arg("");

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Empty command"));
    }
}
