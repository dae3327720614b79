// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

/// Creates a fixture directory with a `Fixtures.toml` that drives `echo`,
/// plus the two parallel fixture files built from the given lines.
///
/// 创建一个测试用例目录，其中的 `Fixtures.toml` 驱动 `echo`，
/// 以及由给定行构建的两个并列测试用例文件。
pub fn setup_fixture_dir(tests_lines: &[&str], answers_lines: &[&str]) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");

    let config_content = r#"command = "echo"
tests = "fp_tests.txt"
answers = "fp_answers.txt"
language = "en"
"#;
    fs::write(temp_dir.path().join("Fixtures.toml"), config_content)
        .expect("Failed to write Fixtures.toml");
    write_fixture_files(&temp_dir, tests_lines, answers_lines);

    temp_dir
}

/// Writes the two parallel fixture files into an existing directory.
pub fn write_fixture_files(temp_dir: &TempDir, tests_lines: &[&str], answers_lines: &[&str]) {
    fs::write(
        temp_dir.path().join("fp_tests.txt"),
        format!("{}\n", tests_lines.join("\n")),
    )
    .expect("Failed to write fp_tests.txt");
    fs::write(
        temp_dir.path().join("fp_answers.txt"),
        format!("{}\n", answers_lines.join("\n")),
    )
    .expect("Failed to write fp_answers.txt");
}

pub fn config_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("Fixtures.toml")
}

/// Generates `count` addition cases that `echo` reproduces verbatim, so
/// every case passes.
///
/// 生成 `count` 个 `echo` 会原样复现的加法用例，因此所有用例都会通过。
pub fn passing_addition_lines(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{i} 1 + {i} {i}")).collect()
}

/// Creates a fixture directory with `count` generated addition cases.
pub fn setup_generated_fixture_dir(count: usize) -> TempDir {
    let lines = passing_addition_lines(count);
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    setup_fixture_dir(&refs, &refs)
}
