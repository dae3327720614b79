//! # Fixture Loader Module / 测试用例加载模块
//!
//! Parses the two parallel fixture files into test cases: one file with the
//! argument line of each invocation, one file with the expected answer.
//!
//! 将两个并列的测试用例文件解析为测试用例：
//! 一个文件包含每次调用的参数行，另一个文件包含预期答案。

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::core::models::{OpKind, TestCase};

/// Parses the contents of the tests file and the answers file into test cases.
///
/// Both sources are trimmed as a whole first, so leading and trailing blank
/// lines are ignored. The remaining lines must pair up one to one. A test line
/// with exactly three fields is a printing case; with more fields, the third
/// field selects the operation, falling back to printing when it is not a
/// recognized operator. Ids are the 1-based line numbers.
///
/// 将测试文件和答案文件的内容解析为测试用例。
///
/// 两个来源首先作为整体裁剪，因此开头和结尾的空行会被忽略。
/// 其余的行必须一一配对。恰好有三个字段的测试行是打印用例；
/// 字段更多时，第三个字段选择操作种类，无法识别的操作符回退为打印。
/// 标识为从 1 开始的行号。
pub fn parse_cases(tests_src: &str, answers_src: &str) -> Result<Vec<TestCase>> {
    let test_lines: Vec<&str> = tests_src.trim().lines().map(str::trim).collect();
    let answer_lines: Vec<&str> = answers_src.trim().lines().map(str::trim).collect();

    if test_lines.is_empty() {
        bail!("The tests file contains no test cases.");
    }
    if test_lines.len() != answer_lines.len() {
        bail!(
            "The fixture files do not pair up: {} test line(s) but {} answer line(s).",
            test_lines.len(),
            answer_lines.len()
        );
    }

    let mut cases = Vec::with_capacity(test_lines.len());
    for (index, (line, answer)) in test_lines.iter().zip(answer_lines.iter()).enumerate() {
        let id = index + 1;
        if line.is_empty() {
            bail!("Test line {} is blank.", id);
        }

        let args: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        if args.len() < 3 {
            bail!(
                "Test line {} has {} field(s), but at least 3 are required.",
                id,
                args.len()
            );
        }

        // Exactly three fields means a printing case. With more, the third
        // field names the operation.
        let kind = if args.len() == 3 {
            OpKind::Print
        } else {
            OpKind::classify(&args[2])
        };

        cases.push(TestCase {
            id,
            args,
            expected: (*answer).to_string(),
            kind,
        });
    }

    Ok(cases)
}

/// Reads the two fixture files and parses them into test cases.
///
/// 读取两个测试用例文件并将其解析为测试用例。
pub fn load_cases(tests_path: &Path, answers_path: &Path) -> Result<Vec<TestCase>> {
    let tests_src = fs::read_to_string(tests_path)
        .with_context(|| format!("Failed to read tests file: {}", tests_path.display()))?;
    let answers_src = fs::read_to_string(answers_path)
        .with_context(|| format!("Failed to read answers file: {}", answers_path.display()))?;

    parse_cases(&tests_src, &answers_src).with_context(|| {
        format!(
            "Failed to load test fixtures from {} and {}",
            tests_path.display(),
            answers_path.display()
        )
    })
}
