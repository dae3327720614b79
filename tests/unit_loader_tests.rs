//! # Loader Module Unit Tests / Loader 模块单元测试
//!
//! This module contains unit tests for the `loader.rs` module: pairing the
//! two fixture files, tokenization, structural classification, and the
//! strict validation errors.
//!
//! 此模块包含 `loader.rs` 模块的单元测试：两个测试用例文件的配对、
//! 分词、结构化分类以及严格的校验错误。

use fixture_runner::core::loader::{load_cases, parse_cases};
use fixture_runner::core::models::OpKind;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[cfg(test)]
mod parsing_tests {
    use super::*;

    #[test]
    fn test_parses_all_five_kinds() {
        let tests = "1 0 7\n2 5 + 7 7\n9 5 - 4 4\n3 4 * 12 12\n8 2 / 4 4\n";
        let answers = "1\n7\n4\n12\n4\n";

        let cases = parse_cases(tests, answers).unwrap();

        assert_eq!(cases.len(), 5);
        assert_eq!(cases[0].kind, OpKind::Print);
        assert_eq!(cases[1].kind, OpKind::Add);
        assert_eq!(cases[2].kind, OpKind::Sub);
        assert_eq!(cases[3].kind, OpKind::Mul);
        assert_eq!(cases[4].kind, OpKind::Div);
    }

    /// Ids are the 1-based line numbers shared by both files.
    #[test]
    fn test_ids_are_one_based_line_numbers() {
        let cases = parse_cases("1 0 7\n2 0 7\n", "a\nb\n").unwrap();

        assert_eq!(cases[0].id, 1);
        assert_eq!(cases[1].id, 2);
        assert_eq!(cases[0].expected, "a");
        assert_eq!(cases[1].expected, "b");
    }

    /// Exactly three fields is a printing case even when the third field
    /// looks like an operator.
    ///
    /// 恰好三个字段是打印用例，即使第三个字段看起来像操作符。
    #[test]
    fn test_three_fields_is_always_printing() {
        let cases = parse_cases("1 2 +\n", "x\n").unwrap();
        assert_eq!(cases[0].kind, OpKind::Print);
    }

    /// With more than three fields, an unrecognized operator falls back to
    /// printing.
    #[test]
    fn test_unknown_operator_falls_back_to_printing() {
        let cases = parse_cases("1 2 % 3 3\n", "x\n").unwrap();
        assert_eq!(cases[0].kind, OpKind::Print);
    }

    #[test]
    fn test_tokenizes_on_any_whitespace() {
        let cases = parse_cases("1  2\t+   3 3\n", "5\n").unwrap();
        assert_eq!(cases[0].args, vec!["1", "2", "+", "3", "3"]);
        assert_eq!(cases[0].kind, OpKind::Add);
    }

    /// Leading and trailing blank lines and CRLF endings are tolerated.
    #[test]
    fn test_trims_files_and_lines() {
        let tests = "\n\n  1 0 7 \r\n2 5 + 7 7\r\n\n";
        let answers = "\n one \r\ntwo\n\n";

        let cases = parse_cases(tests, answers).unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].args, vec!["1", "0", "7"]);
        assert_eq!(cases[0].expected, "one");
        assert_eq!(cases[1].expected, "two");
    }

    /// An interior blank answer line is a legitimate empty expectation.
    #[test]
    fn test_blank_interior_answer_is_allowed() {
        let cases = parse_cases("1 0 7\n2 0 7\n3 0 7\n", "a\n\nc\n").unwrap();
        assert_eq!(cases[1].expected, "");
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_empty_tests_file_is_an_error() {
        let err = parse_cases("", "").unwrap_err();
        assert!(err.to_string().contains("no test cases"));

        let err = parse_cases("  \n \n", "x\n").unwrap_err();
        assert!(err.to_string().contains("no test cases"));
    }

    #[test]
    fn test_mismatched_counts_name_both_counts() {
        let err = parse_cases("1 0 7\n2 0 7\n3 0 7\n", "a\nb\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("3 test line(s)"));
        assert!(msg.contains("2 answer line(s)"));
    }

    #[test]
    fn test_blank_interior_test_line_names_the_line() {
        let err = parse_cases("1 0 7\n\n3 0 7\n", "a\nb\nc\n").unwrap_err();
        assert!(err.to_string().contains("Test line 2 is blank"));
    }

    #[test]
    fn test_short_test_line_names_the_line() {
        let err = parse_cases("1 0 7\n1 2\n", "a\nb\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Test line 2"));
        assert!(msg.contains("2 field(s)"));
    }
}

#[cfg(test)]
mod load_tests {
    use super::*;

    #[test]
    fn test_load_cases_from_files() {
        let temp_dir = tempdir().unwrap();
        let tests_path = temp_dir.path().join("fp_tests.txt");
        let answers_path = temp_dir.path().join("fp_answers.txt");
        fs::write(&tests_path, "2 5 + 7 7\n").unwrap();
        fs::write(&answers_path, "7\n").unwrap();

        let cases = load_cases(&tests_path, &answers_path).unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].kind, OpKind::Add);
        assert_eq!(cases[0].expected, "7");
    }

    #[test]
    fn test_load_cases_missing_tests_file_names_path() {
        let temp_dir = tempdir().unwrap();
        let answers_path = temp_dir.path().join("fp_answers.txt");
        fs::write(&answers_path, "7\n").unwrap();

        let err = load_cases(Path::new("missing_tests.txt"), &answers_path).unwrap_err();
        assert!(err.to_string().contains("missing_tests.txt"));
    }

    #[test]
    fn test_load_cases_missing_answers_file_names_path() {
        let temp_dir = tempdir().unwrap();
        let tests_path = temp_dir.path().join("fp_tests.txt");
        fs::write(&tests_path, "2 5 + 7 7\n").unwrap();

        let err = load_cases(&tests_path, Path::new("missing_answers.txt")).unwrap_err();
        assert!(err.to_string().contains("missing_answers.txt"));
    }
}
