//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the fixture
//! runner. It includes the suite kinds, the test cases parsed from the fixture
//! files, and the result and report types produced by a run.
//!
//! 此模块定义了整个运行器中使用的核心数据结构。
//! 它包括套件种类、从测试用例文件解析出的测试用例，
//! 以及一次运行产生的结果和报告类型。

use crate::infra::t;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The kind of operation a test case exercises. Each kind forms its own suite
/// with its own pass/fail statistics.
///
/// 测试用例所执行的操作种类。每个种类构成一个套件，
/// 拥有自己的通过/失败统计。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    /// Output formatting tests, the catch-all kind. / 输出格式测试，兜底种类。
    #[serde(rename = "printing")]
    Print,
    /// Addition tests. / 加法测试。
    #[serde(rename = "addition")]
    Add,
    /// Subtraction tests. / 减法测试。
    #[serde(rename = "subtraction")]
    Sub,
    /// Multiplication tests. / 乘法测试。
    #[serde(rename = "multiplication")]
    Mul,
    /// Division tests. / 除法测试。
    #[serde(rename = "division")]
    Div,
}

impl OpKind {
    /// All kinds, in the order suites are run and reported.
    /// 所有种类，按套件运行和报告的顺序排列。
    pub const ALL: [OpKind; 5] = [
        OpKind::Print,
        OpKind::Add,
        OpKind::Sub,
        OpKind::Mul,
        OpKind::Div,
    ];

    /// Classifies the operation field of a test line. Anything that is not a
    /// recognized operator token falls back to `Print`.
    ///
    /// 对测试行的操作字段进行分类。任何无法识别的操作符记号都回退为 `Print`。
    pub fn classify(token: &str) -> Self {
        match token {
            "+" | "a" => OpKind::Add,
            "-" | "s" => OpKind::Sub,
            "*" | "m" => OpKind::Mul,
            "/" | "d" => OpKind::Div,
            _ => OpKind::Print,
        }
    }

    /// Parses a suite selector given on the command line. Unlike
    /// [`OpKind::classify`], an unknown token is rejected instead of falling
    /// back to `Print`.
    ///
    /// 解析命令行上给出的套件选择器。与 [`OpKind::classify`] 不同，
    /// 未知记号会被拒绝，而不是回退为 `Print`。
    pub fn from_selector(token: &str) -> Option<Self> {
        match token {
            "+" | "a" | "add" | "addition" => Some(OpKind::Add),
            "-" | "s" | "sub" | "subtraction" => Some(OpKind::Sub),
            "*" | "m" | "mul" | "multiplication" => Some(OpKind::Mul),
            "/" | "d" | "div" | "division" => Some(OpKind::Div),
            "p" | "print" | "printing" => Some(OpKind::Print),
            _ => None,
        }
    }

    /// The locale-independent identifier of the kind, as used in reports
    /// and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            OpKind::Print => "printing",
            OpKind::Add => "addition",
            OpKind::Sub => "subtraction",
            OpKind::Mul => "multiplication",
            OpKind::Div => "division",
        }
    }

    /// The localized display label of the kind.
    /// 种类的本地化显示标签。
    pub fn label(&self) -> String {
        match self {
            OpKind::Print => t!("kind.printing").to_string(),
            OpKind::Add => t!("kind.addition").to_string(),
            OpKind::Sub => t!("kind.subtraction").to_string(),
            OpKind::Mul => t!("kind.multiplication").to_string(),
            OpKind::Div => t!("kind.division").to_string(),
        }
    }
}

/// A single test case parsed from the fixture files: the arguments to pass to
/// the executable under test and the expected stdout.
///
/// 从测试用例文件解析出的单个测试用例：
/// 传递给被测可执行文件的参数和预期的标准输出。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// The 1-based line number of the case in the tests file, used as its id.
    /// 用例在测试文件中的行号（从 1 开始），用作其标识。
    pub id: usize,
    /// The argument tokens passed to the executable, one invocation per case.
    /// 传递给可执行文件的参数记号，每个用例一次调用。
    pub args: Vec<String>,
    /// The expected stdout of the invocation, compared after trimming.
    /// 调用的预期标准输出，裁剪空白后比较。
    pub expected: String,
    /// The suite this case belongs to.
    /// 此用例所属的套件。
    pub kind: OpKind,
}

impl TestCase {
    /// The arguments joined with single spaces, as shown in failure details
    /// and copied to the clipboard.
    pub fn args_joined(&self) -> String {
        self.args.join(" ")
    }
}

/// A group of test cases of the same kind, run and reported together.
/// 同一种类的一组测试用例，一起运行和报告。
#[derive(Debug, Clone)]
pub struct TestSuite {
    pub kind: OpKind,
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Represents the final result of a single test case execution.
///
/// 表示单个测试用例执行的最终结果。
#[derive(Debug, Clone, Serialize)]
pub enum TestResult {
    /// The executable produced the expected output. / 可执行文件产生了预期输出。
    Passed {
        case: TestCase,
        /// The time taken to execute the case / 执行用例所花费的时间
        duration: Duration,
    },
    /// The executable produced something else. / 可执行文件产生了其他输出。
    Failed {
        case: TestCase,
        /// The trimmed stdout that was actually produced / 实际产生的标准输出（已裁剪）
        output: String,
        duration: Duration,
    },
    /// The case was cancelled before it produced a result. / 用例在产生结果前被取消。
    Skipped { case: TestCase },
}

impl TestResult {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestResult::Passed { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TestResult::Failed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, TestResult::Skipped { .. })
    }

    /// The case this result belongs to.
    pub fn case(&self) -> &TestCase {
        match self {
            TestResult::Passed { case, .. } => case,
            TestResult::Failed { case, .. } => case,
            TestResult::Skipped { case } => case,
        }
    }

    /// Converts a failed result into its report entry. Returns `None` for
    /// passed and skipped results.
    pub fn into_failed_case(self) -> Option<FailedCase> {
        match self {
            TestResult::Failed { case, output, .. } => Some(FailedCase {
                id: case.id,
                args: case.args_joined(),
                output,
                expected: case.expected,
            }),
            _ => None,
        }
    }
}

/// A failed test case as it appears in reports: the id and arguments of the
/// invocation, what it printed, and what was expected.
///
/// 报告中的失败测试用例：调用的标识和参数、实际打印的内容以及预期内容。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedCase {
    pub id: usize,
    pub args: String,
    pub output: String,
    pub expected: String,
}

/// The statistics of one finished suite.
/// 一个已完成套件的统计信息。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub kind: OpKind,
    /// The number of cases in the suite, including skipped ones.
    /// 套件中的用例数，包括被跳过的用例。
    pub total: usize,
    pub passed: usize,
    pub skipped: usize,
    pub failed: Vec<FailedCase>,
}

impl SuiteReport {
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// The failed share of the whole suite, in percent. Skipped cases count
    /// toward the denominator: an interrupted suite still reports its
    /// failures against its full size.
    ///
    /// 整个套件中失败所占的百分比。被跳过的用例计入分母：
    /// 被中断的套件仍按完整大小报告其失败率。
    pub fn failed_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.failed.len() as f64 / self.total as f64 * 100.0
    }
}

/// The complete outcome of a run, across all suites that were executed.
/// 一次运行的完整结果，涵盖所有已执行的套件。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// When the report was assembled. / 报告生成的时间。
    pub generated_at: DateTime<Local>,
    /// The command string of the executable under test. / 被测可执行文件的命令字符串。
    pub command: String,
    pub suites: Vec<SuiteReport>,
    /// Whether the run was cut short by an interrupt. Any skipped case
    /// implies it: cases are only skipped when the stop token fired.
    ///
    /// 运行是否被中断提前结束。任何被跳过的用例都意味着中断：
    /// 只有停止令牌触发时用例才会被跳过。
    pub interrupted: bool,
}

impl RunReport {
    pub fn new(command: String, suites: Vec<SuiteReport>) -> Self {
        let interrupted = suites.iter().any(|s| s.skipped > 0);
        Self {
            generated_at: Local::now(),
            command,
            suites,
            interrupted,
        }
    }

    pub fn total_cases(&self) -> usize {
        self.suites.iter().map(|s| s.total).sum()
    }

    pub fn total_passed(&self) -> usize {
        self.suites.iter().map(|s| s.passed).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.suites.iter().map(|s| s.failed.len()).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.suites.iter().map(|s| s.skipped).sum()
    }

    /// The failed share of all cases that actually ran, in percent. Unlike
    /// the per-suite rate, skipped cases are excluded from the denominator.
    ///
    /// 所有实际运行用例中失败所占的百分比。与按套件的比率不同，
    /// 被跳过的用例不计入分母。
    pub fn failed_percent(&self) -> f64 {
        let ran = self.total_passed() + self.total_failed();
        if ran == 0 {
            return 0.0;
        }
        self.total_failed() as f64 / ran as f64 * 100.0
    }

    pub fn has_failures(&self) -> bool {
        self.total_failed() > 0
    }
}
