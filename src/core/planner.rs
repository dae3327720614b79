//! # Test Execution Planner Module / 测试执行计划模块
//!
//! This module groups the parsed test cases into suites and decides which
//! suites a run will execute, honoring an optional suite selector.
//!
//! 此模块将解析出的测试用例分组为套件，
//! 并根据可选的套件选择器决定一次运行要执行哪些套件。

use anyhow::{bail, Result};

use crate::core::models::{OpKind, TestCase, TestSuite};

/// Represents a complete execution plan for a run.
/// 表示一次运行的完整执行计划。
#[derive(Debug)]
pub struct ExecutionPlan {
    /// The suites to execute, in their fixed reporting order.
    /// 要执行的套件，按固定的报告顺序排列。
    pub suites: Vec<TestSuite>,
    /// The number of kinds that had no cases and were left out of the plan.
    /// Only meaningful when no selector was given.
    /// 没有任何用例而被排除在计划之外的种类数量。
    /// 仅在未给出选择器时有意义。
    pub empty_kind_count: usize,
    /// The total number of cases across all planned suites.
    /// 所有计划套件中的用例总数。
    pub total_cases: usize,
}

/// Creates an execution plan from the parsed cases.
///
/// Cases are grouped by kind in the fixed order of [`OpKind::ALL`], which is
/// also the order in which the original fixture authors expect the suites to
/// be reported. With a selector, only that suite is planned, and selecting a
/// suite with no cases is an error. Without one, every non-empty suite is
/// planned and empty kinds are merely counted.
///
/// 根据解析出的用例创建执行计划。
///
/// 用例按 [`OpKind::ALL`] 的固定顺序按种类分组，这也是套件的报告顺序。
/// 给出选择器时，只计划该套件，选择没有用例的套件是错误。
/// 未给出时，计划所有非空套件，空的种类只做计数。
pub fn plan_execution(cases: Vec<TestCase>, selector: Option<OpKind>) -> Result<ExecutionPlan> {
    let mut suites: Vec<TestSuite> = OpKind::ALL
        .iter()
        .map(|&kind| TestSuite {
            kind,
            cases: Vec::new(),
        })
        .collect();

    for case in cases {
        // ALL covers every kind, so the lookup cannot miss.
        if let Some(suite) = suites.iter_mut().find(|s| s.kind == case.kind) {
            suite.cases.push(case);
        }
    }

    let (suites, empty_kind_count) = match selector {
        Some(kind) => {
            let suite = suites
                .into_iter()
                .find(|s| s.kind == kind)
                .unwrap_or(TestSuite {
                    kind,
                    cases: Vec::new(),
                });
            if suite.is_empty() {
                bail!("No test cases found for the '{}' suite.", kind.name());
            }
            (vec![suite], 0)
        }
        None => {
            let (planned, empty): (Vec<_>, Vec<_>) =
                suites.into_iter().partition(|s| !s.is_empty());
            (planned, empty.len())
        }
    };

    let total_cases = suites.iter().map(TestSuite::len).sum();

    Ok(ExecutionPlan {
        suites,
        empty_kind_count,
        total_cases,
    })
}
