//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the fixture runner,
//! including data models, configuration, fixture loading, planning, and
//! test execution logic.
//!
//! 此模块包含运行器的核心功能，
//! 包括数据模型、配置、测试用例加载、计划和测试执行逻辑。

pub mod models;
pub mod config;
pub mod loader;
pub mod planner;
pub mod execution;

// Re-exports
pub use models::{OpKind, TestResult};
pub use config::RunnerConfig;
pub use execution::{run_test_case, Invocation};
