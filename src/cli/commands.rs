//! # CLI Commands Module / CLI 命令模块
//!
//! The subcommands of the fixture runner: `run` executes the fixture suites,
//! `init` scaffolds a new configuration file.
//!
//! 运行器的子命令：`run` 执行测试套件，`init` 生成新的配置文件。

pub mod init;
pub mod run;
