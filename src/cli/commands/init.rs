//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command for the Fixture Runner CLI,
//! which creates a new runner configuration file through an interactive
//! command-line wizard.
//!
//! 此模块实现了 Fixture Runner CLI 的 `init` 命令，
//! 通过交互式命令行向导创建新的运行器配置文件。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::{fs, path::Path, path::PathBuf};

use crate::core::config::RunnerConfig;
use crate::infra::t;

/// Executes the init command with the provided arguments.
///
/// # Arguments
/// * `output` - Path for the new configuration file
/// * `force` - Whether to overwrite an existing file without asking
/// * `non_interactive` - Skips the wizard and writes the default configuration
/// * `language` - Language for the wizard's messages
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub fn execute(output: PathBuf, force: bool, non_interactive: bool, language: &str) -> Result<()> {
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!(
            "\n{}",
            t!("init.wizard_welcome", locale = language).cyan().bold()
        );
        println!("{}", t!("init.wizard_description", locale = language));
    }

    if output.exists() && !force {
        if non_interactive {
            println!(
                "{}",
                t!("init.file_exists", locale = language, path = output.display()).red()
            );
            println!("{}", t!("init.use_force", locale = language).yellow());
            return Ok(());
        }

        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!(
                "init.overwrite_prompt",
                locale = language,
                path = output.display()
            ))
            .default(false)
            .interact()
            .context(t!("init.prompt_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted", locale = language));
            return Ok(());
        }
    }

    let config = if non_interactive {
        RunnerConfig::default()
    } else {
        prompt_config(&theme, language)?
    };

    write_config(&output, &config, language)
}

/// Asks for the three configuration values, offering the defaults the
/// original harness was hardwired to.
///
/// 询问三个配置值，默认值为原始装具硬编码的值。
fn prompt_config(theme: &ColorfulTheme, language: &str) -> Result<RunnerConfig> {
    let defaults = RunnerConfig::default();

    let command: String = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_command", locale = language))
        .default(defaults.command.clone())
        .interact_text()
        .context(t!("init.prompt_failed", locale = language).to_string())?;

    let tests: String = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_tests", locale = language))
        .default(defaults.tests.display().to_string())
        .interact_text()
        .context(t!("init.prompt_failed", locale = language).to_string())?;

    let answers: String = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_answers", locale = language))
        .default(defaults.answers.display().to_string())
        .interact_text()
        .context(t!("init.prompt_failed", locale = language).to_string())?;

    Ok(RunnerConfig {
        command,
        tests: PathBuf::from(tests),
        answers: PathBuf::from(answers),
        language: None,
    })
}

fn write_config(path: &Path, config: &RunnerConfig, language: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                t!(
                    "init.create_parent_dir_failed",
                    locale = language,
                    path = parent.display()
                )
                .to_string()
            })?;
        }
    }

    let toml_string = toml::to_string_pretty(config)
        .context(t!("init.serialize_failed", locale = language).to_string())?;

    fs::write(path, toml_string).with_context(|| {
        t!("init.write_failed", locale = language, path = path.display()).to_string()
    })?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init.success", locale = language, path = path.display()).bold()
    );
    println!("{}", t!("init.next_steps", locale = language));

    Ok(())
}
