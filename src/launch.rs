use std::process::{Command, Stdio};

use anyhow::Context;
use serde::Serialize;

use crate::config::LaunchConfig;

/// The exact invocation handed to the migrator: program plus ordered argv.
#[derive(Debug, Serialize)]
pub struct LaunchPlan {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchPlan {
    pub fn from_config(cfg: &LaunchConfig) -> Self {
        let mut args = vec![
            "--wiz-dir".to_string(),
            cfg.wiz_dir.clone(),
            "--wiz-user".to_string(),
            cfg.wiz_user.clone(),
            "--joplin-token".to_string(),
            cfg.joplin_token.clone(),
            "--output".to_string(),
            cfg.output.clone(),
        ];
        match &cfg.location {
            Some(location) => {
                args.push("--location".to_string());
                args.push(location.clone());
                if cfg.location_children {
                    args.push("--location-children".to_string());
                }
            }
            None => args.push("--all".to_string()),
        }
        if cfg.skip_missing_attachments {
            args.push("--skip-missing-attachments".to_string());
        }
        args.push("--log-level".to_string());
        args.push(cfg.log_level.clone());

        Self {
            program: cfg.migrator.clone(),
            args,
        }
    }

    /// Shell-pasteable form of the invocation; arguments with whitespace
    /// are single-quoted.
    pub fn command_line(&self) -> String {
        let mut parts = vec![quote(&self.program)];
        parts.extend(self.args.iter().map(|a| quote(a)));
        parts.join(" ")
    }

    /// Run the migrator to completion with inherited stdio and return its
    /// exit code. A child killed by a signal has no code and maps to 1.
    pub fn run(&self) -> anyhow::Result<i32> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("failed to run migrator: {}", self.program))?;
        Ok(status.code().unwrap_or(1))
    }
}

fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(|c| c.is_whitespace()) {
        format!("'{}'", arg.replace('\'', "'\\''"))
    } else {
        arg.to_string()
    }
}
