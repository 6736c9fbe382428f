use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;

use crate::cli::{Cli, DEFAULT_MIGRATOR};

pub const MIGRATOR_ENV: &str = "W2J_MIGRATOR";
pub const WIZ_DIR_ENV: &str = "W2J_WIZ_DIR";
pub const WIZ_USER_ENV: &str = "W2J_WIZ_USER";
pub const JOPLIN_TOKEN_ENV: &str = "W2J_JOPLIN_TOKEN";
pub const OUTPUT_ENV: &str = "W2J_OUTPUT";

/// Fully resolved launcher configuration. Every field is an opaque string
/// handed to the migrator; the launcher never inspects the paths or the token.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchConfig {
    pub migrator: String,
    pub wiz_dir: String,
    pub wiz_user: String,
    pub joplin_token: String,
    pub output: String,
    pub location: Option<String>,
    pub location_children: bool,
    pub skip_missing_attachments: bool,
    pub log_level: String,
}

impl LaunchConfig {
    /// Resolution order per value: flag, then env var, then default.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let home = home_dir()?;
        let migrator = pick(cli.migrator.clone(), MIGRATOR_ENV)
            .unwrap_or_else(|| DEFAULT_MIGRATOR.to_string());
        let wiz_dir = pick(cli.wiz_dir.clone(), WIZ_DIR_ENV)
            .unwrap_or_else(|| home.join(".wiznote").to_string_lossy().into_owned());
        let wiz_user = pick(cli.wiz_user.clone(), WIZ_USER_ENV).ok_or_else(|| {
            anyhow::anyhow!("missing WizNote user id: set --wiz-user or {}", WIZ_USER_ENV)
        })?;
        let joplin_token = pick(cli.joplin_token.clone(), JOPLIN_TOKEN_ENV).ok_or_else(|| {
            anyhow::anyhow!(
                "missing Joplin token: set --joplin-token or {}",
                JOPLIN_TOKEN_ENV
            )
        })?;
        let output = pick(cli.output.clone(), OUTPUT_ENV)
            .unwrap_or_else(|| home.join("w2j-output").to_string_lossy().into_owned());

        Ok(Self {
            migrator,
            wiz_dir,
            wiz_user,
            joplin_token,
            output,
            location: cli.location.clone().filter(|l| !l.is_empty()),
            location_children: cli.location_children,
            skip_missing_attachments: !cli.fail_missing_attachments,
            log_level: cli.log_level.clone(),
        })
    }
}

// An empty string counts as unset for each source on its own, so an empty
// flag value falls through to the env var and `W2J_OUTPUT=` falls through
// to the default rather than producing an empty argument.
fn pick(flag: Option<String>, env: &str) -> Option<String> {
    flag.filter(|v| !v.is_empty())
        .or_else(|| std::env::var(env).ok().filter(|v| !v.is_empty()))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home))
}
