use clap::Parser;
use serde::Serialize;

mod cli;
mod config;
mod launch;

use cli::Cli;
use config::LaunchConfig;
use launch::LaunchPlan;

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = LaunchConfig::resolve(&cli)?;
    let plan = LaunchPlan::from_config(&cfg);

    if cli.dry_run {
        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&JsonOut {
                    ok: true,
                    data: &plan
                })?
            );
        } else {
            println!("{}", plan.command_line());
        }
        return Ok(());
    }

    let code = plan.run()?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
