use clap::Parser;

pub const DEFAULT_MIGRATOR: &str = "w2j";
pub const DEFAULT_LOG_LEVEL: &str = "DEBUG";

#[derive(Parser, Debug)]
#[command(
    name = "w2j-launch",
    version,
    about = "Launch a WizNote to Joplin migration run"
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON (with --dry-run)")]
    pub json: bool,
    #[arg(
        long,
        help = "Print the resolved migrator invocation (token included) instead of running it"
    )]
    pub dry_run: bool,
    #[arg(
        long,
        help = "Migration program to invoke, a name on PATH or a full path (env: W2J_MIGRATOR)"
    )]
    pub migrator: Option<String>,
    #[arg(
        long,
        help = "WizNote data directory, defaults to ~/.wiznote (env: W2J_WIZ_DIR)"
    )]
    pub wiz_dir: Option<String>,
    #[arg(long, help = "WizNote user id, the login email (env: W2J_WIZ_USER)")]
    pub wiz_user: Option<String>,
    #[arg(
        long,
        help = "Joplin Web Clipper authorization token (env: W2J_JOPLIN_TOKEN)"
    )]
    pub joplin_token: Option<String>,
    #[arg(
        long,
        help = "Output directory for migration artifacts and logs, defaults to ~/w2j-output (env: W2J_OUTPUT)"
    )]
    pub output: Option<String>,
    #[arg(
        long,
        help = "Migrate a single WizNote location, e.g. /My Notes/; omit to migrate everything"
    )]
    pub location: Option<String>,
    #[arg(
        long,
        default_value_t = false,
        help = "With --location, also migrate child locations"
    )]
    pub location_children: bool,
    #[arg(
        long,
        default_value_t = false,
        help = "Fail on notes with missing attachments instead of skipping them"
    )]
    pub fail_missing_attachments: bool,
    #[arg(
        long,
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log level forwarded to the migrator"
    )]
    pub log_level: String,
}
