use clap::{ArgGroup, Parser};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("color_mode")
        .args(["color", "no_color"])
))]
/// Top-level CLI options for gitclone.
pub struct Cli {
    /// Directory to run git in (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<String>,

    /// Block on git instead of awaiting it on the async runtime
    #[arg(long)]
    pub sync: bool,

    /// Enable colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Suppress all output
    #[arg(long)]
    pub quiet: bool,

    /// URL (or local path) of the repository to clone
    pub url: String,

    /// Destination path, relative to the current directory
    #[arg(default_value = "")]
    pub destination: String,
}
