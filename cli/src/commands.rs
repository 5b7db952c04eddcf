use clap::Parser;

#[derive(Parser)]
#[command(name = "greeter", version)]
#[command(about = "Prints a greeting and exits.")]
pub struct CommandLine {
    /// Show more diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Silence all diagnostics
    #[arg(short, long)]
    pub quiet: bool,
    /// Disable coloured diagnostics
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
