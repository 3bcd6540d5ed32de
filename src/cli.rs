use std::path::PathBuf;

#[derive(clap::Parser, Debug, Default)]
#[command(
    name = "openai-cost-report",
    about = "Summarize the last 30 days of OpenAI organization costs and write badge JSON"
)]
pub struct Args {
    /// OpenAI admin API key (defaults to OPENAI_ADMIN_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Load environment variables from this file instead of ./.env
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Directory receiving TotalCost.json and TotalEntry.json
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Emit the run report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(long, short)]
    pub verbose: bool,

    /// API base URL, for pointing the client at a stub server
    #[arg(long, hide = true)]
    pub base_url: Option<String>,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }
}
