use anyhow::{Context, Result};
use chrono::Utc;
#[cfg(feature = "colors")]
use owo_colors::OwoColorize;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use openai_cost_report::badges::write_badges;
use openai_cost_report::cli::Args;
use openai_cost_report::config::{Config, load_env_file};
#[cfg(not(feature = "colors"))]
use openai_cost_report::display::color_shim::ColorizeShim;
use openai_cost_report::costs_api::CostsClient;
use openai_cost_report::display::{
    badges_written_notice, print_json_output, print_text_output, query_banner,
};
use openai_cost_report::paginate::Paginator;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match load_env_file(args.env_file.as_deref()) {
        Ok(Some(path)) => debug!(path = %path.display(), "loaded environment file"),
        Ok(None) => {}
        Err(e) if args.env_file.is_some() => return Err(e),
        Err(e) => warn!(error = %e, "ignoring unreadable .env"),
    }

    let config = match Config::resolve(&args, |name| std::env::var(name).ok(), Utc::now()) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e.to_string().yellow());
            println!("Please set your API key with --api-key or as an environment variable.");
            return Ok(());
        }
    };

    let client = CostsClient::from_config(&config);
    if !args.json {
        println!("{}", query_banner(config.start_time));
    }

    let report = Paginator::new(&client, config.start_time).run();

    if args.json {
        print_json_output(&report)?;
    } else {
        print_text_output(&report);
    }

    write_badges(&config.out_dir, &report.usage).context("write summary badges")?;
    if !args.json {
        println!("{}", badges_written_notice());
    }
    Ok(())
}
