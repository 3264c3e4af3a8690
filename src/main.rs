//! VT Search Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use vt_search_downloader::{
    cli::Args,
    config::Config,
    error::{exit_codes, Result},
    job::run as run_job,
    output::{
        print_download_summary, print_error, print_info, print_query_summary, print_success,
        print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration
    let mut config = Config::load(&args.config)?;
    args.merge_into_config(&mut config);
    tracing::debug!("Loaded configuration: {:?}", config);

    let job = args.job();
    let output_dir = job.output_dir.display().to_string();

    if job.interactive {
        print_query_summary(&job.query, config.limit, job.download, &output_dir);
    }

    let outcome = run_job(&config, &job, &mut std::io::stdout()).await?;

    if job.interactive {
        if outcome.results.is_empty() {
            print_warning("No results matched the query");
        } else if job.download {
            print_download_summary(outcome.downloaded.len(), &output_dir);
            print_success("Done");
        } else {
            print_info("Run again with -d to download these files");
        }
    }

    Ok(())
}
