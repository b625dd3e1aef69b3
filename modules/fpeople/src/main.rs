use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use fpeople::{
    logging, run_lookup, Config, EndReason, Filter, LookupRequest, PeopleSearcher, ResultWriter,
    SessionLoop, TerminalPrompter,
};
use serpstack_client::{SearchOverrides, SerpstackClient};

mod cli;
use cli::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(path) = cli.log_file {
        config.log_file = path;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    logging::init(&config.log_file)?;
    info!("F-People starting...");
    config.log_keys();

    let client = SerpstackClient::with_base_url(config.access_key.clone(), &config.base_url);
    let writer = ResultWriter::new(config.output_dir.clone());

    match cli.command {
        None => cmd_interactive(&client, &writer).await,
        Some(Commands::Lookup {
            name,
            region,
            language,
            num,
            domain,
            keyword,
            save,
            json,
        }) => {
            let request = LookupRequest {
                name,
                overrides: SearchOverrides {
                    region,
                    language,
                    num,
                },
                filter: Filter { domain, keyword },
                save,
                json,
            };
            cmd_lookup(&client, &writer, request).await
        }
    }
}

async fn cmd_interactive(client: &SerpstackClient, writer: &ResultWriter) -> Result<()> {
    let mut session = SessionLoop::new(client, TerminalPrompter::new(), writer);
    let report = session.run().await;

    if report.ended == EndReason::Interrupted {
        // An interrupted prompt can leave the cursor hidden.
        let _ = console::Term::stdout().show_cursor();
    }
    Ok(())
}

async fn cmd_lookup(
    searcher: &dyn PeopleSearcher,
    writer: &ResultWriter,
    request: LookupRequest,
) -> Result<()> {
    let outcome = run_lookup(searcher, writer, &request, &mut io::stdout().lock()).await?;
    if let Some(path) = outcome.saved {
        eprintln!("Results saved to {}", path.display());
    }
    Ok(())
}
