use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fpeople")]
#[command(about = "OSINT people search over the serpstack web search API")]
#[command(version)]
pub struct Cli {
    /// Append diagnostics to this file (overrides FPEOPLE_LOG_FILE)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory saved results are written to (overrides FPEOPLE_OUTPUT_DIR)
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Without a subcommand, an interactive session is started
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search once for a name and exit
    Lookup {
        /// Full name of the person
        name: String,

        /// Region code (e.g. us, id)
        #[arg(long)]
        region: Option<String>,

        /// Language code (e.g. en, id)
        #[arg(long)]
        language: Option<String>,

        /// Number of results to request
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        num: Option<u32>,

        /// Only keep results whose domain contains this text
        #[arg(long)]
        domain: Option<String>,

        /// Only keep results whose description contains this text
        #[arg(long)]
        keyword: Option<String>,

        /// Save the results to <STEM>_<timestamp>.json
        #[arg(long, value_name = "STEM")]
        save: Option<String>,

        /// Print results as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
