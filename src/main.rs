use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use mdpost::batch::run_batch;
use mdpost::cli::Args;
use mdpost::config::GeneratorConfig;
use mdpost::documents::{discover_documents, Document};
use mdpost::logging;
use mdpost::openai::OpenAiClient;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logging::init(args.verbose);

    if args.list {
        let documents = discover_documents(&args.input_dir)?;
        print_found(&documents);
        return Ok(ExitCode::SUCCESS);
    }

    // Checked before discovery so a missing key never touches the filesystem.
    let config = match GeneratorConfig::from_env() {
        Ok(config) => config.with_model(args.model),
        Err(err) => {
            eprintln!("mdpost: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };
    tracing::info!(
        model = %config.model,
        base_url = %config.base_url,
        "generation service configured"
    );

    let documents = discover_documents(&args.input_dir)?;
    print_found(&documents);

    let client = OpenAiClient::new(config);
    let report = run_batch(&documents, &client, &args.output_dir)?;
    tracing::info!(written = report.written.len(), "batch complete");
    Ok(ExitCode::SUCCESS)
}

fn print_found(documents: &[Document]) {
    let stems: Vec<&str> = documents.iter().map(|doc| doc.stem.as_str()).collect();
    println!("Found {} .md file(s): {:?}", documents.len(), stems);
}
