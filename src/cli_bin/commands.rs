//! CLI command handlers bridging arguments to the server

use crate::cli_bin::args::*;
use anyhow::{Context, Result};
use log::debug;
use mds::{ListMarkdownFilesRequest, MarkdownServer, ReadMarkdownFileRequest};
use serde::Serialize;

/// Build the server and run one command against it
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.server.to_config();
    debug!("Starting with config: {:?}", config);

    let server = MarkdownServer::new(config)
        .with_context(|| format!("failed to create server for {}", cli.server.path.display()))?;

    match cli.command {
        Commands::List => {
            let response = server.list_markdown_files(&ListMarkdownFilesRequest::default())?;
            output(&response, cli.format, cli.pretty)
        }
        Commands::Read(args) => {
            let document = server
                .read_markdown_file(&ReadMarkdownFileRequest::new(args.path.as_str()))
                .with_context(|| format!("failed to read {}", args.path))?;
            output(&document, cli.format, cli.pretty)
        }
        Commands::Resources => output(&server.resources(), cli.format, cli.pretty),
        Commands::Resource(args) => {
            let result = server
                .read_resource(&args.uri)
                .with_context(|| format!("failed to read resource {}", args.uri))?;
            output(&result, cli.format, cli.pretty)
        }
        Commands::Tools => output(&server.tools(), cli.format, cli.pretty),
    }
}

fn output<T: Serialize>(value: &T, format: OutputFormat, pretty: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = if pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            println!("{}", output);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(value)?);
        }
    }
    Ok(())
}
