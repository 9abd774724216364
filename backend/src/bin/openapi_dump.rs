//! Print the OpenAPI document as JSON, to stdout or a file.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use directory::ApiDoc;
use utoipa::OpenApi;

/// Dump the directory OpenAPI document.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump")]
struct Args {
    /// Write the document to this path instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .wrap_err("serialise OpenAPI document")?;

    match args.output {
        Some(path) => std::fs::write(&path, json)
            .wrap_err_with(|| format!("write OpenAPI document to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
