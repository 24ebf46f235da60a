//! Print the OpenAPI document as JSON.

use std::io::Write;

use clap::Parser;
use exercise_tracker::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the exercise tracker OpenAPI document")]
struct Args {
    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let doc = ApiDoc::openapi();
    let json = if args.pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    }
    .map_err(std::io::Error::other)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")
}
