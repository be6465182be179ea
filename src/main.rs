use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use newsprobe::{
    config, preview, render, ExportArtifact, ImageFile, SubmissionInput, SubmissionWorkflow,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text of the story to check
    #[arg(short, long)]
    text: String,

    /// Path to the image accompanying the story
    #[arg(short, long)]
    image: PathBuf,

    /// Prediction endpoint URL (defaults to $NEWSPROBE_ENDPOINT, then the
    /// local development server)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Write the result as pretty-printed JSON to PATH
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = ExportArtifact::DEFAULT_FILENAME
    )]
    export: Option<PathBuf>,

    /// Print the image as a data URI before submitting
    #[arg(long)]
    preview: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let image = ImageFile::from_path(&args.image)
        .with_context(|| format!("failed to read image {}", args.image.display()))?;

    if args.preview {
        println!("{}", preview::data_uri(image.file_name(), image.bytes()));
    }

    let endpoint = args.endpoint.unwrap_or_else(config::default_endpoint);
    info!("Using endpoint {}", endpoint);

    let mut workflow = SubmissionWorkflow::builder()
        .with_endpoint(endpoint)
        .build()?;

    let input = SubmissionInput::new(args.text, Some(image));
    match workflow.submit(input).await {
        Ok(result) => {
            println!("{}", render::result_summary(&result));
        }
        Err(err) => {
            eprintln!("{}", render::error_line(&err.to_string()));
            return Err(err.into());
        }
    }

    if let Some(path) = args.export {
        let bytes = workflow
            .export_result()
            .context("no result available to export")?;
        fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
        info!("Saved detection result to {}", path.display());
    }

    Ok(())
}
