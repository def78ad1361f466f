use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use deskplay::{
    arcade, doc, DocumentExtractor, FileKind, GeminiClient, Settings, TaskExecutor, TextExtractor,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the game window
    Arcade,
    /// Extract text from a document and run a task prompt over it
    Run {
        /// Document to read (pdf, docx, pptx, jpg, jpeg, png)
        file: PathBuf,
        /// Task to perform, e.g. "Summarize" or "Create quiz"
        #[arg(short, long)]
        prompt: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Arcade => {
            arcade::run().map_err(|e| anyhow::anyhow!("game window failed: {e}"))?;
        }
        Commands::Run { file, prompt } => {
            run_task(&file, &prompt)?;
        }
    }
    Ok(())
}

fn run_task(file: &Path, prompt: &str) -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    let client = GeminiClient::new(&settings);

    let kind = FileKind::from_path(file)?;
    let bytes =
        std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;

    let content = match kind {
        FileKind::Image => {
            let mime = doc::image_mime(&bytes)?;
            info!(file = %file.display(), "reading image text via the vision model");
            client.ocr(&bytes, mime)?
        }
        _ => DocumentExtractor
            .extract(&bytes, kind)
            .with_context(|| format!("extracting text from {}", file.display()))?,
    };

    let result = client
        .execute(prompt, &content)
        .context("running task against the model")?;
    println!("{result}");
    Ok(())
}
