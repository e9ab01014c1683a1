//! tts-pipe CLI: summarize text and speak it as a WAV file.
//!
//! Reads input text from `--text`, the INPUT_TEXT environment variable, or
//! stdin, runs the summarize-then-synthesize pipeline, and either prints the
//! resulting WAV as base64 on stdout (the default, for script consumers) or
//! writes it to a file with `--output`.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use clap::Parser;

use tts_pipe::config::TtsConfig;
use tts_pipe::error::{Result, TtsError};
use tts_pipe::generation::{self, PipelineOptions};
use tts_pipe::models::GeminiClient;

#[derive(Parser, Debug)]
#[command(
    name = "tts-pipe",
    about = "Summarize text and synthesize it to WAV speech"
)]
struct Args {
    /// Input text; falls back to INPUT_TEXT, then stdin
    #[arg(long)]
    text: Option<String>,

    /// Prebuilt voice name (overrides VOICE_NAME, default "Zephyr")
    #[arg(long)]
    voice: Option<String>,

    /// Write the WAV bytes to this path instead of printing base64 to stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Speak the input verbatim without summarizing it first
    #[arg(long)]
    no_summarize: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            ExitCode::from(err.code.exit_code())
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = TtsConfig::from_env()?;
    if let Some(voice) = args.voice {
        config.voice = voice;
    }

    let input = read_input(args.text)?;

    let options = PipelineOptions {
        voice: config.voice.clone(),
        summarize: !args.no_summarize,
    };
    let client = GeminiClient::new(config);

    let audio = generation::run(&client, &input, &options).await?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &audio).map_err(|e| {
                TtsError::output_failed(format!("failed to write {}: {}", path.display(), e))
            })?;
            eprintln!("Wrote {} bytes to {}", audio.len(), path.display());
        }
        None => println!("{}", BASE64.encode(&audio)),
    }

    Ok(())
}

/// Resolves the input text: flag, then INPUT_TEXT, then stdin.
fn read_input(arg_text: Option<String>) -> Result<String> {
    if let Some(text) = arg_text {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    if let Ok(text) = std::env::var("INPUT_TEXT") {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|_| TtsError::empty_input())?;

    if text.trim().is_empty() {
        return Err(TtsError::empty_input());
    }
    Ok(text)
}
