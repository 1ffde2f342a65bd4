use std::io::{self, BufRead, Write};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use telwx::{decode, encode};

#[derive(Parser)]
#[command(name = "wxtool", about = "Telugu/WX transliteration diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate Telugu text to WX notation
    Encode {
        /// Text to encode; reads stdin line by line when omitted
        text: Option<String>,
    },

    /// Transliterate WX notation back to Telugu
    Decode {
        /// WX string to decode; reads stdin line by line when omitted
        text: Option<String>,
    },

    /// Encode, decode back, and compare
    Roundtrip {
        /// Telugu text to check
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in sample through both directions
    Selftest,
}

#[derive(Debug, Serialize)]
struct RoundtripReport {
    input: String,
    wx: String,
    decoded: String,
    clean: bool,
}

const SAMPLE: &str = "దక్షిణమధ్య";

fn convert_lines<F>(text: Option<String>, convert: F)
where
    F: Fn(&str) -> String,
{
    match text {
        Some(t) => println!("{}", convert(&t)),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for line in stdin.lock().lines() {
                let line = line.unwrap_or_else(|e| {
                    eprintln!("Failed to read stdin: {}", e);
                    process::exit(1);
                });
                writeln!(out, "{}", convert(&line)).unwrap_or_else(|e| {
                    eprintln!("Failed to write: {}", e);
                    process::exit(1);
                });
            }
        }
    }
}

fn main() {
    telwx::trace_init::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Encode { text } => convert_lines(text, |s| encode(s)),

        Command::Decode { text } => convert_lines(text, |s| decode(s)),

        Command::Roundtrip { text, json } => {
            let wx = encode(&text);
            let decoded = decode(&wx);
            let clean = decoded == text;
            if json {
                let report = RoundtripReport {
                    input: text,
                    wx,
                    decoded,
                    clean,
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("JSON serialization failed")
                );
            } else {
                println!("wx:      {}", wx);
                println!("decoded: {}", decoded);
                println!("clean:   {}", clean);
            }
            if !clean {
                process::exit(1);
            }
        }

        Command::Selftest => {
            let wx = encode(SAMPLE);
            let back = decode(&wx);
            println!("Telugu -> WX: {}", wx);
            println!("WX -> Telugu: {}", back);
            if back != SAMPLE {
                eprintln!("round trip mismatch: expected {}, got {}", SAMPLE, back);
                process::exit(1);
            }
        }
    }
}
