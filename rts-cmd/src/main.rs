mod decode;
mod info;

use std::fs::File;
use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rts::{Decoder, FfMarker};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use decode::Format;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an RTS file.
    ///
    /// The json format is the same document produced by existing decoders:
    /// header, stations and area_intensities.
    Decode {
        /// Input RTS file
        input: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: Format,

        /// Output file path. Output is written to stdout if not provided.
        #[arg(short, long, value_name = "path")]
        output: Option<PathBuf>,

        /// Delete output file if it already exists
        #[arg(long, action)]
        clobber: bool,

        /// Decode the undefined varint marker 0xFF as 0 rather than failing.
        #[arg(long, action)]
        ff_zero: bool,
    },
    /// Show header and summary information about an RTS file.
    Info {
        /// Input RTS file
        input: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: Format,

        /// Decode the undefined varint marker 0xFF as 0 rather than failing.
        #[arg(long, action)]
        ff_zero: bool,
    },
}

fn new_decoder(ff_zero: bool) -> Decoder {
    let ff_marker = if ff_zero {
        FfMarker::Zero
    } else {
        FfMarker::Reject
    };
    Decoder::builder().ff_marker(ff_marker).build()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(stderr)
        .with_ansi(false)
        .without_time()
        .with_env_filter(
            EnvFilter::try_from_env("RTS_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    debug!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Commands::Decode {
            input,
            format,
            output,
            clobber,
            ff_zero,
        } => {
            let decoder = new_decoder(*ff_zero);
            match output {
                Some(output) => {
                    if !clobber && output.exists() {
                        bail!("{output:?} exists; use --clobber");
                    }
                    info!("decoding {input:?} to {output:?}");
                    let dest = File::create(output)
                        .with_context(|| format!("failed to create output {output:?}"))?;
                    let mut dest = BufWriter::new(dest);
                    decode::decode(input, &mut dest, format, decoder)?;
                    dest.flush().context("flushing output")
                }
                None => decode::decode(input, stdout().lock(), format, decoder),
            }
        }
        Commands::Info {
            input,
            format,
            ff_zero,
        } => info::info(input, format, new_decoder(*ff_zero)),
    }
}
