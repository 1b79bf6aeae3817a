// Copyright 2025. Command-line renderer for RIPscrip-style vector text.
//
// Usage:
//   rip-render render <input> [-o out.png] [--width W] [--height H] [--config render.toml] [--animate] [--raw]
//   rip-render decode <input> [--json] [--raw]
//   rip-render opcodes
//
// `<input>` may be `-` to read standard input.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rip_raster::{base36, decode_with_stats, opcode, palette, source, Scheduler, Step};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, io, thread};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod output;

#[derive(Parser)]
#[command(name = "rip-render")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Decode and render RIPscrip-style command text", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render command text to a PNG image
    Render {
        /// Input file, or `-` for stdin
        input: PathBuf,

        /// Output PNG path
        #[arg(short, long, default_value = "out.png")]
        output: PathBuf,

        /// Surface width (overrides the config file)
        #[arg(long)]
        width: Option<u32>,

        /// Surface height (overrides the config file)
        #[arg(long)]
        height: Option<u32>,

        /// TOML render configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Play back with pacing and show a progress bar
        #[arg(short, long)]
        animate: bool,

        /// Decode the input as-is, without fence stripping or reset prefix
        #[arg(long)]
        raw: bool,
    },

    /// Print the decoded command list
    Decode {
        /// Input file, or `-` for stdin
        input: PathBuf,

        /// Emit JSON instead of one command per line
        #[arg(long)]
        json: bool,

        /// Decode the input as-is, without fence stripping or reset prefix
        #[arg(long)]
        raw: bool,
    },

    /// List supported opcodes
    Opcodes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Render {
            input,
            output,
            width,
            height,
            config,
            animate,
            raw,
        } => cmd_render(
            &input,
            &output,
            config.as_deref(),
            width,
            height,
            animate,
            raw,
        ),
        Commands::Decode { input, json, raw } => cmd_decode(&input, json, raw),
        Commands::Opcodes => cmd_opcodes(),
    }
}

fn read_input(input: &Path, raw: bool) -> Result<String> {
    let text = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))?
    };
    Ok(if raw { text } else { source::prepare(&text) })
}

fn cmd_render(
    input: &Path,
    output: &Path,
    config: Option<&Path>,
    width: Option<u32>,
    height: Option<u32>,
    animate: bool,
    raw: bool,
) -> Result<()> {
    let config = config::resolve(config, width, height)?;
    let text = read_input(input, raw)?;
    let (commands, stats) = decode_with_stats(&text);
    debug!(?stats, "decode finished");
    if stats.dropped > 0 || stats.unknown > 0 {
        warn!(
            "{} truncated and {} unknown commands skipped",
            stats.dropped, stats.unknown
        );
    }

    let count = commands.len();
    let scheduler = Scheduler::with_config(&config);
    let mut playback = scheduler.start(commands, config.width, config.height)?;

    let last = if animate {
        let mut bar = output::ProgressBar::new(io::stderr());
        let last = playback.run(thread::sleep, |p| bar.update(p));
        bar.finish();
        last
    } else {
        playback.finish()
    };
    if last == Step::Cancelled {
        anyhow::bail!("Playback was cancelled");
    }

    output::save_png(playback.surface(), output)?;
    info!(
        "Rendered {} commands at {}x{} to {}",
        count,
        config.width,
        config.height,
        output.display()
    );
    Ok(())
}

#[derive(Serialize)]
struct DecodeReport<'a> {
    commands: &'a [rip_raster::Command],
    stats: rip_raster::DecodeStats,
}

fn cmd_decode(input: &Path, json: bool, raw: bool) -> Result<()> {
    let text = read_input(input, raw)?;
    let (commands, stats) = decode_with_stats(&text);

    if json {
        let report = DecodeReport {
            commands: &commands,
            stats,
        };
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize commands")?;
        println!("{out}");
    } else {
        for (i, cmd) in commands.iter().enumerate() {
            println!("{i:5}  {}  {cmd:?}", cmd.opcode());
        }
        info!(
            "{} commands from {} lines ({} skipped), {} dropped, {} unknown",
            stats.emitted, stats.lines, stats.skipped_lines, stats.dropped, stats.unknown
        );
    }
    Ok(())
}

fn cmd_opcodes() -> Result<()> {
    println!("{:<4} {:<12} {:>4}  PARAMETERS", "OP", "NAME", "MIN");
    for op in opcode::OPCODES {
        println!(
            "{:<4} {:<12} {:>4}  {}",
            op.letter, op.name, op.min_len, op.layout
        );
    }
    println!();
    print!("{}", palette_listing());
    Ok(())
}

fn palette_listing() -> String {
    let mut out = format!("{:<6} {:<14} RGB\n", "COLOR", "NAME");
    for (i, c) in palette::EGA_PALETTE.iter().enumerate() {
        let index = i as u8;
        let name = palette::name(index).unwrap_or("");
        out.push_str(&format!(
            "{:<6} {:<14} #{:06X}\n",
            base36::encode(index as u32, 1).unwrap_or_default(),
            name,
            c.to_rgb24()
        ));
    }
    out
}
