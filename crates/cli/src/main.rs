//! RV32I sequencer simulator CLI.
//!
//! This binary runs a program image on the single-cycle core against the reference memory
//! side. It performs:
//! 1. **Setup:** Loads the JSON configuration (or defaults) and the flat or ELF image.
//! 2. **Stimulus:** Schedules one-cycle interrupt pulses given with `--irq`.
//! 3. **Run:** Clocks the simulator until the core sleeps, halts, or hits the cycle limit,
//!    then prints the outcome, a register dump and statistics.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rvseq_core::common::SimError;
use rvseq_core::config::Config;
use rvseq_core::sim::{RunOutcome, Simulator, load_image};

#[derive(Parser, Debug)]
#[command(
    name = "rvseq",
    author,
    version,
    about = "Single-cycle RV32I sequencer simulator",
    long_about = "Run a program image on the RV32I sequencer core.\n\nExamples:\n  rvseq run -f program.bin\n  rvseq run -f firmware.elf --config bench.json --irq 500:0x1 --trace"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a flat binary or ELF32 image from the reset vector.
    Run {
        /// Program image to execute.
        #[arg(short, long)]
        file: PathBuf,

        /// JSON configuration file; built-in defaults are used when absent.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured cycle limit.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Log every retired instruction.
        #[arg(long)]
        trace: bool,

        /// Pulse the interrupt vector for one cycle, as CYCLE:MASK (mask may be hex).
        #[arg(long, value_parser = parse_irq)]
        irq: Vec<(u64, u32)>,
    },
}

/// Parses a `CYCLE:MASK` interrupt pulse.
fn parse_irq(s: &str) -> Result<(u64, u32), String> {
    let (cycle, mask) = s
        .split_once(':')
        .ok_or_else(|| format!("expected CYCLE:MASK, got '{s}'"))?;
    let cycle = cycle
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("bad cycle '{cycle}': {e}"))?;
    let mask = mask.trim();
    let parsed = match mask.strip_prefix("0x").or_else(|| mask.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => mask.parse::<u32>(),
    };
    let mask = parsed.map_err(|e| format!("bad mask '{mask}': {e}"))?;
    Ok((cycle, mask))
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` selects the filter; `trace` forces instruction tracing for the core crate.
fn init_logging(trace: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if trace {
        if let Ok(directive) = "rvseq_core=trace".parse() {
            filter = filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            config,
            max_cycles,
            trace,
            irq,
        } => match cmd_run(&file, config, max_cycles, trace, &irq) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("\n[!] FATAL: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

/// Loads the image, runs it and reports the outcome.
fn cmd_run(
    file: &Path,
    config_path: Option<PathBuf>,
    max_cycles: Option<u64>,
    trace: bool,
    irq: &[(u64, u32)],
) -> Result<ExitCode, SimError> {
    let config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    init_logging(trace || config.general.trace_instructions);

    let image = load_image(file)?;
    let mut sim = Simulator::new(&config);
    sim.load(&image)?;
    for &(cycle, mask) in irq {
        info!(cycle, mask = format_args!("{mask:#x}"), "interrupt pulse scheduled");
        let _ = sim.schedule_interrupt(cycle, mask);
    }

    println!("[*] Image: {} ({} bytes)", file.display(), image.len());
    println!(
        "    Memory: {:#010x} + {} KiB  Wait states: fetch {} / data {}",
        config.memory.base,
        config.memory.size / 1024,
        config.memory.fetch_wait_states,
        config.memory.data_wait_states
    );
    println!();

    let limit = max_cycles.unwrap_or(config.general.max_cycles);
    let outcome = sim.run(limit);
    info!(?outcome, cycles = sim.stats.cycles, "run finished");
    let code = match outcome {
        RunOutcome::Sleeping { pc } => {
            println!("[*] Core sleeping in WFI at {pc:#010x}");
            ExitCode::SUCCESS
        }
        RunOutcome::Halted => {
            println!("[*] Core halted (run_enable low) at {:#010x}", sim.core.pc());
            ExitCode::SUCCESS
        }
        RunOutcome::CycleLimit => {
            println!("[!] Cycle limit of {limit} reached at {:#010x}", sim.core.pc());
            ExitCode::from(2)
        }
    };

    println!();
    sim.core.regs.dump();
    println!();
    sim.stats.print();
    Ok(code)
}
