//! The `hydro` command-line compiler.
//!
//! Reads a Hydrogen source file, compiles it to NASM assembly with
//! [`hydroc_drv::compile`], then shells out to `nasm -felf64` and `ld` to
//! produce the executable. Everything in this binary is file and process
//! plumbing; the language pipeline itself is pure and lives in the library
//! crates.

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, ExitCode};

use anyhow::{bail, Context, Result};
use clap::Parser;
use hydroc_util::Diagnostic;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Hydro - ahead-of-time compiler for the Hydrogen language.
#[derive(Parser, Debug)]
#[command(name = "hydro")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compiler for the Hydrogen language", long_about = None)]
struct Cli {
    /// Hydrogen source file to compile
    input: PathBuf,

    /// Output executable path; intermediates take its name with .asm / .o
    #[arg(short, long, default_value = "out")]
    output: PathBuf,

    /// Keep the intermediate .asm and .o files
    #[arg(short = 'd', long)]
    keep_intermediates: bool,

    /// Write the .asm file and stop before assembling
    #[arg(long)]
    emit_asm: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Best-effort: a second init only happens under a test harness.
    let _ = init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", Diagnostic::error(format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}

/// Initialize the logging system.
fn init_logging(verbose: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
}

fn run(cli: &Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let asm = hydroc_drv::compile(&source)?;

    let asm_path = cli.output.with_extension("asm");
    fs::write(&asm_path, &asm)
        .with_context(|| format!("failed to write {}", asm_path.display()))?;
    info!("wrote {}", asm_path.display());

    if cli.emit_asm {
        if cli.keep_intermediates {
            eprintln!("{}", Diagnostic::warning("-d has no effect with --emit-asm"));
        }
        return Ok(());
    }

    let obj_path = cli.output.with_extension("o");
    run_tool(
        "nasm",
        &[
            OsStr::new("-felf64"),
            asm_path.as_os_str(),
            OsStr::new("-o"),
            obj_path.as_os_str(),
        ],
    )?;
    run_tool(
        "ld",
        &[OsStr::new("-o"), cli.output.as_os_str(), obj_path.as_os_str()],
    )?;
    info!("linked {}", cli.output.display());

    if !cli.keep_intermediates {
        fs::remove_file(&asm_path)
            .with_context(|| format!("failed to remove {}", asm_path.display()))?;
        fs::remove_file(&obj_path)
            .with_context(|| format!("failed to remove {}", obj_path.display()))?;
    }

    Ok(())
}

/// Runs an external tool to completion, failing on a nonzero exit.
fn run_tool(name: &str, args: &[&OsStr]) -> Result<()> {
    debug!("invoking {name}");
    let status = Command::new(name)
        .args(args)
        .status()
        .with_context(|| format!("failed to invoke `{name}`"))?;
    if !status.success() {
        bail!("`{name}` exited with {status}");
    }
    Ok(())
}
