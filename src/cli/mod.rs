// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and routes to the
// application layer. Demo text goes to stdout; logs go to
// stderr via tracing.
//
// Commands:
//   1. `demo`        — the scripted walkthrough (default)
//   2. `process`     — run the dispatcher over given filenames
//   3. `init-config` — write a default JSON config
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ConfigArgs, DemoArgs, InitConfigArgs, ProcessArgs};

use crate::application::process_use_case::ProcessConfig;
use crate::domain::traits::Document;
use crate::formats::kind::DocumentKind;
use crate::infra::config_store::ConfigStore;

#[derive(Parser, Debug)]
#[command(
    name = "doc-manager",
    version,
    about = "Open, read, modify, and save PDF and Word documents through one shared interface."
)]
pub struct Cli {
    /// The subcommand to run; `demo` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let stdout  = io::stdout();
        let mut out = stdout.lock();

        match self.command.unwrap_or_else(|| Commands::Demo(DemoArgs::default())) {
            Commands::Demo(args)       => run_demo(args, &mut out)?,
            Commands::Process(args)    => run_process(args, &mut out)?,
            Commands::InitConfig(args) => run_init_config(args)?,
        }

        out.flush()?;
        Ok(())
    }
}

/// Build the effective config: file (or defaults), then flag overrides.
fn resolve_config(args: &ConfigArgs) -> Result<ProcessConfig> {
    let base = match &args.config {
        Some(path) => ConfigStore::new(path).load_or_default()?,
        None       => ProcessConfig::default(),
    };
    Ok(args.apply(base))
}

fn run_demo(args: DemoArgs, out: &mut dyn Write) -> Result<()> {
    use crate::application::demo_use_case::DemoUseCase;

    let mut cfg = resolve_config(&args.config)?;
    if args.no_encapsulation {
        cfg.show_encapsulation = false;
    }

    DemoUseCase::new(cfg).execute(out)?;
    Ok(())
}

fn run_process(args: ProcessArgs, out: &mut dyn Write) -> Result<()> {
    use crate::application::process_use_case::ProcessUseCase;

    let cfg = resolve_config(&args.config)?;
    let mut docs = build_documents(&args.files, args.kind)?;

    ProcessUseCase::new(cfg).process_all(&mut docs, out)
}

/// One unopened document per filename, in the given order.
fn build_documents(files: &[String], kind: Option<DocumentKind>) -> Result<Vec<Box<dyn Document>>> {
    files
        .iter()
        .map(|file| -> Result<Box<dyn Document>> {
            let kind = match kind {
                Some(k) => k,
                None    => DocumentKind::from_path(file)?,
            };
            Ok(kind.create(file.as_str()))
        })
        .collect()
}

fn run_init_config(args: InitConfigArgs) -> Result<()> {
    ConfigStore::new(&args.path).save(&ProcessConfig::default())?;
    tracing::info!("Wrote default config to '{}'", args.path);
    Ok(())
}
