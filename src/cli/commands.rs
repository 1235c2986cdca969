// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands: `demo`, `process`, `init-config`
// and their flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::process_use_case::ProcessConfig;
use crate::formats::kind::DocumentKind;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process a sample PDF and Word document, then show accessor-only state
    Demo(DemoArgs),

    /// Open, read, modify, and save the given files
    Process(ProcessArgs),

    /// Write a config file filled with the defaults
    InitConfig(InitConfigArgs),
}

/// Flags shared by every command that runs the dispatcher
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// JSON config file; missing files fall back to defaults
    #[arg(long)]
    pub config: Option<String>,

    /// Text appended to each document's content (overrides the config file)
    #[arg(long)]
    pub suffix: Option<String>,
}

impl ConfigArgs {
    /// Apply command line overrides on top of a loaded config.
    pub fn apply(&self, mut cfg: ProcessConfig) -> ProcessConfig {
        if let Some(suffix) = &self.suffix {
            cfg.append_suffix = suffix.clone();
        }
        cfg
    }
}

#[derive(Args, Debug, Default)]
pub struct DemoArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Skip the encapsulation walkthrough at the end
    #[arg(long)]
    pub no_encapsulation: bool,
}

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Files to process, in order
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Treat every file as this format instead of guessing from its extension
    /// (pdf, word, docx, doc)
    #[arg(long)]
    pub kind: Option<DocumentKind>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write the config
    #[arg(long, default_value = "doc-manager.json")]
    pub path: String,
}
