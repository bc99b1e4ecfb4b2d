//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::application::{KeyStyle, OutputFormat};
use crate::config::Settings;
use crate::domain::LabelPolicy;

/// Group domain names into a suffix mind map, top-level label first
#[derive(Parser, Debug)]
#[command(name = "dommap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the mind map from a domain list
    Build(BuildArgs),

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Input file with one domain per line (default or `-`: stdin)
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Key style of output nodes
    #[arg(short, long, value_enum)]
    pub keys: Option<KeyStyle>,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Reject lines containing empty labels
    #[arg(long)]
    pub strict: bool,

    /// Fold labels to lowercase
    #[arg(long)]
    pub lowercase: bool,

    /// Build on all cores
    #[arg(long)]
    pub parallel: bool,
}

impl BuildArgs {
    /// Apply flags given on the command line over loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(keys) = self.keys {
            settings.keys = keys;
        }
        if self.compact {
            settings.compact = true;
        }
        if self.strict {
            settings.policy = LabelPolicy::Strict;
        }
        if self.lowercase {
            settings.lowercase = true;
        }
        if self.parallel {
            settings.parallel = true;
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
