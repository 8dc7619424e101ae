use clap::{Parser, Subcommand};

use crate::config::toml_config::{RingConfig, DEFAULT_ROSTER_PATH};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};

#[derive(Debug, Clone, Parser)]
#[command(name = "boxing-ring")]
#[command(about = "Keep a roster of boxers and fight them two at a time")]
pub struct CliConfig {
    /// TOML settings file; flags given here take precedence
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Roster JSON file
    #[arg(long, global = true)]
    pub roster: Option<String>,

    /// Seed for reproducible fights
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add a boxer to the roster
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        weight: u32,
        #[arg(long)]
        height: u32,
        #[arg(long)]
        reach: f64,
        #[arg(long)]
        age: u32,
    },
    /// Remove a boxer from the roster
    Delete { id: u64 },
    /// Show a boxer and their record
    Show {
        #[arg(required_unless_present = "name")]
        id: Option<u64>,
        #[arg(long, conflicts_with = "id")]
        name: Option<String>,
    },
    /// Put two boxers in the ring, in order, and fight
    Fight { first: u64, second: u64 },
}

impl CliConfig {
    /// Fills any value not given on the command line from the settings file.
    pub fn merge_file(&mut self, file: &RingConfig) {
        if self.roster.is_none() {
            self.roster = Some(file.roster_path().to_string());
        }
        if self.seed.is_none() {
            self.seed = file.seed();
        }
        self.verbose |= file.verbose();
        self.json_logs |= file.json_logs();
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        validate_path("roster", self.roster_path())
    }
}

impl ConfigProvider for CliConfig {
    fn roster_path(&self) -> &str {
        self.roster.as_deref().unwrap_or(DEFAULT_ROSTER_PATH)
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}
