//! Common CLI types shared across commands

use clap::{ArgAction, Args};

/// Output mode and help flags accepted by every query command
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output data in raw format (JSON)
    #[arg(short = 'r', long)]
    pub raw: bool,

    /// Output data in json format (same as --raw)
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Print help
    #[arg(long = "h", action = ArgAction::Help, hide = true)]
    pub h: Option<bool>,
}

impl OutputArgs {
    /// Whether records should be printed as JSON instead of a report
    pub fn is_raw(&self) -> bool {
        self.raw || self.json
    }
}
