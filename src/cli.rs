use clap::{Parser, Subcommand};

use crate::domain::GroupDescriptor;

/// Parses a group descriptor written as "<threshold>of<count>", e.g. "2of3"
fn parse_group(s: &str) -> Result<GroupDescriptor, String> {
    let (threshold, count) = s
        .split_once("of")
        .ok_or_else(|| format!("'{s}' is not of the form <threshold>of<count>"))?;

    let threshold: u8 = threshold
        .trim()
        .parse()
        .map_err(|_| format!("'{threshold}' is not a valid number"))?;
    let count: u8 = count
        .trim()
        .parse()
        .map_err(|_| format!("'{count}' is not a valid number"))?;

    GroupDescriptor::new(threshold, count).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "sskr")]
#[command(about = "Split a master secret into SSKR shards and combine them back")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a hex-encoded master secret into shards
    Split {
        /// Number of groups required to reconstruct the secret
        #[arg(short = 't', long, default_value_t = 1)]
        group_threshold: u8,

        /// Group descriptor such as "2of3"; repeat for multiple groups
        #[arg(short, long = "group", value_parser = parse_group, required = true)]
        groups: Vec<GroupDescriptor>,
    },
    /// Combine hex-encoded shards to reconstruct the master secret
    Combine,
}
