use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use zeroize::Zeroizing;

use sskr::cli::{Cli, Commands};
use sskr::commands::{combine_shards_hex, split_secret_hex};

/// Read the hex-encoded master secret from stdin, hidden when a TTY is
/// available, plain when piped
fn read_secret() -> Result<String> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter master secret (hex):");
        rpassword::read_password().context("Failed to read master secret from stdin")
    } else {
        let mut secret = String::new();
        io::stdin()
            .lock()
            .read_line(&mut secret)
            .context("Failed to read master secret from stdin")?;
        Ok(secret.trim().to_string())
    }
}

/// Read hex-encoded shards from stdin, one per line; an empty line (or EOF
/// on piped input) finishes the set
fn read_shards() -> Result<Vec<String>> {
    let mut shards = Vec::new();

    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter shards (hex, one per line, empty line to finish):");
        loop {
            let shard = rpassword::read_password().context("Failed to read shard from stdin")?;
            if shard.trim().is_empty() {
                break;
            }
            shards.push(shard.trim().to_string());
        }
    } else {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read line from stdin")?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                break;
            }
            shards.push(trimmed.to_string());
        }
    }

    if shards.is_empty() {
        anyhow::bail!("No shards provided");
    }

    Ok(shards)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            group_threshold,
            groups,
        } => {
            let secret = Zeroizing::new(read_secret()?);
            let shards = split_secret_hex(&secret, group_threshold, &groups)?;
            for shard in shards {
                println!("{shard}");
            }
        }
        Commands::Combine => {
            let shards = read_shards()?;
            let secret = combine_shards_hex(&shards)?;
            println!("{secret}");
        }
    }

    Ok(())
}
