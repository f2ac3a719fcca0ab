//! Stream command - prints the live game feed.

use std::io::Write;

use anyhow::{Context as _, Result};
use clap::Args;

use super::Context;

/// Arguments for the stream command.
#[derive(Args, Debug)]
pub struct StreamArgs {
    /// Stop after this many lines
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Run the stream command.
pub fn run(args: StreamArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let mut stream = client.stream()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut printed = 0usize;
    while args.limit.is_none_or(|limit| printed < limit) {
        let Some(line) = stream.next() else {
            break;
        };
        writeln!(out, "{}", line?).context("failed to write to stdout")?;
        out.flush().context("failed to write to stdout")?;
        printed += 1;
    }

    stream.close();
    tracing::debug!(lines = printed, "stream command finished");
    Ok(())
}
