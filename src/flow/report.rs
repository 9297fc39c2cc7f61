use std::io::{self, BufRead, Write};

use super::{FlowResult, Outcome};
use crate::console::Console;
use crate::error::FetchError;

/// Final message for a single-URL flow.
pub fn outcome<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: &FlowResult,
) -> io::Result<()> {
    match result {
        Ok(Outcome::Saved(saved)) => {
            console.say(format!("✓ Successfully fetched: {}", saved.filename))?;
            console.say(format!("✓ Image saved to {}", saved.path.display()))
        }
        Ok(Outcome::Aborted(abort)) => {
            tracing::info!(reason = %abort, "fetch aborted");
            console.say(format!("✗ {}", abort))
        }
        Err(err) => failure(console, err),
    }
}

pub fn failure<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &FetchError,
) -> io::Result<()> {
    tracing::warn!(error = %err, network = err.is_network(), "fetch failed");

    if err.is_network() {
        console.say(format!("✗ Connection error: {}", err))
    } else {
        console.say(format!("✗ An error occurred: {}", err))
    }
}

/// One line per batch item.
pub fn item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: &FlowResult,
) -> io::Result<()> {
    match result {
        Ok(Outcome::Saved(saved)) => {
            console.say(format!("✓ Successfully fetched: {}", saved.filename))
        }
        Ok(Outcome::Aborted(abort)) => console.say(format!("✗ {}", abort)),
        Err(err) => {
            tracing::warn!(error = %err, "batch item failed");
            console.say(format!("✗ Failed to fetch: {}", err))
        }
    }
}
