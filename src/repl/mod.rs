//! REPL Module
//!
//! The interactive read-dispatch loop and its command table.

mod commands;
mod session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::error::{PokedexError, Result};

pub use commands::Command;
pub use session::{catch_succeeds, Flow, Session};

/// Printed before every line of input.
pub const PROMPT: &str = "pokedex > ";

/// Reads lines from `input` and executes them until `exit` or end of input.
///
/// Command failures are reported to the user and logged; they never end the
/// loop. Input that is not valid UTF-8 is decoded lossily. Only an I/O failure
/// on `input` or `out` is returned.
pub async fn run<R, W>(session: &mut Session, mut input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            writeln!(out)?;
            debug!("end of input");
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end();

        match session.execute(line, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(PokedexError::UnknownCommand(name)) => {
                debug!(%name, "unknown command");
                writeln!(out, "Command does not exist!")?;
            }
            Err(err @ PokedexError::Io(_)) => return Err(err),
            Err(err) => {
                warn!(error = %err, %line, "command failed");
                writeln!(out, "{}", err)?;
            }
        }
    }

    Ok(())
}
