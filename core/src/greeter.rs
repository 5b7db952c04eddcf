//! The greeting and the one way it is written out.

use std::io::{self, Write};

use tracing::debug;

pub const MESSAGE: &str = "Hello World!";

/// Stateless handle on the greeting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Greeter;

impl Greeter {
    pub fn new() -> Self {
        Self
    }

    pub fn message(&self) -> &'static str {
        MESSAGE
    }
}

pub fn get_message() -> &'static str {
    Greeter.message()
}

/// Writes the greeting and a single `\n`, then flushes.
pub fn greet<W: Write>(mut writer: W) -> io::Result<()> {
    let message = get_message();
    writeln!(writer, "{message}")?;
    writer.flush()?;
    debug!(bytes = message.len() + 1, "greeting written");
    Ok(())
}
