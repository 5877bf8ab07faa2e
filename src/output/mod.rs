use anyhow::{Context, Result};
use std::io::{BufWriter, Write};

/// Runs `body` against a buffered sink over `writer` and flushes it afterwards.
///
/// The flush happens whether or not `body` fails, so partial output reaches the writer and is
/// never rolled back. An error from `body` wins over a flush error.
pub fn write_scoped<W, F>(writer: W, body: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut BufWriter<W>) -> Result<()>,
{
    let mut sink = BufWriter::new(writer);
    let outcome = body(&mut sink);
    let flushed = sink.flush().context("Failed to flush output");

    outcome.and(flushed)
}
