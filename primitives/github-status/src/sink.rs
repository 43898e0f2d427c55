//! Output channels for the mutation result.

use serde_json::Value;
use std::io::{self, Stderr, Stdout, Write};
use std::sync::Mutex;

use crate::InvokeError;

/// Receives the outcome of a mutation call: the parsed response or the error.
pub trait OutputSink {
    fn emit(&self, value: &Value);

    fn emit_error(&self, error: &InvokeError);
}

/// Writes results to one handle and errors to another, one line each.
#[derive(Debug)]
pub struct ConsoleSink<O = Stdout, E = Stderr> {
    pretty: bool,
    out: Mutex<O>,
    err: Mutex<E>,
}

impl ConsoleSink {
    /// Sink over the process's stdout and stderr.
    pub fn stdio(pretty: bool) -> Self {
        Self::new(pretty, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleSink<O, E> {
    pub fn new(pretty: bool, out: O, err: E) -> Self {
        Self {
            pretty,
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    /// Returns the output and error handles.
    pub fn into_parts(self) -> (O, E) {
        let out = self.out.into_inner().unwrap_or_else(|e| e.into_inner());
        let err = self.err.into_inner().unwrap_or_else(|e| e.into_inner());
        (out, err)
    }
}

/// Formats the payload for console output.
fn format_payload(payload: &Value, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
    } else {
        payload.to_string()
    }
}

fn write_line<W: Write>(handle: &Mutex<W>, line: &str) {
    let result = match handle.lock() {
        Ok(mut w) => writeln!(w, "{line}").and_then(|()| w.flush()),
        Err(_) => return,
    };
    if let Err(e) = result {
        tracing::warn!(error = %e, "failed to write output");
    }
}

impl<O: Write, E: Write> OutputSink for ConsoleSink<O, E> {
    fn emit(&self, value: &Value) {
        write_line(&self.out, &format_payload(value, self.pretty));
    }

    fn emit_error(&self, error: &InvokeError) {
        write_line(&self.err, &error.to_string());
    }
}
