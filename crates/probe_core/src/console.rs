//! Two-stream console output.
//!
//! Results go to the output stream; warnings, errors and diagnostics go to
//! the diagnostic stream. Write failures (for instance a closed pipe) are
//! ignored.

use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

/// Line-oriented writer over an output and a diagnostic stream.
pub struct Console {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl Console {
    /// Creates a console over arbitrary writers.
    pub fn new(out: impl Write + Send + 'static, err: impl Write + Send + 'static) -> Self {
        Self {
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    /// Console over the process standard output and standard error.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }

    /// Writes one line to the output stream.
    pub fn out(&mut self, line: impl Display) {
        writeln!(self.out, "{line}").ok();
    }

    /// Writes one line to the diagnostic stream.
    pub fn err(&mut self, line: impl Display) {
        writeln!(self.err, "{line}").ok();
    }

    /// Pretty-prints `value` as JSON to the output stream.
    pub fn out_json(&mut self, value: &impl Serialize) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => self.out(json),
            Err(err) => {
                tracing::warn!(error = %err, "failed to render JSON output");
            }
        }
    }

    /// Flushes both streams.
    pub fn flush(&mut self) {
        self.out.flush().ok();
        self.err.flush().ok();
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn streams_are_separate() {
        let (out, err) = (Buffer::default(), Buffer::default());
        let mut console = Console::new(out.clone(), err.clone());

        console.out("result");
        console.err("warning");

        assert_eq!(out.contents(), "result\n");
        assert_eq!(err.contents(), "warning\n");
    }

    #[test]
    fn json_is_pretty_printed() {
        let out = Buffer::default();
        let mut console = Console::new(out.clone(), std::io::sink());

        console.out_json(&serde_json::json!({"region": "us-east-1"}));

        assert_eq!(out.contents(), "{\n  \"region\": \"us-east-1\"\n}\n");
    }
}
