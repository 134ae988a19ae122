//! Host I/O: where `write` output goes and where `read` input comes from.
//!
//! - `Stdio`: the process's stdin/stdout/stderr (the `icon` binary)
//! - `Buffer`: in-memory queues, for tests and embedding
//! - `Silent`: discards output and has no input
//!
//! Enum dispatch keeps the hot `write` path free of vtable calls.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Process standard streams.
#[derive(Default)]
pub struct StdioHost;

impl StdioHost {
    fn read_chunk() -> std::io::Result<Option<String>> {
        // Prompts written with `writes` must be visible before blocking.
        std::io::stdout().flush()?;
        let mut line = String::new();
        let n = std::io::stdin().lock().read_line(&mut line)?;
        Ok((n > 0).then_some(line))
    }
}

/// In-memory host.
///
/// Input is a queue of chunks; each chunk may hold several lines.
#[derive(Default)]
pub struct BufferHost {
    input: Mutex<VecDeque<String>>,
    output: Mutex<String>,
    errors: Mutex<String>,
}

impl BufferHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose stdin yields `input` as a single chunk.
    pub fn with_input(input: impl Into<String>) -> Self {
        let host = Self::new();
        host.push_input(input);
        host
    }

    pub fn push_input(&self, chunk: impl Into<String>) {
        self.input.lock().push_back(chunk.into());
    }

    pub fn output(&self) -> String {
        self.output.lock().clone()
    }

    pub fn errors(&self) -> String {
        self.errors.lock().clone()
    }
}

pub enum HostIo {
    Stdio(StdioHost),
    Buffer(BufferHost),
    Silent,
}

impl HostIo {
    /// Next chunk of standard input; `None` at end of input.
    pub fn read_stdin(&self) -> std::io::Result<Option<String>> {
        match self {
            Self::Stdio(_) => StdioHost::read_chunk(),
            Self::Buffer(h) => Ok(h.input.lock().pop_front()),
            Self::Silent => Ok(None),
        }
    }

    pub fn write_stdout(&self, text: &str) {
        match self {
            Self::Stdio(_) => print!("{text}"),
            Self::Buffer(h) => h.output.lock().push_str(text),
            Self::Silent => {}
        }
    }

    pub fn write_stderr(&self, text: &str) {
        match self {
            Self::Stdio(_) => eprint!("{text}"),
            Self::Buffer(h) => h.errors.lock().push_str(text),
            Self::Silent => {}
        }
    }

    /// Captured standard output; empty unless buffered.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdio(_) | Self::Silent => String::new(),
        }
    }

    /// Captured standard error; empty unless buffered.
    pub fn errors(&self) -> String {
        match self {
            Self::Buffer(h) => h.errors(),
            Self::Stdio(_) | Self::Silent => String::new(),
        }
    }
}

/// Host shared between the interpreter and its file values.
pub type SharedHost = Arc<HostIo>;

pub fn stdio_host() -> SharedHost {
    Arc::new(HostIo::Stdio(StdioHost))
}

/// Buffered host whose stdin yields `input`.
pub fn buffer_host(input: &str) -> SharedHost {
    Arc::new(HostIo::Buffer(BufferHost::with_input(input)))
}

pub fn silent_host() -> SharedHost {
    Arc::new(HostIo::Silent)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_captures_stdout_and_stderr_separately() {
        let host = buffer_host("");
        host.write_stdout("out");
        host.write_stderr("err");
        assert_eq!(host.output(), "out");
        assert_eq!(host.errors(), "err");
    }

    #[test]
    fn buffer_input_is_a_queue_of_chunks() {
        let host = BufferHost::with_input("a\nb\n");
        host.push_input("c");
        let host = HostIo::Buffer(host);
        assert_eq!(host.read_stdin().unwrap(), Some("a\nb\n".to_string()));
        assert_eq!(host.read_stdin().unwrap(), Some("c".to_string()));
        assert_eq!(host.read_stdin().unwrap(), None);
    }

    #[test]
    fn silent_discards_everything() {
        let host = silent_host();
        host.write_stdout("x");
        assert_eq!(host.output(), "");
        assert_eq!(host.read_stdin().unwrap(), None);
    }
}
