//! File values: `&input`, `&output`, `&errout`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::errors::{io_error, EvalError};
use crate::host::SharedHost;

/// Line-buffered reader over the host's standard input.
///
/// The host may hand over several lines in one chunk; the extras are kept
/// here and returned by later reads.
pub struct LineReader {
    host: SharedHost,
    pending: RefCell<VecDeque<String>>,
}

impl LineReader {
    pub fn new(host: SharedHost) -> Self {
        LineReader {
            host,
            pending: RefCell::new(VecDeque::new()),
        }
    }

    /// Next line without its terminator, or `None` once input is exhausted.
    pub fn read_line(&self) -> Result<Option<String>, EvalError> {
        loop {
            if let Some(line) = self.pending.borrow_mut().pop_front() {
                return Ok(Some(line));
            }
            let Some(chunk) = self.host.read_stdin().map_err(|e| io_error(&e))? else {
                return Ok(None);
            };
            if chunk.is_empty() {
                continue;
            }
            let body = chunk.strip_suffix('\n').unwrap_or(&chunk);
            self.pending.borrow_mut().extend(
                body.split('\n')
                    .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string()),
            );
        }
    }
}

#[derive(Clone)]
pub enum FileValue {
    Input(Rc<LineReader>),
    Output,
    Errout,
}

impl FileValue {
    /// Keyword naming this file.
    pub fn name(&self) -> &'static str {
        match self {
            FileValue::Input(_) => "&input",
            FileValue::Output => "&output",
            FileValue::Errout => "&errout",
        }
    }
}

impl PartialEq for FileValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FileValue::Input(a), FileValue::Input(b)) => Rc::ptr_eq(a, b),
            (FileValue::Output, FileValue::Output) | (FileValue::Errout, FileValue::Errout) => {
                true
            }
            _ => false,
        }
    }
}

impl fmt::Debug for FileValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
