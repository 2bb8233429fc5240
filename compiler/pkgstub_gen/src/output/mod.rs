//! Indent-aware text accumulation.
//!
//! Every line goes through [`Output::println`], which prefixes the current
//! indentation. Indentation is raised by holding an [`IndentGuard`]; dropping
//! the guard lowers it again, so blocks always close at the level they opened.
//!
//! ```text
//! out.println("class Foo");
//! {
//!     let _indent = out.indent();
//!     out.println("def bar; end");
//! }
//! out.println("end");
//! ```

use std::cell::Cell;
use std::rc::Rc;

/// Spaces per indentation level.
const INDENT_WIDTH: usize = 2;

/// Line buffer for one artifact.
#[derive(Default)]
pub struct Output {
    buf: String,
    level: Rc<Cell<usize>>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the indentation until the returned guard is dropped.
    ///
    /// The guard shares the level with this buffer, so the buffer stays
    /// writable while the guard is alive.
    pub fn indent(&self) -> IndentGuard {
        self.level.set(self.level.get() + 1);
        IndentGuard {
            level: Rc::clone(&self.level),
        }
    }

    /// Current indentation level.
    pub fn level(&self) -> usize {
        self.level.get()
    }

    /// Append `text` as one or more lines at the current indentation.
    /// Embedded newlines are indented too.
    pub fn println(&mut self, text: &str) {
        let prefix = " ".repeat(self.level.get() * INDENT_WIDTH);
        self.buf.push_str(&prefix);
        if prefix.is_empty() {
            self.buf.push_str(text);
        } else {
            self.buf.push_str(&text.replace('\n', &format!("\n{prefix}")));
        }
        self.buf.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Take the accumulated text, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}

/// Scope guard for one indentation level. See [`Output::indent`].
#[must_use = "indentation is released as soon as the guard is dropped"]
pub struct IndentGuard {
    level: Rc<Cell<usize>>,
}

impl Drop for IndentGuard {
    fn drop(&mut self) {
        self.level.set(self.level.get().saturating_sub(1));
    }
}
