//! Recursive JSON-to-text rendering.
//!
//! Every object entry becomes a `key: ` label indented two spaces per
//! depth level. Scalars follow their label on the same line; objects and
//! arrays break the line and render their children one level deeper.
//! Array elements reuse the label of the key that holds the array.
//!
//! ```text
//! {"order": {"id": 7, "tags": ["a", "b"]}}
//!
//! order:
//!   id: 7
//!   tags:
//!     tags: a
//!     tags: b
//! ```

use std::fmt::Write;

use serde_json::{Map, Value};

use crate::error::ShapeError;

pub const DEFAULT_MAX_DEPTH: usize = 64;

const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flattener {
    max_depth: usize,
}

impl Default for Flattener {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Flattener {
    /// `max_depth` is the number of label levels allowed; a label at depth
    /// `max_depth` or deeper fails with [`ShapeError::TooDeep`].
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Render a top-level object in its own key order.
    pub fn flatten(&self, object: &Map<String, Value>) -> Result<String, ShapeError> {
        let mut out = String::new();
        for (key, value) in object {
            self.render_entry(&mut out, key, value, 0)?;
        }
        Ok(out)
    }

    fn render_entry(
        &self,
        out: &mut String,
        key: &str,
        value: &Value,
        depth: usize,
    ) -> Result<(), ShapeError> {
        if depth >= self.max_depth {
            return Err(ShapeError::TooDeep {
                limit: self.max_depth,
            });
        }

        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push_str(key);
        out.push_str(": ");

        match value {
            Value::Object(children) => {
                out.push('\n');
                for (child_key, child) in children {
                    self.render_entry(out, child_key, child, depth + 1)?;
                }
            }
            Value::Array(items) => {
                out.push('\n');
                for item in items {
                    self.render_entry(out, key, item, depth + 1)?;
                }
            }
            Value::String(s) => {
                out.push_str(s);
                out.push('\n');
            }
            Value::Number(n) => {
                // write! to String is infallible
                let _ = writeln!(out, "{n}");
            }
            Value::Bool(b) => {
                let _ = writeln!(out, "{b}");
            }
            Value::Null => out.push_str("null\n"),
        }
        Ok(())
    }
}
