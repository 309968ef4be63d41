//! Indenting writer for debug traces
//!
//! Items describe themselves through [`PropertySink`]; [`TextStream`] renders
//! those descriptions as nested s-expressions:
//!
//! ```text
//! (display-list
//!   (save)
//!   (draw-line
//!     (point-1 (0,0))
//!     (point-2 (10,10))))
//! ```

use std::fmt::{self, Write as _};

/// Receiver of named item properties
pub trait PropertySink {
    fn dump_property(&mut self, name: &str, value: &dyn fmt::Display);
}

/// String builder producing indented groups
#[derive(Clone, Debug, Default)]
pub struct TextStream {
    out: String,
    depth: usize,
}

impl TextStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a `(name` group on a new line at the current depth
    pub fn begin_group(&mut self, name: &str) {
        self.start_line();
        self.out.push('(');
        self.out.push_str(name);
        self.depth += 1;
    }

    pub fn end_group(&mut self) {
        self.out.push(')');
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn start_line(&mut self) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }
}

impl PropertySink for TextStream {
    fn dump_property(&mut self, name: &str, value: &dyn fmt::Display) {
        self.start_line();
        // Writing into a String cannot fail
        let _ = write!(self.out, "({name} {value})");
    }
}

impl fmt::Display for TextStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.out)
    }
}

/// Displays a slice as `[a, b, c]`
pub struct ListDisplay<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for ListDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_groups() {
        let mut ts = TextStream::new();
        ts.begin_group("outer");
        ts.begin_group("inner");
        ts.dump_property("x", &1.5);
        ts.end_group();
        ts.end_group();
        assert_eq!(ts.as_str(), "(outer\n  (inner\n    (x 1.5)))");
        assert_eq!(ts.depth(), 0);
    }

    #[test]
    fn test_list_display() {
        assert_eq!(ListDisplay(&[1.0f32, 2.5]).to_string(), "[1, 2.5]");
        assert_eq!(ListDisplay::<f32>(&[]).to_string(), "[]");
    }
}
