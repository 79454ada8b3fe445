#![forbid(unsafe_code)]

//! Column alignment for plain and ANSI-colored terminal text.
//!
//! This crate reflows text to a fixed display-column width and aligns
//! every line in one of four modes:
//! - [`left_align`] - pad on the right
//! - [`right_align`] - pad on the left
//! - [`center_align`] - pad both sides, the left side taking the floor
//! - [`justify`] - stretch inter-word gaps to fill the limit; the final
//!   line of each paragraph stays unstretched
//!
//! Widths are measured in terminal cells: CJK and emoji count two
//! columns, and embedded ANSI escape sequences count zero and pass
//! through untouched.
//!
//! # Example
//! ```
//! use textalign::{justify, left_align};
//!
//! assert_eq!(left_align("hello", 10).unwrap(), "hello     ");
//!
//! let fox = justify("The quick brown fox jumps over the lazy dog", 12).unwrap();
//! assert_eq!(fox, "The    quick\nbrown    fox\njumps   over\nthe lazy dog");
//! ```
//!
//! Both collaborators are pluggable: the engine wraps through any
//! [`Wrap`] implementation ([`Wrapper`], backed by `textwrap`, is the
//! default) and steps/measures text through any [`Scan`] implementation
//! ([`AnsiScanner`] is the default). [`Aligner`] holds a reusable
//! configuration and is where custom collaborators are injected.

pub mod align;
pub mod gaps;
pub mod scan;
pub mod wrap;

pub use align::{AlignError, Mode, align_with, align_wrapped};
pub use scan::{AnsiScanner, Scan, visible_width};
pub use wrap::{LineInfo, Wrap, Wrapped, Wrapper};

/// Wrap and left-align `text` within `limit` display columns.
pub fn left_align(text: &str, limit: usize) -> Result<String, AlignError> {
    align(text, limit, Mode::Left)
}

/// Wrap and right-align `text` within `limit` display columns.
pub fn right_align(text: &str, limit: usize) -> Result<String, AlignError> {
    align(text, limit, Mode::Right)
}

/// Wrap and center `text` within `limit` display columns.
pub fn center_align(text: &str, limit: usize) -> Result<String, AlignError> {
    align(text, limit, Mode::Center)
}

/// Wrap and fully justify `text` within `limit` display columns.
pub fn justify(text: &str, limit: usize) -> Result<String, AlignError> {
    align(text, limit, Mode::Justify)
}

/// Wrap `text` with the default wrapper and align it in the given mode.
pub fn align(text: &str, limit: usize, mode: Mode) -> Result<String, AlignError> {
    align_wrapped(text, limit, mode, &Wrapper::new())
}

/// Reusable alignment configuration with injectable collaborators.
///
/// # Example
/// ```
/// use textalign::{Aligner, Mode};
///
/// let aligner = Aligner::new(11).mode(Mode::Center);
/// assert_eq!(aligner.align("hello").unwrap(), "   hello   ");
/// ```
#[derive(Debug, Clone)]
pub struct Aligner<W: Wrap = Wrapper, S: Scan = AnsiScanner> {
    limit: usize,
    mode: Mode,
    wrapper: W,
    scanner: S,
}

impl Aligner<Wrapper, AnsiScanner> {
    /// Create an aligner for the given column limit, left-aligned, using
    /// the default wrapper and scanner.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            mode: Mode::Left,
            wrapper: Wrapper::new(),
            scanner: AnsiScanner,
        }
    }
}

impl<W: Wrap, S: Scan> Aligner<W, S> {
    /// Set the alignment mode.
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the wrap collaborator.
    #[must_use]
    pub fn wrapper<V: Wrap>(self, wrapper: V) -> Aligner<V, S> {
        Aligner {
            limit: self.limit,
            mode: self.mode,
            wrapper,
            scanner: self.scanner,
        }
    }

    /// Replace the scanning capability.
    #[must_use]
    pub fn scanner<T: Scan>(self, scanner: T) -> Aligner<W, T> {
        Aligner {
            limit: self.limit,
            mode: self.mode,
            wrapper: self.wrapper,
            scanner,
        }
    }

    /// Wrap and align `text` with this configuration.
    pub fn align(&self, text: &str) -> Result<String, AlignError> {
        align_with(text, self.limit, self.mode, &self.wrapper, &self.scanner)
    }
}
