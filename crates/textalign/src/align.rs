#![forbid(unsafe_code)]

//! Alignment modes, the per-line aligners, and the orchestrator.
//!
//! Each aligner is a pure function over one already-trimmed line and the
//! number of padding spaces it needs. Left, right, and center are direct
//! padding operations; justify widens inter-word gaps, skipping embedded
//! escape sequences, and leaves the final line of every paragraph alone.
//!
//! The orchestrator steps and measures only through the [`Scan`]
//! capability and wraps only through [`Wrap`], so both collaborators can
//! be swapped without touching the engine.

use crate::gaps::{distribute, find_gaps_with};
use crate::scan::{AnsiScanner, Scan};
use crate::wrap::{LineInfo, Wrap};

/// Horizontal alignment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Pad both sides, the left side taking the floor.
    Center,
    /// Stretch inter-word gaps so lines span the full limit.
    Justify,
}

impl Mode {
    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Justify => "justify",
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" | "centre" => Ok(Self::Center),
            "justify" => Ok(Self::Justify),
            _ => Err(AlignError::UnknownMode {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur while aligning text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// The column limit cannot be wrapped to.
    InvalidLimit { limit: usize },
    /// A mode name did not parse. Produced only at the [`Mode`] `FromStr`
    /// boundary; the enum itself cannot hold an invalid mode.
    UnknownMode { name: String },
}

impl std::fmt::Display for AlignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLimit { limit } => {
                write!(f, "cannot wrap to a limit of {} columns", limit)
            }
            Self::UnknownMode { name } => {
                write!(f, "'{}' is not a valid align mode", name)
            }
        }
    }
}

impl std::error::Error for AlignError {}

/// Append `pad` spaces.
fn align_left(line: &str, pad: usize) -> String {
    format!("{line}{}", " ".repeat(pad))
}

/// Prepend `pad` spaces.
fn align_right(line: &str, pad: usize) -> String {
    format!("{}{line}", " ".repeat(pad))
}

/// Pad both sides, the left side taking the floor of the split.
fn align_center(line: &str, pad: usize) -> String {
    let left = pad / 2;
    let right = pad - left;
    format!("{}{line}{}", " ".repeat(left), " ".repeat(right))
}

/// Widen inter-word gaps so the line spans the full limit.
///
/// The final line of a paragraph is left alone, as is a line with no gaps
/// to stretch. Each gap's rendered width is its distributed share plus the
/// one naturally-occurring separator space.
fn justify_line<S: Scan + ?Sized>(line: &str, pad: usize, info: LineInfo, scanner: &S) -> String {
    if pad == 0 || info.last_in_paragraph {
        return line.to_string();
    }
    let gaps = find_gaps_with(line, scanner);
    if gaps.is_empty() {
        return line.to_string();
    }
    let per_gap = distribute(gaps.len(), pad);

    let mut out = String::with_capacity(line.len() + pad);
    let mut cursor = 0;
    for (idx, ch) in line.char_indices() {
        if cursor < gaps.len() && idx == gaps[cursor] {
            out.push_str(&" ".repeat(per_gap[cursor] + 1));
            cursor += 1;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Wrap `text` to `limit` display columns and align every line, using the
/// default ANSI-aware scanner.
///
/// See [`align_with`] for the full-control variant.
pub fn align_wrapped<W: Wrap + ?Sized>(
    text: &str,
    limit: usize,
    mode: Mode,
    wrapper: &W,
) -> Result<String, AlignError> {
    align_with(text, limit, mode, wrapper, &AnsiScanner)
}

/// Wrap `text` to `limit` display columns and align every line.
///
/// Wrapping is delegated to the collaborator and its errors are returned
/// unchanged. Each wrapped line is right-trimmed (escape sequences are
/// untouched; ESC is not whitespace), measured through the scanner, and
/// padded out to `limit` by the selected mode. The result is the aligned
/// lines rejoined with `\n`.
///
/// # Panics
///
/// Panics if the wrap collaborator breaks its contract: a trimmed line
/// wider than `limit`, or fewer metadata entries than lines. Clamping
/// either would corrupt alignment invisibly.
pub fn align_with<W: Wrap + ?Sized, S: Scan + ?Sized>(
    text: &str,
    limit: usize,
    mode: Mode,
    wrapper: &W,
    scanner: &S,
) -> Result<String, AlignError> {
    let wrapped = wrapper.wrap(text, limit)?;

    let lines: Vec<&str> = wrapped.text.split('\n').collect();
    assert_eq!(
        lines.len(),
        wrapped.lines.len(),
        "wrap metadata does not match line count"
    );

    let mut aligned = Vec::with_capacity(lines.len());
    for (idx, line) in lines.into_iter().enumerate() {
        let trimmed = line.trim_end();
        let width = scanner.visible_width(trimmed);
        assert!(
            width <= limit,
            "wrapped line {idx} is {width} columns wide, over the limit {limit}"
        );
        let pad = limit - width;
        tracing::trace!(idx, width, pad, mode = %mode, "aligning line");

        aligned.push(match mode {
            Mode::Left => align_left(trimmed, pad),
            Mode::Right => align_right(trimmed, pad),
            Mode::Center => align_center(trimmed, pad),
            Mode::Justify => justify_line(trimmed, pad, wrapped.lines[idx], scanner),
        });
    }
    Ok(aligned.join("\n"))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::scan::visible_width;
    use crate::wrap::Wrapper;
    use proptest::prelude::*;

    fn arbitrary_words() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z]{1,8}", 1..20).prop_map(|w| w.join(" "))
    }

    proptest! {
        #[test]
        fn padded_lines_hit_the_limit_exactly(
            text in arbitrary_words(),
            limit in 10usize..40,
            mode in prop::sample::select(vec![Mode::Left, Mode::Right, Mode::Center]),
        ) {
            let out = align_wrapped(&text, limit, mode, &Wrapper::new()).unwrap();
            for line in out.split('\n') {
                prop_assert_eq!(visible_width(line), limit);
            }
        }

        #[test]
        fn realigning_is_idempotent(
            text in arbitrary_words(),
            limit in 10usize..40,
            mode in prop::sample::select(vec![Mode::Left, Mode::Right, Mode::Center]),
        ) {
            let once = align_wrapped(&text, limit, mode, &Wrapper::new()).unwrap();
            let twice = align_wrapped(&once, limit, mode, &Wrapper::new()).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn justified_inner_lines_span_the_limit(
            text in arbitrary_words(),
            limit in 10usize..40,
        ) {
            let out = align_wrapped(&text, limit, Mode::Justify, &Wrapper::new()).unwrap();
            let lines: Vec<&str> = out.split('\n').collect();
            for line in &lines[..lines.len() - 1] {
                // A lone long word has no gap to stretch; every other
                // inner line must span the limit exactly.
                if line.contains(' ') {
                    prop_assert_eq!(visible_width(line), limit);
                }
            }
        }

        #[test]
        fn justify_never_reorders_content(
            text in arbitrary_words(),
            limit in 10usize..40,
        ) {
            let out = align_wrapped(&text, limit, Mode::Justify, &Wrapper::new()).unwrap();
            let squashed: String = out.split_whitespace().collect::<Vec<_>>().join(" ");
            let original: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
            prop_assert_eq!(squashed, original);
        }
    }
}
