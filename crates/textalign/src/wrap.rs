#![forbid(unsafe_code)]

//! The line-wrapping collaborator seam.
//!
//! The alignment engine does not wrap text itself. It consumes wrapped
//! text plus per-line metadata through the [`Wrap`] capability, so the
//! core stays decoupled from any particular wrapping engine. [`Wrapper`]
//! is the default implementation, backed by the `textwrap` crate.

use crate::align::AlignError;
use crate::scan::ansi_seq_len;

/// Per-line metadata produced by wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    /// True iff this line is the final line wrapped from one original
    /// newline-delimited input paragraph. Justification leaves such lines
    /// unstretched.
    pub last_in_paragraph: bool,
}

/// Wrapped text plus one [`LineInfo`] per output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapped {
    /// The wrapped text; lines are separated by `\n`.
    pub text: String,
    /// Metadata, one entry per line of `text`, in order.
    pub lines: Vec<LineInfo>,
}

/// Capability for breaking raw text into lines no wider than a limit.
///
/// Implementations owe the aligners two contracts:
/// - every output line's visible width is at most `limit`;
/// - words within a line are separated by exactly one space.
///
/// Violations are caller bugs; the orchestrator fails loudly on the first
/// and justification silently over-widens on the second.
pub trait Wrap {
    /// Wrap `text` to at most `limit` display columns.
    fn wrap(&self, text: &str, limit: usize) -> Result<Wrapped, AlignError>;
}

/// Default wrap collaborator backed by [`textwrap`].
///
/// Input is split into paragraphs on `\n`; each paragraph has its
/// whitespace runs collapsed to single spaces (escape sequences inside a
/// run are kept, attached to the following word) and is then word-wrapped
/// greedily with no hyphenation. The final line of each paragraph is
/// flagged in the metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wrapper;

impl Wrapper {
    /// Create the default wrapper.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Wrap for Wrapper {
    fn wrap(&self, text: &str, limit: usize) -> Result<Wrapped, AlignError> {
        if limit == 0 {
            return Err(AlignError::InvalidLimit { limit });
        }

        let mut out_lines: Vec<String> = Vec::new();
        let mut infos: Vec<LineInfo> = Vec::new();
        for paragraph in text.split('\n') {
            let normalized = normalize(paragraph);
            let options = textwrap::Options::new(limit)
                .word_separator(textwrap::WordSeparator::AsciiSpace)
                .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit)
                .word_splitter(textwrap::WordSplitter::NoHyphenation);
            let wrapped = textwrap::wrap(&normalized, options);
            let count = wrapped.len();
            for (i, line) in wrapped.into_iter().enumerate() {
                out_lines.push(line.into_owned());
                infos.push(LineInfo {
                    last_in_paragraph: i + 1 == count,
                });
            }
        }
        tracing::debug!(lines = infos.len(), limit, "wrapped input");

        Ok(Wrapped {
            text: out_lines.join("\n"),
            lines: infos,
        })
    }
}

/// Collapse whitespace runs to single spaces, keeping escape sequences.
///
/// Escape sequences found inside a run are emitted after the collapsed
/// space so they still apply to the following word. Leading and trailing
/// whitespace is dropped; escapes in those runs are kept.
fn normalize(paragraph: &str) -> String {
    let mut out = String::with_capacity(paragraph.len());
    let mut pending_escapes = String::new();
    let mut in_run = false;
    let mut seen_word = false;
    let mut idx = 0;

    while idx < paragraph.len() {
        if let Some(len) = ansi_seq_len(paragraph, idx) {
            let seq = &paragraph[idx..idx + len];
            if in_run {
                pending_escapes.push_str(seq);
            } else {
                out.push_str(seq);
            }
            idx += len;
            continue;
        }
        let Some(ch) = paragraph[idx..].chars().next() else {
            break;
        };
        idx += ch.len_utf8();
        if matches!(ch, ' ' | '\t' | '\r') {
            in_run = true;
        } else {
            if in_run {
                if seen_word {
                    out.push(' ');
                }
                in_run = false;
            }
            if !pending_escapes.is_empty() {
                out.push_str(&pending_escapes);
                pending_escapes.clear();
            }
            out.push(ch);
            seen_word = true;
        }
    }
    // Trailing run: drop the whitespace, keep its escapes.
    out.push_str(&pending_escapes);
    out
}
