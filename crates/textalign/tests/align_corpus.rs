//! End-to-end alignment corpus.
//!
//! Table-driven cases covering all four modes against wrapped multi-line
//! input, wide characters, and ANSI-colored text. Expected strings are
//! exact, trailing spaces included.

use textalign::{AlignError, Mode, align, visible_width};

/// One corpus case: input, limit, mode, and the exact expected output.
struct AlignCase {
    input: &'static str,
    limit: usize,
    mode: Mode,
    expected: &'static str,
}

const CASES: &[AlignCase] = &[
    AlignCase {
        input: "hello",
        limit: 10,
        mode: Mode::Left,
        expected: "hello     ",
    },
    AlignCase {
        input: "Serverless \u{1F680} computing is the future",
        limit: 15,
        mode: Mode::Left,
        expected: "Serverless \u{1F680}  \ncomputing is   \nthe future     ",
    },
    AlignCase {
        input: "hello",
        limit: 10,
        mode: Mode::Right,
        expected: "     hello",
    },
    AlignCase {
        input: "lorem ipsum dolor sit amet",
        limit: 12,
        mode: Mode::Right,
        expected: " lorem ipsum\n   dolor sit\n        amet",
    },
    AlignCase {
        input: "hello",
        limit: 11,
        mode: Mode::Center,
        expected: "   hello   ",
    },
    AlignCase {
        input: "Distributed systems are complex",
        limit: 16,
        mode: Mode::Center,
        expected: "  Distributed   \n  systems are   \n    complex     ",
    },
    AlignCase {
        input: "The quick brown fox jumps over the lazy dog",
        limit: 12,
        mode: Mode::Justify,
        expected: "The    quick\nbrown    fox\njumps   over\nthe lazy dog",
    },
    AlignCase {
        input: "hello",
        limit: 15,
        mode: Mode::Justify,
        expected: "hello",
    },
];

#[test]
fn corpus_matches_exactly() {
    for case in CASES {
        let out = align(case.input, case.limit, case.mode).unwrap();
        assert_eq!(
            out, case.expected,
            "mode {} limit {} on {:?}",
            case.mode, case.limit, case.input
        );
    }
}

#[test]
fn corpus_lines_never_exceed_the_limit() {
    for case in CASES {
        let out = align(case.input, case.limit, case.mode).unwrap();
        for line in out.split('\n') {
            assert!(
                visible_width(line) <= case.limit,
                "mode {} produced an over-wide line {:?}",
                case.mode,
                line
            );
        }
    }
}

#[test]
fn colored_text_aligns_by_visible_width() {
    let input = "\x1b[1;32mstatus\x1b[0m ok";
    let out = align(input, 12, Mode::Right).unwrap();
    assert_eq!(out, "   \x1b[1;32mstatus\x1b[0m ok");
    assert_eq!(visible_width(&out), 12);
}

#[test]
fn colored_text_justifies_across_lines() {
    let input = "\x1b[31mThe\x1b[0m quick brown fox jumps over the lazy dog";
    let out = align(input, 12, Mode::Justify).unwrap();
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines[0], "\x1b[31mThe\x1b[0m    quick");
    // Inner lines span the limit; the paragraph's last line does not
    // stretch.
    for line in &lines[..lines.len() - 1] {
        assert_eq!(visible_width(line), 12);
    }
    assert_eq!(lines[lines.len() - 1], "the lazy dog");
}

#[test]
fn multi_paragraph_justify_keeps_paragraph_tails_ragged() {
    let input = "one two three four five\nsix seven";
    let out = align(input, 10, Mode::Justify).unwrap();
    let lines: Vec<&str> = out.split('\n').collect();
    // Paragraph 1 wraps to three lines; only its last stays ragged.
    assert_eq!(lines.len(), 4);
    assert_eq!(visible_width(lines[0]), 10);
    assert_eq!(visible_width(lines[1]), 10);
    assert_eq!(lines[2], "five");
    assert_eq!(lines[3], "six seven");
}

#[test]
fn zero_limit_errors_in_every_mode() {
    for mode in [Mode::Left, Mode::Right, Mode::Center, Mode::Justify] {
        let err = align("hello", 0, mode).unwrap_err();
        assert_eq!(err, AlignError::InvalidLimit { limit: 0 });
    }
}
