// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::style::{RESET, RESET_ATTRIBUTES};
use similar_asserts::assert_eq;

/// Remove every `ESC [ ... <letter>` sequence so layouts can be compared.
fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn extra_paren() -> Diagnostic {
    Diagnostic::error()
        .domain("cchell::lexer")
        .message("extra closing bracket ')' found.")
        .annotation("try removing the ')'.")
        .source(SourceLocation::new(0, 3))
        .build()
}

#[test]
fn builder_defaults() {
    let diag = Diagnostic::warning().build();
    assert_eq!(diag.severity(), Severity::Warning);
    assert_eq!(diag.domain(), "");
    assert_eq!(diag.message(), "");
    assert_eq!(diag.location(), SourceLocation::default());
    assert_eq!(diag.length(), 1);
}

#[test]
fn zero_length_is_bumped_to_one() {
    let diag = Diagnostic::note().length(0).build();
    assert_eq!(diag.length(), 1);
}

#[test]
fn display_is_one_based() {
    assert_eq!(
        extra_paren().to_string(),
        "error in cchell::lexer at 1:4: extra closing bracket ')' found."
    );
}

#[test]
fn serializes_location_as_source() {
    let json = serde_json::to_value(extra_paren()).unwrap();
    assert_eq!(json["severity"], "error");
    assert_eq!(json["source"]["line"], 0);
    assert_eq!(json["source"]["column"], 3);
    assert_eq!(json["length"], 1);
}

#[test]
fn colorless_render() {
    let out = Renderer::colorless().render(&extra_paren(), "foo)", "argv");
    assert_eq!(
        out,
        "error in cchell::lexer at argv:1:4\n  extra closing bracket ')' found.\n  try removing the ')'.\n"
    );
}

#[test]
fn colored_render_layout() {
    let out = Renderer::colored(Theme::default()).render(&extra_paren(), "foo)", "argv");
    let expected = concat!(
        "error at cchell::lexer: extra closing bracket ')' found.\n",
        "   | /* at argv:1:4 */       \n",
        " 1 | foo)                    \n",
        "        ^\n",
        "        try removing the ')'.\n",
    );
    assert_eq!(strip_ansi(&out), expected);
}

#[test]
fn colored_render_highlights_span() {
    let theme = Theme::default();
    let diag = Diagnostic::error()
        .message("m")
        .source(SourceLocation::new(0, 4))
        .length(3)
        .build();
    let out = Renderer::colored(theme.clone()).render(&diag, "cat foo bar", "argv");
    let highlighted = format!("{}foo{RESET_ATTRIBUTES}", theme.error_code_color.fg());
    assert!(out.contains(&highlighted), "missing highlight in {out:?}");
    assert!(strip_ansi(&out).contains("         ^^^\n"));
}

#[test]
fn colored_render_alternates_backgrounds() {
    let theme = Theme::default();
    let diag = Diagnostic::error()
        .source(SourceLocation::new(1, 0))
        .build();
    let out = Renderer::colored(theme.clone()).render(&diag, "one\ntwo", "argv");
    let rows: Vec<&str> = out.lines().collect();
    assert!(rows[1].starts_with(&theme.alt_line_color.bg().to_string()));
    assert!(rows[2].starts_with(&theme.line_color.bg().to_string()));
    assert!(rows[3].starts_with(&theme.alt_line_color.bg().to_string()));
    assert!(rows[3].ends_with(RESET));
}

#[test]
fn colored_render_context_window() {
    let raw = "a\nb\nc\nd\ne\nf\ng\nh\ni\nj\nk";
    let diag = Diagnostic::error()
        .source(SourceLocation::new(9, 0))
        .build();
    let plain = strip_ansi(&Renderer::colored(Theme::default()).render(&diag, raw, "f"));
    let gutters: Vec<&str> = plain
        .lines()
        .skip(2)
        .take_while(|l| l.contains('|'))
        .map(|l| &l[..3])
        .collect();
    assert_eq!(gutters, vec!["  8", "  9", " 10", " 11"]);
}

#[test]
fn context_lines_zero_shows_only_error_line() {
    let theme = Theme {
        context_lines: 0,
        ..Theme::default()
    };
    let diag = Diagnostic::error()
        .source(SourceLocation::new(1, 0))
        .build();
    let plain = strip_ansi(&Renderer::colored(theme).render(&diag, "x\ny\nz", "f"));
    let rows: Vec<&str> = plain.lines().filter(|l| l.contains("| ")).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[1].starts_with(" 2 | y"));
}

#[test]
fn header_without_domain() {
    let diag = Diagnostic::note().message("hello").build();
    let plain = strip_ansi(&Renderer::colored(Theme::default()).render(&diag, "x", "f"));
    assert!(plain.starts_with("note: hello\n"));
}

#[test]
fn theme_from_partial_toml() {
    let theme: Theme = toml::from_str(
        r##"
        error_color = "#ff0000 bold"
        context_lines = 4
        "##,
    )
    .unwrap();
    assert_eq!(
        theme.error_color,
        crate::style::Color::rgb(255, 0, 0).with(crate::style::Attributes::BOLD)
    );
    assert_eq!(theme.context_lines, 4);
    assert_eq!(theme.right_padding, Theme::default().right_padding);
}

#[test]
fn theme_rejects_unknown_keys() {
    assert!(toml::from_str::<Theme>("colour = \"#000000\"").is_err());
}
