// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Cursor as Input;

fn read(bytes: &[u8]) -> (Result<String, ReadError>, String) {
    let mut reader = InteractiveReader::new(Input::new(bytes.to_vec()));
    let mut editor = LineEditor::new(Vec::new(), "$ ");
    let line = editor.read_line(&mut reader);
    let output = String::from_utf8(editor.into_inner()).unwrap();
    (line, output)
}

fn line(bytes: &[u8]) -> String {
    read(bytes).0.unwrap()
}

#[yare::parameterized(
    plain          = { b"ls -la\r", "ls -la" },
    line_feed      = { b"echo hi\n", "echo hi" },
    empty          = { b"\r", "" },
    backspace      = { b"lss\x7f\r", "ls" },
    backspace_head = { b"\x7f\x7fls\r", "ls" },
    insert_middle  = { b"ls\x1b[Dx\r", "lxs" },
    home_insert    = { b"s\x1b[Hl\r", "ls" },
    end_after_home = { b"l\x1b[H\x1b[Fs\r", "ls" },
    delete_key     = { b"lxs\x1b[D\x1b[D\x1b[3~\r", "ls" },
    delete_at_end  = { b"ls\x1b[3~\r", "ls" },
    right_clamped  = { b"l\x1b[C\x1b[Cs\r", "ls" },
    arrows_ignored = { b"l\x1b[A\x1b[Bs\r", "ls" },
    controls_drop  = { b"l\x01\x02s\r", "ls" },
    tab_ignored    = { b"l\ts\r", "ls" },
)]
fn editing(bytes: &[u8], expected: &str) {
    assert_eq!(line(bytes), expected);
}

#[test]
fn utf8_is_assembled() {
    assert_eq!(line("héllo\r".as_bytes()), "héllo");
}

#[test]
fn backspace_removes_whole_char() {
    assert_eq!(line("é\x7fe\r".as_bytes()), "e");
}

#[test]
fn invalid_utf8_is_dropped() {
    assert_eq!(line(b"a\xffb\r"), "ab");
}

#[test]
fn trailing_backslash_continues() {
    let (result, output) = read(b"echo a \\\rb\r");
    assert_eq!(result.unwrap(), "echo a \\\nb");
    assert!(output.contains(CONTINUATION_PROMPT));
}

#[test]
fn escaped_backslash_ends_line() {
    assert_eq!(line(b"echo \\\\\r"), "echo \\\\");
}

#[test]
fn ctrl_d_on_empty_line_is_eof() {
    assert!(matches!(read(b"\x04").0, Err(ReadError::Eof)));
}

#[test]
fn ctrl_d_with_text_is_ignored() {
    assert_eq!(line(b"ls\x04\r"), "ls");
}

#[test]
fn end_of_input_is_eof() {
    assert!(matches!(read(b"ls").0, Err(ReadError::Eof)));
}

#[test]
fn ctrl_c_interrupts() {
    assert!(matches!(read(b"ls\x03").0, Err(ReadError::Interrupted)));
}

#[test]
fn ctrl_l_clears_screen() {
    let (result, output) = read(b"ls\x0c\r");
    assert_eq!(result.unwrap(), "ls");
    assert!(output.contains("\x1b[2J\x1b[1;1H"));
}

#[test]
fn redraw_moves_cursor_back() {
    let (_, output) = read(b"abc\x1b[D\x1b[D\r");
    assert!(output.contains("\r\x1b[2K$ abc\x1b[2D"));
}

#[test]
fn first_draw_is_prompt() {
    let (_, output) = read(b"\r");
    assert!(output.starts_with("\r\x1b[2K$ "));
    assert!(output.ends_with("\r\n"));
}

#[test]
fn custom_continuation_prompt() {
    let mut reader = InteractiveReader::new(Input::new(b"a\\\rb\r".to_vec()));
    let mut editor = LineEditor::new(Vec::new(), "$ ").with_continuation("... ");
    assert_eq!(editor.read_line(&mut reader).unwrap(), "a\\\nb");
    let output = String::from_utf8(editor.into_inner()).unwrap();
    assert!(output.contains("\r\x1b[2K... b"));
}
