use super::*;

fn cursor(source: &str) -> Cursor<'_> {
    Cursor::new(source, LineTracking::Whitespace)
}

// === Peek ===

#[test]
fn peek_returns_first_char() {
    let c = cursor("abc");
    assert_eq!(c.peek(), Some('a'));
    assert_eq!(c.peek_nth(0), Some('a'));
}

#[test]
fn peek_nth_looks_ahead_without_moving() {
    let c = cursor("abc");
    assert_eq!(c.peek_nth(1), Some('b'));
    assert_eq!(c.peek_nth(2), Some('c'));
    assert_eq!(c.peek_nth(3), None);
    assert_eq!(c.offset(), 0);
}

#[test]
fn peek_on_empty_is_none() {
    let c = cursor("");
    assert_eq!(c.peek(), None);
    assert_eq!(c.peek(), None);
}

#[test]
fn interior_nul_is_a_character_not_eof() {
    let c = cursor("\0x");
    assert_eq!(c.peek(), Some('\0'));
    assert_eq!(c.peek_nth(1), Some('x'));
}

// === Consume ===

#[test]
fn consume_advances_offset_and_column() {
    let mut c = cursor("ab");
    assert_eq!(c.consume(), Some('a'));
    assert_eq!(c.position(), Position { offset: 1, line: 0, column: 1 });
    assert_eq!(c.consume(), Some('b'));
    assert_eq!(c.position(), Position { offset: 2, line: 0, column: 2 });
    assert_eq!(c.peek(), None);
}

#[test]
fn consume_at_eof_does_not_move() {
    let mut c = cursor("a");
    c.consume();
    let before = c.position();
    assert_eq!(c.consume(), None);
    assert_eq!(c.position(), before);
}

#[test]
fn consume_multibyte_advances_by_utf8_width() {
    let mut c = cursor("é!");
    assert_eq!(c.consume(), Some('é'));
    assert_eq!(c.offset(), 2);
    assert_eq!(c.column(), 1);
    assert_eq!(c.peek(), Some('!'));
}

// === Line Tracking ===

#[test]
fn whitespace_mode_resets_on_each_whitespace_char() {
    let mut c = cursor("ab \t\rc");
    c.consume();
    c.consume();
    assert_eq!((c.line(), c.column()), (0, 2));
    c.consume(); // ' '
    assert_eq!((c.line(), c.column()), (1, 0));
    c.consume(); // '\t'
    assert_eq!((c.line(), c.column()), (2, 0));
    c.consume(); // '\r'
    assert_eq!((c.line(), c.column()), (3, 0));
    c.consume(); // 'c'
    assert_eq!((c.line(), c.column()), (3, 1));
}

#[test]
fn whitespace_mode_does_not_reset_on_newline_consumption() {
    let mut c = cursor("\nx");
    c.consume();
    assert_eq!((c.line(), c.column()), (0, 1));
}

#[test]
fn line_break_mode_treats_whitespace_as_columns() {
    let mut c = Cursor::new("a \tb", LineTracking::LineBreak);
    c.eat_while(|_| true);
    assert_eq!((c.line(), c.column()), (0, 4));
}

#[test]
fn mark_line_break_moves_to_next_line() {
    let mut c = Cursor::new("abc", LineTracking::LineBreak);
    c.consume();
    c.consume();
    c.mark_line_break(4);
    assert_eq!((c.line(), c.column()), (5, 0));
}

// === Eat & Slice ===

#[test]
fn eat_while_counts_and_stops() {
    let mut c = cursor("123abc");
    assert_eq!(c.eat_while(|ch| ch.is_ascii_digit()), 3);
    assert_eq!(c.peek(), Some('a'));
    assert_eq!(c.slice_from(0), "123");
}

#[test]
fn eat_while_stops_at_eof() {
    let mut c = cursor("999");
    assert_eq!(c.eat_while(|ch| ch.is_ascii_digit()), 3);
    assert_eq!(c.peek(), None);
}

#[test]
fn slice_extracts_byte_range() {
    let c = cursor("hello world");
    assert_eq!(c.slice(6, 11), "world");
    assert_eq!(c.slice(0, 5), "hello");
}

#[test]
fn whitespace_class_is_space_tab_cr() {
    assert!(is_whitespace(' '));
    assert!(is_whitespace('\t'));
    assert!(is_whitespace('\r'));
    assert!(!is_whitespace('\n'));
    assert!(!is_whitespace('\u{a0}'));
}

// === Truncation ===

#[test]
fn truncation_keeps_short_sources_whole() {
    assert_eq!(truncate_to_char_boundary("abc", 3), "abc");
}

#[test]
fn truncation_backs_off_to_a_char_boundary() {
    // 'é' spans bytes 1..3; cutting at 2 would split it.
    assert_eq!(truncate_to_char_boundary("aé", 2), "a");
    assert_eq!(truncate_to_char_boundary("aéb", 3), "aé");
}
