use super::*;

#[test]
fn buffer_exhaustion_converts_to_resource_exhausted() {
    let err: ScanError = BufferError::Exhausted { capacity: 16 }.into();
    assert_eq!(err, ScanError::ResourceExhausted { capacity: 16 });
    assert_eq!(err.offset(), None);
}

#[test]
fn offset_points_at_offending_byte() {
    let err = ScanError::UnexpectedCharacter {
        ch: '@',
        offset: 7,
        line: 0,
        column: 7,
    };
    assert_eq!(err.offset(), Some(7));

    let err = ScanError::UnterminatedString {
        offset: 3,
        line: 1,
        column: 0,
    };
    assert_eq!(err.offset(), Some(3));
}

#[test]
fn messages_name_the_problem() {
    let err = ScanError::UnexpectedCharacter {
        ch: '#',
        offset: 0,
        line: 2,
        column: 4,
    };
    assert_eq!(
        err.to_string(),
        "unexpected character '#' at line 2, column 4"
    );

    let err = DecodeError::TypeMismatch {
        kind: TokenKind::Identifier,
    };
    assert_eq!(
        err.to_string(),
        "token of kind Identifier cannot be decoded as an integer"
    );
}
