use ascii_comparator as ac;
use ac::AsciiError;
use pretty_assertions::assert_eq;

#[test]
fn test_bytes_to_text() {
    assert_eq!(ac::bytes_to_text(Some(b"ABC".as_slice())).as_deref(), Some("ABC"));
    assert_eq!(ac::bytes_to_text(None), None);
}

#[test]
fn test_bytes_to_text_high_byte_is_unsigned() {
    // 0xff widens to U+00FF rather than a sign-extended code
    let text = ac::bytes_to_text(Some([0xff].as_slice())).unwrap();
    assert_eq!(text.chars().next().map(u32::from), Some(0xff));
}

#[test]
fn test_bytes_to_text_range() {
    assert_eq!(ac::bytes_to_text_range(&[65, 66, 67], 1, 2).unwrap(), "BC");
    let err = ac::bytes_to_text_range(&[0xff, 66, 67], 0, 3).unwrap_err();
    assert_eq!(err, AsciiError::InvalidArgument { index: 0, byte: 0xff });
    assert!(err.to_string().starts_with("invalid argument"));
}

#[test]
fn test_text_to_bytes_with_terminators() {
    assert_eq!(ac::text_to_bytes_terminated("AB", 0x00, 0xff), vec![65, 66, 0, 255]);
}

#[test]
fn test_text_to_bytes_range() {
    assert_eq!(ac::text_to_bytes_range("key=value", 4, 9), b"value".to_vec());
}

#[test]
fn test_digits() {
    assert_eq!(ac::digits_to_bytes(7), b"7".to_vec());
    assert_eq!(ac::digits_to_bytes(42), b"42".to_vec());
    assert_eq!(ac::digits_to_bytes(999), b"999".to_vec());
    assert_eq!(ac::digits_to_bytes(12345), b"12345".to_vec());
    assert_eq!(ac::digits_to_bytes(0), b"0".to_vec());
    assert_eq!(ac::long_digits_to_bytes(4_321), b"4321".to_vec());
    assert_eq!(ac::long_digits_to_bytes(10_000_000_000), b"10000000000".to_vec());
}

#[test]
fn test_round_trip_ascii() {
    let text = "GET /index.html HTTP/1.1";
    let back = ac::bytes_to_text(Some(ac::text_to_bytes(text).as_slice())).unwrap();
    assert_eq!(back, text);
}
