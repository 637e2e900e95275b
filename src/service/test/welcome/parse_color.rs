use crate::service::welcome::parse_color;

/// Tests valid colors. Expected: six hex digits parse with or without the
/// leading `#`.
#[test]
fn parses_hex_colors() {
    assert_eq!(parse_color("#5865F2"), Some(0x5865F2));
    assert_eq!(parse_color("ff0000"), Some(0xFF0000));
}

/// Tests invalid colors. Expected: wrong lengths and non-hex input are
/// rejected.
#[test]
fn rejects_malformed_colors() {
    assert_eq!(parse_color("#fff"), None);
    assert_eq!(parse_color("#12345G"), None);
    assert_eq!(parse_color(""), None);
}
