//! Unit tests for dependency keys

use containable_domain::Key;

#[test]
fn test_symbol_key_display() {
    assert_eq!(Key::symbol("test").to_string(), ":test");
}

#[test]
fn test_string_key_display() {
    assert_eq!(Key::from("test").to_string(), "\"test\"");
    assert_eq!(Key::string("one.two").to_string(), "\"one.two\"");
}

#[test]
fn test_both_forms_normalize_identically() {
    let symbol = Key::symbol("logger");
    let string = Key::from("logger".to_string());

    assert_eq!(symbol.as_str(), string.as_str());
    assert_ne!(symbol, string);
    assert!(symbol.is_symbol());
    assert!(!string.is_symbol());
}

#[test]
fn test_string_key_escapes_quotes() {
    assert_eq!(Key::from("a\"b").to_string(), r#""a\"b""#);
}
