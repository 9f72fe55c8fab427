use lexer_framework::{TokenizerError, Type};
use std::collections::HashMap;

#[test]
fn test_register_new_type() {
    let word = Type::register("KindTestWord").unwrap();
    assert_eq!(&*word.name(), "KindTestWord");
    assert_eq!(Type::lookup("KindTestWord"), Some(word));
    assert_ne!(word, Type::UNKNOWN);
    assert!(Type::registered().contains(&word));
}

#[test]
fn test_register_is_idempotent() {
    let first = Type::register("Word").unwrap();
    let second = Type::register("Word").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.id(), second.id());
}

#[test]
fn test_registered_kinds_are_distinct() {
    let alpha = Type::register("KindTestAlpha").unwrap();
    let beta = Type::register("KindTestBeta").unwrap();
    assert_ne!(alpha, beta);
}

#[test]
fn test_registered_kind_works_as_key() {
    let number = Type::register("Number").unwrap();
    let mut counts = HashMap::new();
    *counts.entry(number).or_insert(0) += 1;
    *counts.entry(Type::PERIOD).or_insert(0) += 1;
    *counts.entry(Type::register("Number").unwrap()).or_insert(0) += 1;
    assert_eq!(counts[&number], 2);
    assert_eq!(counts[&Type::PERIOD], 1);
}

#[test]
fn test_register_invalid_name() {
    for name in ["", "1st", "has space", "a.b"] {
        assert!(matches!(
            Type::register(name),
            Err(TokenizerError::InvalidTypeName { .. })
        ));
        assert_eq!(Type::lookup(name), None);
    }
}

#[test]
fn test_register_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| Type::register("KindTestShared").unwrap()))
        .collect();
    let kinds: Vec<Type> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(kinds.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_seed_kinds() {
    let expected = [
        (Type::UNKNOWN, "Unknown"),
        (Type::SPACING, "Spacing"),
        (Type::NEW_LINE, "NewLine"),
        (Type::CARRIAGE_RETURN, "CarriageReturn"),
        (Type::TAB, "Tab"),
        (Type::PERIOD, "Period"),
        (Type::COMMA, "Comma"),
        (Type::EXCLAMATION, "Exclamation"),
        (Type::QUESTION, "Question"),
        (Type::COLON, "Colon"),
        (Type::SEMI_COLON, "SemiColon"),
    ];
    for (kind, name) in expected {
        assert_eq!(Type::lookup(name), Some(kind));
        assert_eq!(kind.to_string(), name);
    }
}
