//! The open registry of token kinds.
//!
//! A [`Type`] is a small copyable identity. The registry ships with a seed
//! set of kinds and lets callers add new named kinds at runtime; once
//! registered, a kind compares, hashes and orders by identity exactly like
//! the built-in ones.
//!
//! Registration is idempotent: registering a name that is already bound
//! returns the identity bound to it. Kinds are never unregistered.

use common_framework::TokenizerError;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Type(u32);

impl Type {
    pub const UNKNOWN: Type = Type(0);
    pub const SPACING: Type = Type(1);
    pub const NEW_LINE: Type = Type(2);
    pub const CARRIAGE_RETURN: Type = Type(3);
    pub const TAB: Type = Type(4);
    pub const PERIOD: Type = Type(5);
    pub const COMMA: Type = Type(6);
    pub const EXCLAMATION: Type = Type(7);
    pub const QUESTION: Type = Type(8);
    pub const COLON: Type = Type(9);
    pub const SEMI_COLON: Type = Type(10);

    /// Registers a new kind under `name`, or returns the kind already bound
    /// to it.
    pub fn register(name: &str) -> Result<Type, TokenizerError> {
        if !is_valid_name(name) {
            return Err(TokenizerError::InvalidTypeName {
                name: name.to_string(),
            });
        }

        if let Some(kind) = Self::lookup(name) {
            return Ok(kind);
        }

        let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have won the race between the two locks.
        if let Some(kind) = registry.ids.get(name) {
            return Ok(*kind);
        }
        let kind = registry.insert(name);
        debug!(target: "lexer_framework::kind", name, id = kind.0, "Registered token type");
        Ok(kind)
    }

    /// Returns the kind bound to `name`, if any.
    pub fn lookup(name: &str) -> Option<Type> {
        let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
        registry.ids.get(name).copied()
    }

    /// Returns every registered kind in registration order.
    pub fn registered() -> Vec<Type> {
        let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
        (0..registry.names.len()).map(|id| Type(id as u32)).collect()
    }

    pub fn name(&self) -> Arc<str> {
        let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&registry.names[self.0 as usize])
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type::{}", self.name())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

const SEED: [(Type, &str); 11] = [
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

static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(Registry::seeded()));

struct Registry {
    names: Vec<Arc<str>>,
    ids: HashMap<Arc<str>, Type>,
}

impl Registry {
    fn seeded() -> Self {
        let mut registry = Registry {
            names: Vec::with_capacity(SEED.len()),
            ids: HashMap::with_capacity(SEED.len()),
        };
        for (kind, name) in SEED {
            let inserted = registry.insert(name);
            debug_assert!(inserted == kind);
        }
        registry
    }

    fn insert(&mut self, name: &str) -> Type {
        let kind = Type(self.names.len() as u32);
        let name: Arc<str> = Arc::from(name);
        self.names.push(Arc::clone(&name));
        self.ids.insert(name, kind);
        kind
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_kinds_have_names() {
        assert_eq!(&*Type::UNKNOWN.name(), "Unknown");
        assert_eq!(&*Type::SEMI_COLON.name(), "SemiColon");
        assert_eq!(Type::lookup("Period"), Some(Type::PERIOD));
    }

    #[test]
    fn test_register_seed_name_returns_seed_kind() {
        assert_eq!(Type::register("Tab").unwrap(), Type::TAB);
    }

    #[test]
    fn test_name_validation() {
        assert!(is_valid_name("Word"));
        assert!(is_valid_name("_private2"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("2fast"));
        assert!(!is_valid_name("with space"));
        assert!(!is_valid_name("dash-ed"));
    }

    #[test]
    fn test_debug_and_display() {
        assert_eq!(format!("{:?}", Type::COMMA), "Type::Comma");
        assert_eq!(Type::COMMA.to_string(), "Comma");
    }
}
