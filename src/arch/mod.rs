mod defaults;
pub use defaults::*;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Class-list prefix that marks an architecture selector, e.g. `pdasm-arch-m68k`.
pub const SELECTOR_PREFIX: &str = "pdasm-arch-";

/// Notations accepted when no architecture is selected.
const DEFAULT_HEX_NOTATION: &str = r"\$|0x";

const HEX_DIGITS: &str = "(?P<value>[0-9a-f]+)";
const HEX_EXTRA: &str = r"(?P<size>\.[qlwb])?(?:\{(?P<label>[^}]+)\})?";

static DEFAULT_HEX_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&hex_grammar(DEFAULT_HEX_NOTATION, false)).expect("default hex grammar")
});

static BUILTIN: LazyLock<ArchitectureRegistry> = LazyLock::new(|| {
    match ArchitectureRegistry::new(ARCHITECTURES.iter().copied()) {
        Ok(registry) => registry,
        Err(err) => panic!("built-in architecture table is invalid: {err}"),
    }
});

/// Static description of an architecture, before its patterns are compiled.
#[derive(Copy, Clone, Debug)]
pub struct ArchitectureDef {
    pub key: &'static str,
    pub name: &'static str,
    /// Regex source for the hex marker, e.g. `\$` or `h`.
    pub hex_notation: &'static str,
    /// The marker follows the digits (`10F0h`).
    pub hex_postfix: bool,
    /// Values starting with a letter are written with a leading `0` (`0F0h`).
    pub zero_prefix: bool,
    /// Opcodes may carry a size suffix (`move.w`).
    pub opcode_sizes: bool,
    /// Regex alternation of register names.
    pub registers: &'static str,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PatternField {
    HexNotation,
    Registers,
}

impl fmt::Display for PatternField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternField::HexNotation => write!(f, "hex notation"),
            PatternField::Registers => write!(f, "register"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("architecture `{key}` has an invalid {field} pattern: {source}")]
    InvalidPattern {
        key: String,
        field: PatternField,
        source: regex::Error,
    },
    #[error("architecture `{key}` has a {field} pattern that matches empty text")]
    EmptyMatch { key: String, field: PatternField },
    #[error("architecture `{0}` is defined more than once")]
    DuplicateKey(String),
}

/// A compiled architecture profile. Read-only once built.
#[derive(Clone, Debug)]
pub struct ArchitectureProfile {
    pub key: String,
    pub name: String,
    pub hex_notation: String,
    pub hex_postfix: bool,
    pub zero_prefix: bool,
    pub opcode_sizes: bool,
    pub registers: String,
    hex_grammar: Regex,
    register_grammar: Regex,
}

impl ArchitectureProfile {
    pub fn compile(def: &ArchitectureDef) -> Result<Self, RegistryError> {
        let hex_grammar = compile_field(
            def.key,
            PatternField::HexNotation,
            &hex_grammar(def.hex_notation, def.hex_postfix),
        )?;
        let register_grammar = compile_field(
            def.key,
            PatternField::Registers,
            &format!("(?i)(?:{})", def.registers),
        )?;

        Ok(Self {
            key: def.key.to_owned(),
            name: def.name.to_owned(),
            hex_notation: def.hex_notation.to_owned(),
            hex_postfix: def.hex_postfix,
            zero_prefix: def.zero_prefix,
            opcode_sizes: def.opcode_sizes,
            registers: def.registers.to_owned(),
            hex_grammar,
            register_grammar,
        })
    }

    /// Grammar with `notation`, `value`, `size` and `label` capture groups.
    pub fn hex_grammar(&self) -> &Regex {
        &self.hex_grammar
    }

    pub fn register_grammar(&self) -> &Regex {
        &self.register_grammar
    }
}

/// Hex grammar used when no architecture is selected: prefix `$` or `0x`.
pub fn default_hex_grammar() -> &'static Regex {
    &DEFAULT_HEX_GRAMMAR
}

fn hex_grammar(notation: &str, postfix: bool) -> String {
    let notation = format!("(?P<notation>{notation})");
    if postfix {
        format!("(?i){HEX_DIGITS}{notation}{HEX_EXTRA}")
    } else {
        format!("(?i){notation}{HEX_DIGITS}{HEX_EXTRA}")
    }
}

fn compile_field(key: &str, field: PatternField, source: &str) -> Result<Regex, RegistryError> {
    let regex = Regex::new(source).map_err(|source| RegistryError::InvalidPattern {
        key: key.to_owned(),
        field,
        source,
    })?;
    // An alternation like `pc|` would hand out empty register tokens on every line
    if field == PatternField::Registers && regex.is_match("") {
        return Err(RegistryError::EmptyMatch {
            key: key.to_owned(),
            field,
        });
    }
    Ok(regex)
}

pub struct ArchitectureRegistry {
    profiles: Vec<ArchitectureProfile>,
    index: HashMap<String, usize>,
}

impl ArchitectureRegistry {
    pub fn new(defs: impl IntoIterator<Item = ArchitectureDef>) -> Result<Self, RegistryError> {
        let mut profiles = Vec::new();
        let mut index = HashMap::new();
        for def in defs {
            if index.contains_key(def.key) {
                return Err(RegistryError::DuplicateKey(def.key.to_owned()));
            }
            index.insert(def.key.to_owned(), profiles.len());
            profiles.push(ArchitectureProfile::compile(&def)?);
        }
        log::debug!("Built architecture registry with {} profiles", profiles.len());
        Ok(Self { profiles, index })
    }

    /// The process-wide registry of built-in architectures.
    pub fn builtin() -> &'static ArchitectureRegistry {
        &BUILTIN
    }

    pub fn lookup(&self, key: &str) -> Option<&ArchitectureProfile> {
        self.index.get(key).map(|&i| &self.profiles[i])
    }

    /// Picks the first `pdasm-arch-<key>` entry of a class list that names a known profile.
    pub fn resolve_selector(&self, selector: &str) -> Option<&ArchitectureProfile> {
        selector
            .split_whitespace()
            .filter_map(|class| class.strip_prefix(SELECTOR_PREFIX))
            .find_map(|key| self.lookup(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArchitectureProfile> {
        self.profiles.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|profile| profile.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(
        key: &'static str,
        hex_notation: &'static str,
        registers: &'static str,
    ) -> ArchitectureDef {
        ArchitectureDef {
            key,
            name: "Test",
            hex_notation,
            hex_postfix: false,
            zero_prefix: false,
            opcode_sizes: false,
            registers,
        }
    }

    #[test]
    fn builtin_has_every_architecture() {
        let registry = ArchitectureRegistry::builtin();
        assert_eq!(registry.len(), 9);
        for key in ["m68k", "sh2", "z80", "6502", "i960", "h8", "8086", "x86", "arm"] {
            assert!(registry.lookup(key).is_some(), "key: {}", key);
        }
        assert_eq!(registry.lookup("m68k").map(|p| p.name.as_str()), Some("Motorola M68000"));
        assert!(registry.lookup("M68K").is_none());
        assert!(registry.lookup("pdp11").is_none());
    }

    #[test]
    fn keys_keep_table_order() {
        let keys: Vec<&str> = ArchitectureRegistry::builtin().keys().collect();
        assert_eq!(keys.first(), Some(&"m68k"));
        assert_eq!(keys.last(), Some(&"arm"));
    }

    #[test]
    fn bad_register_pattern_fails_at_build() {
        let result = ArchitectureRegistry::new([def("bad", r"\$", "pc|r[0-")]);
        match result {
            Err(RegistryError::InvalidPattern { key, field, .. }) => {
                assert_eq!(key, "bad");
                assert_eq!(field, PatternField::Registers);
            }
            _ => panic!("expected an invalid register pattern"),
        }
    }

    #[test]
    fn bad_notation_pattern_fails_at_build() {
        let result = ArchitectureRegistry::new([def("bad", "(", "pc")]);
        assert!(matches!(
            result,
            Err(RegistryError::InvalidPattern { field: PatternField::HexNotation, .. })
        ));
    }

    #[test]
    fn empty_register_alternative_is_rejected() {
        let result = ArchitectureRegistry::new([def("bad", r"\$", "pc|")]);
        assert!(matches!(result, Err(RegistryError::EmptyMatch { .. })));
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let result = ArchitectureRegistry::new([def("a", r"\$", "pc"), def("a", "0x", "sp")]);
        assert!(matches!(result, Err(RegistryError::DuplicateKey(key)) if key == "a"));
    }

    #[test]
    fn error_message_names_the_architecture() {
        let err = ArchitectureRegistry::new([def("broken", r"\$", "(")])
            .err()
            .expect("pattern should not compile");
        assert!(err
            .to_string()
            .starts_with("architecture `broken` has an invalid register pattern"));
    }

    #[test]
    fn selector_picks_first_known_architecture() {
        let registry = ArchitectureRegistry::builtin();
        let selector = "pdasm pdasm-arch-nope pdasm-arch-z80 pdasm-arch-x86";
        let profile = registry.resolve_selector(selector);
        assert_eq!(profile.map(|p| p.key.as_str()), Some("z80"));
        assert!(registry.resolve_selector("pdasm").is_none());
        assert!(registry.resolve_selector("").is_none());
    }

    #[test]
    fn register_alternation_prefers_listed_order() {
        let z80 = ArchitectureRegistry::builtin().lookup("z80").unwrap();
        let found = z80.register_grammar().find("af', bc").map(|m| m.as_str());
        assert_eq!(found, Some("af'"));
    }

    #[test]
    fn default_grammar_accepts_both_notations() {
        let grammar = default_hex_grammar();
        let caps = grammar.captures("ld 0x1F").unwrap();
        assert_eq!(&caps["notation"], "0x");
        assert_eq!(&caps["value"], "1F");
        let caps = grammar.captures("lda $ff").unwrap();
        assert_eq!(&caps["notation"], "$");
    }
}
