use std::sync::LazyLock;

use regex::Regex;

use crate::annotator::Token;
use crate::arch::ArchitectureProfile;

static SIZE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.[qlwb]$").expect("size suffix grammar"));

/// Splits `move.w` into `move` and a `.w` size suffix on architectures with sized opcodes.
pub fn annotate_opcode(opcode: &str, profile: Option<&ArchitectureProfile>) -> Vec<Token> {
    let sized = profile.is_some_and(|profile| profile.opcode_sizes);
    let suffix = if sized { SIZE_SUFFIX.find(opcode) } else { None };

    match suffix {
        Some(m) => {
            let mut tokens = Vec::with_capacity(2);
            if m.start() > 0 {
                tokens.push(Token::PlainText(opcode[..m.start()].to_owned()));
            }
            tokens.push(Token::SizeSuffix(m.as_str().to_owned()));
            tokens
        }
        None => vec![Token::PlainText(opcode.to_owned())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::ArchitectureRegistry;

    fn arch(key: &str) -> Option<&'static ArchitectureProfile> {
        ArchitectureRegistry::builtin().lookup(key)
    }

    #[test]
    fn sized_opcode() {
        assert_eq!(
            annotate_opcode("move.W", arch("m68k")),
            vec![Token::PlainText("move".to_owned()), Token::SizeSuffix(".W".to_owned())]
        );
    }

    #[test]
    fn only_trailing_suffix_counts() {
        assert_eq!(
            annotate_opcode("mov.wx", arch("sh2")),
            vec![Token::PlainText("mov.wx".to_owned())]
        );
        assert_eq!(
            annotate_opcode("a.b.l", arch("sh2")),
            vec![Token::PlainText("a.b".to_owned()), Token::SizeSuffix(".l".to_owned())]
        );
    }

    #[test]
    fn unsized_architectures_leave_opcode_alone() {
        for profile in [arch("z80"), arch("x86"), None] {
            assert_eq!(
                annotate_opcode("ld.b", profile),
                vec![Token::PlainText("ld.b".to_owned())]
            );
        }
    }
}
