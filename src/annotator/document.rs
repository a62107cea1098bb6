use crate::annotator::{annotate_args, annotate_opcode, parse_block, LineRecord, Token};
use crate::arch::{ArchitectureProfile, ArchitectureRegistry};
use crate::config::Config;

#[derive(Clone, Debug, PartialEq)]
pub enum AnnotatedLine {
    Instruction {
        address: String,
        opcode: Vec<Token>,
        /// Argument tokens, ending with the comment if the line has one.
        args: Vec<Token>,
    },
    /// A line that is not an instruction, kept whole as a single `PlainText` token.
    Unformatted(Token),
}

impl AnnotatedLine {
    pub fn build(
        record: LineRecord,
        profile: Option<&ArchitectureProfile>,
        config: &Config,
    ) -> Self {
        match record {
            LineRecord::Unformatted(text) => AnnotatedLine::Unformatted(Token::PlainText(text)),
            LineRecord::Instruction {
                address,
                opcode,
                args,
            } => AnnotatedLine::Instruction {
                opcode: annotate_opcode(&opcode, profile),
                args: annotate_args(args.as_deref(), profile, config),
                address,
            },
        }
    }

    pub fn comment(&self) -> Option<&Token> {
        match self {
            AnnotatedLine::Instruction { args, .. } => {
                args.last().filter(|token| matches!(token, Token::Comment(_)))
            }
            AnnotatedLine::Unformatted(_) => None,
        }
    }

    /// Argument tokens without the trailing comment.
    pub fn operands(&self) -> &[Token] {
        match self {
            AnnotatedLine::Instruction { args, .. } => match args.last() {
                Some(Token::Comment(_)) => &args[..args.len() - 1],
                _ => args,
            },
            AnnotatedLine::Unformatted(_) => &[],
        }
    }

    pub fn tokens(&self) -> Box<dyn Iterator<Item = &Token> + '_> {
        match self {
            AnnotatedLine::Instruction { opcode, args, .. } => Box::new(opcode.iter().chain(args)),
            AnnotatedLine::Unformatted(token) => Box::new(std::iter::once(token)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// Architecture name, when one resolved and captions are enabled.
    pub caption: Option<String>,
    pub arch_key: Option<String>,
    pub comment_glyph: String,
    pub lines: Vec<AnnotatedLine>,
}

impl Document {
    pub fn instruction_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, AnnotatedLine::Instruction { .. }))
            .count()
    }
}

/// Annotates a listing, looking the architecture up in the built-in registry.
///
/// An unknown key is not an error: the listing is annotated in generic mode.
pub fn annotate(text: &str, arch_key: Option<&str>, config: &Config) -> Document {
    let profile = arch_key.and_then(|key| {
        let profile = ArchitectureRegistry::builtin().lookup(key);
        if profile.is_none() {
            log::warn!("Unknown architecture `{key}`, annotating without registers");
        }
        profile
    });
    annotate_with(text, profile, config)
}

pub fn annotate_with(
    text: &str,
    profile: Option<&ArchitectureProfile>,
    config: &Config,
) -> Document {
    let lines: Vec<AnnotatedLine> = parse_block(text)
        .into_iter()
        .map(|record| AnnotatedLine::build(record, profile, config))
        .collect();

    let caption = profile
        .filter(|_| config.add_arch_caption)
        .map(|profile| profile.name.clone());

    let document = Document {
        caption,
        arch_key: profile.map(|profile| profile.key.clone()),
        comment_glyph: config.comment_glyph.clone(),
        lines,
    };
    log::debug!(
        "Annotated {} lines ({} instructions) as {}",
        document.lines.len(),
        document.instruction_count(),
        document.arch_key.as_deref().unwrap_or("generic")
    );
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::SAMPLE_LISTING;

    #[test]
    fn caption_once_per_document() {
        let document = annotate("0000: nop\n0001: nop", Some("z80"), &Config::default());
        assert_eq!(document.caption.as_deref(), Some("Zilog Z80"));
        assert_eq!(document.arch_key.as_deref(), Some("z80"));

        let config = Config {
            add_arch_caption: false,
            ..Config::default()
        };
        assert_eq!(annotate("0000: nop", Some("z80"), &config).caption, None);
        assert_eq!(annotate("0000: nop", None, &Config::default()).caption, None);
    }

    #[test]
    fn unknown_architecture_is_generic() {
        let document = annotate("0000: ld a, $10", Some("pdp11"), &Config::default());
        assert_eq!(document.arch_key, None);
        assert!(!document
            .lines
            .iter()
            .flat_map(AnnotatedLine::tokens)
            .any(|t| matches!(t, Token::Register(_))));
    }

    #[test]
    fn unformatted_lines_pass_through() {
        let text = "Disassembly of routine\n004A84: beq     $4a96\n\n  -- end --";
        let document = annotate(text, Some("m68k"), &Config::default());
        assert_eq!(document.lines.len(), 4);
        assert_eq!(
            document.lines[0],
            AnnotatedLine::Unformatted(Token::PlainText("Disassembly of routine".to_owned()))
        );
        assert_eq!(document.lines[2], AnnotatedLine::Unformatted(Token::PlainText(String::new())));
        assert_eq!(
            document.lines[3],
            AnnotatedLine::Unformatted(Token::PlainText("  -- end --".to_owned()))
        );
        assert_eq!(document.instruction_count(), 1);
    }

    #[test]
    fn instruction_line_parts() {
        let document = annotate(
            "004A7E: tst.w   $40902a{multiplayer_flag}    ; are we in multiplayer mode?",
            Some("m68k"),
            &Config::default(),
        );
        let line = &document.lines[0];
        let AnnotatedLine::Instruction { address, opcode, .. } = line else {
            panic!("expected an instruction, got: {:?}", line);
        };
        assert_eq!(address, "004A7E");
        assert_eq!(
            opcode,
            &vec![Token::PlainText("tst".to_owned()), Token::SizeSuffix(".w".to_owned())]
        );
        assert_eq!(line.operands().len(), 1);
        assert_eq!(line.operands()[0].hover(), Some("$40902a"));
        assert_eq!(
            line.comment().and_then(Token::hover),
            Some("are we in multiplayer mode?")
        );
    }

    #[test]
    fn sample_listing() {
        let document = annotate(SAMPLE_LISTING, Some("m68k"), &Config::default());
        assert_eq!(document.lines.len(), SAMPLE_LISTING.lines().count());
        assert_eq!(document.instruction_count(), document.lines.len() - 1);
        assert_eq!(document.comment_glyph, "//");

        let symbols = document
            .lines
            .iter()
            .flat_map(AnnotatedLine::tokens)
            .filter(|t| matches!(t, Token::Symbol { .. }))
            .count();
        assert_eq!(symbols, 6);
        for line in &document.lines {
            let comments = line.tokens().filter(|t| matches!(t, Token::Comment(_))).count();
            assert!(comments <= 1, "line: {:?}", line);
        }
    }
}
