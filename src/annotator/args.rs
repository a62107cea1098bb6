use regex::Captures;

use crate::annotator::Token;
use crate::arch::{default_hex_grammar, ArchitectureProfile};
use crate::config::Config;

pub const COMMENT_MARKER: char = ';';

/// Text still waiting for a later stage, or a finished token.
#[derive(Debug)]
enum Piece<'a> {
    Text(&'a str),
    Token(Token),
}

/// Splits off everything after the first comment marker. Both halves are trimmed.
pub fn split_comment(text: &str) -> (&str, Option<&str>) {
    match text.split_once(COMMENT_MARKER) {
        Some((left, right)) => (left.trim(), Some(right.trim())),
        None => (text.trim(), None),
    }
}

/// Tokenizes the argument part of an instruction line.
///
/// Stages run in a fixed order and each one only sees text the previous ones
/// left unclaimed: comment, then one hex literal or symbol, then one register
/// per remaining run of text. The register stage only runs with a profile.
pub fn annotate_args(
    args: Option<&str>,
    profile: Option<&ArchitectureProfile>,
    config: &Config,
) -> Vec<Token> {
    let Some(args) = args else {
        return Vec::new();
    };
    let (left, comment) = split_comment(args);

    let mut pieces = extract_literal(left, profile, config);
    if let Some(profile) = profile {
        pieces = pieces
            .into_iter()
            .flat_map(|piece| match piece {
                Piece::Text(text) => extract_register(text, profile),
                token => vec![token],
            })
            .collect();
    }

    let mut tokens: Vec<Token> = pieces
        .into_iter()
        .filter_map(|piece| match piece {
            Piece::Text("") => None,
            Piece::Text(text) => Some(Token::PlainText(text.to_owned())),
            Piece::Token(token) => Some(token),
        })
        .collect();

    if let Some(comment) = comment {
        tokens.push(Token::Comment(comment.to_owned()));
    }
    tokens
}

fn extract_literal<'a>(
    text: &'a str,
    profile: Option<&ArchitectureProfile>,
    config: &Config,
) -> Vec<Piece<'a>> {
    let grammar = match profile {
        Some(profile) => profile.hex_grammar(),
        None => default_hex_grammar(),
    };
    let Some(caps) = grammar.captures(text) else {
        return vec![Piece::Text(text)];
    };
    let Some(whole) = caps.get(0) else {
        return vec![Piece::Text(text)];
    };

    let zero_prefix = profile.is_some_and(|profile| profile.zero_prefix);
    if zero_prefix && caps["value"].starts_with(|c: char| c.is_ascii_alphabetic()) {
        // Under this convention a literal never starts with a letter; `ah` or `A000h` are not hex
        return vec![Piece::Text(text)];
    }

    let postfix = profile.is_some_and(|profile| profile.hex_postfix);
    let token = literal_token(&caps, postfix, zero_prefix, config);
    vec![
        Piece::Text(&text[..whole.start()]),
        Piece::Token(token),
        Piece::Text(&text[whole.end()..]),
    ]
}

fn literal_token(caps: &Captures<'_>, postfix: bool, zero_prefix: bool, config: &Config) -> Token {
    let mut value = &caps["value"];
    if zero_prefix && value.len() > 1 && value.starts_with('0') {
        // `0F0h` is written with a padding zero; the value is `F0`
        if value[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
            value = &value[1..];
        }
    }
    let value = if config.capitalize_hex {
        value.to_uppercase()
    } else {
        value.to_owned()
    };
    let size = caps.name("size").map(|m| {
        if config.capitalize_hex_sizes {
            m.as_str().to_uppercase()
        } else {
            m.as_str().to_owned()
        }
    });
    let notation = config
        .override_hex_notation
        .clone()
        .unwrap_or_else(|| caps["notation"].to_owned());
    let raw = caps[0].to_owned();
    // The override moves the notation in front for symbols as well as literals
    let postfix = postfix && !config.override_hex_postfix;

    match caps.name("label") {
        Some(label) => {
            let literal = if postfix {
                format!("{value}{notation}")
            } else {
                format!("{notation}{value}")
            };
            Token::Symbol {
                label: label.as_str().to_owned(),
                resolved: format!("{literal}{}", size.as_deref().unwrap_or("")),
                size,
                raw,
            }
        }
        None => Token::Hex {
            notation,
            value,
            size,
            postfix,
            raw,
        },
    }
}

fn extract_register<'a>(text: &'a str, profile: &ArchitectureProfile) -> Vec<Piece<'a>> {
    match profile.register_grammar().find(text) {
        Some(m) => vec![
            Piece::Text(&text[..m.start()]),
            Piece::Token(Token::Register(m.as_str().to_owned())),
            Piece::Text(&text[m.end()..]),
        ],
        None => vec![Piece::Text(text)],
    }
}
