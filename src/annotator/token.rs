use std::borrow::Cow;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A hex literal. `notation`, `value` and `size` are display text and may
    /// differ from `raw` through overrides and capitalization.
    Hex {
        notation: String,
        value: String,
        size: Option<String>,
        /// Value is displayed before the notation.
        postfix: bool,
        raw: String,
    },
    /// A label standing in for a hex literal. `resolved` is the literal it stands for.
    Symbol {
        label: String,
        resolved: String,
        size: Option<String>,
        raw: String,
    },
    Register(String),
    SizeSuffix(String),
    Comment(String),
    PlainText(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Hex,
    Symbol,
    Register,
    SizeSuffix,
    Comment,
    PlainText,
}

pub const CLASS_HEX_NOTATION: &str = "pdasm-hex-notation";
pub const CLASS_HEX_VALUE: &str = "pdasm-hex-value";
pub const CLASS_SIZE: &str = "pdasm-size";
pub const CLASS_SYMBOL: &str = "pdasm-symbol";
pub const CLASS_REGISTER: &str = "pdasm-reg";
pub const CLASS_COMMENT: &str = "pdasm-comment";
pub const CLASS_PLAIN: &str = "pdasm-plain";

impl TokenKind {
    /// Stable style class for renderers. Hex literals are split further by [`Token::spans`].
    pub fn class_name(&self) -> &'static str {
        match self {
            TokenKind::Hex => CLASS_HEX_VALUE,
            TokenKind::Symbol => CLASS_SYMBOL,
            TokenKind::Register => CLASS_REGISTER,
            TokenKind::SizeSuffix => CLASS_SIZE,
            TokenKind::Comment => CLASS_COMMENT,
            TokenKind::PlainText => CLASS_PLAIN,
        }
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Hex { .. } => TokenKind::Hex,
            Token::Symbol { .. } => TokenKind::Symbol,
            Token::Register(_) => TokenKind::Register,
            Token::SizeSuffix(_) => TokenKind::SizeSuffix,
            Token::Comment(_) => TokenKind::Comment,
            Token::PlainText(_) => TokenKind::PlainText,
        }
    }

    /// The exact text this token was cut from.
    pub fn source(&self) -> &str {
        match self {
            Token::Hex { raw, .. } | Token::Symbol { raw, .. } => raw,
            Token::Register(text)
            | Token::SizeSuffix(text)
            | Token::Comment(text)
            | Token::PlainText(text) => text,
        }
    }

    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Token::Hex {
                notation,
                value,
                size,
                postfix,
                ..
            } => {
                let size = size.as_deref().unwrap_or("");
                if *postfix {
                    format!("{value}{notation}{size}").into()
                } else {
                    format!("{notation}{value}{size}").into()
                }
            }
            Token::Symbol { label, .. } => label.as_str().into(),
            Token::Register(text)
            | Token::SizeSuffix(text)
            | Token::Comment(text)
            | Token::PlainText(text) => text.as_str().into(),
        }
    }

    /// Display text split into styled parts, in display order.
    ///
    /// A hex literal yields its notation, value and size as separate parts, so
    /// the notation glyph can be styled apart from the digits.
    pub fn spans(&self) -> Vec<(&str, &'static str)> {
        match self {
            Token::Hex {
                notation,
                value,
                size,
                postfix,
                ..
            } => {
                let value = (value.as_str(), CLASS_HEX_VALUE);
                let notation = (notation.as_str(), CLASS_HEX_NOTATION);
                let mut spans = if *postfix {
                    vec![value, notation]
                } else {
                    vec![notation, value]
                };
                if let Some(size) = size {
                    spans.push((size.as_str(), CLASS_SIZE));
                }
                spans
            }
            Token::Symbol { label, .. } => vec![(label.as_str(), CLASS_SYMBOL)],
            Token::Register(text)
            | Token::SizeSuffix(text)
            | Token::Comment(text)
            | Token::PlainText(text) => vec![(text.as_str(), self.kind().class_name())],
        }
    }

    pub fn hover(&self) -> Option<&str> {
        match self {
            Token::Symbol { resolved, .. } => Some(resolved),
            Token::Comment(text) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_text_follows_placement() {
        let mut token = Token::Hex {
            notation: "h".to_owned(),
            value: "F0".to_owned(),
            size: None,
            postfix: true,
            raw: "0F0h".to_owned(),
        };
        assert_eq!(token.text(), "F0h");
        assert_eq!(token.source(), "0F0h");

        if let Token::Hex { postfix, size, .. } = &mut token {
            *postfix = false;
            *size = Some(".W".to_owned());
        }
        assert_eq!(token.text(), "hF0.W");
    }

    #[test]
    fn hover_only_on_symbols_and_comments() {
        let symbol = Token::Symbol {
            label: "disp_string".to_owned(),
            resolved: "$c100".to_owned(),
            size: None,
            raw: "$c100{disp_string}".to_owned(),
        };
        assert_eq!(symbol.text(), "disp_string");
        assert_eq!(symbol.hover(), Some("$c100"));
        assert_eq!(Token::Comment("note".to_owned()).hover(), Some("note"));
        assert_eq!(Token::Register("d6".to_owned()).hover(), None);
        assert_eq!(Token::PlainText(", ".to_owned()).hover(), None);
    }

    #[test]
    fn kinds_map_to_classes() {
        assert_eq!(Token::Register("pc".to_owned()).kind().class_name(), "pdasm-reg");
        assert_eq!(Token::SizeSuffix(".w".to_owned()).kind(), TokenKind::SizeSuffix);
        assert_eq!(TokenKind::PlainText.class_name(), "pdasm-plain");
    }

    #[test]
    fn hex_spans_split_notation_value_and_size() {
        let token = Token::Hex {
            notation: "$".to_owned(),
            value: "2a".to_owned(),
            size: Some(".W".to_owned()),
            postfix: false,
            raw: "$2a.w".to_owned(),
        };
        assert_eq!(
            token.spans(),
            vec![("$", "pdasm-hex-notation"), ("2a", "pdasm-hex-value"), (".W", "pdasm-size")]
        );

        let token = Token::Hex {
            notation: "h".to_owned(),
            value: "F0".to_owned(),
            size: None,
            postfix: true,
            raw: "0F0h".to_owned(),
        };
        assert_eq!(token.spans(), vec![("F0", "pdasm-hex-value"), ("h", "pdasm-hex-notation")]);
    }

    #[test]
    fn spans_join_to_display_text() {
        let tokens = [
            Token::Hex {
                notation: "0x".to_owned(),
                value: "1F".to_owned(),
                size: None,
                postfix: false,
                raw: "0x1F".to_owned(),
            },
            Token::Symbol {
                label: "table".to_owned(),
                resolved: "1234h".to_owned(),
                size: None,
                raw: "1234h{table}".to_owned(),
            },
            Token::Register("sp".to_owned()),
            Token::PlainText(", ".to_owned()),
        ];
        for token in &tokens {
            let joined: String = token.spans().into_iter().map(|(text, _)| text).collect();
            assert_eq!(joined, token.text(), "token: {:?}", token);
        }
        assert_eq!(tokens[1].spans(), vec![("table", "pdasm-symbol")]);
        assert_eq!(tokens[2].spans(), vec![("sp", "pdasm-reg")]);
    }
}
