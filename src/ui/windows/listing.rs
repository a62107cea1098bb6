use crate::ui::windows::Window;
use crate::ui::State;
use catppuccin_egui::Theme;
use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use pretty_dasm::annotator::{
    CLASS_COMMENT, CLASS_HEX_NOTATION, CLASS_HEX_VALUE, CLASS_PLAIN, CLASS_REGISTER, CLASS_SIZE,
    CLASS_SYMBOL,
};
use pretty_dasm::{AnnotatedLine, Token};

/// Colors for each kind of token, taken from the active catppuccin flavour.
#[derive(Copy, Clone)]
pub struct Palette {
    pub address: Color32,
    pub opcode: Color32,
    pub text: Color32,
    pub hex_notation: Color32,
    pub hex_value: Color32,
    pub size: Color32,
    pub symbol: Color32,
    pub register: Color32,
    pub comment: Color32,
    pub unformatted: Color32,
}

impl Palette {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            address: theme.overlay2,
            opcode: theme.green,
            text: theme.text,
            hex_notation: theme.yellow,
            hex_value: theme.peach,
            size: theme.teal,
            symbol: theme.mauve,
            register: theme.blue,
            comment: theme.overlay1,
            unformatted: theme.subtext0,
        }
    }

    /// Color for a token style class. Unknown classes render as plain text.
    pub fn color(&self, class: &str) -> Color32 {
        match class {
            CLASS_HEX_NOTATION => self.hex_notation,
            CLASS_HEX_VALUE => self.hex_value,
            CLASS_SIZE => self.size,
            CLASS_SYMBOL => self.symbol,
            CLASS_REGISTER => self.register,
            CLASS_COMMENT => self.comment,
            _ => self.text,
        }
    }
}

pub struct Listing {}

impl Listing {
    pub fn new() -> Self {
        Self {}
    }

    fn span(ui: &mut Ui, text: &str, color: Color32) -> eframe::egui::Response {
        ui.label(RichText::new(text).monospace().color(color))
    }

    fn token(ui: &mut Ui, token: &Token, palette: &Palette, comment_glyph: &str) {
        match token {
            Token::Symbol { label, resolved, .. } => {
                let text = RichText::new(label).monospace().underline();
                ui.label(text.color(palette.color(CLASS_SYMBOL)))
                    .on_hover_text(RichText::new(resolved).monospace());
            }
            Token::Comment(text) => {
                ui.add_space(12.0);
                Self::span(ui, comment_glyph, palette.color(CLASS_COMMENT))
                    .on_hover_text(text.as_str());
            }
            token => {
                for (text, class) in token.spans() {
                    Self::span(ui, text, palette.color(class));
                }
            }
        }
    }
}

impl Window for Listing {
    fn show(&mut self, state: &mut State, ui: &mut Ui) {
        let document = &state.document;
        let palette = Palette::from_theme(&state.theme);

        if let Some(caption) = &document.caption {
            ui.heading(caption.as_str());
            ui.separator();
        }

        // Pad columns so operands line up across rows
        let (address_width, opcode_width) = document
            .lines
            .iter()
            .filter_map(|line| match line {
                AnnotatedLine::Instruction { address, opcode, .. } => Some((
                    address.chars().count(),
                    opcode.iter().map(|t| t.text().chars().count()).sum::<usize>(),
                )),
                AnnotatedLine::Unformatted(_) => None,
            })
            .fold((0, 0), |(a, o), (address, opcode)| (a.max(address), o.max(opcode)));

        ScrollArea::both()
            .id_salt("listing")
            .auto_shrink(false)
            .show(ui, |ui| {
                for line in &document.lines {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        match line {
                            AnnotatedLine::Instruction { address, opcode, args } => {
                                let address = format!("{:<w$}  ", address, w = address_width);
                                Self::span(ui, &address, palette.address);
                                let mut used = 0;
                                for token in opcode {
                                    for (text, class) in token.spans() {
                                        let color = match class {
                                            CLASS_PLAIN => palette.opcode,
                                            class => palette.color(class),
                                        };
                                        Self::span(ui, text, color);
                                        used += text.chars().count();
                                    }
                                }
                                Self::span(ui, &" ".repeat(opcode_width - used + 2), palette.text);
                                for token in args {
                                    Self::token(ui, token, &palette, &document.comment_glyph);
                                }
                            }
                            AnnotatedLine::Unformatted(token) => {
                                ui.label(
                                    RichText::new(token.source())
                                        .monospace()
                                        .italics()
                                        .color(palette.unformatted),
                                );
                            }
                        }
                    });
                }
            });
    }
}
