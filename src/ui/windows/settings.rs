use crate::ui::windows::Window;
use crate::ui::State;
use catppuccin_egui::Theme;
use eframe::egui::{ComboBox, TextEdit, Ui, Widget};

const THEMES: [(&str, Theme); 4] = [
    ("Latte", catppuccin_egui::LATTE),
    ("Frappe", catppuccin_egui::FRAPPE),
    ("Macchiato", catppuccin_egui::MACCHIATO),
    ("Mocha", catppuccin_egui::MOCHA),
];

pub struct Settings {
    notation_buffer: String,
    flavour: usize,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            notation_buffer: "0x".to_owned(),
            flavour: THEMES.len() - 1,
        }
    }
}

impl Window for Settings {
    fn show(&mut self, state: &mut State, ui: &mut Ui) {
        let config = &mut state.config;
        let mut changed = false;

        ui.horizontal(|ui| {
            let mut overriding = config.override_hex_notation.is_some();
            changed |= ui.checkbox(&mut overriding, "Override hex notation").changed();
            let edited = TextEdit::singleline(&mut self.notation_buffer)
                .desired_width(40.0)
                .interactive(overriding)
                .ui(ui)
                .changed();
            changed |= edited;
            config.override_hex_notation = overriding.then(|| self.notation_buffer.clone());
        });
        changed |= ui
            .checkbox(&mut config.override_hex_postfix, "Show postfix notation in front")
            .changed();
        changed |= ui.checkbox(&mut config.capitalize_hex, "Capitalize hex values").changed();
        changed |= ui
            .checkbox(&mut config.capitalize_hex_sizes, "Capitalize size suffixes")
            .changed();
        changed |= ui
            .checkbox(&mut config.add_arch_caption, "Show architecture caption")
            .changed();
        ui.horizontal(|ui| {
            ui.label("Comment glyph");
            changed |= TextEdit::singleline(&mut config.comment_glyph)
                .desired_width(40.0)
                .ui(ui)
                .changed();
        });

        ui.separator();
        ComboBox::new("theme", "Theme")
            .selected_text(THEMES[self.flavour].0)
            .show_ui(ui, |ui| {
                for (i, (name, theme)) in THEMES.iter().enumerate() {
                    if ui.selectable_label(self.flavour == i, *name).clicked() {
                        self.flavour = i;
                        state.theme = *theme;
                        catppuccin_egui::set_theme(ui.ctx(), *theme);
                    }
                }
            });

        if changed {
            state.refresh();
        }
    }
}
