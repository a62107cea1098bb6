use crate::ui::windows::Window;
use crate::ui::State;
use eframe::egui::{Button, ComboBox, ScrollArea, TextEdit, Ui, Widget};
use native_dialog::FileDialog;
use pretty_dasm::ArchitectureRegistry;

pub struct SourceView {}

impl SourceView {
    pub fn new() -> Self {
        Self {}
    }

    fn open_dialog(state: &mut State) {
        let picked = FileDialog::new()
            .add_filter("Disassembly", &["txt", "dasm", "asm", "lst"])
            .show_open_single_file();

        match picked {
            Ok(Some(path)) => {
                if let Err(err) = state.open(&path) {
                    log::error!("Could not read {}: {}", path.display(), err);
                    state.status = Some(format!("Could not read {}: {}", path.display(), err));
                }
            }
            Ok(None) => {}
            Err(err) => {
                log::error!("File dialog failed: {}", err);
                state.status = Some(format!("File dialog failed: {}", err));
            }
        }
    }
}

impl Window for SourceView {
    fn show(&mut self, state: &mut State, ui: &mut Ui) {
        let registry = ArchitectureRegistry::builtin();

        ui.horizontal(|ui| {
            if Button::new("Open...").min_size([50.0, 0.0].into()).ui(ui).clicked() {
                Self::open_dialog(state);
            }

            let selected = state
                .arch_key
                .as_deref()
                .and_then(|key| registry.lookup(key))
                .map(|profile| profile.name.clone())
                .unwrap_or_else(|| "Generic".to_owned());

            let mut changed = false;
            ComboBox::new("architecture", "Architecture")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    changed |= ui.selectable_value(&mut state.arch_key, None, "Generic").changed();
                    for profile in registry.iter() {
                        changed |= ui
                            .selectable_value(
                                &mut state.arch_key,
                                Some(profile.key.clone()),
                                profile.name.as_str(),
                            )
                            .changed();
                    }
                });
            if changed {
                state.refresh();
            }
        });

        if let Some(path) = &state.path {
            ui.label(path.display().to_string());
        }
        if let Some(status) = &state.status {
            ui.colored_label(state.theme.red, status.as_str());
        }
        ui.separator();

        ScrollArea::both()
            .id_salt("source")
            .auto_shrink(false)
            .show(ui, |ui| {
                let response = TextEdit::multiline(&mut state.source)
                    .code_editor()
                    .desired_width(f32::INFINITY)
                    .ui(ui);
                if response.changed() {
                    state.refresh();
                }
            });
    }
}
