mod source;
pub use source::*;
mod listing;
pub use listing::*;
mod settings;
pub use settings::*;

use crate::ui::State;
use eframe::egui;

pub trait Window {
    fn show(&mut self, state: &mut State, ui: &mut egui::Ui);
}
