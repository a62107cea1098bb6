use eframe::egui;
use egui::Ui;
use egui_tiles::{TileId, Tiles};

use crate::ui::State;
use crate::ui::windows::*;

pub enum Pane {
    Source(SourceView),
    Listing(Listing),
    Settings(Settings),
}

impl Pane {
    pub fn ui(&mut self, state: &mut State, ui: &mut Ui) -> egui_tiles::UiResponse {
        match self {
            Pane::Source(view) => view.show(state, ui),
            Pane::Listing(view) => view.show(state, ui),
            Pane::Settings(view) => view.show(state, ui),
        }
        egui_tiles::UiResponse::None
    }
}

pub struct TreeManager {
    simplification_options: egui_tiles::SimplificationOptions,
    pub state: State,
}

impl TreeManager {
    pub fn new(state: State) -> Self {
        let mut simplification_options = egui_tiles::SimplificationOptions::default();
        simplification_options.all_panes_must_have_tabs = true;

        Self {
            simplification_options,
            state,
        }
    }

    /// Source and settings stacked on the left, the annotated listing on the right.
    pub fn create_tree() -> egui_tiles::Tree<Pane> {
        let mut tiles = Tiles::default();
        let source = tiles.insert_pane(Pane::Source(SourceView::new()));
        let settings = tiles.insert_pane(Pane::Settings(Settings::new()));
        let listing = tiles.insert_pane(Pane::Listing(Listing::new()));

        let left = tiles.insert_vertical_tile(vec![source, settings]);
        let root = tiles.insert_horizontal_tile(vec![left, listing]);
        egui_tiles::Tree::new("pretty_dasm_tree", root, tiles)
    }
}

impl egui_tiles::Behavior<Pane> for TreeManager {
    fn pane_ui(
        &mut self,
        ui: &mut Ui,
        _tile_id: TileId,
        view: &mut Pane,
    ) -> egui_tiles::UiResponse {
        view.ui(&mut self.state, ui)
    }

    fn tab_title_for_pane(&mut self, view: &Pane) -> egui::WidgetText {
        match view {
            Pane::Source(_) => "Source".into(),
            Pane::Listing(_) => match &self.state.document.caption {
                Some(caption) => format!("Listing ({caption})").into(),
                None => "Listing".into(),
            },
            Pane::Settings(_) => "Settings".into(),
        }
    }

    fn is_tab_closable(&self, _tiles: &Tiles<Pane>, _tile_id: TileId) -> bool {
        false
    }

    fn tab_bar_height(&self, _style: &egui::Style) -> f32 {
        24.0
    }

    fn gap_width(&self, _style: &egui::Style) -> f32 {
        2.0
    }

    fn simplification_options(&self) -> egui_tiles::SimplificationOptions {
        self.simplification_options
    }
}
