use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use egui::{CentralPanel, Frame, TopBottomPanel};
use pretty_dasm::arch::SELECTOR_PREFIX;
use pretty_dasm::ArchitectureRegistry;

use crate::ui::{Pane, State, TreeManager};

mod ui;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Disassembly listing to open (default: a bundled 68000 sample)
    file: Option<PathBuf>,

    /// Architecture key, or a class list such as "listing pdasm-arch-z80"
    #[arg(short, long)]
    arch: Option<String>,
}

/// Picks the architecture from a plain key or a class list selector.
fn resolve_arch(arg: &str) -> Option<String> {
    let registry = ArchitectureRegistry::builtin();
    let profile = if arg.contains(SELECTOR_PREFIX) {
        registry.resolve_selector(arg)
    } else {
        registry.lookup(arg)
    };
    if profile.is_none() {
        let known = registry.keys().collect::<Vec<_>>().join(", ");
        log::warn!("Unknown architecture `{}`, known: {}", arg, known);
    }
    profile.map(|profile| profile.key.clone())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let arch_key = args.arch.as_deref().and_then(resolve_arch);

    let state = match args.file {
        Some(path) => {
            let mut state = State::new(String::new(), None, arch_key);
            if let Err(err) = state.open(&path) {
                log::error!("Could not read {}: {}", path.display(), err);
                state.status = Some(format!("Could not read {}: {}", path.display(), err));
            }
            state
        }
        None => {
            let mut state = State::sample();
            if arch_key.is_some() {
                state.arch_key = arch_key;
                state.refresh();
            }
            state
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "pretty-dasm",
        options,
        Box::new(|cc| Ok(Box::new(Application::new(cc, state)))),
    )
    .unwrap_or_else(|e| {
        log::error!("Error: {}", e);
    });
}

struct Application {
    tree: egui_tiles::Tree<Pane>,
    manager: TreeManager,
}

impl Application {
    fn new(cc: &eframe::CreationContext<'_>, state: State) -> Self {
        catppuccin_egui::set_theme(&cc.egui_ctx, state.theme);
        Self {
            tree: TreeManager::create_tree(),
            manager: TreeManager::new(state),
        }
    }
}

impl eframe::App for Application {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let document = &self.manager.state.document;
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} lines, {} instructions",
                    document.lines.len(),
                    document.instruction_count()
                ));
                ui.separator();
                ui.label(document.arch_key.as_deref().unwrap_or("generic"));
            });
        });
        CentralPanel::default()
            .frame(Frame::central_panel(&ctx.style()).inner_margin(0.))
            .show(ctx, |ui| {
                self.tree.ui(&mut self.manager, ui);
            });
    }
}
