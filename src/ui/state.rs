use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use catppuccin_egui::Theme;
use pretty_dasm::arch::SAMPLE_LISTING;
use pretty_dasm::{annotate, Config, Document};

pub struct State {
    pub source: String,
    pub path: Option<PathBuf>,
    pub arch_key: Option<String>,
    pub config: Config,
    pub document: Document,
    pub theme: Theme,
    pub status: Option<String>,
}

impl State {
    pub fn new(source: String, path: Option<PathBuf>, arch_key: Option<String>) -> Self {
        let config = Config::default();
        let document = annotate(&source, arch_key.as_deref(), &config);
        Self {
            source,
            path,
            arch_key,
            config,
            document,
            theme: catppuccin_egui::MOCHA,
            status: None,
        }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_LISTING.to_owned(), None, Some("m68k".to_owned()))
    }

    /// Re-annotates the source after the text, architecture or config changed.
    pub fn refresh(&mut self) {
        self.document = annotate(&self.source, self.arch_key.as_deref(), &self.config);
    }

    pub fn open(&mut self, path: &Path) -> io::Result<()> {
        let source = fs::read_to_string(path)?;
        log::info!("Loaded {} ({} bytes)", path.display(), source.len());
        self.source = source;
        self.path = Some(path.to_owned());
        self.status = None;
        self.refresh();
        Ok(())
    }
}
