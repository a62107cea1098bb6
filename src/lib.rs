//! Turns raw disassembly listings (`ADDRESS: OPCODE ARGS ; COMMENT`) into
//! token streams that a renderer can style: hex literals, symbols, registers,
//! size suffixes and comments, recognized per architecture.

pub mod annotator;
pub mod arch;
pub mod config;

pub use annotator::{annotate, annotate_with, AnnotatedLine, Document, Token, TokenKind};
pub use arch::{ArchitectureProfile, ArchitectureRegistry, RegistryError};
pub use config::Config;
