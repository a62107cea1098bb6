mod token;
pub use token::*;
mod line;
pub use line::*;
mod size;
pub use size::*;
mod args;
pub use args::*;
mod document;
pub use document::*;
