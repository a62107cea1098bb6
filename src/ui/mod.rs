mod state;
pub use state::*;
mod tree_behaviour;
pub use tree_behaviour::*;
pub mod windows;
