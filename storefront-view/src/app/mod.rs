pub mod event;
pub mod reducer;
pub mod render;
pub mod state;

pub use event::*;
pub use render::{render, Affordance, Screen};
pub use state::*;
