mod canvas_panel;
mod search_panel;
mod toolbar;

pub use canvas_panel::canvas_panel;
pub use search_panel::search_panel;
pub use toolbar::{ToolbarAction, toolbar};
