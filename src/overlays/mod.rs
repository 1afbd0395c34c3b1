mod task_input;
mod util;

pub use task_input::{TaskInputAction, TaskInputOverlay};
pub use util::shortcut_line;
