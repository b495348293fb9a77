pub mod anchors;
pub mod char_counter;
pub mod flash;
pub mod forms;
pub mod messages;
pub mod progress;
pub mod style;
pub mod task_list;
pub mod welcome;

pub use flash::{Flash, MessageKind};
pub use messages::show_message;
