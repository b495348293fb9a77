pub mod theme;

pub use theme::{DispatchGuard, ThemeController, ThemeStatus, ThemeStore, ThemeView};
