//! Scrolling and static text

pub mod compositor;
pub mod scroll;

pub use compositor::{fixed_text, scroll_bordered, scroll_with_icon, BorderColors};
pub use scroll::ScrollState;
