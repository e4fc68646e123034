pub mod error_box;
pub mod scroll_pane;
