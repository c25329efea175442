pub mod panel;
pub mod panel_button;
