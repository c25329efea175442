//! Viewaid core
//!
//! Platform-agnostic state for the viewaid accessibility widget: the setting
//! catalog, the projection from flags to stylesheet text, and the store that
//! pushes mutations to a page surface. No UI or platform dependencies.

pub mod settings;
pub mod store;

pub use settings::{Flags, Setting};
pub use store::{FONT_SIZE_DEFAULT_PX, FONT_SIZE_MIN_PX, FONT_SIZE_STEP_PX, Store, Surface};
