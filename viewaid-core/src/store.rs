//! Accessibility state store and its page-effect seam

use crate::settings::{Flags, Setting};

/// Baseline root font size in pixels.
pub const FONT_SIZE_DEFAULT_PX: u32 = 16;
/// Floor below which text stops being readable; decrease clamps here.
pub const FONT_SIZE_MIN_PX: u32 = 8;
/// Pixels added or removed per font-size step.
pub const FONT_SIZE_STEP_PX: u32 = 2;

/// The two page-level effect targets owned by the store.
///
/// Implementations hold the concrete resources (one stylesheet, one root
/// font-size property) so the store itself stays independent of any
/// rendering environment.
pub trait Surface {
    /// Set the page's root font size in pixels.
    fn set_root_font_size(&self, px: u32);

    /// Replace the full text of the owned stylesheet. Always a full
    /// replacement, never an incremental patch.
    fn replace_stylesheet(&self, css: &str);
}

/// Holds the accessibility state and pushes every mutation to its surface.
///
/// All operations are total: the worst an input can do is nothing.
#[derive(Debug)]
pub struct Store<S: Surface> {
    font_size_px: u32,
    flags: Flags,
    surface: S,
}

impl<S: Surface> Store<S> {
    /// Create a store over `surface`.
    ///
    /// The surface is not written to until the first mutation, so the host
    /// page keeps its own presentation untouched.
    pub fn new(surface: S) -> Self {
        Self {
            font_size_px: FONT_SIZE_DEFAULT_PX,
            flags: Flags::new(),
            surface,
        }
    }

    #[must_use]
    pub fn font_size_px(&self) -> u32 {
        self.font_size_px
    }

    #[must_use]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Grow the root font size by one step. No upper bound.
    pub fn increase_font_size(&mut self) {
        self.font_size_px = self.font_size_px.saturating_add(FONT_SIZE_STEP_PX);
        self.apply_font_size();
    }

    /// Shrink the root font size by one step, clamped at [`FONT_SIZE_MIN_PX`].
    pub fn decrease_font_size(&mut self) {
        self.font_size_px = self
            .font_size_px
            .saturating_sub(FONT_SIZE_STEP_PX)
            .max(FONT_SIZE_MIN_PX);
        self.apply_font_size();
    }

    /// Restore the root font size to [`FONT_SIZE_DEFAULT_PX`].
    ///
    /// Leaves the toggle flags as they are.
    pub fn reset_font_size(&mut self) {
        self.font_size_px = FONT_SIZE_DEFAULT_PX;
        self.apply_font_size();
    }

    /// Flip `setting` and publish the re-derived stylesheet.
    pub fn toggle(&mut self, setting: Setting) {
        self.flags.toggle(setting);
        self.surface.replace_stylesheet(&self.flags.stylesheet());
    }

    /// String-keyed variant of [`Store::toggle`] for hosts that drive the
    /// store by wire name. Unknown names are silently ignored.
    pub fn toggle_named(&mut self, name: &str) {
        if let Some(setting) = Setting::from_name(name) {
            self.toggle(setting);
        }
    }

    fn apply_font_size(&self) {
        self.surface.set_root_font_size(self.font_size_px);
    }
}
