//! View capability system
//!
//! Views declare what kinds of input they can meaningfully consume, and
//! the keyboard middleware uses these declarations instead of hardcoding
//! per-view rules. The important one for the dock is `TEXT_INPUT`: the
//! `/` shortcut only opens the dock while the active view does NOT
//! capture plain text.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    ///
    /// Independent of the specific view type; they describe what input
    /// the view consumes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ViewCapabilities: u32 {
        /// View owns a text entry field and consumes printable characters
        const TEXT_INPUT = 1 << 0;

        /// View can move a selection across next/previous items
        const ITEM_NAVIGATION = 1 << 1;

        /// View has switchable mode tabs (Tab cycles them)
        const MODE_TABS = 1 << 2;
    }
}

impl ViewCapabilities {
    /// Check if the view consumes printable characters
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    /// Check if the view supports item navigation
    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }

    /// Check if the view has mode tabs
    pub fn has_mode_tabs(self) -> bool {
        self.contains(Self::MODE_TABS)
    }
}

impl Default for ViewCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}
