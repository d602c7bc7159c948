#![forbid(unsafe_code)]

//! Presentation settings for the list editor.
//!
//! Settings can be built in code or read from the environment:
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `RELIST_DISPLAY_ARROWS` | `1`/`true`/`yes`/`on` shows up/down arrows |
//! | `RELIST_ASCII` | `1`/`true`/`yes`/`on` swaps glyphs for ASCII |

use std::env;

/// Glyphs drawn by the list editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub handle: &'static str,
    pub drop_marker: &'static str,
    pub up: &'static str,
    pub down: &'static str,
    pub remove: &'static str,
    pub add: &'static str,
}

impl Glyphs {
    pub const UNICODE: Self = Self {
        handle: "⠿",
        drop_marker: "›",
        up: "▲",
        down: "▼",
        remove: "✕",
        add: "[+ Add]",
    };

    pub const ASCII: Self = Self {
        handle: "=",
        drop_marker: ">",
        up: "^",
        down: "v",
        remove: "x",
        add: "[+ Add]",
    };
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// Inbound settings of a [`ListEditor`](super::ListEditor) other than the
/// list and the new-item value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListEditorConfig {
    /// Show up/down arrow buttons in addition to the drag handle.
    pub display_arrows: bool,
    pub glyphs: Glyphs,
}

impl ListEditorConfig {
    /// Read settings from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str| lookup(key).is_some_and(|v| parse_flag(&v));
        let glyphs = if flag("RELIST_ASCII") {
            Glyphs::ASCII
        } else {
            Glyphs::UNICODE
        };
        let config = Self {
            display_arrows: flag("RELIST_DISPLAY_ARROWS"),
            glyphs,
        };
        tracing::debug!(
            display_arrows = config.display_arrows,
            ascii = glyphs == Glyphs::ASCII,
            "list editor config loaded"
        );
        config
    }

    #[must_use]
    pub fn with_arrows(mut self, show: bool) -> Self {
        self.display_arrows = show;
        self
    }

    #[must_use]
    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
