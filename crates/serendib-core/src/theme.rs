//! # Theme
//!
//! The display-mode state machine: two states, one transition, no terminal
//! state. Fully independent of the catalog and cart.
//!
//! ```text
//!            toggle
//!   ┌──────┐ ─────► ┌───────┐
//!   │ Dark │        │ Light │
//!   └──────┘ ◄───── └───────┘
//!            toggle
//! ```
//!
//! Persistence and applying the theme to display surfaces live in
//! `serendib-store`; this module is only the state and its transition.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// The active display mode, persisted as `"dark"` / `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// The other state.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// The persisted/attribute string form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Resolves the initial theme for a fresh view.
    ///
    /// Saved preference wins; otherwise the OS-level light/dark signal;
    /// dark when the signal is unavailable.
    pub fn initial(saved: Option<Theme>, system: Option<Theme>) -> Theme {
        saved.or(system).unwrap_or(Theme::Dark)
    }
}

/// Dark is the fallback when nothing is saved and no OS signal exists.
impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    /// Parses the persisted form; anything unrecognized is rejected so the
    /// caller can fall back to the default chain.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(()),
        }
    }
}
