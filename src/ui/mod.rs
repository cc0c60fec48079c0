// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`overlay`] - Toast and confirmation dialog rendering for the alert
//!   overlay
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod overlay;
