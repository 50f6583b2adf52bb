// src/font_config.rs

// Global font configuration for plot rendering.
// Plotters is built without system font lookup, so every family used by the
// plot framework must be registered from the bundled font before drawing.

use plotters::style::{register_font, FontStyle};
use std::error::Error;
use std::sync::OnceLock;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_MESSAGE,
};

/// Embedded monospace font at compile time
pub static BUNDLED_FONT_BYTES: &[u8] = include_bytes!("../fonts/DejaVuSansMono.ttf");

/// Font family name for the bundled font
pub const FONT_FAMILY_BUNDLED: &str = "DejaVu Sans Mono";

/// Family name the plot framework asks for. Mapped onto the bundled font.
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

static FONT_REGISTRATION: OnceLock<Result<(), String>> = OnceLock::new();

/// Registers the bundled font under both family names. Safe to call repeatedly.
pub fn ensure_fonts_registered() -> Result<(), Box<dyn Error>> {
    FONT_REGISTRATION
        .get_or_init(|| {
            for family in [FONT_FAMILY_SYSTEM, FONT_FAMILY_BUNDLED] {
                register_font(family, FontStyle::Normal, BUNDLED_FONT_BYTES)
                    .map_err(|_| format!("bundled font could not be loaded as '{family}'"))?;
            }
            Ok(())
        })
        .clone()
        .map_err(Into::into)
}

// Tuple representations for use with plotters' IntoFont trait
pub const FONT_TUPLE_MAIN_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_MAIN_TITLE);
pub const FONT_TUPLE_CHART_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_CHART_TITLE);
pub const FONT_TUPLE_AXIS_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_AXIS_LABEL);
pub const FONT_TUPLE_LEGEND: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_LEGEND);
pub const FONT_TUPLE_MESSAGE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_MESSAGE);
