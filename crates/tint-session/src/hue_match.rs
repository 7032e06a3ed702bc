#![forbid(unsafe_code)]

//! Best-effort hue lookup for colors taken from custom palettes.
//!
//! A built-in palette encodes hue by position, but a custom palette is a
//! shade row or column and carries no hue. [`hue_for_custom_color`] scans the
//! shade ramps in hue order and takes the first one containing the color.
//! Ramps share their endpoints (every ramp starts at black and ends at
//! white), so those colors always match red; first match in increasing hue
//! order is the defined tie-break.
//!
//! When nothing matches, the result is the advisory
//! [`TintError::HueResolutionAmbiguous`] carrying the fallback hue (the menu
//! position read as a hue index). Callers log it and continue with the
//! fallback; it is never surfaced to the user.

use tint_core::{BaseHue, Color, Result, TintError, shade_ramp};

/// First hue whose ramp contains `color`, or the advisory error with
/// `position` as the fallback hue.
///
/// Fails with [`TintError::IndexOutOfRange`] only if `position` is not a
/// valid hue index.
pub fn hue_for_custom_color(color: Color, position: usize) -> Result<BaseHue> {
    if let Some(hue) = BaseHue::ALL
        .into_iter()
        .find(|&hue| shade_ramp(hue).contains(color))
    {
        return Ok(hue);
    }
    Err(TintError::HueResolutionAmbiguous {
        color,
        fallback: BaseHue::from_index(position)?,
    })
}

/// [`hue_for_custom_color`] with the fallback applied and the advisory
/// logged.
pub fn resolve_custom_hue(color: Color, position: usize) -> Result<BaseHue> {
    match hue_for_custom_color(color, position) {
        Ok(hue) => Ok(hue),
        Err(TintError::HueResolutionAmbiguous { color, fallback }) => {
            tracing::warn!(
                message = "hue_match.fallback",
                %color,
                %fallback
            );
            Ok(fallback)
        }
        Err(other) => Err(other),
    }
}
