//! Tilt and parallax calculators.
//!
//! Handy for checking what a card or hero will render for given pointer and
//! scroll positions.

use std::io::Write;

use clothing_co_core::effects::{BoundingBox, Tilt, parallax_background_position};

use crate::error::CliError;

/// Print the tilt transform for a pointer at `(x, y)` over a card of the
/// given size anchored at the origin.
///
/// # Errors
///
/// Returns `CliError::InvalidCardSize` unless both dimensions are positive.
pub fn tilt(x: f64, y: f64, width: f64, height: f64, out: &mut impl Write) -> Result<(), CliError> {
    if !(width > 0.0 && height > 0.0) {
        return Err(CliError::InvalidCardSize);
    }

    let card = BoundingBox {
        left: 0.0,
        top: 0.0,
        width,
        height,
    };
    writeln!(out, "transform: {}", Tilt::from_pointer(card, x, y).css_transform())?;
    Ok(())
}

/// Print the hero background offset for a page scrolled by `scroll` pixels.
///
/// # Errors
///
/// Returns `CliError::Io` if writing the output fails.
pub fn parallax(scroll: f64, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(
        out,
        "background-position-y: {}",
        parallax_background_position(scroll)
    )?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt() {
        let mut out = Vec::new();
        tilt(200.0, 150.0, 200.0, 300.0, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "transform: rotateX(0deg) rotateY(5deg)\n"
        );
    }

    #[test]
    fn test_tilt_rejects_empty_card() {
        let mut out = Vec::new();
        let err = tilt(0.0, 0.0, 0.0, 100.0, &mut out).unwrap_err();
        assert!(matches!(err, CliError::InvalidCardSize));
    }

    #[test]
    fn test_parallax() {
        let mut out = Vec::new();
        parallax(300.0, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "background-position-y: 150px\n"
        );
    }
}
