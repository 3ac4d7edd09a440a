//! Cosmetic pointer and scroll effects.
//!
//! Pure per-event computations with no state: the hover tilt applied to
//! product cards and the hero background parallax.

/// Divisor turning a pixel offset from the card's center into degrees.
pub const TILT_DIVISOR: f64 = 20.0;

/// Fraction of the scroll offset applied to the hero background.
pub const PARALLAX_FACTOR: f64 = 0.5;

/// A card's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation applied to a card, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// No rotation; applied when the pointer leaves the card.
    pub const RESET: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Tilt for a pointer at `(client_x, client_y)` over `card`.
    ///
    /// Moving below the center tips the card back (negative X rotation);
    /// moving right turns it right.
    #[must_use]
    pub fn from_pointer(card: BoundingBox, client_x: f64, client_y: f64) -> Self {
        let x = client_x - card.left;
        let y = client_y - card.top;
        let center_x = card.width / 2.0;
        let center_y = card.height / 2.0;

        // `+ 0.0` folds -0.0 into 0.0 so a centered pointer renders as "0deg".
        Self {
            rotate_x: -(y - center_y) / TILT_DIVISOR + 0.0,
            rotate_y: (x - center_x) / TILT_DIVISOR + 0.0,
        }
    }

    /// CSS `transform` value.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Vertical background offset for a page scrolled by `scroll_y` pixels.
#[must_use]
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

/// CSS `background-position-y` value for a page scrolled by `scroll_y`.
#[must_use]
pub fn parallax_background_position(scroll_y: f64) -> String {
    format!("{}px", parallax_offset(scroll_y))
}
