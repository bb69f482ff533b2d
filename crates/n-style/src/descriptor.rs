//! Style descriptors — the output of resolution, renderable as CSS.
//!
//! A descriptor is a background fill plus an ordered list of shadow
//! layers. It maps one-to-one onto the CSS `background` and `box-shadow`
//! properties, and just as easily onto a drawing API's fill and
//! drop-shadow calls.
//!
//! | Element        | CSS form                                   |
//! |----------------|--------------------------------------------|
//! | solid          | `#e8d1bf`                                  |
//! | gradient       | `linear-gradient(90deg, #ead4c3, #d1bcac)` |
//! | shadow layer   | `[inset ]0px 10px 20px #c5b2a2`            |
//!
//! Numbers are rounded to three decimals so trigonometric noise such as
//! `6.1e-16` renders as `0`.

use std::fmt;

use kurbo::Vec2;
use n_color::Color;
use serde::Serialize;

// ─── ShadowLayer ─────────────────────────────────────────────────────────────

/// One drop shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowLayer {
    pub dx: f64,
    pub dy: f64,
    pub blur: f64,
    pub color: Color,
    /// Cast inside the element's box instead of outside it.
    pub inset: bool,
}

impl ShadowLayer {
    /// The layer's offset as a vector.
    #[must_use]
    pub const fn offset(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }

    /// The partner layer on the opposite side: negated offset, same blur
    /// and inset, a different color.
    #[must_use]
    pub fn opposed(self, color: Color) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
            color,
            ..self
        }
    }
}

impl fmt::Display for ShadowLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            f.write_str("inset ")?;
        }
        write!(
            f,
            "{}px {}px {}px {}",
            Num(self.dx),
            Num(self.dy),
            Num(self.blur),
            self.color
        )
    }
}

// ─── Background ──────────────────────────────────────────────────────────────

/// A two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearGradient {
    /// Direction in degrees, CSS convention.
    pub angle: f64,
    pub from: Color,
    pub to: Color,
}

/// How the element's face is filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum Background {
    Solid { color: Color },
    LinearGradient(LinearGradient),
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid { color } => write!(f, "{color}"),
            Self::LinearGradient(g) => {
                write!(f, "linear-gradient({}deg, {}, {})", Num(g.angle), g.from, g.to)
            }
        }
    }
}

// ─── StyleDescriptor ─────────────────────────────────────────────────────────

/// The resolved look of one element.
///
/// The empty descriptor (no background, no shadows) means "leave the
/// element alone"; it is what `flat` and unknown modes resolve to.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StyleDescriptor {
    pub background: Option<Background>,
    pub box_shadow: Vec<ShadowLayer>,
}

impl StyleDescriptor {
    /// The no-op style.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            background: None,
            box_shadow: Vec::new(),
        }
    }

    /// Whether applying this style changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.box_shadow.is_empty()
    }

    /// The CSS `box-shadow` value, if there are any layers.
    #[must_use]
    pub fn box_shadow_css(&self) -> Option<String> {
        if self.box_shadow.is_empty() {
            return None;
        }
        let layers: Vec<String> = self.box_shadow.iter().map(ToString::to_string).collect();
        Some(layers.join(", "))
    }

    /// CSS property/value pairs, background first.
    #[must_use]
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        let mut props = Vec::with_capacity(2);
        if let Some(background) = &self.background {
            props.push(("background", background.to_string()));
        }
        if let Some(shadow) = self.box_shadow_css() {
            props.push(("box-shadow", shadow));
        }
        props
    }

    /// Inline CSS declarations, e.g. `background: #fff; box-shadow: ...;`.
    ///
    /// Empty for the no-op style.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.css_properties()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

// ─── Number formatting ───────────────────────────────────────────────────────

/// A CSS number: at most three decimals, no trailing zeros, no `-0`.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding +0.0 turns -0.0 into 0.0 and leaves everything else alone.
        let rounded = (self.0 * 1000.0).round() / 1000.0 + 0.0;
        write!(f, "{rounded}")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
