//! Style resolution — one pure formula per elevation mode.
//!
//! Every non-flat mode shares the same shadow pair: a darkened copy of the
//! base color cast away from the light, and a lightened copy cast toward
//! it, both blurred by twice the elevation depth. The modes differ only in
//! the background and in whether the pair is inset.
//!
//! | Mode             | Background                            | Inset |
//! |------------------|---------------------------------------|-------|
//! | `raised`         | gradient, base → base                 | no    |
//! | `raised-concave` | gradient, base +7% → base -10%        | no    |
//! | `raised-convex`  | gradient, base -10% → base +7%        | no    |
//! | `lowered`        | solid base                            | yes   |
//! | `flat`           | none (no-op)                          | —     |

use n_color::Color;

use crate::context::AmbientContext;
use crate::descriptor::{Background, LinearGradient, ShadowLayer, StyleDescriptor};
use crate::elevation::ElevationMode;
use crate::geometry::offset;

/// Luminance shift of the shadow cast away from the light.
pub const SHADOW_SHIFT: f64 = -0.15;
/// Luminance shift of the highlight cast toward the light.
pub const HIGHLIGHT_SHIFT: f64 = 0.15;
/// Luminance shift of the bright end of a curved face.
pub const CURVE_LIGHT_SHIFT: f64 = 0.07;
/// Luminance shift of the dark end of a curved face.
pub const CURVE_DARK_SHIFT: f64 = -0.10;

/// A style formula: context in, descriptor out, nothing else touched.
pub type Formula = fn(&AmbientContext) -> StyleDescriptor;

impl ElevationMode {
    /// The formula for this mode, or `None` for `flat`.
    #[must_use]
    pub fn formula(self) -> Option<Formula> {
        match self {
            Self::Flat => None,
            Self::Raised => Some(raised),
            Self::RaisedConcave => Some(raised_concave),
            Self::RaisedConvex => Some(raised_convex),
            Self::Lowered => Some(lowered),
        }
    }
}

/// Resolve the style of an element in `mode` under `ctx`.
///
/// `flat` yields [`StyleDescriptor::empty`].
#[must_use]
pub fn resolve(mode: ElevationMode, ctx: &AmbientContext) -> StyleDescriptor {
    mode.formula()
        .map_or_else(StyleDescriptor::empty, |formula| formula(ctx))
}

/// Resolve from a raw elevation tag.
///
/// Tags outside the closed set fall back to `flat` (the empty style)
/// rather than failing. Callers that want strict validation should parse
/// the tag into an [`ElevationMode`] themselves.
#[must_use]
pub fn resolve_tag(tag: &str, ctx: &AmbientContext) -> StyleDescriptor {
    match tag.parse::<ElevationMode>() {
        Ok(mode) => resolve(mode, ctx),
        Err(err) => {
            tracing::debug!(%err, "resolving as flat");
            StyleDescriptor::empty()
        }
    }
}

// ─── Formulas ────────────────────────────────────────────────────────────────

fn raised(ctx: &AmbientContext) -> StyleDescriptor {
    StyleDescriptor {
        background: Some(gradient(ctx, ctx.color, ctx.color)),
        box_shadow: shadow_pair(ctx, false),
    }
}

fn lowered(ctx: &AmbientContext) -> StyleDescriptor {
    StyleDescriptor {
        background: Some(Background::Solid { color: ctx.color }),
        box_shadow: shadow_pair(ctx, true),
    }
}

/// Lighter toward the light, darker away from it: the face dips in.
fn raised_concave(ctx: &AmbientContext) -> StyleDescriptor {
    StyleDescriptor {
        background: Some(gradient(
            ctx,
            ctx.color.adjust(CURVE_LIGHT_SHIFT),
            ctx.color.adjust(CURVE_DARK_SHIFT),
        )),
        box_shadow: shadow_pair(ctx, false),
    }
}

/// Darker toward the light, lighter away from it: the face bulges out.
fn raised_convex(ctx: &AmbientContext) -> StyleDescriptor {
    StyleDescriptor {
        background: Some(gradient(
            ctx,
            ctx.color.adjust(CURVE_DARK_SHIFT),
            ctx.color.adjust(CURVE_LIGHT_SHIFT),
        )),
        box_shadow: shadow_pair(ctx, false),
    }
}

const fn gradient(ctx: &AmbientContext, from: Color, to: Color) -> Background {
    Background::LinearGradient(LinearGradient {
        angle: ctx.angle,
        from,
        to,
    })
}

/// The dark/light pair shared by every non-flat mode.
///
/// A negative depth flips the offsets; blur stays non-negative.
fn shadow_pair(ctx: &AmbientContext, inset: bool) -> Vec<ShadowLayer> {
    let v = offset(ctx.angle, ctx.elevation_depth);
    let cast = ShadowLayer {
        dx: v.x,
        dy: v.y,
        blur: ctx.elevation_depth.abs() * 2.0,
        color: ctx.color.adjust(SHADOW_SHIFT),
        inset,
    };
    vec![cast, cast.opposed(ctx.color.adjust(HIGHLIGHT_SHIFT))]
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EPS: f64 = 1e-9;

    const SHAPED: [ElevationMode; 4] = [
        ElevationMode::Raised,
        ElevationMode::RaisedConcave,
        ElevationMode::RaisedConvex,
        ElevationMode::Lowered,
    ];

    fn ctx() -> AmbientContext {
        AmbientContext::default()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn gradient_of(style: &StyleDescriptor) -> LinearGradient {
        match style.background {
            Some(Background::LinearGradient(g)) => g,
            other => panic!("expected gradient, got {other:?}"),
        }
    }

    // ── Dispatch ────────────────────────────────────────────────────

    #[test]
    fn flat_is_empty() {
        assert!(resolve(ElevationMode::Flat, &ctx()).is_empty());
        assert!(resolve_tag("flat", &ctx()).is_empty());
    }

    #[test]
    fn unknown_tag_is_empty() {
        assert!(resolve_tag("floating", &ctx()).is_empty());
        assert!(resolve_tag("", &ctx()).is_empty());
        assert!(resolve_tag("RAISED", &ctx()).is_empty());
    }

    #[test]
    fn tag_and_mode_agree() {
        for mode in ElevationMode::ALL {
            assert_eq!(resolve_tag(mode.as_str(), &ctx()), resolve(mode, &ctx()));
        }
    }

    #[test]
    fn only_flat_has_no_formula() {
        for mode in ElevationMode::ALL {
            assert_eq!(mode.formula().is_none(), mode.is_flat(), "{mode}");
        }
    }

    // ── Shadow pair invariants ──────────────────────────────────────

    #[test]
    fn every_shaped_mode_has_opposing_pair() {
        for angle in [0.0, 33.0, 90.0, 250.0, 359.0] {
            let c = ctx().with_angle(angle);
            for mode in SHAPED {
                let style = resolve(mode, &c);
                assert_eq!(style.box_shadow.len(), 2, "{mode} @ {angle}");
                let (a, b) = (style.box_shadow[0], style.box_shadow[1]);
                assert!(approx(a.dx, -b.dx) && approx(a.dy, -b.dy), "{mode} @ {angle}");
                assert_eq!(a.blur, b.blur);
            }
        }
    }

    #[test]
    fn lowered_is_inset_raised_is_not() {
        let lowered = resolve(ElevationMode::Lowered, &ctx());
        assert!(lowered.box_shadow.iter().all(|l| l.inset));
        for mode in [
            ElevationMode::Raised,
            ElevationMode::RaisedConcave,
            ElevationMode::RaisedConvex,
        ] {
            assert!(resolve(mode, &ctx()).box_shadow.iter().all(|l| !l.inset), "{mode}");
        }
    }

    #[test]
    fn shadow_colors_are_dark_then_light() {
        for mode in SHAPED {
            let style = resolve(mode, &ctx());
            assert_eq!(style.box_shadow[0].color.to_string(), "#c5b2a2", "{mode}");
            assert_eq!(style.box_shadow[1].color.to_string(), "#ebd8c9", "{mode}");
        }
    }

    // ── Concrete scenarios ──────────────────────────────────────────

    #[test]
    fn raised_at_zero_degrees() {
        let style = resolve(ElevationMode::Raised, &ctx());
        let (a, b) = (style.box_shadow[0], style.box_shadow[1]);
        assert!(approx(a.dx, 0.0) && approx(a.dy, 10.0), "{a:?}");
        assert!(approx(b.dx, 0.0) && approx(b.dy, -10.0), "{b:?}");
        assert_eq!(a.blur, 20.0);
        assert_eq!(b.blur, 20.0);
        assert_eq!(
            style.to_css(),
            "background: linear-gradient(0deg, #e8d1bf, #e8d1bf); \
             box-shadow: 0px 10px 20px #c5b2a2, 0px -10px 20px #ebd8c9;"
        );
    }

    #[test]
    fn raised_at_ninety_degrees() {
        let style = resolve(ElevationMode::Raised, &ctx().with_angle(90.0));
        let (a, b) = (style.box_shadow[0], style.box_shadow[1]);
        assert!(approx(a.dx, -10.0) && approx(a.dy, 0.0), "{a:?}");
        assert!(approx(b.dx, 10.0) && approx(b.dy, 0.0), "{b:?}");
        assert_eq!(
            style.box_shadow_css().unwrap(),
            "-10px 0px 20px #c5b2a2, 10px 0px 20px #ebd8c9"
        );
    }

    #[test]
    fn raised_gradient_is_uniform() {
        let g = gradient_of(&resolve(ElevationMode::Raised, &ctx().with_angle(250.0)));
        assert_eq!(g.angle, 250.0);
        assert_eq!(g.from, ctx().color);
        assert_eq!(g.to, ctx().color);
    }

    #[test]
    fn lowered_has_solid_background() {
        let style = resolve(ElevationMode::Lowered, &ctx());
        assert_eq!(style.background, Some(Background::Solid { color: ctx().color }));
        assert_eq!(
            style.box_shadow_css().unwrap(),
            "inset 0px 10px 20px #c5b2a2, inset 0px -10px 20px #ebd8c9"
        );
    }

    #[test]
    fn concave_goes_light_to_dark() {
        let g = gradient_of(&resolve(ElevationMode::RaisedConcave, &ctx().with_angle(45.0)));
        assert_eq!(g.angle, 45.0);
        assert_eq!(g.from.to_string(), "#ead4c3");
        assert_eq!(g.to.to_string(), "#d1bcac");
    }

    #[test]
    fn convex_swaps_concave_stops() {
        let c = ctx().with_angle(45.0);
        let concave = gradient_of(&resolve(ElevationMode::RaisedConcave, &c));
        let convex = gradient_of(&resolve(ElevationMode::RaisedConvex, &c));
        assert_eq!(convex.from, concave.to);
        assert_eq!(convex.to, concave.from);
    }

    #[test]
    fn curved_modes_share_raised_shadows() {
        let c = ctx().with_angle(123.0);
        let raised = resolve(ElevationMode::Raised, &c).box_shadow;
        assert_eq!(resolve(ElevationMode::RaisedConcave, &c).box_shadow, raised);
        assert_eq!(resolve(ElevationMode::RaisedConvex, &c).box_shadow, raised);
    }

    // ── Edge cases ──────────────────────────────────────────────────

    #[test]
    fn zero_depth_collapses_shadows() {
        let c = ctx().with_elevation_depth(0.0);
        for mode in SHAPED {
            let style = resolve(mode, &c);
            assert_eq!(style.box_shadow.len(), 2);
            for layer in &style.box_shadow {
                assert!(approx(layer.dx, 0.0) && approx(layer.dy, 0.0), "{mode}");
                assert_eq!(layer.blur, 0.0);
            }
        }
    }

    #[test]
    fn negative_depth_inverts_offsets() {
        let up = resolve(ElevationMode::Raised, &ctx());
        let down = resolve(ElevationMode::Raised, &ctx().with_elevation_depth(-10.0));
        assert!(approx(down.box_shadow[0].dy, -up.box_shadow[0].dy));
        assert_eq!(down.box_shadow[0].blur, 20.0);
    }

    #[test]
    fn same_snapshot_resolves_identically() {
        let c = ctx().with_angle(77.0);
        for mode in ElevationMode::ALL {
            assert_eq!(resolve(mode, &c), resolve(mode, &c), "{mode}");
        }
    }
}
