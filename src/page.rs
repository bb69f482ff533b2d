// SPDX-License-Identifier: MIT
//
// Static demo page — the four soft boxes on a surface of the base color.
//
//   ┌──────────────────────────────────────────────────────┐
//   │  body: base color, flex row, centered               │
//   │   ╭────────╮  ╭────────╮  ╭────────╮  ╭────────╮     │
//   │   │ raised │  │concave │  │ convex │  │lowered │     │
//   │   ╰────────╯  ╰────────╯  ╰────────╯  ╰────────╯     │
//   └──────────────────────────────────────────────────────┘
//
// Each box gets its resolved style inline, followed by the container
// chrome (padding, rounded corners, translucent white text).

use std::fmt::Write as _;

use n_style::{AmbientContext, resolve_tag};

/// Container chrome applied to every box after the resolved style.
pub const BOX_CHROME: &str = "padding: 1em; border-radius: 1em; color: hsla(0, 0%, 100%, .54);";

/// One box on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoBox {
    /// Elevation tag handed to the resolver.
    pub tag: String,
    /// Visible text.
    pub label: String,
}

impl DemoBox {
    #[must_use]
    pub fn new(tag: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            label: label.into(),
        }
    }

    /// A box labelled with its own tag.
    #[must_use]
    pub fn tagged(tag: &str) -> Self {
        Self::new(tag, tag)
    }
}

/// The four boxes of the showcase, in display order.
#[must_use]
pub fn showcase_boxes() -> Vec<DemoBox> {
    vec![
        DemoBox::new("raised", "raised"),
        DemoBox::new("raised-concave", "concave"),
        DemoBox::new("raised-convex", "convex"),
        DemoBox::new("lowered", "lowered"),
    ]
}

/// The inline `style` attribute value for one box.
#[must_use]
pub fn box_style(ctx: &AmbientContext, demo: &DemoBox) -> String {
    let css = resolve_tag(&demo.tag, ctx).to_css();
    if css.is_empty() {
        BOX_CHROME.to_owned()
    } else {
        format!("{css} {BOX_CHROME}")
    }
}

/// A complete HTML document showing `boxes` lit by `ctx`.
#[must_use]
pub fn render_page(ctx: &AmbientContext, boxes: &[DemoBox]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>n-soft</title>\n<style>\n");
    let _ = writeln!(
        html,
        "body {{ margin: 0; width: 100vw; height: 100vh; font-family: sans-serif; \
         font-size: 200%; display: flex; align-items: center; justify-content: center; \
         background-color: {}; }}",
        ctx.color
    );
    html.push_str("body > * { margin: 1em; }\n</style>\n</head>\n<body>\n");
    for demo in boxes {
        let _ = writeln!(
            html,
            "<div style=\"{}\">{}</div>",
            escape(&box_style(ctx, demo)),
            escape(&demo.label)
        );
    }
    html.push_str("</body>\n</html>\n");
    html
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
