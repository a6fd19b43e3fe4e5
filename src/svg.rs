//! SVG preview of planned slides.
//!
//! Draws each slide as a panel with one outlined, labelled rectangle per
//! element. Meant for eyeballing a layout, not as a renderer: images are
//! placeholders and text is shown as its element name plus content.
//!
//! # Example
//!
//! ```
//! use slidelayout::{Deck, DeckStyle, ImageSize, ProductSlide, svg::render_deck_svg};
//!
//! let plan = Deck::new(DeckStyle::default())
//!     .plan(&[ProductSlide::new("Chair", vec![ImageSize::new(800.0, 600.0); 3])])
//!     .unwrap();
//!
//! let svg = render_deck_svg(&plan);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::deck::{DeckPlan, Element, SlideKind, SlidePlan};
use crate::geometry::{Canvas, Placement};

/// Maximum pixel width of a slide panel.
const MAX_PANEL_W: f64 = 640.0;
/// Maximum pixel height of a slide panel.
const MAX_PANEL_H: f64 = 360.0;
/// Vertical gap between panels.
const PANEL_GAP: f64 = 30.0;
/// Horizontal margin.
const MARGIN_X: f64 = 30.0;
/// Top margin for first panel.
const MARGIN_TOP: f64 = 20.0;
/// Height of label text area above each panel.
const LABEL_H: f64 = 22.0;

const STYLE: &str = r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .caption { font-size: 10px; fill: #444; }
  .slide { fill: #fafafa; stroke: #999; stroke-width: 1; }
  .backdrop { fill: #d9d2c5; stroke: #a89f8e; stroke-width: 1; }
  .image { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .logo { fill: #f0c674; stroke: #b58a2c; stroke-width: 1; }
  .text { fill: none; stroke: #888; stroke-width: 1; stroke-dasharray: 4,2; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .caption { fill: #bbb; }
    .slide { fill: #2d2d2d; stroke: #555; }
    .backdrop { fill: #4a443a; stroke: #7a705e; }
    .image { fill: #3a72a4; stroke: #5a9fd4; }
    .logo { fill: #8a6d2c; stroke: #c9a24a; }
    .text { stroke: #aaa; }
  }
</style>
"##;

/// Render every slide of a deck as stacked panels in one SVG document.
pub fn render_deck_svg(plan: &DeckPlan) -> String {
    render_panels(plan.slide, &plan.slides)
}

/// Render a single slide as an SVG document.
pub fn render_slide_svg(slide: &SlidePlan, size: Canvas) -> String {
    render_panels(size, core::slice::from_ref(slide))
}

/// Pixels per slide unit so the slide fits MAX_PANEL_W × MAX_PANEL_H.
fn panel_scale(size: Canvas) -> f64 {
    if size.width <= 0.0 || size.height <= 0.0 {
        return 1.0;
    }
    (MAX_PANEL_W / size.width).min(MAX_PANEL_H / size.height)
}

fn render_panels(size: Canvas, slides: &[SlidePlan]) -> String {
    if slides.is_empty() {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    let scale = panel_scale(size);
    let panel_w = size.width * scale;
    let panel_h = size.height * scale;
    let n = slides.len() as f64;
    let total_w = panel_w + 2.0 * MARGIN_X;
    let total_h = 2.0 * MARGIN_TOP + n * (LABEL_H + panel_h) + (n - 1.0) * PANEL_GAP;

    let mut svg = String::with_capacity(2048 * slides.len());
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w.ceil() as u32,
        total_h.ceil() as u32,
        total_w,
        total_h
    ));
    svg.push('\n');
    svg.push_str(STYLE);

    let mut y = MARGIN_TOP;
    for (i, slide) in slides.iter().enumerate() {
        svg.push_str(&format!(
            r#"<text x="{}" y="{:.1}" class="label">{}</text>"#,
            MARGIN_X,
            y + 14.0,
            escape_xml(&slide_label(i, slide))
        ));
        svg.push('\n');
        y += LABEL_H;

        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="slide"/>"#,
            MARGIN_X, y, panel_w, panel_h
        ));
        svg.push('\n');

        for element in &slide.elements {
            push_element(&mut svg, element, MARGIN_X, y, scale);
        }

        y += panel_h + PANEL_GAP;
    }

    svg.push_str("</svg>\n");
    svg
}

fn slide_label(position: usize, slide: &SlidePlan) -> String {
    match slide.kind {
        SlideKind::Intro => format!("Slide {}  intro", position + 1),
        SlideKind::Outro => format!("Slide {}  outro", position + 1),
        SlideKind::Product { index } => {
            let images = slide.images().count();
            format!("Slide {}  product #{index}, {images} image(s)", position + 1)
        }
    }
}

fn push_element(svg: &mut String, element: &Element, ox: f64, oy: f64, scale: f64) {
    let Placement {
        x,
        y,
        width,
        height,
    } = element.rect();
    let (px, py, pw, ph) = (ox + x * scale, oy + y * scale, width * scale, height * scale);

    let (class, caption) = match element {
        Element::Backdrop { .. } => ("backdrop", String::from("backdrop")),
        Element::Image { index, .. } => ("image", format!("#{index}")),
        Element::Logo { .. } => ("logo", String::from("logo")),
        Element::Title { text, .. }
        | Element::Copyright { text, .. }
        | Element::Link { text, .. } => ("text", format!("{}: {text}", element.label())),
    };

    svg.push_str(&format!(
        r#"<rect x="{px:.1}" y="{py:.1}" width="{pw:.1}" height="{ph:.1}" class="{class}"/>"#
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="caption">{}</text>"#,
        px + 3.0,
        py + 11.0,
        escape_xml(&caption)
    ));
    svg.push('\n');
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
