//! Deck planning: slide sequence and element placement.
//!
//! Turns a caller's selection (one [`ProductSlide`] per product, each with
//! the displayed sizes of its chosen images) into a [`DeckPlan`]: an ordered
//! list of slides, each an ordered list of positioned elements in slide
//! units. Drawing the elements and writing the presentation file is the
//! renderer's job.
//!
//! ```text
//!   ┌──────────────────────────────────────────────┐
//!   │ Title                                   Logo │
//!   │ ┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄ image band ┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄ │
//!   │   ┌────────┐  ┌────────┐  ┌────────┐         │
//!   │   │        │  │        │  │        │         │
//!   │   └────────┘  └────────┘  └────────┘         │
//!   │ ┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄ │
//!   │ link                               copyright │
//!   └──────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use slidelayout::{Deck, DeckStyle, ImageSize, ProductSlide, SlideKind};
//!
//! let selection = vec![
//!     ProductSlide::new("Lounge Chair", vec![ImageSize::new(1200.0, 800.0)])
//!         .link("https://example.com/lounge"),
//!     ProductSlide::new("Side Table", vec![ImageSize::new(600.0, 600.0); 4])
//!         .logo(ImageSize::new(400.0, 200.0)),
//! ];
//!
//! let plan = Deck::new(DeckStyle::default())
//!     .intro(true)
//!     .outro(true)
//!     .plan(&selection)
//!     .unwrap();
//!
//! assert_eq!(plan.slides.len(), 4);
//! assert_eq!(plan.slides[0].kind, SlideKind::Intro);
//! assert_eq!(plan.slides[2].images().count(), 4);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::geometry::{Canvas, ImageSize, LayoutError, Placement, layout_single};
use crate::grid::{DEFAULT_MAX_COLUMNS, DEFAULT_PADDING, GridLayout, check_padding};

/// Copyright line printed on every product slide unless overridden.
pub const DEFAULT_COPYRIGHT: &str = "Copyright © 2025 Altossa Projects LLp. All Rights Reserved.";

/// 8-bit RGB text color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const GRAY: Self = Self::new(128, 128, 128);
    pub const LINK_BLUE: Self = Self::new(0, 102, 204);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Font settings for a text element.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    /// Font size in points.
    pub size_pt: f32,
    pub italic: bool,
    pub color: Rgb,
}

impl TextStyle {
    /// Upright text of the given size and color.
    pub const fn new(size_pt: f32, color: Rgb) -> Self {
        Self {
            size_pt,
            italic: false,
            color,
        }
    }

    /// Set italic.
    pub const fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}

/// Slide geometry and typography for a deck.
///
/// All lengths are in slide units (inches for the default 16:9 deck).
/// Footer boxes are anchored to the slide's bottom edge by `footer_inset`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckStyle {
    /// Full slide size.
    pub slide: Canvas,
    /// Top of the image band.
    pub image_top: f64,
    /// Bottom of the image band.
    pub image_bottom: f64,
    /// Width allowance for a lone image, centered on the slide.
    /// Independent of the grid, which spans the full slide width.
    pub single_image_max_width: f64,
    /// Gap between grid cells.
    pub grid_padding: f64,
    /// Column cap for multi-image slides.
    pub max_columns: usize,
    pub title_box: Placement,
    pub title_style: TextStyle,
    /// Logo width; height follows the logo's aspect ratio.
    pub logo_width: f64,
    /// Distance from the slide's right edge to the logo's left edge.
    pub logo_right_inset: f64,
    pub logo_top: f64,
    /// Distance from the slide's bottom edge to the top of the footer boxes.
    pub footer_inset: f64,
    pub footer_height: f64,
    pub copyright_text: String,
    pub copyright_width: f64,
    pub copyright_style: TextStyle,
    pub link_left: f64,
    pub link_width: f64,
    pub link_style: TextStyle,
}

impl Default for DeckStyle {
    fn default() -> Self {
        Self {
            slide: Canvas::new(13.33, 7.5),
            image_top: 1.2,
            image_bottom: 6.9,
            single_image_max_width: 10.5,
            grid_padding: DEFAULT_PADDING,
            max_columns: DEFAULT_MAX_COLUMNS,
            title_box: Placement::new(0.4, 0.3, 12.0, 0.7),
            title_style: TextStyle::new(16.0, Rgb::BLACK).italic(true),
            logo_width: 1.1,
            logo_right_inset: 1.2,
            logo_top: 0.1,
            footer_inset: 0.3,
            footer_height: 0.4,
            copyright_text: String::from(DEFAULT_COPYRIGHT),
            copyright_width: 3.6,
            copyright_style: TextStyle::new(10.0, Rgb::GRAY),
            link_left: 0.1,
            link_width: 7.0,
            link_style: TextStyle::new(10.0, Rgb::LINK_BLUE),
        }
    }
}

impl DeckStyle {
    /// Canvas for multi-image slides: full slide width, band height.
    pub fn grid_canvas(&self) -> Canvas {
        Canvas::new(self.slide.width, self.image_bottom - self.image_top)
    }

    /// Canvas for single-image slides and its top-left on the slide.
    pub fn single_image_region(&self) -> (f64, f64, Canvas) {
        let canvas = Canvas::new(
            self.single_image_max_width,
            self.image_bottom - self.image_top,
        );
        let x = (self.slide.width - canvas.width) / 2.0;
        (x, self.image_top, canvas)
    }

    /// Logo rectangle for a logo of the given natural size.
    pub fn logo_box(&self, logo: ImageSize) -> Result<Placement, LayoutError> {
        logo.validate()?;
        Ok(Placement::new(
            self.slide.width - self.logo_right_inset,
            self.logo_top,
            self.logo_width,
            self.logo_width / logo.aspect_ratio(),
        ))
    }

    /// Bottom-right copyright box.
    pub fn copyright_box(&self) -> Placement {
        Placement::new(
            self.slide.width - self.copyright_width,
            self.slide.height - self.footer_inset,
            self.copyright_width,
            self.footer_height,
        )
    }

    /// Bottom-left link box.
    pub fn link_box(&self) -> Placement {
        Placement::new(
            self.link_left,
            self.slide.height - self.footer_inset,
            self.link_width,
            self.footer_height,
        )
    }

    /// Rejects styles whose image regions are empty or leave the slide.
    fn validate(&self) -> Result<(), LayoutError> {
        self.slide.validate()?;
        self.grid_canvas().validate()?;
        self.single_image_region().2.validate()?;
        check_padding(self.grid_padding)?;
        if self.image_top < 0.0
            || self.image_bottom > self.slide.height
            || self.single_image_max_width > self.slide.width
        {
            return Err(LayoutError::InvalidDimension);
        }
        Ok(())
    }
}

/// One product's slide content as selected by the user.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductSlide {
    pub title: String,
    pub link: Option<String>,
    /// Displayed sizes of the selected images, in selection order.
    pub images: Vec<ImageSize>,
    /// Natural size of the company logo, when one exists.
    pub logo: Option<ImageSize>,
}

impl ProductSlide {
    /// Slide with a title and images, no link or logo.
    pub fn new(title: impl Into<String>, images: Vec<ImageSize>) -> Self {
        Self {
            title: title.into(),
            link: None,
            images,
            logo: None,
        }
    }

    /// Set the link caption.
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the logo size.
    pub fn logo(mut self, logo: ImageSize) -> Self {
        self.logo = Some(logo);
        self
    }
}

/// Which part of the deck a slide belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideKind {
    /// Full-bleed opening slide.
    Intro,
    /// Product slide built from the selection entry at `index`.
    Product { index: usize },
    /// Full-bleed closing slide.
    Outro,
}

/// A positioned element on a slide, in slide units.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    /// Picture covering the whole slide (intro/outro artwork).
    Backdrop { rect: Placement },
    Title {
        text: String,
        rect: Placement,
        style: TextStyle,
    },
    /// Selected image `index` of the product slide.
    Image { index: usize, rect: Placement },
    Logo { rect: Placement },
    Copyright {
        text: String,
        rect: Placement,
        style: TextStyle,
    },
    Link {
        text: String,
        rect: Placement,
        style: TextStyle,
    },
}

impl Element {
    /// Rectangle occupied by the element.
    pub fn rect(&self) -> Placement {
        match self {
            Self::Backdrop { rect }
            | Self::Title { rect, .. }
            | Self::Image { rect, .. }
            | Self::Logo { rect }
            | Self::Copyright { rect, .. }
            | Self::Link { rect, .. } => *rect,
        }
    }

    /// Short element name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Backdrop { .. } => "backdrop",
            Self::Title { .. } => "title",
            Self::Image { .. } => "image",
            Self::Logo { .. } => "logo",
            Self::Copyright { .. } => "copyright",
            Self::Link { .. } => "link",
        }
    }
}

/// One planned slide: elements in draw order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlidePlan {
    pub kind: SlideKind,
    pub elements: Vec<Element>,
}

impl SlidePlan {
    /// Image placements in selection order.
    pub fn images(&self) -> impl Iterator<Item = (usize, Placement)> + '_ {
        self.elements.iter().filter_map(|e| match e {
            Element::Image { index, rect } => Some((*index, *rect)),
            _ => None,
        })
    }

    fn backdrop(kind: SlideKind, slide: Canvas) -> Self {
        Self {
            kind,
            elements: alloc::vec![Element::Backdrop {
                rect: Placement::new(0.0, 0.0, slide.width, slide.height),
            }],
        }
    }
}

/// The full planned deck.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckPlan {
    /// Slide size shared by every slide.
    pub slide: Canvas,
    pub slides: Vec<SlidePlan>,
}

/// Deck planning error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeckError {
    /// The [`DeckStyle`] describes an empty slide, band, or single-image region.
    Style(LayoutError),
    /// Product slide `index` (position in the selection) could not be laid out.
    Slide { index: usize, error: LayoutError },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style(e) => write!(f, "invalid deck style: {e}"),
            Self::Slide { index, error } => write!(f, "product slide {index}: {error}"),
        }
    }
}

impl core::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Style(e) | Self::Slide { error: e, .. } => Some(e),
        }
    }
}

/// Deck planner.
///
/// Intro and outro slides are off by default; enable each when the caller
/// has artwork for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Deck {
    style: DeckStyle,
    intro: bool,
    outro: bool,
}

impl Deck {
    /// Planner with the given style, no intro or outro.
    pub fn new(style: DeckStyle) -> Self {
        Self {
            style,
            intro: false,
            outro: false,
        }
    }

    /// Add a full-bleed opening slide.
    pub fn intro(mut self, intro: bool) -> Self {
        self.intro = intro;
        self
    }

    /// Add a full-bleed closing slide.
    pub fn outro(mut self, outro: bool) -> Self {
        self.outro = outro;
        self
    }

    /// Current style.
    pub fn style(&self) -> &DeckStyle {
        &self.style
    }

    /// Plan every slide. Fails on the first product slide that cannot be laid out.
    pub fn plan(&self, products: &[ProductSlide]) -> Result<DeckPlan, DeckError> {
        self.style.validate().map_err(DeckError::Style)?;

        let mut slides = Vec::with_capacity(products.len() + 2);
        if self.intro {
            slides.push(SlidePlan::backdrop(SlideKind::Intro, self.style.slide));
        }
        for (index, product) in products.iter().enumerate() {
            let slide = self
                .plan_product(index, product)
                .map_err(|error| DeckError::Slide { index, error })?;
            slides.push(slide);
        }
        if self.outro {
            slides.push(SlidePlan::backdrop(SlideKind::Outro, self.style.slide));
        }

        log::debug!(
            "planned deck: {} product slides, {} total",
            products.len(),
            slides.len()
        );
        Ok(DeckPlan {
            slide: self.style.slide,
            slides,
        })
    }

    /// Plan a single product slide; `index` is recorded in its [`SlideKind`].
    pub fn plan_product(
        &self,
        index: usize,
        product: &ProductSlide,
    ) -> Result<SlidePlan, LayoutError> {
        let style = &self.style;
        let mut elements = Vec::with_capacity(product.images.len() + 4);

        elements.push(Element::Title {
            text: clean_text(&product.title),
            rect: style.title_box,
            style: style.title_style,
        });

        for (i, rect) in self.place_images(&product.images)?.into_iter().enumerate() {
            elements.push(Element::Image { index: i, rect });
        }

        if let Some(logo) = product.logo {
            elements.push(Element::Logo {
                rect: style.logo_box(logo)?,
            });
        }

        elements.push(Element::Copyright {
            text: style.copyright_text.clone(),
            rect: style.copyright_box(),
            style: style.copyright_style,
        });

        if let Some(link) = product.link.as_deref().map(clean_text)
            && !link.is_empty()
        {
            elements.push(Element::Link {
                text: link,
                rect: style.link_box(),
                style: style.link_style,
            });
        }

        log::debug!(
            "product slide {index} ({:?}): {} images",
            product.title,
            product.images.len()
        );
        Ok(SlidePlan {
            kind: SlideKind::Product { index },
            elements,
        })
    }

    /// Image rectangles in slide coordinates.
    fn place_images(&self, images: &[ImageSize]) -> Result<Vec<Placement>, LayoutError> {
        let style = &self.style;
        match images {
            [] => Err(LayoutError::EmptyInput),
            [image] => {
                let (x, y, canvas) = style.single_image_region();
                Ok(alloc::vec![layout_single(*image, canvas)?.translate(x, y)])
            }
            _ => {
                let placements = GridLayout::new(style.grid_canvas())
                    .max_columns(style.max_columns)
                    .padding(style.grid_padding)
                    .compute(images)?;
                Ok(placements
                    .into_iter()
                    .map(|p| p.translate(0.0, style.image_top))
                    .collect())
            }
        }
    }
}

/// Normalize catalog text for display.
///
/// Non-breaking spaces become spaces, newlines are dropped, and surrounding
/// whitespace is trimmed.
pub fn clean_text(s: &str) -> String {
    String::from(s.replace('\u{a0}', " ").replace('\n', "").trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::preserves_aspect;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn deck() -> Deck {
        Deck::new(DeckStyle::default())
    }

    // ── clean_text ──────────────────────────────────────────────────────

    #[test]
    fn clean_text_normalizes() {
        assert_eq!(clean_text("  Lounge\u{a0}Chair\n "), "Lounge Chair");
        assert_eq!(clean_text("Multi\nLine"), "MultiLine");
        assert_eq!(clean_text("\u{a0}\n"), "");
    }

    // ── Sequencing ──────────────────────────────────────────────────────

    #[test]
    fn intro_and_outro_bracket_products() {
        let products = vec![
            ProductSlide::new("A", vec![ImageSize::new(1.0, 1.0)]),
            ProductSlide::new("B", vec![ImageSize::new(1.0, 1.0)]),
        ];
        let plan = deck().intro(true).outro(true).plan(&products).unwrap();
        let kinds: Vec<_> = plan.slides.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SlideKind::Intro,
                SlideKind::Product { index: 0 },
                SlideKind::Product { index: 1 },
                SlideKind::Outro,
            ]
        );
        let backdrop = plan.slides[0].elements[0].rect();
        assert_eq!(backdrop, Placement::new(0.0, 0.0, 13.33, 7.5));
    }

    #[test]
    fn bookends_are_independent() {
        let products = vec![ProductSlide::new("A", vec![ImageSize::new(1.0, 1.0)])];
        let plan = deck().outro(true).plan(&products).unwrap();
        assert_eq!(plan.slides.len(), 2);
        assert_eq!(plan.slides[1].kind, SlideKind::Outro);

        let plan = deck().plan(&products).unwrap();
        assert_eq!(plan.slides.len(), 1);
    }

    #[test]
    fn empty_selection_plans_only_bookends() {
        let plan = deck().intro(true).outro(true).plan(&[]).unwrap();
        assert_eq!(plan.slides.len(), 2);
    }

    // ── Product slide elements ──────────────────────────────────────────

    #[test]
    fn single_image_uses_narrow_region_centered_on_slide() {
        // 3:1 panorama is wider than 10.5 × 5.7, so width is capped at 10.5
        let product = ProductSlide::new("Sofa", vec![ImageSize::new(3000.0, 1000.0)]);
        let slide = deck().plan_product(0, &product).unwrap();
        let (_, p) = slide.images().next().unwrap();
        assert_eq!(p.width, 10.5);
        assert!(close(p.height, 3.5));
        assert!(close(p.x, (13.33 - 10.5) / 2.0));
        assert!(close(p.y, 1.2 + (5.7 - 3.5) / 2.0));
    }

    #[test]
    fn single_portrait_image_fills_band_height() {
        let product = ProductSlide::new("Lamp", vec![ImageSize::new(600.0, 1200.0)]);
        let slide = deck().plan_product(0, &product).unwrap();
        let (_, p) = slide.images().next().unwrap();
        assert!(close(p.height, 5.7));
        assert!(close(p.y, 1.2));
        assert!(close(p.x + p.width / 2.0, 13.33 / 2.0));
    }

    #[test]
    fn grid_images_sit_in_band() {
        let images = vec![
            ImageSize::new(1600.0, 900.0),
            ImageSize::new(900.0, 1600.0),
            ImageSize::new(500.0, 500.0),
            ImageSize::new(2000.0, 1000.0),
            ImageSize::new(640.0, 480.0),
        ];
        let product = ProductSlide::new("Table", images.clone());
        let slide = deck().plan_product(3, &product).unwrap();
        assert_eq!(slide.kind, SlideKind::Product { index: 3 });

        let placed: Vec<_> = slide.images().collect();
        assert_eq!(placed.len(), 5);
        for (i, p) in &placed {
            assert!(p.y >= 1.2 - 1e-9 && p.bottom() <= 6.9 + 1e-9, "{i}: {p:?}");
            assert!(p.x >= 0.0 && p.right() <= 13.33 + 1e-9, "{i}: {p:?}");
            assert!(preserves_aspect(p, images[*i], 1e-6));
        }
        // Matches the grid engine shifted down to the band
        let band = layout_grid_in_band(&images);
        for ((_, p), q) in placed.iter().zip(band) {
            assert_eq!(*p, q);
        }
    }

    fn layout_grid_in_band(images: &[ImageSize]) -> Vec<Placement> {
        crate::grid::layout_grid(images, DeckStyle::default().grid_canvas(), 3, 0.2)
            .unwrap()
            .into_iter()
            .map(|p| p.translate(0.0, 1.2))
            .collect()
    }

    #[test]
    fn element_order_and_chrome() {
        let product = ProductSlide::new("  Chair\u{a0}One ", vec![ImageSize::new(1.0, 1.0); 2])
            .link("https://example.com/chair\n")
            .logo(ImageSize::new(220.0, 110.0));
        let slide = deck().plan_product(0, &product).unwrap();
        let labels: Vec<_> = slide.elements.iter().map(Element::label).collect();
        assert_eq!(labels, vec!["title", "image", "image", "logo", "copyright", "link"]);

        match &slide.elements[0] {
            Element::Title { text, rect, style } => {
                assert_eq!(text, "Chair One");
                assert_eq!(*rect, Placement::new(0.4, 0.3, 12.0, 0.7));
                assert!(style.italic);
                assert_eq!(style.size_pt, 16.0);
            }
            other => panic!("expected title, got {other:?}"),
        }

        let logo = slide.elements[3].rect();
        assert!(close(logo.x, 13.33 - 1.2));
        assert_eq!(logo.y, 0.1);
        assert_eq!(logo.width, 1.1);
        assert!(close(logo.height, 0.55));

        match &slide.elements[4] {
            Element::Copyright { text, rect, style } => {
                assert_eq!(text, DEFAULT_COPYRIGHT);
                assert!(close(rect.x, 13.33 - 3.6));
                assert!(close(rect.y, 7.2));
                assert_eq!(style.color, Rgb::GRAY);
            }
            other => panic!("expected copyright, got {other:?}"),
        }

        match &slide.elements[5] {
            Element::Link { text, rect, style } => {
                assert_eq!(text, "https://example.com/chair");
                assert_eq!(rect.x, 0.1);
                assert_eq!(rect.width, 7.0);
                assert_eq!(style.color, Rgb::LINK_BLUE);
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn blank_link_is_omitted() {
        let product = ProductSlide::new("X", vec![ImageSize::new(1.0, 1.0)]).link(" \n");
        let slide = deck().plan_product(0, &product).unwrap();
        assert!(slide.elements.iter().all(|e| e.label() != "link"));
        assert!(slide.elements.iter().all(|e| e.label() != "logo"));
    }

    // ── Errors ──────────────────────────────────────────────────────────

    #[test]
    fn product_without_images_names_slide() {
        let products = vec![
            ProductSlide::new("ok", vec![ImageSize::new(1.0, 1.0)]),
            ProductSlide::new("empty", vec![]),
        ];
        assert_eq!(
            deck().plan(&products),
            Err(DeckError::Slide {
                index: 1,
                error: LayoutError::EmptyInput
            })
        );
    }

    #[test]
    fn bad_image_or_logo_errors() {
        let product = ProductSlide::new("x", vec![ImageSize::new(0.0, 1.0), ImageSize::new(1.0, 1.0)]);
        assert_eq!(
            deck().plan_product(0, &product),
            Err(LayoutError::InvalidDimension)
        );
        let product =
            ProductSlide::new("x", vec![ImageSize::new(1.0, 1.0)]).logo(ImageSize::new(10.0, 0.0));
        assert_eq!(
            deck().plan_product(0, &product),
            Err(LayoutError::InvalidDimension)
        );
    }

    #[test]
    fn degenerate_style_errors() {
        let styles = [
            DeckStyle {
                image_bottom: 1.0,
                ..DeckStyle::default()
            },
            DeckStyle {
                grid_padding: -1.0,
                ..DeckStyle::default()
            },
            DeckStyle {
                grid_padding: f64::NAN,
                ..DeckStyle::default()
            },
            DeckStyle {
                single_image_max_width: 20.0,
                ..DeckStyle::default()
            },
            DeckStyle {
                image_bottom: 8.0,
                ..DeckStyle::default()
            },
            DeckStyle {
                image_top: -0.5,
                ..DeckStyle::default()
            },
        ];
        let single = vec![ProductSlide::new("one", vec![ImageSize::new(1.0, 1.0)])];
        let triple = vec![ProductSlide::new("three", vec![ImageSize::new(1.0, 1.0); 3])];
        for style in styles {
            for products in [&[][..], &single[..], &triple[..]] {
                assert_eq!(
                    Deck::new(style.clone()).plan(products),
                    Err(DeckError::Style(LayoutError::InvalidDimension)),
                    "{style:?} with {} products",
                    products.len()
                );
            }
        }
    }

    #[test]
    fn full_width_single_region_is_allowed() {
        let style = DeckStyle {
            single_image_max_width: 13.33,
            ..DeckStyle::default()
        };
        let wide = vec![ProductSlide::new("wide", vec![ImageSize::new(10.0, 1.0)])];
        let plan = Deck::new(style).plan(&wide).unwrap();
        let (_, p) = plan.slides[0].images().next().unwrap();
        assert_eq!(p.x, 0.0);
        assert_eq!(p.width, 13.33);
    }

    #[test]
    fn error_display_names_slide() {
        let e = DeckError::Slide {
            index: 2,
            error: LayoutError::EmptyInput,
        };
        assert_eq!(e.to_string(), "product slide 2: no images to lay out");
    }
}
