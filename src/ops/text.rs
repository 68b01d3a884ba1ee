//! Text placement: system font lookup and glyph rasterization.

use ab_glyph::{point, Font, FontArc, ScaleFont};
use image::Rgba;

use crate::canvas::PixelBuffer;

/// Font style of the configured text tool. Mirrors the plain/bold/italic
/// style flags of classic toolkit font pickers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    fn weight(&self) -> f32 {
        match self {
            FontStyle::Plain | FontStyle::Italic => 400.0,
            FontStyle::Bold | FontStyle::BoldItalic => 700.0,
        }
    }

    fn italic(&self) -> bool {
        matches!(self, FontStyle::Italic | FontStyle::BoldItalic)
    }
}

/// Enumerate system font families for the host UI's font picker.
/// Sorted and deduplicated; falls back to a small stock list if the
/// system source cannot be queried at all.
pub fn enumerate_font_families() -> Vec<String> {
    match font_kit::source::SystemSource::new().all_families() {
        Ok(mut families) => {
            families.sort();
            families.dedup();
            families
        }
        Err(_) => {
            #[cfg(target_os = "linux")]
            {
                vec!["DejaVu Sans".to_string(), "Liberation Sans".to_string()]
            }
            #[cfg(not(target_os = "linux"))]
            {
                vec!["Arial".to_string(), "Times New Roman".to_string()]
            }
        }
    }
}

/// Load a font by family name and style from the system. An unknown family
/// falls back to the generic sans-serif family; `None` means the host has
/// no usable font at all, in which case text placement degrades to a
/// no-op.
pub fn load_system_font(family: &str, style: FontStyle) -> Option<FontArc> {
    use font_kit::family_name::FamilyName;
    use font_kit::properties::{Properties, Style, Weight};
    use font_kit::source::SystemSource;

    let mut props = Properties::new();
    props.weight = Weight(style.weight());
    if style.italic() {
        props.style = Style::Italic;
    }

    let handle = SystemSource::new()
        .select_best_match(
            &[
                FamilyName::Title(family.to_string()),
                FamilyName::SansSerif,
            ],
            &props,
        )
        .ok()?;

    let font_data = handle.load().ok()?;
    let bytes: Vec<u8> = (*font_data.copy_font_data()?).clone();
    FontArc::try_from_vec(bytes).ok()
}

/// Draw a single line of text with its baseline starting at (x, y).
///
/// Layout applies kerning and horizontal advance; glyph coverage is
/// composited over the existing pixels, clipped to the buffer.
pub fn draw_text(
    buf: &mut PixelBuffer,
    font: &FontArc,
    text: &str,
    font_size: f32,
    x: f32,
    y: f32,
    color: Rgba<u8>,
) {
    let scaled = font.as_scaled(font_size);

    let mut cursor_x = x;
    let mut prev = None;
    for ch in text.chars() {
        let glyph_id = font.glyph_id(ch);
        if let Some(p) = prev {
            cursor_x += scaled.kern(p, glyph_id);
        }
        let glyph = glyph_id.with_scale_and_position(font_size, point(cursor_x, y));
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x + gx as f32;
                let py = bounds.min.y + gy as f32;
                if px >= 0.0 && py >= 0.0 {
                    buf.blend_pixel(px as u32, py as u32, color, coverage);
                }
            });
        }
        cursor_x += scaled.h_advance(glyph_id);
        prev = Some(glyph_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_enumeration_always_yields_candidates() {
        // Even on a fontless host the stock fallback list is returned.
        assert!(!enumerate_font_families().is_empty());
    }

    #[test]
    fn style_properties_map_to_weight_and_slant() {
        assert_eq!(FontStyle::Bold.weight(), 700.0);
        assert_eq!(FontStyle::Plain.weight(), 400.0);
        assert!(FontStyle::BoldItalic.italic());
        assert!(!FontStyle::Bold.italic());
    }
}
