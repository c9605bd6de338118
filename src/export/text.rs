// src/export/text.rs
//
// Text painting for the page rasterizer. DejaVu Sans ships with the crate
// and covers Latin and Arabic; another TTF/OTF can be configured instead.

use super::raster::Surface;
use super::shaping::shape_arabic;
use super::ExportError;
use crate::domain::Direction;
use ab_glyph::{point, Font, FontArc, PxScale, ScaleFont};
use image::Rgb;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

// Letters the confirmation cannot do without in Arabic: alef, lam, meem, yeh
// and the lam-alef ligature.
const ARABIC_SAMPLE: [char; 5] = ['\u{0627}', '\u{0644}', '\u{0645}', '\u{064A}', '\u{FEFB}'];

pub struct Typeface {
    font: FontArc,
}

impl Typeface {
    /// The font compiled into the binary.
    pub fn bundled() -> Result<Self, ExportError> {
        let font = FontArc::try_from_slice(BUNDLED_FONT)
            .map_err(|e| ExportError::Font(format!("bundled font: {e}")))?;
        Ok(Self { font })
    }

    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let bytes = fs::read(path)?;
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| ExportError::Font(format!("{}: {e}", path.display())))?;
        let typeface = Self { font };

        if !ARABIC_SAMPLE.iter().all(|ch| typeface.covers(*ch)) {
            tracing::warn!(
                path = %path.display(),
                "configured font lacks Arabic glyphs; Arabic confirmations will show boxes"
            );
        }
        tracing::info!(path = %path.display(), "loaded font for document export");
        Ok(typeface)
    }

    /// Whether the font has a real glyph (not `.notdef`) for `ch`.
    pub fn covers(&self, ch: char) -> bool {
        self.font.glyph_id(ch).0 != 0
    }

    /// Width of `text` in logical pixels.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        text.chars()
            .map(|ch| scaled.h_advance(scaled.glyph_id(ch)))
            .sum()
    }

    /// Draws `text` with its top-left corner at (`x`, `top`), logical pixels.
    /// The text must already be in painting order.
    pub fn draw(&self, surface: &mut Surface, text: &str, x: f32, top: f32, size: f32, color: Rgb<u8>) {
        let scale = surface.scale();
        let px = PxScale::from(size * scale);
        let scaled = self.font.as_scaled(px);
        let baseline = top * scale + scaled.ascent();
        let mut caret = x * scale;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            let glyph = id.with_scale_and_position(px, point(caret, baseline));
            caret += scaled.h_advance(id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    surface.blend(
                        bounds.min.x as i32 + gx as i32,
                        bounds.min.y as i32 + gy as i32,
                        color,
                        coverage,
                    );
                });
            }
        }
    }

    /// Greedy word wrap to `width` logical pixels.
    pub fn wrap(&self, text: &str, size: f32, width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if !current.is_empty() && self.measure(&candidate, size) > width {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            } else {
                current = candidate;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    /// Longest prefix of `text` that fits in `width`, with an ellipsis when
    /// anything was cut.
    pub fn fit(&self, text: &str, size: f32, width: f32) -> String {
        if self.measure(text, size) <= width {
            return text.to_string();
        }
        let budget = width - self.measure(ELLIPSIS, size);
        let mut kept = String::new();
        let mut used = 0.0;
        for ch in text.chars() {
            let advance = self.measure(ch.encode_utf8(&mut [0; 4]), size);
            if used + advance > budget {
                break;
            }
            used += advance;
            kept.push(ch);
        }
        let mut kept = kept.trim_end().to_string();
        kept.push_str(ELLIPSIS);
        kept
    }
}

const ELLIPSIS: &str = "\u{2026}";

/// Logical text to painting order: Arabic letters take their joined forms,
/// then runs are reordered for a left-to-right painter.
pub fn prepare(text: &str, direction: Direction) -> String {
    let shaped = shape_arabic(text);
    visual_order(&shaped, direction).into_owned()
}

fn is_rtl_char(ch: char) -> bool {
    matches!(ch, '\u{0590}'..='\u{08FF}' | '\u{FB1D}'..='\u{FDFF}' | '\u{FE70}'..='\u{FEFF}')
}

/// Reorders a logical string for a left-to-right painter. In right-to-left
/// text, runs of Latin letters and digits keep their order while everything
/// else is reversed. In left-to-right text only the Arabic runs are reversed.
/// Strings without right-to-left characters pass through.
pub fn visual_order(text: &str, direction: Direction) -> Cow<'_, str> {
    if !text.chars().any(is_rtl_char) {
        return Cow::Borrowed(text);
    }
    if direction.is_rtl() {
        Cow::Owned(rtl_paragraph(text))
    } else {
        Cow::Owned(ltr_paragraph(text))
    }
}

fn rtl_paragraph(text: &str) -> String {
    // Each segment is either a single char or a Latin/digit run.
    let mut segments: Vec<(bool, String)> = Vec::new();
    let mut pending = String::new();

    for ch in text.chars() {
        let strong_ltr = ch.is_alphanumeric() && !is_rtl_char(ch);
        if strong_ltr {
            match segments.last_mut() {
                Some((true, run)) => {
                    run.push_str(&pending);
                    run.push(ch);
                }
                _ => {
                    segments.extend(pending.chars().map(|c| (false, c.to_string())));
                    segments.push((true, ch.to_string()));
                }
            }
            pending.clear();
        } else if is_rtl_char(ch) {
            segments.extend(pending.drain(..).map(|c| (false, c.to_string())));
            segments.push((false, ch.to_string()));
        } else {
            pending.push(ch);
        }
    }
    segments.extend(pending.chars().map(|c| (false, c.to_string())));

    segments.into_iter().rev().map(|(_, s)| s).collect()
}

fn ltr_paragraph(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run: Vec<char> = Vec::new();
    // Neutrals seen after an Arabic char; they join the run only if more Arabic follows.
    let mut gap = String::new();

    for ch in text.chars() {
        if is_rtl_char(ch) {
            run.extend(gap.drain(..));
            run.push(ch);
        } else if !run.is_empty() && !ch.is_alphanumeric() {
            gap.push(ch);
        } else {
            out.extend(run.drain(..).rev());
            out.push_str(&gap);
            gap.clear();
            out.push(ch);
        }
    }
    out.extend(run.drain(..).rev());
    out.push_str(&gap);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;
    use crate::labels::{default_label, LabelField};

    fn typeface() -> Typeface {
        Typeface::bundled().unwrap()
    }

    #[test]
    fn ltr_text_is_untouched() {
        assert_eq!(visual_order("480.00 SAR", Direction::Rtl), "480.00 SAR");
        assert_eq!(visual_order("abc", Direction::Ltr), "abc");
    }

    #[test]
    fn rtl_reverses_arabic_but_keeps_number_runs() {
        // "من 4:00" is painted as "4:00 نم"
        assert_eq!(visual_order("من 4:00", Direction::Rtl), "4:00 نم");
        assert_eq!(visual_order("رقم BK-12", Direction::Rtl), "BK-12 مقر");
    }

    #[test]
    fn arabic_run_inside_ltr_text_is_reversed() {
        assert_eq!(visual_order("غرفة", Direction::Ltr), "ةفرغ");
        assert_eq!(visual_order("Guest: علي حسن!", Direction::Ltr), "Guest: نسح يلع!");
    }

    #[test]
    fn bundled_font_covers_every_arabic_label() {
        let face = typeface();
        for field in LabelField::ALL {
            let painted = prepare(default_label(Language::Ar, *field), Direction::Rtl);
            for ch in painted.chars() {
                assert!(face.covers(ch), "{field:?}: no glyph for {ch:?} (U+{:04X})", ch as u32);
            }
        }
    }

    #[test]
    fn prepare_joins_letters_before_reordering() {
        // "لا" is one ligature glyph, so nothing is left to reverse.
        assert_eq!(prepare("لا", Direction::Rtl), "\u{FEFB}");
        // "من": meem initial + noon final, painted noon first.
        assert_eq!(prepare("من", Direction::Rtl), "\u{FEE6}\u{FEE3}");
    }

    #[test]
    fn measure_grows_with_text() {
        let face = typeface();
        let short = face.measure("ab", 10.0);
        assert!(short > 0.0);
        assert!(face.measure("abcd", 10.0) > short);
        assert!(face.measure("abcd", 20.0) > face.measure("abcd", 10.0));
    }

    #[test]
    fn wrap_respects_width() {
        let face = typeface();
        let text = "one two three four five six seven";
        let width = face.measure("three four", 10.0);
        let lines = face.wrap(text, 10.0, width);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(face.measure(line, 10.0) <= width, "{line:?} too wide");
        }
        assert_eq!(lines.join(" "), text);
        assert!(face.wrap("   ", 10.0, 50.0).is_empty());
    }

    #[test]
    fn fit_truncates_with_ellipsis() {
        let face = typeface();
        assert_eq!(face.fit("short", 10.0, 200.0), "short");

        let long = "a.very.long.email.address@example-hotel-bookings.com";
        let width = face.measure("a.very.long", 10.0);
        let fitted = face.fit(long, 10.0, width);
        assert!(fitted.ends_with('\u{2026}'));
        assert!(fitted.len() < long.len());
        assert!(face.measure(&fitted, 10.0) <= width);
    }
}
