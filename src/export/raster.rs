// src/export/raster.rs

use super::text::{prepare, Typeface};
use super::ExportError;
use crate::document::{Block, BookingDocument, Row, Section};
use crate::domain::{Align, Direction};
use image::{Rgb, RgbImage};

/// One logical page: A4 at 72 DPI.
pub const PAGE_WIDTH: u32 = 595;
pub const PAGE_HEIGHT: u32 = 842;
/// Device pixels per logical pixel.
pub const RASTER_SCALE: u32 = 2;

const MARGIN: f32 = 36.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH as f32 - 2.0 * MARGIN;
const FOOTER_HEIGHT: f32 = 58.0;
/// Minimum space between a row's label and its value.
const LABEL_GAP: f32 = 12.0;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([33, 37, 41]);
const MUTED: Rgb<u8> = Rgb([134, 142, 150]);
const BRAND: Rgb<u8> = Rgb([15, 76, 92]);
const GOLD: Rgb<u8> = Rgb([196, 155, 68]);
const SUCCESS: Rgb<u8> = Rgb([34, 139, 84]);
const PANEL: Rgb<u8> = Rgb([244, 246, 248]);

/// Off-screen drawing target. Coordinates passed in are logical pixels;
/// anything outside the page is clipped.
pub struct Surface {
    image: RgbImage,
    scale: f32,
}

impl Surface {
    pub fn new(width: u32, height: u32, scale: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width * scale, height * scale, WHITE),
            scale: scale as f32,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb<u8>) {
        let (width, height) = self.image.dimensions();
        let x0 = (x * self.scale).round().clamp(0.0, width as f32) as u32;
        let y0 = (y * self.scale).round().clamp(0.0, height as f32) as u32;
        let x1 = ((x + w) * self.scale).round().clamp(0.0, width as f32) as u32;
        let y1 = ((y + h) * self.scale).round().clamp(0.0, height as f32) as u32;

        for py in y0..y1 {
            for px in x0..x1 {
                self.image.put_pixel(px, py, color);
            }
        }
    }

    /// Mixes `color` into one device pixel by `coverage` (0..1).
    pub fn blend(&mut self, px: i32, py: i32, color: Rgb<u8>, coverage: f32) {
        let (width, height) = self.image.dimensions();
        if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
            return;
        }
        let coverage = coverage.clamp(0.0, 1.0);
        let dst = self.image.get_pixel_mut(px as u32, py as u32);
        for c in 0..3 {
            let mixed = dst.0[c] as f32 * (1.0 - coverage) + color.0[c] as f32 * coverage;
            dst.0[c] = mixed.round() as u8;
        }
    }

    /// Captures the bitmap; the surface is consumed.
    pub fn into_bitmap(self) -> RgbImage {
        self.image
    }
}

/// Turns a laid-out document into a single page bitmap.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, document: &BookingDocument) -> Result<RgbImage, ExportError>;
}

pub struct PageRasterizer {
    typeface: Typeface,
}

impl PageRasterizer {
    pub fn new(typeface: Typeface) -> Self {
        Self { typeface }
    }
}

impl Rasterizer for PageRasterizer {
    fn rasterize(&self, document: &BookingDocument) -> Result<RgbImage, ExportError> {
        let mut surface = Surface::new(PAGE_WIDTH, PAGE_HEIGHT, RASTER_SCALE);
        Painter {
            surface: &mut surface,
            typeface: &self.typeface,
            direction: document.direction,
            y: 0.0,
        }
        .paint(document);

        Ok(surface.into_bitmap())
    }
}

#[derive(Clone, Copy)]
enum Anchor {
    Start,
    End,
    Center,
}

struct Painter<'a> {
    surface: &'a mut Surface,
    typeface: &'a Typeface,
    direction: Direction,
    y: f32,
}

impl Painter<'_> {
    fn paint(&mut self, document: &BookingDocument) {
        for block in &document.blocks {
            match block {
                Block::Header {
                    name,
                    address,
                    phone,
                } => self.header(name, address, phone),
                Block::Badge { title, message } => self.badge(title, message),
                Block::Section(section) => self.section(section),
                Block::Total { label, amount } => self.total(label, amount),
                Block::PaymentStatus { label, status } => self.payment(label, status),
                Block::Notes { title, items } => self.notes(title, items),
                Block::Footer {
                    name,
                    phone,
                    generated,
                } => self.footer(name, phone, generated),
            }
        }
    }

    /// Draws one line of text inside the content box at the current y.
    fn text(&mut self, text: &str, size: f32, anchor: Anchor, color: Rgb<u8>) {
        self.text_in(text, size, anchor, MARGIN, CONTENT_WIDTH, color);
    }

    fn text_in(&mut self, text: &str, size: f32, anchor: Anchor, left: f32, width: f32, color: Rgb<u8>) {
        let visual = prepare(text, self.direction);
        let text_width = self.typeface.measure(&visual, size);
        let side = match anchor {
            Anchor::Start => Some(self.direction.start()),
            Anchor::End => Some(self.direction.end()),
            Anchor::Center => None,
        };
        let x = match side {
            Some(Align::Left) => left,
            Some(Align::Right) => left + width - text_width,
            None => left + (width - text_width) / 2.0,
        };
        self.typeface
            .draw(self.surface, &visual, x, self.y, size, color);
    }

    fn header(&mut self, name: &str, address: &str, phone: &str) {
        self.surface
            .fill_rect(0.0, 0.0, PAGE_WIDTH as f32, 90.0, BRAND);
        self.surface.fill_rect(0.0, 90.0, PAGE_WIDTH as f32, 4.0, GOLD);

        self.y = 22.0;
        self.text(name, 18.0, Anchor::Start, WHITE);
        self.y = 50.0;
        self.text(address, 9.0, Anchor::Start, WHITE);
        self.y = 66.0;
        self.text(phone, 9.0, Anchor::Start, WHITE);
        self.y = 110.0;
    }

    fn badge(&mut self, title: &str, message: &str) {
        self.surface
            .fill_rect(MARGIN, self.y, CONTENT_WIDTH, 50.0, SUCCESS);
        let top = self.y;
        self.y = top + 10.0;
        self.text(title, 14.0, Anchor::Center, WHITE);
        self.y = top + 31.0;
        self.text(message, 9.0, Anchor::Center, WHITE);
        self.y = top + 64.0;
    }

    fn section(&mut self, section: &Section) {
        self.text(&section.title, 12.0, Anchor::Start, BRAND);
        self.y += 16.0;
        self.surface
            .fill_rect(MARGIN, self.y, CONTENT_WIDTH, 1.0, GOLD);
        self.y += 6.0;

        for row in &section.rows {
            self.row(row);
        }
        self.y += 8.0;
    }

    /// Label at the start edge, value at the end edge. The value is cut to
    /// whatever width the label leaves free.
    fn pair(&mut self, label: &str, value: &str, size: f32, colors: (Rgb<u8>, Rgb<u8>)) {
        let label_width = self
            .typeface
            .measure(&prepare(label, self.direction), size);
        let room = (CONTENT_WIDTH - label_width - LABEL_GAP).max(0.0);
        let value = self.typeface.fit(value, size, room);

        self.text(label, size, Anchor::Start, colors.0);
        self.text(&value, size, Anchor::End, colors.1);
    }

    fn row(&mut self, row: &Row) {
        let color = if row.muted { MUTED } else { INK };
        self.pair(&row.label, &row.value, 10.0, (color, color));
        self.y += 14.0;

        if let Some(detail) = &row.detail {
            let detail = self.typeface.fit(detail, 8.0, CONTENT_WIDTH);
            self.text(&detail, 8.0, Anchor::End, MUTED);
            self.y += 11.0;
        }
        self.y += 2.0;
    }

    fn total(&mut self, label: &str, amount: &str) {
        let top = self.y;
        self.surface
            .fill_rect(MARGIN, top, CONTENT_WIDTH, 36.0, GOLD);
        let inner_left = MARGIN + 12.0;
        let inner_width = CONTENT_WIDTH - 24.0;
        self.y = top + 11.0;
        self.text_in(label, 13.0, Anchor::Start, inner_left, inner_width, WHITE);
        self.y = top + 10.0;
        self.text_in(amount, 15.0, Anchor::End, inner_left, inner_width, WHITE);
        self.y = top + 46.0;
    }

    fn payment(&mut self, label: &str, status: &str) {
        self.pair(label, status, 10.0, (INK, SUCCESS));
        self.y += 22.0;
    }

    fn notes(&mut self, title: &str, items: &[String]) {
        let top = self.y;
        let mut lines = Vec::new();
        for item in items {
            for line in self
                .typeface
                .wrap(&format!("- {item}"), 8.0, CONTENT_WIDTH - 20.0)
            {
                lines.push(line);
            }
        }

        let height = 30.0 + lines.len() as f32 * 12.0;
        self.surface
            .fill_rect(MARGIN, top, CONTENT_WIDTH, height, PANEL);
        self.y = top + 8.0;
        self.text_in(title, 11.0, Anchor::Start, MARGIN + 10.0, CONTENT_WIDTH - 20.0, BRAND);
        self.y += 18.0;
        for line in &lines {
            self.text_in(line, 8.0, Anchor::Start, MARGIN + 10.0, CONTENT_WIDTH - 20.0, INK);
            self.y += 12.0;
        }
        self.y = top + height + 10.0;
    }

    // The footer sits at the bottom of the page unless the content already ran
    // past it, in which case it follows the content and is clipped with it.
    fn footer(&mut self, name: &str, phone: &str, generated: &str) {
        self.y = self.y.max(PAGE_HEIGHT as f32 - FOOTER_HEIGHT);
        self.surface
            .fill_rect(MARGIN, self.y, CONTENT_WIDTH, 1.0, MUTED);
        self.y += 8.0;
        self.text(name, 9.0, Anchor::Center, INK);
        self.y += 13.0;
        self.text(phone, 8.0, Anchor::Center, MUTED);
        self.y += 12.0;
        self.text(generated, 8.0, Anchor::Center, MUTED);
    }
}
