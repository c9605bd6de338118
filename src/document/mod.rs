// src/document/mod.rs
//
// Layout description of the booking confirmation. The renderer builds it,
// the HTML preview and the page rasterizer both consume it.

mod render;

pub use render::{render_document, DocumentInput, HotelIdentity};

use crate::domain::{Align, Direction, Language};

pub const MISSING_FIELD: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct BookingDocument {
    pub language: Language,
    pub direction: Direction,
    pub blocks: Vec<Block>,
}

/// One visual block of the page, in print order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Header {
        name: String,
        address: String,
        phone: String,
    },
    Badge {
        title: String,
        message: String,
    },
    Section(Section),
    Total {
        label: String,
        amount: String,
    },
    PaymentStatus {
        label: String,
        status: String,
    },
    Notes {
        title: String,
        items: Vec<String>,
    },
    Footer {
        name: String,
        phone: String,
        generated: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    BookingDetails,
    StayDetails,
    RoomDetails,
    MealServices,
    PriceBreakdown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub rows: Vec<Row>,
}

/// A label/value line. `detail` is a smaller second line under the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: String,
    pub value: String,
    pub detail: Option<String>,
    pub muted: bool,
}

impl Row {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            detail: None,
            muted: false,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn muted(mut self) -> Self {
        self.muted = true;
        self
    }
}

impl BookingDocument {
    /// Alignment of running text; mirrors for right-to-left.
    pub fn text_align(&self) -> Align {
        self.direction.start()
    }

    #[cfg(test)]
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.blocks.iter().find_map(|b| match b {
            Block::Section(s) if s.kind == kind => Some(s),
            _ => None,
        })
    }
}
