// src/domain/booking.rs

use crate::domain::language::Language;
use crate::domain::money::Money;
use crate::domain::quote::QuoteError;
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealKind {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealKind {
    pub const ALL: [MealKind; 3] = [MealKind::Breakfast, MealKind::Lunch, MealKind::Dinner];

    pub fn as_str(self) -> &'static str {
        match self {
            MealKind::Breakfast => "breakfast",
            MealKind::Lunch => "lunch",
            MealKind::Dinner => "dinner",
        }
    }
}

/// Which meal plans the guest ticked on the booking form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSelection {
    pub breakfast: bool,
    pub lunch: bool,
    pub dinner: bool,
}

impl MealSelection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, meal: MealKind) -> bool {
        match meal {
            MealKind::Breakfast => self.breakfast,
            MealKind::Lunch => self.lunch,
            MealKind::Dinner => self.dinner,
        }
    }

    pub fn selected(&self) -> impl Iterator<Item = MealKind> + '_ {
        MealKind::ALL.into_iter().filter(|m| self.is_selected(*m))
    }
}

/// Unit price per meal plan. Loaded once from config and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MealPriceTable {
    pub breakfast: Money,
    pub lunch: Money,
    pub dinner: Money,
}

impl Default for MealPriceTable {
    fn default() -> Self {
        Self {
            breakfast: Money::from_units(120),
            lunch: Money::from_units(150),
            dinner: Money::from_units(100),
        }
    }
}

impl MealPriceTable {
    pub fn price(&self, meal: MealKind) -> Money {
        match meal {
            MealKind::Breakfast => self.breakfast,
            MealKind::Lunch => self.lunch,
            MealKind::Dinner => self.dinner,
        }
    }
}

/// The room the guest picked and how many of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSelection {
    room_id: String,
    name: String,
    unit_price_per_night: Money,
    count: u32,
}

impl RoomSelection {
    pub fn new(
        room_id: impl Into<String>,
        name: impl Into<String>,
        unit_price_per_night: Money,
        count: u32,
    ) -> Result<Self, QuoteError> {
        if count == 0 {
            return Err(QuoteError::InvalidQuantity(0));
        }
        Ok(Self {
            room_id: room_id.into(),
            name: name.into(),
            unit_price_per_night,
            count,
        })
    }

    /// Parses a raw count as it arrives from a form or query string.
    pub fn parse_count(raw: &str) -> Result<u32, QuoteError> {
        let n: i64 = raw
            .trim()
            .parse()
            .map_err(|_| QuoteError::UnparsableQuantity(raw.to_string()))?;
        if n <= 0 {
            return Err(QuoteError::InvalidQuantity(n));
        }
        u32::try_from(n).map_err(|_| QuoteError::InvalidQuantity(n))
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price_per_night(&self) -> Money {
        self.unit_price_per_night
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl GuestRecord {
    /// "First Last", trimmed; a blank first name becomes the language's "Guest".
    pub fn display_name(&self, language: Language) -> String {
        let first = self.first_name.trim();
        let first = if first.is_empty() {
            language.guest_fallback()
        } else {
            first
        };
        format!("{} {}", first, self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn display_email(&self) -> &str {
        let email = self.email.trim();
        if email.is_empty() {
            "N/A"
        } else {
            email
        }
    }
}

/// Everything the guest entered for one booking. Lives only for the request.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub room: RoomSelection,
    pub meals: MealSelection,
    pub guest: GuestRecord,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl BookingDraft {
    /// Nights between check-in and check-out, at least one.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(1)
    }
}

const REFERENCE_PREFIX: &str = "BK";
const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const REFERENCE_RANDOM_LEN: usize = 8;
const REFERENCE_MAX_LEN: usize = 32;

/// Booking reference printed on the confirmation and used in its file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingReference(String);

impl BookingReference {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let suffix: String = (0..REFERENCE_RANDOM_LEN)
            .map(|_| REFERENCE_CHARSET[rng.gen_range(0..REFERENCE_CHARSET.len())] as char)
            .collect();
        Self(format!("{REFERENCE_PREFIX}{suffix}"))
    }

    /// Accepts a caller-supplied reference. Only `[A-Z0-9-]` is allowed since
    /// the value ends up in a download file name.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim().to_ascii_uppercase();
        let valid = !raw.is_empty()
            && raw.len() <= REFERENCE_MAX_LEN
            && raw.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'-');
        valid.then_some(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
