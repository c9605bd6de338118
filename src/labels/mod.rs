// src/labels/mod.rs
//
// Labels printed on the booking confirmation. The field set is closed; each
// language ships a complete default dictionary and operators may override
// individual entries through a sparse JSON file.

mod defaults;

use crate::domain::Language;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub use defaults::default_label;

macro_rules! label_fields {
    ($($variant:ident => $key:literal),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum LabelField {
            $($variant),*
        }

        impl LabelField {
            pub const ALL: &'static [LabelField] = &[$(LabelField::$variant),*];

            /// camelCase key used in override files.
            pub fn key(self) -> &'static str {
                match self {
                    $(LabelField::$variant => $key),*
                }
            }

            pub fn from_key(key: &str) -> Option<LabelField> {
                match key {
                    $($key => Some(LabelField::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

label_fields! {
    Confirmed => "confirmed",
    ConfirmationMessage => "confirmationMessage",
    BookingDetails => "bookingDetails",
    BookingReference => "bookingReference",
    GuestName => "guestName",
    Email => "email",
    StayDetails => "stayDetails",
    CheckIn => "checkIn",
    CheckOut => "checkOut",
    CheckInTime => "checkInTime",
    CheckOutTime => "checkOutTime",
    RoomDetails => "roomDetails",
    RoomType => "roomType",
    NumberOfRooms => "numberOfRooms",
    Rating => "rating",
    MealServices => "mealServices",
    Breakfast => "breakfast",
    Lunch => "lunch",
    Dinner => "dinner",
    NotSelected => "notSelected",
    PriceBreakdown => "priceBreakdown",
    RoomCharges => "roomCharges",
    MealCharges => "mealCharges",
    TotalAmount => "totalAmount",
    PaymentStatus => "paymentStatus",
    Paid => "paid",
    ImportantNotes => "importantNotes",
    Note1 => "note1",
    Note2 => "note2",
    Note3 => "note3",
    Note4 => "note4",
    Currency => "currency",
    GeneratedOn => "generatedOn",
}

/// Sparse per-language overrides. A `null` value counts as absent.
pub type PartialLabels = HashMap<String, Option<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LabelOverrides {
    #[serde(default)]
    pub en: PartialLabels,
    #[serde(default)]
    pub ar: PartialLabels,
}

#[derive(Debug, Error)]
pub enum LabelsError {
    #[error("failed to read label overrides {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse label overrides {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl LabelOverrides {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, LabelsError> {
        let raw = fs::read_to_string(path).map_err(|source| LabelsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| LabelsError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn for_language(&self, language: Language) -> &PartialLabels {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

/// A complete set of labels for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDictionary {
    language: Language,
    values: Vec<String>,
}

impl LabelDictionary {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn get(&self, field: LabelField) -> &str {
        &self.values[field as usize]
    }
}

/// Merges `overrides` over the built-in dictionary for `language`.
/// Keys outside the field set are skipped.
pub fn resolve_labels(language: Language, overrides: &PartialLabels) -> LabelDictionary {
    for key in overrides.keys() {
        if LabelField::from_key(key).is_none() {
            tracing::debug!(%language, key = %key, "ignoring unknown label override");
        }
    }

    let values = LabelField::ALL
        .iter()
        .map(|field| match overrides.get(field.key()) {
            Some(Some(value)) => value.clone(),
            _ => default_label(language, *field).to_string(),
        })
        .collect();

    LabelDictionary { language, values }
}
