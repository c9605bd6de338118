// src/domain/hotel.rs

use crate::domain::language::Language;
use crate::domain::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A hotel as listed in the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelRecord {
    pub id: String,
    pub name: String,
    pub arabic_name: String,
    /// Base nightly price.
    pub price: Money,
    /// Star rating, 0..10.
    pub rating: f64,
    pub review_count: u32,
    pub property_view: PropertyView,
    pub guest_rating_bucket: GuestRatingBucket,
    pub room_types: Vec<RoomType>,
    pub room_count: u32,
    // Identity fields for the confirmation header. Either may be unknown.
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl HotelRecord {
    pub fn display_name(&self, language: Language) -> &str {
        match language {
            Language::En => &self.name,
            Language::Ar if !self.arabic_name.is_empty() => &self.arabic_name,
            Language::Ar => &self.name,
        }
    }

    pub fn offers(&self, room_type: RoomType) -> bool {
        self.room_types.contains(&room_type)
    }

    /// Rating as shown on the confirmation, e.g. "4.5/5".
    pub fn rating_display(&self) -> String {
        format!("{:.1}/5", self.rating)
    }
}

// Every catalog enum exposes the same shape: a stable camelCase key for
// query strings, a closed `ALL` list, and per-language labels.
macro_rules! catalog_enum {
    ($name:ident { $($variant:ident => ($key:literal, $en:literal, $ar:literal)),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $key),*
                }
            }

            pub fn label(self, language: Language) -> &'static str {
                match (self, language) {
                    $(
                        ($name::$variant, Language::En) => $en,
                        ($name::$variant, Language::Ar) => $ar,
                    )*
                }
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($key => Ok($name::$variant),)*
                    other => Err(format!("unknown {} '{}'", stringify!($name), other)),
                }
            }
        }
    };
}

catalog_enum!(PropertyView {
    FullKaaba => ("fullKaaba", "Full Kaaba view", "إطلالة كاملة على الكعبة"),
    PartialKaaba => ("partialKaaba", "Partial Kaaba view", "إطلالة جزئية على الكعبة"),
    NoView => ("noView", "No view", "بدون إطلالة"),
});

catalog_enum!(GuestRatingBucket {
    Excellent => ("excellent", "Excellent", "ممتاز"),
    VeryGood => ("veryGood", "Very good", "جيد جدا"),
    Good => ("good", "Good", "جيد"),
    Average => ("average", "Average", "متوسط"),
});

catalog_enum!(RoomType {
    Deluxe => ("deluxe", "Deluxe Room", "غرفة ديلوكس"),
    Double => ("double", "Double Room", "غرفة مزدوجة"),
    Quadruple => ("quadruple", "Quadruple Room", "غرفة رباعية"),
    FamilySuite => ("familySuite", "Family Suite", "جناح عائلي"),
    JuniorSuite => ("juniorSuite", "Junior Suite", "جناح صغير"),
    Standard => ("standard", "Standard Room", "غرفة قياسية"),
    Triple => ("triple", "Triple Room", "غرفة ثلاثية"),
    SuperDeluxe => ("superDeluxe", "Super Deluxe Room", "غرفة سوبر ديلوكس"),
    Hexagonal => ("hexagonal", "Hexagonal Room", "غرفة سداسية"),
    SeniorSuite => ("seniorSuite", "Senior Suite", "جناح كبير"),
});

impl RoomType {
    /// Nightly price relative to the hotel's base price.
    pub fn price_factor(self) -> Decimal {
        match self {
            RoomType::Standard | RoomType::Double => Decimal::ONE,
            RoomType::Deluxe => Decimal::new(120, 2),
            RoomType::Triple => Decimal::new(130, 2),
            RoomType::SuperDeluxe => Decimal::new(140, 2),
            RoomType::Quadruple => Decimal::new(150, 2),
            RoomType::Hexagonal => Decimal::new(160, 2),
            RoomType::JuniorSuite => Decimal::new(180, 2),
            RoomType::FamilySuite => Decimal::new(200, 2),
            RoomType::SeniorSuite => Decimal::new(220, 2),
        }
    }
}
