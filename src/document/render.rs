// src/document/render.rs

use super::{Block, BookingDocument, Row, Section, SectionKind, MISSING_FIELD};
use crate::domain::{
    BookingDraft, BookingReference, Direction, HotelRecord, Language, MealKind, MealPriceTable,
    Money, Quote,
};
use crate::labels::{LabelDictionary, LabelField as L};
use chrono::NaiveDateTime;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Identity of the issuing hotel. Any field may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelIdentity {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub rating: Option<String>,
}

impl HotelIdentity {
    pub fn from_record(hotel: &HotelRecord, language: Language) -> Self {
        Self {
            name: Some(hotel.display_name(language).to_string()),
            address: hotel.address.clone(),
            phone: hotel.phone.clone(),
            rating: Some(hotel.rating_display()),
        }
    }
}

pub struct DocumentInput<'a> {
    pub reference: &'a BookingReference,
    pub draft: &'a BookingDraft,
    pub quote: &'a Quote,
    pub hotel: &'a HotelIdentity,
    pub meal_prices: &'a MealPriceTable,
    pub generated_at: NaiveDateTime,
}

fn or_missing(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(MISSING_FIELD)
        .to_string()
}

fn meal_label(meal: MealKind) -> L {
    match meal {
        MealKind::Breakfast => L::Breakfast,
        MealKind::Lunch => L::Lunch,
        MealKind::Dinner => L::Dinner,
    }
}

/// Composes the confirmation page. Every block is always present, so the
/// layout has the same shape for every booking.
pub fn render_document(
    input: &DocumentInput<'_>,
    labels: &LabelDictionary,
    direction: Direction,
) -> BookingDocument {
    let language = labels.language();
    let draft = input.draft;
    let currency = labels.get(L::Currency);
    let amount = |m: Money| format!("{m} {currency}");

    let hotel_name = or_missing(&input.hotel.name);
    let hotel_phone = or_missing(&input.hotel.phone);

    let booking = Section {
        kind: SectionKind::BookingDetails,
        title: labels.get(L::BookingDetails).to_string(),
        rows: vec![
            Row::new(labels.get(L::BookingReference), input.reference.as_str()),
            Row::new(labels.get(L::GuestName), draft.guest.display_name(language)),
            Row::new(labels.get(L::Email), draft.guest.display_email()),
        ],
    };

    let stay = Section {
        kind: SectionKind::StayDetails,
        title: labels.get(L::StayDetails).to_string(),
        rows: vec![
            Row::new(
                labels.get(L::CheckIn),
                draft.check_in.format(DATE_FORMAT).to_string(),
            )
            .with_detail(labels.get(L::CheckInTime)),
            Row::new(
                labels.get(L::CheckOut),
                draft.check_out.format(DATE_FORMAT).to_string(),
            )
            .with_detail(labels.get(L::CheckOutTime)),
        ],
    };

    let room = Section {
        kind: SectionKind::RoomDetails,
        title: labels.get(L::RoomDetails).to_string(),
        rows: vec![
            Row::new(labels.get(L::RoomType), draft.room.name()),
            Row::new(labels.get(L::NumberOfRooms), draft.room.count().to_string()),
            Row::new(labels.get(L::Rating), or_missing(&input.hotel.rating)),
        ],
    };

    let meals = Section {
        kind: SectionKind::MealServices,
        title: labels.get(L::MealServices).to_string(),
        rows: MealKind::ALL
            .iter()
            .map(|meal| {
                let label = labels.get(meal_label(*meal));
                if draft.meals.is_selected(*meal) {
                    Row::new(label, amount(input.meal_prices.price(*meal)))
                } else {
                    Row::new(label, amount(Money::ZERO))
                        .with_detail(labels.get(L::NotSelected))
                        .muted()
                }
            })
            .collect(),
    };

    let price = Section {
        kind: SectionKind::PriceBreakdown,
        title: labels.get(L::PriceBreakdown).to_string(),
        rows: vec![
            Row::new(labels.get(L::RoomCharges), amount(input.quote.room_subtotal)).with_detail(
                format!(
                    "{} x {}",
                    draft.room.unit_price_per_night(),
                    draft.room.count()
                ),
            ),
            Row::new(labels.get(L::MealCharges), amount(input.quote.meal_subtotal)),
        ],
    };

    let blocks = vec![
        Block::Header {
            name: hotel_name.clone(),
            address: or_missing(&input.hotel.address),
            phone: hotel_phone.clone(),
        },
        Block::Badge {
            title: labels.get(L::Confirmed).to_string(),
            message: labels.get(L::ConfirmationMessage).to_string(),
        },
        Block::Section(booking),
        Block::Section(stay),
        Block::Section(room),
        Block::Section(meals),
        Block::Section(price),
        Block::Total {
            label: labels.get(L::TotalAmount).to_string(),
            amount: amount(input.quote.total),
        },
        Block::PaymentStatus {
            label: labels.get(L::PaymentStatus).to_string(),
            status: labels.get(L::Paid).to_string(),
        },
        Block::Notes {
            title: labels.get(L::ImportantNotes).to_string(),
            items: [L::Note1, L::Note2, L::Note3, L::Note4]
                .iter()
                .map(|n| labels.get(*n).to_string())
                .collect(),
        },
        Block::Footer {
            name: hotel_name,
            phone: hotel_phone,
            generated: format!(
                "{}: {}",
                labels.get(L::GeneratedOn),
                input.generated_at.format(TIMESTAMP_FORMAT)
            ),
        },
    ];

    BookingDocument {
        language,
        direction,
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute_quote, Align, GuestRecord, MealSelection, RoomSelection};
    use crate::labels::{resolve_labels, PartialLabels};
    use chrono::NaiveDate;

    struct Fixture {
        reference: BookingReference,
        draft: BookingDraft,
        quote: Quote,
        hotel: HotelIdentity,
        prices: MealPriceTable,
    }

    fn fixture(guest: GuestRecord, meals: MealSelection) -> Fixture {
        let room =
            RoomSelection::new("h-deluxe", "Deluxe Room", Money::from_units(240), 2).unwrap();
        let prices = MealPriceTable::default();
        let quote = compute_quote(&room, &meals, &prices).unwrap();
        Fixture {
            reference: BookingReference::parse("BK12345678").unwrap(),
            draft: BookingDraft {
                room,
                meals,
                guest,
                check_in: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
                check_out: NaiveDate::from_ymd_opt(2026, 12, 4).unwrap(),
            },
            quote,
            hotel: HotelIdentity {
                name: Some("Swissotel Makkah".into()),
                address: Some("Ajyad Street".into()),
                phone: None,
                rating: Some("4.5/5".into()),
            },
            prices,
        }
    }

    fn render(f: &Fixture, language: Language) -> BookingDocument {
        let input = DocumentInput {
            reference: &f.reference,
            draft: &f.draft,
            quote: &f.quote,
            hotel: &f.hotel,
            meal_prices: &f.prices,
            generated_at: NaiveDate::from_ymd_opt(2026, 10, 18)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        };
        let labels = resolve_labels(language, &PartialLabels::new());
        render_document(&input, &labels, language.direction())
    }

    fn rows(doc: &BookingDocument, kind: SectionKind) -> Vec<(String, String)> {
        doc.section(kind)
            .unwrap()
            .rows
            .iter()
            .map(|r| (r.label.clone(), r.value.clone()))
            .collect()
    }

    #[test]
    fn blocks_come_in_fixed_order() {
        let f = fixture(GuestRecord::default(), MealSelection::none());
        let doc = render(&f, Language::En);

        let shape: Vec<&str> = doc
            .blocks
            .iter()
            .map(|b| match b {
                Block::Header { .. } => "header",
                Block::Badge { .. } => "badge",
                Block::Section(s) => match s.kind {
                    SectionKind::BookingDetails => "booking",
                    SectionKind::StayDetails => "stay",
                    SectionKind::RoomDetails => "room",
                    SectionKind::MealServices => "meals",
                    SectionKind::PriceBreakdown => "price",
                },
                Block::Total { .. } => "total",
                Block::PaymentStatus { .. } => "payment",
                Block::Notes { .. } => "notes",
                Block::Footer { .. } => "footer",
            })
            .collect();

        assert_eq!(
            shape,
            [
                "header", "badge", "booking", "stay", "room", "meals", "price", "total",
                "payment", "notes", "footer"
            ]
        );
    }

    #[test]
    fn blank_guest_gets_fallbacks() {
        let f = fixture(GuestRecord::default(), MealSelection::none());
        let doc = render(&f, Language::En);
        assert_eq!(
            rows(&doc, SectionKind::BookingDetails),
            [
                ("Booking Reference".to_string(), "BK12345678".to_string()),
                ("Guest Name".to_string(), "Guest".to_string()),
                ("Email".to_string(), "N/A".to_string()),
            ]
        );
    }

    #[test]
    fn unselected_meals_stay_as_zero_rows() {
        let meals = MealSelection {
            breakfast: true,
            lunch: false,
            dinner: true,
        };
        let f = fixture(GuestRecord::default(), meals);
        let doc = render(&f, Language::En);
        let section = doc.section(SectionKind::MealServices).unwrap();

        assert_eq!(section.rows.len(), 3);
        assert_eq!(section.rows[0].value, "120.00 SAR");
        assert_eq!(section.rows[1].value, "0.00 SAR");
        assert_eq!(section.rows[1].detail.as_deref(), Some("Not selected"));
        assert!(section.rows[1].muted);
        assert_eq!(section.rows[2].value, "100.00 SAR");

        let total = doc.blocks.iter().find_map(|b| match b {
            Block::Total { amount, .. } => Some(amount.clone()),
            _ => None,
        });
        assert_eq!(total.as_deref(), Some("700.00 SAR"));
    }

    #[test]
    fn missing_hotel_phone_renders_placeholder() {
        let f = fixture(GuestRecord::default(), MealSelection::none());
        let doc = render(&f, Language::En);
        match &doc.blocks[0] {
            Block::Header { name, phone, .. } => {
                assert_eq!(name, "Swissotel Makkah");
                assert_eq!(phone, MISSING_FIELD);
            }
            other => panic!("expected header, got {other:?}"),
        }
    }

    #[test]
    fn arabic_mirrors_but_keeps_ascii_digits() {
        let guest = GuestRecord {
            first_name: "".into(),
            last_name: "".into(),
            email: "".into(),
        };
        let f = fixture(guest, MealSelection::none());
        let doc = render(&f, Language::Ar);

        assert_eq!(doc.direction, Direction::Rtl);
        assert_eq!(doc.text_align(), Align::Right);

        let price = doc.section(SectionKind::PriceBreakdown).unwrap();
        assert_eq!(price.rows[0].value, "480.00 SAR");
        assert_eq!(price.rows[0].label, "رسوم الغرف");
        let booking = rows(&doc, SectionKind::BookingDetails);
        assert_eq!(booking[1].1, "ضيف");
    }
}
