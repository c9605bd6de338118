// src/bookings.rs
//
// Booking form handling: query string -> draft -> quote -> confirmation document.

use crate::catalog::{find_hotel, select_room};
use crate::document::{render_document, BookingDocument, DocumentInput, HotelIdentity};
use crate::domain::{
    compute_quote, BookingDraft, BookingReference, GuestRecord, Language, MealSelection,
    QuoteError, RoomSelection, RoomType,
};
use crate::errors::ServerError;
use crate::labels::resolve_labels;
use crate::state::AppState;
use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;
use url::form_urlencoded;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingRequestError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("invalid {field}: '{value}'")]
    InvalidField { field: &'static str, value: String },
    #[error(transparent)]
    Quantity(#[from] QuoteError),
    #[error("check-out {check_out} is before check-in {check_in}")]
    DatesOutOfOrder {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

impl From<BookingRequestError> for ServerError {
    fn from(err: BookingRequestError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}

/// The booking form as submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub hotel_id: String,
    pub room_type: RoomType,
    pub rooms: u32,
    pub meals: MealSelection,
    pub guest: GuestRecord,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub reference: Option<BookingReference>,
    pub language: Language,
}

fn is_checked(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

fn parse_date(field: &'static str, value: Option<String>) -> Result<NaiveDate, BookingRequestError> {
    let value = value.ok_or(BookingRequestError::MissingField(field))?;
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| BookingRequestError::InvalidField { field, value })
}

impl BookingRequest {
    pub fn from_query(query: &str) -> Result<Self, BookingRequestError> {
        let mut hotel_id = None;
        let mut room_type = None;
        let mut rooms = None;
        let mut meals = MealSelection::none();
        let mut guest = GuestRecord::default();
        let mut check_in = None;
        let mut check_out = None;
        let mut reference = None;
        let mut language = Language::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.into_owned();
            match key.as_ref() {
                "hotel" => hotel_id = Some(value),
                "room_type" => room_type = Some(value),
                "rooms" => rooms = Some(value),
                "breakfast" => meals.breakfast = is_checked(&value),
                "lunch" => meals.lunch = is_checked(&value),
                "dinner" => meals.dinner = is_checked(&value),
                "first_name" => guest.first_name = value,
                "last_name" => guest.last_name = value,
                "email" => guest.email = value,
                "check_in" => check_in = Some(value),
                "check_out" => check_out = Some(value),
                "ref" => {
                    reference = Some(BookingReference::parse(&value).ok_or(
                        BookingRequestError::InvalidField {
                            field: "ref",
                            value,
                        },
                    )?)
                }
                "lang" => language = Language::from_param(Some(&value)),
                _ => {}
            }
        }

        let hotel_id = hotel_id
            .filter(|h| !h.trim().is_empty())
            .ok_or(BookingRequestError::MissingField("hotel"))?;
        let room_type_raw = room_type.ok_or(BookingRequestError::MissingField("room_type"))?;
        let room_type = room_type_raw
            .parse()
            .map_err(|_| BookingRequestError::InvalidField {
                field: "room_type",
                value: room_type_raw,
            })?;
        // The form's room stepper starts at one, so an absent count means one room.
        let rooms = match rooms {
            Some(raw) => RoomSelection::parse_count(&raw)?,
            None => 1,
        };
        let check_in = parse_date("check_in", check_in)?;
        let check_out = parse_date("check_out", check_out)?;
        if check_out < check_in {
            return Err(BookingRequestError::DatesOutOfOrder {
                check_in,
                check_out,
            });
        }

        Ok(Self {
            hotel_id,
            room_type,
            rooms,
            meals,
            guest,
            check_in,
            check_out,
            reference,
            language,
        })
    }

    /// Query string for the same booking with a fixed reference, so the
    /// preview and the PDF download show the same number.
    pub fn to_query(&self, reference: &BookingReference) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        out.append_pair("hotel", &self.hotel_id)
            .append_pair("room_type", self.room_type.as_str())
            .append_pair("rooms", &self.rooms.to_string());
        for meal in self.meals.selected() {
            out.append_pair(meal.as_str(), "1");
        }
        out.append_pair("first_name", &self.guest.first_name)
            .append_pair("last_name", &self.guest.last_name)
            .append_pair("email", &self.guest.email)
            .append_pair("check_in", &self.check_in.to_string())
            .append_pair("check_out", &self.check_out.to_string())
            .append_pair("ref", reference.as_str())
            .append_pair("lang", self.language.code());
        out.finish()
    }
}

pub struct PreparedConfirmation {
    pub reference: BookingReference,
    pub draft: BookingDraft,
    pub document: BookingDocument,
}

/// Resolves the request against the catalog and lays out the confirmation.
pub fn prepare_confirmation(
    state: &AppState,
    request: &BookingRequest,
    generated_at: NaiveDateTime,
) -> Result<PreparedConfirmation, ServerError> {
    let hotel = find_hotel(&state.catalog, &request.hotel_id).ok_or(ServerError::NotFound)?;
    let language = request.language;

    let room = select_room(hotel, request.room_type, request.rooms, language)?;
    let draft = BookingDraft {
        room,
        meals: request.meals,
        guest: request.guest.clone(),
        check_in: request.check_in,
        check_out: request.check_out,
    };
    let quote = compute_quote(&draft.room, &draft.meals, &state.config.meal_prices)?;

    let reference = request
        .reference
        .clone()
        .unwrap_or_else(BookingReference::generate);
    let identity = HotelIdentity::from_record(hotel, language);
    let labels = resolve_labels(language, state.overrides.for_language(language));

    let document = render_document(
        &DocumentInput {
            reference: &reference,
            draft: &draft,
            quote: &quote,
            hotel: &identity,
            meal_prices: &state.config.meal_prices,
            generated_at,
        },
        &labels,
        language.direction(),
    );

    tracing::debug!(
        %reference,
        room = draft.room.room_id(),
        total = %quote.total,
        "prepared booking confirmation"
    );

    Ok(PreparedConfirmation {
        reference,
        draft,
        document,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERY: &str = "hotel=swissotel-makkah&room_type=deluxe&rooms=2&breakfast=1&dinner=on\
        &first_name=Amina&last_name=Haddad&email=amina%40example.com\
        &check_in=2026-12-01&check_out=2026-12-04&lang=ar";

    #[test]
    fn parses_a_full_booking_form() {
        let req = BookingRequest::from_query(QUERY).unwrap();
        assert_eq!(req.hotel_id, "swissotel-makkah");
        assert_eq!(req.room_type, RoomType::Deluxe);
        assert_eq!(req.rooms, 2);
        assert_eq!(
            req.meals,
            MealSelection {
                breakfast: true,
                lunch: false,
                dinner: true
            }
        );
        assert_eq!(req.guest.email, "amina@example.com");
        assert_eq!(req.language, Language::Ar);
        assert!(req.reference.is_none());
    }

    #[test]
    fn to_query_round_trips_with_reference() {
        let req = BookingRequest::from_query(QUERY).unwrap();
        let reference = BookingReference::parse("BK12345678").unwrap();
        let again = BookingRequest::from_query(&req.to_query(&reference)).unwrap();
        assert_eq!(again.reference, Some(reference));
        assert_eq!(
            BookingRequest {
                reference: None,
                ..again
            },
            req
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            BookingRequest::from_query("room_type=deluxe&check_in=2026-12-01&check_out=2026-12-02"),
            Err(BookingRequestError::MissingField("hotel"))
        );
        assert_eq!(
            BookingRequest::from_query(
                "hotel=x&room_type=deluxe&rooms=0&check_in=2026-12-01&check_out=2026-12-02"
            ),
            Err(BookingRequestError::Quantity(QuoteError::InvalidQuantity(0)))
        );
        assert!(matches!(
            BookingRequest::from_query(
                "hotel=x&room_type=penthouse&check_in=2026-12-01&check_out=2026-12-02"
            ),
            Err(BookingRequestError::InvalidField { field: "room_type", .. })
        ));
        assert!(matches!(
            BookingRequest::from_query(
                "hotel=x&room_type=deluxe&check_in=2026-12-05&check_out=2026-12-02"
            ),
            Err(BookingRequestError::DatesOutOfOrder { .. })
        ));
        assert!(matches!(
            BookingRequest::from_query(
                "hotel=x&room_type=deluxe&check_in=2026-12-01&check_out=2026-12-02&ref=../x"
            ),
            Err(BookingRequestError::InvalidField { field: "ref", .. })
        ));
    }

    #[test]
    fn missing_room_count_defaults_to_one() {
        let req = BookingRequest::from_query(
            "hotel=x&room_type=double&check_in=2026-12-01&check_out=2026-12-02",
        )
        .unwrap();
        assert_eq!(req.rooms, 1);
        assert_eq!(req.meals, MealSelection::none());
    }
}
