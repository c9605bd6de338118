pub mod booking;
pub mod hotel;
pub mod language;
pub mod money;
pub mod quote;

pub use booking::{
    BookingDraft, BookingReference, GuestRecord, MealKind, MealPriceTable, MealSelection,
    RoomSelection,
};
pub use hotel::{GuestRatingBucket, HotelRecord, PropertyView, RoomType};
pub use language::{Align, Direction, Language};
pub use money::Money;
pub use quote::{compute_quote, Quote, QuoteError};
