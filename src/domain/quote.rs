// src/domain/quote.rs

use crate::domain::booking::{MealPriceTable, MealSelection, RoomSelection};
use crate::domain::money::Money;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("room count must be at least 1 (got {0})")]
    InvalidQuantity(i64),
    #[error("room count '{0}' is not a number")]
    UnparsableQuantity(String),
}

/// Price of a booking. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub room_subtotal: Money,
    pub meal_subtotal: Money,
    pub total: Money,
}

/// Rooms are charged `unit price × count`; each selected meal plan is charged once.
/// The number of nights does not enter the price.
pub fn compute_quote(
    room: &RoomSelection,
    meals: &MealSelection,
    prices: &MealPriceTable,
) -> Result<Quote, QuoteError> {
    if room.count() == 0 {
        return Err(QuoteError::InvalidQuantity(0));
    }

    let room_subtotal = room.unit_price_per_night() * room.count();
    let meal_subtotal: Money = meals.selected().map(|meal| prices.price(meal)).sum();

    Ok(Quote {
        room_subtotal,
        meal_subtotal,
        total: room_subtotal + meal_subtotal,
    })
}
