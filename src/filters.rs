// src/filters.rs

use crate::domain::{GuestRatingBucket, HotelRecord, Money, PropertyView, RoomType};
use std::collections::BTreeSet;
use url::form_urlencoded;

pub const DEFAULT_MIN_PRICE: i64 = 0;
pub const DEFAULT_MAX_PRICE: i64 = 500;

/// What the guest narrowed the hotel list down to.
/// Multi-value filters match any of their values; an empty set matches everything.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub min_rating: Option<f64>,
    pub min_price: Money,
    pub max_price: Money,
    pub property_views: BTreeSet<PropertyView>,
    pub guest_rating_buckets: BTreeSet<GuestRatingBucket>,
    pub room_types: BTreeSet<RoomType>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_rating: None,
            min_price: Money::from_units(DEFAULT_MIN_PRICE),
            max_price: Money::from_units(DEFAULT_MAX_PRICE),
            property_views: BTreeSet::new(),
            guest_rating_buckets: BTreeSet::new(),
            room_types: BTreeSet::new(),
        }
    }
}

impl FilterCriteria {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, hotel: &HotelRecord) -> bool {
        self.min_rating.map_or(true, |floor| hotel.rating >= floor)
            && self.min_price <= hotel.price
            && hotel.price <= self.max_price
            && (self.property_views.is_empty() || self.property_views.contains(&hotel.property_view))
            && (self.guest_rating_buckets.is_empty()
                || self.guest_rating_buckets.contains(&hotel.guest_rating_bucket))
            && (self.room_types.is_empty()
                || hotel.room_types.iter().any(|rt| self.room_types.contains(rt)))
    }

    /// Reads deep-link parameters: `rating` (1-5), `min_price`, `max_price`,
    /// and repeatable `view`, `guest_rating`, `room_type`. Anything absent or
    /// unparsable keeps its default, and parameter order does not matter.
    pub fn from_query(query: &str) -> Self {
        let mut criteria = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            match key.as_ref() {
                "rating" => {
                    if let Ok(r) = value.parse::<u8>() {
                        if (1..=5).contains(&r) {
                            criteria.min_rating = Some(f64::from(r));
                        }
                    }
                }
                "min_price" => {
                    if let Ok(p) = value.parse::<Money>() {
                        criteria.min_price = p;
                    }
                }
                "max_price" => {
                    if let Ok(p) = value.parse::<Money>() {
                        criteria.max_price = p;
                    }
                }
                "view" => {
                    if let Ok(v) = value.parse() {
                        criteria.property_views.insert(v);
                    }
                }
                "guest_rating" => {
                    if let Ok(b) = value.parse() {
                        criteria.guest_rating_buckets.insert(b);
                    }
                }
                "room_type" => {
                    if let Ok(rt) = value.parse() {
                        criteria.room_types.insert(rt);
                    }
                }
                _ => {}
            }
        }

        criteria
    }

    /// Inverse of [`FilterCriteria::from_query`]; defaults are left out.
    pub fn to_query(&self) -> String {
        let defaults = Self::default();
        let mut out = form_urlencoded::Serializer::new(String::new());

        if let Some(r) = self.min_rating {
            out.append_pair("rating", &format!("{r}"));
        }
        if self.min_price != defaults.min_price {
            out.append_pair("min_price", &self.min_price.to_string());
        }
        if self.max_price != defaults.max_price {
            out.append_pair("max_price", &self.max_price.to_string());
        }
        for v in &self.property_views {
            out.append_pair("view", v.as_str());
        }
        for b in &self.guest_rating_buckets {
            out.append_pair("guest_rating", b.as_str());
        }
        for rt in &self.room_types {
            out.append_pair("room_type", rt.as_str());
        }

        out.finish()
    }
}

/// Hotels passing every criterion, in catalog order.
pub fn apply_filters<'a>(catalog: &'a [HotelRecord], criteria: &FilterCriteria) -> Vec<&'a HotelRecord> {
    catalog.iter().filter(|hotel| criteria.matches(hotel)).collect()
}
