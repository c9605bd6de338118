// src/catalog.rs
//
// The static hotel catalog and the room offers derived from it.

use crate::domain::{
    GuestRatingBucket as G, HotelRecord, Language, Money, PropertyView as V, QuoteError,
    RoomSelection, RoomType as R,
};

struct Entry {
    id: &'static str,
    name: &'static str,
    arabic_name: &'static str,
    price: i64,
    rating: f64,
    review_count: u32,
    view: V,
    bucket: G,
    room_types: &'static [R],
    room_count: u32,
    address: Option<&'static str>,
    phone: Option<&'static str>,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "raffles-makkah-palace",
        name: "Raffles Makkah Palace",
        arabic_name: "فندق رافلز قصر مكة",
        price: 480,
        rating: 4.8,
        review_count: 1284,
        view: V::FullKaaba,
        bucket: G::Excellent,
        room_types: &[R::JuniorSuite, R::SeniorSuite, R::Deluxe],
        room_count: 214,
        address: Some("King Abdulaziz Endowment, Makkah 24231"),
        phone: Some("+966 12 571 9888"),
    },
    Entry {
        id: "swissotel-makkah",
        name: "Swissotel Makkah",
        arabic_name: "فندق سويس أوتيل مكة",
        price: 320,
        rating: 4.5,
        review_count: 3410,
        view: V::FullKaaba,
        bucket: G::VeryGood,
        room_types: &[R::Deluxe, R::Double, R::SuperDeluxe],
        room_count: 1624,
        address: Some("Ajyad Street, Makkah 21955"),
        phone: Some("+966 12 571 7777"),
    },
    Entry {
        id: "pullman-zamzam-makkah",
        name: "Pullman ZamZam Makkah",
        arabic_name: "فندق بولمان زمزم مكة",
        price: 280,
        rating: 4.3,
        review_count: 5120,
        view: V::PartialKaaba,
        bucket: G::VeryGood,
        room_types: &[R::Double, R::Triple, R::Quadruple],
        room_count: 1315,
        address: Some("Ibrahim Al Khalil Street, Makkah 21955"),
        phone: Some("+966 12 571 5555"),
    },
    Entry {
        id: "hilton-suites-makkah",
        name: "Hilton Suites Makkah",
        arabic_name: "فندق أجنحة هيلتون مكة",
        price: 350,
        rating: 4.6,
        review_count: 2288,
        view: V::PartialKaaba,
        bucket: G::Excellent,
        room_types: &[R::FamilySuite, R::JuniorSuite, R::Deluxe],
        room_count: 430,
        address: Some("Jabal Omar, Ibrahim Al Khalil Street, Makkah"),
        phone: Some("+966 12 532 0000"),
    },
    Entry {
        id: "clock-royal-tower",
        name: "Makkah Clock Royal Tower",
        arabic_name: "فندق برج الساعة الملكي مكة",
        price: 420,
        rating: 4.7,
        review_count: 6870,
        view: V::FullKaaba,
        bucket: G::Excellent,
        room_types: &[R::Deluxe, R::SuperDeluxe, R::SeniorSuite],
        room_count: 858,
        address: Some("King Abdul Aziz Endowment, Makkah 21955"),
        phone: Some("+966 12 571 2222"),
    },
    Entry {
        id: "al-marwa-rayhaan",
        name: "Al Marwa Rayhaan by Rotana",
        arabic_name: "فندق المروة ريحان من روتانا",
        price: 230,
        rating: 4.2,
        review_count: 4015,
        view: V::PartialKaaba,
        bucket: G::VeryGood,
        room_types: &[R::Standard, R::Double, R::Triple],
        room_count: 1074,
        address: Some("Abraj Al Bait Complex, Makkah 21955"),
        phone: Some("+966 12 571 8000"),
    },
    Entry {
        id: "dar-al-tawhid",
        name: "Dar Al Tawhid InterContinental",
        arabic_name: "فندق دار التوحيد إنتركونتيننتال",
        price: 390,
        rating: 4.6,
        review_count: 2950,
        view: V::FullKaaba,
        bucket: G::Excellent,
        room_types: &[R::Deluxe, R::Double, R::FamilySuite],
        room_count: 186,
        address: Some("Ibrahim Al Khalil Street, Makkah 21955"),
        phone: Some("+966 12 541 1414"),
    },
    Entry {
        id: "conrad-makkah",
        name: "Conrad Makkah",
        arabic_name: "فندق كونراد مكة",
        price: 260,
        rating: 4.4,
        review_count: 1876,
        view: V::NoView,
        bucket: G::VeryGood,
        room_types: &[R::Deluxe, R::JuniorSuite],
        room_count: 420,
        address: Some("Jabal Omar Development, Makkah 24231"),
        phone: Some("+966 12 532 1111"),
    },
    Entry {
        id: "le-meridien-towers",
        name: "Le Meridien Towers Makkah",
        arabic_name: "فندق أبراج لو ميريديان مكة",
        price: 170,
        rating: 3.9,
        review_count: 2630,
        view: V::NoView,
        bucket: G::Good,
        room_types: &[R::Standard, R::Double, R::Triple, R::Quadruple],
        room_count: 1500,
        address: Some("King Abdul Aziz Road, Kudai, Makkah"),
        phone: Some("+966 12 549 9000"),
    },
    Entry {
        id: "elaf-kinda",
        name: "Elaf Kinda Hotel",
        arabic_name: "فندق إيلاف كندة",
        price: 150,
        rating: 3.8,
        review_count: 1420,
        view: V::NoView,
        bucket: G::Good,
        room_types: &[R::Standard, R::Double, R::Quadruple],
        room_count: 478,
        address: Some("Ibrahim Al Khalil Street, Makkah"),
        phone: Some("+966 12 574 3222"),
    },
    Entry {
        id: "anjum-makkah",
        name: "Anjum Hotel Makkah",
        arabic_name: "فندق أنجم مكة",
        price: 210,
        rating: 4.1,
        review_count: 3305,
        view: V::PartialKaaba,
        bucket: G::VeryGood,
        room_types: &[R::Double, R::Triple, R::Hexagonal],
        room_count: 1700,
        address: Some("Umm Al Qura Street, Makkah 24231"),
        phone: Some("+966 12 520 4444"),
    },
    Entry {
        id: "voco-makkah",
        name: "Voco Makkah",
        arabic_name: "فندق فوكو مكة",
        price: 190,
        rating: 4.0,
        review_count: 987,
        view: V::NoView,
        bucket: G::Good,
        room_types: &[R::Standard, R::Double, R::FamilySuite],
        room_count: 620,
        address: Some("Ibrahim Al Khalil Road, Makkah"),
        phone: Some("+966 12 531 7000"),
    },
    Entry {
        id: "jabal-omar-hyatt",
        name: "Jabal Omar Hyatt Regency",
        arabic_name: "فندق حياة ريجنسي جبل عمر",
        price: 245,
        rating: 4.4,
        review_count: 4410,
        view: V::PartialKaaba,
        bucket: G::VeryGood,
        room_types: &[R::Deluxe, R::Double, R::Quadruple],
        room_count: 656,
        address: Some("Jabal Omar, Ibrahim Al Khalil Street, Makkah"),
        phone: Some("+966 12 531 1234"),
    },
    Entry {
        id: "al-kiswah-towers",
        name: "Al Kiswah Towers Hotel",
        arabic_name: "فندق أبراج الكسوة",
        price: 95,
        rating: 3.2,
        review_count: 610,
        view: V::NoView,
        bucket: G::Average,
        room_types: &[R::Standard, R::Triple, R::Quadruple, R::Hexagonal],
        room_count: 1200,
        address: Some("Al Aziziyah, Makkah"),
        phone: None,
    },
];

/// The full catalog in display order.
pub fn hotel_catalog() -> Vec<HotelRecord> {
    ENTRIES
        .iter()
        .map(|e| HotelRecord {
            id: e.id.to_string(),
            name: e.name.to_string(),
            arabic_name: e.arabic_name.to_string(),
            price: Money::from_units(e.price),
            rating: e.rating,
            review_count: e.review_count,
            property_view: e.view,
            guest_rating_bucket: e.bucket,
            room_types: e.room_types.to_vec(),
            room_count: e.room_count,
            address: e.address.map(str::to_string),
            phone: e.phone.map(str::to_string),
        })
        .collect()
}

pub fn find_hotel<'a>(catalog: &'a [HotelRecord], id: &str) -> Option<&'a HotelRecord> {
    catalog.iter().find(|h| h.id == id)
}

/// Nightly price of one room type at this hotel.
pub fn room_price(hotel: &HotelRecord, room_type: R) -> Money {
    hotel.price.scale(room_type.price_factor())
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RoomOfferError {
    #[error("{hotel} does not offer {room_type}")]
    NotOffered {
        hotel: String,
        room_type: &'static str,
    },
    #[error(transparent)]
    Quantity(#[from] QuoteError),
}

/// Builds the guest's room selection from a catalog hotel.
pub fn select_room(
    hotel: &HotelRecord,
    room_type: R,
    count: u32,
    language: Language,
) -> Result<RoomSelection, RoomOfferError> {
    if !hotel.offers(room_type) {
        return Err(RoomOfferError::NotOffered {
            hotel: hotel.id.clone(),
            room_type: room_type.as_str(),
        });
    }

    Ok(RoomSelection::new(
        format!("{}-{}", hotel.id, room_type.as_str()),
        room_type.label(language),
        room_price(hotel, room_type),
        count,
    )?)
}
