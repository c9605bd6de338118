use crate::catalog::room_price;
use crate::domain::{GuestRatingBucket, HotelRecord, Language, PropertyView, RoomType};
use crate::filters::FilterCriteria;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct HotelsVm<'a> {
    pub language: Language,
    pub criteria: &'a FilterCriteria,
    pub hotels: Vec<&'a HotelRecord>,
    pub catalog_size: usize,
}

pub fn hotels_page(vm: &HotelsVm) -> Markup {
    let lang = vm.language;
    let current_page = if vm.criteria.is_default() {
        "/hotels".to_string()
    } else {
        format!("/hotels?{}", vm.criteria.to_query())
    };
    desktop_layout(
        lang.pick("Hotels", "الفنادق"),
        lang,
        &current_page,
        html! {
            main class="search" {
                (filter_form(vm))
                section {
                    p class="muted" {
                        (vm.hotels.len()) " / " (vm.catalog_size) " "
                        (lang.pick("hotels", "فندق"))
                    }
                    @if vm.hotels.is_empty() {
                        div class="card" {
                            p { (lang.pick("No hotels match your filters.", "لا توجد فنادق مطابقة لخيارات البحث.")) }
                            a href=(format!("/hotels?lang={}", lang.code())) { (lang.pick("Reset filters", "إعادة تعيين")) }
                        }
                    }
                    @for hotel in &vm.hotels {
                        (hotel_card(hotel, lang))
                    }
                }
            }
        },
    )
}

fn filter_form(vm: &HotelsVm) -> Markup {
    let lang = vm.language;
    let c = vm.criteria;
    let rating_floor = c.min_rating.map(|r| r.round() as u8);

    html! {
        form class="card" method="get" action="/hotels" {
            input type="hidden" name="lang" value=(lang.code());

            h3 { (lang.pick("Rating", "التقييم")) }
            select name="rating" {
                option value="" selected[rating_floor.is_none()] { (lang.pick("Any", "الكل")) }
                @for r in 1u8..=5 {
                    option value=(r) selected[rating_floor == Some(r)] { (r) "+" }
                }
            }

            h3 { (lang.pick("Price per night", "السعر لليلة")) }
            input type="number" name="min_price" min="0" step="1" value=(c.min_price.amount().trunc().to_string());
            " - "
            input type="number" name="max_price" min="0" step="1" value=(c.max_price.amount().trunc().to_string());

            h3 { (lang.pick("View", "الإطلالة")) }
            @for view in PropertyView::ALL {
                label {
                    input type="checkbox" name="view" value=(view.as_str()) checked[c.property_views.contains(view)];
                    " " (view.label(lang))
                }
                br;
            }

            h3 { (lang.pick("Guest rating", "تقييم النزلاء")) }
            @for bucket in GuestRatingBucket::ALL {
                label {
                    input type="checkbox" name="guest_rating" value=(bucket.as_str()) checked[c.guest_rating_buckets.contains(bucket)];
                    " " (bucket.label(lang))
                }
                br;
            }

            h3 { (lang.pick("Room type", "نوع الغرفة")) }
            @for room_type in RoomType::ALL {
                label {
                    input type="checkbox" name="room_type" value=(room_type.as_str()) checked[c.room_types.contains(room_type)];
                    " " (room_type.label(lang))
                }
                br;
            }

            p {
                button type="submit" { (lang.pick("Apply", "تطبيق")) }
                " "
                a href=(format!("/hotels?lang={}", lang.code())) { (lang.pick("Reset", "إعادة تعيين")) }
            }
        }
    }
}

fn hotel_card(hotel: &HotelRecord, lang: Language) -> Markup {
    html! {
        article class="card" id=(hotel.id) {
            div class="hotel" {
                div {
                    h2 { (hotel.display_name(lang)) }
                    p class="muted" {
                        (hotel.property_view.label(lang)) " · "
                        (hotel.guest_rating_bucket.label(lang)) " · "
                        (hotel.rating_display()) " (" (hotel.review_count) ")"
                    }
                }
                div class="price" {
                    (hotel.price.to_string()) " SAR"
                    div class="muted" { (lang.pick("per night", "لليلة")) }
                }
            }
            (booking_form(hotel, lang))
        }
    }
}

fn booking_form(hotel: &HotelRecord, lang: Language) -> Markup {
    html! {
        details {
            summary { (lang.pick("Book a room", "احجز غرفة")) }
            form method="get" action="/booking/confirmation" {
                input type="hidden" name="hotel" value=(hotel.id);
                input type="hidden" name="lang" value=(lang.code());
                p {
                    select name="room_type" required {
                        @for room_type in &hotel.room_types {
                            option value=(room_type.as_str()) {
                                (room_type.label(lang)) " - " (room_price(hotel, *room_type).to_string()) " SAR"
                            }
                        }
                    }
                    " "
                    label { (lang.pick("Rooms", "الغرف")) " "
                        input type="number" name="rooms" min="1" value="1" required;
                    }
                }
                p {
                    @for (name, en, ar) in [("breakfast", "Breakfast", "الإفطار"), ("lunch", "Lunch", "الغداء"), ("dinner", "Dinner", "العشاء")] {
                        label { input type="checkbox" name=(name) value="1"; " " (lang.pick(en, ar)) } " "
                    }
                }
                p {
                    input type="text" name="first_name" placeholder=(lang.pick("First name", "الاسم الأول"));
                    " "
                    input type="text" name="last_name" placeholder=(lang.pick("Last name", "اسم العائلة"));
                    " "
                    input type="email" name="email" placeholder=(lang.pick("Email", "البريد الإلكتروني"));
                }
                p {
                    label { (lang.pick("Check-in", "الوصول")) " " input type="date" name="check_in" required; }
                    " "
                    label { (lang.pick("Check-out", "المغادرة")) " " input type="date" name="check_out" required; }
                }
                button type="submit" { (lang.pick("Pay & confirm", "ادفع وأكد الحجز")) }
            }
        }
    }
}
