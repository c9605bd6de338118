use crate::catalog::hotel_catalog;
use crate::tests::utils::{body_string, get, test_state};

#[test]
fn hotels_page_lists_the_whole_catalog_by_default() {
    let state = test_state();
    let mut resp = get(&state, "/hotels");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    for hotel in hotel_catalog() {
        assert!(body.contains(&hotel.name), "missing {}", hotel.name);
    }
    assert!(!body.contains("No hotels match your filters."));
}

#[test]
fn root_serves_the_hotel_list() {
    let state = test_state();
    let resp = get(&state, "/");
    assert_eq!(resp.status(), 200);
}

#[test]
fn filter_query_narrows_the_list() {
    let state = test_state();
    let mut resp = get(&state, "/hotels?rating=4&max_price=250");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Al Marwa Rayhaan"));
    assert!(!body.contains("Raffles Makkah Palace"));
}

#[test]
fn empty_result_shows_message() {
    let state = test_state();
    let mut resp = get(&state, "/hotels?min_price=490&max_price=500");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("No hotels match your filters."));
}

#[test]
fn arabic_page_is_right_to_left() {
    let state = test_state();
    let mut resp = get(&state, "/hotels?lang=ar");
    let body = body_string(&mut resp);
    assert!(body.contains(r#"dir="rtl""#));
    assert!(body.contains(r#"lang="ar""#));
}

#[test]
fn health_and_unknown_routes() {
    let state = test_state();
    let mut resp = get(&state, "/health");
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(&mut resp), "ok");

    assert_eq!(get(&state, "/nope").status(), 404);
}
