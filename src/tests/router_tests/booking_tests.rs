use crate::tests::utils::{body_bytes, body_string, failing_export_state, get, test_state};

const BOOKING: &str = "/booking/confirmation?hotel=swissotel-makkah&room_type=deluxe&rooms=2\
    &breakfast=1&first_name=Amina&last_name=Haddad&email=amina%40example.com\
    &check_in=2026-12-01&check_out=2026-12-04";

const ANONYMOUS: &str = "/booking/confirmation?hotel=al-kiswah-towers&room_type=standard\
    &check_in=2026-12-01&check_out=2026-12-02";

fn pdf_uri(uri: &str) -> String {
    uri.replacen("/booking/confirmation?", "/booking/confirmation.pdf?", 1)
}

#[test]
fn confirmation_page_shows_guest_and_totals() {
    let state = test_state();
    let mut resp = get(&state, BOOKING);
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Amina Haddad"));
    assert!(body.contains("amina@example.com"));
    assert!(body.contains("Swissotel Makkah"));
    assert!(body.contains("/booking/confirmation.pdf?"));
    assert!(body.contains("BK"));
}

#[test]
fn confirmation_falls_back_for_missing_guest_fields() {
    let state = test_state();
    let mut resp = get(&state, ANONYMOUS);
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Guest"));
    assert!(body.contains("N/A"));
}

#[test]
fn arabic_confirmation_is_right_to_left() {
    let state = test_state();
    let mut resp = get(&state, &format!("{ANONYMOUS}&lang=ar"));
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains(r#"dir="rtl""#));
    assert!(body.contains("ضيف"));
}

#[test]
fn pdf_download_is_named_after_the_reference() {
    let state = test_state();
    let mut resp = get(&state, &format!("{}&ref=BK7H3KQ9ZP", pdf_uri(BOOKING)));
    assert_eq!(resp.status(), 200);

    let headers = resp.headers();
    assert_eq!(headers.get("Content-Type").unwrap(), "application/pdf");
    assert_eq!(
        headers.get("Content-Disposition").unwrap(),
        r#"attachment; filename="Booking_Confirmation_BK7H3KQ9ZP.pdf""#
    );

    let bytes = body_bytes(&mut resp);
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn zero_rooms_is_a_bad_request() {
    let state = test_state();
    let uri = BOOKING.replace("rooms=2", "rooms=0");
    assert_eq!(get(&state, &uri).status(), 400);
    assert_eq!(get(&state, &pdf_uri(&uri)).status(), 400);
}

#[test]
fn room_type_the_hotel_does_not_offer_is_a_bad_request() {
    let state = test_state();
    let uri = ANONYMOUS.replace("room_type=standard", "room_type=seniorSuite");
    assert_eq!(get(&state, &uri).status(), 400);
}

#[test]
fn unknown_hotel_is_not_found() {
    let state = test_state();
    let uri = BOOKING.replace("swissotel-makkah", "no-such-hotel");
    assert_eq!(get(&state, &uri).status(), 404);
}

#[test]
fn failed_export_returns_error_page_without_a_file() {
    let state = failing_export_state();
    let mut resp = get(&state, &pdf_uri(BOOKING));
    assert_eq!(resp.status(), 500);
    assert!(resp.headers().get("Content-Disposition").is_none());

    let body = body_string(&mut resp);
    assert!(body.contains("Could not generate document, please retry"));
}

#[test]
fn pdf_download_is_archived_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = test_state();
    state.config.export.archive_dir = Some(dir.path().to_path_buf());

    let resp = get(&state, &format!("{}&ref=BK7H3KQ9ZP", pdf_uri(BOOKING)));
    assert_eq!(resp.status(), 200);

    let archived = std::fs::read(dir.path().join("Booking_Confirmation_BK7H3KQ9ZP.pdf")).unwrap();
    assert!(archived.starts_with(b"%PDF-"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn failed_export_leaves_the_archive_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = failing_export_state();
    state.config.export.archive_dir = Some(dir.path().to_path_buf());

    assert_eq!(get(&state, &pdf_uri(BOOKING)).status(), 500);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
