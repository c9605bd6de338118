use crate::bookings::{prepare_confirmation, BookingRequest};
use crate::domain::Language;
use crate::errors::ServerError;
use crate::filters::{apply_filters, FilterCriteria};
use crate::responses::{html_response, pdf_response, text_response, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{confirmation_page, hotels_page, ConfirmationVm, HotelsVm};
use astra::Request;
use chrono::Local;
use url::form_urlencoded;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query().unwrap_or("");
    tracing::debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") | ("GET", "/hotels") => hotels(query, state),
        ("GET", "/booking/confirmation") => confirmation(query, state),
        ("GET", "/booking/confirmation.pdf") => confirmation_pdf(query, state),
        ("GET", "/health") => text_response("ok"),
        _ => Err(ServerError::NotFound),
    }
}

fn hotels(query: &str, state: &AppState) -> ResultResp {
    let criteria = FilterCriteria::from_query(query);
    let hotels = apply_filters(&state.catalog, &criteria);
    tracing::debug!(
        shown = hotels.len(),
        total = state.catalog.len(),
        "hotel filters applied"
    );

    html_response(hotels_page(&HotelsVm {
        language: language_param(query),
        criteria: &criteria,
        hotels,
        catalog_size: state.catalog.len(),
    }))
}

fn confirmation(query: &str, state: &AppState) -> ResultResp {
    let request = BookingRequest::from_query(query)?;
    let prepared = prepare_confirmation(state, &request, Local::now().naive_local())?;

    html_response(confirmation_page(&ConfirmationVm {
        document: &prepared.document,
        nights: prepared.draft.nights(),
        booking_query: request.to_query(&prepared.reference),
    }))
}

fn confirmation_pdf(query: &str, state: &AppState) -> ResultResp {
    let request = BookingRequest::from_query(query)?;
    let prepared = prepare_confirmation(state, &request, Local::now().naive_local())?;
    let file = state
        .exporter
        .export(&prepared.document, &prepared.reference)?;

    if let Some(dir) = &state.config.export.archive_dir {
        let path = file.write_into(dir)?;
        tracing::info!(path = %path.display(), "archived booking confirmation");
    }

    pdf_response(file)
}

fn language_param(query: &str) -> Language {
    let lang = form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == "lang")
        .map(|(_, v)| v.into_owned());
    Language::from_param(lang.as_deref())
}
