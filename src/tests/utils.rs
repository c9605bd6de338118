use crate::config::AppConfig;
use crate::document::BookingDocument;
use crate::export::{DocumentExporter, ExportError, Rasterizer};
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use image::RgbImage;
use std::io::Read;

/// App state with default config and the bundled font.
pub fn test_state() -> AppState {
    AppState::new(AppConfig::default())
        .unwrap_or_else(|e| panic!("Test state initialization failed: {e}"))
}

pub struct FailingRasterizer;

impl Rasterizer for FailingRasterizer {
    fn rasterize(&self, _document: &BookingDocument) -> Result<RgbImage, ExportError> {
        Err(ExportError::Raster("surface unavailable".into()))
    }
}

/// Same as `test_state`, but every export fails.
pub fn failing_export_state() -> AppState {
    let mut state = test_state();
    state.exporter = DocumentExporter::new(Box::new(FailingRasterizer), 90);
    state
}

/// Runs a GET through the router, turning handler errors into their error pages.
pub fn get(state: &AppState, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    handle(req, state).unwrap_or_else(crate::responses::error_to_response)
}

pub fn body_bytes(resp: &mut Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn body_string(resp: &mut Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}
