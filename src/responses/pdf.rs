// responses/pdf.rs
use crate::errors::ServerError;
use crate::export::ExportedFile;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Return an exported PDF as a download.
pub fn pdf_response(file: ExportedFile) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::APPLICATION_PDF.as_ref())
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", file.file_name),
        )
        .body(Body::from(file.bytes))
        .map_err(|_| ServerError::InternalError)
}
