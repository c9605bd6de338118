use crate::catalog::RoomOfferError;
use crate::domain::QuoteError;
use crate::export::ExportError;
use thiserror::Error;

/// Errors surfaced by request handlers, each mapped to an HTML error page.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Could not generate document, please retry")]
    ExportFailed(#[from] ExportError),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::ExportFailed(_) | ServerError::InternalError => 500,
        }
    }
}

impl From<QuoteError> for ServerError {
    fn from(err: QuoteError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}

impl From<RoomOfferError> for ServerError {
    fn from(err: RoomOfferError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}
