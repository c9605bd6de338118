pub mod errors;
pub mod html;
pub mod pdf;

pub use errors::{error_to_response, ResultResp};
pub use html::{html_response, text_response};
pub use pdf::pdf_response;
