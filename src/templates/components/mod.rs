pub mod error;

pub use error::error_page;
