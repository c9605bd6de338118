pub mod confirmation;
pub mod hotels;

pub use confirmation::{confirmation_page, ConfirmationVm};
pub use hotels::{hotels_page, HotelsVm};
