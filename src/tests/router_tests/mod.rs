mod booking_tests;
mod hotels_tests;
