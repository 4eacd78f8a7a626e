pub mod use_booking_form;

pub use use_booking_form::use_booking_form;
