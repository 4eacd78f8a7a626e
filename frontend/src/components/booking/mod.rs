pub mod booking_form;
pub mod confirmation;
pub mod date_picker;
pub mod guest_counter;
pub mod occasion_radio_group;
pub mod time_slot_grid;

pub use booking_form::BookingFormView;
pub use confirmation::ConfirmationView;
