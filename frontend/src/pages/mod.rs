pub mod about;
pub mod booking;
pub mod home;
pub mod login;
pub mod menu;
pub mod order_online;

pub use about::AboutPage;
pub use booking::BookingPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use menu::MenuPage;
pub use order_online::OrderOnlinePage;
