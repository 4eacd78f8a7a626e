pub mod booking;
pub mod chicago;
pub mod footer;
pub mod header;
pub mod hero;
pub mod image_with_fallback;
pub mod menu;
pub mod testimonials;

pub use chicago::Chicago;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use image_with_fallback::ImageWithFallback;
pub use menu::Menu;
pub use testimonials::Testimonials;
