use yew::prelude::*;
use yew_router::prelude::*;

use super::image_with_fallback::ImageWithFallback;
use crate::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero" aria-labelledby="hero-heading">
            <div class="hero-image-wrapper">
                <ImageWithFallback
                    src="https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=1920&q=80"
                    alt="Little Lemon restaurant interior with warm Mediterranean ambiance"
                    fallback="🍋"
                    class="hero-background-image"
                />
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <h1 id="hero-heading">{"Little Lemon"}</h1>
                <p class="hero-subtitle">{"Chicago's Premier Mediterranean Dining Experience"}</p>
                <p class="hero-description">
                    {"Experience authentic Mediterranean cuisine crafted with the finest ingredients \
                      and traditional recipes passed down through generations."}
                </p>
                <Link<Route> to={Route::Booking} classes="cta-button">{"Reserve a Table"}</Link<Route>>
            </div>
        </section>
    }
}
