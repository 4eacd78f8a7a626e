use yew::prelude::*;
use yew_router::prelude::*;

use super::image_with_fallback::ImageWithFallback;
use crate::Route;

#[derive(Clone, PartialEq)]
pub struct MenuItem {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub image: &'static str,
    pub fallback: &'static str,
}

/// This week's specials
pub const SPECIALS: [MenuItem; 4] = [
    MenuItem {
        id: 1,
        name: "Greek Salad",
        description: "Fresh tomatoes, cucumbers, olives, and feta cheese with our house dressing",
        price: "$12.99",
        image: "/images/tomato-salad.jpg",
        fallback: "🥗",
    },
    MenuItem {
        id: 2,
        name: "Bruschetta",
        description: "Toasted bread topped with fresh tomatoes, basil, and garlic",
        price: "$8.99",
        image: "/images/bruschetta.jpg",
        fallback: "🍞",
    },
    MenuItem {
        id: 3,
        name: "Grilled Fish",
        description: "Seasonal catch grilled to perfection with lemon and herbs",
        price: "$24.99",
        image: "/images/grilled-fish.jpg",
        fallback: "🐟",
    },
    MenuItem {
        id: 4,
        name: "Lemon Dessert",
        description: "Zesty lemon tart with a buttery crust and fresh whipped cream",
        price: "$16.99",
        image: "/images/lemon-dessert.jpg",
        fallback: "🍋",
    },
];

#[function_component(Menu)]
pub fn menu() -> Html {
    html! {
        <section id="menu" class="menu-section" aria-labelledby="menu-heading">
            <div class="menu-container">
                <div class="menu-header">
                    <h2 id="menu-heading">{"This Week's Specials"}</h2>
                    <Link<Route> to={Route::OrderOnline} classes="order-online-button">
                        {"Order Online"}
                    </Link<Route>>
                </div>
                <div class="menu-grid">
                    {for SPECIALS.iter().map(|item| {
                        let heading_id = format!("menu-item-{}", item.id);
                        html! {
                            <article key={item.id} class="menu-item" aria-labelledby={heading_id.clone()}>
                                <div class="menu-item-image" aria-hidden="true">
                                    <ImageWithFallback
                                        src={item.image}
                                        alt={item.name}
                                        fallback={item.fallback}
                                        class="menu-image"
                                    />
                                </div>
                                <div class="menu-item-content">
                                    <h3 id={heading_id}>{item.name}</h3>
                                    <p class="menu-description">{item.description}</p>
                                    <p class="menu-price" aria-label={format!("Price: {}", item.price)}>{item.price}</p>
                                </div>
                            </article>
                        }
                    })}
                </div>
            </div>
        </section>
    }
}
