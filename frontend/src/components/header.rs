use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Main navigation entries, shared by the header and the footer
pub const NAV_ITEMS: [(Route, &str, &str); 6] = [
    (Route::Home, "Home", "Go to home page"),
    (Route::About, "About", "Go to about page"),
    (Route::Menu, "Menu", "Go to menu page"),
    (Route::Booking, "Reservations", "Go to reservations page"),
    (Route::OrderOnline, "Order online", "Go to order online page"),
    (Route::Login, "Login", "Go to login page"),
];

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header role="banner">
            <div class="logo">
                <Link<Route> to={Route::Home}>
                    <h1 aria-label="Little Lemon home">{"Little Lemon"}</h1>
                </Link<Route>>
            </div>
            <nav role="navigation" aria-label="Main navigation">
                <ul>
                    {for NAV_ITEMS.iter().map(|(route, label, aria)| html! {
                        <li>
                            <Link<Route> to={route.clone()}>
                                <span aria-label={*aria}>{*label}</span>
                            </Link<Route>>
                        </li>
                    })}
                </ul>
            </nav>
        </header>
    }
}
