use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(OrderOnlinePage)]
pub fn order_online_page() -> Html {
    html! {
        <section class="order-online-page" aria-labelledby="order-online-title">
            <h1 id="order-online-title">{"Order Online"}</h1>
            <p>{"Online ordering is coming soon. In the meantime, reserve a table and enjoy our specials in person."}</p>
            <Link<Route> to={Route::Booking} classes="cta-button">{"Reserve a Table"}</Link<Route>>
        </section>
    }
}
