use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;
#[cfg(test)]
mod test_support;

use components::{Footer, Header};
use pages::{AboutPage, BookingPage, HomePage, LoginPage, MenuPage, OrderOnlinePage};
use services::api::BookingServices;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/menu")]
    Menu,
    #[at("/booking")]
    Booking,
    #[at("/order-online")]
    OrderOnline,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::NotFound => html! { <HomePage /> },
        Route::About => html! { <AboutPage /> },
        Route::Menu => html! { <MenuPage /> },
        Route::Booking => html! { <BookingPage /> },
        Route::OrderOnline => html! { <OrderOnlinePage /> },
        Route::Login => html! { <LoginPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| BookingServices::from_window());

    html! {
        <ContextProvider<BookingServices> context={(*services).clone()}>
            <BrowserRouter>
                <div class="app">
                    <Header />
                    <main id="main-content">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
            </BrowserRouter>
        </ContextProvider<BookingServices>>
    }
}

fn main() {
    services::logging::init();
    log::info!(target: "app", "starting Little Lemon");
    yew::Renderer::<App>::new().render();
}
