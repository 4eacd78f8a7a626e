use yew::prelude::*;

use crate::components::{Chicago, Hero, Menu, Testimonials};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <Hero />
            <Menu />
            <Testimonials />
            <Chicago />
        </>
    }
}
