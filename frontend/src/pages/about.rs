use yew::prelude::*;

use crate::components::Chicago;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="about-page">
            <Chicago />
        </div>
    }
}
