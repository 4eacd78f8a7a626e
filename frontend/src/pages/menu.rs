use yew::prelude::*;

use crate::components::Menu;

#[function_component(MenuPage)]
pub fn menu_page() -> Html {
    html! {
        <div class="menu-page">
            <Menu />
        </div>
    }
}
