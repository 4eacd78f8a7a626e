use yew::prelude::*;

/// Account sign-in is not offered yet
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! {
        <section class="login-page" aria-labelledby="login-title">
            <h1 id="login-title">{"Login"}</h1>
            <p>{"Customer accounts are not available yet."}</p>
        </section>
    }
}
