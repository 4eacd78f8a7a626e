use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use super::header::NAV_ITEMS;
use crate::Route;

const SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("#facebook", "Facebook", "Visit our Facebook page"),
    ("#instagram", "Instagram", "Visit our Instagram page"),
    ("#twitter", "Twitter", "Visit our Twitter page"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Local::now().year();

    html! {
        <footer role="contentinfo">
            <div class="footer-container">
                <div class="footer-section">
                    <div class="footer-logo">
                        <h3>{"Little Lemon"}</h3>
                    </div>
                    <p>{"Authentic Mediterranean cuisine in the heart of Chicago"}</p>
                </div>

                <div class="footer-section">
                    <h4>{"Navigation"}</h4>
                    <nav aria-label="Footer navigation">
                        <ul class="footer-nav">
                            {for NAV_ITEMS.iter().map(|(route, label, _)| html! {
                                <li><Link<Route> to={route.clone()}>{*label}</Link<Route>></li>
                            })}
                        </ul>
                    </nav>
                </div>

                <div class="footer-section">
                    <h4>{"Contact"}</h4>
                    <address>
                        <p>{"123 Main Street"}</p>
                        <p>{"Chicago, IL 60601"}</p>
                        <p>
                            <a href="tel:+15551234567" aria-label="Call us at 555-123-4567">{"(555) 123-4567"}</a>
                        </p>
                        <p>
                            <a href="mailto:info@littlelemon.com" aria-label="Email us at info@littlelemon.com">
                                {"info@littlelemon.com"}
                            </a>
                        </p>
                    </address>
                </div>

                <div class="footer-section">
                    <h4>{"Follow Us"}</h4>
                    <nav aria-label="Social media links">
                        <ul class="social-links">
                            {for SOCIAL_LINKS.iter().map(|(href, label, aria)| html! {
                                <li><a href={*href} aria-label={*aria}>{*label}</a></li>
                            })}
                        </ul>
                    </nav>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} Little Lemon. All rights reserved.", current_year)}</p>
            </div>
        </footer>
    }
}
