use chrono::Datelike;
use yew::prelude::*;

use crate::navigation::{use_navigate, NAV_ITEMS};

const FOOTER_SERVICES: [&str; 6] = [
    "Security Guard",
    "Bouncer",
    "Servant / Aaya",
    "AC Repair",
    "Electrician",
    "PSO",
];

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Facebook", "f"),
    ("Twitter", "t"),
    ("Instagram", "i"),
    ("LinkedIn", "in"),
];

pub fn copyright_line(year: i32) -> String {
    format!("© {} Quick Safety Service. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let navigate = use_navigate();
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer { background: #1d3557; color: #ffffff; }
                    .footer-inner { max-width: 1280px; margin: 0 auto; padding: 64px 32px; }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(4, minmax(0, 1fr));
                        gap: 48px;
                        margin-bottom: 48px;
                    }
                    .footer-brand { display: flex; align-items: center; gap: 12px; margin-bottom: 16px; font-weight: bold; font-size: 1.25rem; }
                    .site-footer p, .site-footer li { color: rgba(255, 255, 255, 0.8); }
                    .site-footer h4 { margin-bottom: 16px; }
                    .site-footer ul { list-style: none; padding: 0; margin: 0; display: grid; gap: 12px; }
                    .footer-link {
                        background: none;
                        border: none;
                        padding: 0;
                        color: rgba(255, 255, 255, 0.8);
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    .footer-link:hover { color: #ffffff; }
                    .footer-social { display: flex; gap: 12px; }
                    .footer-social a {
                        width: 36px;
                        height: 36px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #ffffff;
                        text-decoration: none;
                        transition: background 0.3s;
                    }
                    .footer-social a:hover { background: rgba(255, 255, 255, 0.1); }
                    .footer-bottom {
                        padding-top: 32px;
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        text-align: center;
                    }
                    @media (max-width: 1024px) { .footer-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); } }
                    @media (max-width: 640px) { .footer-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <span>{"🛡"}</span>
                            <span>{"Quick Safety Service"}</span>
                        </div>
                        <p>{"Your trusted partner for professional home and safety services. Available 24/7 for your peace of mind."}</p>
                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|(name, short)| html! {
                                <a href="#" aria-label={*name}>{*short}</a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            { for NAV_ITEMS.iter().map(|page| {
                                let page = *page;
                                let navigate = navigate.clone();
                                let onclick = Callback::from(move |_: MouseEvent| navigate.emit(page));
                                html! {
                                    <li><button class="footer-link" {onclick}>{page.label()}</button></li>
                                }
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Our Services"}</h4>
                        <ul>
                            { for FOOTER_SERVICES.iter().map(|service| html! { <li>{*service}</li> }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Contact Us"}</h4>
                        <ul>
                            <li>{"+91 9555731070"}<br/>{"+91 7701828545"}</li>
                            <li>{"niraj7379@gmail.com"}</li>
                            <li>{"F-137, Deepawali enclave, Ismailpur, Faridabad, Haryana"}</li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{copyright_line(year)}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(copyright_line(2026), "© 2026 Quick Safety Service. All rights reserved.");
    }
}
