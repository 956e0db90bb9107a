use yew::prelude::*;

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "✔",
        "Verified Workers",
        "All our service providers are thoroughly verified with background checks and certifications.",
    ),
    (
        "⏱",
        "Quick Booking",
        "Book services in minutes with our easy-to-use platform. Get instant confirmations.",
    ),
    (
        "₹",
        "Affordable Pricing",
        "Transparent pricing with no hidden charges. Quality service at competitive rates.",
    ),
    (
        "☎",
        "24/7 Support",
        "Round-the-clock customer support to assist you whenever you need help.",
    ),
];

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    html! {
        <section class="why-us">
            <style>
                {r#"
                    .why-us { padding: 96px 24px; background: #f8f9fa; }
                    .why-grid {
                        max-width: 1024px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                        gap: 32px;
                    }
                    .why-item { display: flex; gap: 20px; align-items: flex-start; }
                    .why-icon {
                        flex-shrink: 0;
                        width: 56px;
                        height: 56px;
                        border-radius: 12px;
                        background: #a8dadc;
                        color: #1d3557;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                    }
                    .why-item h3 { color: #1d3557; margin-bottom: 8px; }
                    .why-item p { color: #457b9d; }
                    @media (max-width: 768px) {
                        .why-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="section-heading">
                <h2>{"Why Choose Us"}</h2>
                <p>{"We're committed to providing the best service experience with trust and reliability at our core"}</p>
            </div>
            <div class="why-grid">
                { for FEATURES.iter().map(|(icon, title, description)| html! {
                    <div class="why-item">
                        <div class="why-icon">{*icon}</div>
                        <div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}
