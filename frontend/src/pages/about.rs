use yew::prelude::*;

const STATS: [(&str, &str); 4] = [
    ("10,000+", "Happy Clients"),
    ("500+", "Verified Workers"),
    ("50,000+", "Services Completed"),
    ("4.9/5", "Average Rating"),
];

const VALUES: [(&str, &str, &str); 3] = [
    (
        "🎯",
        "Our Mission",
        "To provide reliable, professional, and affordable home and safety services to every household, ensuring peace of mind and quality of life.",
    ),
    (
        "👁",
        "Our Vision",
        "To become the most trusted and preferred service platform, connecting skilled professionals with those who need them most.",
    ),
    (
        "🏅",
        "Quality Assurance",
        "Every worker undergoes rigorous verification, background checks, and skill assessments to ensure the highest standards of service.",
    ),
];

const STRENGTHS: [(&str, &str, &str); 3] = [
    (
        "👥",
        "Expert Team",
        "Our team consists of experienced professionals dedicated to your safety and satisfaction.",
    ),
    (
        "📈",
        "Growing Network",
        "Continuously expanding our network of verified professionals to serve you better.",
    ),
    (
        "❤",
        "Customer First",
        "Your satisfaction and safety are at the heart of everything we do.",
    ),
];

fn icon_card(icon: &str, title: &str, description: &str) -> Html {
    html! {
        <div class="about-card">
            <div class="about-icon">{icon.to_string()}</div>
            <h3>{title.to_string()}</h3>
            <p>{description.to_string()}</p>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <style>
                {r#"
                    .about-hero {
                        padding: 160px 24px 96px;
                        text-align: center;
                        color: #ffffff;
                        background: linear-gradient(135deg, #1d3557 0%, #457b9d 100%);
                    }
                    .about-hero p { max-width: 768px; margin: 24px auto 0; font-size: 1.25rem; color: rgba(255, 255, 255, 0.9); }
                    .about-stats {
                        max-width: 1280px;
                        margin: -48px auto 0;
                        padding: 0 24px;
                        display: grid;
                        grid-template-columns: repeat(4, minmax(0, 1fr));
                        gap: 24px;
                    }
                    .about-stat {
                        background: #ffffff;
                        border-radius: 16px;
                        padding: 32px;
                        text-align: center;
                        box-shadow: 0 12px 24px rgba(29, 53, 87, 0.1);
                    }
                    .about-stat h2 { color: #1d3557; margin-bottom: 8px; }
                    .about-stat p { color: #457b9d; }
                    .about-story {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 96px 24px;
                        display: grid;
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                        gap: 48px;
                        align-items: center;
                    }
                    .about-story h2 { color: #1d3557; margin-bottom: 24px; }
                    .about-story p { color: #457b9d; margin-bottom: 16px; line-height: 1.7; }
                    .about-story img { width: 100%; border-radius: 16px; box-shadow: 0 20px 40px rgba(29, 53, 87, 0.15); }
                    .about-section { padding: 96px 24px; }
                    .about-section.alt { background: #f8f9fa; }
                    .about-cards {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                        gap: 32px;
                    }
                    .about-card {
                        background: #ffffff;
                        border-radius: 16px;
                        padding: 32px;
                        text-align: center;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                    }
                    .about-icon { font-size: 2.5rem; margin-bottom: 16px; }
                    .about-card h3 { color: #1d3557; margin-bottom: 12px; }
                    .about-card p { color: #457b9d; }
                    @media (max-width: 1024px) {
                        .about-stats { grid-template-columns: repeat(2, minmax(0, 1fr)); }
                        .about-story, .about-cards { grid-template-columns: 1fr; }
                    }
                "#}
            </style>

            <section class="about-hero">
                <h1 class="page-rise">{"About Quick Safety Service"}</h1>
                <p>{"We're more than just a service platform. We're your partners in creating safer, more comfortable living and working spaces."}</p>
            </section>

            <section class="about-stats">
                { for STATS.iter().map(|(number, label)| html! {
                    <div class="about-stat">
                        <h2>{*number}</h2>
                        <p>{*label}</p>
                    </div>
                }) }
            </section>

            <section class="about-story">
                <div>
                    <h2>{"Our Story"}</h2>
                    <p>{"Quick Safety Service was born from a simple observation: finding reliable, trustworthy professionals for home and safety services was unnecessarily complicated and time-consuming."}</p>
                    <p>{"Founded in 2020, we set out to change this by creating a platform that connects verified, skilled professionals with customers who need them. Our rigorous vetting process ensures that every worker meets our high standards."}</p>
                    <p>{"Today, we're proud to serve thousands of satisfied customers and provide employment opportunities to hundreds of skilled workers. Our commitment to quality, safety, and customer satisfaction remains at the core of everything we do."}</p>
                </div>
                <img
                    src="https://images.unsplash.com/photo-1521737711867-e3b97375f902?w=800&h=600&fit=crop"
                    alt="Team working together"
                />
            </section>

            <section class="about-section alt">
                <div class="section-heading">
                    <h2>{"Our Values"}</h2>
                    <p>{"The principles that guide everything we do"}</p>
                </div>
                <div class="about-cards">
                    { for VALUES.iter().map(|(icon, title, description)| icon_card(icon, title, description)) }
                </div>
            </section>

            <section class="about-section">
                <div class="section-heading">
                    <h2>{"Why Work With Us"}</h2>
                    <p>{"We're committed to excellence in every aspect of our service"}</p>
                </div>
                <div class="about-cards">
                    { for STRENGTHS.iter().map(|(icon, title, description)| icon_card(icon, title, description)) }
                </div>
            </section>
        </div>
    }
}
