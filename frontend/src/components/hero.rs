use yew::prelude::*;

use crate::navigation::{use_navigate, Page};

#[function_component(Hero)]
pub fn hero() -> Html {
    let navigate = use_navigate();

    let to_booking = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Page::Booking))
    };
    let to_signup = Callback::from(move |_: MouseEvent| navigate.emit(Page::WorkerSignup));

    html! {
        <div class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        background: linear-gradient(135deg, #1d3557 0%, #457b9d 100%);
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-20px); }
                    }
                    .hero-float {
                        position: absolute;
                        opacity: 0.1;
                        color: #ffffff;
                        font-size: 8rem;
                        animation: float 4s ease-in-out infinite;
                        user-select: none;
                    }
                    .hero-float.one { top: 80px; left: 40px; }
                    .hero-float.two { top: 160px; right: 80px; animation-duration: 5s; font-size: 10rem; }
                    .hero-float.three { bottom: 128px; right: 160px; animation-duration: 4.5s; font-size: 7rem; }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 128px 32px;
                        width: 100%;
                    }
                    .hero-content h1 { color: #ffffff; max-width: 768px; margin-bottom: 24px; }
                    .hero-content p {
                        color: rgba(255, 255, 255, 0.9);
                        font-size: 1.25rem;
                        max-width: 672px;
                        margin-bottom: 40px;
                    }
                    .hero-actions { display: flex; gap: 16px; flex-wrap: wrap; }
                    .hero-primary, .hero-secondary {
                        padding: 16px 32px;
                        border-radius: 8px;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: transform 0.3s, box-shadow 0.3s, background 0.3s, color 0.3s;
                    }
                    .hero-primary { background: #ffffff; color: #1d3557; border: none; }
                    .hero-secondary { background: transparent; color: #ffffff; border: 2px solid #ffffff; }
                    .hero-primary:hover, .hero-secondary:hover {
                        transform: scale(1.05);
                        box-shadow: 0 12px 24px rgba(0, 0, 0, 0.2);
                    }
                    .hero-secondary:hover { background: #ffffff; color: #1d3557; }
                    .hero-wave { position: absolute; bottom: 0; left: 0; right: 0; line-height: 0; }
                "#}
            </style>
            <span class="hero-float one">{"🛡"}</span>
            <span class="hero-float two">{"🏠"}</span>
            <span class="hero-float three">{"🔧"}</span>
            <div class="hero-content page-rise">
                <h1>{"Trusted Home & Safety Services, Anytime."}</h1>
                <p>
                    {"Professional Guards, Bouncers, Servants, AC Technicians, Electricians and PSOs, available on demand."}
                </p>
                <div class="hero-actions">
                    <button class="hero-primary" onclick={to_booking}>{"Book Service"}</button>
                    <button class="hero-secondary" onclick={to_signup}>{"Join as Worker"}</button>
                </div>
            </div>
            <div class="hero-wave">
                <svg viewBox="0 0 1440 120" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path
                        d="M0 120L60 110C120 100 240 80 360 70C480 60 600 60 720 65C840 70 960 80 1080 85C1200 90 1320 90 1380 90L1440 90V120H0Z"
                        fill="#ffffff"
                    />
                </svg>
            </div>
        </div>
    }
}
