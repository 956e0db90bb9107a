use yew::prelude::*;

use crate::navigation::{use_navigate, Page};

struct ServiceCard {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: [ServiceCard; 6] = [
    ServiceCard {
        icon: "🛡",
        title: "Security Guard",
        description: "Professional security guards for your home, office, or event. Trained and verified.",
    },
    ServiceCard {
        icon: "👥",
        title: "Bouncer",
        description: "Experienced bouncers for events, parties, and venues. Ensuring safety and order.",
    },
    ServiceCard {
        icon: "🏠",
        title: "Servant / Aaya",
        description: "Reliable domestic help for cleaning, cooking, and household management.",
    },
    ServiceCard {
        icon: "❄",
        title: "AC Repair & Installation",
        description: "Expert AC technicians for repair, maintenance, and installation services.",
    },
    ServiceCard {
        icon: "⚡",
        title: "Electrician",
        description: "Licensed electricians for all electrical work, repairs, and installations.",
    },
    ServiceCard {
        icon: "✔",
        title: "PSO (Personal Security Officer)",
        description: "Elite personal security officers for VIP protection and personal safety.",
    },
];

#[derive(Properties, PartialEq)]
pub struct ServicesGridProps {
    #[prop_or(false)]
    pub full_page: bool,
}

#[function_component(ServicesGrid)]
pub fn services_grid(props: &ServicesGridProps) -> Html {
    let navigate = use_navigate();
    let hovered = use_state(|| None::<usize>);

    let section_class = classes!("services", props.full_page.then(|| "services-full"));

    html! {
        <section class={section_class}>
            <style>
                {r#"
                    .services { padding: 96px 24px; background: #ffffff; }
                    .services-full { padding-top: 144px; min-height: 100vh; background: #f8f9fa; }
                    .services-grid {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                        gap: 32px;
                    }
                    .service-card {
                        background: #ffffff;
                        border-radius: 16px;
                        padding: 32px;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .service-card.hovered {
                        transform: translateY(-8px);
                        box-shadow: 0 20px 40px rgba(29, 53, 87, 0.15);
                    }
                    .service-icon {
                        font-size: 2.5rem;
                        margin-bottom: 24px;
                        transition: transform 0.3s;
                        display: inline-block;
                    }
                    .service-card.hovered .service-icon { transform: scale(1.1); }
                    .service-card h3 { color: #1d3557; margin-bottom: 12px; }
                    .service-card p { color: #457b9d; margin-bottom: 24px; }
                    .service-book {
                        width: 100%;
                        padding: 12px;
                        border: none;
                        border-radius: 8px;
                        background: #a8dadc;
                        color: #1d3557;
                        cursor: pointer;
                        transition: background 0.3s, color 0.3s;
                    }
                    .service-card.hovered .service-book { background: #1d3557; color: #ffffff; }
                    @media (max-width: 1024px) {
                        .services-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
                    }
                    @media (max-width: 640px) {
                        .services-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="section-heading">
                <h2>{"Our Services"}</h2>
                <p>{"Choose from our wide range of professional services tailored to meet your needs"}</p>
            </div>
            <div class="services-grid">
                { for SERVICES.iter().enumerate().map(|(index, service)| {
                    let onmouseenter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                    };
                    let onmouseleave = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(None))
                    };
                    let book = {
                        let navigate = navigate.clone();
                        Callback::from(move |_: MouseEvent| navigate.emit(Page::Booking))
                    };
                    let is_hovered = *hovered == Some(index);
                    html! {
                        <div
                            key={index}
                            class={classes!("service-card", is_hovered.then(|| "hovered"))}
                            {onmouseenter}
                            {onmouseleave}
                        >
                            <span class="service-icon">{service.icon}</span>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <button class="service-book" onclick={book}>{"Book Now"}</button>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
