use yew::prelude::*;

use crate::components::{
    hero::Hero,
    services_grid::ServicesGrid,
    testimonials::Testimonials,
    why_choose_us::WhyChooseUs,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <Hero />
            <ServicesGrid />
            <WhyChooseUs />
            <Testimonials />
        </div>
    }
}
