use yew::prelude::*;

use crate::components::services_grid::ServicesGrid;

#[function_component(Services)]
pub fn services() -> Html {
    html! { <ServicesGrid full_page=true /> }
}
