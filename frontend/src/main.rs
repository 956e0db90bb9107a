use yew::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod navigation;
mod api;
mod forms {
    pub mod submission;
    pub mod booking;
    pub mod worker;
}
mod components {
    pub mod notification;
    pub mod field;
    pub mod hero;
    pub mod services_grid;
    pub mod why_choose_us;
    pub mod testimonials;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod booking;
    pub mod about;
    pub mod contact;
    pub mod worker_signup;
}

use components::{
    footer::Footer,
    notification::{Toaster, Toasts},
};
use navigation::{scroll_to_top, use_current_page, use_navigate, NavigationState, Page, NAV_ITEMS};
use pages::{
    about::About,
    booking::Booking,
    contact::Contact,
    home::Home,
    services::Services,
    worker_signup::WorkerSignup,
};


fn switch(page: Page) -> Html {
    match page {
        Page::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Page::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Page::Booking => {
            info!("Rendering Booking page");
            html! { <Booking /> }
        },
        Page::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Page::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Page::WorkerSignup => {
            info!("Rendering Worker Signup page");
            html! { <WorkerSignup /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let navigate = use_navigate();
    let current = use_current_page();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.clone().map(|window| {
                Closure::wrap(Box::new(move || {
                    let offset = window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(offset > 20.0);
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Every link closes the mobile menu on its way to the next page.
    let go = |page: Page| {
        let navigate = navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            navigate.emit(page);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={go(Page::Home)}>
                    <span class="nav-logo-mark">{"🛡"}</span>
                    {"Quick Safety Service"}
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|page| html! {
                        <a
                            href="#"
                            key={page.id()}
                            class={classes!("nav-link", (*page == current).then(|| "active"))}
                            onclick={go(*page)}
                        >
                            {page.label()}
                        </a>
                    }) }
                    <a
                        href="#"
                        class={classes!("nav-cta", (current == Page::WorkerSignup).then(|| "active"))}
                        onclick={go(Page::WorkerSignup)}
                    >
                        {Page::WorkerSignup.label()}
                    </a>
                </div>
            </div>
        </nav>
    }
}


#[function_component(GlobalStyles)]
fn global_styles() -> Html {
    html! {
        <style>
            {r#"
                * { margin: 0; padding: 0; box-sizing: border-box; }
                body {
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                    color: #1d3557;
                    background: #f8f9fa;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(12px);
                    transition: box-shadow 0.3s, background 0.3s;
                }
                .top-nav.scrolled { background: #ffffff; box-shadow: 0 4px 16px rgba(29, 53, 87, 0.1); }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 16px 24px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #1d3557;
                    text-decoration: none;
                }
                .nav-logo-mark {
                    width: 40px;
                    height: 40px;
                    border-radius: 12px;
                    background: linear-gradient(135deg, #1d3557 0%, #457b9d 100%);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .nav-right { display: flex; align-items: center; gap: 32px; }
                .nav-link {
                    position: relative;
                    color: #457b9d;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .nav-link:hover, .nav-link.active { color: #1d3557; }
                .nav-link.active::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: -6px;
                    height: 2px;
                    background: #a8dadc;
                }
                .nav-cta {
                    padding: 10px 20px;
                    border-radius: 10px;
                    background: #1d3557;
                    color: #ffffff;
                    text-decoration: none;
                    transition: transform 0.2s;
                }
                .nav-cta:hover, .nav-cta.active { transform: scale(1.05); }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span { width: 24px; height: 2px; background: #1d3557; }
                .page-enter { animation: page-enter 0.5s ease-out; }
                @keyframes page-enter {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .page-rise { animation: page-rise 0.6s ease-out both; }
                @keyframes page-rise {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .page-shell {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 128px 24px 96px;
                }
                .page-shell.narrow { max-width: 896px; }
                .page-heading { text-align: center; margin-bottom: 48px; }
                .page-heading h1 { font-size: 2.75rem; color: #1d3557; margin-bottom: 16px; }
                .page-heading p { font-size: 1.15rem; color: #457b9d; }
                .section-heading { text-align: center; margin-bottom: 64px; }
                .section-heading h2 { font-size: 2.25rem; color: #1d3557; margin-bottom: 16px; }
                .section-heading p { font-size: 1.15rem; color: #457b9d; }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 16px;
                        padding: 24px;
                        background: #ffffff;
                        box-shadow: 0 8px 16px rgba(29, 53, 87, 0.1);
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                    .page-heading h1 { font-size: 2rem; }
                }
            "#}
        </style>
    }
}


#[function_component]
fn App() -> Html {
    let navigation = use_reducer(NavigationState::default);
    let toasts = use_reducer(Toasts::default);

    // Each navigation starts the new page from the top.
    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        navigation.scroll_requests,
    );

    let page = navigation.current;

    html! {
        <ContextProvider<navigation::NavigationContext> context={navigation.clone()}>
            <ContextProvider<components::notification::ToastContext> context={toasts}>
                <GlobalStyles />
                <Nav />
                <main key={page.id()} class="page-enter">
                    { switch(page) }
                </main>
                <Toaster />
                <Footer />
            </ContextProvider<components::notification::ToastContext>>
        </ContextProvider<navigation::NavigationContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
