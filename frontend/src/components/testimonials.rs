use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::TESTIMONIAL_INTERVAL_MS;

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Homeowner",
        rating: 5,
        text: "Quick Safety Service provided an excellent security guard for our neighborhood event. Professional, punctual, and very reliable!",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&h=400&fit=crop",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Business Owner",
        rating: 5,
        text: "Their AC technician fixed our commercial unit in no time. Great service and very affordable pricing. Highly recommended!",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop",
    },
    Testimonial {
        name: "Priya Sharma",
        role: "Event Manager",
        rating: 5,
        text: "Booked bouncers for our corporate event. They were professional and handled crowd management perfectly. Will use again!",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400&h=400&fit=crop",
    },
    Testimonial {
        name: "David Martinez",
        role: "Homeowner",
        rating: 5,
        text: "The electrician they sent was knowledgeable and efficient. Fixed all our electrical issues quickly. Excellent service!",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    Forward,
    Backward,
}

/// Index into a fixed-size ring of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    pub index: usize,
    pub len: usize,
    pub direction: SlideDirection,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len, direction: SlideDirection::Forward }
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + 1) % self.len, direction: SlideDirection::Forward, ..self }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            direction: SlideDirection::Backward,
            ..self
        }
    }

    pub fn select(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        let direction = if index > self.index {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        };
        Self { index, direction, ..self }
    }
}

pub enum CarouselAction {
    Next,
    Prev,
    Select(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Prev => self.prev(),
            CarouselAction::Select(index) => self.select(index),
        })
    }
}

fn rating_stars(rating: u8) -> String {
    "★".repeat(usize::from(rating.min(5)))
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len()));

    // Torn down with the component.
    {
        let carousel = carousel.clone();
        use_interval(
            move || carousel.dispatch(CarouselAction::Next),
            TESTIMONIAL_INTERVAL_MS,
        );
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    let active_index = carousel.index;
    let current = &TESTIMONIALS[active_index];
    let stars = rating_stars(current.rating);
    let slide_class = match carousel.direction {
        SlideDirection::Forward => "testimonial-card slide-forward",
        SlideDirection::Backward => "testimonial-card slide-backward",
    };

    html! {
        <section class="testimonials">
            <style>
                {r#"
                    .testimonials { padding: 96px 24px; background: #ffffff; }
                    .testimonials-inner { max-width: 896px; margin: 0 auto; position: relative; }
                    @keyframes slideForward {
                        from { transform: translateX(120px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes slideBackward {
                        from { transform: translateX(-120px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    .testimonial-card {
                        display: flex;
                        gap: 32px;
                        align-items: center;
                        padding: 48px;
                        border-radius: 16px;
                        border: 1px solid #e5e5e5;
                        box-shadow: 0 20px 40px rgba(29, 53, 87, 0.1);
                        min-height: 220px;
                    }
                    .slide-forward { animation: slideForward 0.45s ease-out; }
                    .slide-backward { animation: slideBackward 0.45s ease-out; }
                    .testimonial-card img {
                        width: 96px;
                        height: 96px;
                        border-radius: 50%;
                        object-fit: cover;
                        flex-shrink: 0;
                    }
                    .stars { color: #ffc107; margin-bottom: 16px; letter-spacing: 4px; }
                    .testimonial-text { font-size: 1.125rem; color: #1d3557; margin-bottom: 16px; }
                    .testimonial-role { color: #457b9d; }
                    .carousel-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        background: #ffffff;
                        border: none;
                        border-radius: 50%;
                        width: 48px;
                        height: 48px;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
                        color: #1d3557;
                        cursor: pointer;
                        font-size: 1.25rem;
                    }
                    .carousel-arrow.prev { left: -64px; }
                    .carousel-arrow.next { right: -64px; }
                    .carousel-dots { display: flex; justify-content: center; gap: 8px; margin-top: 32px; }
                    .carousel-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        border: none;
                        padding: 0;
                        background: #a8dadc;
                        cursor: pointer;
                        transition: transform 0.3s;
                    }
                    .carousel-dot.active { background: #1d3557; transform: scale(1.5); }
                    @media (max-width: 768px) {
                        .testimonial-card { flex-direction: column; text-align: center; padding: 32px; }
                        .carousel-arrow.prev { left: -12px; }
                        .carousel-arrow.next { right: -12px; }
                    }
                "#}
            </style>
            <div class="section-heading">
                <h2>{"What Our Clients Say"}</h2>
                <p>{"Don't just take our word for it - hear from our satisfied customers"}</p>
            </div>
            <div class="testimonials-inner">
                <div key={active_index} class={slide_class}>
                    <img src={current.image} alt={current.name} />
                    <div>
                        <div class="stars">{stars}</div>
                        <p class="testimonial-text">{format!("\"{}\"", current.text)}</p>
                        <h4>{current.name}</h4>
                        <p class="testimonial-role">{current.role}</p>
                    </div>
                </div>
                <button class="carousel-arrow prev" onclick={on_prev} aria-label="Previous testimonial">{"‹"}</button>
                <button class="carousel-arrow next" onclick={on_next} aria-label="Next testimonial">{"›"}</button>
                <div class="carousel-dots">
                    { for (0..TESTIMONIALS.len()).map(|index| {
                        let carousel = carousel.clone();
                        let onclick = Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Select(index)));
                        html! {
                            <button
                                key={index}
                                class={classes!("carousel-dot", (index == active_index).then(|| "active"))}
                                {onclick}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_renders_one_star_per_point() {
        assert_eq!(rating_stars(5), "★★★★★");
        assert_eq!(rating_stars(0), "");
        assert_eq!(rating_stars(9).chars().count(), 5);
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let carousel = Carousel::new(4).prev();
        assert_eq!(carousel.index, 3);
        assert_eq!(carousel.direction, SlideDirection::Backward);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let carousel = Carousel::new(4).select(3).next();
        assert_eq!(carousel.index, 0);
        assert_eq!(carousel.direction, SlideDirection::Forward);
    }

    #[test]
    fn auto_advance_moves_exactly_one_step() {
        let carousel = Rc::new(Carousel::new(TESTIMONIALS.len()));
        let advanced = carousel.reduce(CarouselAction::Next);
        assert_eq!(advanced.index, 1);
    }

    #[test]
    fn dot_selection_sets_direction_from_target() {
        let carousel = Carousel::new(4).select(2);
        assert_eq!((carousel.index, carousel.direction), (2, SlideDirection::Forward));
        let carousel = carousel.select(1);
        assert_eq!((carousel.index, carousel.direction), (1, SlideDirection::Backward));
        assert_eq!(carousel.select(9), carousel);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let carousel = Carousel::new(0);
        assert_eq!(carousel.next(), carousel);
        assert_eq!(carousel.prev(), carousel);
    }
}
