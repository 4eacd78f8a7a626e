use yew::prelude::*;

use super::image_with_fallback::ImageWithFallback;

pub const MAX_RATING: u8 = 5;

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub rating: u8,
    pub review: &'static str,
    pub image: &'static str,
    pub fallback: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        rating: 5,
        review: "Amazing Mediterranean cuisine! The atmosphere is warm and inviting, and the staff is incredibly friendly.",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200&q=80",
        fallback: "👩",
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        rating: 5,
        review: "Best restaurant in Chicago! The Greek Salad is fresh and the pasta dishes are outstanding.",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&q=80",
        fallback: "👨",
    },
    Testimonial {
        id: 3,
        name: "Emily Rodriguez",
        rating: 4,
        review: "Great food and excellent service. The reservation process was smooth and easy.",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=200&q=80",
        fallback: "👩",
    },
    Testimonial {
        id: 4,
        name: "David Thompson",
        rating: 5,
        review: "Little Lemon has become our favorite spot. The specials are always creative and delicious!",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=200&q=80",
        fallback: "👨",
    },
];

/// Filled and empty stars for a 0-5 rating
pub fn render_stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_RATING as usize - filled))
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="testimonials-section" aria-labelledby="testimonials-heading">
            <div class="testimonials-container">
                <h2 id="testimonials-heading">{"What Our Customers Say"}</h2>
                <div class="testimonials-grid">
                    {for TESTIMONIALS.iter().map(|t| html! {
                        <article key={t.id} class="testimonial-card" aria-labelledby={format!("testimonial-{}", t.id)}>
                            <div class="testimonial-rating" aria-label={format!("{} out of {} stars", t.rating, MAX_RATING)}>
                                {render_stars(t.rating)}
                            </div>
                            <div class="testimonial-content">
                                <p class="testimonial-review">{format!("\"{}\"", t.review)}</p>
                            </div>
                            <div class="testimonial-author">
                                <div class="testimonial-image-wrapper" aria-hidden="true">
                                    <ImageWithFallback
                                        src={t.image}
                                        alt={format!("{} profile picture", t.name)}
                                        fallback={t.fallback}
                                        class="testimonial-image"
                                    />
                                </div>
                                <div class="testimonial-name" id={format!("testimonial-{}", t.id)}>{t.name}</div>
                            </div>
                        </article>
                    })}
                </div>
            </div>
        </section>
    }
}
