use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::Reveal;
use crate::content::company::{Testimonial, TESTIMONIALS};
use crate::gallery::WrapCursor;

/// Cards visible at once.
const VISIBLE_CARDS: usize = 3;

/// The testimonials shown with the carousel at `start`.
fn visible_testimonials(testimonials: &[Testimonial], start: usize) -> Vec<&Testimonial> {
    match WrapCursor::new(start, testimonials.len()) {
        Some(cursor) => cursor
            .window(VISIBLE_CARDS)
            .map(|i| &testimonials[i])
            .collect(),
        None => Vec::new(),
    }
}

/// Cursor for an indicator dot. Out-of-range dots keep the current position.
fn jump_to(current: Option<WrapCursor>, index: usize, len: usize) -> Option<WrapCursor> {
    WrapCursor::new(index, len).or(current)
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let cursor = use_state(|| WrapCursor::new(0, TESTIMONIALS.len()));

    let step = |forward: bool| {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(current) = *cursor {
                cursor.set(Some(if forward { current.next() } else { current.prev() }));
            }
        })
    };
    let on_prev = step(false);
    let on_next = step(true);
    let jump = |index: usize| {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| {
            cursor.set(jump_to(*cursor, index, TESTIMONIALS.len()));
        })
    };

    let start = cursor.map(|c| c.index()).unwrap_or(0);

    let testimonials_css = r#"
        .testimonials {
            padding: 5rem 1.5rem;
            background: #fff;
        }
        .testimonials h2 {
            text-align: center;
            font-size: 2.25rem;
            margin-bottom: 2.5rem;
        }
        .testimonial-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
            gap: 1.5rem;
            max-width: 1200px;
            margin: 0 auto;
        }
        .testimonial-card {
            background: #f8f7fc;
            border-radius: 1rem;
            padding: 1.75rem;
            box-shadow: 0 8px 24px rgba(46, 23, 122, 0.08);
        }
        .testimonial-card header {
            display: flex;
            align-items: center;
            gap: 1rem;
            margin-bottom: 1rem;
        }
        .testimonial-card img {
            width: 56px;
            height: 56px;
            border-radius: 50%;
            object-fit: cover;
        }
        .testimonial-stars {
            color: #f5b301;
        }
        .testimonial-nav {
            display: flex;
            justify-content: center;
            gap: 1rem;
            margin-top: 2rem;
        }
        .testimonial-dots {
            display: flex;
            justify-content: center;
            gap: 0.5rem;
            margin-top: 1rem;
        }
        .testimonial-dots button {
            width: 10px;
            height: 10px;
            padding: 0;
            border: none;
            border-radius: 50%;
            background: #d4d0e8;
            cursor: pointer;
        }
        .testimonial-dots button.active {
            background: #2E177A;
        }
        .testimonial-nav button {
            width: 44px;
            height: 44px;
            border-radius: 50%;
            border: 1px solid #2E177A;
            background: #fff;
            color: #2E177A;
            cursor: pointer;
        }
    "#;

    html! {
        <section class="testimonials">
            <style>{testimonials_css}</style>
            <Reveal>
                <h2>{"What Our "}<span class="text-gradient">{"Clients Say"}</span></h2>
            </Reveal>
            <div class="testimonial-grid">
                {
                    visible_testimonials(TESTIMONIALS, start).into_iter().map(|t| html! {
                        <article class="testimonial-card" key={t.name}>
                            <header>
                                <img src={t.image} alt={t.name} loading="lazy" />
                                <div>
                                    <h3>{t.name}</h3>
                                    <p>{t.company}</p>
                                </div>
                            </header>
                            <div class="testimonial-stars">
                                { for (0..t.rating).map(|_| html! { <IconView icon={Icon::Star} /> }) }
                            </div>
                            <p>{format!("\u{201c}{}\u{201d}", t.text)}</p>
                        </article>
                    }).collect::<Html>()
                }
            </div>
            <div class="testimonial-nav">
                <button onclick={on_prev} aria-label="Previous testimonials">
                    <IconView icon={Icon::ChevronLeft} />
                </button>
                <button onclick={on_next} aria-label="Next testimonials">
                    <IconView icon={Icon::ChevronRight} />
                </button>
            </div>
            <div class="testimonial-dots">
                {
                    (0..TESTIMONIALS.len()).map(|i| html! {
                        <button
                            class={classes!((i == start).then_some("active"))}
                            onclick={jump(i)}
                            aria-label={format!("Show testimonial {}", i + 1)}
                        />
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&Testimonial]) -> Vec<&'static str> {
        list.iter().map(|t| t.name).collect()
    }

    #[test]
    fn shows_three_from_the_cursor() {
        let shown = visible_testimonials(TESTIMONIALS, 0);
        assert_eq!(names(&shown), vec!["Amit Sharma", "Priya Iyer", "Rajeev Menon"]);
    }

    #[test]
    fn window_wraps_past_the_last_testimonial() {
        let shown = visible_testimonials(TESTIMONIALS, 4);
        assert_eq!(names(&shown), vec!["Ankur Joshi", "Amit Sharma", "Priya Iyer"]);
    }

    #[test]
    fn dots_jump_the_window_to_their_testimonial() {
        let current = WrapCursor::new(0, TESTIMONIALS.len());
        let jumped = jump_to(current, 3, TESTIMONIALS.len());
        assert_eq!(jumped.map(|c| c.index()), Some(3));

        let shown = visible_testimonials(TESTIMONIALS, 3);
        assert_eq!(names(&shown), vec!["Nikita Desai", "Ankur Joshi", "Amit Sharma"]);

        let stayed = jump_to(jumped, TESTIMONIALS.len(), TESTIMONIALS.len());
        assert_eq!(stayed, jumped);
    }

    #[test]
    fn short_lists_show_each_testimonial_once() {
        let shown = visible_testimonials(&TESTIMONIALS[..2], 1);
        assert_eq!(names(&shown), vec!["Priya Iyer", "Amit Sharma"]);
        assert!(visible_testimonials(&[], 0).is_empty());
    }
}
