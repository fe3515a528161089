use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, UrlSearchParams};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::Reveal;
use crate::gallery::render::kind_label;
use crate::gallery::{Catalog, CategoryId, GalleryViewState, MediaView, ViewMode};

pub enum GalleryAction {
    Select(CategoryId),
    /// Category key taken from the page URL.
    SelectKey(String),
    Open(usize),
    Close,
    Next,
    Prev,
}

impl Reducible for GalleryViewState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            GalleryAction::Select(id) => next.select_category(id),
            GalleryAction::SelectKey(key) => next.select_category_key(&key).unwrap_or(false),
            GalleryAction::Open(index) => next.open(index) && next.lightbox() != self.lightbox(),
            GalleryAction::Close => {
                let was_open = next.lightbox().is_open();
                next.close();
                was_open
            }
            GalleryAction::Next => {
                next.next();
                next.lightbox() != self.lightbox()
            }
            GalleryAction::Prev => {
                next.prev();
                next.lightbox() != self.lightbox()
            }
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Maps a key press to a lightbox action.
fn key_action(key: &str) -> Option<GalleryAction> {
    match key {
        "Escape" => Some(GalleryAction::Close),
        "ArrowRight" => Some(GalleryAction::Next),
        "ArrowLeft" => Some(GalleryAction::Prev),
        _ => None,
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let state = use_reducer(|| GalleryViewState::new(Rc::new(Catalog::builtin())));
    let location = use_location();

    // Scroll to top and apply a `?category=` deep link on mount
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                if let Some(location) = location {
                    if let Ok(params) = UrlSearchParams::new_with_str(location.query_str()) {
                        if let Some(category) = params.get("category") {
                            dispatcher.dispatch(GalleryAction::SelectKey(category));
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    // Keyboard control for the lightbox
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        if let Some(action) = key_action(&e.key()) {
                            dispatcher.dispatch(action);
                        }
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("Could not watch keyboard: {:?}", e);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let on_close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(GalleryAction::Close))
    };
    let on_prev = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            state.dispatch(GalleryAction::Prev);
        })
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            state.dispatch(GalleryAction::Next);
        })
    };
    let on_close_button = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            state.dispatch(GalleryAction::Close);
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let active = state.active_category();
    let visible = state.visible_items();
    let total = visible.len();

    let gallery_css = r#"
        .gallery-page {
            padding: 8rem 1.5rem 5rem;
            max-width: 1200px;
            margin: 0 auto;
        }
        .gallery-filters {
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            gap: 0.75rem;
            margin: 2rem 0 3rem;
        }
        .gallery-filters button {
            padding: 0.6rem 1.25rem;
            border-radius: 999px;
            border: 1px solid #2E177A;
            background: #fff;
            color: #2E177A;
            font-weight: 500;
            cursor: pointer;
            transition: background 0.2s, color 0.2s;
        }
        .gallery-filters button.active {
            background: #2E177A;
            color: #fff;
        }
        .gallery-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
            gap: 1.25rem;
        }
        .gallery-tile {
            position: relative;
            aspect-ratio: 1;
            border-radius: 1rem;
            overflow: hidden;
            cursor: pointer;
            box-shadow: 0 8px 24px rgba(46, 23, 122, 0.1);
        }
        .gallery-tile .media {
            width: 100%;
            height: 100%;
            object-fit: cover;
            transition: transform 0.4s;
        }
        .gallery-tile:hover .media {
            transform: scale(1.05);
        }
        .gallery-badge {
            position: absolute;
            top: 0.75rem;
            left: 0.75rem;
            padding: 0.2rem 0.6rem;
            border-radius: 999px;
            font-size: 0.75rem;
            color: #fff;
            background: rgba(46, 23, 122, 0.85);
        }
        .gallery-empty {
            text-align: center;
            color: #666;
        }
        .lightbox {
            position: fixed;
            inset: 0;
            z-index: 100;
            display: flex;
            align-items: center;
            justify-content: center;
            background: rgba(0, 0, 0, 0.9);
        }
        .lightbox-content {
            max-width: 90vw;
            max-height: 85vh;
        }
        .lightbox-content .media {
            max-width: 90vw;
            max-height: 80vh;
            border-radius: 0.5rem;
        }
        .lightbox-counter {
            text-align: center;
            color: #ddd;
            margin-top: 0.75rem;
        }
        .lightbox button {
            position: absolute;
            background: rgba(255, 255, 255, 0.15);
            border: none;
            color: #fff;
            width: 48px;
            height: 48px;
            border-radius: 50%;
            font-size: 1.25rem;
            cursor: pointer;
        }
        .lightbox-close { top: 1.5rem; right: 1.5rem; }
        .lightbox-prev { left: 1.5rem; top: 50%; transform: translateY(-50%); }
        .lightbox-next { right: 1.5rem; top: 50%; transform: translateY(-50%); }
    "#;

    html! {
        <div class="gallery-page">
            <style>{gallery_css}</style>
            <Reveal class="section-header">
                <h1>{"Our "}<span class="text-gradient">{"Gallery"}</span></h1>
                <p>{"A look at our machines, the books we print and the work we deliver every day."}</p>
            </Reveal>

            <div class="gallery-filters">
                {
                    state.catalog().categories().into_iter().map(|summary| {
                        let onclick = {
                            let state = state.clone();
                            let id = summary.id;
                            Callback::from(move |_: MouseEvent| state.dispatch(GalleryAction::Select(id)))
                        };
                        html! {
                            <button
                                key={summary.id.as_str()}
                                class={classes!((summary.id == active).then_some("active"))}
                                {onclick}
                            >
                                {format!("{} ({})", summary.display_name, summary.count)}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>

            if state.catalog().is_empty(active) {
                <p class="gallery-empty">{"Nothing to show here yet."}</p>
            } else {
                <div class="gallery-grid">
                    {
                        visible.iter().enumerate().map(|(index, item)| {
                            let onclick = {
                                let state = state.clone();
                                Callback::from(move |_: MouseEvent| state.dispatch(GalleryAction::Open(index)))
                            };
                            html! {
                                <div
                                    class={classes!("gallery-tile", item.is_video().then_some("is-video"))}
                                    key={item.path().to_string()}
                                    {onclick}
                                >
                                    <MediaView item={(*item).clone()} mode={ViewMode::Preview} class="media" />
                                    <span class="gallery-badge">{kind_label(item.kind())}</span>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            }

            if let (Some(index), Some(item)) = (state.lightbox().index(), state.lightbox().item()) {
                <div class="lightbox" onclick={on_close}>
                    <button class="lightbox-close" onclick={on_close_button} aria-label="Close">
                        <IconView icon={Icon::Close} />
                    </button>
                    <button class="lightbox-prev" onclick={on_prev} aria-label="Previous">
                        <IconView icon={Icon::ChevronLeft} />
                    </button>
                    <div class="lightbox-content" onclick={keep_open}>
                        <MediaView item={item.clone()} mode={ViewMode::Lightbox} class="media" />
                        <p class="lightbox-counter">{format!("{} / {}", index + 1, total)}</p>
                    </div>
                    <button class="lightbox-next" onclick={on_next} aria-label="Next">
                        <IconView icon={Icon::ChevronRight} />
                    </button>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::catalog::tests::sized_catalog;

    fn state() -> Rc<GalleryViewState> {
        Rc::new(GalleryViewState::new(Rc::new(sized_catalog(16, 37, 7))))
    }

    #[test]
    fn reducer_walks_the_lightbox() {
        let s = state()
            .reduce(GalleryAction::Select(CategoryId::Machines))
            .reduce(GalleryAction::Open(5))
            .reduce(GalleryAction::Next);
        assert_eq!(s.lightbox().index(), Some(0));
        let s = s.reduce(GalleryAction::Prev);
        assert_eq!(s.lightbox().index(), Some(5));
        let s = s.reduce(GalleryAction::Close);
        assert!(!s.lightbox().is_open());
    }

    #[test]
    fn no_op_actions_keep_the_same_state() {
        let s = state();
        let same = s.clone().reduce(GalleryAction::Next);
        assert!(Rc::ptr_eq(&s, &same));
        let same = s.clone().reduce(GalleryAction::Select(CategoryId::All));
        assert!(Rc::ptr_eq(&s, &same));
        let same = s.clone().reduce(GalleryAction::Open(66));
        assert!(Rc::ptr_eq(&s, &same));
    }

    #[test]
    fn stepping_a_single_item_keeps_the_same_state() {
        let catalog = Catalog::from_config(&[(CategoryId::Videos, &["/images/VID-1.mp4"])]);
        let s = Rc::new(GalleryViewState::new(Rc::new(catalog)))
            .reduce(GalleryAction::Select(CategoryId::Videos))
            .reduce(GalleryAction::Open(0));
        assert!(s.lightbox().is_open());

        let same = s.clone().reduce(GalleryAction::Next);
        assert!(Rc::ptr_eq(&s, &same));
        let same = s.clone().reduce(GalleryAction::Prev);
        assert!(Rc::ptr_eq(&s, &same));
        let same = s.clone().reduce(GalleryAction::Open(0));
        assert!(Rc::ptr_eq(&s, &same));
    }

    #[test]
    fn url_keys_select_known_categories_only() {
        let s = state().reduce(GalleryAction::SelectKey("videos".into()));
        assert_eq!(s.active_category(), CategoryId::Videos);
        let s = s.reduce(GalleryAction::SelectKey("posters".into()));
        assert_eq!(s.active_category(), CategoryId::Videos);
    }

    #[test]
    fn arrow_keys_and_escape_drive_the_lightbox() {
        assert!(matches!(key_action("Escape"), Some(GalleryAction::Close)));
        assert!(matches!(key_action("ArrowRight"), Some(GalleryAction::Next)));
        assert!(matches!(key_action("ArrowLeft"), Some(GalleryAction::Prev)));
        assert!(key_action("Enter").is_none());
    }
}
