use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::Route;

/// Scroll offset after which the bar gets its solid background.
const SOLID_AFTER_PX: f64 = 20.0;

const NAV_ITEMS: &[(&str, Route)] = &[
    ("About", Route::About),
    ("Services", Route::Services),
    ("Products", Route::Products),
    ("Gallery", Route::Gallery),
    ("Contact", Route::Contact),
];

fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SOLID_AFTER_PX
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| false);
    let route = use_route::<Route>();

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    scrolled.set(is_scrolled(scroll_y));
                                }
                            }
                        }
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("Could not watch scroll position: {:?}", e);
                    }
                    if let Ok(scroll_y) = window.scroll_y() {
                        scrolled.set(is_scrolled(scroll_y));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
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

    // Close the mobile menu whenever the route changes.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            route.clone(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_css = r#"
        .navbar {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 50;
            transition: background 0.3s, box-shadow 0.3s;
        }
        .navbar.scrolled {
            background: rgba(255, 255, 255, 0.95);
            backdrop-filter: blur(12px);
            box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
        }
        .navbar-inner {
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 1.5rem;
            height: 80px;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }
        .navbar-logo img {
            height: 60px;
            width: auto;
        }
        .navbar-links {
            display: flex;
            gap: 2rem;
        }
        .navbar-links a {
            color: #404040;
            font-weight: 500;
            text-decoration: none;
        }
        .navbar-links a.active,
        .navbar-links a:hover {
            color: #2E177A;
        }
        .navbar-toggle {
            display: none;
            background: none;
            border: none;
            font-size: 1.5rem;
            color: #2E177A;
            cursor: pointer;
        }
        @media (max-width: 768px) {
            .navbar-toggle {
                display: block;
            }
            .navbar-links {
                display: none;
                position: absolute;
                top: 80px;
                left: 0;
                right: 0;
                flex-direction: column;
                gap: 0;
                background: #fff;
                box-shadow: 0 8px 20px rgba(0, 0, 0, 0.1);
            }
            .navbar-links.open {
                display: flex;
            }
            .navbar-links a {
                padding: 1rem 1.5rem;
            }
        }
    "#;

    html! {
        <nav class={classes!("navbar", scrolled.then_some("scrolled"))}>
            <style>{nav_css}</style>
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="navbar-logo">
                    <img src={crate::config::asset_url("/logo.png")} alt="Genesis Logo" />
                </Link<Route>>
                <button class="navbar-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                    <IconView icon={if *menu_open { Icon::Close } else { Icon::Menu }} />
                </button>
                <div class={classes!("navbar-links", menu_open.then_some("open"))}>
                    {
                        NAV_ITEMS.iter().map(|(label, target)| {
                            let active = route.as_ref() == Some(target);
                            html! {
                                <Link<Route> to={target.clone()} classes={classes!(active.then_some("active"))}>
                                    {*label}
                                </Link<Route>>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_turns_solid_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn every_page_but_home_is_linked() {
        assert!(NAV_ITEMS.iter().all(|(_, route)| *route != Route::Home));
        assert_eq!(NAV_ITEMS.len(), 5);
    }
}
