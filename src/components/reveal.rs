use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Share of the element that must be on screen before it counts as seen.
const REVEAL_THRESHOLD: f64 = 0.15;

/// Becomes `true` the first time `node` scrolls into the viewport and stays
/// `true` for the life of the calling component.
///
/// Browsers without `IntersectionObserver` get the content shown right away.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let element = node.cast::<web_sys::Element>();
                let destructor: Box<dyn FnOnce()> = match element {
                    Some(element) => {
                        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
                            let visible = visible.clone();
                            move |entries: js_sys::Array, observer: IntersectionObserver| {
                                let seen = entries.iter().any(|entry| {
                                    entry
                                        .dyn_into::<IntersectionObserverEntry>()
                                        .map(|entry| entry.is_intersecting())
                                        .unwrap_or(false)
                                });
                                if seen {
                                    visible.set(true);
                                    observer.disconnect();
                                }
                            }
                        });

                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

                        let observer = IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        );
                        match observer {
                            Ok(observer) => {
                                observer.observe(&element);
                                Box::new(move || {
                                    observer.disconnect();
                                    drop(callback);
                                })
                            }
                            Err(e) => {
                                log::warn!("IntersectionObserver unavailable: {:?}", e);
                                visible.set(true);
                                Box::new(|| ())
                            }
                        }
                    }
                    None => Box::new(|| ()),
                };
                move || destructor()
            },
            node,
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Stagger, applied as a CSS transition delay.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Fades and slides its children in once they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", visible.then_some("is-visible"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

pub const REVEAL_CSS: &str = r#"
    .reveal {
        opacity: 0;
        transform: translateY(40px);
        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
    }
    .reveal.is-visible {
        opacity: 1;
        transform: none;
    }
    @media (prefers-reduced-motion: reduce) {
        .reveal {
            opacity: 1;
            transform: none;
            transition: none;
        }
    }
"#;
