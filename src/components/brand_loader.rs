use gloo_timers::callback::Timeout;
use yew::prelude::*;

const FADE_AFTER_MS: u32 = 1_500;
const FINISH_AFTER_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct BrandLoaderProps {
    pub on_finish: Callback<()>,
}

/// Full-screen logo splash. Fades out and then reports back through
/// `on_finish`; the owner decides whether to render it again.
#[function_component(BrandLoader)]
pub fn brand_loader(props: &BrandLoaderProps) -> Html {
    let fading = use_state(|| false);

    {
        let fading = fading.clone();
        let on_finish = props.on_finish.clone();
        use_effect_with_deps(
            move |_| {
                let fade = Timeout::new(FADE_AFTER_MS, move || fading.set(true));
                let finish = Timeout::new(FINISH_AFTER_MS, move || on_finish.emit(()));
                // Dropping a Timeout cancels it.
                move || {
                    drop(fade);
                    drop(finish);
                }
            },
            (),
        );
    }

    let loader_css = r#"
        .brand-loader {
            position: fixed;
            inset: 0;
            min-height: 100vh;
            min-width: 100vw;
            background: #fff;
            display: flex;
            align-items: center;
            justify-content: center;
            z-index: 9999;
        }
        .brand-loader img {
            height: 120px;
            width: auto;
            user-select: none;
        }
        .animate-fadeinup {
            animation: fadeinup 0.5s ease-out both;
        }
        .animate-fadeoutup {
            animation: fadeoutup 0.5s ease-in both;
        }
        @keyframes fadeinup {
            from { opacity: 0; transform: translateY(20px); }
            to { opacity: 1; transform: none; }
        }
        @keyframes fadeoutup {
            from { opacity: 1; transform: none; }
            to { opacity: 0; transform: translateY(-20px); }
        }
    "#;

    let animation = if *fading { "animate-fadeoutup" } else { "animate-fadeinup" };

    html! {
        <div class="brand-loader" aria-hidden="true">
            <style>{loader_css}</style>
            <div class={animation}>
                <img src={crate::config::asset_url("/logo.png")} alt="Genesis Print Logo" draggable="false" />
            </div>
        </div>
    }
}
