use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod gallery;
mod components {
    pub mod brand_loader;
    pub mod footer;
    pub mod icons;
    pub mod navbar;
    pub mod reveal;
    pub mod testimonials;
}
mod content {
    pub mod company;
    pub mod gallery;
    pub mod services;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod gallery;
    pub mod home;
    pub mod not_found;
    pub mod products;
    pub mod services;
}
mod utils {
    pub mod contact;
}

use components::brand_loader::BrandLoader;
use components::footer::Footer;
use components::navbar::Navbar;
use components::reveal::REVEAL_CSS;
use pages::{
    about::About, contact::Contact, gallery::Gallery, home::Home, not_found::NotFound,
    products::Products, services::Services,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/products")]
    Products,
    #[at("/gallery")]
    Gallery,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Route: {:?}", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Services => html! { <Services /> },
        Route::Products => html! { <Products /> },
        Route::Gallery => html! { <Gallery /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    // The splash runs once per page load, not on every navigation
    let loader_done = use_state(|| false);
    let on_loader_finish = {
        let loader_done = loader_done.clone();
        Callback::from(move |_| loader_done.set(true))
    };

    html! {
        <BrowserRouter>
            <style>{REVEAL_CSS}</style>
            if !*loader_done {
                <BrandLoader on_finish={on_loader_finish} />
            }
            <Navbar />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::get_log_level()));
    log::info!("Starting {}", config::COMPANY_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve_from_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/gallery"), Some(Route::Gallery));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_back_to_paths() {
        assert_eq!(Route::Products.to_path(), "/products");
        assert_eq!(Route::About.to_path(), "/about");
    }
}
