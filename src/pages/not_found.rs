use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="section not-found">
            <div class="container section-header">
                <h1>{"404"}</h1>
                <p>{"The page you are looking for does not exist."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"Back to Home"}
                </Link<Route>>
            </div>
        </section>
    }
}
