use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod countdown;
mod navigation;
mod components {
    pub mod button;
    pub mod countdown_banner;
    pub mod faq_item;
    pub mod icon;
    pub mod section_title;
}
mod pages {
    pub mod sales;
}

use pages::sales::SalesPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering sales page");
            html! { <SalesPage /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to sales page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
