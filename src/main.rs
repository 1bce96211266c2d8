use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod enquiry;
mod components {
    pub mod call_button;
    pub mod enquire_modal;
    pub mod enquire_tab;
    pub mod footer;
    pub mod map_section;
    pub mod navbar;
    pub mod offers;
    pub mod whatsapp_button;
}
mod pages {
    pub mod about;
    pub mod courses;
    pub mod home;
    pub mod not_found;
}

use pages::{
    about::About,
    courses::Courses,
    home::Home,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/courses")]
    Courses,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Courses => {
            info!("Rendering Courses page");
            html! { <Courses /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
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

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
