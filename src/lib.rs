use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod components {
    pub mod contact_form;
    pub mod magical_button;
    pub mod mesh_background;
    pub mod section_card;
}
pub mod effects {
    pub mod dom;
    pub mod hooks;
    pub mod particles;
}
pub mod pages {
    pub mod home;
    pub mod not_found;
}

use effects::hooks::use_magic_cursor;
use pages::{home::Home, not_found::NotFound};

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
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    use_magic_cursor();

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
