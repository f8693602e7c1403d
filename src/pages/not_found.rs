use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This corner of the realm holds no magic."}</p>
            <Link<Route> to={Route::Home} classes="btn-magical-transparent">
                {"Return home"}
            </Link<Route>>
        </div>
    }
}
