use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{styles, Route};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="flex min-h-[80vh] flex-col items-center justify-center px-6 py-12">
            <h1 class={styles::TEXT_H2}>{"Page not found"}</h1>
            <p class={classes!(styles::TEXT_BODY, "mt-2")}>{"The page you were looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes={classes!(styles::BUTTON_PRIMARY, "mt-6")}>{"Back home"}</Link<Route>>
        </div>
    }
}
