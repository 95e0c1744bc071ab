use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="text-center space-y-2">
            <h1 class="text-4xl font-bold text-neutral-900 dark:text-white">
                {"404"}
            </h1>
            <p class="text-neutral-600 dark:text-neutral-300">
                {"Página no encontrada"}
            </p>
            <Link<Route> to={Route::RegisterMachine} classes="underline">
                {"Volver al registro de maquinaria"}
            </Link<Route>>
        </div>
    }
}
