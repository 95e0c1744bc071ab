use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Landing view after a machine is saved. The machinery listing itself is
/// served elsewhere; this page links back to the registration form.
#[function_component]
pub fn InformationPage() -> Html {
    html! {
        <div class="text-center space-y-4">
            <h1 class="text-2xl font-bold text-neutral-900
                       dark:text-neutral-100">
                {"Información de maquinaria"}
            </h1>
            <p class="text-neutral-600 dark:text-neutral-400">
                {"Los cambios guardados aparecen en el listado de maquinaria."}
            </p>
            <Link<Route>
                to={Route::RegisterMachine}
                classes="inline-block py-2 px-4 rounded-md text-sm font-medium
                         text-white bg-neutral-900 hover:bg-neutral-800
                         dark:bg-neutral-100 dark:text-neutral-900"
            >
                {"Registrar otra máquina"}
            </Link<Route>>
        </div>
    }
}
