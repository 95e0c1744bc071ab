use machine_form::{FormSettings, TransportErrorPolicy};
use payloads::{APIClient, MachineId};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;

use components::ToastContainer;
use contexts::toast::ToastProvider;
use pages::{InformationPage, MachineRegistrationPage, NotFoundPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

/// Form behavior, chosen at build time. Setting
/// `TRANSPORT_ERROR_POLICY=stay` keeps the user on the form after a failed
/// request instead of leaving for the listing.
pub fn form_settings() -> FormSettings {
    let transport_error_policy = match option_env!("TRANSPORT_ERROR_POLICY") {
        Some("stay") => TransportErrorPolicy::StayOnForm,
        _ => TransportErrorPolicy::NavigateToListing,
    };
    FormSettings {
        transport_error_policy,
    }
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());

    html! {
        <BrowserRouter>
            <ToastProvider>
                <div class="min-h-screen bg-white dark:bg-neutral-900
                            text-neutral-900 dark:text-neutral-100
                            transition-colors">
                    <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
                <ToastContainer />
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/maquinaria/registro")]
    RegisterMachine,
    #[at("/maquinaria/editar/:id")]
    EditMachine { id: i64 },
    #[at("/informacion")]
    Information,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! {
            <Redirect<Route> to={Route::RegisterMachine} />
        },
        Route::RegisterMachine => html! {
            <MachineRegistrationPage />
        },
        Route::EditMachine { id } => html! {
            <MachineRegistrationPage machine_id={Some(MachineId(id))} />
        },
        Route::Information => html! { <InformationPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
