use crate::contexts::toast::{Toast, ToastType, use_toast};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let toast_handle = use_toast();
    let toast = &props.toast;

    let (colors, icon) = match toast.toast_type {
        ToastType::Error => (
            "bg-red-50 dark:bg-red-900 border-red-200 dark:border-red-800 \
             text-red-700 dark:text-red-400",
            "✕",
        ),
        ToastType::Warning => (
            "bg-amber-50 dark:bg-amber-900 border-amber-200 \
             dark:border-amber-800 text-amber-800 dark:text-amber-300",
            "!",
        ),
    };

    let on_close = {
        let toast_id = toast.id;
        Callback::from(move |_| toast_handle.remove(toast_id))
    };

    html! {
        <div
            role="alert"
            class={classes!(
                "relative", "p-4", "rounded-lg", "border", "shadow-lg",
                colors
            )}
        >
            <div class="flex items-start space-x-3">
                <span class="flex-shrink-0 text-sm font-medium">{icon}</span>
                <p class="flex-1 min-w-0 text-sm font-medium leading-5">
                    {&toast.message}
                </p>
                <button
                    type="button"
                    onclick={on_close}
                    class="flex-shrink-0 text-neutral-400 hover:text-neutral-600
                           dark:hover:text-neutral-200 transition-colors"
                    title="Cerrar"
                >
                    <span class="text-lg leading-none">{"×"}</span>
                </button>
            </div>
        </div>
    }
}
