use super::ToastItem;
use crate::contexts::toast::ToastContext;
use yew::prelude::*;

#[function_component]
pub fn ToastContainer() -> Html {
    let Some(context) = use_context::<ToastContext>() else {
        return html! {};
    };

    let toasts: Vec<_> = context.toasts().cloned().collect();
    if toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-3 max-w-sm w-full">
            {for toasts.into_iter().map(|toast| {
                let key = toast.id.to_string();
                html! { <ToastItem {key} {toast} /> }
            })}
        </div>
    }
}
