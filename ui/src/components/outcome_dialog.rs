use machine_form::{Dialog, DialogKind};
use yew::prelude::*;

use super::Modal;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub dialog: Dialog,
    pub on_acknowledge: Callback<()>,
}

/// Success or error message after a submission. Only the button dismisses
/// it, so the follow-up navigation always happens after the user read it.
#[function_component]
pub fn OutcomeDialog(props: &Props) -> Html {
    let Dialog { kind, title, text } = &props.dialog;

    let (icon, icon_class) = match kind {
        DialogKind::Success => (
            "✓",
            "bg-green-100 text-green-700 dark:bg-green-900 \
             dark:text-green-300",
        ),
        DialogKind::Error => (
            "✕",
            "bg-red-100 text-red-700 dark:bg-red-900 dark:text-red-300",
        ),
    };

    let on_click = props.on_acknowledge.reform(|_: MouseEvent| ());

    html! {
        <Modal
            on_close={props.on_acknowledge.clone()}
            close_on_backdrop={false}
        >
            <div class="text-center space-y-4">
                <div class={classes!(
                    "mx-auto", "flex", "h-12", "w-12", "items-center",
                    "justify-center", "rounded-full", "text-xl", icon_class
                )}>
                    {icon}
                </div>
                <h3 class="text-lg font-semibold text-neutral-900
                           dark:text-neutral-100">
                    {title}
                </h3>
                <p class="text-sm text-neutral-600 dark:text-neutral-300">
                    {text}
                </p>
                <button
                    type="button"
                    onclick={on_click}
                    class="w-full py-2 px-4 rounded-md text-sm font-medium
                           text-white bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900
                           dark:hover:bg-neutral-200 transition-colors"
                >
                    {"Aceptar"}
                </button>
            </div>
        </Modal>
    }
}
