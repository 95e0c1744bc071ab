use std::fmt::Display;

use machine_form::{Field, FormMode};
use payloads::{MachineId, ReferenceItem};
use yew::prelude::*;

use crate::{
    Route,
    components::{
        MachineImageInput, OutcomeDialog, SelectField, SelectOption, TextField,
    },
    hooks::{LoadStatus, use_machine_form, use_push_route},
};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Id from the edit route; `None` registers a new machine.
    #[prop_or_default]
    pub machine_id: Option<MachineId>,
}

fn options<Id: Display>(items: &[ReferenceItem<Id>]) -> Vec<SelectOption> {
    items
        .iter()
        .map(|item| SelectOption {
            value: item.id.to_string(),
            label: item.label.clone(),
        })
        .collect()
}

fn owned_attr(value: &str) -> AttrValue {
    AttrValue::from(value.to_string())
}

#[function_component]
pub fn MachineRegistrationPage(props: &Props) -> Html {
    let handle = use_machine_form(props.machine_id);
    let push_route = use_push_route();
    let state = &*handle.state;
    let form = &state.form;
    let locked = state.is_locked();

    let on_submit = {
        let on_submit = handle.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_cancel = Callback::from(move |_: MouseEvent| {
        push_route.emit(Route::Information)
    });

    let title = match form.mode {
        FormMode::Edit(_) => "Editar máquina",
        _ => "Registrar máquina",
    };

    let text_field = |field: Field, input_type: &'static str| {
        html! {
            <TextField
                {field}
                value={form.fields.value(field)}
                error={form.visible_error(field)}
                on_input={handle.on_input.clone()}
                disabled={locked}
                input_type={input_type}
            />
        }
    };

    let select_field = |field: Field, options: Vec<SelectOption>| {
        html! {
            <SelectField
                {field}
                value={form.fields.value(field)}
                {options}
                error={form.visible_error(field)}
                on_input={handle.on_input.clone()}
                disabled={locked}
            />
        }
    };

    let status = match &state.load {
        LoadStatus::Loading => html! {
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {"Cargando..."}
            </p>
        },
        LoadStatus::Failed(message) => html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border
                        border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {message}
                </p>
            </div>
        },
        LoadStatus::Ready => html! {},
    };

    let reference = &form.reference;
    let preview_url = form.image.preview_url().map(owned_attr);
    let file_name = form.image.file_name().map(owned_attr);
    let dialog = state.outcome.as_ref().and_then(|o| o.dialog());

    html! {
        <div class="bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
            <h1 class="text-2xl font-bold text-neutral-900
                       dark:text-neutral-100 mb-6">
                {title}
            </h1>

            {status}

            <form onsubmit={on_submit} class="space-y-6" novalidate={true}>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                    {text_field(Field::ChassisNumber, "text")}
                    {select_field(
                        Field::MachineType,
                        options(&reference.machine_types),
                    )}
                    {text_field(Field::Model, "text")}
                    {select_field(
                        Field::State,
                        options(&reference.machine_states),
                    )}
                    {text_field(Field::HourMeter, "number")}
                    {select_field(
                        Field::Company,
                        options(&reference.companies),
                    )}
                    {select_field(Field::Brand, options(&reference.brands))}
                </div>

                <MachineImageInput
                    {preview_url}
                    {file_name}
                    on_select={handle.on_image_select.clone()}
                    on_read={handle.on_image_read.clone()}
                    on_read_failed={handle.on_image_read_failed.clone()}
                    disabled={locked}
                />

                <div class="flex space-x-3">
                    <button
                        type="button"
                        onclick={on_cancel}
                        disabled={state.is_submitting()}
                        class="flex-1 py-2 px-4 border border-neutral-300
                               dark:border-neutral-600 rounded-md shadow-sm
                               text-sm font-medium text-neutral-700
                               dark:text-neutral-300 bg-white
                               dark:bg-neutral-700 hover:bg-neutral-50
                               dark:hover:bg-neutral-600
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {"Cancelar"}
                    </button>
                    <button
                        type="submit"
                        disabled={!state.can_submit()}
                        class="flex-1 py-2 px-4 rounded-md shadow-sm text-sm
                               font-medium text-white bg-neutral-900
                               hover:bg-neutral-800 dark:bg-neutral-100
                               dark:text-neutral-900 dark:hover:bg-neutral-200
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        if state.is_submitting() {
                            {"Guardando..."}
                        } else {
                            {"Guardar"}
                        }
                    </button>
                </div>
            </form>

            if let Some(dialog) = dialog {
                <OutcomeDialog
                    {dialog}
                    on_acknowledge={handle.on_acknowledge.clone()}
                />
            }
        </div>
    }
}
