//! Labeled inputs bound to one [`Field`] of the machine form.

use machine_form::{Field, FieldError};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const INPUT_CLASS: &str = "w-full px-3 py-2 border rounded-md shadow-sm \
    bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100 \
    focus:outline-none focus:ring-2 focus:ring-neutral-500 \
    disabled:opacity-50";

fn border_class(error: Option<FieldError>) -> &'static str {
    if error.is_some() {
        "border-red-500 dark:border-red-400"
    } else {
        "border-neutral-300 dark:border-neutral-600"
    }
}

fn error_text(error: Option<FieldError>) -> Html {
    match error {
        Some(error) => html! {
            <p class="mt-1 text-sm text-red-600 dark:text-red-400">
                {error.message()}
            </p>
        },
        None => html! {},
    }
}

fn label(field: Field) -> Html {
    html! {
        <label
            for={field.input_name()}
            class="block text-sm font-medium text-neutral-700
                   dark:text-neutral-300 mb-2"
        >
            {field.label()}
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub field: Field,
    pub value: AttrValue,
    pub error: Option<FieldError>,
    pub on_input: Callback<(Field, String)>,
    #[prop_or_default]
    pub disabled: bool,
    /// Html input type, "text" unless set.
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
}

#[function_component]
pub fn TextField(props: &TextFieldProps) -> Html {
    let oninput = {
        let field = props.field;
        props.on_input.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            (field, input.value())
        })
    };

    html! {
        <div>
            {label(props.field)}
            <input
                type={props.input_type.clone()}
                id={props.field.input_name()}
                name={props.field.input_name()}
                value={props.value.clone()}
                {oninput}
                disabled={props.disabled}
                class={classes!(INPUT_CLASS, border_class(props.error))}
            />
            {error_text(props.error)}
        </div>
    }
}

/// A dropdown option: the id as it goes in the html value, and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub field: Field,
    pub value: AttrValue,
    pub options: Vec<SelectOption>,
    pub error: Option<FieldError>,
    pub on_input: Callback<(Field, String)>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn SelectField(props: &SelectFieldProps) -> Html {
    let onchange = {
        let field = props.field;
        props.on_input.reform(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            (field, select.value())
        })
    };

    html! {
        <div>
            {label(props.field)}
            <select
                id={props.field.input_name()}
                name={props.field.input_name()}
                {onchange}
                disabled={props.disabled}
                class={classes!(INPUT_CLASS, border_class(props.error))}
            >
                <option value="" selected={props.value.is_empty()}>
                    {"Seleccione una opción"}
                </option>
                {for props.options.iter().map(|option| html! {
                    <option
                        value={option.value.clone()}
                        selected={option.value == props.value.as_str()}
                    >
                        {&option.label}
                    </option>
                })}
            </select>
            {error_text(props.error)}
        </div>
    }
}
