use machine_form::ReadTicket;
use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader, HtmlInputElement};
use yew::prelude::*;

/// A file the user picked, before its contents are available.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSelection {
    pub ticket: ReadTicket,
    pub file_name: String,
    pub mime_type: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub preview_url: Option<AttrValue>,
    pub file_name: Option<AttrValue>,
    pub on_select: Callback<ImageSelection>,
    pub on_read: Callback<(ReadTicket, Vec<u8>)>,
    pub on_read_failed: Callback<ReadTicket>,
    #[prop_or_default]
    pub disabled: bool,
}

/// File input with a preview of the current image. Every selection gets a
/// fresh [`ReadTicket`]; the contents are read asynchronously and handed
/// back with that ticket.
#[function_component]
pub fn MachineImageInput(props: &Props) -> Html {
    let on_change = {
        let on_select = props.on_select.clone();
        let on_read = props.on_read.clone();
        let on_read_failed = props.on_read_failed.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0))
            else {
                return;
            };

            let ticket = ReadTicket::new();
            on_select.emit(ImageSelection {
                ticket,
                file_name: file.name(),
                mime_type: file.type_(),
            });

            let Ok(reader) = FileReader::new() else {
                on_read_failed.emit(ticket);
                return;
            };

            let onload = {
                let reader = reader.clone();
                let on_read = on_read.clone();
                let on_read_failed = on_read_failed.clone();
                Closure::wrap(Box::new(move |_: Event| {
                    match reader.result() {
                        Ok(result) => {
                            let array = js_sys::Uint8Array::new(&result);
                            on_read.emit((ticket, array.to_vec()));
                        }
                        Err(_) => on_read_failed.emit(ticket),
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let onerror = {
                let on_read_failed = on_read_failed.clone();
                Closure::wrap(Box::new(move |_: Event| {
                    on_read_failed.emit(ticket)
                }) as Box<dyn FnMut(_)>)
            };

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            if reader.read_as_array_buffer(&file).is_err() {
                on_read_failed.emit(ticket);
            }
            onload.forget();
            onerror.forget();
        })
    };

    html! {
        <div>
            <label
                for="imagen"
                class="block text-sm font-medium text-neutral-700
                       dark:text-neutral-300 mb-2"
            >
                {"Imagen"}
            </label>
            <div class="flex items-center gap-4">
                <div class="w-32 h-20 rounded overflow-hidden bg-neutral-100
                            dark:bg-neutral-700 flex items-center
                            justify-center">
                    if let Some(url) = &props.preview_url {
                        <img
                            src={url.clone()}
                            alt="Vista previa"
                            class="w-full h-full object-cover"
                        />
                    } else {
                        <span class="text-xs text-neutral-400">
                            {"Sin imagen"}
                        </span>
                    }
                </div>
                <div class="flex-1 min-w-0 space-y-2">
                    <input
                        type="file"
                        id="imagen"
                        name="imagen"
                        accept="image/*"
                        onchange={on_change}
                        disabled={props.disabled}
                        class="block w-full text-sm text-neutral-700
                               dark:text-neutral-300"
                    />
                    if let Some(name) = &props.file_name {
                        <p class="text-xs text-neutral-500 truncate">
                            {name}
                        </p>
                    }
                </div>
            </div>
        </div>
    }
}
