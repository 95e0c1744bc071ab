use std::collections::BTreeMap;
use std::rc::Rc;

use uuid::Uuid;
use yew::prelude::*;

/// How long a notification stays up unless dismissed.
const DISMISS_AFTER_MS: u32 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Error,
    Warning,
}

/// A transient notification. Used for problems that do not warrant a modal
/// dialog, like a failed page load or an unreadable file.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    /// Keyed by arrival order, so later toasts are shown below earlier ones.
    toasts: BTreeMap<u64, Toast>,
    next_sequence: u64,
}

impl ToastState {
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.values()
    }
}

pub enum ToastAction {
    Add {
        id: Uuid,
        message: String,
        toast_type: ToastType,
    },
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();

        match action {
            ToastAction::Add {
                id,
                message,
                toast_type,
            } => {
                let sequence = state.next_sequence;
                state.next_sequence += 1;
                state.toasts.insert(
                    sequence,
                    Toast {
                        id,
                        message,
                        toast_type,
                    },
                );
            }
            ToastAction::Remove(id) => {
                state.toasts.retain(|_, toast| toast.id != id);
            }
        }

        Rc::new(state)
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    fn add(&self, message: String, toast_type: ToastType) {
        let id = Uuid::new_v4();
        self.context.dispatch(ToastAction::Add {
            id,
            message,
            toast_type,
        });

        let context = self.context.clone();
        yew::platform::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            context.dispatch(ToastAction::Remove(id));
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(message.into(), ToastType::Error);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.add(message.into(), ToastType::Warning);
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle { context }
}
