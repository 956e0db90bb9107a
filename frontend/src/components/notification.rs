use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TOAST_LIFETIME_MS;

const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u32,
}

impl Toasts {
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                next.items.push(Toast { id: next.next_id, kind, message });
                next.next_id = next.next_id.wrapping_add(1);
                if next.items.len() > MAX_TOASTS {
                    next.items.remove(0);
                }
            }
            ToastAction::Dismiss(id) => {
                if !self.items.iter().any(|toast| toast.id == id) {
                    return self;
                }
                next.items.retain(|toast| toast.id != id);
            }
        }
        Rc::new(next)
    }
}

pub type ToastContext = UseReducerHandle<Toasts>;

/// Handle for raising toasts from anywhere under the app root.
#[derive(Clone, PartialEq)]
pub struct Notifier(Option<ToastContext>);

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        match &self.0 {
            Some(toasts) => toasts.dispatch(ToastAction::Push(kind, message)),
            None => log::warn!("Toast dropped, no toaster mounted: {}", message),
        }
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    let toasts = use_context::<ToastContext>();
    Notifier(toasts)
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
                // Dropping the handle cancels the timer if the toast goes first.
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let (class, icon) = match props.toast.kind {
        ToastKind::Success => ("toast toast-success", "✓"),
        ToastKind::Error => ("toast toast-error", "!"),
    };

    html! {
        <div class={class} role="status">
            <span class="toast-icon">{icon}</span>
            <span class="toast-message">{&props.toast.message}</span>
            <button class="toast-close" onclick={close} aria-label="Dismiss">{"✕"}</button>
        </div>
    }
}

#[function_component(Toaster)]
pub fn toaster() -> Html {
    let toasts = use_context::<ToastContext>();
    let Some(toasts) = toasts else {
        return html! {};
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="toaster">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        bottom: 24px;
                        right: 24px;
                        display: flex;
                        flex-direction: column;
                        gap: 10px;
                        z-index: 100;
                        max-width: 360px;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        padding: 14px 16px;
                        border-radius: 12px;
                        background: #ffffff;
                        box-shadow: 0 8px 24px rgba(29, 53, 87, 0.18);
                        animation: toastIn 0.3s ease-out;
                        color: #1d3557;
                    }
                    .toast-success { border-left: 4px solid #2a9d8f; }
                    .toast-error { border-left: 4px solid #e63946; }
                    .toast-icon { font-weight: bold; }
                    .toast-success .toast-icon { color: #2a9d8f; }
                    .toast-error .toast-icon { color: #e63946; }
                    .toast-message { flex: 1; }
                    .toast-close {
                        background: none;
                        border: none;
                        color: #457b9d;
                        cursor: pointer;
                    }
                "#}
            </style>
            { for toasts.items().iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(toasts: Rc<Toasts>, kind: ToastKind, message: &str) -> Rc<Toasts> {
        toasts.reduce(ToastAction::Push(kind, message.to_string()))
    }

    #[test]
    fn ids_increase_and_dismiss_removes_only_the_target() {
        let toasts = Rc::new(Toasts::default());
        let toasts = push(toasts, ToastKind::Success, "Booking received");
        let toasts = push(toasts, ToastKind::Error, "City is required");
        assert_eq!(toasts.items().iter().map(|t| t.id).collect::<Vec<_>>(), [0, 1]);

        let toasts = toasts.reduce(ToastAction::Dismiss(0));
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].message, "City is required");
    }

    #[test]
    fn dismissing_an_unknown_id_is_a_no_op() {
        let toasts = push(Rc::new(Toasts::default()), ToastKind::Success, "hi");
        let same = toasts.clone().reduce(ToastAction::Dismiss(99));
        assert!(Rc::ptr_eq(&toasts, &same));
    }

    #[test]
    fn oldest_toast_is_dropped_past_the_cap() {
        let mut toasts = Rc::new(Toasts::default());
        for n in 0..(MAX_TOASTS + 2) {
            toasts = push(toasts, ToastKind::Error, &format!("error {}", n));
        }
        assert_eq!(toasts.items().len(), MAX_TOASTS);
        assert_eq!(toasts.items()[0].message, "error 2");
    }
}
