use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_LIFETIME_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: usize,
    pub kind: ToastKind,
    pub message: String,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(usize),
}

#[derive(Default, PartialEq)]
pub struct ToastList {
    next_id: usize,
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        let mut next_id = self.next_id;
        match action {
            ToastAction::Push(kind, message) => {
                toasts.push(Toast { id: next_id, kind, message });
                next_id += 1;
            }
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList { next_id, toasts })
    }
}

/// Handle for raising notifications from anywhere below a [`Toaster`].
#[derive(Clone, PartialEq)]
pub struct Toasts {
    push: Callback<(ToastKind, String)>,
}

impl Toasts {
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        self.push.emit((kind, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self {
            push: Callback::noop(),
        }
    }
}

#[hook]
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn Toaster(props: &ToasterProps) -> Html {
    let list = use_reducer(ToastList::default);

    let toasts = {
        let list = list.dispatcher();
        Toasts {
            push: Callback::from(move |(kind, message): (ToastKind, String)| list.dispatch(ToastAction::Push(kind, message))),
        }
    };
    let on_dismiss = {
        let list = list.dispatcher();
        Callback::from(move |id: usize| list.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Toasts> context={toasts}>
            { for props.children.iter() }
            <div class="toast-stack">
                { for list.toasts.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
            <style>
                {r#"
                .toast-stack {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    z-index: 100;
                }
                .toast {
                    background: #000;
                    color: #fff;
                    padding: 0.9rem 1.2rem;
                    border-radius: 10px;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                    cursor: pointer;
                    max-width: 360px;
                }
                .toast.error {
                    border-left: 4px solid #e5484d;
                }
                .toast.success {
                    border-left: 4px solid #30a46c;
                }
                "#}
            </style>
        </ContextProvider<Toasts>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<usize>,
}

#[function_component]
fn ToastItem(props: &ToastItemProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
                // dropping the handle cancels the timer
                move || drop(timeout)
            },
            (),
        );
    }

    let onclick = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };
    let class = match props.toast.kind {
        ToastKind::Success => "toast success",
        ToastKind::Error => "toast error",
    };

    html! {
        <div class={class} role="status" onclick={onclick}>
            { props.toast.message.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids_and_dismiss_removes_one() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(ToastKind::Success, "sent".into()));
        let list = list.reduce(ToastAction::Push(ToastKind::Error, "failed".into()));
        assert_eq!(list.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 1]);

        let list = list.reduce(ToastAction::Dismiss(0));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].message, "failed");

        let list = list.reduce(ToastAction::Push(ToastKind::Success, "again".into()));
        assert_eq!(list.toasts.last().map(|t| t.id), Some(2));
    }

    #[test]
    fn dismissing_an_unknown_toast_is_harmless() {
        let list = Rc::new(ToastList::default()).reduce(ToastAction::Push(ToastKind::Error, "x".into()));
        let list = list.reduce(ToastAction::Dismiss(42));
        assert_eq!(list.toasts.len(), 1);
    }
}
