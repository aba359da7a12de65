use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Warning => "toast-warning",
            ToastKind::Info => "toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastQueue { toasts })
    }
}

pub struct UseToastResult {
    pub toasts: Vec<Toast>,
    pub push: Callback<(ToastKind, String)>,
    pub dismiss: Callback<u32>,
}

/// Transient notifications that remove themselves after `duration_ms`.
#[hook]
pub fn use_toast(duration_ms: u32) -> UseToastResult {
    let queue = use_reducer(ToastQueue::default);
    let next_id = use_mut_ref(|| 0u32);

    let push = {
        let dispatcher = queue.dispatcher();
        use_callback(duration_ms, move |(kind, message): (ToastKind, String), duration_ms| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next = next.wrapping_add(1);
                *next
            };
            dispatcher.dispatch(ToastAction::Push(Toast { id, kind, message }));

            let dispatcher = dispatcher.clone();
            Timeout::new(*duration_ms, move || {
                dispatcher.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    let dismiss = {
        let dispatcher = queue.dispatcher();
        use_callback((), move |id: u32, _| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    UseToastResult {
        toasts: queue.toasts.clone(),
        push,
        dismiss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32) -> Toast {
        Toast {
            id,
            kind: ToastKind::Info,
            message: format!("toast {}", id),
        }
    }

    #[test]
    fn test_queue_push_and_dismiss() {
        let queue = Rc::new(ToastQueue::default());
        let queue = queue.reduce(ToastAction::Push(toast(1)));
        let queue = queue.reduce(ToastAction::Push(toast(2)));
        assert_eq!(queue.toasts.len(), 2);

        let queue = queue.reduce(ToastAction::Dismiss(1));
        assert_eq!(queue.toasts, vec![toast(2)]);

        // dismissing twice is harmless (timer after a manual close)
        let queue = queue.reduce(ToastAction::Dismiss(1));
        assert_eq!(queue.toasts.len(), 1);
    }
}
