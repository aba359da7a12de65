use yew::prelude::*;

use crate::hooks::use_toast::Toast;

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

/// Fixed top-right notification stack shared by every page.
#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack">
            {for props.toasts.iter().map(|toast| {
                let on_dismiss = props.on_dismiss.clone();
                let id = toast.id;
                html! {
                    <div key={id} class={classes!("toast-item", toast.kind.css_class())} role="alert">
                        <span class="toast-message">{&toast.message}</span>
                        <button
                            type="button"
                            class="toast-close"
                            aria-label="Close"
                            onclick={Callback::from(move |_: MouseEvent| on_dismiss.emit(id))}
                        >
                            {"×"}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
