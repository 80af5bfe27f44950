use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::browser::copy_to_clipboard;

/// How long the "copied" tick stays up.
pub const COPIED_FLASH_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub text: AttrValue,
    #[prop_or(AttrValue::from("Copy"))]
    pub title: AttrValue,
}

#[function_component]
pub fn CopyButton(props: &CopyButtonProps) -> Html {
    let copied = use_state(|| false);

    let onclick = {
        let copied = copied.clone();
        let text = props.text.clone();
        Callback::from(move |_: MouseEvent| {
            if !copy_to_clipboard(&text) {
                return;
            }
            copied.set(true);
            let copied = copied.clone();
            Timeout::new(COPIED_FLASH_MS, move || copied.set(false)).forget();
        })
    };

    html! {
        <button type="button" class={classes!("icon-button", (*copied).then_some("copied"))}
            title={props.title.clone()} onclick={onclick}>
            { if *copied { "✓" } else { "⧉" } }
        </button>
    }
}
