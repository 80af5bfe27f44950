use yew::prelude::*;

use crate::scroll::process::prompt_visible;
use crate::scroll::progress::use_scroll_y;

#[function_component]
pub fn ScrollPrompt() -> Html {
    let scroll_y = use_scroll_y();
    let class = if prompt_visible(scroll_y) {
        "scroll-prompt"
    } else {
        "scroll-prompt hidden"
    };

    html! {
        <div class={class}>
            <span>{"Scroll to begin the journey"}</span>
            <span class="bounce">{"↓"}</span>
        </div>
    }
}
