//! Outline-style call-to-action button.

use ui_state::{Command, Target};
use yew::prelude::*;

/// Properties for OutlineButton component.
#[derive(Properties, PartialEq)]
pub struct OutlineButtonProps {
    pub target: Target,
    pub on_command: Callback<Command>,
}

/// Orange outline button used by the informational sections; emits a
/// navigate command for its target.
#[function_component(OutlineButton)]
pub fn outline_button(props: &OutlineButtonProps) -> Html {
    let onclick = {
        let on_command = props.on_command.clone();
        let target = props.target;
        Callback::from(move |_| on_command.emit(Command::Navigate(target)))
    };

    html! {
        <button
            {onclick}
            class="border border-orange-400 text-orange-500 px-16 py-2 rounded-full hover:bg-orange-50 transition font-medium"
        >
            { props.target.label() }
        </button>
    }
}
