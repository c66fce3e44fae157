//! Topbar component: icon row plus the login button.

use ui_state::{Command, Panel};
use yew::prelude::*;

use crate::components::{Icon, IconKind};

/// Properties for Topbar component.
#[derive(Properties, PartialEq)]
pub struct TopbarProps {
    pub on_command: Callback<Command>,
}

/// Topbar component.
#[function_component(Topbar)]
pub fn topbar(props: &TopbarProps) -> Html {
    let on_command = &props.on_command;

    let login = {
        let on_command = on_command.clone();
        Callback::from(move |_| on_command.emit(Command::Login))
    };

    html! {
        <div class="flex justify-end items-center gap-5">
            <TopIcon
                icon={IconKind::ShoppingCart}
                panel={Panel::Cart}
                on_command={on_command.clone()}
            />
            <TopIcon
                icon={IconKind::MessageCircle}
                panel={Panel::Messages}
                on_command={on_command.clone()}
            />
            <TopIcon
                icon={IconKind::Bell}
                panel={Panel::Notifications}
                on_command={on_command.clone()}
            />
            <button
                onclick={login}
                class="bg-orange-500 hover:bg-orange-600 text-white text-sm font-semibold px-5 py-2 rounded-full shadow transition"
            >
                { "Đăng nhập" }
            </button>
        </div>
    }
}

/// Properties for TopIcon component.
#[derive(Properties, PartialEq)]
struct TopIconProps {
    icon: IconKind,
    panel: Panel,
    on_command: Callback<Command>,
}

/// One clickable icon in the topbar row.
#[function_component(TopIcon)]
fn top_icon(props: &TopIconProps) -> Html {
    let onclick = {
        let on_command = props.on_command.clone();
        let panel = props.panel;
        Callback::from(move |_| on_command.emit(Command::OpenPanel(panel)))
    };

    html! {
        <div
            class="text-[18px] text-gray-700 cursor-pointer hover:text-orange-500 transition"
            {onclick}
        >
            <Icon kind={props.icon} />
        </div>
    }
}
