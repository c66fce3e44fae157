//! Sidebar navigation component.

use ui_state::{Command, Target};
use yew::prelude::*;

use crate::components::{Icon, IconKind};

/// Properties for Sidebar component.
#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub on_command: Callback<Command>,
}

/// Sidebar navigation component: logo block plus the nav button column.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let on_command = &props.on_command;

    html! {
        <aside class="h-full w-64 bg-[#fff5e9] p-6 border-r border-gray-200 flex flex-col">
            <div class="flex justify-center mb-10">
                <div class="flex items-center gap-3">
                    <img
                        src="/assets/Logo.png"
                        alt="G-Easy Logo"
                        class="w-54 h-54 object-contain"
                    />
                </div>
            </div>

            <nav class="flex flex-col gap-3">
                <SidebarButton
                    active=true
                    icon={IconKind::Home}
                    target={Target::Home}
                    on_command={on_command.clone()}
                />
                <SidebarButton
                    icon={IconKind::Leaf}
                    target={Target::MyLists}
                    on_command={on_command.clone()}
                />
                <SidebarButton
                    icon={IconKind::BookOpen}
                    target={Target::EnterNewWords}
                    on_command={on_command.clone()}
                />
                <SidebarButton
                    icon={IconKind::FileText}
                    target={Target::References}
                    on_command={on_command.clone()}
                />
                <SidebarButton
                    icon={IconKind::User}
                    target={Target::UserProfile}
                    on_command={on_command.clone()}
                />
            </nav>
        </aside>
    }
}

/// Properties for SidebarButton component.
#[derive(Properties, PartialEq)]
struct SidebarButtonProps {
    icon: IconKind,
    target: Target,
    #[prop_or_default]
    active: bool,
    on_command: Callback<Command>,
}

/// One entry in the nav column.
#[function_component(SidebarButton)]
fn sidebar_button(props: &SidebarButtonProps) -> Html {
    let accent = if props.active {
        "bg-orange-400 text-white shadow"
    } else {
        "text-gray-700 hover:bg-orange-300 hover:text-white"
    };
    let class = format!(
        "flex items-center gap-3 px-4 py-3 rounded-lg text-sm font-medium \
         transition-colors duration-200 {accent}"
    );

    let onclick = {
        let on_command = props.on_command.clone();
        let target = props.target;
        Callback::from(move |_| on_command.emit(Command::Navigate(target)))
    };

    html! {
        <button {class} {onclick}>
            <span class="text-lg"><Icon kind={props.icon} /></span>
            { props.target.label() }
        </button>
    }
}
