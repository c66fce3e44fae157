//! Tools grid section.

use ui_state::{Command, Target};
use yew::prelude::*;

use crate::components::{Icon, IconKind};

/// Properties for ToolsSection component.
#[derive(Properties, PartialEq)]
pub struct ToolsSectionProps {
    pub on_command: Callback<Command>,
}

/// Tools grid section: heading, blurb, and four circular tool tiles.
#[function_component(ToolsSection)]
pub fn tools_section(props: &ToolsSectionProps) -> Html {
    let on_command = &props.on_command;

    html! {
        <div class="text-center mb-16">
            <h2 class="text-xl font-bold mb-3">{ "G-Easy English" }</h2>
            <p class="text-xs text-600 leading-relaxed max-w-2xl mx-auto mb-8">
                { "We've gathered a collection of smart, easy-to-use tools to support your English learning journey. \
                   Whether you're reviewing vocabulary or practicing pronunciation, everything you need is right here at your fingertips!" }
            </p>
            <div class="grid grid-cols-4 gap-6 justify-items-center">
                <Tool
                    icon={IconKind::Leaf}
                    target={Target::MyLists}
                    on_command={on_command.clone()}
                />
                <Tool
                    icon={IconKind::BookOpen}
                    target={Target::EnterNewWords}
                    on_command={on_command.clone()}
                />
                <Tool
                    icon={IconKind::FileText}
                    target={Target::Reference}
                    on_command={on_command.clone()}
                />
                <Tool
                    icon={IconKind::User}
                    target={Target::UserProfile}
                    on_command={on_command.clone()}
                />
            </div>
        </div>
    }
}

/// Properties for Tool component.
#[derive(Properties, PartialEq)]
struct ToolProps {
    icon: IconKind,
    target: Target,
    on_command: Callback<Command>,
}

/// One circular tool tile.
#[function_component(Tool)]
fn tool(props: &ToolProps) -> Html {
    let onclick = {
        let on_command = props.on_command.clone();
        let target = props.target;
        Callback::from(move |_| on_command.emit(Command::Navigate(target)))
    };

    html! {
        <button
            {onclick}
            class="flex flex-col items-center gap-2 group cursor-pointer focus:outline-none"
        >
            <div class="w-20 h-20 rounded-full bg-gray-100 flex items-center justify-center transition duration-200 group-hover:bg-gray-300">
                <div class="text-2xl text-gray-700 group-hover:text-black">
                    <Icon kind={props.icon} />
                </div>
            </div>
            <span class="text-sm text-gray-600 group-hover:text-black">
                { props.target.label() }
            </span>
        </button>
    }
}
