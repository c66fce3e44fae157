//! "About us" section.

use ui_state::{Command, Target};
use yew::prelude::*;

use crate::components::OutlineButton;

/// Properties for AboutSection component.
#[derive(Properties, PartialEq)]
pub struct AboutSectionProps {
    pub on_command: Callback<Command>,
}

/// "About us" section: blurb, details button, team photo.
#[function_component(AboutSection)]
pub fn about_section(props: &AboutSectionProps) -> Html {
    html! {
        <div class="flex items-center justify-between gap-12 mb-16">
            <div class="max-w-xl flex flex-col justify-between h-full">
                <div>
                    <h2 class="text-2xl font-bold mb-3">{ "About us" }</h2>
                    <p class="text-xs text-600 mb-6 leading-relaxed">
                        { "We build smart tools to help you learn English vocabulary more effectively. \
                           With accurate translations, AI-generated example sentences, and personal word lists, \
                           we make your learning journey easier, faster, and more fun." }
                    </p>
                </div>
                <div class="flex justify-end">
                    <OutlineButton
                        target={Target::AboutDetails}
                        on_command={props.on_command.clone()}
                    />
                </div>
            </div>

            <img
                src="/assets/team.png"
                alt="team"
                class="rounded-3xl w-80 h-56 object-cover shadow"
            />
        </div>
    }
}
