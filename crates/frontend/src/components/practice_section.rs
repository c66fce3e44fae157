//! Practice section.

use ui_state::{Command, Target};
use yew::prelude::*;

use crate::components::OutlineButton;

/// Properties for PracticeSection component.
#[derive(Properties, PartialEq)]
pub struct PracticeSectionProps {
    pub on_command: Callback<Command>,
}

/// Practice section: blurb, list button, practice illustration.
#[function_component(PracticeSection)]
pub fn practice_section(props: &PracticeSectionProps) -> Html {
    html! {
        <div class="flex items-center justify-between gap-12 mb-20">
            <div class="max-w-xl flex flex-col justify-between h-full">
                <div>
                    <h2 class="text-xl font-bold mb-3">{ "Practice English Vocabularies" }</h2>
                    <p class="text-xs text-600 leading-relaxed mb-6">
                        { "G-Easy helps you practice your English vocabularies every time, everywhere!" }
                    </p>
                </div>
                <div class="flex justify-end mt-8">
                    <OutlineButton
                        target={Target::CheckMyLists}
                        on_command={props.on_command.clone()}
                    />
                </div>
            </div>
            <img
                src="/assets/practice.png"
                alt="practice"
                class="rounded-3xl w-80 h-56 object-cover shadow"
            />
        </div>
    }
}
