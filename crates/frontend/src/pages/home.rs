//! Home page component: the composition root.

use ui_state::{Command, HomeState};
use yew::prelude::*;

use crate::components::{
    AboutSection, Banner, Footer, PopupPassword, PracticeSection, Sidebar, ToolsSection, Topbar,
};

/// Home page component.
///
/// Owns the popup-visibility flag and the command handler; both are passed
/// down explicitly, never shared globally. Every stub button ends up here:
/// the handler answers with a placeholder notification until a real
/// navigation/action system takes its place.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let state = use_state(HomeState::new);

    let on_command = Callback::from(|cmd: Command| {
        gloo_dialogs::alert(&format!("{} clicked", cmd.label()));
    });

    let close_popup = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut updated = *state;
            updated.dismiss_popup();
            state.set(updated);
        })
    };

    html! {
        <div class="flex bg-white min-h-screen">
            // Fixed sidebar on the left.
            <div class="fixed top-0 left-0 h-full w-64 z-10">
                <Sidebar on_command={on_command.clone()} />
            </div>

            // Main content, offset past the sidebar.
            <div class="ml-64 flex-1 flex flex-col min-h-screen">
                <div class="px-10 pt-6">
                    <Topbar on_command={on_command.clone()} />
                </div>

                <main class="px-16 pt-4 pb-10 flex-1">
                    <Banner />
                    <AboutSection on_command={on_command.clone()} />
                    <ToolsSection on_command={on_command.clone()} />
                    <PracticeSection on_command={on_command.clone()} />
                </main>

                <Footer />
            </div>

            if state.popup_visible() {
                <PopupPassword on_close={close_popup} />
            }
        </div>
    }
}
