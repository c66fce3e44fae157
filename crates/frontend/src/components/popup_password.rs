//! Password-change popup dialog.

use ui_state::PasswordDraft;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Properties for PopupPassword component.
#[derive(Properties, PartialEq)]
pub struct PopupPasswordProps {
    /// Invoked when the popup wants to close; the owner flips its
    /// visibility flag.
    pub on_close: Callback<()>,
}

/// Modal overlay holding the new-password field.
///
/// Save is a stub: it logs the draft to the console and asks the owner to
/// dismiss the popup. No credential is updated and nothing is persisted.
#[function_component(PopupPassword)]
pub fn popup_password(props: &PopupPasswordProps) -> Html {
    let draft = use_state(PasswordDraft::new);

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*draft).clone();
            updated.set(input.value());
            draft.set(updated);
        })
    };

    let save = {
        let draft = draft.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            web_sys::console::log_1(&format!("New password: {}", draft.value()).into());
            on_close.emit(());
        })
    };

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-40 flex items-center justify-center z-50">
            <div class="bg-white rounded-xl shadow-xl p-6 w-96 relative animate-fade-in">
                <div class="flex items-center gap-4 mb-4">
                    <img src="/assets/Logo.png" alt="Icon" class="w-36 h-12" />
                    <div>
                        <h2 class="text-orange-500 font-bold text-lg">{ "Good Morning!" }</h2>
                        <p class="text-sm text-gray-600">
                            { "Let's learn English with G-easy every day" }
                        </p>
                    </div>
                </div>

                <label class="block text-sm font-semibold mb-2 text-gray-700">
                    { "Enter new password" }
                </label>
                <input
                    type="password"
                    value={draft.value().to_string()}
                    {oninput}
                    class="w-full px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400"
                    placeholder="Password"
                />

                <button
                    onclick={save}
                    class="mt-4 w-full bg-orange-400 text-white py-2 rounded-md font-semibold hover:bg-orange-500"
                >
                    { "Save" }
                </button>
            </div>
        </div>
    }
}
