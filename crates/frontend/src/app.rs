//! Main application component.

use yew::prelude::*;

use crate::pages::HomePage;

/// Main application component. The product is a single page, so there is
/// no router; the home page is mounted directly.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <HomePage />
    }
}
