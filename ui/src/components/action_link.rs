use dioxus::prelude::*;

use crate::Screen;

/// An anchor that navigates between screens by writing the shared screen
/// signal instead of following an href.
#[component]
pub fn ActionLink(state: Signal<Screen>, to: Screen, children: Element) -> Element {
    let mut state = state;
    rsx! {
        a {
            href: "#",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                state.set(to.clone());
            },
            {children}
        }
    }
}
