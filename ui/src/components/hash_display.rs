use dioxus::prelude::*;

use crate::components::pico::CopyButton;

/// Abbreviates a 0x-prefixed hash or address for table display, keeping the
/// full value in the tooltip and behind a copy button.
#[component]
pub fn HashDisplay(value: String, as_code: bool) -> Element {
    let abbreviated = if value.len() > 16 {
        format!("{}…{}", &value[..10], &value[value.len() - 6..])
    } else {
        value.clone()
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 0.5rem;",
            if as_code {
                code {
                    title: "{value}",
                    "{abbreviated}"
                }
            } else {
                span {
                    title: "{value}",
                    "{abbreviated}"
                }
            }
            CopyButton {
                text_to_copy: value,
            }
        }
    }
}
