//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

use crate::compat;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let mut classes = match props.button_type {
        ButtonType::Primary => vec![],
        ButtonType::Secondary => vec!["secondary"],
        ButtonType::Contrast => vec!["contrast"],
    };
    if props.outline {
        classes.push("outline");
    }
    let class_str = classes.join(" ");

    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

/// A compact button that copies its payload to the clipboard and briefly
/// acknowledges the copy.
#[component]
pub fn CopyButton(text_to_copy: String) -> Element {
    let mut copied = use_signal(|| false);

    rsx! {
        button {
            class: "secondary outline",
            style: "padding: 0.05rem 0.45rem; margin: 0; font-size: 0.8rem; width: auto;",
            title: "Copy to clipboard",
            onclick: move |_| {
                let text = text_to_copy.clone();
                spawn(async move {
                    if compat::clipboard_set(text).await {
                        copied.set(true);
                        compat::sleep(std::time::Duration::from_secs(2)).await;
                        copied.set(false);
                    }
                });
            },
            if copied() { "✓" } else { "⧉" }
        }
    }
}
