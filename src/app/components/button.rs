use super::icon::Icon;
use crate::domain::models::Glyph;
use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    /// Filled brand blue
    Primary,
    /// White with a grey border
    Outline,
    /// Rounded call to action
    Pill,
}

/// Call-to-action button with an optional icon on either side
#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    leading: Option<Glyph>,
    trailing: Option<Glyph>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Primary);

    let variant_class = match variant {
        ButtonVariant::Primary => "c-button--primary",
        ButtonVariant::Outline => "c-button--outline",
        ButtonVariant::Pill => "c-button--pill",
    };

    rsx! {
        button {
            class: "c-button {variant_class}",
            r#type: "button",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if let Some(glyph) = leading {
                Icon { glyph, size: 20 }
            }
            {children}
            if let Some(glyph) = trailing {
                Icon { glyph, size: 20 }
            }
        }
    }
}
