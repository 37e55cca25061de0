use catalog_core::CharacterSummary;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CharacterCardProps {
    pub character: CharacterSummary,
    /// Ignore clicks while a page load is in flight
    #[props(default = false)]
    pub disabled: bool,
    /// Receives the character id
    pub on_select: EventHandler<String>,
}

/// Grid card: image, name, status, species.
#[component]
pub fn CharacterCard(props: CharacterCardProps) -> Element {
    let character = &props.character;
    let id = character.id.clone();
    let disabled = props.disabled;

    rsx! {
        article {
            class: if disabled { "character-card character-card--disabled" } else { "character-card" },
            onclick: move |_| {
                if !disabled {
                    props.on_select.call(id.clone());
                }
            },

            div { class: "card-image",
                img { src: "{character.image}", alt: "{character.name}", loading: "lazy" }
            }
            div { class: "card-body",
                h3 { class: "card-name", title: "{character.name}", "{character.name}" }
                p { class: "card-meta",
                    span { class: "status-dot status-dot--{character.status.as_str().to_lowercase()}" }
                    "{character.status}"
                }
                p { class: "card-meta", "{character.species}" }
            }
        }
    }
}
