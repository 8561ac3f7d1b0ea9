use super::routes::use_site_navigator;
use crate::app::components::{Button, ButtonVariant, Card, FeatureItem};
use crate::config::site;
use crate::domain::models::{Glyph, Page, HOME_FEATURES};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let site_nav = use_site_navigator();
    let config = site();

    rsx! {
        section { id: "home", class: "c-banner",
            div { class: "c-banner__frame",
                img {
                    class: "c-banner__image",
                    src: "{config.banner_url}",
                    alt: "{config.banner_alt}",
                    loading: "eager",
                }
            }
        }

        main {
            section { class: "c-section c-section--narrow",
                h2 { class: "c-section__heading", "Welcome to {config.full_name}" }

                div { class: "c-prose",
                    p { class: "c-prose__tagline", "Better skills. More confidence. Safer roads." }
                    p {
                        "At {config.full_name}, we've spent decades coaching drivers to go beyond the basics. As an "
                        strong { "IAM RoadSmart partner" }
                        " and registered charity ({config.charity_number}), we provide expert preparation for the Advanced Driving Test."
                    }

                    Card { title: "What we offer:",
                        div { class: "c-feature-grid",
                            for feature in HOME_FEATURES {
                                FeatureItem { key: "{feature.title}", feature }
                            }
                        }
                    }
                }
            }

            section { id: "training-preview", class: "c-section c-section--tinted",
                div { class: "c-section__inner c-section__inner--centered",
                    h2 { class: "c-section__heading", "The Advanced Driving Course" }
                    p { class: "c-prose",
                        "The Advanced Driving Course will teach you to become a more confident, efficient, and safer driver."
                    }
                    div { class: "c-cta-row",
                        Button {
                            leading: Glyph::BookOpen,
                            onclick: move |_| site_nav.go(Page::Training),
                            "Explore the Course"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            leading: Glyph::MapPin,
                            onclick: move |_| site_nav.go(Page::Centres),
                            "Find a Drive Centre"
                        }
                    }
                }
            }
        }
    }
}
