use crate::app::components::{BulletList, Button, ButtonVariant, Card, DriveTopics, StageSelector};
use crate::domain::models::{Glyph, COURSE_AIMS};
use crate::shared::hooks::use_training_state;
use dioxus::prelude::*;

/// `/training`: the Advanced Driver Course
#[component]
pub fn Training() -> Element {
    rsx! { TrainingPage {} }
}

/// `/training-observer`: the National Observer Course currently shares the course page
#[component]
pub fn TrainingObserver() -> Element {
    rsx! { TrainingPage {} }
}

#[component]
fn TrainingPage() -> Element {
    let state = use_training_state();

    rsx! {
        section { class: "c-hero",
            div { class: "c-hero__overlay" }
            h1 { class: "c-hero__title", "Training Course" }
        }

        main { class: "c-page",
            section { class: "c-section",
                div { class: "c-intro",
                    h2 { class: "c-intro__lead",
                        "The IAM Roadsmart Advanced Driver course is the UK's leading advanced driving qualification."
                    }
                    p { class: "c-intro__tagline",
                        "Upgrade your skills to become a more confident, efficient, and safer driver!"
                    }
                }

                div { class: "c-prose",
                    p {
                        "LAM delivers the Advanced Driving Course on behalf of the IAM and follows the course material set out in the "
                        a { class: "c-prose__link", href: "#", "ADC Handbook" }
                        " which contains all the information required for the Advanced Test. We supplement this information using further knowledge from "
                        a { class: "c-prose__link", href: "#", "Roadcraft: The Police Driver's Handbook" }
                        "."
                    }

                    Card { title: "By the time you take the Advanced Driving Test, the group's aim is that you will be able to drive:",
                        BulletList { items: COURSE_AIMS.to_vec() }
                    }
                }
            }

            section { id: "ipsga", class: "c-section c-section--tinted",
                div { class: "c-section__inner",
                    h2 { class: "c-section__heading", "The System of Car Control - IPSGA" }
                    div { class: "c-prose",
                        p { class: "c-prose__strong",
                            "Advanced driving isn't about driving faster; it's about control."
                        }
                        p {
                            "The system of car control we use is referred to as the "
                            strong { "IPSGA" }
                            " framework, the same system used by police and emergency services, to manage hazards and make safe progress."
                        }
                        p {
                            "IPSGA is the backbone of the skills for advanced driving; it is fully documented in the ADC Handbook and forms the basis of the guidance offered by our observers."
                        }
                    }

                    p { class: "c-section__hint", "Click the stages below to explore the system:" }
                    StageSelector { state }
                }
            }

            section { id: "observed-drives", class: "c-section",
                div { class: "c-section__inner",
                    h2 { class: "c-section__heading", "Observed Drives" }
                    div { class: "c-prose",
                        p {
                            "Our team of observers will help you to apply the skills in the ADC Handbook through 1-to-1 driving sessions, which typically last an hour and a half and will take you on a wide range of roads."
                        }
                        p {
                            "Each drive will cover a section of the ADC, where the observer will help explain the theory as well as how it is applied to real-driving conditions. We aim to get our associates test ready within 8 observed drives."
                        }
                    }

                    DriveTopics { state }
                }
            }

            section { id: "test", class: "c-section c-section--tinted",
                div { class: "c-section__inner",
                    h2 { class: "c-section__heading", "The Test" }
                    div { class: "c-prose",
                        p {
                            "At the end of the course, when you are confident and have been recommended to take the advanced test. You will then be booked take the Advanced Test to be conducted by an external IAM Examiner."
                        }
                        p {
                            "The assessment will last approximately 90 minutes with 1 hour for driving across a wide variety of roads, while the examiner marks you on all the key skills covered within the ADC. At the conclusion of your drive, you will be awarded a \"pass\" or \"fail\"; those who exceed in every skill will be awarded a \"F1rst\" the highest grade."
                        }
                        p { "With a pass you will become a full member of the IAM and of LAM." }
                    }
                }
            }

            div { class: "c-cta-row c-cta-row--spaced",
                Button {
                    variant: ButtonVariant::Pill,
                    trailing: Glyph::ArrowRight,
                    "Start Your Course"
                }
            }
        }
    }
}
