use crate::app::components::Icon;
use crate::config::site;
use crate::domain::models::{Glyph, FOOTER_LINKS};
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let config = site();

    rsx! {
        footer { class: "c-footer",
            div { class: "c-footer__inner",
                div { class: "c-footer__grid",
                    div { class: "c-footer__about",
                        div { class: "c-footer__brand",
                            div { class: "c-logo",
                                "LAM"
                                br {}
                                span { class: "c-logo__sub", "OBS" }
                            }
                            span { class: "c-footer__name", "{config.full_name}" }
                        }
                        p { class: "c-footer__blurb",
                            "Promoting road safety through advanced driving skills in London and the surrounding areas since {config.founded_year}."
                            br {}
                            "Registered Charity No. {config.charity_number}."
                        }
                    }

                    div {
                        h5 { class: "c-footer__heading", "Contact Us" }
                        ul { class: "c-footer__contact",
                            li {
                                Icon { glyph: Glyph::Mail, size: 16, class: "c-footer__contact-icon" }
                                "{config.contact_email}"
                            }
                            li {
                                Icon { glyph: Glyph::Phone, size: 16, class: "c-footer__contact-icon" }
                                "{config.contact_phone}"
                            }
                        }
                    }

                    div {
                        h5 { class: "c-footer__heading", "Follow Us" }
                        div { class: "c-footer__social",
                            for link in config.social.iter() {
                                a {
                                    key: "{link.label}",
                                    href: "{link.href}",
                                    "aria-label": "{link.label}",
                                    Icon { glyph: link.glyph, size: 22 }
                                }
                            }
                        }
                    }
                }

                div { class: "c-footer__bottom",
                    p { "© {config.copyright_year} {config.full_name}. A non-profit organization." }
                    div { class: "c-footer__links",
                        for link in FOOTER_LINKS.iter() {
                            a { key: "{link.label}", href: link.href, "{link.label}" }
                        }
                    }
                }
            }
        }
    }
}
