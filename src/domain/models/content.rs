//! Static page content.
//!
//! Everything here is rendered in declaration order; nothing is mutated at runtime.

use serde::{Deserialize, Serialize};

/// Vector icons referenced by name from content and layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Search,
    ChevronUp,
    ChevronDown,
    Menu,
    Close,
    MapPin,
    BookOpen,
    Users,
    Award,
    Folders,
    Phone,
    Mail,
    ArrowRight,
    Facebook,
    X,
    Instagram,
}

/// Home page "What we offer" highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
}

/// One stage of the IPSGA system of car control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpsgaStage {
    pub letter: char,
    pub name: &'static str,
    pub content: &'static str,
}

/// Group of subjects covered by one or more observed drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveTopic {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const HOME_FEATURES: [Feature; 4] = [
    Feature {
        title: "Expert Experience",
        description: "Prepare for your Advanced Test with local experts.",
        glyph: Glyph::Award,
    },
    Feature {
        title: "Further Advanced Training",
        description: "Train towards National Observer or IAM Masters.",
        glyph: Glyph::BookOpen,
    },
    Feature {
        title: "Member Resources",
        description: "Manage bookings and membership online easily.",
        glyph: Glyph::Folders,
    },
    Feature {
        title: "Driving Community",
        description: "Join skilled drivers and attend social events.",
        glyph: Glyph::Users,
    },
];

/// What an associate should be able to do by test day
pub const COURSE_AIMS: [&str; 3] = [
    "To a very high level of safety, with a level of driving skill and technique based on the same principles taught to police drivers.",
    "Ensuring a high level of passenger comfort & confidence.",
    "Enabling the vehicle to be maneuvered with accuracy and safety, additionally reducing wear and tear on the vehicle.",
];

pub const STAGE_COUNT: usize = 5;

pub const IPSGA_STAGES: [IpsgaStage; STAGE_COUNT] = [
    IpsgaStage {
        letter: 'I',
        name: "Information",
        content: "Use all the information around you - in front, behind and to the side, to determine the hazards that exist, or may exist in the future. If you need to position your car differently on the road, consider whether a signal is appropriate to warn other road users.",
    },
    IpsgaStage {
        letter: 'P',
        name: "Position",
        content: "After giving a clear signal (if required), position your car in the appropriate part of the carriageway. Check your mirrors before committing yourself to the new position.",
    },
    IpsgaStage {
        letter: 'S',
        name: "Speed",
        content: "Now alter your road speed, based on the hazard. Usually this will be by using the brakes or easing off the accelerator, but in some cases may require further acceleration instead. Remember to continue your observation and use your mirrors as your speed & location changes.",
    },
    IpsgaStage {
        letter: 'G',
        name: "Gear",
        content: "In most cases, only now will you consider changing gear, if required, to match the new road speed.",
    },
    IpsgaStage {
        letter: 'A',
        name: "Acceleration",
        content: "Once past the hazard and it is safe to do so, continue at a suitable & appropriate speed, accelerating as required.",
    },
];

pub const DRIVE_TOPICS: [DriveTopic; 6] = [
    DriveTopic {
        title: "Drive 1: Introduction",
        items: &[
            "Advanced driving demonstration",
            "Pre-drive checks",
            "The human factor (Chapter 1)",
            "IPSGA (Chapter 2)",
            "Core Driving Skills (Chapter 3)",
        ],
    },
    DriveTopic {
        title: "Drive 2:",
        items: &["Bends (Chapter 4)", "Junctions & Roundabouts (Chapter 5)"],
    },
    DriveTopic {
        title: "Drive 3:",
        items: &[
            "Overtaking (Chapter 6)",
            "Motorways & dual carriageways (Chapter 7)",
        ],
    },
    DriveTopic {
        title: "Drive 4:",
        items: &["Manoeuvring (Chapter 8)"],
    },
    DriveTopic {
        title: "Drive 5:",
        items: &["Spoken thoughts (Chapter 9)"],
    },
    DriveTopic {
        title: "Drive 6-8:",
        items: &["Tailored drives", "Polish and sparkle", "Mock test"],
    },
];

pub const FOOTER_LINKS: [FooterLink; 3] = [
    FooterLink { label: "Privacy Policy", href: "#" },
    FooterLink { label: "Cookies", href: "#" },
    FooterLink { label: "Volunteer Login", href: "#" },
];

/// Left offset, in percent, of the connector arrow under stage `index`
pub fn stage_marker_offset(index: usize) -> usize {
    index * (100 / STAGE_COUNT) + 100 / (STAGE_COUNT * 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipsga_order_spells_ipsga() {
        let letters: String = IPSGA_STAGES.iter().map(|s| s.letter).collect();
        assert_eq!(letters, "IPSGA");
        assert_eq!(IPSGA_STAGES[0].name, "Information");
    }

    #[test]
    fn test_stage_names_start_with_their_letter() {
        for stage in IPSGA_STAGES {
            assert!(stage.name.starts_with(stage.letter));
            assert!(!stage.content.is_empty());
        }
    }

    #[test]
    fn test_drive_topics_fixed_order() {
        let titles: Vec<_> = DRIVE_TOPICS.iter().map(|t| t.title).collect();
        assert_eq!(
            titles,
            vec![
                "Drive 1: Introduction",
                "Drive 2:",
                "Drive 3:",
                "Drive 4:",
                "Drive 5:",
                "Drive 6-8:",
            ]
        );
        assert!(DRIVE_TOPICS.iter().all(|t| !t.items.is_empty()));
    }

    #[test]
    fn test_stage_marker_offset_centres_under_button() {
        assert_eq!(stage_marker_offset(0), 10);
        assert_eq!(stage_marker_offset(2), 50);
        assert_eq!(stage_marker_offset(4), 90);
    }

    #[test]
    fn test_glyph_serializes_kebab_case() {
        let json = serde_json::to_string(&Glyph::ChevronDown).unwrap();
        assert_eq!(json, "\"chevron-down\"");
    }
}
