use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Prefix shared by every training course page.
pub const TRAINING_PREFIX: &str = "/training";

/// Registered top-level pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    Training,
    TrainingObserver,
    Centres,
    Events,
    Resources,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Training,
        Page::TrainingObserver,
        Page::Centres,
        Page::Events,
        Page::Resources,
    ];

    /// Path relative to the deployment base path
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Training => "/training",
            Page::TrainingObserver => "/training-observer",
            Page::Centres => "/centres",
            Page::Events => "/events",
            Page::Resources => "/resources",
        }
    }

    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.path() == path)
    }

    pub fn is_training(&self) -> bool {
        self.path().starts_with(TRAINING_PREFIX)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::from_path(s).ok_or_else(|| AppError::UnknownPage(s.to_string()))
    }
}

/// Entry of a navigation dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOption {
    pub name: &'static str,
    pub id: &'static str,
    pub page: Page,
}

/// Top-level navigation entry, optionally carrying a dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub id: &'static str,
    pub page: Page,
    pub dropdown: &'static [NavOption],
}

impl NavItem {
    pub fn has_dropdown(&self) -> bool {
        !self.dropdown.is_empty()
    }

    /// Whether this entry is highlighted for `current_path`.
    ///
    /// Plain entries match exactly. Entries with a dropdown match any path under
    /// the training prefix, so `/training-observer` lights up "Training".
    pub fn is_active(&self, current_path: &str) -> bool {
        current_path == self.page.path()
            || (self.has_dropdown() && current_path.starts_with(TRAINING_PREFIX))
    }
}

const TRAINING_OPTIONS: &[NavOption] = &[
    NavOption {
        name: "Advanced Driver Course",
        id: "training",
        page: Page::Training,
    },
    NavOption {
        name: "National Observer Course",
        id: "training-observer",
        page: Page::TrainingObserver,
    },
];

/// Site navigation, in display order
pub static NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "Home",
        id: "home",
        page: Page::Home,
        dropdown: &[],
    },
    NavItem {
        name: "Training",
        id: "training-root",
        page: Page::Training,
        dropdown: TRAINING_OPTIONS,
    },
    NavItem {
        name: "Drive Centres",
        id: "centres",
        page: Page::Centres,
        dropdown: &[],
    },
    NavItem {
        name: "Events",
        id: "events",
        page: Page::Events,
        dropdown: &[],
    },
    NavItem {
        name: "Resources",
        id: "resources",
        page: Page::Resources,
        dropdown: &[],
    },
];

/// Names of the entries highlighted for `current_path`
pub fn active_items(current_path: &str) -> Vec<&'static str> {
    NAV_ITEMS
        .iter()
        .filter(|item| item.is_active(current_path))
        .map(|item| item.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_page_paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
            assert_eq!(page.to_string().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn test_unknown_path_is_rejected() {
        assert_eq!(Page::from_path("/members"), None);
        assert!(matches!(
            "/members".parse::<Page>(),
            Err(AppError::UnknownPage(path)) if path == "/members"
        ));
    }

    #[test]
    fn test_page_paths_are_unique() {
        let mut seen = HashSet::new();
        for item in NAV_ITEMS {
            assert!(seen.insert(item.id));
            for option in item.dropdown {
                assert!(seen.insert(option.id));
            }
        }

        let paths: HashSet<_> = Page::ALL.iter().map(|p| p.path()).collect();
        assert_eq!(paths.len(), Page::ALL.len());
    }

    #[test]
    fn test_dropdown_entries_share_parent_prefix() {
        for item in NAV_ITEMS.iter().filter(|i| i.has_dropdown()) {
            for option in item.dropdown {
                assert!(option.page.is_training());
                assert!(option.page.path().starts_with(TRAINING_PREFIX));
            }
        }
    }

    #[test]
    fn test_training_observer_highlights_training() {
        assert_eq!(active_items("/training-observer"), vec!["Training"]);
        assert_eq!(active_items("/training"), vec!["Training"]);
    }

    #[test]
    fn test_centres_highlights_only_exact_match() {
        assert_eq!(active_items("/centres"), vec!["Drive Centres"]);

        let training = NAV_ITEMS.iter().find(|i| i.has_dropdown()).unwrap();
        assert!(!training.is_active("/centres"));
    }

    #[test]
    fn test_home_is_exact_match_only() {
        assert_eq!(active_items("/"), vec!["Home"]);
        assert!(active_items("/unknown").is_empty());
    }

    #[test]
    fn test_only_training_has_dropdown() {
        let with_dropdown: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|i| i.has_dropdown())
            .map(|i| i.name)
            .collect();
        assert_eq!(with_dropdown, vec!["Training"]);
    }
}
