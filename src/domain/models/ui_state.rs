use super::content::{IpsgaStage, IPSGA_STAGES, STAGE_COUNT};

/// Header menu flags: mobile menu and training dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenuState {
    pub menu_open: bool,
    pub dropdown_open: bool,
}

impl NavMenuState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn open_dropdown(&mut self) {
        self.dropdown_open = true;
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Pointer went down somewhere in the document.
    /// Only presses outside the dropdown region dismiss it.
    pub fn pointer_down(&mut self, inside_dropdown: bool) {
        if !inside_dropdown {
            self.dropdown_open = false;
        }
    }

    /// Applied together with every navigation request
    pub fn close_all(&mut self) {
        self.menu_open = false;
        self.dropdown_open = false;
    }
}

/// Currently displayed IPSGA stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageSelection {
    index: usize,
}

impl StageSelection {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns false (and keeps the current stage) when `index` is out of range
    pub fn select(&mut self, index: usize) -> bool {
        if index >= STAGE_COUNT {
            return false;
        }
        self.index = index;
        true
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    pub fn active(&self) -> &'static IpsgaStage {
        &IPSGA_STAGES[self.index]
    }
}

/// Single show/hide region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_menu_defaults_closed() {
        let state = NavMenuState::default();
        assert!(!state.menu_open);
        assert!(!state.dropdown_open);
    }

    #[test]
    fn test_toggle_menu_twice_restores_closed() {
        let mut state = NavMenuState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert_eq!(state, NavMenuState::default());
    }

    #[test]
    fn test_pointer_down_outside_closes_dropdown() {
        let mut state = NavMenuState::default();
        state.open_dropdown();
        state.pointer_down(false);
        assert!(!state.dropdown_open);
    }

    #[test]
    fn test_pointer_down_inside_keeps_dropdown() {
        let mut state = NavMenuState::default();
        state.open_dropdown();
        state.pointer_down(true);
        assert!(state.dropdown_open);
    }

    #[test]
    fn test_pointer_down_leaves_mobile_menu_alone() {
        let mut state = NavMenuState::default();
        state.toggle_menu();
        state.pointer_down(false);
        assert!(state.menu_open);
    }

    #[test]
    fn test_close_all_after_selection() {
        let mut state = NavMenuState::default();
        state.toggle_menu();
        state.open_dropdown();
        state.close_all();
        assert_eq!(state, NavMenuState::default());
    }

    #[test]
    fn test_stage_selection_defaults_to_information() {
        let selection = StageSelection::default();
        assert_eq!(selection.index(), 0);
        assert_eq!(selection.active().name, "Information");
    }

    #[test]
    fn test_each_stage_selectable_exclusively() {
        let mut selection = StageSelection::default();
        for i in 0..STAGE_COUNT {
            assert!(selection.select(i));
            assert_eq!(selection.active(), &IPSGA_STAGES[i]);
            let visible: Vec<_> = (0..STAGE_COUNT).filter(|&j| selection.is_active(j)).collect();
            assert_eq!(visible, vec![i]);
        }
    }

    #[test]
    fn test_repeated_selection_is_idempotent() {
        let mut selection = StageSelection::default();
        selection.select(3);
        let before = selection;
        selection.select(3);
        assert_eq!(selection, before);
        assert_eq!(selection.active().name, "Gear");
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut selection = StageSelection::default();
        selection.select(2);
        assert!(!selection.select(STAGE_COUNT));
        assert_eq!(selection.index(), 2);
    }

    #[test]
    fn test_disclosure_toggles() {
        let mut topics = Disclosure::default();
        assert!(!topics.is_open());
        assert!(topics.toggle());
        assert!(!topics.toggle());
        assert!(!topics.is_open());
    }
}
