//! Structured logging for the site
//!
//! Thin helpers over `tracing` so every UI transition carries the same
//! `operation` field. In the browser these land in the Dioxus logger, on the
//! server in the `tracing_subscriber` installed by `main`.

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Routing,
    Navigation,
    Dropdown,
    StageSelection,
    Disclosure,
    Listener,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Routing => "routing",
            LogOperation::Navigation => "navigation",
            LogOperation::Dropdown => "dropdown",
            LogOperation::StageSelection => "stage_selection",
            LogOperation::Disclosure => "disclosure",
            LogOperation::Listener => "listener",
            LogOperation::Config => "config",
        }
    }
}

/// Log a route change (scroll has been reset)
pub fn log_route_change(path: &str) {
    tracing::debug!(
        operation = LogOperation::Routing.as_str(),
        path = path,
        "Route changed, scroll reset"
    );
}

/// Log a path that matched no registered page
pub fn log_unknown_route(path: &str) {
    tracing::warn!(
        operation = LogOperation::Routing.as_str(),
        path = path,
        "No page registered for path"
    );
}

/// Log a navigation request from the header or a call to action
pub fn log_navigation(to: &str) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        to = to,
        "Navigating"
    );
}

/// Log a navigation the router refused
pub fn log_navigation_failed(to: &str, reason: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        to = to,
        reason = reason,
        "Navigation failed"
    );
}

/// Log the dropdown being dismissed by a press outside it
pub fn log_dropdown_dismissed() {
    tracing::trace!(
        operation = LogOperation::Dropdown.as_str(),
        "Dropdown dismissed by outside press"
    );
}

/// Log an IPSGA stage selection
pub fn log_stage_selected(index: usize, name: &str) {
    tracing::debug!(
        operation = LogOperation::StageSelection.as_str(),
        index = index,
        stage = name,
        "Stage selected"
    );
}

/// Log an accordion toggle
pub fn log_disclosure_toggled(region: &str, open: bool) {
    tracing::debug!(
        operation = LogOperation::Disclosure.as_str(),
        region = region,
        open = open,
        "Disclosure toggled"
    );
}

/// Log listener installation
pub fn log_listener_attached(event: &str) {
    tracing::debug!(
        operation = LogOperation::Listener.as_str(),
        event = event,
        "Document listener attached"
    );
}

/// Log listener release
pub fn log_listener_detached(event: &str) {
    tracing::debug!(
        operation = LogOperation::Listener.as_str(),
        event = event,
        "Document listener detached"
    );
}

/// Log a listener that could not be attached or detached
pub fn log_listener_error(event: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Listener.as_str(),
        event = event,
        error = error,
        "Document listener operation failed"
    );
}

/// Log a site config that failed to parse
pub fn log_config_fallback(error: &str) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        error = error,
        "Invalid site config, using defaults"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Routing.as_str(), "routing");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::Dropdown.as_str(), "dropdown");
        assert_eq!(LogOperation::StageSelection.as_str(), "stage_selection");
        assert_eq!(LogOperation::Disclosure.as_str(), "disclosure");
        assert_eq!(LogOperation::Listener.as_str(), "listener");
        assert_eq!(LogOperation::Config.as_str(), "config");
    }
}
