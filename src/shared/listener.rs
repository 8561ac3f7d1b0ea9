//! Document-level event listeners tied to a component's lifetime.
//!
//! `ScopedListener` attaches in its constructor and detaches in `Drop`, so a
//! mount installs exactly one listener and the matching unmount removes it
//! exactly once.

use crate::shared::errors::Result;
use crate::shared::logging;

/// Something listeners can be attached to (the browser document, or a fake in tests)
pub trait ListenerHost {
    type Event: 'static;
    /// Keeps the attached handler alive until detached
    type Registration;

    fn attach(
        &self,
        event: &'static str,
        handler: Box<dyn FnMut(Self::Event)>,
    ) -> Result<Self::Registration>;

    fn detach(&self, event: &'static str, registration: Self::Registration);
}

pub struct ScopedListener<H: ListenerHost> {
    host: H,
    event: &'static str,
    registration: Option<H::Registration>,
}

impl<H: ListenerHost> ScopedListener<H> {
    pub fn install(
        host: H,
        event: &'static str,
        handler: impl FnMut(H::Event) + 'static,
    ) -> Result<Self> {
        let registration = host.attach(event, Box::new(handler))?;
        logging::log_listener_attached(event);

        Ok(Self {
            host,
            event,
            registration: Some(registration),
        })
    }

    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl<H: ListenerHost> Drop for ScopedListener<H> {
    fn drop(&mut self) {
        if let Some(registration) = self.registration.take() {
            self.host.detach(self.event, registration);
            logging::log_listener_detached(self.event);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{event_within, DocumentHost};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::ListenerHost;
    use crate::shared::errors::{AppError, Result};
    use crate::shared::logging;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    /// The page's `document`
    pub struct DocumentHost {
        document: web_sys::Document,
    }

    impl DocumentHost {
        pub fn current() -> Option<Self> {
            let document = web_sys::window()?.document()?;
            Some(Self { document })
        }
    }

    impl ListenerHost for DocumentHost {
        type Event = web_sys::Event;
        type Registration = Closure<dyn FnMut(web_sys::Event)>;

        fn attach(
            &self,
            event: &'static str,
            handler: Box<dyn FnMut(web_sys::Event)>,
        ) -> Result<Self::Registration> {
            let closure = Closure::wrap(handler);
            self.document
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                .map_err(|e| AppError::ListenerError(format!("attach {}: {:?}", event, e)))?;
            Ok(closure)
        }

        fn detach(&self, event: &'static str, registration: Self::Registration) {
            if let Err(e) = self
                .document
                .remove_event_listener_with_callback(event, registration.as_ref().unchecked_ref())
            {
                logging::log_listener_error(event, &format!("{:?}", e));
            }
        }
    }

    /// Whether the event target sits inside the element with id `region_id`.
    /// A missing region counts as outside.
    pub fn event_within(event: &web_sys::Event, region_id: &str) -> bool {
        let Some(region) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(region_id))
        else {
            return false;
        };

        let target = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        region.contains(target.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counts {
        attached: usize,
        detached: usize,
        handlers: Vec<Box<dyn FnMut(bool)>>,
    }

    /// Records attach/detach calls; events are plain "inside region" flags
    #[derive(Clone, Default)]
    struct RecordingHost {
        counts: Rc<RefCell<Counts>>,
        fail_attach: bool,
    }

    impl RecordingHost {
        fn dispatch(&self, inside: bool) {
            for handler in self.counts.borrow_mut().handlers.iter_mut() {
                handler(inside);
            }
        }

        fn attached(&self) -> usize {
            self.counts.borrow().attached
        }

        fn detached(&self) -> usize {
            self.counts.borrow().detached
        }
    }

    impl ListenerHost for RecordingHost {
        type Event = bool;
        type Registration = usize;

        fn attach(&self, event: &'static str, handler: Box<dyn FnMut(bool)>) -> Result<usize> {
            if self.fail_attach {
                return Err(AppError::ListenerError(event.to_string()));
            }
            let mut counts = self.counts.borrow_mut();
            counts.attached += 1;
            counts.handlers.push(handler);
            Ok(counts.handlers.len() - 1)
        }

        fn detach(&self, _event: &'static str, registration: usize) {
            let mut counts = self.counts.borrow_mut();
            counts.detached += 1;
            // Replace rather than remove so other registration indices stay valid
            counts.handlers[registration] = Box::new(|_| {});
        }
    }

    #[test]
    fn test_install_attaches_once_and_drop_detaches_once() {
        let host = RecordingHost::default();
        let listener = ScopedListener::install(host.clone(), "mousedown", |_| {}).unwrap();
        assert_eq!(listener.event(), "mousedown");
        assert_eq!(host.attached(), 1);
        assert_eq!(host.detached(), 0);

        drop(listener);
        assert_eq!(host.attached(), 1);
        assert_eq!(host.detached(), 1);
    }

    #[test]
    fn test_repeated_mounts_do_not_leak() {
        let host = RecordingHost::default();
        for _ in 0..3 {
            let _listener = ScopedListener::install(host.clone(), "mousedown", |_| {}).unwrap();
        }
        assert_eq!(host.attached(), 3);
        assert_eq!(host.detached(), 3);
    }

    #[test]
    fn test_failed_attach_never_detaches() {
        let host = RecordingHost {
            fail_attach: true,
            ..Default::default()
        };
        let result = ScopedListener::install(host.clone(), "mousedown", |_| {});
        assert!(matches!(result, Err(AppError::ListenerError(_))));
        assert_eq!(host.attached(), 0);
        assert_eq!(host.detached(), 0);
    }

    #[test]
    fn test_handler_sees_events_until_dropped() {
        use crate::domain::models::NavMenuState;

        let host = RecordingHost::default();
        let state = Rc::new(RefCell::new(NavMenuState::default()));
        state.borrow_mut().open_dropdown();

        let handler_state = state.clone();
        let listener = ScopedListener::install(host.clone(), "mousedown", move |inside| {
            handler_state.borrow_mut().pointer_down(inside);
        })
        .unwrap();

        host.dispatch(true);
        assert!(state.borrow().dropdown_open);

        host.dispatch(false);
        assert!(!state.borrow().dropdown_open);

        drop(listener);
        state.borrow_mut().open_dropdown();
        host.dispatch(false);
        assert!(state.borrow().dropdown_open);
    }
}
