use super::home::Home;
use super::stubs::{Centres, Events, NotFound, Resources};
use super::training::{Training, TrainingObserver};
use crate::app::layouts::{Footer, Navbar};
use crate::domain::models::Page;
use crate::shared::hooks::{use_nav_state, use_scroll_reset, NavState};
use crate::shared::logging;

use dioxus::prelude::*;
use dioxus::document;
use dioxus::router::RouterContext;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},

    // Both training courses share the course page
    #[route("/training")]
    Training {},
    #[route("/training-observer")]
    TrainingObserver {},

    // Placeholder pages awaiting content
    #[route("/centres")]
    Centres {},
    #[route("/events")]
    Events {},
    #[route("/resources")]
    Resources {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::Training => Route::Training {},
            Page::TrainingObserver => Route::TrainingObserver {},
            Page::Centres => Route::Centres {},
            Page::Events => Route::Events {},
            Page::Resources => Route::Resources {},
        }
    }
}

impl Route {
    /// Registered page for this route, `None` for the not-found catch-all
    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Home {} => Some(Page::Home),
            Route::Training {} => Some(Page::Training),
            Route::TrainingObserver {} => Some(Page::TrainingObserver),
            Route::Centres {} => Some(Page::Centres),
            Route::Events {} => Some(Page::Events),
            Route::Resources {} => Some(Page::Resources),
            Route::NotFound { .. } => None,
        }
    }
}

/// Navigation handle that also closes the header menus.
/// Pushing the route and closing the menus happen in the same event handler,
/// so the next render never shows a stale open menu.
#[derive(Clone, Copy)]
pub struct SiteNavigator {
    router: RouterContext,
    nav: NavState,
}

impl SiteNavigator {
    pub fn go(&self, page: Page) {
        let mut nav = self.nav;
        // Only external targets can fail, and every page is internal
        if let Some(failure) = self.router.push(Route::from(page)) {
            logging::log_navigation_failed(page.path(), &failure.0);
        }
        nav.close_all();
        logging::log_navigation(page.path());
    }
}

/// Must be called below `SiteLayout`, which provides the `NavState` context
pub fn use_site_navigator() -> SiteNavigator {
    let router = use_hook(dioxus::router::router);
    let nav = use_context::<NavState>();
    SiteNavigator { router, nav }
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("LAM Observers site initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn SiteLayout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let route = use_route::<Route>();
    use_scroll_reset(route.to_string());

    let nav = use_nav_state();
    use_context_provider(|| nav);

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-site",
            Navbar {}

            div { class: "c-site__content",
                Outlet::<Route> {}
            }

            Footer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NavMenuState;
    use crate::shared::hooks::ScrollReset;
    use dioxus::history::{History, MemoryHistory};
    use dioxus::router::root_router;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Mount the whole site at `path`, recording the path of every scroll reset
    fn mount_site(path: &str) -> (VirtualDom, Rc<RefCell<Vec<String>>>) {
        let resets = Rc::new(RefCell::new(Vec::new()));
        let recorded = resets.clone();
        let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path));

        let mut dom = VirtualDom::new(App)
            .with_root_context(history)
            .with_root_context(ScrollReset::new(move |path| {
                recorded.borrow_mut().push(path.to_string());
            }));
        dom.rebuild_in_place();
        settle(&mut dom);
        (dom, resets)
    }

    /// Run queued effects and rerenders until nothing is left to do
    fn settle(dom: &mut VirtualDom) {
        for _ in 0..8 {
            dom.render_immediate_to_vec();
        }
    }

    fn open_menus(dom: &VirtualDom) -> NavState {
        dom.in_scope(ScopeId::ROOT, || {
            let mut nav = NavState {
                menu: Signal::new(NavMenuState::default()),
            };
            nav.toggle_menu();
            nav.open_dropdown();
            nav
        })
    }

    fn go(dom: &mut VirtualDom, nav: NavState, page: Page) {
        dom.in_scope(ScopeId::ROOT, || {
            let router = root_router().unwrap();
            SiteNavigator { router, nav }.go(page);
        });
        settle(dom);
    }

    fn current_route(dom: &VirtualDom) -> Route {
        dom.in_scope(ScopeId::ROOT, || root_router().unwrap().current::<Route>())
    }

    #[test]
    fn test_every_page_parses_to_its_route() {
        for page in Page::ALL {
            let route: Route = page.path().parse().unwrap();
            assert_eq!(route, Route::from(page));
            assert_eq!(route.page(), Some(page));
        }
    }

    #[test]
    fn test_route_display_matches_page_path() {
        for page in Page::ALL {
            assert_eq!(Route::from(page).to_string(), page.path());
        }
    }

    #[test]
    fn test_unregistered_path_is_not_found() {
        let route: Route = "/members/login".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
        assert_eq!(route.page(), None);
    }

    #[test]
    fn test_training_routes_are_distinct() {
        let training: Route = "/training".parse().unwrap();
        let observer: Route = "/training-observer".parse().unwrap();
        assert_ne!(training, observer);
        assert!(observer.page().is_some_and(|p| p.is_training()));
    }

    #[test]
    fn test_go_pushes_route_and_closes_menus() {
        let (mut dom, _) = mount_site("/");
        let nav = open_menus(&dom);
        assert!(dom.in_scope(ScopeId::ROOT, || nav.menu_open() && nav.dropdown_open()));

        go(&mut dom, nav, Page::TrainingObserver);

        assert_eq!(current_route(&dom), Route::TrainingObserver {});
        dom.in_scope(ScopeId::ROOT, || {
            assert!(!nav.menu_open());
            assert!(!nav.dropdown_open());
        });
        assert!(dioxus_ssr::render(&dom).contains("Training Course"));
    }

    #[test]
    fn test_scroll_resets_on_mount_and_every_route_change() {
        let (mut dom, resets) = mount_site("/");
        assert_eq!(*resets.borrow(), vec!["/".to_string()]);

        let nav = open_menus(&dom);
        go(&mut dom, nav, Page::Training);
        go(&mut dom, nav, Page::Centres);

        assert_eq!(
            *resets.borrow(),
            vec!["/".to_string(), "/training".to_string(), "/centres".to_string()]
        );
    }

    #[test]
    fn test_unregistered_path_renders_not_found_in_layout() {
        let (dom, resets) = mount_site("/members/login");
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("c-navbar"));
        assert!(html.contains("Back to the home page"));
        assert_eq!(*resets.borrow(), vec!["/members/login".to_string()]);
    }
}
