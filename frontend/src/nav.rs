use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;
use web_sys::{window, MouseEvent};
use log::{debug, warn};

use crate::config::SiteVariant;
use crate::error::UiError;
use crate::scroll_lock::{BodyScroll, ScrollLock, ScrollSurface};
use crate::Route;

/// Open/closed state of the mobile menu. Scroll stays locked exactly while open,
/// and dropping the menu always releases the lock.
pub struct NavMenu<S: ScrollSurface + Clone> {
    surface: S,
    lock: Option<ScrollLock<S>>,
}

impl<S: ScrollSurface + Clone> NavMenu<S> {
    pub fn new(surface: S) -> Self {
        Self { surface, lock: None }
    }

    pub fn is_open(&self) -> bool {
        self.lock.is_some()
    }

    pub fn toggle(&mut self) {
        if self.lock.take().is_none() {
            self.lock = Some(ScrollLock::acquire(self.surface.clone()));
        }
    }

    pub fn close(&mut self) {
        self.lock = None;
    }
}

/// Where a nav entry points: one of the variant's two pages, or a section
/// of its landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Landing,
    ApiDocs,
    Section(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub title: &'static str,
    pub target: NavTarget,
}

const CLASSIC_LINKS: &[NavLink] = &[
    NavLink { title: "Home", target: NavTarget::Landing },
    NavLink { title: "Features", target: NavTarget::Section("features") },
    NavLink { title: "API Docs", target: NavTarget::ApiDocs },
    NavLink { title: "Sign Up", target: NavTarget::Section("sign-up") },
];

const REDESIGN_LINKS: &[NavLink] = &[
    NavLink { title: "Features", target: NavTarget::Section("features") },
    NavLink { title: "API", target: NavTarget::Section("api-usage") },
    NavLink { title: "Docs", target: NavTarget::ApiDocs },
];

pub fn nav_links(variant: SiteVariant) -> &'static [NavLink] {
    match variant {
        SiteVariant::Classic => CLASSIC_LINKS,
        SiteVariant::Redesign => REDESIGN_LINKS,
    }
}

pub fn landing_route(variant: SiteVariant) -> Route {
    match variant {
        SiteVariant::Classic => Route::Classic,
        SiteVariant::Redesign => Route::Home,
    }
}

/// The router page behind a target, `None` for landing-page sections.
pub fn page_route(variant: SiteVariant, target: NavTarget) -> Option<Route> {
    match (variant, target) {
        (_, NavTarget::Landing) => Some(landing_route(variant)),
        (SiteVariant::Classic, NavTarget::ApiDocs) => Some(Route::ClassicApiDocs),
        (SiteVariant::Redesign, NavTarget::ApiDocs) => Some(Route::ApiDocs),
        (_, NavTarget::Section(_)) => None,
    }
}

/// Href for a landing-page section. On the landing page it is a plain
/// fragment; elsewhere it names the landing path so the link still works
/// when opened in a new tab.
pub fn section_href(variant: SiteVariant, section: &str, on_landing: bool) -> String {
    if on_landing {
        format!("#{}", section)
    } else {
        format!("{}#{}", landing_route(variant).to_path(), section)
    }
}

/// The id named by a `location.hash` value, if any.
pub fn section_id(hash: &str) -> Option<&str> {
    hash.strip_prefix('#').filter(|id| !id.is_empty())
}

fn scroll_to_section_or_top() {
    let Some(window) = window() else {
        return;
    };
    let hash = window.location().hash().unwrap_or_default();
    let target = section_id(&hash).and_then(|id| window.document()?.get_element_by_id(id));
    match target {
        Some(element) => element.scroll_into_view(),
        None => window.scroll_to_with_x_and_y(0.0, 0.0),
    }
}

/// Landing pages open at the section named in the URL, or at the top.
#[hook]
pub fn use_landing_scroll() {
    use_effect_with_deps(
        move |_| {
            scroll_to_section_or_top();
            || ()
        },
        (),
    );
}

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
    pub variant: SiteVariant,
    pub section: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Link to a landing-page section. Off the landing page it routes back in
/// the app and then sets the fragment, instead of reloading the site.
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let landing = landing_route(props.variant);
    let on_landing = use_route::<Route>() == Some(landing);
    let navigator = use_navigator();
    let href = section_href(props.variant, props.section, on_landing);

    let onclick = {
        let section = props.section;
        Callback::from(move |e: MouseEvent| {
            if on_landing {
                return;
            }
            // Without a router the plain href still works.
            let Some(navigator) = navigator.clone() else {
                return;
            };
            e.prevent_default();
            navigator.push(&landing);
            if let Some(window) = window() {
                if let Err(err) = window.location().set_hash(section) {
                    warn!("could not jump to #{}: {}", section, UiError::describe(&err));
                }
            }
        })
    };

    html! {
        <a {href} class={props.class.clone()} {onclick}>{ for props.children.iter() }</a>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub variant: SiteVariant,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let variant = props.variant;
    let landing = landing_route(variant);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = scroll_y > variant.nav_scroll_threshold();

    let menu = use_mut_ref(|| NavMenu::new(BodyScroll));
    let update = use_force_update();

    {
        let menu = menu.clone();
        use_unmount(move || menu.borrow_mut().close());
    }

    let toggle_menu = {
        let menu = menu.clone();
        let update = update.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.borrow_mut().toggle();
            debug!("nav menu open={}", menu.borrow().is_open());
            update.force_update();
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.borrow_mut().close();
            update.force_update();
        })
    };

    let open = menu.borrow().is_open();
    let links = nav_links(variant);

    let brand = match variant {
        SiteVariant::Classic => html! {
            <Link<Route> to={landing} classes="pp-nav-logo">
                <img src="/logo.png" alt="Perfect Pose Logo" width="80" height="26" />
            </Link<Route>>
        },
        SiteVariant::Redesign => html! {
            <Link<Route> to={landing} classes="pp-nav-logo">
                <img src="/logo.png" alt="Perfect Pose Logo" width="32" height="32" />
                <span class="pp-nav-brand">{"Perfect Pose"}</span>
            </Link<Route>>
        },
    };

    let render_link = |link: &NavLink| match page_route(variant, link.target) {
        Some(route) => html! { <Link<Route> to={route}>{ link.title }</Link<Route>> },
        None => match link.target {
            NavTarget::Section(section) => html! {
                <SectionLink {variant} {section}>{ link.title }</SectionLink>
            },
            NavTarget::Landing | NavTarget::ApiDocs => html! {},
        },
    };

    let cta = || match variant {
        SiteVariant::Redesign => html! {
            <SectionLink {variant} section="sign-up" class={classes!("pp-nav-cta")}>
                {"Get Started"}
            </SectionLink>
        },
        SiteVariant::Classic => html! {},
    };

    html! {
        <>
            <nav class={classes!("pp-nav", (scrolled || open).then(|| "scrolled"))}>
                <div class="pp-nav-content">
                    { brand }
                    <ul class="pp-nav-links">
                        { for links.iter().map(|link| html! {
                            <li key={link.title}>{ render_link(link) }</li>
                        }) }
                    </ul>
                    <div class="pp-nav-actions">{ cta() }</div>
                    <button
                        class={classes!("pp-burger", open.then(|| "open"))}
                        aria-label="Toggle menu"
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>
            {
                if open {
                    html! {
                        <div class="pp-mobile-menu">
                            <ul>
                                { for links.iter().map(|link| html! {
                                    <li key={link.title} onclick={close_menu.clone()}>{ render_link(link) }</li>
                                }) }
                                <li onclick={close_menu.clone()}>{ cta() }</li>
                            </ul>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .pp-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 20px 0;
                    background: transparent;
                    backdrop-filter: blur(10px);
                    -webkit-backdrop-filter: blur(10px);
                    transition: all 0.3s ease;
                }
                .pp-nav.scrolled {
                    background: rgba(0, 0, 0, 0.8);
                    padding: 12px 0;
                }
                .pp-nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .pp-nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                }
                .pp-nav-brand {
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 600;
                }
                .pp-nav-links {
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .pp-nav-links a {
                    position: relative;
                    color: #fff;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .pp-nav-links a::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    bottom: -4px;
                    height: 2px;
                    width: 0;
                    background: #60a5fa;
                    transition: width 0.3s;
                }
                .pp-nav-links a:hover { color: #60a5fa; }
                .pp-nav-links a:hover::after { width: 100%; }
                .pp-nav-cta {
                    padding: 0.625rem 1.25rem;
                    background: #2563eb;
                    color: #fff;
                    border-radius: 9999px;
                    font-weight: 600;
                    text-decoration: none;
                    transition: background 0.3s;
                }
                .pp-nav-cta:hover { background: #1d4ed8; }
                .pp-burger {
                    display: none;
                    position: relative;
                    z-index: 50;
                    width: 24px;
                    height: 24px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .pp-burger span {
                    position: absolute;
                    left: 0;
                    width: 100%;
                    height: 2px;
                    background: #fff;
                    transition: transform 0.3s, opacity 0.3s;
                }
                .pp-burger span:nth-child(1) { top: 25%; }
                .pp-burger span:nth-child(2) { top: 50%; }
                .pp-burger span:nth-child(3) { top: 75%; }
                .pp-burger.open span:nth-child(1) { transform: translateY(5px) rotate(45deg); }
                .pp-burger.open span:nth-child(2) { opacity: 0; }
                .pp-burger.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                .pp-mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    background: rgba(0, 0, 0, 0.95);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: ppMenuIn 0.3s ease-in-out;
                }
                .pp-mobile-menu ul {
                    list-style: none;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                    padding: 0;
                }
                .pp-mobile-menu a {
                    color: #fff;
                    font-size: 1.875rem;
                    font-weight: 300;
                    text-decoration: none;
                }
                .pp-mobile-menu a:hover { color: #60a5fa; }
                @keyframes ppMenuIn {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 768px) {
                    .pp-nav-links, .pp-nav-actions { display: none; }
                    .pp-burger { display: block; }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_lock::tests::RecordingSurface;

    #[test]
    fn toggling_even_times_leaves_scroll_unlocked() {
        let surface = RecordingSurface::default();
        let mut menu = NavMenu::new(surface.clone());
        for _ in 0..4 {
            menu.toggle();
        }
        assert!(!menu.is_open());
        assert!(!surface.suppressed.get());
    }

    #[test]
    fn toggling_odd_times_leaves_scroll_locked() {
        let surface = RecordingSurface::default();
        let mut menu = NavMenu::new(surface.clone());
        for _ in 0..3 {
            menu.toggle();
        }
        assert!(menu.is_open());
        assert!(surface.suppressed.get());
    }

    #[test]
    fn dropping_open_menu_unlocks_scroll() {
        let surface = RecordingSurface::default();
        let mut menu = NavMenu::new(surface.clone());
        menu.toggle();
        assert!(surface.suppressed.get());
        drop(menu);
        assert!(!surface.suppressed.get());
    }

    #[test]
    fn close_is_idempotent() {
        let surface = RecordingSurface::default();
        let mut menu = NavMenu::new(surface.clone());
        menu.close();
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(*surface.calls.borrow(), vec![true, false]);
    }

    #[test]
    fn sections_resolve_relative_to_landing() {
        assert_eq!(section_href(SiteVariant::Redesign, "features", true), "#features");
        assert_eq!(section_href(SiteVariant::Redesign, "features", false), "/#features");
        assert_eq!(section_href(SiteVariant::Classic, "sign-up", false), "/classic#sign-up");
    }

    #[test]
    fn pages_resolve_to_the_variant_routes() {
        assert_eq!(page_route(SiteVariant::Classic, NavTarget::ApiDocs), Some(Route::ClassicApiDocs));
        assert_eq!(page_route(SiteVariant::Redesign, NavTarget::ApiDocs), Some(Route::ApiDocs));
        assert_eq!(page_route(SiteVariant::Classic, NavTarget::Landing), Some(Route::Classic));
        assert_eq!(page_route(SiteVariant::Redesign, NavTarget::Landing), Some(Route::Home));
        assert_eq!(page_route(SiteVariant::Classic, NavTarget::Section("features")), None);
    }

    #[test]
    fn every_page_link_goes_through_the_router() {
        for variant in [SiteVariant::Classic, SiteVariant::Redesign] {
            for link in nav_links(variant) {
                match link.target {
                    NavTarget::Section(_) => assert_eq!(page_route(variant, link.target), None),
                    _ => assert!(page_route(variant, link.target).is_some(), "{}", link.title),
                }
            }
        }
    }

    #[test]
    fn section_id_reads_location_hash() {
        assert_eq!(section_id("#sign-up"), Some("sign-up"));
        assert_eq!(section_id("#"), None);
        assert_eq!(section_id(""), None);
    }

    #[test]
    fn link_sets_match_each_site() {
        let classic: Vec<_> = nav_links(SiteVariant::Classic).iter().map(|l| l.title).collect();
        assert_eq!(classic, ["Home", "Features", "API Docs", "Sign Up"]);
        let redesign: Vec<_> = nav_links(SiteVariant::Redesign).iter().map(|l| l.title).collect();
        assert_eq!(redesign, ["Features", "API", "Docs"]);
    }
}
