//! Root application component.
//!
//! ARCHITECTURE
//! ============
//! `App` builds the one [`AppContext`] the page uses, provides it, renders
//! the layout, and (csr) starts every browser behavior once after mount.
//! Each behavior starts independently: a failure is logged and the rest of
//! the page keeps working.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title, provide_meta_context};

use crate::components::{
    contact_modal::ContactModal,
    footer::Footer,
    hero::Hero,
    nav_bar::NavBar,
    sections::{AboutSection, ContactSection, ProjectsSection, SkillsSection},
};
use crate::config::SiteConfig;
use crate::state::ui::AppContext;
use crate::util::lazy_images::preload_hrefs;
#[cfg(feature = "csr")]
use crate::{
    components::{contact_modal, hero, nav_bar, theme_switcher},
    util::browser::{self, DomError},
};

#[cfg(feature = "csr")]
const SCROLL_DISABLED_CLASS: &str = "scroll-disabled";
#[cfg(feature = "csr")]
const LOADED_CLASS: &str = "loaded";

#[cfg(feature = "csr")]
fn start(name: &str, init: impl FnOnce() -> Result<(), DomError>) {
    match init() {
        Ok(()) => log::debug!("{name}: started"),
        Err(err) => log::error!("{name}: failed to start: {err}"),
    }
}

#[cfg(feature = "csr")]
fn start_behaviors(ctx: AppContext) {
    start("theme", || theme_switcher::wire(ctx));
    start("navigation", || nav_bar::wire(ctx));
    start("section tracker", || nav_bar::wire_section_tracker(ctx));
    start("typewriter", || hero::wire_typewriter(ctx));
    start("parallax", || hero::wire_parallax(ctx));
    start("contact form", || contact_modal::wire(ctx));
    start("lazy images", || {
        let observed = browser::observe_lazy_images()?;
        log::debug!("lazy images: observing {observed}");
        Ok(())
    });
    ctx.ui.update(|u| u.loaded = true);
    log::info!("page ready");
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (config, errors) = SiteConfig::from_build_env();
    for err in &errors {
        log::error!("build configuration: {err}, keeping the default");
    }
    let title = config.title.clone();
    let preloads = preload_hrefs(&config.preload_assets);
    let ctx = AppContext::new(config);
    provide_context(ctx);

    #[cfg(feature = "csr")]
    {
        let ui = ctx.ui;
        let contact = ctx.contact;
        Effect::new(move || {
            if let Some(theme) = ui.with(|u| u.applied_theme) {
                browser::set_root_theme(theme);
            }
        });
        Effect::new(move || {
            let modal_open = contact.with(|c| c.open);
            browser::set_body_class(SCROLL_DISABLED_CLASS, ui.with(|u| u.scroll_locked(modal_open)));
        });
        Effect::new(move || browser::set_body_class(LOADED_CLASS, ui.with(|u| u.loaded)));
        Effect::new(move || untrack(|| start_behaviors(ctx)));
    }

    view! {
        <Title text=title/>
        <Meta name="description" content="Portfolio of a front-end developer"/>
        {preloads
            .into_iter()
            .map(|href| view! { <Link rel="preload" as_="image" href=href/> })
            .collect_view()}

        <NavBar/>
        <main>
            <Hero/>
            <AboutSection/>
            <SkillsSection/>
            <ProjectsSection/>
            <ContactSection/>
        </main>
        <Footer/>
        <ContactModal/>
    }
}
