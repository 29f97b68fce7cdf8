mod about;
mod academics;
mod contact;
mod env;
mod footer;
mod home;
mod icons;
mod navbar;
mod projects;
mod skills;

pub use env::{DocumentScrollHost, PageScrollLock, ScrollObserver, Viewport};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use academics::Academics;
use contact::Contact;
use env::{provide_scroll_lock, provide_scroll_observer, provide_viewport};
use footer::Footer;
use home::Home;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;

const GLOBAL_CSS: &str =
    "html { scroll-behavior: smooth; } body { margin: 0; background-color: #111827; }";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <style>{GLOBAL_CSS}</style>
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_viewport();
    provide_scroll_observer();
    provide_scroll_lock();

    view! {
        <Title text="Akhil Pulukuri | Portfolio" />
        <Meta
            name="description"
            content="Portfolio of Akhil Pulukuri, full-stack developer: skills, projects, academics and contact."
        />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// Every section in one vertical stack; the fixed navbar renders last so it
/// stays on top.
#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <div>
            <Home />
            <About />
            <Skills />
            <Projects />
            <Academics />
            <Contact />
            <Footer />
            <Navbar />
        </div>
    }
}
