//! Page bodies and the HTML shell.
//!
//! DESIGN
//! ======
//! Pages are leptos components rendered to strings on the server. Text and
//! attribute values pass through the view macro, so catalog text and request
//! paths are escaped on the way out. Only a `View` body, which a loader has
//! already rendered, is inserted raw into the shell.

use leptos::prelude::*;

use super::View;
use super::catalog::{self, Category, HOME_NAME, TOOLS, ToolSpec};
use crate::config::BasePath;
use crate::router::LoadError;

pub const SITE_TITLE: &str = "Developer Tools";
pub const NOT_FOUND_NAME: &str = "not-found";
pub const LOAD_ERROR_NAME: &str = "load-error";

// =============================================================================
// SHELL
// =============================================================================

/// Wrap `view` in the full HTML document: head, navigation bar, main area.
#[must_use]
pub fn document(view: &View, base: &BasePath) -> String {
    let title = if view.name == HOME_NAME { SITE_TITLE.to_owned() } else { format!("{} | {SITE_TITLE}", view.title) };
    let home = base.href("/");
    let about = base.href("/about");
    let stylesheet = format!("{}assets/app.css", base.as_str());
    let route = view.name.clone();
    let body = view.body.clone();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <link rel="stylesheet" href=stylesheet/>
            </head>
            <body data-route=route>
                <header class="shell__header">
                    <a class="shell__brand" href=home.clone()>{SITE_TITLE}</a>
                    <nav class="shell__nav">
                        <a href=home>"Home"</a>
                        <a href=about>"About"</a>
                    </nav>
                </header>
                <main class="shell__main" inner_html=body></main>
            </body>
        </html>
    }
    .to_html()
}

// =============================================================================
// HOME
// =============================================================================

/// Landing page listing every tool grouped by category.
#[must_use]
pub fn home(base: &BasePath) -> View {
    let body = view! { <HomePage base=base.clone()/> }.to_html();
    View::new(HOME_NAME, SITE_TITLE, body)
}

#[component]
fn HomePage(base: BasePath) -> impl IntoView {
    let lead = format!("{} single-purpose utilities, each on its own page.", TOOLS.len());
    let groups = Category::ALL
        .into_iter()
        .filter_map(|category| {
            let tools: Vec<&'static ToolSpec> = catalog::in_category(category).collect();
            if tools.is_empty() {
                return None;
            }
            let links = tools
                .into_iter()
                .map(|tool| {
                    view! {
                        <li>
                            <a href=base.href(tool.path)>{tool.title}</a>
                            " "
                            <span>{tool.summary}</span>
                        </li>
                    }
                })
                .collect_view();
            Some(view! {
                <section class="home__group" data-category=category_slug(category)>
                    <h2>{category.label()}</h2>
                    <ul>{links}</ul>
                </section>
            })
        })
        .collect_view();

    view! {
        <section class="home">
            <h1>{SITE_TITLE}</h1>
            <p class="home__lead">{lead}</p>
            {groups}
        </section>
    }
}

fn category_slug(category: Category) -> &'static str {
    match category {
        Category::Format => "format",
        Category::Generate => "generate",
        Category::Encode => "encode",
        Category::Inspect => "inspect",
        Category::Docker => "docker",
        Category::Info => "info",
    }
}

// =============================================================================
// TOOL PAGES
// =============================================================================

/// Default tool page: heading, summary, and an input/output form.
#[must_use]
pub fn tool(entry: &ToolSpec) -> View {
    let body = view! { <ToolPage entry=*entry/> }.to_html();
    View::new(entry.name, entry.title, body)
}

#[component]
fn ToolPage(entry: ToolSpec) -> impl IntoView {
    view! {
        <section class="tool" data-tool=entry.name>
            <h1>{entry.title}</h1>
            <p class="tool__summary">{entry.summary}</p>
            <form class="tool__form" data-component=entry.component>
                <label>"Input" <textarea name="input" rows="12"></textarea></label>
                <button type="submit">"Run"</button>
                <label>"Output" <textarea name="output" rows="12" readonly=true></textarea></label>
            </form>
        </section>
    }
}

#[must_use]
pub fn about(entry: &ToolSpec) -> View {
    let body = view! { <AboutPage entry=*entry/> }.to_html();
    View::new(entry.name, entry.title, body)
}

#[component]
fn AboutPage(entry: ToolSpec) -> impl IntoView {
    let blurb = format!(
        "{SITE_TITLE} is a collection of {} independent developer utilities. \
         Each tool runs on its own page and is loaded the first time it is opened.",
        TOOLS.len()
    );
    view! {
        <section class="about">
            <h1>{entry.title}</h1>
            <p>{blurb}</p>
        </section>
    }
}

// =============================================================================
// FALLBACKS
// =============================================================================

/// Shown for paths with no registered route.
#[must_use]
pub fn not_found(path: &str, base: &BasePath) -> View {
    let body = view! { <NotFoundPage path=path.to_owned() home=base.href("/")/> }.to_html();
    View::new(NOT_FOUND_NAME, "Page not found", body)
}

#[component]
fn NotFoundPage(path: String, home: String) -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"No tool lives at " <code>{path}</code> "."</p>
            <p><a href=home>"Back to all tools"</a></p>
        </section>
    }
}

/// Shown when a deferred view fails to load.
#[must_use]
pub fn load_error(route_name: &str, error: &LoadError, base: &BasePath) -> View {
    let body = view! {
        <LoadErrorPage route_name=route_name.to_owned() message=error.to_string() home=base.href("/")/>
    }
    .to_html();
    View::new(LOAD_ERROR_NAME, "Failed to load", body)
}

#[component]
fn LoadErrorPage(route_name: String, message: String, home: String) -> impl IntoView {
    view! {
        <section class="load-error" data-tool=route_name>
            <h1>"This tool failed to load"</h1>
            <p>{message}</p>
            <p><a href=home>"Back to all tools"</a></p>
        </section>
    }
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
