//! MDL Components - sample page
//!
//! Builds a small markup tree, upgrades it and drives the snackbar queue
//! with real timers. Set `MDL_CONFIG` to a JSON config file to override
//! the defaults.

use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;

use mdl_core::{Config, Element, Notification, Page, Toggle, TokioScheduler};

fn load_config() -> anyhow::Result<Config> {
    match std::env::var("MDL_CONFIG") {
        Ok(path) => Config::load(&path).with_context(|| format!("loading config from {}", path)),
        Err(_) => Ok(Config::default()),
    }
}

fn radio(name: &str, value: &str) -> Element {
    Element::new("label")
        .with_class("mdl-radio")
        .with_class("mdl-js-radio")
        .with_child(
            Element::new("input")
                .with_class("mdl-radio__button")
                .with_attr("type", "radio")
                .with_attr("name", name)
                .with_attr("value", value),
        )
}

fn sample_page() -> Element {
    let tabs = Element::new("div")
        .with_class("mdl-tabs")
        .with_class("mdl-js-tabs")
        .with_child(
            Element::new("div")
                .with_class("mdl-tabs__tab-bar")
                .with_child(
                    Element::new("a")
                        .with_class("mdl-tabs__tab")
                        .with_class("mdl-tabs--active")
                        .with_attr("href", "#settings"),
                )
                .with_child(
                    Element::new("a")
                        .with_class("mdl-tabs__tab")
                        .with_attr("href", "#about"),
                ),
        )
        .with_child(
            Element::new("section")
                .with_class("mdl-tabs__panel")
                .with_class("mdl-tabs--active")
                .with_id("settings"),
        )
        .with_child(
            Element::new("section")
                .with_class("mdl-tabs__panel")
                .with_id("about"),
        );

    Element::new("body")
        .with_child(
            Element::new("label")
                .with_class("mdl-checkbox")
                .with_class("mdl-js-checkbox")
                .with_child(
                    Element::new("input")
                        .with_class("mdl-checkbox__input")
                        .with_attr("type", "checkbox"),
                ),
        )
        .with_child(
            Element::new("label")
                .with_class("mdl-icon-toggle")
                .with_class("mdl-js-icon-toggle")
                .with_child(Element::new("input").with_class("mdl-icon-toggle__input")),
        )
        .with_child(radio("plan", "free"))
        .with_child(radio("plan", "pro"))
        .with_child(
            Element::new("div")
                .with_class("mdl-snackbar")
                .with_class("mdl-js-snackbar")
                .with_child(Element::new("div").with_class("mdl-snackbar__text"))
                .with_child(Element::new("button").with_class("mdl-snackbar__action")),
        )
        .with_child(tabs)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    mdl_core::init_logging(&config.log_filter);

    let scheduler = TokioScheduler::try_current().context("no tokio runtime")?;
    let page = Page::new(config, Arc::new(scheduler));

    let summary = page.upgrade(&sample_page().into_ref())?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    for checkbox in page.checkboxes() {
        checkbox.check();
    }

    let radios = page.radios();
    if let Some(pro) = radios.last() {
        pro.check();
    }

    if let Some(tabs) = page.tab_groups().first() {
        tabs.activate_panel("about")?;
        tracing::info!(panel = ?tabs.active_panel_id(), "Switched tab");
    }

    let snackbar = page.snackbar().context("sample page has no snackbar")?;
    let undo_page = page.clone();
    page.notify(
        Notification::new("Plan changed")
            .with_timeout(Duration::from_millis(400))
            .with_action("Undo", move || {
                if let Some(free) = undo_page.radios().first() {
                    free.check();
                }
            }),
    )?;
    snackbar.show_json(r#"{"message": "Settings saved", "timeout": 300}"#)?;

    tracing::info!(pending = ?snackbar.pending_messages(), "Queued notifications");

    // Pressing the action runs the handler and leaves the notification up
    snackbar.trigger_action();
    let checked: Vec<bool> = radios.iter().map(|radio| radio.is_checked()).collect();
    tracing::info!(?checked, "Plan radios after undo");

    while snackbar.is_active() {
        tracing::info!(message = ?snackbar.current_message(), "On screen");
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    tracing::info!(
        hidden = ?snackbar.element().attribute("aria-hidden"),
        "Snackbar drained"
    );

    Ok(())
}
