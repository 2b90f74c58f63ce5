// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the records listing and
//! the result inspector.
//!
//! The `App` struct wires the two screens to the shared API client and
//! translates component effects into screen switches. This file keeps policy
//! decisions (window sizing, theme resolution, startup fetching) close to
//! the main update loop so it is easy to audit user-facing behavior.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::ApiClient;
use crate::config::{self, defaults::DEFAULT_PAGE_SIZE};
use crate::ui::inspector;
use crate::ui::records;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state bridging the screens and the API client.
pub struct App {
    screen: Screen,
    records: records::State,
    inspector: inspector::State,
    api: ApiClient,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("records", &self.records.records().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 540;
pub const MIN_WINDOW_WIDTH: u32 = 760;

/// Initial and minimum window geometry.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Launches the Iced application loop; `main.rs` calls this and nothing else.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a Fn boot closure, but flags are consumed once;
    // stash them in a RefCell<Option<_>> and take them on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("boot closure invoked twice");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Records,
            records: records::State::new(DEFAULT_PAGE_SIZE),
            inspector: inspector::State::default(),
            api: ApiClient::new(config::defaults::DEFAULT_API_ROOT),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags and
    /// kicks off the first listing fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            eprintln!("Config warning: {warning}");
        }

        let root = ApiClient::resolve_root(flags.api_url.as_deref(), &config);

        let mut app = App {
            api: ApiClient::new(&root),
            records: records::State::new(config.effective_page_size()),
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        let task = app.records.refresh(&app.api).map(Message::Records);
        (app, task)
    }

    fn title(&self) -> String {
        match self.inspector.record() {
            Some(record) => format!("{} - AdverseLens", record.names),
            None => String::from("AdverseLens"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::for_screen(self.screen)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            records: &mut self.records,
            inspector: &mut self.inspector,
            api: &self.api,
        };

        match message {
            Message::Records(records_message) => {
                update::handle_records_message(&mut ctx, records_message)
            }
            Message::Inspector(inspector_message) => {
                update::handle_inspector_message(&mut ctx, inspector_message)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            records: &self.records,
            inspector: &self.inspector,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{SearchRecord, SearchResultResponse};
    use crate::error::Error;

    fn listing_message() -> Message {
        let listing = serde_json::from_value(serde_json::json!({
            "items": [{
                "id": "srch-1",
                "names": "John Doe",
                "adverse_news_found": true,
                "results_count": 2,
                "created_at": "2024-05-01T10:00:00Z",
            }],
            "total": 1,
            "page": 1,
            "limit": 5,
            "total_pages": 1,
        }))
        .expect("listing fixture should parse");

        Message::Records(records::Message::PageFetched {
            generation: 1,
            result: Ok(listing),
        })
    }

    fn app_with_listing() -> App {
        let mut app = App::default();
        let _ = app.records.refresh(&app.api);
        let _ = app.update(listing_message());
        app
    }

    #[test]
    fn default_title_is_the_app_name() {
        let app = App::default();
        assert_eq!(app.title(), "AdverseLens");
    }

    #[test]
    fn selecting_a_record_switches_to_the_inspector() {
        let mut app = app_with_listing();
        let _ = app.update(Message::Records(records::Message::RecordSelected(
            "srch-1".into(),
        )));

        assert_eq!(app.screen, Screen::Inspector);
        assert_eq!(app.title(), "John Doe - AdverseLens");
    }

    #[test]
    fn closing_the_inspector_returns_to_records() {
        let mut app = app_with_listing();
        let _ = app.update(Message::Records(records::Message::RecordSelected(
            "srch-1".into(),
        )));
        let _ = app.update(Message::Inspector(inspector::Message::Close));

        assert_eq!(app.screen, Screen::Records);
        assert_eq!(app.title(), "AdverseLens");
        assert!(app.inspector.record().is_none());
    }

    #[test]
    fn inspector_detail_failure_keeps_the_inspector_open() {
        let mut app = app_with_listing();
        let _ = app.update(Message::Records(records::Message::RecordSelected(
            "srch-1".into(),
        )));
        let _ = app.update(Message::Inspector(inspector::Message::DetailFetched {
            generation: 1,
            result: Err(Error::FetchFailed("503".into())),
        }));

        assert_eq!(app.screen, Screen::Inspector);
    }

    #[test]
    fn stale_detail_for_a_previous_record_is_ignored() {
        let mut app = app_with_listing();
        let _ = app.update(Message::Records(records::Message::RecordSelected(
            "srch-1".into(),
        )));
        let _ = app.update(Message::Inspector(inspector::Message::Close));
        let _ = app.update(Message::Records(records::Message::RecordSelected(
            "srch-1".into(),
        )));

        // Generation 1 belongs to the first opening; the second opening
        // bumped the tag, so this arrival must change nothing.
        let response: SearchResultResponse = serde_json::from_value(serde_json::json!({
            "search_id": "srch-1",
            "total_hits": 1,
            "results": [{ "id": "art-1" }],
        }))
        .expect("response fixture should parse");
        let _ = app.update(Message::Inspector(inspector::Message::DetailFetched {
            generation: 1,
            result: Ok(response),
        }));

        assert!(matches!(
            app.inspector.detail_state(),
            crate::ui::inspector::DetailState::Loading
        ));
    }

    #[test]
    fn window_settings_enforce_a_minimum_size() {
        let settings = window_settings();
        assert!(settings.min_size.is_some());
    }

    #[test]
    fn record_can_be_reopened_after_close() {
        let mut app = app_with_listing();
        let record = SearchRecord::pending("srch-1".into(), "John Doe".into());
        let _ = app.inspector.open(record, &app.api);
        app.inspector.close();
        assert!(app.inspector.record().is_none());
    }
}
