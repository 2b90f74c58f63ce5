// SPDX-License-Identifier: MPL-2.0
//! Inspector component wiring detail fetch, article paging, the image
//! slot, and the pan/zoom overlay together.
//!
//! The component owns all inspector state. The application opens it with a
//! selected record and closes it when [`Effect::CloseRequested`] comes
//! back; nothing else about the surrounding screens is visible from here.

use crate::api::{ApiClient, Article, SearchRecord, SearchResultResponse};
use crate::error::Error;
use crate::ui::inspector::article_navigator::{ArticleNavigator, NavigationInfo};
use crate::ui::inspector::detail_fetch::{DetailFetch, DetailState};
use crate::ui::inspector::image_resource::{ArticleImage, ImageRequest, ImageResource, ImageState};
use crate::ui::state::ViewportTransform;
use iced::{event, keyboard, mouse, window, Element, Point, Task};

/// Messages emitted by inspector widgets and resumed fetches.
#[derive(Debug, Clone)]
pub enum Message {
    DetailFetched {
        generation: u64,
        result: Result<SearchResultResponse, Error>,
    },
    ImageFetched {
        generation: u64,
        result: Result<Vec<u8>, Error>,
    },
    NextArticle,
    PreviousArticle,
    ExpandImage,
    CollapseImage,
    ZoomIn,
    ZoomOut,
    ResetView,
    Close,
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Side effects the application should perform after handling an
/// inspector message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The inspector wants the selection cleared and the records screen
    /// shown again.
    CloseRequested,
}

/// Complete inspector component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    record: Option<SearchRecord>,
    detail: DetailFetch,
    navigator: ArticleNavigator,
    image: ImageResource,
    viewport: ViewportTransform,
    expanded: bool,
    cursor_position: Option<Point>,
}

impl State {
    /// Binds the inspector to a newly selected record and starts the
    /// detail fetch. Any state left from a previous record is torn down
    /// first, releasing a still-live image handle.
    pub fn open(&mut self, record: SearchRecord, client: &ApiClient) -> Task<Message> {
        self.image.clear();
        self.navigator.reset_for(0);
        self.viewport.reset();
        self.expanded = false;

        let generation = self.detail.begin();
        let record_id = record.id.clone();
        self.record = Some(record);

        let client = client.clone();
        Task::perform(
            async move { client.detail_by_id(&record_id).await },
            move |result| Message::DetailFetched { generation, result },
        )
    }

    /// Tears the inspector down: result set dropped, live handle released,
    /// transform back to identity. Late fetch results are invalidated.
    pub fn close(&mut self) {
        self.record = None;
        self.detail.clear();
        self.navigator.reset_for(0);
        self.image.clear();
        self.viewport.reset();
        self.expanded = false;
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        client: &ApiClient,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::DetailFetched { generation, result } => {
                if !self.detail.apply(generation, result) {
                    return (Effect::None, Task::none());
                }

                match self.detail.state() {
                    DetailState::Loaded(_) => {
                        self.navigator.reset_for(self.detail.articles().len());
                        let task = self.sync_image(client);
                        (Effect::None, task)
                    }
                    _ => {
                        self.navigator.reset_for(0);
                        self.image.clear();
                        self.viewport.reset();
                        (Effect::None, Task::none())
                    }
                }
            }
            Message::ImageFetched { generation, result } => {
                if self.image.apply_fetch(generation, result) {
                    // The displayed handle changed (or failed away).
                    self.viewport.reset();
                    self.collapse_without_image();
                }
                (Effect::None, Task::none())
            }
            Message::NextArticle => {
                if self.navigator.next() {
                    let task = self.sync_image(client);
                    (Effect::None, task)
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::PreviousArticle => {
                if self.navigator.previous() {
                    let task = self.sync_image(client);
                    (Effect::None, task)
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::ExpandImage => {
                if self.image.image().is_some() {
                    self.viewport.reset();
                    self.expanded = true;
                }
                (Effect::None, Task::none())
            }
            Message::CollapseImage => {
                self.expanded = false;
                self.viewport.reset();
                (Effect::None, Task::none())
            }
            Message::ZoomIn => {
                if self.expanded {
                    self.viewport.zoom_in();
                }
                (Effect::None, Task::none())
            }
            Message::ZoomOut => {
                if self.expanded {
                    self.viewport.zoom_out();
                }
                (Effect::None, Task::none())
            }
            Message::ResetView => {
                if self.expanded {
                    self.viewport.reset();
                }
                (Effect::None, Task::none())
            }
            Message::Close => {
                self.close();
                (Effect::CloseRequested, Task::none())
            }
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
        }
    }

    /// Routes window-level input into the pan/zoom overlay. Everything is
    /// ignored while the overlay is closed, except cursor tracking and the
    /// Escape key, which closes the inspector itself.
    fn handle_raw_event(&mut self, event: event::Event) -> (Effect, Task<Message>) {
        match event {
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::CursorMoved { position } => {
                    self.cursor_position = Some(position);
                    if self.expanded {
                        self.viewport.drag_to(position);
                    }
                    (Effect::None, Task::none())
                }
                mouse::Event::WheelScrolled { delta } => {
                    if self.expanded {
                        self.viewport.zoom_by_wheel(scroll_steps(&delta));
                    }
                    (Effect::None, Task::none())
                }
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    if self.expanded {
                        if let Some(position) = self.cursor_position {
                            self.viewport.start_drag(position);
                        }
                    }
                    (Effect::None, Task::none())
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => {
                    if self.expanded {
                        self.viewport.stop_drag();
                    }
                    (Effect::None, Task::none())
                }
                mouse::Event::CursorLeft => {
                    self.cursor_position = None;
                    if self.expanded {
                        self.viewport.stop_drag();
                    }
                    (Effect::None, Task::none())
                }
                _ => (Effect::None, Task::none()),
            },
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => {
                if self.expanded {
                    self.expanded = false;
                    self.viewport.reset();
                    (Effect::None, Task::none())
                } else {
                    self.close();
                    (Effect::CloseRequested, Task::none())
                }
            }
            _ => (Effect::None, Task::none()),
        }
    }

    /// Rebinds the image slot to the current article and resets the
    /// transform. Called on every article change, including the jump back
    /// to the first article after a fresh fetch.
    fn sync_image(&mut self, client: &ApiClient) -> Task<Message> {
        self.viewport.reset();

        let source = self
            .current_article()
            .and_then(|article| article.image_source().map(str::to_string));

        let task = match self.image.set_source(source) {
            Some(ImageRequest {
                image_id,
                generation,
            }) => {
                let client = client.clone();
                Task::perform(
                    async move { client.image_binary(&image_id).await },
                    move |result| Message::ImageFetched { generation, result },
                )
            }
            None => Task::none(),
        };

        self.collapse_without_image();
        task
    }

    // The overlay only makes sense over a live handle. The slot keeps a
    // replaced image on screen while its successor loads, so this fires
    // only when the handle failed away or the article has no image.
    fn collapse_without_image(&mut self) {
        if self.expanded && self.image.image().is_none() {
            self.expanded = false;
        }
    }

    /// The record this inspector is bound to, if open.
    #[must_use]
    pub fn record(&self) -> Option<&SearchRecord> {
        self.record.as_ref()
    }

    #[must_use]
    pub fn detail_state(&self) -> &DetailState {
        self.detail.state()
    }

    /// The article the navigator currently points at.
    #[must_use]
    pub fn current_article(&self) -> Option<&Article> {
        self.detail.articles().get(self.navigator.index())
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationInfo {
        self.navigator.info()
    }

    #[must_use]
    pub fn image_state(&self) -> &ImageState {
        self.image.state()
    }

    /// The image manager itself, exposed so callers can audit the
    /// install/release balance.
    #[must_use]
    pub fn image_resource(&self) -> &ImageResource {
        &self.image
    }

    #[must_use]
    pub fn image(&self) -> Option<&ArticleImage> {
        self.image.image()
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn view(&self) -> Element<'_, Message> {
        super::view::view(self)
    }
}

fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use iced::Vector;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:0")
    }

    fn record(id: &str) -> SearchRecord {
        SearchRecord::pending(id.to_string(), "John Doe".to_string())
    }

    fn article(id: &str, image_id: Option<&str>) -> Article {
        serde_json::from_value(serde_json::json!({ "id": id, "image_id": image_id }))
            .expect("article fixture should parse")
    }

    fn response(articles: Vec<Article>) -> SearchResultResponse {
        SearchResultResponse {
            query: "Doe John".into(),
            names: "John Doe".into(),
            total_hits: articles.len() as u32,
            search_id: "srch-1".into(),
            search_duration_ms: 412.0,
            timestamp: "2024-03-01T10:00:00Z".into(),
            results: articles,
        }
    }

    fn png_bytes() -> Vec<u8> {
        let pixels = image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([0, 0, 0, 255]));
        let mut bytes = Vec::new();
        pixels
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image_rs::ImageFormat::Png,
            )
            .expect("png encoding should succeed");
        bytes
    }

    /// Opens the inspector and applies a successful detail fetch.
    fn open_with_articles(state: &mut State, articles: Vec<Article>) {
        let _task = state.open(record("rec-1"), &client());
        let generation = state.detail.generation();
        let (_effect, _task) = state.handle_message(
            Message::DetailFetched {
                generation,
                result: Ok(response(articles)),
            },
            &client(),
        );
    }

    /// Feeds the pending image fetch a decodable binary.
    fn deliver_image(state: &mut State) {
        let generation = state.image.generation();
        let (_effect, _task) = state.handle_message(
            Message::ImageFetched {
                generation,
                result: Ok(png_bytes()),
            },
            &client(),
        );
    }

    fn mouse_event(event: mouse::Event) -> Message {
        Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Mouse(event),
        }
    }

    fn press_escape() -> Message {
        Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                modified_key: keyboard::Key::Named(keyboard::key::Named::Escape),
                physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Escape),
                location: keyboard::Location::Standard,
                modifiers: keyboard::Modifiers::default(),
                text: None,
                repeat: false,
            }),
        }
    }

    #[test]
    fn open_starts_loading_and_binds_the_record() {
        let mut state = State::default();
        let _task = state.open(record("rec-1"), &client());

        assert!(matches!(state.detail_state(), DetailState::Loading));
        assert_eq!(state.record().map(|r| r.id.as_str()), Some("rec-1"));
        assert!(!state.is_expanded());
    }

    #[test]
    fn successful_fetch_rewinds_navigator_and_requests_first_image() {
        let mut state = State::default();
        open_with_articles(
            &mut state,
            vec![
                article("a", Some("img-1")),
                article("b", Some("img-2")),
                article("c", None),
            ],
        );

        assert!(matches!(state.detail_state(), DetailState::Loaded(_)));
        assert_eq!(state.navigation().position, 1);
        assert_eq!(state.navigation().total, 3);
        assert_eq!(*state.image_state(), ImageState::Loading);
    }

    #[test]
    fn article_without_image_leaves_the_slot_idle() {
        let mut state = State::default();
        open_with_articles(&mut state, vec![article("a", None)]);

        assert_eq!(*state.image_state(), ImageState::Idle);
        assert!(state.image().is_none());
    }

    #[test]
    fn empty_result_set_is_a_distinct_state_not_an_error() {
        let mut state = State::default();
        open_with_articles(&mut state, vec![]);

        assert_eq!(*state.detail_state(), DetailState::NoDetail);
        assert_eq!(state.navigation().total, 0);
        assert_eq!(*state.image_state(), ImageState::Idle);
    }

    #[test]
    fn detail_failure_is_recorded_without_an_image() {
        let mut state = State::default();
        let _task = state.open(record("rec-1"), &client());
        let generation = state.detail.generation();

        let (_effect, _task) = state.handle_message(
            Message::DetailFetched {
                generation,
                result: Err(Error::FetchFailed("boom".into())),
            },
            &client(),
        );

        assert!(matches!(state.detail_state(), DetailState::Failed(_)));
        assert_eq!(*state.image_state(), ImageState::Idle);
    }

    #[test]
    fn reselecting_discards_the_slower_previous_fetch() {
        let mut state = State::default();
        let _task = state.open(record("rec-a"), &client());
        let stale = state.detail.generation();
        let _task = state.open(record("rec-b"), &client());
        let current = state.detail.generation();

        let (_effect, _task) = state.handle_message(
            Message::DetailFetched {
                generation: stale,
                result: Ok(response(vec![article("from-a", None)])),
            },
            &client(),
        );
        assert!(matches!(state.detail_state(), DetailState::Loading));

        let (_effect, _task) = state.handle_message(
            Message::DetailFetched {
                generation: current,
                result: Ok(response(vec![article("from-b", None)])),
            },
            &client(),
        );
        assert_eq!(state.current_article().map(|a| a.id.as_str()), Some("from-b"));
    }

    #[test]
    fn navigating_requests_the_next_articles_image() {
        let mut state = State::default();
        open_with_articles(
            &mut state,
            vec![article("a", Some("img-1")), article("b", Some("img-2"))],
        );
        deliver_image(&mut state);
        assert_eq!(*state.image_state(), ImageState::Ready);

        let (_effect, _task) = state.handle_message(Message::NextArticle, &client());

        assert_eq!(state.navigation().position, 2);
        assert_eq!(*state.image_state(), ImageState::Loading);
        // The old handle stays on screen until the new binary arrives.
        assert!(state.image().is_some());
    }

    #[test]
    fn navigation_saturates_at_the_ends() {
        let mut state = State::default();
        open_with_articles(&mut state, vec![article("a", None), article("b", None)]);

        let (_effect, _task) = state.handle_message(Message::PreviousArticle, &client());
        assert_eq!(state.navigation().position, 1);

        let (_effect, _task) = state.handle_message(Message::NextArticle, &client());
        let (_effect, _task) = state.handle_message(Message::NextArticle, &client());
        assert_eq!(state.navigation().position, 2);
    }

    #[test]
    fn image_failure_keeps_the_pager_usable() {
        let mut state = State::default();
        open_with_articles(
            &mut state,
            vec![article("a", Some("img-404")), article("b", None)],
        );

        let generation = state.image.generation();
        let (_effect, _task) = state.handle_message(
            Message::ImageFetched {
                generation,
                result: Err(Error::FetchFailed("API request failed: 404 Not Found".into())),
            },
            &client(),
        );

        assert!(matches!(state.image_state(), ImageState::Failed(_)));
        assert!(state.image().is_none());

        let (_effect, _task) = state.handle_message(Message::NextArticle, &client());
        assert_eq!(state.navigation().position, 2);
        assert_eq!(*state.image_state(), ImageState::Idle);
    }

    #[test]
    fn expand_requires_a_ready_image() {
        let mut state = State::default();
        open_with_articles(&mut state, vec![article("a", Some("img-1"))]);

        let (_effect, _task) = state.handle_message(Message::ExpandImage, &client());
        assert!(!state.is_expanded());

        deliver_image(&mut state);
        let (_effect, _task) = state.handle_message(Message::ExpandImage, &client());
        assert!(state.is_expanded());
    }

    #[test]
    fn gestures_are_ignored_while_the_overlay_is_closed() {
        let mut state = State::default();
        open_with_articles(&mut state, vec![article("a", Some("img-1"))]);
        deliver_image(&mut state);

        let (_effect, _task) = state.handle_message(
            mouse_event(mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
            }),
            &client(),
        );

        assert_abs_diff_eq!(state.viewport().zoom(), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn overlay_gestures_zoom_and_pan() {
        let mut state = State::default();
        open_with_articles(&mut state, vec![article("a", Some("img-1"))]);
        deliver_image(&mut state);
        let (_effect, _task) = state.handle_message(Message::ExpandImage, &client());

        let (_effect, _task) = state.handle_message(
            mouse_event(mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
            }),
            &client(),
        );
        let (_effect, _task) = state.handle_message(Message::ZoomIn, &client());
        assert_abs_diff_eq!(state.viewport().zoom(), 1.35, epsilon = F32_EPSILON);

        let (_effect, _task) = state.handle_message(
            mouse_event(mouse::Event::CursorMoved {
                position: Point::new(100.0, 100.0),
            }),
            &client(),
        );
        let (_effect, _task) = state.handle_message(
            mouse_event(mouse::Event::ButtonPressed(mouse::Button::Left)),
            &client(),
        );
        let (_effect, _task) = state.handle_message(
            mouse_event(mouse::Event::CursorMoved {
                position: Point::new(130.0, 80.0),
            }),
            &client(),
        );
        assert!(state.viewport().dragging());
        assert_eq!(state.viewport().pan(), Vector::new(30.0, -20.0));

        let (_effect, _task) = state.handle_message(
            mouse_event(mouse::Event::ButtonReleased(mouse::Button::Left)),
            &client(),
        );
        assert!(!state.viewport().dragging());
        assert_eq!(state.viewport().pan(), Vector::new(30.0, -20.0));
    }

    #[test]
    fn cursor_leaving_the_window_ends_the_drag() {
        let mut state = State::default();
        open_with_articles(&mut state, vec![article("a", Some("img-1"))]);
        deliver_image(&mut state);
        let (_effect, _task) = state.handle_message(Message::ExpandImage, &client());

        let (_effect, _task) = state.handle_message(
            mouse_event(mouse::Event::CursorMoved {
                position: Point::new(50.0, 50.0),
            }),
            &client(),
        );
        let (_effect, _task) = state.handle_message(
            mouse_event(mouse::Event::ButtonPressed(mouse::Button::Left)),
            &client(),
        );
        let (_effect, _task) =
            state.handle_message(mouse_event(mouse::Event::CursorLeft), &client());

        assert!(!state.viewport().dragging());
    }

    #[test]
    fn collapsing_the_overlay_resets_the_transform() {
        let mut state = State::default();
        open_with_articles(&mut state, vec![article("a", Some("img-1"))]);
        deliver_image(&mut state);
        let (_effect, _task) = state.handle_message(Message::ExpandImage, &client());
        let (_effect, _task) = state.handle_message(Message::ZoomIn, &client());

        let (_effect, _task) = state.handle_message(Message::CollapseImage, &client());

        assert!(!state.is_expanded());
        assert_abs_diff_eq!(state.viewport().zoom(), 1.0, epsilon = F32_EPSILON);
        assert_eq!(state.viewport().pan(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn failed_replacement_collapses_the_overlay() {
        let mut state = State::default();
        open_with_articles(
            &mut state,
            vec![article("a", Some("img-1")), article("b", Some("img-404"))],
        );
        deliver_image(&mut state);
        let (_effect, _task) = state.handle_message(Message::ExpandImage, &client());
        let (_effect, _task) = state.handle_message(Message::NextArticle, &client());
        assert!(state.is_expanded());

        let generation = state.image.generation();
        let (_effect, _task) = state.handle_message(
            Message::ImageFetched {
                generation,
                result: Err(Error::FetchFailed("API request failed: 404 Not Found".into())),
            },
            &client(),
        );

        // The broken slot must not keep the overlay open.
        assert!(!state.is_expanded());
        assert!(state.image().is_none());
    }

    #[test]
    fn navigating_to_an_imageless_article_collapses_the_overlay() {
        let mut state = State::default();
        open_with_articles(
            &mut state,
            vec![article("a", Some("img-1")), article("b", None)],
        );
        deliver_image(&mut state);
        let (_effect, _task) = state.handle_message(Message::ExpandImage, &client());

        let (_effect, _task) = state.handle_message(Message::NextArticle, &client());

        assert!(!state.is_expanded());
        assert_eq!(*state.image_state(), ImageState::Idle);
    }

    #[test]
    fn escape_collapses_the_overlay_before_closing_the_inspector() {
        let mut state = State::default();
        open_with_articles(&mut state, vec![article("a", Some("img-1"))]);
        deliver_image(&mut state);
        let (_effect, _task) = state.handle_message(Message::ExpandImage, &client());

        let (effect, _task) = state.handle_message(press_escape(), &client());
        assert_eq!(effect, Effect::None);
        assert!(!state.is_expanded());

        let (effect, _task) = state.handle_message(press_escape(), &client());
        assert_eq!(effect, Effect::CloseRequested);
        assert!(state.record().is_none());
    }

    #[test]
    fn close_releases_every_installed_handle() {
        let mut state = State::default();
        open_with_articles(
            &mut state,
            vec![article("a", Some("img-1")), article("b", Some("img-2"))],
        );
        deliver_image(&mut state);
        let (_effect, _task) = state.handle_message(Message::NextArticle, &client());
        deliver_image(&mut state);

        let (effect, _task) = state.handle_message(Message::Close, &client());

        assert_eq!(effect, Effect::CloseRequested);
        assert_eq!(state.image.installs(), 2);
        assert_eq!(state.image.releases(), 2);
        assert_eq!(*state.detail_state(), DetailState::Idle);
    }

    #[test]
    fn late_image_binary_after_close_is_discarded() {
        let mut state = State::default();
        open_with_articles(&mut state, vec![article("a", Some("img-1"))]);
        let generation = state.image.generation();

        let (_effect, _task) = state.handle_message(Message::Close, &client());
        let (_effect, _task) = state.handle_message(
            Message::ImageFetched {
                generation,
                result: Ok(png_bytes()),
            },
            &client(),
        );

        assert_eq!(*state.image_state(), ImageState::Idle);
        assert_eq!(state.image.installs(), 0);
    }
}
