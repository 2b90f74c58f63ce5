// SPDX-License-Identifier: MPL-2.0
//! Saved-searches screen: paginated record listing plus the add-search
//! form. Selecting a row hands the record to the inspector through
//! [`Effect::InspectRecord`].

use crate::api::{ApiClient, PaginatedSearches, SearchRecord, SearchResultResponse, SearchStatus};
use crate::error::Error;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, text_input, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length, Task};

/// Messages produced by the records screen.
#[derive(Debug, Clone)]
pub enum Message {
    PageFetched {
        generation: u64,
        result: Result<PaginatedSearches, Error>,
    },
    PreviousPage,
    NextPage,
    NameInputChanged(String),
    SubmitSearch,
    SearchSubmitted {
        local_id: String,
        result: Result<SearchResultResponse, Error>,
    },
    RecordSelected(String),
}

/// Side effects the application performs after a records message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// A row was clicked; open the inspector on this record.
    InspectRecord(SearchRecord),
}

/// Records screen state.
#[derive(Debug, Clone)]
pub struct State {
    records: Vec<SearchRecord>,
    page: u32,
    total_pages: u32,
    page_size: u32,
    loading: bool,
    listing_error: Option<String>,
    generation: u64,
    name_input: String,
    input_error: Option<&'static str>,
    submitting: bool,
    next_local_id: u64,
}

impl State {
    pub fn new(page_size: u32) -> Self {
        Self {
            records: Vec::new(),
            page: 1,
            total_pages: 1,
            page_size,
            loading: false,
            listing_error: None,
            generation: 0,
            name_input: String::new(),
            input_error: None,
            submitting: false,
            next_local_id: 0,
        }
    }

    /// Starts a fetch of the current page. Used at startup and when
    /// returning from the inspector.
    pub fn refresh(&mut self, client: &ApiClient) -> Task<Message> {
        self.fetch_page(self.page, client)
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        client: &ApiClient,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::PageFetched { generation, result } => {
                if generation != self.generation {
                    return (Effect::None, Task::none());
                }
                self.loading = false;
                match result {
                    Ok(listing) => {
                        self.records = listing
                            .items
                            .into_iter()
                            .map(SearchRecord::from_summary)
                            .collect();
                        if listing.page > 0 {
                            self.page = listing.page;
                        }
                        self.total_pages = listing.total_pages.max(1);
                        self.listing_error = None;
                    }
                    Err(error) => {
                        self.listing_error = Some(error.to_string());
                    }
                }
                (Effect::None, Task::none())
            }
            Message::PreviousPage => {
                if self.page > 1 && !self.loading {
                    let task = self.fetch_page(self.page - 1, client);
                    (Effect::None, task)
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::NextPage => {
                if self.page < self.total_pages && !self.loading {
                    let task = self.fetch_page(self.page + 1, client);
                    (Effect::None, task)
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::NameInputChanged(value) => {
                self.name_input = value;
                self.input_error = None;
                (Effect::None, Task::none())
            }
            Message::SubmitSearch => {
                let task = self.submit(client);
                (Effect::None, task)
            }
            Message::SearchSubmitted { local_id, result } => {
                self.submitting = false;
                if let Some(record) = self.records.iter_mut().find(|r| r.id == local_id) {
                    match result {
                        Ok(response) => {
                            record.id = response.search_id;
                            record.status = SearchStatus::Completed;
                            record.results_count = Some(response.total_hits);
                        }
                        Err(_) => {
                            record.status = SearchStatus::Error;
                        }
                    }
                }
                (Effect::None, Task::none())
            }
            Message::RecordSelected(id) => {
                match self.records.iter().find(|r| r.id == id) {
                    Some(record) => (Effect::InspectRecord(record.clone()), Task::none()),
                    None => (Effect::None, Task::none()),
                }
            }
        }
    }

    fn fetch_page(&mut self, page: u32, client: &ApiClient) -> Task<Message> {
        self.generation += 1;
        let generation = self.generation;
        self.loading = true;

        let limit = self.page_size;
        let client = client.clone();
        Task::perform(
            async move { client.list_searches(page, limit).await },
            move |result| Message::PageFetched { generation, result },
        )
    }

    fn submit(&mut self, client: &ApiClient) -> Task<Message> {
        if self.submitting {
            return Task::none();
        }

        let names = self.name_input.trim().to_string();
        if names.is_empty() {
            self.input_error = Some("Name is required");
            return Task::none();
        }

        self.next_local_id += 1;
        let local_id = format!("local-{}", self.next_local_id);
        self.records
            .insert(0, SearchRecord::pending(local_id.clone(), names.clone()));

        self.name_input.clear();
        self.input_error = None;
        self.submitting = true;

        let client = client.clone();
        Task::perform(
            async move { client.submit_search(&names).await },
            move |result| Message::SearchSubmitted {
                local_id: local_id.clone(),
                result,
            },
        )
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn view(&self) -> Element<'_, Message> {
        let title = Text::new("Adverse news searches").size(typography::TITLE_LG);

        let content = Column::new()
            .spacing(spacing::LG)
            .push(title)
            .push(self.form())
            .push(self.listing());

        let panel = Container::new(content)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::DETAIL_WIDTH))
            .style(styles::container::panel);

        Container::new(Scrollable::new(panel))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::LG)
            .into()
    }

    fn form(&self) -> Element<'_, Message> {
        let input = text_input("Full name to screen", &self.name_input)
            .on_input(Message::NameInputChanged)
            .on_submit(Message::SubmitSearch)
            .width(Length::Fixed(sizing::SEARCH_INPUT_WIDTH))
            .padding(spacing::XS);

        let submit_label = if self.submitting {
            "Submitting\u{2026}"
        } else {
            "Add search"
        };
        let submit = button(Text::new(submit_label))
            .style(styles::button::primary)
            .padding([spacing::XS, spacing::MD])
            .on_press_maybe((!self.submitting).then_some(Message::SubmitSearch));

        let mut form = Column::new().spacing(spacing::XS).push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(input)
                .push(submit),
        );

        if let Some(message) = self.input_error {
            form = form.push(
                Text::new(message)
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            );
        }

        form.into()
    }

    fn listing(&self) -> Element<'_, Message> {
        let mut listing = Column::new().spacing(spacing::SM);

        if let Some(error) = &self.listing_error {
            listing = listing.push(
                Container::new(
                    Text::new(format!("Could not load searches: {error}"))
                        .size(typography::CAPTION),
                )
                .padding(spacing::XS)
                .width(Length::Fill)
                .style(styles::container::error_panel),
            );
        }

        if self.records.is_empty() {
            let note = if self.loading {
                "Loading searches\u{2026}"
            } else {
                "No searches yet. Add a name above to start screening."
            };
            listing = listing.push(
                Container::new(
                    Text::new(note)
                        .size(typography::BODY)
                        .color(palette::GRAY_400),
                )
                .width(Length::Fill)
                .padding(spacing::XL)
                .align_x(alignment::Horizontal::Center),
            );
        } else {
            listing = listing.push(header_row());
            for record in &self.records {
                listing = listing.push(record_row(record));
            }
        }

        listing.push(self.pagination()).into()
    }

    fn pagination(&self) -> Element<'_, Message> {
        let previous = button(Text::new("\u{2039} Previous"))
            .style(styles::button::secondary)
            .padding([spacing::XXS, spacing::SM])
            .on_press_maybe((self.page > 1).then_some(Message::PreviousPage));

        let next = button(Text::new("Next \u{203a}"))
            .style(styles::button::secondary)
            .padding([spacing::XXS, spacing::SM])
            .on_press_maybe((self.page < self.total_pages).then_some(Message::NextPage));

        let label = Text::new(format!("Page {} of {}", self.page, self.total_pages))
            .size(typography::CAPTION)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center);

        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(previous)
            .push(label)
            .push(next)
            .into()
    }
}

fn header_row<'a>() -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(header_cell("Name", Length::Fill))
        .push(header_cell("Status", Length::Fixed(100.0)))
        .push(header_cell("Created", Length::Fixed(180.0)))
        .push(header_cell("Results", Length::Fixed(60.0)))
        .into()
}

fn header_cell(label: &str, width: Length) -> Element<'_, Message> {
    Text::new(label)
        .size(typography::CAPTION)
        .color(palette::GRAY_400)
        .width(width)
        .into()
}

fn record_row(record: &SearchRecord) -> Element<'_, Message> {
    let count = record
        .results_count
        .map_or_else(|| "\u{2013}".to_string(), |count| count.to_string());

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(record.names.as_str()).width(Length::Fill))
        .push(
            Container::new(status_badge(record.status)).width(Length::Fixed(100.0)),
        )
        .push(
            Text::new(record.created_at.as_str())
                .size(typography::CAPTION)
                .width(Length::Fixed(180.0)),
        )
        .push(Text::new(count).size(typography::CAPTION).width(Length::Fixed(60.0)));

    mouse_area(Container::new(row).padding([spacing::XS, spacing::XXS]).width(Length::Fill))
        .on_press(Message::RecordSelected(record.id.clone()))
        .into()
}

fn status_badge<'a>(status: SearchStatus) -> Element<'a, Message> {
    let color = match status {
        SearchStatus::Completed => palette::SUCCESS_500,
        SearchStatus::Pending => palette::WARNING_500,
        SearchStatus::Error => palette::ERROR_500,
    };

    Container::new(Text::new(status.to_string()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge(color))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:0")
    }

    fn listing_json(page: u32, total_pages: u32, names: &[&str]) -> PaginatedSearches {
        let items: Vec<serde_json::Value> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                serde_json::json!({
                    "id": format!("srch-{i}"),
                    "names": name,
                    "adverse_news_found": true,
                    "results_count": 2,
                    "created_at": "2024-05-01T10:00:00Z",
                })
            })
            .collect();
        serde_json::from_value(serde_json::json!({
            "items": items,
            "total": names.len(),
            "page": page,
            "limit": 5,
            "total_pages": total_pages,
        }))
        .expect("listing fixture should parse")
    }

    fn loaded_state(page: u32, total_pages: u32, names: &[&str]) -> State {
        let mut state = State::new(5);
        let _task = state.refresh(&client());
        let (_effect, _task) = state.handle_message(
            Message::PageFetched {
                generation: 1,
                result: Ok(listing_json(page, total_pages, names)),
            },
            &client(),
        );
        state
    }

    #[test]
    fn page_fetch_replaces_records() {
        let state = loaded_state(1, 3, &["John Doe", "Jane Roe"]);
        assert_eq!(state.records().len(), 2);
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn stale_page_result_is_discarded() {
        let mut state = loaded_state(1, 3, &["John Doe"]);
        let _task = state.refresh(&client());
        let (_effect, _task) = state.handle_message(
            Message::PageFetched {
                generation: 1,
                result: Ok(listing_json(2, 3, &["Stale Row"])),
            },
            &client(),
        );
        assert_eq!(state.records()[0].names, "John Doe");
    }

    #[test]
    fn listing_failure_keeps_existing_rows() {
        let mut state = loaded_state(1, 3, &["John Doe"]);
        let _task = state.refresh(&client());
        let (_effect, _task) = state.handle_message(
            Message::PageFetched {
                generation: 2,
                result: Err(Error::FetchFailed("boom".into())),
            },
            &client(),
        );
        assert_eq!(state.records().len(), 1);
        assert!(state.listing_error.is_some());
    }

    #[test]
    fn previous_page_is_blocked_on_first_page() {
        let mut state = loaded_state(1, 3, &["John Doe"]);
        let before = state.generation;
        let (_effect, _task) = state.handle_message(Message::PreviousPage, &client());
        assert_eq!(state.generation, before);
    }

    #[test]
    fn next_page_requests_a_new_generation() {
        let mut state = loaded_state(1, 3, &["John Doe"]);
        let before = state.generation;
        let (_effect, _task) = state.handle_message(Message::NextPage, &client());
        assert_eq!(state.generation, before + 1);
        assert!(state.loading);
    }

    #[test]
    fn empty_name_is_rejected_without_a_request() {
        let mut state = State::new(5);
        let (_effect, _task) =
            state.handle_message(Message::NameInputChanged("   ".into()), &client());
        let (_effect, _task) = state.handle_message(Message::SubmitSearch, &client());
        assert_eq!(state.input_error, Some("Name is required"));
        assert!(state.records().is_empty());
        assert!(!state.is_submitting());
    }

    #[test]
    fn submission_prepends_a_pending_record() {
        let mut state = loaded_state(1, 1, &["Existing Row"]);
        let (_effect, _task) =
            state.handle_message(Message::NameInputChanged("John Doe".into()), &client());
        let (_effect, _task) = state.handle_message(Message::SubmitSearch, &client());

        assert!(state.is_submitting());
        assert_eq!(state.records()[0].names, "John Doe");
        assert_eq!(state.records()[0].status, SearchStatus::Pending);
        assert_eq!(state.records().len(), 2);
        assert!(state.name_input.is_empty());
    }

    #[test]
    fn successful_submission_adopts_the_server_id() {
        let mut state = State::new(5);
        let (_effect, _task) =
            state.handle_message(Message::NameInputChanged("John Doe".into()), &client());
        let (_effect, _task) = state.handle_message(Message::SubmitSearch, &client());
        let local_id = state.records()[0].id.clone();

        let response: SearchResultResponse = serde_json::from_value(serde_json::json!({
            "search_id": "srch-9",
            "total_hits": 4,
            "results": [],
        }))
        .expect("response fixture should parse");

        let (_effect, _task) = state.handle_message(
            Message::SearchSubmitted {
                local_id,
                result: Ok(response),
            },
            &client(),
        );

        let record = &state.records()[0];
        assert_eq!(record.id, "srch-9");
        assert_eq!(record.status, SearchStatus::Completed);
        assert_eq!(record.results_count, Some(4));
        assert!(!state.is_submitting());
    }

    #[test]
    fn failed_submission_marks_the_record() {
        let mut state = State::new(5);
        let (_effect, _task) =
            state.handle_message(Message::NameInputChanged("John Doe".into()), &client());
        let (_effect, _task) = state.handle_message(Message::SubmitSearch, &client());
        let local_id = state.records()[0].id.clone();

        let (_effect, _task) = state.handle_message(
            Message::SearchSubmitted {
                local_id,
                result: Err(Error::FetchFailed("503".into())),
            },
            &client(),
        );

        assert_eq!(state.records()[0].status, SearchStatus::Error);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut state = State::new(5);
        let (_effect, _task) =
            state.handle_message(Message::NameInputChanged("John Doe".into()), &client());
        let (_effect, _task) = state.handle_message(Message::SubmitSearch, &client());
        let (_effect, _task) =
            state.handle_message(Message::NameInputChanged("Jane Roe".into()), &client());
        let (_effect, _task) = state.handle_message(Message::SubmitSearch, &client());

        assert_eq!(state.records().len(), 1);
    }

    #[test]
    fn selecting_a_row_requests_inspection() {
        let mut state = loaded_state(1, 1, &["John Doe"]);
        let id = state.records()[0].id.clone();
        let (effect, _task) = state.handle_message(Message::RecordSelected(id.clone()), &client());
        match effect {
            Effect::InspectRecord(record) => assert_eq!(record.id, id),
            other => panic!("expected inspect effect, got {other:?}"),
        }
    }

    #[test]
    fn selecting_an_unknown_row_does_nothing() {
        let mut state = loaded_state(1, 1, &["John Doe"]);
        let (effect, _task) =
            state.handle_message(Message::RecordSelected("missing".into()), &client());
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn records_view_renders() {
        let state = loaded_state(1, 1, &["John Doe"]);
        let _element = state.view();
    }

    #[test]
    fn empty_view_renders() {
        let state = State::new(5);
        let _element = state.view();
    }
}
