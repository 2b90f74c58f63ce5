// SPDX-License-Identifier: MPL-2.0
//! Top-level view dispatch.
//!
//! One screen is live at a time; this module picks which component
//! renders and stretches it to fill the window.

use super::{Message, Screen};
use crate::ui::inspector;
use crate::ui::records;
use iced::widget::Container;
use iced::{Element, Length};

/// Borrowed component state the view needs for one frame.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub records: &'a records::State,
    pub inspector: &'a inspector::State,
}

/// Renders whichever screen is active.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match ctx.screen {
        Screen::Records => ctx.records.view().map(Message::Records),
        Screen::Inspector => ctx.inspector.view().map(Message::Inspector),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
