// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for the two
//! screens and turns their effects into screen switches and follow-up
//! fetches.

use super::{Message, Screen};
use crate::api::ApiClient;
use crate::ui::inspector;
use crate::ui::records;
use iced::Task;

/// Mutable application state shared by the message handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub records: &'a mut records::State,
    pub inspector: &'a mut inspector::State,
    pub api: &'a ApiClient,
}

pub fn handle_records_message(
    ctx: &mut UpdateContext<'_>,
    message: records::Message,
) -> Task<Message> {
    let (effect, task) = ctx.records.handle_message(message, ctx.api);

    let follow_up = match effect {
        records::Effect::None => Task::none(),
        records::Effect::InspectRecord(record) => {
            *ctx.screen = Screen::Inspector;
            ctx.inspector
                .open(record, ctx.api)
                .map(Message::Inspector)
        }
    };

    Task::batch([task.map(Message::Records), follow_up])
}

pub fn handle_inspector_message(
    ctx: &mut UpdateContext<'_>,
    message: inspector::Message,
) -> Task<Message> {
    let (effect, task) = ctx.inspector.handle_message(message, ctx.api);

    let follow_up = match effect {
        inspector::Effect::None => Task::none(),
        inspector::Effect::CloseRequested => {
            // Clears the selection; statuses may have changed server-side
            // while the inspector was open, so the listing is refetched.
            ctx.inspector.close();
            *ctx.screen = Screen::Records;
            ctx.records.refresh(ctx.api).map(Message::Records)
        }
    };

    Task::batch([task.map(Message::Inspector), follow_up])
}
