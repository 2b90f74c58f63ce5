// SPDX-License-Identifier: MPL-2.0
//! Raw-event routing.
//!
//! Widget messages cover most input; the inspector additionally needs
//! native mouse and keyboard events, so those are subscribed to only
//! while it is on screen.

use super::{Message, Screen};
use crate::ui::inspector;
use iced::{event, Subscription};

/// Subscribes to the raw events the active screen consumes.
///
/// The records screen is driven entirely by widget messages and needs no
/// raw events. The inspector tracks the cursor for image dragging, consumes
/// wheel scroll for zoom, and listens for Escape, so it receives mouse
/// events unconditionally and keyboard events that no widget captured.
pub fn for_screen(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Records => Subscription::none(),
        Screen::Inspector => event::listen_with(|event, status, window_id| {
            // Route wheel scroll to the inspector for zoom (always, to
            // override scrollable)
            if matches!(
                event,
                event::Event::Mouse(iced::mouse::Event::WheelScrolled { .. })
            ) {
                return Some(Message::Inspector(inspector::Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                }));
            }

            // Route mouse events to the inspector for cursor tracking and pan
            if matches!(
                event,
                event::Event::Mouse(
                    iced::mouse::Event::CursorMoved { .. }
                        | iced::mouse::Event::CursorLeft
                        | iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)
                        | iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left)
                )
            ) {
                return Some(Message::Inspector(inspector::Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                }));
            }

            // Route keyboard events the widgets did not capture
            if let event::Event::Keyboard(..) = &event {
                return match status {
                    event::Status::Ignored => {
                        Some(Message::Inspector(inspector::Message::RawEvent {
                            window: window_id,
                            event: event.clone(),
                        }))
                    }
                    event::Status::Captured => None,
                };
            }

            None
        }),
    }
}
