// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only the global keyboard shortcuts are routed here. Pointer input reaches
//! the preview surfaces through their canvas programs.

use super::Message;
use iced::{event, keyboard, Event, Subscription};

/// Ctrl+O / Ctrl+S (Cmd on macOS), unless a widget already handled the key.
pub fn create_shortcut_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        shortcut_message(&event)
    })
}

fn shortcut_message(event: &Event) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character(c),
            modifiers,
            ..
        }) if modifiers.command() => match c.as_str() {
            "o" | "O" => Some(Message::OpenShortcut),
            "s" | "S" => Some(Message::SaveShortcut),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::{key, Key, Location, Modifiers};

    fn key_press(c: &str, modifiers: Modifiers) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Character(c.into()),
            modified_key: Key::Character(c.into()),
            physical_key: key::Physical::Code(key::Code::KeyA),
            location: Location::Standard,
            modifiers,
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn command_o_opens() {
        assert!(matches!(
            shortcut_message(&key_press("o", Modifiers::COMMAND)),
            Some(Message::OpenShortcut)
        ));
    }

    #[test]
    fn command_s_saves() {
        assert!(matches!(
            shortcut_message(&key_press("s", Modifiers::COMMAND)),
            Some(Message::SaveShortcut)
        ));
    }

    #[test]
    fn plain_keys_are_ignored() {
        assert!(shortcut_message(&key_press("s", Modifiers::empty())).is_none());
        assert!(shortcut_message(&key_press("x", Modifiers::COMMAND)).is_none());
    }
}
