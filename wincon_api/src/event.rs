// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Input events as a sum type.
//!
//! The OS delivers input as a tagged union: one memory region with five
//! overlapping payload shapes, selected by a discriminant word. This module
//! re-expresses that as [`InputEvent`] — each variant carries only its own
//! payload — decoded explicitly from the raw discriminant at the FFI
//! boundary. A record whose tag matches none of the known kinds is rejected
//! rather than reinterpreted.

use wincon_ffi::{
    FOCUS_EVENT, FOCUS_EVENT_RECORD, INPUT_RECORD, INPUT_RECORD_EVENT, KEY_EVENT, KEY_EVENT_RECORD,
    MENU_EVENT, MENU_EVENT_RECORD, MOUSE_EVENT, MOUSE_EVENT_RECORD, WINDOW_BUFFER_SIZE_EVENT,
    WINDOW_BUFFER_SIZE_RECORD,
};

use crate::flags::{ControlKeyState, MouseButtons, MouseEventFlags};
use crate::geom::Coord;
use crate::{ConsoleError, Result};

/// A keyboard event. `unicode_char` is a UTF-16 code unit and may be zero
/// for keys with no character translation; surrogate pairs arrive as two
/// consecutive key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key_down: bool,
    pub repeat_count: u16,
    pub virtual_key_code: u16,
    pub virtual_scan_code: u16,
    pub unicode_char: u16,
    pub control_keys: ControlKeyState,
}

/// A mouse event in screen-buffer cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub position: Coord,
    pub buttons: MouseButtons,
    pub control_keys: ControlKeyState,
    pub flags: MouseEventFlags,
}

/// One console input event, decoded from the wire representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// The screen buffer was resized to the carried dimensions.
    WindowBufferSize(Coord),
    Menu { command_id: u32 },
    Focus { set_focus: bool },
}

impl InputEvent {
    /// Decode a raw record by its discriminant.
    ///
    /// Exactly one union member is read, and only after the tag has been
    /// matched against its kind; an unrecognized tag yields
    /// [`ConsoleError::UnknownEventType`] without touching the payload.
    pub fn decode(record: &INPUT_RECORD) -> Result<Self> {
        match record.EventType {
            KEY_EVENT => {
                // Tag says the key payload is the live union member.
                let raw = unsafe { record.Event.KeyEvent };
                Ok(Self::Key(KeyEvent {
                    key_down: raw.bKeyDown != 0,
                    repeat_count: raw.wRepeatCount,
                    virtual_key_code: raw.wVirtualKeyCode,
                    virtual_scan_code: raw.wVirtualScanCode,
                    unicode_char: raw.UnicodeChar,
                    control_keys: ControlKeyState::from_bits_retain(raw.dwControlKeyState),
                }))
            }
            MOUSE_EVENT => {
                let raw = unsafe { record.Event.MouseEvent };
                Ok(Self::Mouse(MouseEvent {
                    position: raw.dwMousePosition.into(),
                    buttons: MouseButtons::from_bits_retain(raw.dwButtonState),
                    control_keys: ControlKeyState::from_bits_retain(raw.dwControlKeyState),
                    flags: MouseEventFlags::from_bits_retain(raw.dwEventFlags),
                }))
            }
            WINDOW_BUFFER_SIZE_EVENT => {
                let raw = unsafe { record.Event.WindowBufferSizeEvent };
                Ok(Self::WindowBufferSize(raw.dwSize.into()))
            }
            MENU_EVENT => {
                let raw = unsafe { record.Event.MenuEvent };
                Ok(Self::Menu {
                    command_id: raw.dwCommandId,
                })
            }
            FOCUS_EVENT => {
                let raw = unsafe { record.Event.FocusEvent };
                Ok(Self::Focus {
                    set_focus: raw.bSetFocus != 0,
                })
            }
            tag => Err(ConsoleError::UnknownEventType(tag)),
        }
    }

    /// Encode back to the wire representation, for input injection.
    pub fn encode(&self) -> INPUT_RECORD {
        match *self {
            Self::Key(ev) => INPUT_RECORD {
                EventType: KEY_EVENT,
                Event: INPUT_RECORD_EVENT {
                    KeyEvent: KEY_EVENT_RECORD {
                        bKeyDown: ev.key_down.into(),
                        wRepeatCount: ev.repeat_count,
                        wVirtualKeyCode: ev.virtual_key_code,
                        wVirtualScanCode: ev.virtual_scan_code,
                        UnicodeChar: ev.unicode_char,
                        dwControlKeyState: ev.control_keys.bits(),
                    },
                },
            },
            Self::Mouse(ev) => INPUT_RECORD {
                EventType: MOUSE_EVENT,
                Event: INPUT_RECORD_EVENT {
                    MouseEvent: MOUSE_EVENT_RECORD {
                        dwMousePosition: ev.position.into(),
                        dwButtonState: ev.buttons.bits(),
                        dwControlKeyState: ev.control_keys.bits(),
                        dwEventFlags: ev.flags.bits(),
                    },
                },
            },
            Self::WindowBufferSize(size) => INPUT_RECORD {
                EventType: WINDOW_BUFFER_SIZE_EVENT,
                Event: INPUT_RECORD_EVENT {
                    WindowBufferSizeEvent: WINDOW_BUFFER_SIZE_RECORD {
                        dwSize: size.into(),
                    },
                },
            },
            Self::Menu { command_id } => INPUT_RECORD {
                EventType: MENU_EVENT,
                Event: INPUT_RECORD_EVENT {
                    MenuEvent: MENU_EVENT_RECORD {
                        dwCommandId: command_id,
                    },
                },
            },
            Self::Focus { set_focus } => INPUT_RECORD {
                EventType: FOCUS_EVENT,
                Event: INPUT_RECORD_EVENT {
                    FocusEvent: FOCUS_EVENT_RECORD {
                        bSetFocus: set_focus.into(),
                    },
                },
            },
        }
    }
}

impl TryFrom<&INPUT_RECORD> for InputEvent {
    type Error = ConsoleError;

    fn try_from(record: &INPUT_RECORD) -> Result<Self> {
        Self::decode(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_record(down: bool, ch: u16) -> INPUT_RECORD {
        InputEvent::Key(KeyEvent {
            key_down: down,
            repeat_count: 1,
            virtual_key_code: 0x41,
            virtual_scan_code: 0x1E,
            unicode_char: ch,
            control_keys: ControlKeyState::SHIFT,
        })
        .encode()
    }

    #[test]
    fn test_decode_key_event() {
        let record = key_record(true, b'A' as u16);
        match InputEvent::decode(&record).unwrap() {
            InputEvent::Key(ev) => {
                assert!(ev.key_down);
                assert_eq!(ev.unicode_char, b'A' as u16);
                assert_eq!(ev.virtual_key_code, 0x41);
                assert!(ev.control_keys.contains(ControlKeyState::SHIFT));
            }
            other => panic!("expected key event, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_mouse_event() {
        let record = InputEvent::Mouse(MouseEvent {
            position: Coord::new(12, 3),
            buttons: MouseButtons::LEFT_1ST,
            control_keys: ControlKeyState::empty(),
            flags: MouseEventFlags::DOUBLE_CLICK,
        })
        .encode();

        match InputEvent::decode(&record).unwrap() {
            InputEvent::Mouse(ev) => {
                assert_eq!(ev.position, Coord::new(12, 3));
                assert!(ev.buttons.contains(MouseButtons::LEFT_1ST));
                assert_eq!(ev.flags, MouseEventFlags::DOUBLE_CLICK);
            }
            other => panic!("expected mouse event, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_resize_menu_focus() {
        let resize = InputEvent::WindowBufferSize(Coord::new(120, 40)).encode();
        assert_eq!(
            InputEvent::decode(&resize).unwrap(),
            InputEvent::WindowBufferSize(Coord::new(120, 40))
        );

        let menu = InputEvent::Menu { command_id: 7 }.encode();
        assert_eq!(
            InputEvent::decode(&menu).unwrap(),
            InputEvent::Menu { command_id: 7 }
        );

        let focus = InputEvent::Focus { set_focus: true }.encode();
        assert_eq!(
            InputEvent::decode(&focus).unwrap(),
            InputEvent::Focus { set_focus: true }
        );
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let mut record = key_record(true, 0);
        record.EventType = 0x20; // one past the last defined kind
        match InputEvent::decode(&record) {
            Err(ConsoleError::UnknownEventType(0x20)) => {}
            other => panic!("expected unknown-event-type error, got {:?}", other),
        }

        record.EventType = 0;
        assert!(InputEvent::decode(&record).is_err());
    }

    #[test]
    fn test_round_trip_preserves_payload() {
        let original = InputEvent::Key(KeyEvent {
            key_down: false,
            repeat_count: 3,
            virtual_key_code: 0x0D,
            virtual_scan_code: 0x1C,
            unicode_char: 0x000D,
            control_keys: ControlKeyState::LEFT_CTRL | ControlKeyState::NUMLOCK_ON,
        });
        let decoded = InputEvent::decode(&original.encode()).unwrap();
        assert_eq!(decoded, original);
    }
}
