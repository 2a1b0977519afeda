// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Numeric constants of the console ABI. Values are contractually fixed by
//! the OS and must never be renumbered.

use crate::types::{DWORD, HANDLE, WORD};

pub const INVALID_HANDLE_VALUE: HANDLE = -1;

/// `AttachConsole` pseudo process id: attach to the parent's console.
pub const ATTACH_PARENT_PROCESS: DWORD = 0xFFFF_FFFF;

// GetStdHandle / SetStdHandle device indices ((DWORD)-10 .. (DWORD)-12).
pub const STD_INPUT_HANDLE: DWORD = 0xFFFF_FFF6;
pub const STD_OUTPUT_HANDLE: DWORD = 0xFFFF_FFF5;
pub const STD_ERROR_HANDLE: DWORD = 0xFFFF_FFF4;

// Generic access rights (CreateConsoleScreenBuffer).
pub const GENERIC_READ: DWORD = 0x8000_0000;
pub const GENERIC_WRITE: DWORD = 0x4000_0000;

// Share modes (CreateConsoleScreenBuffer).
pub const FILE_SHARE_READ: DWORD = 0x1;
pub const FILE_SHARE_WRITE: DWORD = 0x2;

// Screen buffer type (CreateConsoleScreenBuffer dwFlags).
pub const CONSOLE_TEXTMODE_BUFFER: DWORD = 0x1;

// Control events (GenerateConsoleCtrlEvent, handler routine argument).
pub const CTRL_C_EVENT: DWORD = 0;
pub const CTRL_BREAK_EVENT: DWORD = 1;
pub const CTRL_CLOSE_EVENT: DWORD = 2;
pub const CTRL_LOGOFF_EVENT: DWORD = 5;
pub const CTRL_SHUTDOWN_EVENT: DWORD = 6;

// INPUT_RECORD event-type tags.
pub const KEY_EVENT: WORD = 0x1;
pub const MOUSE_EVENT: WORD = 0x2;
pub const WINDOW_BUFFER_SIZE_EVENT: WORD = 0x4;
pub const MENU_EVENT: WORD = 0x8;
pub const FOCUS_EVENT: WORD = 0x10;

// Control-key state bits (key and mouse event records, read control).
pub const RIGHT_ALT_PRESSED: DWORD = 0x1;
pub const LEFT_ALT_PRESSED: DWORD = 0x2;
pub const RIGHT_CTRL_PRESSED: DWORD = 0x4;
pub const LEFT_CTRL_PRESSED: DWORD = 0x8;
pub const SHIFT_PRESSED: DWORD = 0x10;
pub const NUMLOCK_ON: DWORD = 0x20;
pub const SCROLLLOCK_ON: DWORD = 0x40;
pub const CAPSLOCK_ON: DWORD = 0x80;
pub const ENHANCED_KEY: DWORD = 0x100;

// Mouse button state bits.
pub const FROM_LEFT_1ST_BUTTON_PRESSED: DWORD = 0x1;
pub const RIGHTMOST_BUTTON_PRESSED: DWORD = 0x2;
pub const FROM_LEFT_2ND_BUTTON_PRESSED: DWORD = 0x4;
pub const FROM_LEFT_3RD_BUTTON_PRESSED: DWORD = 0x8;
pub const FROM_LEFT_4TH_BUTTON_PRESSED: DWORD = 0x10;

// Mouse event flag bits.
pub const MOUSE_MOVED: DWORD = 0x1;
pub const DOUBLE_CLICK: DWORD = 0x2;
pub const MOUSE_WHEELED: DWORD = 0x4;
pub const MOUSE_HWHEELED: DWORD = 0x8;

// Input mode bits (GetConsoleMode / SetConsoleMode on an input handle).
pub const ENABLE_PROCESSED_INPUT: DWORD = 0x1;
pub const ENABLE_LINE_INPUT: DWORD = 0x2;
pub const ENABLE_ECHO_INPUT: DWORD = 0x4;
pub const ENABLE_WINDOW_INPUT: DWORD = 0x8;
pub const ENABLE_MOUSE_INPUT: DWORD = 0x10;
pub const ENABLE_INSERT_MODE: DWORD = 0x20;
pub const ENABLE_QUICK_EDIT_MODE: DWORD = 0x40;
pub const ENABLE_EXTENDED_FLAGS: DWORD = 0x80;
pub const ENABLE_AUTO_POSITION: DWORD = 0x100;
pub const ENABLE_VIRTUAL_TERMINAL_INPUT: DWORD = 0x200;

// Output mode bits (GetConsoleMode / SetConsoleMode on a screen buffer).
pub const ENABLE_PROCESSED_OUTPUT: DWORD = 0x1;
pub const ENABLE_WRAP_AT_EOL_OUTPUT: DWORD = 0x2;
pub const ENABLE_VIRTUAL_TERMINAL_PROCESSING: DWORD = 0x4;
pub const DISABLE_NEWLINE_AUTO_RETURN: DWORD = 0x8;
pub const ENABLE_LVB_GRID_WORLDWIDE: DWORD = 0x10;

// Character attribute bits (CHAR_INFO, SetConsoleTextAttribute).
pub const FOREGROUND_BLUE: WORD = 0x1;
pub const FOREGROUND_GREEN: WORD = 0x2;
pub const FOREGROUND_RED: WORD = 0x4;
pub const FOREGROUND_INTENSITY: WORD = 0x8;
pub const BACKGROUND_BLUE: WORD = 0x10;
pub const BACKGROUND_GREEN: WORD = 0x20;
pub const BACKGROUND_RED: WORD = 0x40;
pub const BACKGROUND_INTENSITY: WORD = 0x80;
pub const COMMON_LVB_LEADING_BYTE: WORD = 0x100;
pub const COMMON_LVB_TRAILING_BYTE: WORD = 0x200;
pub const COMMON_LVB_GRID_HORIZONTAL: WORD = 0x400;
pub const COMMON_LVB_GRID_LVERTICAL: WORD = 0x800;
pub const COMMON_LVB_GRID_RVERTICAL: WORD = 0x1000;
pub const COMMON_LVB_REVERSE_VIDEO: WORD = 0x4000;
pub const COMMON_LVB_UNDERSCORE: WORD = 0x8000;

// Selection state bits (CONSOLE_SELECTION_INFO).
pub const CONSOLE_NO_SELECTION: DWORD = 0x0;
pub const CONSOLE_SELECTION_IN_PROGRESS: DWORD = 0x1;
pub const CONSOLE_SELECTION_NOT_EMPTY: DWORD = 0x2;
pub const CONSOLE_MOUSE_SELECTION: DWORD = 0x4;
pub const CONSOLE_MOUSE_DOWN: DWORD = 0x8;

// Display mode bits, as reported by GetConsoleDisplayMode.
pub const CONSOLE_FULLSCREEN: DWORD = 0x1;
pub const CONSOLE_FULLSCREEN_HARDWARE: DWORD = 0x2;

// Display mode requests for SetConsoleDisplayMode.
pub const CONSOLE_FULLSCREEN_MODE: DWORD = 0x1;
pub const CONSOLE_WINDOWED_MODE: DWORD = 0x2;

// History settings (CONSOLE_HISTORY_INFO dwFlags).
pub const HISTORY_NO_DUP_FLAG: DWORD = 0x1;

// Pseudo-console creation flags.
pub const PSEUDOCONSOLE_INHERIT_CURSOR: DWORD = 0x1;

// Last-error codes the binding surface itself distinguishes.
pub const ERROR_SUCCESS: DWORD = 0;
pub const ERROR_INVALID_HANDLE: DWORD = 6;
pub const ERROR_INSUFFICIENT_BUFFER: DWORD = 122;
