// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! `kernel32.dll` console entry points.
//!
//! Parameter order and width follow the SDK headers exactly. Functions that
//! the OS splits by character set are declared in their explicit-width
//! Unicode (`W`) spelling only.
//!
//! Most functions report failure through a `FALSE`/zero return plus the
//! thread-local last-error value; callers must fetch `GetLastError`
//! immediately after a failing call, before any other operation overwrites
//! it. The pseudo-console functions return an `HRESULT` instead.

use core::ffi::c_void;

use crate::types::{
    BOOL, CHAR_INFO, CONSOLE_CURSOR_INFO, CONSOLE_FONT_INFO, CONSOLE_FONT_INFOEX,
    CONSOLE_HISTORY_INFO, CONSOLE_READCONSOLE_CONTROL, CONSOLE_SCREEN_BUFFER_INFO,
    CONSOLE_SCREEN_BUFFER_INFOEX, CONSOLE_SELECTION_INFO, COORD, DWORD, HANDLE, HPCON, HRESULT,
    HWND, INPUT_RECORD, LPCWSTR, PHANDLER_ROUTINE, SMALL_RECT, UINT, WCHAR, WORD,
};

#[link(name = "kernel32")]
extern "system" {
    pub fn AddConsoleAliasW(Source: LPCWSTR, Target: LPCWSTR, ExeName: LPCWSTR) -> BOOL;

    pub fn AllocConsole() -> BOOL;

    pub fn AttachConsole(dwProcessId: DWORD) -> BOOL;

    pub fn CloseHandle(hObject: HANDLE) -> BOOL;

    pub fn ClosePseudoConsole(hPC: HPCON);

    pub fn CreateConsoleScreenBuffer(
        dwDesiredAccess: DWORD,
        dwShareMode: DWORD,
        lpSecurityAttributes: *const c_void,
        dwFlags: DWORD,
        lpScreenBufferData: *mut c_void,
    ) -> HANDLE;

    pub fn CreatePseudoConsole(
        size: COORD,
        hInput: HANDLE,
        hOutput: HANDLE,
        dwFlags: DWORD,
        phPC: *mut HPCON,
    ) -> HRESULT;

    pub fn ExpungeConsoleCommandHistoryW(ExeName: LPCWSTR);

    pub fn FillConsoleOutputAttribute(
        hConsoleOutput: HANDLE,
        wAttribute: WORD,
        nLength: DWORD,
        dwWriteCoord: COORD,
        lpNumberOfAttrsWritten: *mut DWORD,
    ) -> BOOL;

    pub fn FillConsoleOutputCharacterW(
        hConsoleOutput: HANDLE,
        cCharacter: WCHAR,
        nLength: DWORD,
        dwWriteCoord: COORD,
        lpNumberOfCharsWritten: *mut DWORD,
    ) -> BOOL;

    pub fn FlushConsoleInputBuffer(hConsoleInput: HANDLE) -> BOOL;

    pub fn FreeConsole() -> BOOL;

    pub fn GenerateConsoleCtrlEvent(dwCtrlEvent: DWORD, dwProcessGroupId: DWORD) -> BOOL;

    pub fn GetConsoleAliasW(
        lpSource: LPCWSTR,
        lpTargetBuffer: *mut WCHAR,
        TargetBufferLength: DWORD,
        lpExeName: LPCWSTR,
    ) -> DWORD;

    pub fn GetConsoleAliasesW(
        lpAliasBuffer: *mut WCHAR,
        AliasBufferLength: DWORD,
        lpExeName: LPCWSTR,
    ) -> DWORD;

    pub fn GetConsoleAliasesLengthW(lpExeName: LPCWSTR) -> DWORD;

    pub fn GetConsoleAliasExesW(lpExeNameBuffer: *mut WCHAR, ExeNameBufferLength: DWORD) -> DWORD;

    pub fn GetConsoleAliasExesLengthW() -> DWORD;

    pub fn GetConsoleCommandHistoryW(
        Commands: *mut WCHAR,
        CommandBufferLength: DWORD,
        ExeName: LPCWSTR,
    ) -> DWORD;

    pub fn GetConsoleCommandHistoryLengthW(ExeName: LPCWSTR) -> DWORD;

    pub fn GetConsoleCP() -> UINT;

    pub fn GetConsoleCursorInfo(
        hConsoleOutput: HANDLE,
        lpConsoleCursorInfo: *mut CONSOLE_CURSOR_INFO,
    ) -> BOOL;

    pub fn GetConsoleDisplayMode(lpModeFlags: *mut DWORD) -> BOOL;

    pub fn GetConsoleFontSize(hConsoleOutput: HANDLE, nFont: DWORD) -> COORD;

    pub fn GetConsoleHistoryInfo(lpConsoleHistoryInfo: *mut CONSOLE_HISTORY_INFO) -> BOOL;

    pub fn GetConsoleMode(hConsoleHandle: HANDLE, lpMode: *mut DWORD) -> BOOL;

    pub fn GetConsoleOriginalTitleW(lpConsoleTitle: *mut WCHAR, nSize: DWORD) -> DWORD;

    pub fn GetConsoleOutputCP() -> UINT;

    pub fn GetConsoleProcessList(lpdwProcessList: *mut DWORD, dwProcessCount: DWORD) -> DWORD;

    pub fn GetConsoleScreenBufferInfo(
        hConsoleOutput: HANDLE,
        lpConsoleScreenBufferInfo: *mut CONSOLE_SCREEN_BUFFER_INFO,
    ) -> BOOL;

    pub fn GetConsoleScreenBufferInfoEx(
        hConsoleOutput: HANDLE,
        lpConsoleScreenBufferInfoEx: *mut CONSOLE_SCREEN_BUFFER_INFOEX,
    ) -> BOOL;

    pub fn GetConsoleSelectionInfo(lpConsoleSelectionInfo: *mut CONSOLE_SELECTION_INFO) -> BOOL;

    pub fn GetConsoleTitleW(lpConsoleTitle: *mut WCHAR, nSize: DWORD) -> DWORD;

    pub fn GetConsoleWindow() -> HWND;

    pub fn GetCurrentConsoleFont(
        hConsoleOutput: HANDLE,
        bMaximumWindow: BOOL,
        lpConsoleCurrentFont: *mut CONSOLE_FONT_INFO,
    ) -> BOOL;

    pub fn GetCurrentConsoleFontEx(
        hConsoleOutput: HANDLE,
        bMaximumWindow: BOOL,
        lpConsoleCurrentFontEx: *mut CONSOLE_FONT_INFOEX,
    ) -> BOOL;

    pub fn GetLargestConsoleWindowSize(hConsoleOutput: HANDLE) -> COORD;

    pub fn GetLastError() -> DWORD;

    pub fn GetNumberOfConsoleInputEvents(
        hConsoleInput: HANDLE,
        lpcNumberOfEvents: *mut DWORD,
    ) -> BOOL;

    pub fn GetNumberOfConsoleMouseButtons(lpNumberOfMouseButtons: *mut DWORD) -> BOOL;

    pub fn GetStdHandle(nStdHandle: DWORD) -> HANDLE;

    pub fn PeekConsoleInputW(
        hConsoleInput: HANDLE,
        lpBuffer: *mut INPUT_RECORD,
        nLength: DWORD,
        lpNumberOfEventsRead: *mut DWORD,
    ) -> BOOL;

    pub fn ReadConsoleW(
        hConsoleInput: HANDLE,
        lpBuffer: *mut c_void,
        nNumberOfCharsToRead: DWORD,
        lpNumberOfCharsRead: *mut DWORD,
        pInputControl: *const CONSOLE_READCONSOLE_CONTROL,
    ) -> BOOL;

    pub fn ReadConsoleInputW(
        hConsoleInput: HANDLE,
        lpBuffer: *mut INPUT_RECORD,
        nLength: DWORD,
        lpNumberOfEventsRead: *mut DWORD,
    ) -> BOOL;

    pub fn ReadConsoleOutputAttribute(
        hConsoleOutput: HANDLE,
        lpAttribute: *mut WORD,
        nLength: DWORD,
        dwReadCoord: COORD,
        lpNumberOfAttrsRead: *mut DWORD,
    ) -> BOOL;

    pub fn ReadConsoleOutputCharacterW(
        hConsoleOutput: HANDLE,
        lpCharacter: *mut WCHAR,
        nLength: DWORD,
        dwReadCoord: COORD,
        lpNumberOfCharsRead: *mut DWORD,
    ) -> BOOL;

    pub fn ResizePseudoConsole(hPC: HPCON, size: COORD) -> HRESULT;

    pub fn ScrollConsoleScreenBufferW(
        hConsoleOutput: HANDLE,
        lpScrollRectangle: *const SMALL_RECT,
        lpClipRectangle: *const SMALL_RECT,
        dwDestinationOrigin: COORD,
        lpFill: *const CHAR_INFO,
    ) -> BOOL;

    pub fn SetConsoleActiveScreenBuffer(hConsoleOutput: HANDLE) -> BOOL;

    pub fn SetConsoleCP(wCodePageID: UINT) -> BOOL;

    pub fn SetConsoleCtrlHandler(HandlerRoutine: PHANDLER_ROUTINE, Add: BOOL) -> BOOL;

    pub fn SetConsoleCursorInfo(
        hConsoleOutput: HANDLE,
        lpConsoleCursorInfo: *const CONSOLE_CURSOR_INFO,
    ) -> BOOL;

    pub fn SetConsoleCursorPosition(hConsoleOutput: HANDLE, dwCursorPosition: COORD) -> BOOL;

    pub fn SetConsoleDisplayMode(
        hConsoleOutput: HANDLE,
        dwFlags: DWORD,
        lpNewScreenBufferDimensions: *mut COORD,
    ) -> BOOL;

    pub fn SetConsoleHistoryInfo(lpConsoleHistoryInfo: *const CONSOLE_HISTORY_INFO) -> BOOL;

    pub fn SetConsoleMode(hConsoleHandle: HANDLE, dwMode: DWORD) -> BOOL;

    pub fn SetConsoleNumberOfCommandsW(Number: DWORD, ExeName: LPCWSTR) -> BOOL;

    pub fn SetConsoleOutputCP(wCodePageID: UINT) -> BOOL;

    pub fn SetConsoleScreenBufferInfoEx(
        hConsoleOutput: HANDLE,
        lpConsoleScreenBufferInfoEx: *const CONSOLE_SCREEN_BUFFER_INFOEX,
    ) -> BOOL;

    pub fn SetConsoleScreenBufferSize(hConsoleOutput: HANDLE, dwSize: COORD) -> BOOL;

    pub fn SetConsoleTextAttribute(hConsoleOutput: HANDLE, wAttributes: WORD) -> BOOL;

    pub fn SetConsoleTitleW(lpConsoleTitle: LPCWSTR) -> BOOL;

    pub fn SetConsoleWindowInfo(
        hConsoleOutput: HANDLE,
        bAbsolute: BOOL,
        lpConsoleWindow: *const SMALL_RECT,
    ) -> BOOL;

    pub fn SetCurrentConsoleFontEx(
        hConsoleOutput: HANDLE,
        bMaximumWindow: BOOL,
        lpConsoleCurrentFontEx: *const CONSOLE_FONT_INFOEX,
    ) -> BOOL;

    pub fn SetStdHandle(nStdHandle: DWORD, hHandle: HANDLE) -> BOOL;

    pub fn WriteConsoleW(
        hConsoleOutput: HANDLE,
        lpBuffer: *const c_void,
        nNumberOfCharsToWrite: DWORD,
        lpNumberOfCharsWritten: *mut DWORD,
        lpReserved: *mut c_void,
    ) -> BOOL;

    pub fn WriteConsoleInputW(
        hConsoleInput: HANDLE,
        lpBuffer: *const INPUT_RECORD,
        nLength: DWORD,
        lpNumberOfEventsWritten: *mut DWORD,
    ) -> BOOL;

    pub fn WriteConsoleOutputAttribute(
        hConsoleOutput: HANDLE,
        lpAttribute: *const WORD,
        nLength: DWORD,
        dwWriteCoord: COORD,
        lpNumberOfAttrsWritten: *mut DWORD,
    ) -> BOOL;

    pub fn WriteConsoleOutputCharacterW(
        hConsoleOutput: HANDLE,
        lpCharacter: LPCWSTR,
        nLength: DWORD,
        dwWriteCoord: COORD,
        lpNumberOfCharsWritten: *mut DWORD,
    ) -> BOOL;
}
