// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! The "query length, then fill" idiom.
//!
//! Several console functions report a required buffer length on a first
//! call, then fill a caller-allocated buffer on a second. Between the two
//! calls another process attached to the same console may grow the data.
//! The combined wrappers built on this helper therefore never truncate:
//! if the fill call finds the buffer too small, the condition is surfaced
//! as [`ConsoleError::BufferGrew`] for the caller to retry.
//!
//! The helper takes the two halves as closures so its contract is testable
//! without an OS behind it.

use crate::{ConsoleError, Result};

/// Result of one fill attempt over a caller-sized buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// The buffer was large enough; this many leading units are valid.
    Filled(usize),
    /// The buffer was too small; this is the requirement now.
    NeedsCapacity(usize),
}

/// Run the two-call idiom once: query the required length, allocate exactly
/// that, and fill.
///
/// A zero requirement short-circuits to an empty buffer without invoking
/// the fill half, so nothing is ever written through an empty destination.
pub fn query_then_fill<Q, F>(mut query: Q, mut fill: F) -> Result<Vec<u16>>
where
    Q: FnMut() -> Result<usize>,
    F: FnMut(&mut [u16]) -> Result<FillOutcome>,
{
    let required = query()?;
    if required == 0 {
        return Ok(Vec::new());
    }

    let mut buf = vec![0u16; required];
    match fill(&mut buf)? {
        FillOutcome::Filled(used) => {
            buf.truncate(used.min(required));
            Ok(buf)
        }
        FillOutcome::NeedsCapacity(now_required) => Err(ConsoleError::BufferGrew {
            first: required,
            second: now_required,
        }),
    }
}

/// Split a NUL-separated UTF-16 listing (aliases, history entries) into
/// owned strings, dropping a trailing terminator if present.
pub fn split_nul_delimited(units: &[u16]) -> Vec<String> {
    units
        .split(|&u| u == 0)
        .filter(|chunk| !chunk.is_empty())
        .map(String::from_utf16_lossy)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_requirement_fills() {
        let data: Vec<u16> = "hello".encode_utf16().collect();
        let result = query_then_fill(
            || Ok(data.len()),
            |buf| {
                buf.copy_from_slice(&data);
                Ok(FillOutcome::Filled(data.len()))
            },
        )
        .unwrap();
        assert_eq!(String::from_utf16_lossy(&result), "hello");
    }

    #[test]
    fn test_zero_requirement_never_fills() {
        let mut fill_calls = 0;
        let result = query_then_fill(
            || Ok(0),
            |_buf| {
                fill_calls += 1;
                Ok(FillOutcome::Filled(0))
            },
        )
        .unwrap();
        assert!(result.is_empty());
        assert_eq!(fill_calls, 0, "empty destination must not be written");
    }

    #[test]
    fn test_growth_is_reported_not_truncated() {
        let err = query_then_fill(|| Ok(4), |_buf| Ok(FillOutcome::NeedsCapacity(9))).unwrap_err();
        match err {
            ConsoleError::BufferGrew { first, second } => {
                assert_eq!(first, 4);
                assert_eq!(second, 9);
            }
            other => panic!("expected BufferGrew, got {:?}", other),
        }
    }

    #[test]
    fn test_short_fill_truncates_to_used() {
        let result = query_then_fill(
            || Ok(8),
            |buf| {
                buf[0] = b'x' as u16;
                buf[1] = b'y' as u16;
                Ok(FillOutcome::Filled(2))
            },
        )
        .unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_query_error_propagates() {
        let err = query_then_fill(
            || {
                Err(ConsoleError::Api {
                    function: "GetConsoleAliasesLengthW",
                    code: 6,
                })
            },
            |_buf| Ok(FillOutcome::Filled(0)),
        )
        .unwrap_err();
        assert!(matches!(err, ConsoleError::Api { code: 6, .. }));
    }

    #[test]
    fn test_split_nul_delimited() {
        let raw: Vec<u16> = "doskey=cmd\0cls=clear\0".encode_utf16().collect();
        let parts = split_nul_delimited(&raw);
        assert_eq!(parts, vec!["doskey=cmd".to_string(), "cls=clear".to_string()]);

        assert!(split_nul_delimited(&[]).is_empty());
        assert!(split_nul_delimited(&[0, 0]).is_empty());
    }
}
