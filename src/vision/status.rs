//! Canonical RPC status codes used by Google APIs.
//!
//! The REST surface reports failures as `{code, message, status}` where `code`
//! is the HTTP status and `status` the canonical name. Per-image failures
//! inside a successful response carry the numeric canonical code directly.

pub const OK: i64 = 0;
pub const UNKNOWN: i64 = 2;
pub const DEADLINE_EXCEEDED: i64 = 4;
pub const PERMISSION_DENIED: i64 = 7;
pub const UNAVAILABLE: i64 = 14;

const CANONICAL: &[(&str, i64)] = &[
    ("OK", 0),
    ("CANCELLED", 1),
    ("UNKNOWN", 2),
    ("INVALID_ARGUMENT", 3),
    ("DEADLINE_EXCEEDED", 4),
    ("NOT_FOUND", 5),
    ("ALREADY_EXISTS", 6),
    ("PERMISSION_DENIED", 7),
    ("RESOURCE_EXHAUSTED", 8),
    ("FAILED_PRECONDITION", 9),
    ("ABORTED", 10),
    ("OUT_OF_RANGE", 11),
    ("UNIMPLEMENTED", 12),
    ("INTERNAL", 13),
    ("UNAVAILABLE", 14),
    ("DATA_LOSS", 15),
    ("UNAUTHENTICATED", 16),
];

/// Numeric code for a canonical status name. Unrecognised names are `UNKNOWN`.
pub fn code_for_name(name: &str) -> i64 {
    CANONICAL
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
        .unwrap_or(UNKNOWN)
}

/// Canonical code implied by an HTTP status, for errors that arrive without
/// a `status` name.
pub fn code_for_http(status: u16) -> i64 {
    match status {
        200..=299 => OK,
        400 => code_for_name("INVALID_ARGUMENT"),
        401 => code_for_name("UNAUTHENTICATED"),
        403 => PERMISSION_DENIED,
        404 => code_for_name("NOT_FOUND"),
        409 => code_for_name("ABORTED"),
        429 => code_for_name("RESOURCE_EXHAUSTED"),
        499 => code_for_name("CANCELLED"),
        501 => code_for_name("UNIMPLEMENTED"),
        503 => UNAVAILABLE,
        504 => DEADLINE_EXCEEDED,
        500..=599 => code_for_name("INTERNAL"),
        _ => UNKNOWN,
    }
}
