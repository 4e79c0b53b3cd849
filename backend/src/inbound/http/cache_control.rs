//! Cache-control policies for HTTP handlers.

/// Order snapshots change as the kitchen updates them; never reuse a stale one.
pub const ORDER_NO_CACHE: &str = "private, no-cache, must-revalidate";

/// Probe responses must never be cached by intermediaries.
pub const NO_STORE: &str = "no-store";

/// Cache-control header tuple for order responses.
pub const fn order_no_cache_header() -> (&'static str, &'static str) {
    ("Cache-Control", ORDER_NO_CACHE)
}
