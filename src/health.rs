//! `GET /heartcheck` endpoint handler.
//!
//! Answers with a fixed text body. Other methods on the same path get
//! `405` from the method router; anything below the path is a `404`.

pub const HEARTCHECK_BODY: &str = "Heartcheck request processed\n";

pub async fn heartcheck_handler() -> &'static str {
    HEARTCHECK_BODY
}
