//! DTOs for alias resolution.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LongUrlResponse {
    pub long_url: String,
}
