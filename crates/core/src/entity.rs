//! Geographic entities: provinces and the poverty counties they contain.

use serde::{Deserialize, Serialize};

/// A province row. Ids are 1-based in insertion order, matching the identity
/// counter reset emitted in the seed script preamble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub id: u32,
    pub name: String,
}

/// A poverty county — the entity whose yearly time series rules evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct County {
    pub id: u32,
    pub name: String,
    pub province_id: u32,
    /// Year the county was delisted from the poverty register, if it was.
    pub delisting_year: Option<u16>,
}
