// src/models.rs
use serde::Serialize;

use crate::output::NumericRow;

/// The success payload: the run's raw log text plus its parsed numeric
/// rows. Field order is part of the wire shape.
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    pub verbose: String,
    pub output: Vec<NumericRow>,
}

#[derive(Serialize)]
pub struct FlagInfo {
    pub flag: char,
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct OptionsResponse {
    pub options: Vec<FlagInfo>,
}
