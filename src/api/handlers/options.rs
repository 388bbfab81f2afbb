// src/api/handlers/options.rs
use actix_web::{HttpResponse, Result};

use crate::models::{FlagInfo, OptionsResponse};
use crate::options::ALLOWED_FLAGS;

/// List the accepted simulation flags and what each one means.
pub async fn list_options() -> Result<HttpResponse> {
    let options = ALLOWED_FLAGS
        .iter()
        .map(|&(flag, description)| FlagInfo { flag, description })
        .collect();

    Ok(HttpResponse::Ok().json(OptionsResponse { options }))
}
