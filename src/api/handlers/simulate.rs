// src/api/handlers/simulate.rs
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::AppState;
use crate::errors::SimError;
use crate::options::OptionSet;
use crate::runner;

#[derive(Deserialize)]
pub struct CallbackQuery {
    /// Presence alone switches the response to JSONP, whatever the value.
    pub callback: Option<String>,
}

/// POST /api/v1/simulate — decode the parameter body, run the
/// executable, and return `{verbose, output}` as JSON or JSONP.
pub async fn simulate(
    state: web::Data<AppState>,
    query: web::Query<CallbackQuery>,
    body: web::Bytes,
) -> Result<HttpResponse, SimError> {
    let options = decode_options(&body, state.config.strict_decode)?;
    let envelope = runner::run_simulation(&state.config, options).await?;
    let json = serde_json::to_string(&envelope)?;

    match &query.callback {
        Some(callback) => Ok(HttpResponse::Ok().body(format!("{}({})", callback, json))),
        None => Ok(HttpResponse::Ok()
            .content_type("application/json; charset=utf-8")
            .body(json)),
    }
}

/// Lenient mode treats an unreadable body as "no parameters supplied";
/// strict mode rejects it.
fn decode_options(body: &[u8], strict: bool) -> Result<OptionSet, SimError> {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => Ok(OptionSet::from_body(&value)),
        Err(e) if strict => Err(SimError::JsonParse(e)),
        Err(e) => {
            log::debug!("ignoring undecodable request body: {}", e);
            Ok(OptionSet::default())
        }
    }
}
