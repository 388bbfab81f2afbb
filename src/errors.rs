// src/errors.rs
use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unable to open file: {path}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to launch simulation executable '{path}': {source}")]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Simulation exceeded the {0}s time limit")]
    Timeout(u64),

    #[error("Failed to parse JSON body: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

/// Any error that escapes a handler becomes a plain-text
/// `Error: <message>` body, mirroring the contract's failure shape.
impl actix_web::ResponseError for SimError {
    fn status_code(&self) -> StatusCode {
        match self {
            SimError::JsonParse(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(format!("Error: {}\n", self))
    }
}
