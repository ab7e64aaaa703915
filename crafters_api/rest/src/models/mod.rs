use crafters_models::validation::ValidationErrors;
use serde::Serialize;

pub mod careers;
pub mod contact;

#[derive(Debug, Serialize)]
pub struct ApiOk {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ApiErrors {
    pub errors: ValidationErrors,
}
