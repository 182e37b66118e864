//! Operation: named query/mutation dispatch over the painting store.
//!
//! ARCHITECTURE
//! ============
//! Clients post `{ "operation": "...", "variables": { ... } }`. The dispatcher
//! routes on the operation name, reads only the variables that operation
//! needs, and always answers with an envelope: `{ "data": ... }` on success
//! or `{ "errors": [ { code, message, retryable } ] }` on failure.
//!
//! DESIGN
//! ======
//! - Variables are a flat JSON object; ids are accepted as numbers or
//!   numeric strings.
//! - `createPainting` reads its input from `promptData`, falling back to
//!   `paintingData`.
//! - Each operation projects a fixed field set out of the stored record, so
//!   the wire shape does not drift when the record grows.
//! - Every failure carries a grepable code from the `ErrorCode` trait.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::services::painting::{self, Painting, PaintingError, PaintingStore};

/// Flat variables payload.
pub type Variables = Map<String, Value>;

/// Fields returned by `allPaintings` and `painting`.
const SUMMARY_FIELDS: [&str; 4] = ["id", "title", "artistId", "inspirationImageUrl"];

/// Fields returned by `createPainting`.
const CREATED_FIELDS: [&str; 5] = ["id", "prompt", "title", "createdAt", "artistId"];

// =============================================================================
// ERROR CODES
// =============================================================================

/// Grepable error code and retryable flag for structured error envelopes.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
    #[error("missing variable: {0}")]
    MissingVariable(&'static str),
    #[error("invalid variable {name}: expected {expected}")]
    InvalidVariable { name: &'static str, expected: &'static str },
    #[error(transparent)]
    Painting(#[from] PaintingError),
    #[error("response encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ErrorCode for OperationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownOperation(_) => "E_UNKNOWN_OPERATION",
            Self::MissingVariable(_) | Self::InvalidVariable { .. } => "E_BAD_VARIABLES",
            Self::Painting(e) => e.error_code(),
            Self::Encode(_) => "E_ENCODE",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Painting(e) => e.retryable(),
            _ => false,
        }
    }
}

// =============================================================================
// ENVELOPES
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct OperationRequest {
    pub operation: String,
    #[serde(default)]
    pub variables: Variables,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    pub code: String,
    pub message: String,
    pub retryable: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OperationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorEntry>,
}

impl OperationResponse {
    #[must_use]
    pub fn data(data: Value) -> Self {
        Self { data: Some(data), errors: Vec::new() }
    }

    #[must_use]
    pub fn error_from(err: &(impl ErrorCode + ?Sized)) -> Self {
        Self {
            data: None,
            errors: vec![ErrorEntry {
                code: err.error_code().to_owned(),
                message: err.to_string(),
                retryable: err.retryable(),
            }],
        }
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Run one operation against the store. Never fails; errors land in the envelope.
pub async fn execute(store: &dyn PaintingStore, req: &OperationRequest) -> OperationResponse {
    match dispatch(store, req).await {
        Ok(data) => OperationResponse::data(data),
        Err(e) => {
            tracing::warn!(operation = %req.operation, code = e.error_code(), error = %e, "operation failed");
            OperationResponse::error_from(&e)
        }
    }
}

async fn dispatch(store: &dyn PaintingStore, req: &OperationRequest) -> Result<Value, OperationError> {
    let vars = &req.variables;
    match req.operation.as_str() {
        "allPaintings" => {
            let paintings = store.list_all().await?;
            let items = paintings
                .iter()
                .map(|p| project(p, &SUMMARY_FIELDS))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(json!({ "allPaintings": items }))
        }
        "painting" => {
            let id = id_var(vars, "paintingId")?;
            let found = store.get_by_id(id).await?;
            Ok(json!({ "painting": project(&found, &SUMMARY_FIELDS)? }))
        }
        "createPainting" => {
            let data = match vars.get("promptData") {
                Some(Value::Null) | None => object_var(vars, "paintingData")?,
                Some(_) => object_var(vars, "promptData")?,
            };
            let prompt = string_var(data, "prompt")?;
            let artist_id = id_var(data, "artistId")?;
            let created = painting::create_painting(store, prompt, artist_id).await?;
            Ok(json!({ "createPainting": { "painting": project(&created, &CREATED_FIELDS)? } }))
        }
        "updatePainting" => {
            let id = id_var(vars, "id")?;
            let title = string_var(vars, "title")?;
            let updated = painting::rename_painting(store, id, title).await?;
            Ok(json!({ "updatePainting": { "painting": serde_json::to_value(&updated)? } }))
        }
        other => Err(OperationError::UnknownOperation(other.to_owned())),
    }
}

fn project(painting: &Painting, fields: &[&str]) -> Result<Value, serde_json::Error> {
    let Value::Object(full) = serde_json::to_value(painting)? else {
        return Ok(Value::Null);
    };
    let picked = fields
        .iter()
        .filter_map(|f| full.get(*f).map(|v| ((*f).to_owned(), v.clone())))
        .collect::<Map<_, _>>();
    Ok(Value::Object(picked))
}

// =============================================================================
// VARIABLES
// =============================================================================

fn object_var<'a>(vars: &'a Variables, name: &'static str) -> Result<&'a Variables, OperationError> {
    match vars.get(name) {
        None | Some(Value::Null) => Err(OperationError::MissingVariable(name)),
        Some(Value::Object(obj)) => Ok(obj),
        Some(_) => Err(OperationError::InvalidVariable { name, expected: "object" }),
    }
}

fn string_var<'a>(vars: &'a Variables, name: &'static str) -> Result<&'a str, OperationError> {
    match vars.get(name) {
        None | Some(Value::Null) => Err(OperationError::MissingVariable(name)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(OperationError::InvalidVariable { name, expected: "string" }),
    }
}

/// Integer id, given either as a JSON number or a numeric string.
fn id_var(vars: &Variables, name: &'static str) -> Result<i64, OperationError> {
    let invalid = OperationError::InvalidVariable { name, expected: "integer id" };
    match vars.get(name) {
        None | Some(Value::Null) => Err(OperationError::MissingVariable(name)),
        Some(Value::Number(n)) => n.as_i64().ok_or(invalid),
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| invalid),
        Some(_) => Err(invalid),
    }
}

#[cfg(test)]
#[path = "operation_test.rs"]
mod tests;
