//! Payload builder: maps request descriptors to the server's JSON shape.
//!
//! Field names and presence rules are the server's compatibility contract:
//!
//! | export          | import        |
//! |-----------------|---------------|
//! | `target`        | `url`         |
//! | `id`            | `password`    |
//! | `format`        | `directoryId` |
//! | `grayscale`     | `flag1`       |
//! | `keepPassword`  | `flag2`       |
//! | `password`      |               |
//! | `pageSelection` (only with pages) | |

use serde_json::{json, Value};

use crate::domain::entities::{DocumentRequest, ExportRequest, ImportRequest};

/// Build the JSON body for either request kind.
pub fn build_payload(request: &DocumentRequest) -> Value {
    match request {
        DocumentRequest::Export(export) => export_payload(export),
        DocumentRequest::Import(import) => import_payload(import),
    }
}

pub fn export_payload(request: &ExportRequest) -> Value {
    let mut payload = json!({
        "target": request.target_path,
        "id": request.document_id,
        "format": request.format.code(),
        "grayscale": request.grayscale,
        "keepPassword": request.keep_password,
        "password": request.password,
    });
    if let (Some(pages), Some(map)) = (request.page_selection(), payload.as_object_mut()) {
        map.insert("pageSelection".to_string(), json!(pages));
    }
    payload
}

pub fn import_payload(request: &ImportRequest) -> Value {
    json!({
        "url": request.file_url,
        "password": request.password,
        "directoryId": request.directory_id,
        "flag1": request.flag1,
        "flag2": request.flag2,
    })
}
