use axum::extract::Multipart;
use std::collections::HashMap;

use crate::error::{AppError, AppResult};

const FILE_FIELD: &str = "file";

/// A multipart form holding one `file` part and any number of text fields
#[derive(Debug)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub fields: HashMap<String, String>,
}

impl Upload {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}

/// Drain the form into memory. A missing `file` part is a bad request.
pub async fn read_upload(mut multipart: Multipart) -> AppResult<Upload> {
    let mut file = None;
    let mut fields = HashMap::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name == FILE_FIELD {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;
            file = Some((filename, bytes.to_vec()));
        } else {
            fields.insert(name, field.text().await?);
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::BadRequest("Missing 'file' upload".to_string()))?;

    Ok(Upload {
        filename,
        bytes,
        fields,
    })
}
