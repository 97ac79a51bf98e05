use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{controllers::upload::read_upload, domain::caption::CaptionService, error::AppResult};

/// Response for POST /describe-image
#[derive(Debug, Serialize, Deserialize)]
pub struct DescribeImageResponse {
    pub description: String,
}

pub struct CaptionController {
    caption_service: Arc<CaptionService>,
}

impl CaptionController {
    pub fn new(caption_service: Arc<CaptionService>) -> Self {
        Self { caption_service }
    }

    /// POST /describe-image - Caption an uploaded image
    pub async fn describe_image(
        State(controller): State<Arc<CaptionController>>,
        multipart: Multipart,
    ) -> AppResult<Json<DescribeImageResponse>> {
        let upload = read_upload(multipart).await?;
        let description = controller.caption_service.describe(&upload.bytes).await?;

        Ok(Json(DescribeImageResponse { description }))
    }
}
