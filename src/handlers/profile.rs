use axum::{Json, extract::State};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use tracing::{info, warn};

use crate::AppState;
use crate::auth::AuthSeller;
use crate::entities::prelude::*;
use crate::error::ApiError;
use crate::models::common::timestamp_now;
use crate::models::profile::{
    DocumentType, DocumentUploadedResponse, ProfileResponse, ProfileUpdatedResponse,
    UpdateProfileRequest, UploadDocumentRequest,
};

pub async fn update_profile(
    State(state): State<AppState>,
    seller: AuthSeller,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileUpdatedResponse>, ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let existing = Users::find_by_id(seller.id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    let mut user = existing.into_active_model();
    if let Some(name) = payload.name {
        user.name = Set(name.trim().to_string());
    }
    if let Some(city) = payload.city {
        user.city = Set(city);
    }
    if let Some(store_name) = payload.store_name {
        user.store_name = Set(store_name);
    }
    if let Some(store_description) = payload.store_description {
        user.store_description = Set(store_description);
    }
    if let Some(profile_image) = payload.profile_image {
        user.profile_image = Set(profile_image);
    }
    if let Some(links) = payload.social_links {
        if let Some(instagram) = links.instagram {
            user.instagram = Set(instagram);
        }
        if let Some(youtube) = links.youtube {
            user.youtube = Set(youtube);
        }
        if let Some(facebook) = links.facebook {
            user.facebook = Set(facebook);
        }
        if let Some(twitter) = links.twitter {
            user.twitter = Set(twitter);
        }
    }
    if let Some(bank) = payload.bank_details {
        if let Some(account_number) = bank.account_number {
            user.bank_account_number = Set(account_number);
        }
        if let Some(ifsc_code) = bank.ifsc_code {
            user.bank_ifsc = Set(ifsc_code);
        }
        if let Some(holder) = bank.account_holder_name {
            user.bank_account_holder = Set(holder);
        }
    }
    if let Some(step) = payload.onboarding_step {
        user.onboarding_step = Set(step);
    }
    user.updated_at = Set(timestamp_now());

    let user = user.update(&state.db).await?;
    info!(user_id = user.id, onboarding_step = user.onboarding_step, "Updated profile");

    Ok(Json(ProfileUpdatedResponse {
        message: "Profile updated".to_string(),
        user: ProfileResponse::from(user),
    }))
}

pub async fn upload_document(
    State(state): State<AppState>,
    seller: AuthSeller,
    Json(payload): Json<UploadDocumentRequest>,
) -> Result<Json<DocumentUploadedResponse>, ApiError> {
    let (file, doc_type) = payload.validate().map_err(ApiError::Validation)?;

    let existing = Users::find_by_id(seller.id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    let folder = format!("documents/{}", doc_type.as_str());
    let url = state.media.upload(file, &folder).await?;

    let mut user = existing.into_active_model();
    match doc_type {
        DocumentType::Aadhar => user.document_aadhar = Set(url.clone()),
        DocumentType::Pan => user.document_pan = Set(url.clone()),
        DocumentType::Gst => user.document_gst = Set(url.clone()),
    }
    user.updated_at = Set(timestamp_now());
    if let Err(e) = user.update(&state.db).await {
        if let Err(cleanup) = state.media.remove(&url).await {
            warn!(url = %url, error = %cleanup, "Failed to remove orphaned upload");
        }
        return Err(e.into());
    }

    info!(user_id = seller.id, doc_type = doc_type.as_str(), url = %url, "Uploaded document");

    Ok(Json(DocumentUploadedResponse {
        message: "Document uploaded".to_string(),
        url,
    }))
}
