//! Seller profile and KYC document models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::users;
use crate::models::common::required;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Aadhar,
    Pan,
    Gst,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Aadhar => "aadhar",
            DocumentType::Pan => "pan",
            DocumentType::Gst => "gst",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "aadhar" => Some(DocumentType::Aadhar),
            "pan" => Some(DocumentType::Pan),
            "gst" => Some(DocumentType::Gst),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    pub instagram: String,
    pub youtube: String,
    pub facebook: String,
    pub twitter: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialLinksUpdate {
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub account_number: String,
    pub ifsc_code: String,
    pub account_holder_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetailsUpdate {
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub account_holder_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Documents {
    pub aadhar: String,
    pub pan: String,
    pub gst: String,
}

/// Partial profile update. Email, password and role are not editable here
/// and are ignored if sent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub city: Option<String>,
    pub store_name: Option<String>,
    pub store_description: Option<String>,
    pub profile_image: Option<String>,
    pub social_links: Option<SocialLinksUpdate>,
    pub bank_details: Option<BankDetailsUpdate>,
    pub onboarding_step: Option<i32>,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.as_ref().is_some_and(|n| n.trim().is_empty()) {
            return Err("Name cannot be empty".to_string());
        }
        if self.onboarding_step.is_some_and(|s| s < 1) {
            return Err("Onboarding step must be at least 1".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub city: String,
    pub followers: i32,
    pub store_name: String,
    pub store_description: String,
    pub profile_image: String,
    pub social_links: SocialLinks,
    pub onboarding_step: i32,
    pub is_verified: bool,
    pub bank_details: BankDetails,
    pub documents: Documents,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<users::Model> for ProfileResponse {
    fn from(u: users::Model) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            city: u.city,
            followers: u.followers,
            store_name: u.store_name,
            store_description: u.store_description,
            profile_image: u.profile_image,
            social_links: SocialLinks {
                instagram: u.instagram,
                youtube: u.youtube,
                facebook: u.facebook,
                twitter: u.twitter,
            },
            onboarding_step: u.onboarding_step,
            is_verified: u.is_verified,
            bank_details: BankDetails {
                account_number: u.bank_account_number,
                ifsc_code: u.bank_ifsc,
                account_holder_name: u.bank_account_holder,
            },
            documents: Documents {
                aadhar: u.document_aadhar,
                pan: u.document_pan,
                gst: u.document_gst,
            },
            created_at: u.created_at.with_timezone(&Utc),
            updated_at: u.updated_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdatedResponse {
    pub message: String,
    pub user: ProfileResponse,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadDocumentRequest {
    /// Base64 payload, optionally as a data URI
    pub file: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
}

impl UploadDocumentRequest {
    pub fn validate(&self) -> Result<(&str, DocumentType), String> {
        let (Some(file), Some(doc_type)) = (required(&self.file), required(&self.doc_type)) else {
            return Err("File and type are required".to_string());
        };
        let doc_type = DocumentType::from_str(doc_type).ok_or_else(|| {
            format!(
                "Invalid document type: '{}'. Must be one of: aadhar, pan, gst",
                doc_type
            )
        })?;
        Ok((file, doc_type))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentUploadedResponse {
    pub message: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_validation() {
        let request = UploadDocumentRequest {
            file: Some("aGVsbG8=".to_string()),
            doc_type: Some("pan".to_string()),
        };
        assert_eq!(request.validate(), Ok(("aGVsbG8=", DocumentType::Pan)));

        let request = UploadDocumentRequest {
            file: None,
            doc_type: Some("pan".to_string()),
        };
        assert_eq!(request.validate().unwrap_err(), "File and type are required");

        let request = UploadDocumentRequest {
            file: Some("aGVsbG8=".to_string()),
            doc_type: Some("passport".to_string()),
        };
        assert!(request.validate().unwrap_err().contains("Invalid document type"));
    }

    #[test]
    fn test_upload_type_field_name() {
        let request: UploadDocumentRequest =
            serde_json::from_str(r#"{"file": "aGVsbG8=", "type": "gst"}"#).unwrap();
        assert_eq!(request.doc_type.as_deref(), Some("gst"));
    }

    #[test]
    fn test_profile_update_validation() {
        assert!(UpdateProfileRequest::default().validate().is_ok());

        let request = UpdateProfileRequest {
            onboarding_step: Some(0),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_profile_update_nested() {
        let request: UpdateProfileRequest = serde_json::from_str(
            r#"{"storeName": "Asha Threads", "socialLinks": {"instagram": "@asha"}, "email": "x@y.z"}"#,
        )
        .unwrap();
        assert_eq!(request.store_name.as_deref(), Some("Asha Threads"));
        assert_eq!(
            request.social_links.and_then(|s| s.instagram).as_deref(),
            Some("@asha")
        );
    }
}
