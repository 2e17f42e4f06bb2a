//! Registration, login and current-user models

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::entities::users;
use crate::models::common::required;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub const MIN_PASSWORD_LEN: usize = 6;

/// Lower-case and trim an email the way it is stored
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSeller {
    pub name: String,
    pub email: String,
    pub password: String,
    pub city: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<NewSeller, String> {
        let (Some(name), Some(email), Some(city)) = (
            required(&self.name),
            required(&self.email),
            required(&self.city),
        ) else {
            return Err("All fields are required".to_string());
        };
        let password = match self.password.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => return Err("All fields are required".to_string()),
        };

        let email = normalize_email(email);
        if !EMAIL_REGEX.is_match(&email) {
            return Err("Invalid email address".to_string());
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ));
        }

        Ok(NewSeller {
            name: name.to_string(),
            email,
            password: password.to_string(),
            city: city.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns the normalized email and the password
    pub fn validate(&self) -> Result<(String, String), String> {
        match (required(&self.email), self.password.as_deref()) {
            (Some(email), Some(password)) if !password.is_empty() => {
                Ok((normalize_email(email), password.to_string()))
            }
            _ => Err("Email and password are required".to_string()),
        }
    }
}

/// Public view of a seller
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub city: String,
    pub followers: i32,
    pub store_name: String,
    pub profile_image: String,
    pub onboarding_step: i32,
}

impl From<&users::Model> for UserProfile {
    fn from(u: &users::Model) -> Self {
        Self {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            role: u.role.clone(),
            city: u.city.clone(),
            followers: u.followers,
            store_name: u.store_name.clone(),
            profile_image: u.profile_image.clone(),
            onboarding_step: u.onboarding_step,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserProfile,
}
