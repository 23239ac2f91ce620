//! Wire shapes for the platform API.
//!
//! Success payloads are inconsistently enveloped across endpoints: some
//! return the value bare, some wrap it as `{"data": ...}`, and some as
//! `{"response": {"data": ...}}`. `Envelope` encodes the three known shapes
//! as one tagged union so every call site unwraps explicitly instead of
//! probing field chains.

use core_types::UserProfile;
use serde::{Deserialize, Serialize};

/// The known response envelope shapes, most specific first. serde's untagged
/// resolution tries the variants in order, so `Nested` must precede `Data`,
/// which must precede `Bare`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Nested { response: ResponseBody<T> },
    Data { data: T },
    Bare(T),
}

#[derive(Debug, Deserialize)]
pub struct ResponseBody<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    /// Unwraps whichever envelope the endpoint chose.
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Nested { response } => response.data,
            Envelope::Data { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Success payload of `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}
