//! Request extractors that reject with [`ApiError`]
//!
//! axum's stock `Json` and `Path` rejections answer in plain text with a
//! mix of 400/415/422; these wrappers turn every malformed request into a
//! 400 with the usual `{"error": ...}` body.

use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::api::middleware::ApiError;
use crate::models::Validate;

/// Path parameters, 400 on parse failure
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// JSON body that must deserialize into `T` and then pass `T::validate`
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}
