//! REST API client for the Curio service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a `Result<_, ApiError>` so handlers can distinguish a
//! 401 (expire the session, force re-login) from other rejections (surface
//! the server's `detail`) and transport failures (generic message). Image
//! uploads are the one deliberate exception: failures degrade to an empty
//! path list so item creation can proceed without images.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Item, ItemCreate, ItemUpdate, LoginPayload, RegisterPayload, TokenResponse, User,
};

/// Errors surfaced by the API client.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401: the session token is missing, stale, or revoked.
    #[error("session expired")]
    Unauthorized,
    /// Any other non-success status; `detail` comes from the response body
    /// when the server provided one.
    #[error("{}", detail.as_deref().unwrap_or("request rejected by the server"))]
    Rejected { detail: Option<String> },
    /// The request never completed.
    #[error("network error")]
    Network,
}

impl ApiError {
    /// Banner text for this error, with a caller-supplied fallback for
    /// rejections that carried no `detail`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Network => "Network error. Check your internet connection.".to_owned(),
            Self::Rejected {
                detail: Some(detail),
            } => detail.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Map a non-success HTTP status to an `ApiError`.
pub fn classify_status(status: u16, detail: Option<String>) -> ApiError {
    if status == 401 {
        ApiError::Unauthorized
    } else {
        ApiError::Rejected { detail }
    }
}

/// `Authorization` header value for an authenticated request.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Rejection body shape used by the server.
#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

#[cfg(feature = "hydrate")]
async fn parse_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let detail = resp.json::<ErrorBody>().await.ok().and_then(|b| b.detail);
        return Err(classify_status(resp.status(), detail));
    }
    resp.json::<T>().await.map_err(|_| ApiError::Network)
}

#[cfg(feature = "hydrate")]
async fn expect_success(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if !resp.ok() {
        let detail = resp.json::<ErrorBody>().await.ok().and_then(|b| b.detail);
        return Err(classify_status(resp.status(), detail));
    }
    Ok(())
}

/// Exchange credentials for a token via `POST /api/login`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` with the server's `detail` on bad
/// credentials, `ApiError::Network` on transport failure.
pub async fn login(payload: &LoginPayload) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/login")
            .json(payload)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Network)
    }
}

/// Create an account and receive a token via `POST /api/register`.
///
/// # Errors
///
/// Same taxonomy as [`login`]; a duplicate email arrives as `Rejected`.
pub async fn register(payload: &RegisterPayload) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/register")
            .json(payload)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Network)
    }
}

/// Fetch the authenticated user's profile via `GET /api/user`.
///
/// # Errors
///
/// `ApiError::Unauthorized` when the token is invalid.
pub async fn fetch_user(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/user")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Network)
    }
}

/// Revoke the session via `POST /api/logout`.
///
/// Best-effort: the client clears its session regardless of the outcome.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/logout")
            .header("Authorization", &bearer(token))
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Fetch the caller's items via `GET /api/items/my`.
///
/// # Errors
///
/// `ApiError::Unauthorized` on a 401; `Rejected`/`Network` otherwise.
pub async fn fetch_my_items(token: &str) -> Result<Vec<Item>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/items/my")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        parse_json::<super::types::ItemsListResponse>(resp)
            .await
            .map(|list| list.items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Network)
    }
}

/// Fetch one item with its author via `GET /api/items/{id}`.
///
/// # Errors
///
/// `ApiError::Rejected` when the item does not exist.
pub async fn fetch_item(token: &str, id: i64) -> Result<Item, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("/api/items/{id}"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Network)
    }
}

/// Create an item via `POST /api/items`.
///
/// # Errors
///
/// `ApiError::Unauthorized` expires the session upstream; other rejections
/// carry the server's `detail`.
pub async fn create_item(token: &str, payload: &ItemCreate) -> Result<Item, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/items")
            .header("Authorization", &bearer(token))
            .json(payload)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err(ApiError::Network)
    }
}

/// Apply a partial update via `PUT /api/items/{id}`.
///
/// # Errors
///
/// Same taxonomy as [`create_item`].
pub async fn update_item(token: &str, id: i64, payload: &ItemUpdate) -> Result<Item, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&format!("/api/items/{id}"))
            .header("Authorization", &bearer(token))
            .json(payload)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, payload);
        Err(ApiError::Network)
    }
}

/// Delete an item via `DELETE /api/items/{id}`. The response body is
/// ignored; only the status matters.
///
/// # Errors
///
/// Same taxonomy as [`create_item`].
pub async fn delete_item(token: &str, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&format!("/api/items/{id}"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        expect_success(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Network)
    }
}

/// Upload selected files in one multipart request via `POST /api/upload`
/// (field `images`) and return the stored paths.
///
/// Deliberately infallible: any failure degrades to an empty path list so
/// item creation proceeds without images. Zero files means no request.
#[cfg(feature = "hydrate")]
pub async fn upload_images(token: &str, files: &[web_sys::File]) -> Vec<String> {
    if files.is_empty() {
        return Vec::new();
    }

    let Ok(form) = web_sys::FormData::new() else {
        return Vec::new();
    };
    for file in files {
        let _ = form.append_with_blob_and_filename("images", file, &file.name());
    }

    let Ok(req) = gloo_net::http::Request::post("/api/upload")
        .header("Authorization", &bearer(token))
        .body(form)
    else {
        return Vec::new();
    };
    let Ok(resp) = req.send().await else {
        leptos::logging::warn!("image upload failed: network error");
        return Vec::new();
    };
    if !resp.ok() {
        leptos::logging::warn!("image upload failed: status {}", resp.status());
        return Vec::new();
    }
    resp.json::<super::types::UploadResponse>()
        .await
        .map(|r| r.images)
        .unwrap_or_default()
}
