#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::validate::non_empty;

/// Account profile. Read-only from the client's perspective.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub nick_name: Option<String>,
    pub created_at: String,
}

impl User {
    /// First/last name line for the user panel.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_owned(),
            (None, Some(last)) => last.to_owned(),
            (None, None) => "Not set".to_owned(),
        }
    }
}

/// A user-owned record with title, description, and associated images.
///
/// `author` is only populated by the item-detail endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    pub created_at: String,
    #[serde(default)]
    pub author: Option<User>,
}

impl Item {
    pub fn image_count(&self) -> usize {
        self.images.as_ref().map_or(0, Vec::len)
    }
}

/// `POST /api/login` and `POST /api/register` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
}

/// `GET /api/items/my` response envelope.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ItemsListResponse {
    pub items: Vec<Item>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /api/upload` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub images: Vec<String>,
}

/// `POST /api/login` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// `POST /api/register` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nick_name: Option<String>,
}

impl RegisterPayload {
    /// Build the payload from raw form fields; blank optional names become
    /// `null` on the wire.
    pub fn from_form(
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
        nick_name: &str,
    ) -> Self {
        Self {
            email: email.trim().to_owned(),
            password: password.to_owned(),
            first_name: non_empty(first_name),
            last_name: non_empty(last_name),
            nick_name: non_empty(nick_name),
        }
    }
}

/// `POST /api/items` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemCreate {
    pub title: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub images: Vec<String>,
}

impl ItemCreate {
    /// Build the payload from the create form: the first uploaded path (if
    /// any) becomes the cover image, the full list becomes `images`.
    pub fn from_form(title: &str, description: &str, uploaded: Vec<String>) -> Self {
        Self {
            title: title.trim().to_owned(),
            description: non_empty(description),
            cover_image: uploaded.first().cloned(),
            images: uploaded,
        }
    }
}

/// `PUT /api/items/{id}` request body. Unset fields are omitted so the
/// server applies a partial update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl ItemUpdate {
    /// Title-only update, as issued by the edit dialog.
    pub fn title(title: &str) -> Self {
        Self {
            title: Some(title.trim().to_owned()),
            ..Self::default()
        }
    }
}
