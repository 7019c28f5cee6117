use super::*;

fn item_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "user_id": 3,
        "title": "Demo",
        "description": null,
        "cover_image": "/uploads/a.png",
        "images": ["/uploads/a.png", "/uploads/b.png"],
        "created_at": "2024-05-01T12:30:00"
    })
}

// =============================================================
// Deserialization against the server's shapes
// =============================================================

#[test]
fn item_deserializes_with_missing_optionals() {
    let item: Item = serde_json::from_value(serde_json::json!({
        "id": 1,
        "user_id": 2,
        "title": "Bare",
        "created_at": "2024-05-01T00:00:00"
    }))
    .expect("item");
    assert_eq!(item.description, None);
    assert_eq!(item.cover_image, None);
    assert_eq!(item.image_count(), 0);
    assert!(item.author.is_none());
}

#[test]
fn item_deserializes_full_shape() {
    let item: Item = serde_json::from_value(item_json()).expect("item");
    assert_eq!(item.id, 7);
    assert_eq!(item.image_count(), 2);
    assert_eq!(item.cover_image.as_deref(), Some("/uploads/a.png"));
}

#[test]
fn items_list_envelope_deserializes() {
    let list: ItemsListResponse = serde_json::from_value(serde_json::json!({
        "items": [item_json()],
        "count": 1,
        "message": "ok"
    }))
    .expect("list");
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.count, 1);
}

#[test]
fn token_response_message_is_optional() {
    let resp: TokenResponse =
        serde_json::from_value(serde_json::json!({"token": "t-1"})).expect("token");
    assert_eq!(resp.token, "t-1");
    assert!(resp.message.is_none());
}

#[test]
fn upload_response_defaults_to_no_images() {
    let resp: UploadResponse = serde_json::from_value(serde_json::json!({})).expect("upload");
    assert!(resp.images.is_empty());
}

// =============================================================
// Payload construction rules
// =============================================================

#[test]
fn item_create_without_uploads_has_null_cover_and_empty_images() {
    let payload = ItemCreate::from_form("Demo", "", Vec::new());
    assert_eq!(payload.title, "Demo");
    assert_eq!(payload.description, None);
    assert_eq!(payload.cover_image, None);
    assert!(payload.images.is_empty());

    let wire = serde_json::to_value(&payload).expect("json");
    assert_eq!(wire["cover_image"], serde_json::Value::Null);
    assert_eq!(wire["images"], serde_json::json!([]));
}

#[test]
fn item_create_uses_first_upload_as_cover() {
    let payload = ItemCreate::from_form(
        " Demo ",
        "a thing",
        vec!["/uploads/a.png".to_owned(), "/uploads/b.png".to_owned()],
    );
    assert_eq!(payload.title, "Demo");
    assert_eq!(payload.cover_image.as_deref(), Some("/uploads/a.png"));
    assert_eq!(payload.images.len(), 2);
}

#[test]
fn item_update_title_serializes_only_title() {
    let wire = serde_json::to_value(ItemUpdate::title(" New title ")).expect("json");
    assert_eq!(wire, serde_json::json!({"title": "New title"}));
}

#[test]
fn register_payload_maps_blank_names_to_null() {
    let payload = RegisterPayload::from_form(" a@b.cc ", "secret1", "", " Ada ", "");
    assert_eq!(payload.email, "a@b.cc");
    assert_eq!(payload.first_name, None);
    assert_eq!(payload.last_name.as_deref(), Some("Ada"));
    assert_eq!(payload.nick_name, None);

    let wire = serde_json::to_value(&payload).expect("json");
    assert_eq!(wire["first_name"], serde_json::Value::Null);
}

#[test]
fn user_display_name_falls_back_when_unset() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1,
        "email": "a@b.cc",
        "created_at": "2024-05-01T00:00:00"
    }))
    .expect("user");
    assert_eq!(user.display_name(), "Not set");

    let named = User {
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        ..user
    };
    assert_eq!(named.display_name(), "Ada Lovelace");
}
