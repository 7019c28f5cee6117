//! File-input helpers: selected-file extraction and preview decoding.
//!
//! Everything here needs a browser environment and is gated on `hydrate`.

/// Collect the files currently selected in a file input.
#[cfg(feature = "hydrate")]
pub fn files_from_input(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Whether a selected file claims an image MIME type.
#[cfg(feature = "hydrate")]
pub fn is_image(file: &web_sys::File) -> bool {
    file.type_().starts_with("image/")
}

/// Read a file into a `data:` URL for a thumbnail preview.
///
/// Bridges the callback-style `FileReader` into async via a oneshot channel.
/// Returns `None` if the read fails; no upload happens here.
#[cfg(feature = "hydrate")]
pub async fn read_as_data_url(file: &web_sys::File) -> Option<String> {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let reader = web_sys::FileReader::new().ok()?;
    let (tx, rx) = futures::channel::oneshot::channel::<Option<String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let reader_in_callback = reader.clone();
    let onloadend = Closure::<dyn FnMut()>::new(move || {
        let result = reader_in_callback
            .result()
            .ok()
            .and_then(|v| v.as_string());
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(result);
        }
    });
    reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));

    if reader.read_as_data_url(file).is_err() {
        return None;
    }
    let result = rx.await.ok().flatten();
    // Keep the closure alive until the read has settled.
    drop(onloadend);
    result
}
