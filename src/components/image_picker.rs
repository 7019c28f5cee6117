//! File input with client-side thumbnail previews.

use leptos::html;
use leptos::prelude::*;

/// A decoded preview: original filename plus a `data:` URL thumbnail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePreview {
    pub name: String,
    pub data_url: String,
}

/// File input bound to `input_ref` that renders a thumbnail for every
/// selected image file. Non-image files are skipped. Nothing is uploaded
/// here; the create form reads the selection back at submit time.
#[component]
pub fn ImagePicker(
    previews: RwSignal<Vec<ImagePreview>>,
    input_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let on_change = move |_| {
        previews.set(Vec::new());
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = input_ref.get_untracked() else {
                return;
            };
            for file in crate::util::images::files_from_input(&input) {
                if !crate::util::images::is_image(&file) {
                    continue;
                }
                let name = file.name();
                leptos::task::spawn_local(async move {
                    if let Some(data_url) = crate::util::images::read_as_data_url(&file).await {
                        previews.update(|p| p.push(ImagePreview { name, data_url }));
                    }
                });
            }
        }
    };

    view! {
        <label class="image-picker__label">
            "Images"
            <input type="file" multiple=true accept="image/*" node_ref=input_ref on:change=on_change/>
        </label>
        <div class="image-picker__previews">
            {move || {
                previews
                    .get()
                    .into_iter()
                    .map(|p| {
                        view! { <img class="image-picker__thumb" src=p.data_url title=p.name/> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
