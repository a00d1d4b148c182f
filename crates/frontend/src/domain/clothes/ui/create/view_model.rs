use super::model::{self, CollectionRef};
use crate::shared::toast::ToastService;
use contracts::domain::clothes::form::{ClothesFormData, ClothesFormRules, FormErrors};
use contracts::enums::garment_size::GarmentSize;
use leptos::prelude::*;

/// ViewModel for the clothes creation form.
///
/// Owns one dialog session's state: raw field values, inline errors, the
/// selected image with its preview object URL, and the in-flight flag.
/// Sizes and validation rules are injected so tests and alternate
/// configurations can substitute them.
#[derive(Clone)]
pub struct ClothesCreateViewModel {
    pub sizes: Vec<GarmentSize>,
    pub form: RwSignal<ClothesFormData>,
    pub errors: RwSignal<FormErrors>,
    pub image: RwSignal<Option<web_sys::File>, LocalStorage>,
    pub preview_url: RwSignal<Option<String>>,
    pub pending: RwSignal<bool>,
    rules: ClothesFormRules,
}

impl ClothesCreateViewModel {
    pub fn new(sizes: Vec<GarmentSize>, rules: ClothesFormRules) -> Self {
        Self {
            form: RwSignal::new(ClothesFormData::for_sizes(&sizes)),
            errors: RwSignal::new(FormErrors::default()),
            image: RwSignal::new_local(None),
            preview_url: RwSignal::new(None),
            pending: RwSignal::new(false),
            sizes,
            rules,
        }
    }

    /// Accept a selected image: swap the preview object URL (revoking the
    /// old one) and mark the form field as filled.
    pub fn set_image(&self, file: web_sys::File) {
        self.revoke_preview();
        self.preview_url
            .set(web_sys::Url::create_object_url_with_blob(&file).ok());
        self.image.set(Some(file));
        self.form.update(|f| f.has_image = true);
    }

    pub fn clear_image(&self) {
        self.revoke_preview();
        self.preview_url.set(None);
        self.image.set(None);
        self.form.update(|f| f.has_image = false);
    }

    fn revoke_preview(&self) {
        if let Some(url) = self.preview_url.get_untracked() {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
    }

    /// Release browser-level resources; call on component teardown.
    pub fn release(&self) {
        self.revoke_preview();
    }

    fn reset(&self) {
        self.form.set(ClothesFormData::for_sizes(&self.sizes));
        self.errors.set(FormErrors::default());
        self.clear_image();
    }

    /// Validate and submit the form.
    ///
    /// A no-op while a submission is already in flight, regardless of which
    /// trigger fired it.
    pub fn submit_command(
        &self,
        collection: &CollectionRef,
        toasts: ToastService,
        on_created: Option<Callback<()>>,
    ) {
        if self.pending.get_untracked() {
            return;
        }

        let current = self.form.get_untracked();
        let errors = current.validate(&self.rules);
        let clean = errors.is_clean();
        self.errors.set(errors);
        if !clean {
            return;
        }

        let payload = match current.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("payload coercion failed after validation: {}", e);
                return;
            }
        };

        self.pending.set(true);
        let vm = self.clone();
        let collection_id = collection.id.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let image = vm.image.get_untracked();
            match model::create_clothes(&collection_id, &payload, image).await {
                Ok(result) if result.ok => {
                    toasts.success(
                        "The new clothes variant has been created.",
                        result.message,
                    );
                    vm.reset();
                    if let Some(cb) = on_created {
                        cb.run(());
                    }
                }
                Ok(result) => {
                    toasts.error("Error creating the clothes variant.", result.message);
                }
                Err(e) => {
                    toasts.error("Error creating the clothes variant.", e);
                }
            }
            vm.pending.set(false);
        });
    }
}
