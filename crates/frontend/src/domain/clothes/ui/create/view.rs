use super::model::CollectionRef;
use super::view_model::ClothesCreateViewModel;
use crate::shared::components::ui::{Button, ErrorMessage, ImageDropzone, Input};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use contracts::domain::clothes::form::ClothesFormRules;
use contracts::enums::garment_size::GarmentSize;
use leptos::prelude::*;

/// Trigger button plus the modal it opens.
///
/// Each open spawns a fresh dialog session; its state dies with the modal.
#[component]
#[allow(non_snake_case)]
pub fn CreateClothesDialog(
    /// Parent collection of the new variant
    collection: CollectionRef,
    /// Fired after each successful creation
    #[prop(optional, into)]
    on_created: Option<Callback<()>>,
) -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_dialog = move |_| {
        let collection = collection.clone();
        modal_stack.push(move |_handle| {
            view! {
                <CreateClothesModal collection=collection.clone() on_created=on_created />
            }
            .into_any()
        });
    };

    view! {
        <Button on_click=Callback::new(open_dialog)>"Create Clothes Variant"</Button>
    }
}

#[component]
fn CreateClothesModal(
    collection: CollectionRef,
    on_created: Option<Callback<()>>,
) -> impl IntoView {
    let vm = ClothesCreateViewModel::new(GarmentSize::ALL.to_vec(), ClothesFormRules::default());

    // Object URLs outlive signals unless explicitly revoked.
    on_cleanup({
        let vm = vm.clone();
        move || vm.release()
    });

    let pending = vm.pending;

    view! {
        <div class="dialog dialog--wide">
            <header class="dialog__header">
                <h3 class="dialog__title">"Create a new Clothes Variant"</h3>
                <p class="dialog__description">
                    "Create a new clothes variant for this collection. You can add \
                     multiple variants to a single collection."
                </p>
            </header>

            <CreateClothesForm vm=vm.clone() collection=collection on_created=on_created />

            <footer class="dialog__footer">
                <Button
                    button_type="submit"
                    form="create-clothes-variant"
                    disabled=Signal::derive(move || pending.get())
                >
                    {move || if pending.get() { "Creating..." } else { "Create Clothes" }}
                </Button>
            </footer>
        </div>
    }
}

#[component]
fn CreateClothesForm(
    vm: ClothesCreateViewModel,
    collection: CollectionRef,
    on_created: Option<Callback<()>>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let handle_submit = {
        let vm = vm.clone();
        let collection = collection.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.submit_command(&collection, toasts, on_created);
        }
    };

    let vm_design = vm.clone();
    let vm_design_set = vm.clone();
    let vm_design_err = vm.clone();
    let vm_color = vm.clone();
    let vm_color_set = vm.clone();
    let vm_color_err = vm.clone();
    let vm_price = vm.clone();
    let vm_price_set = vm.clone();
    let vm_price_err = vm.clone();
    let vm_image = vm.clone();
    let vm_image_err = vm.clone();
    let vm_preview = vm.clone();
    let vm_rows = vm.clone();

    view! {
        <form id="create-clothes-variant" class="form-grid" on:submit=handle_submit>
            <div class="form-grid__column">
                <span class="form-grid__title">"Clothes Info"</span>

                <div class="form__field">
                    <Input
                        label="Design name"
                        id="design"
                        placeholder="e.g. Last Dinner"
                        value=Signal::derive(move || vm_design.form.get().design)
                        on_input=Callback::new(move |v| {
                            vm_design_set.form.update(|f| f.design = v)
                        })
                    />
                    <ErrorMessage message=Signal::derive(move || vm_design_err.errors.get().design) />
                </div>

                <div class="form__field">
                    <Input
                        label="Color"
                        id="color"
                        placeholder="e.g. Black"
                        value=Signal::derive(move || vm_color.form.get().color)
                        on_input=Callback::new(move |v| {
                            vm_color_set.form.update(|f| f.color = v)
                        })
                    />
                    <ErrorMessage message=Signal::derive(move || vm_color_err.errors.get().color) />
                </div>

                <div class="form__field">
                    <Input
                        label="Price"
                        id="price"
                        input_type="number"
                        placeholder="e.g. 80000"
                        value=Signal::derive(move || vm_price.form.get().price)
                        on_input=Callback::new(move |v| {
                            vm_price_set.form.update(|f| f.price = v)
                        })
                    />
                    <ErrorMessage message=Signal::derive(move || vm_price_err.errors.get().price) />
                </div>

                <div class="form__field">
                    <label class="form__label" for="image">"Image"</label>
                    <ImageDropzone on_select=Callback::new(move |file| vm_image.set_image(file)) />
                    <ErrorMessage message=Signal::derive(move || vm_image_err.errors.get().image) />

                    {move || vm_preview.preview_url.get().map(|url| view! {
                        <div class="image-preview">
                            <img class="image-preview__img" src=url alt="Selected image" />
                        </div>
                    })}
                </div>
            </div>

            <div class="form-grid__column">
                <span class="form-grid__title">"Stocks"</span>

                {vm_rows
                    .sizes
                    .clone()
                    .into_iter()
                    .enumerate()
                    .map(|(index, size)| {
                        let vm_qty = vm_rows.clone();
                        let vm_qty_set = vm_rows.clone();
                        let vm_qty_err = vm_rows.clone();
                        let input_id = format!("stock-{}", size.code());
                        view! {
                            <div class="form__field">
                                <label class="form__label form__label--size" for=input_id.clone()>
                                    {size.code()}
                                </label>

                                // The size itself is fixed, not user-editable.
                                <input type="hidden" value=size.code() />

                                <input
                                    id=input_id
                                    class="form__input"
                                    type="number"
                                    placeholder="e.g. 5"
                                    prop:value=move || {
                                        vm_qty
                                            .form
                                            .get()
                                            .stock
                                            .get(index)
                                            .map(|row| row.quantity.clone())
                                            .unwrap_or_default()
                                    }
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm_qty_set.form.update(|f| {
                                            if let Some(row) = f.stock.get_mut(index) {
                                                row.quantity = value;
                                            }
                                        });
                                    }
                                />

                                <ErrorMessage message=Signal::derive(move || {
                                    vm_qty_err.errors.get().stock.get(index).cloned().flatten()
                                }) />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </form>
    }
}
