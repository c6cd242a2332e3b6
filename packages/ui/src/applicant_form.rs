use api::{Applicant, Category};
use dioxus::prelude::*;

use crate::draft::{field_value, merge_field, ApplicantField, NewApplicant};
use crate::views::ModalOverlay;

const INPUT_CLASS: &str = "w-full bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none mt-1.5 focus:border-primary-500";

/// Modal form for creating an applicant. The form state survives a failed
/// submit; the parent closes the modal on success.
#[component]
pub fn AddApplicantModal(
    categories: Vec<Category>,
    on_submit: EventHandler<NewApplicant>,
    on_close: EventHandler<()>,
) -> Element {
    let mut form = use_signal(NewApplicant::new);

    let values: Vec<(ApplicantField, String)> = ApplicantField::TEXT
        .into_iter()
        .map(|field| (field, form.read().value(field)))
        .collect();
    let category = form.read().value(ApplicantField::Category);

    rsx! {
        ModalOverlay {
            on_close: on_close,
            ApplicantFields {
                title: "Add Applicant",
                values: values,
                category: category,
                categories: categories,
                on_change: move |(field, value): (ApplicantField, String)| {
                    form.write().set_field(field, &value);
                },
                on_submit: move |_| on_submit.call(form()),
                on_cancel: move |_| on_close.call(()),
            }
        }
    }
}

/// Modal form for editing the selected applicant. Mount with a `key` per
/// selection so the draft is reseeded.
#[component]
pub fn EditApplicantModal(
    #[props(!optional)] applicant: Option<Applicant>,
    categories: Vec<Category>,
    on_submit: EventHandler<Option<Applicant>>,
    on_close: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(move || applicant);

    let current = draft();
    let values: Vec<(ApplicantField, String)> = ApplicantField::TEXT
        .into_iter()
        .map(|field| {
            let value = current
                .as_ref()
                .map(|a| field_value(a, field))
                .unwrap_or_default();
            (field, value)
        })
        .collect();
    let category = current
        .as_ref()
        .map(|a| field_value(a, ApplicantField::Category))
        .unwrap_or_default();

    rsx! {
        ModalOverlay {
            on_close: on_close,
            ApplicantFields {
                title: "Edit Applicant",
                values: values,
                category: category,
                categories: categories,
                on_change: move |(field, value): (ApplicantField, String)| {
                    let next = merge_field(draft(), field, &value);
                    draft.set(next);
                },
                on_submit: move |_| on_submit.call(draft()),
                on_cancel: move |_| on_close.call(()),
            }
        }
    }
}

/// The shared field layout of both applicant modals. `values` holds the
/// current text of every input field in form order.
#[component]
fn ApplicantFields(
    title: String,
    values: Vec<(ApplicantField, String)>,
    category: String,
    categories: Vec<Category>,
    on_change: EventHandler<(ApplicantField, String)>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let inputs: Vec<(ApplicantField, &'static str, &'static str, String)> = values
        .into_iter()
        .map(|(field, value)| (field, field.label(), field.input_type(), value))
        .collect();

    rsx! {
        div {
            class: "p-6",
            h2 { class: "m-0 mb-5 text-lg font-medium text-neutral-800", "{title}" }

            form {
                class: "space-y-4",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },

                for (field, label, input_type, value) in inputs {
                    div {
                        key: "{label}",
                        class: "space-y-2",
                        label { r#for: field.id(), "{label}" }
                        input {
                            id: field.id(),
                            class: INPUT_CLASS,
                            r#type: input_type,
                            value: "{value}",
                            required: true,
                            oninput: move |evt: FormEvent| on_change.call((field, evt.value())),
                        }
                    }
                }

                div {
                    class: "space-y-2",
                    label { r#for: "category", "Category" }
                    select {
                        id: "category",
                        class: INPUT_CLASS,
                        value: "{category}",
                        required: true,
                        onchange: move |evt: FormEvent| {
                            on_change.call((ApplicantField::Category, evt.value()))
                        },
                        option { value: "", disabled: true, "Select a category" }
                        for c in categories {
                            option {
                                key: "{c.id}",
                                value: "{c.id}",
                                selected: c.id.to_string() == category,
                                "{c.name}"
                            }
                        }
                    }
                }

                div {
                    class: "flex justify-end gap-2",
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Save" }
                }
            }
        }
    }
}
