use api::Applicant;
use dioxus::prelude::*;

/// One table row with its edit and delete actions.
#[component]
pub fn ApplicantRow(
    applicant: Applicant,
    category: String,
    on_edit: EventHandler<Applicant>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = applicant.id;
    let selected = applicant.clone();

    rsx! {
        tr {
            td { "{applicant.first_name}" }
            td { "{applicant.last_name}" }
            td { "{applicant.middle_name}" }
            td { "{applicant.date_of_birth}" }
            td { "{applicant.phone_number}" }
            td { "{applicant.secondary_phone_number}" }
            td { "{category}" }
            td { "{applicant.source}" }
            td {
                class: "row-actions",
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| on_edit.call(selected.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-ghost text-red-600",
                    disabled: id.is_none(),
                    onclick: move |_| {
                        if let Some(id) = id {
                            on_delete.call(id);
                        }
                    },
                    "Delete"
                }
            }
        }
    }
}

/// Applicants table. `rows` pairs each applicant with its category label.
#[component]
pub fn ApplicantTable(
    rows: Vec<(Applicant, String)>,
    on_edit: EventHandler<Applicant>,
    on_delete: EventHandler<i64>,
) -> Element {
    let rows: Vec<(String, Applicant, String)> = rows
        .into_iter()
        .map(|(applicant, category)| {
            let key = applicant.id.map(|id| id.to_string()).unwrap_or_default();
            (key, applicant, category)
        })
        .collect();

    rsx! {
        table {
            class: "applicants-table",
            thead {
                tr {
                    th { "First Name" }
                    th { "Last Name" }
                    th { "Middle Name" }
                    th { "Date of Birth" }
                    th { "Phone Number" }
                    th { "Secondary Phone" }
                    th { "Category" }
                    th { "Source" }
                    th { "Actions" }
                }
            }
            tbody {
                for (key, applicant, category) in rows {
                    ApplicantRow {
                        key: "{key}",
                        applicant: applicant,
                        category: category,
                        on_edit: on_edit,
                        on_delete: on_delete,
                    }
                }
            }
        }
    }
}
