//! The applicants dashboard: search, table, and the add/edit modals.

use api::{AdmissionApi, Applicant, HttpClient};
use dioxus::prelude::*;

use crate::applicant_form::{AddApplicantModal, EditApplicantModal};
use crate::applicant_table::ApplicantTable;
use crate::applicants::ApplicantsViewModel;
use crate::draft::NewApplicant;
use crate::login::logout;
use crate::mutation::{self, MutationSink};
use crate::session::{use_client, use_session};

/// Which modal is open. The edit variant carries the selected row.
#[derive(Clone, Debug, PartialEq)]
enum ApplicantModal {
    Closed,
    Add,
    Edit(Applicant),
}

/// Mutation effects routed into the view's signals.
struct ViewSink {
    client: HttpClient,
    model: Signal<ApplicantsViewModel>,
    modal: Signal<ApplicantModal>,
}

impl MutationSink for ViewSink {
    async fn reload(&mut self) {
        let result = self.client.list_applicants().await;
        self.model.write().apply_applicants(result);
    }

    fn close(&mut self) {
        self.modal.set(ApplicantModal::Closed);
    }
}

/// Applicants dashboard. Loads applicants and categories once on mount.
#[component]
pub fn ApplicantsView(on_logout: EventHandler<()>) -> Element {
    let client = use_client();
    let session = use_session();
    let mut model = use_signal(ApplicantsViewModel::new);
    let mut search = use_signal(String::new);
    let mut modal = use_signal(|| ApplicantModal::Closed);

    // Two independent loads on mount
    let applicants_client = client.clone();
    let _applicants = use_resource(move || {
        let client = applicants_client.clone();
        async move {
            let result = client.list_applicants().await;
            model.write().apply_applicants(result);
        }
    });
    let categories_client = client.clone();
    let _categories = use_resource(move || {
        let client = categories_client.clone();
        async move {
            let result = client.list_categories().await;
            model.write().apply_categories(result);
        }
    });

    let sink_client = client.clone();
    let make_sink = move || ViewSink {
        client: sink_client.clone(),
        model,
        modal,
    };

    let add_sink = make_sink.clone();
    let handle_create = move |form: NewApplicant| {
        let mut sink = add_sink();
        spawn(async move {
            let client = sink.client.clone();
            let _ = mutation::create_applicant(&client, &form, &mut sink).await;
        });
    };

    let edit_sink = make_sink.clone();
    let handle_update = move |draft: Option<Applicant>| {
        let mut sink = edit_sink();
        spawn(async move {
            let client = sink.client.clone();
            let _ = mutation::update_applicant(&client, draft.as_ref(), &mut sink).await;
        });
    };

    let handle_delete = move |id: i64| {
        let mut sink = make_sink();
        spawn(async move {
            let client = sink.client.clone();
            let _ = mutation::delete_applicant(&client, id, &mut sink).await;
        });
    };

    let handle_logout = move |_| logout(&session, || on_logout.call(()));

    let view = model.read();
    let rows: Vec<(Applicant, String)> = view
        .filtered(&search.read())
        .into_iter()
        .map(|a| (a.clone(), view.category_label(a.category)))
        .collect();
    let categories = view.categories().to_vec();
    drop(view);

    rsx! {
        div {
            class: "flex min-h-screen w-full flex-col bg-neutral-50",

            header {
                class: "flex items-center gap-4 border-b border-neutral-200 bg-white px-6 py-3",
                nav {
                    class: "text-sm text-neutral-500",
                    span { "Dashboard" }
                    span { class: "mx-2", "/" }
                    span { class: "text-neutral-800", "Applicants" }
                }
                input {
                    class: "ml-auto w-80 rounded-lg border border-neutral-300 px-3 py-1.5 text-sm",
                    r#type: "search",
                    placeholder: "Search applicants...",
                    value: "{search}",
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                button {
                    class: "btn btn-outline",
                    onclick: handle_logout,
                    "Logout"
                }
            }

            main {
                class: "p-6",
                div {
                    class: "rounded-lg border border-neutral-200 bg-white p-6",
                    h1 { class: "text-xl font-semibold", "Applicants" }
                    p { class: "mb-4 text-sm text-neutral-500", "Manage applicants for your university." }
                    button {
                        class: "btn btn-primary mb-4",
                        onclick: move |_| modal.set(ApplicantModal::Add),
                        "Add Applicant"
                    }
                    ApplicantTable {
                        rows: rows,
                        on_edit: move |applicant: Applicant| modal.set(ApplicantModal::Edit(applicant)),
                        on_delete: handle_delete,
                    }
                }
            }
        }

        {match modal() {
            ApplicantModal::Closed => rsx! {},
            ApplicantModal::Add => rsx! {
                AddApplicantModal {
                    categories: categories,
                    on_submit: handle_create,
                    on_close: move |_| modal.set(ApplicantModal::Closed),
                }
            },
            ApplicantModal::Edit(applicant) => {
                let key = applicant.id.map(|id| id.to_string()).unwrap_or_default();
                rsx! {
                    EditApplicantModal {
                        key: "{key}",
                        applicant: Some(applicant),
                        categories: categories,
                        on_submit: handle_update,
                        on_close: move |_| modal.set(ApplicantModal::Closed),
                    }
                }
            }
        }}
    }
}
