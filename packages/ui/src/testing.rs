//! In-memory backend and recorders shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use api::{
    AdmissionApi, ApiError, Applicant, ApplicantPayload, AuthApi, Category, HttpClient,
    LoginOutcome, LoginRequest, LoginResponse,
};
use dioxus::prelude::*;

use crate::applicants::ApplicantsViewModel;
use crate::mutation::MutationSink;
use crate::session::AppSession;

/// A call received by [`FakeApi`].
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    ListApplicants,
    ListCategories,
    Create(ApplicantPayload),
    Update(i64, ApplicantPayload),
    Delete(i64),
    Login(LoginRequest),
}

/// How [`FakeApi::login`] answers.
#[derive(Clone, Debug)]
pub enum LoginReply {
    Token(String),
    Rejected(u16),
    Fails(u16),
}

/// Backend that keeps applicants in memory and records every call.
pub struct FakeApi {
    pub applicants: RefCell<Vec<Applicant>>,
    pub categories: RefCell<Vec<Category>>,
    pub calls: RefCell<Vec<Call>>,
    /// Fail list calls with HTTP 500.
    pub fail_loads: Cell<bool>,
    /// Fail create/update/delete calls with HTTP 500.
    pub fail_mutations: Cell<bool>,
    pub login_reply: RefCell<LoginReply>,
    next_id: Cell<i64>,
}

impl FakeApi {
    pub fn new(applicants: Vec<Applicant>) -> Self {
        let next_id = applicants.iter().filter_map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            applicants: RefCell::new(applicants),
            categories: RefCell::new(vec![
                Category {
                    id: 1,
                    name: "Full-time".into(),
                },
                Category {
                    id: 2,
                    name: "Evening".into(),
                },
            ]),
            calls: RefCell::new(Vec::new()),
            fail_loads: Cell::new(false),
            fail_mutations: Cell::new(false),
            login_reply: RefCell::new(LoginReply::Token("token-123".into())),
            next_id: Cell::new(next_id),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn mutation_result(&self) -> Result<(), ApiError> {
        if self.fail_mutations.get() {
            Err(ApiError::Status { status: 500 })
        } else {
            Ok(())
        }
    }
}

fn stored(id: Option<i64>, payload: &ApplicantPayload) -> Applicant {
    Applicant {
        id,
        first_name: payload.first_name.clone(),
        last_name: payload.last_name.clone(),
        middle_name: payload.middle_name.clone(),
        date_of_birth: payload.date_of_birth.clone(),
        phone_number: payload.phone_number.clone(),
        secondary_phone_number: payload.secondary_phone_number.clone(),
        category: payload.category,
        source: payload.source.clone(),
        created_at: None,
        updated_at: None,
    }
}

impl AdmissionApi for FakeApi {
    async fn list_applicants(&self) -> Result<Vec<Applicant>, ApiError> {
        self.record(Call::ListApplicants);
        if self.fail_loads.get() {
            return Err(ApiError::Status { status: 500 });
        }
        Ok(self.applicants.borrow().clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.record(Call::ListCategories);
        if self.fail_loads.get() {
            return Err(ApiError::Status { status: 500 });
        }
        Ok(self.categories.borrow().clone())
    }

    async fn create_applicant(&self, payload: &ApplicantPayload) -> Result<(), ApiError> {
        self.record(Call::Create(payload.clone()));
        self.mutation_result()?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.applicants.borrow_mut().push(stored(Some(id), payload));
        Ok(())
    }

    async fn update_applicant(&self, id: i64, payload: &ApplicantPayload) -> Result<(), ApiError> {
        self.record(Call::Update(id, payload.clone()));
        self.mutation_result()?;
        let mut applicants = self.applicants.borrow_mut();
        let Some(slot) = applicants.iter_mut().find(|a| a.id == Some(id)) else {
            return Err(ApiError::Status { status: 404 });
        };
        *slot = stored(Some(id), payload);
        Ok(())
    }

    async fn delete_applicant(&self, id: i64) -> Result<(), ApiError> {
        self.record(Call::Delete(id));
        self.mutation_result()?;
        let mut applicants = self.applicants.borrow_mut();
        let before = applicants.len();
        applicants.retain(|a| a.id != Some(id));
        if applicants.len() == before {
            return Err(ApiError::Status { status: 404 });
        }
        Ok(())
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginOutcome, ApiError> {
        self.record(Call::Login(request.clone()));
        match self.login_reply.borrow().clone() {
            LoginReply::Token(token) => Ok(LoginOutcome::Authenticated(LoginResponse { token })),
            LoginReply::Rejected(status) => Ok(LoginOutcome::Rejected { status }),
            LoginReply::Fails(status) => Err(ApiError::Status { status }),
        }
    }
}

/// Side effect observed by [`RecordingSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Reload,
    Close,
}

/// Sink that reloads a real view model and records the order of effects.
pub struct RecordingSink<'a> {
    pub api: &'a FakeApi,
    pub model: ApplicantsViewModel,
    pub effects: Vec<Effect>,
}

impl<'a> RecordingSink<'a> {
    pub fn new(api: &'a FakeApi) -> Self {
        Self {
            api,
            model: ApplicantsViewModel::new(),
            effects: Vec::new(),
        }
    }
}

impl MutationSink for RecordingSink<'_> {
    async fn reload(&mut self) {
        self.effects.push(Effect::Reload);
        self.model.load_applicants(self.api).await;
    }

    fn close(&mut self) {
        self.effects.push(Effect::Close);
    }
}

/// Applicant with the given id, names and phone.
pub fn applicant(id: i64, first: &str, last: &str, phone: &str) -> Applicant {
    Applicant {
        id: Some(id),
        first_name: first.into(),
        last_name: last.into(),
        middle_name: "Olimovich".into(),
        date_of_birth: "2006-01-01".into(),
        phone_number: phone.into(),
        secondary_phone_number: "998770000000".into(),
        category: 1,
        source: "website".into(),
        created_at: Some("2024-07-01T10:00:00Z".into()),
        updated_at: None,
    }
}

/// Counts renders and redirects seen during a render pass. Provided as a
/// context by [`render_with_session`].
#[derive(Clone, Debug, Default)]
pub struct Tally {
    renders: Rc<Cell<usize>>,
    redirects: Rc<Cell<usize>>,
}

impl Tally {
    pub fn render(&self) {
        self.renders.set(self.renders.get() + 1);
    }

    pub fn redirect(&self) {
        self.redirects.set(self.redirects.get() + 1);
    }

    pub fn renders(&self) -> usize {
        self.renders.get()
    }

    pub fn redirects(&self) -> usize {
        self.redirects.get()
    }
}

#[derive(Clone)]
struct Harness {
    session: AppSession,
    tally: Tally,
    view: fn() -> Element,
}

fn harness_root(harness: Harness) -> Element {
    use_context_provider(|| harness.session.clone());
    use_context_provider(HttpClient::default);
    use_context_provider(|| harness.tally.clone());
    (harness.view)()
}

/// Mount `view` under the session and client contexts, run the first render
/// and return the HTML with the tally of what happened.
pub fn render_with_session(session: AppSession, view: fn() -> Element) -> (String, Tally) {
    let tally = Tally::default();
    let mut dom = VirtualDom::new_with_props(
        harness_root,
        Harness {
            session,
            tally: tally.clone(),
            view,
        },
    );
    dom.rebuild_in_place();
    (dioxus_ssr::render(&dom), tally)
}
