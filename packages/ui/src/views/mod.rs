mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod applicants;
pub use applicants::ApplicantsView;

mod login;
pub use login::LoginView;
