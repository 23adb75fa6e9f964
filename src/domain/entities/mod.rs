//! Domain entities.

mod document;
mod form;
mod kyc;
mod service;
mod session;
mod view;

pub use document::{DocumentStatus, SAMPLE_DOCUMENTS, StoredDocument};
pub use form::{FieldKind, FieldSpec, FormDraft, SubmissionRecord, render_template};
pub use kyc::{BIOMETRIC_METHODS, ISLANDS, KYC_FIELDS, KycProfile};
pub use service::{Collaborator, ServiceConfig};
pub use session::SessionFlags;
pub use view::{NavAction, Screen, ServiceKind, TileCategory, ViewState};
