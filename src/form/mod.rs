mod errors;
mod submission;

pub use errors::FormError;
pub use submission::{FORM_FIELDS, FormSubmission, RawSubmission};
