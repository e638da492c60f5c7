//! Request validation rules and the error code catalog.
//!
//! Rules are explicit functions returning `Result<_, ValidationError>`; there is
//! no global validator registry. Handlers receive the configurable part (the
//! link denylist) through [`crate::state::AppState`].
//!
//! - [`constraints`] - Single-field rules (link format, uuid, boolean, sort params)
//! - [`list_params`] - List query parameters and the cross-field filter rules
//! - [`policy`] - Link policy combining format rules with the domain denylist
//! - [`error_code`] - Error codes and their descriptions

pub mod constraints;
pub mod error_code;
pub mod list_params;
pub mod policy;

pub use error_code::{ErrorCode, ErrorInfo, ValidationError};
pub use list_params::{FilterKey, ListParams};
pub use policy::LinkPolicy;
