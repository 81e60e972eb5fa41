//! # aqua-forms
//!
//! Form validation for the Aquaxperience marketplace, decoupled from any UI
//! framework. A view layer collects raw input into [`FormValues`], runs it
//! through a [`FormSchema`] and renders the resulting [`ValidationResult`]
//! as inline field errors.
//!
//! ```rust
//! use aqua_forms::{FormSchema, FormValues};
//!
//! let schema = FormSchema::new("newsletter")
//!     .required("email", "Email is required")
//!     .email("email", "Enter a valid email");
//!
//! let values = FormValues::new().with("email", "diver@example");
//! let result = schema.validate(&values);
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.get_error("email"), Some("Enter a valid email"));
//! ```
//!
//! The account forms ([`LoginForm`], [`RegisterForm`]) hand validated input
//! to an injected [`AuthService`]; they never store credentials themselves.

pub mod auth;
pub mod engine;
pub mod result;
pub mod rule;
pub mod state;
pub mod value;

pub use auth::{AuthService, LoginForm, RegisterData, RegisterForm, UserRole};
pub use engine::validate;
pub use result::ValidationResult;
pub use rule::{FieldRule, FormSchema};
pub use state::{FormState, SubmitOutcome};
pub use value::{FieldValue, FormValues};
