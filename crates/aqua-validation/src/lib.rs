//! Aqua Validation
//!
//! Pure field validators shared by the account and booking forms.
//! Every function is side-effect free: it looks at one value (plus an
//! explicit context such as "today" or a maximum) and reports pass/fail.
//!
//! Validators come in two shapes:
//! - `is_*` / `equals` style predicates returning `bool`
//! - `validate_*` checks returning `Result<(), String>` with a display message

pub mod date;
pub mod email;
pub mod numeric;
pub mod password;
pub mod phone;
pub mod string;

// Re-export all validators
pub use date::*;
pub use email::*;
pub use numeric::*;
pub use password::*;
pub use phone::*;
pub use string::*;
