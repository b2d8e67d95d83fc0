//! Presentation helpers
//!
//! Input parsing, conversion hints, the calculator session and text reports.

pub mod hints;
pub mod input;
pub mod report;
pub mod session;

pub use hints::{height_hint, weight_hint};
pub use input::{parse_height_cm, parse_height_feet_inches, parse_number, parse_weight, RawInput};
pub use report::{recommendations, report_file_name, Report};
pub use session::{Session, SessionError};
