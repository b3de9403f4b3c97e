#[cfg(feature = "cli")]
pub mod cli;
pub mod output;
pub mod pattern;
pub mod query;
pub mod record;
pub mod traverse;
pub mod value;

pub use output::{record_to_json, to_json, to_json_pretty};
pub use pattern::{Pattern, PatternToken, matches};
pub use query::{Juery, KeysWith, ValuesWith, juery, juery_one, keys_with, values_with};
pub use record::{LocationRecord, Path};
pub use traverse::{Traverser, traverse};
pub use value::Value;
