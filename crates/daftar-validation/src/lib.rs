//! Daftar Validation
//!
//! Declarative, rule-based validation of submitted records for the Daftar
//! accounting app. A [`RuleSpec`] maps field names to ordered rules written as
//! `"required|string|max:255"`; a [`Validator`] runs every rule of every field
//! against a JSON record and collects human-readable messages per field.
//!
//! Besides the generic rules (`required`, `numeric`, `between`, `email`, ...)
//! the catalog carries Iranian formats: mobile numbers, postal codes, the
//! national ID checksum and Sheba (IBAN) numbers.
//!
//! ```
//! use daftar_validation::{schema, Engine};
//! use serde_json::json;
//!
//! let engine = Engine::new();
//! let spec = engine.compile_pairs(schema::PAYMENT).unwrap();
//! let record = json!({
//!     "invoice_id": 12,
//!     "amount": 250000,
//!     "payment_date": "2024-03-01",
//!     "method": "transfer",
//!     "sheba": "IR062960000000100324200001",
//! });
//!
//! assert!(engine.validate(record.as_object().unwrap(), &spec).passes());
//! ```

pub mod checks;
pub mod config;
pub mod engine;
pub mod error;
pub mod error_set;
pub mod messages;
pub mod registry;
pub mod response;
pub mod rule;
pub mod schema;
pub mod spec;
pub mod validator;
pub mod value;

pub use config::ValidatorConfig;
pub use engine::Engine;
pub use error::RuleError;
pub use error_set::ErrorSet;
pub use messages::Messages;
pub use registry::{CustomRule, RuleContext, RuleRegistry};
pub use response::ValidationFailure;
pub use rule::{Pattern, Rule, BUILTIN_RULES};
pub use spec::{RuleSource, RuleSpec, RuleSpecSource};
pub use validator::Validator;
pub use value::{Record, ValueKind};
