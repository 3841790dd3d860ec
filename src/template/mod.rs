//! Contract template instantiation.
//!
//! - **Render**: single-pass `%name%` substitution engine
//! - **Contract**: typed template holding its declared placeholder set, and
//!   the checked `GeneratedSource` it produces
//!
//! The instantiator knows nothing about invoices. Every branch decision is
//! made by the profile's field resolver before substitution.

mod contract;
mod render;

pub use contract::{ContractTemplate, GeneratedSource};
pub use render::{TemplateError, find_placeholder, placeholder_names, render_template};
