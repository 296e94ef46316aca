pub mod parser;
pub mod resolver;

pub use parser::parse_poll_reference;
pub use resolver::{check_expected_answer, resolve_correct_voters};
