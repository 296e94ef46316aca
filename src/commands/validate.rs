use crate::api::VkApi;
use crate::error::PollError;
use crate::models::InputEntry;
use crate::polls::{check_expected_answer, parse_poll_reference};
use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationSummary {
    pub passed: usize,
    pub failed: usize,
}

/// Dry run: checks every expected answer exists in its poll. Never fetches votes.
pub async fn run_validation(api: &dyn VkApi, entries: &[InputEntry]) -> ValidationSummary {
    println!("Testing:\n");

    let mut summary = ValidationSummary::default();
    for (i, entry) in entries.iter().enumerate() {
        let index = i + 1;
        match validate_entry(api, entry).await {
            Ok(()) => {
                println!("{} OK", index);
                summary.passed += 1;
            }
            Err(PollError::AnswerNotFound { expected, available }) => {
                println!(
                    "{} Error: answer: {} expected: {}",
                    index,
                    expected,
                    available.join(" or ")
                );
                summary.failed += 1;
            }
            Err(e) => {
                warn!("validation of {} failed: {}", entry.poll_url, e);
                println!("{} Error: {}", index, e);
                summary.failed += 1;
            }
        }
    }

    println!("Result: failed {}, passed {}", summary.failed, summary.passed);
    summary
}

async fn validate_entry(api: &dyn VkApi, entry: &InputEntry) -> Result<(), PollError> {
    let reference = parse_poll_reference(&entry.poll_url)?;
    check_expected_answer(api, &reference, &entry.expected_answer).await
}
