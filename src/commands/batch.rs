use crate::api::VkApi;
use crate::api::methods::get_users;
use crate::error::{BatchError, PollError};
use crate::models::InputEntry;
use crate::polls::{parse_poll_reference, resolve_correct_voters};
use crate::voting::report::format_report;
use crate::voting::{VoterTally, tally};
use log::{error, info, warn};
use std::path::Path;

/// What to do when one entry of the batch cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log it, leave it out of the tally and carry on.
    Skip,
    /// Stop the run without writing a report.
    Abort,
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub resolved: usize,
    pub failures: Vec<(usize, String, PollError)>,
    pub report: String,
}

pub async fn run_batch(
    api: &dyn VkApi,
    entries: &[InputEntry],
    output: &Path,
    policy: FailurePolicy,
) -> Result<BatchOutcome, BatchError> {
    if entries.is_empty() {
        return Err(BatchError::NoEntries);
    }

    println!("\nProcessing...");

    // Resolve every entry in input order, one poll at a time
    let mut voters = VoterTally::new();
    let mut failures: Vec<(usize, String, PollError)> = Vec::new();
    let mut resolved = 0;

    for (i, entry) in entries.iter().enumerate() {
        let index = i + 1;
        match resolve_entry(api, entry).await {
            Ok(right_voters) => {
                println!("{} {} right answers: {}", index, entry.poll_url, right_voters.len());
                tally(&mut voters, &right_voters);
                resolved += 1;
            }
            Err(source) => match policy {
                FailurePolicy::Abort => {
                    return Err(BatchError::Poll {
                        index,
                        url: entry.poll_url.clone(),
                        source,
                    });
                }
                FailurePolicy::Skip => {
                    error!("{} {} skipped: {}", index, entry.poll_url, source);
                    failures.push((index, entry.poll_url.clone(), source));
                }
            },
        }
    }

    // Nothing to report if every entry failed
    if resolved == 0 {
        return Err(BatchError::NothingResolved);
    }

    info!("{} distinct voters across {} polls", voters.len(), resolved);

    // users.get rejects an empty id list
    let profiles = if voters.is_empty() {
        Vec::new()
    } else {
        get_users(api, voters.voter_ids()).await?
    };

    // Write the report first, then echo it to the console
    let report = format_report(&voters, &profiles);
    tokio::fs::write(output, &report)
        .await
        .map_err(|source| BatchError::Write {
            path: output.to_path_buf(),
            source,
        })?;

    println!("Report:");
    println!("{}", report);

    // Summarize what was skipped
    if !failures.is_empty() {
        warn!("{} of {} entries failed:", failures.len(), entries.len());
        for (index, url, reason) in &failures {
            warn!("  {} {}: {}", index, url, reason);
        }
    }

    Ok(BatchOutcome {
        resolved,
        failures,
        report,
    })
}

async fn resolve_entry(api: &dyn VkApi, entry: &InputEntry) -> Result<Vec<i64>, PollError> {
    let reference = parse_poll_reference(&entry.poll_url)?;
    resolve_correct_voters(api, &reference, &entry.expected_answer).await
}
