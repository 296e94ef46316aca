pub mod batch;
pub mod input;
pub mod validate;

use crate::api::VkApi;
use crate::args::Args;
use crate::error::InputError;
use batch::{FailurePolicy, run_batch};
use input::read_entries;
use log::{error, info};
use validate::run_validation;

pub const USAGE: &str = "Usage: poll-tally -i=filename.txt [--skip-tests] [--test]";

/// Runs validation and/or the batch as selected by `args`. Returns the process exit status.
pub async fn run(args: &Args, api: &dyn VkApi) -> u8 {
    let entries = match args
        .input
        .as_deref()
        .ok_or(InputError::MissingInputFlag)
        .and_then(read_entries)
    {
        Ok(entries) => entries,
        Err(e) => {
            error!("{}", e);
            println!("{}", USAGE);
            return 1;
        }
    };
    info!("Loaded {} entries", entries.len());

    if args.skip_tests {
        println!("Validation skipped");
    } else {
        run_validation(api, &entries).await;
    }

    if args.test {
        println!("Validation only");
        return 0;
    }

    let policy = if args.fail_fast {
        FailurePolicy::Abort
    } else {
        FailurePolicy::Skip
    };

    match run_batch(api, &entries, &args.output, policy).await {
        Ok(outcome) => {
            info!(
                "Report written to {} ({} polls counted, {} skipped)",
                args.output.display(),
                outcome.resolved,
                outcome.failures.len()
            );
            0
        }
        Err(e) => {
            error!("Batch failed: {}", e);
            1
        }
    }
}
