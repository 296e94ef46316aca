use crate::api::VkApi;
use crate::api::methods::{get_poll, get_voters};
use crate::error::PollError;
use crate::models::{Poll, PollAnswerOption, PollReference};
use log::debug;

/// First answer whose trimmed text equals the trimmed `expected` text.
pub fn find_answer<'a>(poll: &'a Poll, expected: &str) -> Result<&'a PollAnswerOption, PollError> {
    let expected = expected.trim();
    poll.answers
        .iter()
        .find(|answer| answer.text.trim() == expected)
        .ok_or_else(|| PollError::AnswerNotFound {
            expected: expected.to_string(),
            available: answer_texts(poll),
        })
}

pub fn answer_texts(poll: &Poll) -> Vec<String> {
    poll.answers
        .iter()
        .map(|answer| answer.text.trim().to_string())
        .collect()
}

/// Ids of the users who picked the answer matching `expected`.
pub async fn resolve_correct_voters(
    api: &dyn VkApi,
    reference: &PollReference,
    expected: &str,
) -> Result<Vec<i64>, PollError> {
    // Look up the poll and pick the answer we expect
    let poll = get_poll(api, reference).await?;
    let answer = find_answer(&poll, expected)?;
    debug!(
        "poll {}_{} {:?}: expected answer {:?} has id {}",
        poll.owner_id, poll.id, poll.question, answer.text, answer.id
    );

    // Only one answer id is requested, so only its group is of interest
    let groups = get_voters(api, reference, &[answer.id]).await?;
    let group = groups
        .into_iter()
        .find(|group| group.answer_id == answer.id)
        .ok_or_else(|| PollError::NoVoterGroup {
            poll_id: reference.poll_id.clone(),
        })?;
    Ok(group.users.items)
}

/// Checks that `expected` is one of the poll's answers without touching the votes.
pub async fn check_expected_answer(
    api: &dyn VkApi,
    reference: &PollReference,
    expected: &str,
) -> Result<(), PollError> {
    let poll = get_poll(api, reference).await?;
    find_answer(&poll, expected).map(|_| ())
}
