use super::{Param, VkApi};
use crate::error::ApiError;
use crate::models::{AnswerVoters, Poll, PollReference, UserProfile};
use serde::de::DeserializeOwned;

pub const USER_FIELDS: &str = "id,first_name,last_name,nickname,domain";

pub async fn get_poll(api: &dyn VkApi, reference: &PollReference) -> Result<Poll, ApiError> {
    let params = [
        ("poll_id", reference.poll_id.clone()),
        ("owner_id", reference.owner_id.clone()),
    ];
    call_typed(api, "polls.getById", &params).await
}

/// Voter groups for the given answers, one group per answer id.
pub async fn get_voters(
    api: &dyn VkApi,
    reference: &PollReference,
    answer_ids: &[i64],
) -> Result<Vec<AnswerVoters>, ApiError> {
    let params = [
        ("poll_id", reference.poll_id.clone()),
        ("owner_id", reference.owner_id.clone()),
        ("answer_ids", join_ids(answer_ids)),
    ];
    call_typed(api, "polls.getVoters", &params).await
}

/// Profiles for all `user_ids` in one request.
pub async fn get_users(api: &dyn VkApi, user_ids: &[i64]) -> Result<Vec<UserProfile>, ApiError> {
    let params = [
        ("user_ids", join_ids(user_ids)),
        ("fields", USER_FIELDS.to_string()),
    ];
    call_typed(api, "users.get", &params).await
}

async fn call_typed<T: DeserializeOwned>(
    api: &dyn VkApi,
    method: &str,
    params: &[Param<'_>],
) -> Result<T, ApiError> {
    let payload = api.call(method, params).await?;
    serde_json::from_value(payload).map_err(|source| ApiError::UnexpectedPayload {
        method: method.to_string(),
        source,
    })
}

pub fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
