use serde::{Deserialize, Serialize};

/// Owner and poll id pair taken from a `?w=poll{owner}_{poll}` link.
/// Owner ids are negative for groups, so both stay strings as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollReference {
    pub owner_id: String,
    pub poll_id: String,
}

// One `url;answer` line of the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEntry {
    pub poll_url: String,
    pub expected_answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    pub id: i64,
    pub owner_id: i64,
    #[serde(default)]
    pub question: String,
    pub answers: Vec<PollAnswerOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollAnswerOption {
    pub id: i64,
    pub text: String,
}

// polls.getVoters returns one group per requested answer id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerVoters {
    pub answer_id: i64,
    pub users: VoterList,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoterList {
    pub items: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub domain: String,
}

impl UserProfile {
    /// Short name used in profile links, `id{id}` when the user has none.
    pub fn handle(&self) -> String {
        if self.domain.is_empty() {
            format!("id{}", self.id)
        } else {
            self.domain.clone()
        }
    }

    pub fn link(&self) -> String {
        format!("https://vk.com/{}", self.handle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_falls_back_to_numeric_id() {
        let user: UserProfile =
            serde_json::from_str(r#"{"id": 42, "first_name": "Anna", "last_name": "Ivanova", "domain": ""}"#)
                .unwrap();
        assert_eq!(user.handle(), "id42");
        assert_eq!(user.link(), "https://vk.com/id42");
    }

    #[test]
    fn handle_prefers_domain() {
        let user: UserProfile = serde_json::from_str(
            r#"{"id": 42, "first_name": "Anna", "last_name": "Ivanova", "domain": "anna"}"#,
        )
        .unwrap();
        assert_eq!(user.link(), "https://vk.com/anna");
    }

    #[test]
    fn missing_domain_deserializes_as_empty() {
        let user: UserProfile =
            serde_json::from_str(r#"{"id": 7, "first_name": "Ivan", "last_name": "Petrov"}"#).unwrap();
        assert_eq!(user.handle(), "id7");
    }

    #[test]
    fn voters_payload_shape() {
        let groups: Vec<AnswerVoters> = serde_json::from_str(
            r#"[{"answer_id": 11, "users": {"count": 2, "items": [1, 2]}}]"#,
        )
        .unwrap();
        assert_eq!(groups[0].answer_id, 11);
        assert_eq!(groups[0].users.items, vec![1, 2]);
    }
}
