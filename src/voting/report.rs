use crate::models::UserProfile;
use crate::voting::VoterTally;
use chrono::{DateTime, Local};
use log::warn;

// Fits the longest first+last name we expect ("Константин Константинопольский")
pub const NAME_COLUMN_WIDTH: usize = 30;

/// Builds the ranked report, stamped with the current local time.
pub fn format_report(tally: &VoterTally, profiles: &[UserProfile]) -> String {
    format_report_at(tally, profiles, Local::now())
}

pub fn format_report_at(tally: &VoterTally, profiles: &[UserProfile], created: DateTime<Local>) -> String {
    let mut lines: Vec<(u32, String)> = Vec::with_capacity(profiles.len());
    for user in profiles {
        let Some(votes) = tally.count(user.id) else {
            warn!("profile {} was returned but never voted, skipping", user.id);
            continue;
        };
        lines.push((votes, render_line(votes, user)));
    }

    // stable: ties keep the order the profiles came in
    lines.sort_by(|a, b| b.0.cmp(&a.0));

    let body: Vec<String> = lines.into_iter().map(|(_, line)| line).collect();
    format!(
        "{}\n\nCreated date: {}\n",
        body.join("\n"),
        created.format("%c")
    )
}

pub fn render_line(votes: u32, user: &UserProfile) -> String {
    let name_len = user.first_name.chars().count() + user.last_name.chars().count() + 1;
    let padding = NAME_COLUMN_WIDTH.saturating_sub(name_len);
    format!(
        "{:>2} - {} {}{}({})",
        votes,
        user.first_name,
        user.last_name,
        " ".repeat(padding),
        user.link()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user(id: i64, first: &str, last: &str, domain: &str) -> UserProfile {
        UserProfile {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            domain: domain.to_string(),
        }
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn sorted_by_votes_with_stable_ties() {
        let mut tally = VoterTally::new();
        for _ in 0..5 {
            tally.record(&[1, 3]);
        }
        for _ in 0..12 {
            tally.record(&[2]);
        }
        let profiles = vec![
            user(1, "A", "A", "a"),
            user(2, "B", "B", "b"),
            user(3, "C", "C", "c"),
        ];

        let report = format_report_at(&tally, &profiles, fixed_time());
        let lines: Vec<&str> = report.lines().collect();
        assert!(lines[0].starts_with("12 - B B"));
        assert!(lines[1].starts_with(" 5 - A A"));
        assert!(lines[2].starts_with(" 5 - C C"));
    }

    #[test]
    fn numeric_not_lexicographic_sort() {
        let mut tally = VoterTally::new();
        for _ in 0..9 {
            tally.record(&[1]);
        }
        for _ in 0..10 {
            tally.record(&[2]);
        }
        let profiles = vec![user(1, "Nine", "N", ""), user(2, "Ten", "T", "")];
        let report = format_report_at(&tally, &profiles, fixed_time());
        assert!(report.starts_with("10 - Ten T"));
    }

    #[test]
    fn padding_fills_name_column() {
        // 14 + 14 + 1 = 29 characters
        let u = user(1, "Aaaaaaaaaaaaaa", "Bbbbbbbbbbbbbb", "x");
        assert_eq!(
            render_line(3, &u),
            " 3 - Aaaaaaaaaaaaaa Bbbbbbbbbbbbbb (https://vk.com/x)"
        );
    }

    #[test]
    fn long_names_get_no_padding() {
        let u = user(1, "Константин", "Константинопольский", "");
        assert_eq!(
            render_line(11, &u),
            "11 - Константин Константинопольский(https://vk.com/id1)"
        );

        let longer = user(2, "Aaaaaaaaaaaaaaaaaaaa", "Bbbbbbbbbbbbbbbbbbbb", "l");
        assert_eq!(
            render_line(1, &longer),
            " 1 - Aaaaaaaaaaaaaaaaaaaa Bbbbbbbbbbbbbbbbbbbb(https://vk.com/l)"
        );
    }

    #[test]
    fn padding_counts_characters_not_bytes() {
        let u = user(1, "Иван", "Петров", "ivan");
        let line = render_line(2, &u);
        // 4 + 6 + 1 = 11, so 19 spaces
        assert!(line.contains(&format!("Иван Петров{}(", " ".repeat(19))));
    }

    #[test]
    fn trailer_has_timestamp() {
        let mut tally = VoterTally::new();
        tally.record(&[1]);
        let report = format_report_at(&tally, &[user(1, "A", "B", "")], fixed_time());
        let expected_date = fixed_time().format("%c").to_string();
        assert!(report.ends_with(&format!("\n\nCreated date: {}\n", expected_date)));
    }

    #[test]
    fn empty_report_is_only_the_trailer() {
        let report = format_report_at(&VoterTally::new(), &[], fixed_time());
        assert!(report.starts_with("\n\nCreated date: "));
    }

    #[test]
    fn profiles_without_votes_are_skipped() {
        let tally = VoterTally::new();
        let report = format_report_at(&tally, &[user(9, "Ghost", "User", "")], fixed_time());
        assert!(!report.contains("Ghost"));
    }
}
