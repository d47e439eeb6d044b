//! Fixed-width text for the card. The SVG template lays values out in
//! monospace columns, so every number occupies the same 12 characters.

use crate::stats::AggregatedStats;

const NUMBER_WIDTH: usize = 11;

/// One leading space, then the number left-justified in 11 columns.
pub fn align_number(n: u64) -> String {
    let digits = n.to_string();
    let pad = NUMBER_WIDTH.saturating_sub(digits.len());
    format!(" {digits}{}", " ".repeat(pad))
}

/// Decorate the username so it fills the email-style field on the card.
pub fn align_username(name: &str) -> String {
    match name.chars().count() {
        0..=5 => format!("{name}@github.com"),
        6..=7 => format!("{name}@github"),
        8..=10 => format!("{name}@git"),
        17.. => name.chars().take(17).collect(),
        _ => name.to_string(),
    }
}

/// The `data.*` fields available to the template, in template order.
pub fn card_fields(stats: &AggregatedStats) -> Vec<(&'static str, String)> {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();

    vec![
        ("username", align_username(&stats.username)),
        ("name", text(&stats.name)),
        ("bio", text(&stats.bio)),
        ("website", text(&stats.website)),
        ("stars", align_number(stats.stars)),
        ("forks", align_number(stats.forks)),
        ("commits", align_number(stats.commits)),
        ("repo", align_number(stats.repo_count)),
        ("followers", align_number(stats.followers)),
        ("pic", stats.avatar_url.clone()),
        ("issues", align_number(stats.issues)),
        ("pr", align_number(stats.pull_requests)),
        ("watch", stats.watching.to_string()),
        ("gists", align_number(stats.gists)),
        (
            "hire",
            stats.hireable.map(|h| h.to_string()).unwrap_or_default(),
        ),
        ("uptime", stats.account_age_days.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_number_width() {
        assert_eq!(align_number(7), " 7          ");
        assert_eq!(align_number(7).len(), 12);
        assert_eq!(align_number(0), " 0          ");
        assert_eq!(align_number(12345).len(), 12);
    }

    #[test]
    fn test_align_number_overflowing_width_is_not_padded() {
        assert_eq!(align_number(12_345_678_901), " 12345678901");
        assert_eq!(align_number(123_456_789_012), " 123456789012");
    }

    #[test]
    fn test_align_username_boundaries() {
        assert_eq!(align_username("ab"), "ab@github.com");
        assert_eq!(align_username("abcde"), "abcde@github.com");
        assert_eq!(align_username("abcdef"), "abcdef@github");
        assert_eq!(align_username("abcdefg"), "abcdefg@github");
        assert_eq!(align_username("abcdefgh"), "abcdefgh@git");
        assert_eq!(align_username("abcdefghij"), "abcdefghij@git");
        assert_eq!(align_username("abcdefghijk"), "abcdefghijk");
        assert_eq!(align_username("abcdefghijklmnop"), "abcdefghijklmnop");
        assert_eq!(align_username("abcdefghijklmnopq"), "abcdefghijklmnopq");
        assert_eq!(
            align_username("abcdefghijklmnopqrstuvwxyz"),
            "abcdefghijklmnopq"
        );
    }

    #[test]
    fn test_align_username_counts_chars() {
        assert_eq!(align_username("jürgen"), "jürgen@github");
    }

    #[test]
    fn test_card_fields_blank_optionals() {
        let stats = AggregatedStats {
            username: "halfguru".to_string(),
            name: None,
            bio: None,
            website: None,
            avatar_url: "https://avatars.example/u/1".to_string(),
            followers: 3,
            hireable: None,
            stars: 12,
            forks: 1,
            commits: 250,
            repo_count: 9,
            issues: 0,
            pull_requests: 5,
            watching: 40,
            gists: 2,
            account_age_days: 1234,
        };
        let fields = card_fields(&stats);
        let get = |k: &str| {
            fields
                .iter()
                .find(|(name, _)| *name == k)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(get("username"), "halfguru@git");
        assert_eq!(get("name"), "");
        assert_eq!(get("bio"), "");
        assert_eq!(get("website"), "");
        assert_eq!(get("hire"), "");
        assert_eq!(get("commits"), " 250        ");
        assert_eq!(get("watch"), "40");
        assert_eq!(get("uptime"), "1234");
        assert_eq!(fields.len(), 16);
    }
}
