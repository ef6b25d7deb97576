use serde::{Deserialize, Serialize};

/// The authenticated inspector, as persisted in the device session store
/// and stamped onto protocol submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: i64,
    pub employee_id: i64,
    pub full_name: String,
    pub username: String,
}

impl SessionUser {
    /// Initials for the avatar fallback, at most two characters.
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        let user = SessionUser {
            user_id: 1,
            employee_id: 2,
            full_name: "jose carlos silva".into(),
            username: "jsilva".into(),
        };
        assert_eq!(user.initials(), "JC");
    }
}
