use serde::Serialize;

/// Answer to a yes/no question.
///
/// The `*ToAll` variants let a caller apply one answer to a batch of
/// follow-up questions; the batching itself is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserResponse {
    Yes,
    No,
    YesToAll,
    NoToAll,
}

impl UserResponse {
    /// Map an exact (case-sensitive, untrimmed) token to a response.
    ///
    /// This is both the acceptance test and the conversion used by
    /// `Prompter::read_yes_no`, so every accepted token has a variant.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "y" | "yes" => Some(UserResponse::Yes),
            "n" | "no" => Some(UserResponse::No),
            "yes-to-all" => Some(UserResponse::YesToAll),
            "no-to-all" => Some(UserResponse::NoToAll),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserResponse::Yes => "yes",
            UserResponse::No => "no",
            UserResponse::YesToAll => "yes-to-all",
            UserResponse::NoToAll => "no-to-all",
        }
    }

    /// True for `Yes` and `YesToAll`.
    pub fn is_yes(&self) -> bool {
        matches!(self, UserResponse::Yes | UserResponse::YesToAll)
    }

    pub fn applies_to_all(&self) -> bool {
        matches!(self, UserResponse::YesToAll | UserResponse::NoToAll)
    }
}

impl std::fmt::Display for UserResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_maps_every_accepted_token() {
        let table = [
            ("y", UserResponse::Yes),
            ("yes", UserResponse::Yes),
            ("n", UserResponse::No),
            ("no", UserResponse::No),
            ("yes-to-all", UserResponse::YesToAll),
            ("no-to-all", UserResponse::NoToAll),
        ];
        for (token, expected) in table {
            assert_eq!(UserResponse::parse(token), Some(expected), "{}", token);
        }
    }

    #[test]
    fn parse_is_case_sensitive_and_untrimmed() {
        for token in ["Y", "YES", " yes", "no ", "yes to all", "", "sure"] {
            assert_eq!(UserResponse::parse(token), None, "{:?}", token);
        }
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for response in [
            UserResponse::Yes,
            UserResponse::No,
            UserResponse::YesToAll,
            UserResponse::NoToAll,
        ] {
            assert_eq!(UserResponse::parse(response.as_str()), Some(response));
        }
    }

    #[test]
    fn helpers_classify_variants() {
        assert!(UserResponse::YesToAll.is_yes());
        assert!(!UserResponse::NoToAll.is_yes());
        assert!(UserResponse::NoToAll.applies_to_all());
        assert!(!UserResponse::Yes.applies_to_all());
    }

    #[test]
    fn serializes_as_kebab_token() {
        let value = serde_json::to_value(UserResponse::YesToAll).unwrap();
        assert_eq!(value, "yes-to-all");
    }
}
