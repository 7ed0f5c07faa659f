use crate::models::Action;

/// Continue only when the value is strictly above `threshold_yen`
pub fn recommend_with_threshold(value_yen: i64, threshold_yen: i64) -> Action {
    if value_yen > threshold_yen {
        Action::Continue
    } else {
        Action::Quit
    }
}

/// Zero is a quit, not a neutral result
pub fn recommend(value_yen: i64) -> Action {
    recommend_with_threshold(value_yen, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_boundary() {
        assert_eq!(recommend(0), Action::Quit);
        assert_eq!(recommend(-1), Action::Quit);
        assert_eq!(recommend(1), Action::Continue);
    }

    #[test]
    fn test_custom_threshold() {
        assert_eq!(recommend_with_threshold(500, 500), Action::Quit);
        assert_eq!(recommend_with_threshold(501, 500), Action::Continue);
    }
}
