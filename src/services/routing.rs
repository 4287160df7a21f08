//! Intent classification for incoming chat messages
//!
//! Routing is an ordered list of (predicate, route) pairs so precedence is
//! explicit: the first matching predicate wins, and anything unmatched falls
//! through to the remote completion endpoint.

/// Where a user message gets its reply from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Recommendation,
    Troubleshooting,
    Completion,
}

fn wants_recommendation(text: &str) -> bool {
    text.contains("recommend") || text.contains("advice")
}

fn reports_problem(text: &str) -> bool {
    text.contains("issue") || text.contains("problem")
}

// Predicates run against the raw user text, in order.
const ROUTES: &[(fn(&str) -> bool, Route)] = &[
    (wants_recommendation, Route::Recommendation),
    (reports_problem, Route::Troubleshooting),
];

/// Pick the reply source for a user message. Never fails; unmatched text
/// goes to the completion endpoint.
pub fn classify(text: &str) -> Route {
    ROUTES
        .iter()
        .find(|(matches, _)| matches(text))
        .map(|(_, route)| *route)
        .unwrap_or(Route::Completion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_keywords_route_to_recommendation() {
        assert_eq!(classify("any recommendation for tomatoes?"), Route::Recommendation);
        assert_eq!(classify("need advice on irrigation"), Route::Recommendation);
    }

    #[test]
    fn problem_keywords_route_to_troubleshooting() {
        assert_eq!(classify("I have a wifi issue"), Route::Troubleshooting);
        assert_eq!(classify("there is a problem with my sensor"), Route::Troubleshooting);
    }

    #[test]
    fn recommendation_wins_over_troubleshooting() {
        // Both keyword sets present: the first-checked branch wins.
        assert_eq!(
            classify("recommend a fix for this issue"),
            Route::Recommendation
        );
    }

    #[test]
    fn unmatched_text_falls_through_to_completion() {
        assert_eq!(classify("what's the weather doing"), Route::Completion);
    }

    #[test]
    fn matching_is_case_sensitive_on_raw_text() {
        // The classifier looks at the raw text; casing is only normalized
        // inside the responders.
        assert_eq!(classify("RECOMMEND something"), Route::Completion);
    }
}
