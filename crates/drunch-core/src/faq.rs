//! Rule-based FAQ responder.
//!
//! A static, ordered table of (keyword set -> response) pairs. Lookup
//! lowercases the input and returns the response of the first rule any of
//! whose keywords appears as a substring. Unmatched input gets a fixed
//! fallback naming the direct contact channel -- that is a defined answer,
//! not a failure.

/// One FAQ rule: if any keyword is a substring of the input, answer with
/// `response`. Keywords are lowercase; rule order decides ties.
#[derive(Debug, Clone, Copy)]
pub struct FaqRule {
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

/// The ordered rule table. Earlier rules win.
pub const RULES: &[FaqRule] = &[
    FaqRule {
        keywords: &["hours", "open", "time", "timing"],
        response: "We are open Monday-Friday: 8:00 AM - 11:00 PM, and Saturday-Sunday: 9:00 AM - 12:00 AM.",
    },
    FaqRule {
        keywords: &["location", "address", "where"],
        response: "We are located at B-12, Block 1, Near Practical Center & Total Parco Petrol Pump, Gulshan-e-Iqbal, Karachi, Pakistan.",
    },
    FaqRule {
        keywords: &["phone", "contact", "call", "number"],
        response: "You can reach us at 0312 2323244 or email us at drunch.pakistan@gmail.com.",
    },
    FaqRule {
        keywords: &["reservation", "book", "table", "reserve"],
        response: "You can book a table through our website by clicking the \"Book a Table\" button on the home page, or call us at 0312 2323244.",
    },
    FaqRule {
        keywords: &["menu", "food", "dishes", "items"],
        response: "We offer a variety of dishes including breakfast items, lunch specials, beverages, and desserts. Check out our Menu page for the full selection!",
    },
    FaqRule {
        keywords: &["delivery", "order", "online"],
        response: "Yes! You can place an online order through our website. Just browse our menu and add items to your cart.",
    },
    FaqRule {
        keywords: &["payment", "pay", "accept"],
        response: "We accept cash on delivery for online orders. For dine-in, we accept cash and all major cards.",
    },
    FaqRule {
        keywords: &["wifi", "internet"],
        response: "Yes, we offer free WiFi to all our customers. Just ask our staff for the password.",
    },
];

/// Answer for input no rule matches.
pub const FALLBACK: &str = "I'm sorry, I didn't understand that. You can ask me about our hours, \
     location, menu, reservations, or contact information. Or you can contact us directly at 0312 2323244.";

/// Canned prompts offered to the user. These populate the input field only;
/// submitting remains a distinct action.
pub const QUICK_QUESTIONS: &[&str] = &[
    "What are your hours?",
    "Where are you located?",
    "How do I make a reservation?",
    "Do you offer delivery?",
];

/// Look up the response for free-text input.
///
/// Pure and deterministic: same input, same output, no state.
pub fn respond(user_text: &str) -> &'static str {
    let normalized = user_text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| normalized.contains(kw)))
        .map_or(FALLBACK, |rule| rule.response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_question_matches_time_keyword() {
        let answer = respond("What time do you open?");
        assert!(answer.contains("Monday-Friday"));
    }

    #[test]
    fn test_unmatched_input_gets_fallback() {
        assert_eq!(respond("asdfgh"), FALLBACK);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(respond("WHERE are you?"), respond("where are you?"));
        assert!(respond("WHERE are you?").contains("Gulshan-e-Iqbal"));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // "time" (hours rule) appears before "table" (reservation rule)
        // in the table, so the hours rule answers.
        let answer = respond("what time can I book a table?");
        assert!(answer.contains("Monday-Friday"));
    }

    #[test]
    fn test_keyword_is_substring_match() {
        // "timing" contains "time"; also listed explicitly.
        assert!(respond("timings please").contains("Monday-Friday"));
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(respond("delivery?"), respond("delivery?"));
    }

    #[test]
    fn test_every_quick_question_has_a_real_answer() {
        for question in QUICK_QUESTIONS {
            assert_ne!(respond(question), FALLBACK, "no rule answers {question:?}");
        }
    }
}
