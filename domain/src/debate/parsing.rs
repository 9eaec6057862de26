//! Decision response parsing.
//!
//! Judges answer in free text. The only contract is that the first line
//! names the winner; anything after it is justification. Parsing is lenient
//! and never fails: a blank response yields an empty winner.

/// Split a judge response into `(winner, justification)`.
///
/// The response is trimmed, then split on the first line break. Both halves
/// are trimmed again; a missing second half becomes an empty justification.
///
/// # Examples
///
/// ```
/// use debate_domain::debate::parsing::parse_decision_response;
///
/// assert_eq!(
///     parse_decision_response("Alice\nBetter points"),
///     ("Alice".to_string(), "Better points".to_string())
/// );
/// assert_eq!(parse_decision_response("Bob"), ("Bob".to_string(), String::new()));
/// assert_eq!(parse_decision_response("   "), (String::new(), String::new()));
/// ```
pub fn parse_decision_response(response: &str) -> (String, String) {
    let response = response.trim();
    match response.split_once('\n') {
        Some((winner, justification)) => {
            (winner.trim().to_string(), justification.trim().to_string())
        }
        None => (response.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_and_justification() {
        let (winner, reason) = parse_decision_response("Alice\nBetter points");
        assert_eq!(winner, "Alice");
        assert_eq!(reason, "Better points");
    }

    #[test]
    fn test_winner_only() {
        let (winner, reason) = parse_decision_response("Bob");
        assert_eq!(winner, "Bob");
        assert_eq!(reason, "");
    }

    #[test]
    fn test_multiline_justification_kept_intact() {
        let (winner, reason) =
            parse_decision_response("pro_agent\nStronger case.\nBetter evidence.\n");
        assert_eq!(winner, "pro_agent");
        assert_eq!(reason, "Stronger case.\nBetter evidence.");
    }

    #[test]
    fn test_surrounding_whitespace_and_crlf() {
        let (winner, reason) = parse_decision_response("\n  con_agent  \r\n  Clearer rebuttals \n");
        assert_eq!(winner, "con_agent");
        assert_eq!(reason, "Clearer rebuttals");
    }

    #[test]
    fn test_empty_response() {
        assert_eq!(parse_decision_response(""), (String::new(), String::new()));
        assert_eq!(parse_decision_response(" \n\t "), (String::new(), String::new()));
    }
}
