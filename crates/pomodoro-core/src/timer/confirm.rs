/// The only answer that moves the timer forward.
const CONTINUE_ANSWER: &str = "Y";

/// Normalize one line of user input into a continue/stop decision.
///
/// `None` is end-of-input. Anything other than a lone `y`/`Y` (surrounding
/// whitespace ignored) means stop.
pub fn wants_to_continue(line: Option<&str>) -> bool {
    line.is_some_and(|l| l.trim().to_uppercase() == CONTINUE_ANSWER)
}
