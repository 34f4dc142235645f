/// Splits a raw input line into argument tokens.
///
/// Runs of whitespace and the trailing newline are delimiters and are never
/// retained. Everything else, punctuation included, passes through verbatim.
/// Tokens borrow from `line`, so the argument vector is only valid while the
/// line buffer is alive; the vector grows as needed, there is no upper bound
/// on the token count.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}
