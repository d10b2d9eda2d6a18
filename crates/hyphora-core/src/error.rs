// Error taxonomy for the hyphenation engine.

/// Errors reported by the break-point engine and the cursor.
///
/// All operations are synchronous and deterministic; none of these is
/// retryable. Cursor exhaustion is not an error -- it is the `Ok(None)`
/// sentinel of `first`/`next`.
#[derive(Debug, thiserror::Error)]
pub enum HyphenationError {
    /// A cursor method was invoked in a state that does not permit it
    /// (no word bound, or `next` before `first`).
    #[error("illegal state: {0}")]
    IllegalState(&'static str),

    /// An invalid argument was passed to a cursor operation.
    #[error("illegal argument: {0}")]
    IllegalArgument(&'static str),

    /// A break handle was applied against text it was not derived from:
    /// its position or replacement window falls outside the text bounds.
    #[error("invalid break: {0}")]
    InvalidBreak(String),

    /// A rule payload failed constructor validation (replacement text
    /// without the `=` split marker, impossible window).
    #[error("malformed rule: {0}")]
    MalformedRule(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = HyphenationError::IllegalState("no word has been set");
        assert_eq!(e.to_string(), "illegal state: no word has been set");

        let e = HyphenationError::InvalidBreak("position 9 out of range".into());
        assert_eq!(e.to_string(), "invalid break: position 9 out of range");
    }
}
