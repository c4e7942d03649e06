use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern body is empty")]
    Empty,
    #[error("pattern body '{body}' is not a valid regular expression")]
    InvalidRegex {
        body: String,
        #[source]
        source: regex::Error,
    },
}
