use super::PatternError;
use regex::Regex;
use std::fmt;

/// A segment-matching regular expression, compiled once when the route
/// table is authored. The body is anchored at both ends, so a pattern
/// matches only when it covers the whole segment; the captured parameter
/// is therefore the segment itself.
#[derive(Clone)]
pub struct SegmentPattern {
    body: String,
    regex: Regex,
}

impl SegmentPattern {
    pub fn new(body: &str) -> Result<Self, PatternError> {
        if body.is_empty() {
            return Err(PatternError::Empty);
        }

        let anchored = format!("^(?:{body})$");
        let regex = Regex::new(&anchored).map_err(|source| PatternError::InvalidRegex {
            body: body.to_string(),
            source,
        })?;

        Ok(Self {
            body: body.to_string(),
            regex,
        })
    }

    pub fn matches(&self, segment: &str) -> bool {
        self.regex.is_match(segment)
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Debug for SegmentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SegmentPattern").field(&self.body).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_only_whole_segments() {
        let pattern = SegmentPattern::new(r"\d+").unwrap();
        assert!(pattern.matches("42"));
        assert!(!pattern.matches("42abc"));
        assert!(!pattern.matches("abc42"));
    }

    #[test]
    fn rejects_invalid_regex_bodies() {
        assert!(matches!(
            SegmentPattern::new("["),
            Err(PatternError::InvalidRegex { .. })
        ));
    }

    #[test]
    fn rejects_empty_bodies() {
        assert!(matches!(SegmentPattern::new(""), Err(PatternError::Empty)));
    }
}
