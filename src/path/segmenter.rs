use memchr::memchr;

/// Splits a raw request path on `/`, dropping empty components, so
/// `/a//b/` yields `["a", "b"]`. No case folding and no percent-decoding;
/// the host is expected to hand over the path exactly as it should match.
#[inline]
#[tracing::instrument(level = "trace", skip(raw), fields(path_len = raw.len() as u64))]
pub fn segment_path(raw: &str) -> Vec<String> {
    let bytes = raw.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0usize;

    while start < bytes.len() {
        match memchr(b'/', &bytes[start..]) {
            Some(offset) => {
                if offset > 0 {
                    segments.push(raw[start..start + offset].to_string());
                }
                start += offset + 1;
            }
            None => {
                segments.push(raw[start..].to_string());
                break;
            }
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_slashes() {
        assert_eq!(segment_path("users/42/profile"), vec!["users", "42", "profile"]);
    }

    #[test]
    fn drops_leading_trailing_and_repeated_slashes() {
        assert_eq!(segment_path("/a//b/"), vec!["a", "b"]);
        assert_eq!(segment_path("///"), Vec::<String>::new());
    }

    #[test]
    fn empty_path_yields_no_segments() {
        assert_eq!(segment_path(""), Vec::<String>::new());
    }

    #[test]
    fn preserves_case_and_percent_encoding() {
        assert_eq!(segment_path("Users/caf%C3%A9"), vec!["Users", "caf%C3%A9"]);
    }
}
