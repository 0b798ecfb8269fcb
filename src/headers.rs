//! Header name canonicalization and ordering
//!
//! [`HeaderMap`] stores names lowercased and iterates in unspecified order.
//! Generated commands print names in canonical MIME casing and in sorted
//! order, so two renderings of the same request are byte-identical.

use http::HeaderMap;

/// Canonical MIME casing for a header name: the first letter and every
/// letter following a `-` are uppercased, everything else is lowercased.
/// `_` is not a word boundary, so `api_key` renders as `Api_key`.
pub fn canonical_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        out.push(if upper {
            c.to_ascii_uppercase()
        } else {
            c.to_ascii_lowercase()
        });
        upper = c == '-';
    }
    out
}

/// Collect one `(canonical name, joined values)` pair per distinct header
/// name, sorted byte-wise ascending by canonical name.
///
/// All values of a repeated header are folded into one string separated by
/// single spaces. Non-UTF-8 values render lossily; nothing is rejected.
pub fn sorted_header_flags(headers: &HeaderMap) -> Vec<(String, String)> {
    let mut flags: Vec<(String, String)> = headers
        .keys()
        .map(|name| {
            let joined = headers
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                .collect::<Vec<_>>()
                .join(" ");
            (canonical_name(name.as_str()), joined)
        })
        .collect();
    flags.sort();
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{HeaderName, HeaderValue};

    #[test]
    fn test_canonical_name() {
        assert_eq!(canonical_name("content-type"), "Content-Type");
        assert_eq!(canonical_name("api_key"), "Api_key");
        assert_eq!(canonical_name("x-auth-token"), "X-Auth-Token");
        assert_eq!(canonical_name("ACCEPT"), "Accept");
        assert_eq!(canonical_name(""), "");
    }

    #[test]
    fn test_names_are_sorted_and_unique() {
        let mut headers = HeaderMap::new();
        headers.insert("x-auth-token", HeaderValue::from_static("t"));
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers.insert("accept", HeaderValue::from_static("*/*"));

        let flags = sorted_header_flags(&headers);
        let names: Vec<&str> = flags.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Accept", "Content-Type", "X-Auth-Token"]);
    }

    #[test]
    fn test_repeated_values_fold_into_one_flag() {
        let mut headers = HeaderMap::new();
        let name = HeaderName::from_static("x-forwarded-for");
        headers.append(name.clone(), HeaderValue::from_static("10.0.0.1"));
        headers.append(name, HeaderValue::from_static("10.0.0.2"));

        let flags = sorted_header_flags(&headers);
        assert_eq!(
            flags,
            [("X-Forwarded-For".to_string(), "10.0.0.1 10.0.0.2".to_string())]
        );
    }
}
