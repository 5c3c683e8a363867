//! Mapping of store keys onto file names.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped in file names: everything except ASCII alphanumerics, `-`, `_` and `.`.
const KEY_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Turn a store key into a file name that stays inside the store directory.
///
/// Path separators and every other byte that is special on common filesystems are
/// percent-escaped, `%` included, so distinct keys always map to distinct names. A `.json`
/// extension is appended, which also keeps `.` and `..` from naming a directory.
///
/// ```ignore
/// assert_eq!(file_name_for_key("github_contributions_cache_octocat"), "github_contributions_cache_octocat.json");
/// assert_eq!(file_name_for_key("../../etc/passwd"), "..%2F..%2Fetc%2Fpasswd.json");
/// ```
#[must_use]
pub fn file_name_for_key(key: &str) -> String {
    format!("{}.json", utf8_percent_encode(key, KEY_ESCAPES))
}
