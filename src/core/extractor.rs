//! Front matter detection and decoding
//!
//! The extractor looks for a leading block delimited by `---` (YAML) or `+++`
//! (TOML) lines, decodes it, strips the configured keys and normalises an
//! empty result to `None`. Only the first opening/closing pair is honoured;
//! anything after the closing line is body text.

use crate::core::notation::{FrontMatterFormat, FORMATS};
use crate::core::FrontMatter;
use crate::error::Result;
use std::collections::BTreeSet;

/// Front matter extractor
#[derive(Debug, Clone, Default)]
pub struct FrontMatterExtractor {
    excluded_keys: BTreeSet<String>,
}

impl FrontMatterExtractor {
    /// Create an extractor that keeps every key
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor that strips the given keys from every result
    pub fn with_excluded_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Keys removed from decoded front matter
    pub fn excluded_keys(&self) -> &BTreeSet<String> {
        &self.excluded_keys
    }

    /// Extract front matter from raw document bytes
    ///
    /// Returns `Ok(None)` when no block is found, when the block is empty, or
    /// when every key in it is excluded. A block that is found but does not
    /// decode is an error; the other notation is not tried in that case.
    pub fn extract(&self, content: &[u8]) -> Result<Option<FrontMatter>> {
        let content = trim_space(content);

        for format in FORMATS {
            let block = match locate_block(content, format) {
                Some(block) => block,
                None => continue,
            };

            let mut front_matter = (format.decode)(block)?;
            for key in &self.excluded_keys {
                front_matter.remove(key);
            }

            if front_matter.is_empty() {
                return Ok(None);
            }
            return Ok(Some(front_matter));
        }

        Ok(None)
    }
}

/// Find the text between the opening delimiter at the start of `content` and
/// the first closing delimiter after it.
fn locate_block<'a>(content: &'a [u8], format: &FrontMatterFormat) -> Option<&'a [u8]> {
    let open = format.delimiter.as_bytes();
    if !content.starts_with(open) {
        return None;
    }

    let start = find(content, open)? + open.len();
    let end = find(&content[start..], format.closing.as_bytes())?;
    Some(&content[start..start + end])
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Strip leading and trailing Unicode whitespace. Trimming stops at the first
/// byte sequence that is not valid UTF-8 on either side.
fn trim_space(content: &[u8]) -> &[u8] {
    let mut start = 0;
    while let Some((c, len)) = first_char(&content[start..]) {
        if !c.is_whitespace() {
            break;
        }
        start += len;
    }

    let mut end = content.len();
    while let Some((c, len)) = last_char(&content[start..end]) {
        if !c.is_whitespace() {
            break;
        }
        end -= len;
    }
    &content[start..end]
}

fn first_char(bytes: &[u8]) -> Option<(char, usize)> {
    (1..=bytes.len().min(4)).find_map(|n| decode_char(&bytes[..n]))
}

fn last_char(bytes: &[u8]) -> Option<(char, usize)> {
    (1..=bytes.len().min(4)).find_map(|n| decode_char(&bytes[bytes.len() - n..]))
}

// The shortest valid slice at either end is always exactly one char.
fn decode_char(bytes: &[u8]) -> Option<(char, usize)> {
    let c = std::str::from_utf8(bytes).ok()?.chars().next()?;
    Some((c, bytes.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrontMatterValue;
    use crate::error::MdsError;

    fn extract(content: &str) -> Result<Option<FrontMatter>> {
        FrontMatterExtractor::new().extract(content.as_bytes())
    }

    #[test]
    fn test_yaml_front_matter() {
        let fm = extract("---\ntitle: Test YAML\nvalue: 123\n---\nRegular content")
            .unwrap()
            .unwrap();

        assert_eq!(fm.len(), 2);
        assert_eq!(fm["title"], FrontMatterValue::from("Test YAML"));
        assert_eq!(fm["value"], FrontMatterValue::Unsigned(123));
    }

    #[test]
    fn test_toml_front_matter() {
        let fm = extract("+++\ntitle = \"Test TOML\"\nvalue = 456\n+++\nRegular content")
            .unwrap()
            .unwrap();

        assert_eq!(fm.len(), 2);
        assert_eq!(fm["title"], FrontMatterValue::from("Test TOML"));
        assert_eq!(fm["value"], FrontMatterValue::Integer(456));
    }

    #[test]
    fn test_surrounding_whitespace() {
        let fm = extract("\n\n---\ntitle: Test YAML Whitespace\n---\n\n\nRegular content")
            .unwrap()
            .unwrap();
        assert_eq!(fm["title"].as_str(), Some("Test YAML Whitespace"));
    }

    #[test]
    fn test_no_front_matter() {
        assert_eq!(extract("Just regular content").unwrap(), None);
        assert_eq!(extract("").unwrap(), None);
        assert_eq!(extract("   \n\t").unwrap(), None);
        assert_eq!(extract("# Title\n---\nkey: value\n---\n").unwrap(), None);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = extract("---\ntitle: Test Invalid YAML\nvalue: [1, 2\n---\nRegular content")
            .unwrap_err();
        assert!(matches!(err, MdsError::Yaml(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = extract(
            "+++\ntitle = \"Test Invalid TOML\"\nvalue = \"unterminated string\n+++\nRegular content",
        )
        .unwrap_err();
        assert!(matches!(err, MdsError::Toml(_)));
    }

    #[test]
    fn test_delimiter_inside_body() {
        let fm = extract("---\ntitle: Test YAML\n---\nContent with --- delimiter\n---\nmore")
            .unwrap()
            .unwrap();
        assert_eq!(fm.len(), 1);
        assert_eq!(fm["title"].as_str(), Some("Test YAML"));

        let fm = extract("+++\ntitle = \"Test TOML\"\n+++\nContent with +++ delimiter")
            .unwrap()
            .unwrap();
        assert_eq!(fm.len(), 1);
        assert_eq!(fm["title"].as_str(), Some("Test TOML"));
    }

    #[test]
    fn test_only_delimiters() {
        assert_eq!(extract("---\n---").unwrap(), None);
        assert_eq!(extract("+++\n+++").unwrap(), None);
        assert_eq!(extract("---\n\n---\nbody").unwrap(), None);
        assert_eq!(extract("+++\n\n+++\nbody").unwrap(), None);
    }

    #[test]
    fn test_unclosed_block_is_not_an_error() {
        assert_eq!(extract("---\ntitle: never closed\n").unwrap(), None);
        assert_eq!(extract("+++\ntitle = \"never closed\"").unwrap(), None);
    }

    #[test]
    fn test_close_needs_trailing_newline() {
        // After trimming, a block at the very end of the file has no newline
        // after its closing line.
        assert_eq!(extract("---\ntitle: T\n---\n").unwrap(), None);
        assert!(extract("---\ntitle: T\n---\n\nbody").unwrap().is_some());
    }

    #[test]
    fn test_malformed_yaml_does_not_fall_through() {
        let content = "---\nvalue: [1, 2\n---\n+++\ntitle = \"T\"\n+++\nbody";
        assert!(extract(content).unwrap_err().is_decode_error());
    }

    #[test]
    fn test_excluded_keys() {
        let extractor = FrontMatterExtractor::with_excluded_keys(["secret", "draft"]);
        let fm = extractor
            .extract(b"---\ntitle: T\nsecret: s\n---\nbody")
            .unwrap()
            .unwrap();
        assert!(fm.contains_key("title"));
        assert!(!fm.contains_key("secret"));

        let fm = extractor
            .extract(b"+++\nsecret = \"s\"\ndraft = true\n+++\nbody")
            .unwrap();
        assert_eq!(fm, None);
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let extractor = FrontMatterExtractor::with_excluded_keys(["b"]);
        let content = b"---\na: 1\nb: 2\nc: [x, y]\n---\nbody";
        let first = extractor.extract(content).unwrap();
        let second = extractor.extract(content).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.unwrap().len(), 2);
    }

    #[test]
    fn test_trim_space() {
        assert_eq!(trim_space(b"  a b \n"), b"a b");
        assert_eq!(trim_space(b" \t\r\n"), b"");
        assert_eq!(trim_space(b""), b"");
    }

    #[test]
    fn test_trim_space_unicode() {
        assert_eq!(trim_space("\u{a0}\u{2028}a\u{3000}\u{85}".as_bytes()), b"a");
        assert_eq!(trim_space("\u{3000} ".as_bytes()), b"");
        // Invalid UTF-8 is not whitespace and ends the trim on its side.
        assert_eq!(trim_space(b" \xff a \xe3\x80 "), b"\xff a \xe3\x80");
        assert_eq!(trim_space(b"\xe3\x80\x80x"), b"x");
    }

    #[test]
    fn test_unicode_whitespace_around_block() {
        let fm = extract("\u{a0}---\ntitle: T\n---\nbody").unwrap().unwrap();
        assert_eq!(fm["title"].as_str(), Some("T"));

        // Once trailing ideographic space is trimmed the closing line has no
        // newline after it.
        assert_eq!(extract("---\ntitle: T\n---\n\u{3000}").unwrap(), None);
    }
}
