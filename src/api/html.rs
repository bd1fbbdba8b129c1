//! Scraper for the HTML error pages the API server returns on some rejected requests.
//!
//! The page is an application server status report, e.g.
//! `<p><b>Message</b> The requested time frame exceed the allowed limit</p>`. Its structure is
//! undocumented, so the result is best effort and callers must keep a fallback.

use std::collections::BTreeMap;

pub const MESSAGE: &str = "message";
pub const DESCRIPTION: &str = "description";

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Tag,
    Text(&'a str),
}

/// Markup ended inside a tag.
#[derive(Debug)]
struct Malformed;

struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, Malformed>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        if let Some(tag) = self.rest.strip_prefix('<') {
            match tag.find('>') {
                Some(end) => {
                    self.rest = &tag[end + 1..];
                    Some(Ok(Token::Tag))
                }
                None => {
                    self.rest = "";
                    Some(Err(Malformed))
                }
            }
        } else {
            let end = self.rest.find('<').unwrap_or(self.rest.len());
            let (text, rest) = self.rest.split_at(end);
            self.rest = rest;
            Some(Ok(Token::Text(text)))
        }
    }
}

/// Extract the `message` and `description` fields from an HTML error page.
///
/// The text following a `Message` or `Description` label becomes the value of that key.
/// Malformed markup yields an empty map.
pub fn read_error(body: &[u8]) -> BTreeMap<String, String> {
    let body = String::from_utf8_lossy(body);
    let mut values = BTreeMap::new();
    let mut current_key: Option<&str> = None;

    for token in (Tokenizer { rest: &body }) {
        if values.len() == 2 {
            break;
        }

        let text = match token {
            Ok(Token::Text(text)) => text.trim(),
            Ok(Token::Tag) => continue,
            Err(Malformed) => return BTreeMap::new(),
        };
        if text.is_empty() {
            continue;
        }

        match current_key.take() {
            Some(key) => {
                values.insert(key.to_string(), text.to_string());
            }
            None if text == "Message" => current_key = Some(MESSAGE),
            None if text == "Description" => current_key = Some(DESCRIPTION),
            None => {}
        }
    }

    values
}

#[cfg(test)]
mod test {
    use super::*;

    const TOMCAT_403: &str = r#"<!doctype html><html lang="en"><head><title>HTTP Status 403 – Forbidden</title><style type="text/css">b {color:white;}</style></head><body><h1>HTTP Status 403 – Forbidden</h1><hr class="line" /><p><b>Type</b> Status Report</p><p><b>Message</b> The requested time frame exceed the allowed limit for requested resource</p><p><b>Description</b> The server understood the request but refuses to authorize it.</p><hr class="line" /><h3>Apache Tomcat/8.5.46</h3></body></html>"#;

    #[test]
    fn message_and_description() {
        let values = read_error(TOMCAT_403.as_bytes());
        assert_eq!(2, values.len());
        assert_eq!(
            "The requested time frame exceed the allowed limit for requested resource",
            values[MESSAGE]
        );
        assert_eq!(
            "The server understood the request but refuses to authorize it.",
            values[DESCRIPTION]
        );
    }

    #[test]
    fn description_only() {
        let body = "<html><body><p><b>Type</b> Status Report</p><p><b>Description</b> refused</p></body></html>";
        let values = read_error(body.as_bytes());
        assert_eq!(None, values.get(MESSAGE));
        assert_eq!("refused", values[DESCRIPTION]);
    }

    #[test]
    fn plain_text() {
        assert!(read_error(b"not a valid HTML document").is_empty());
        assert!(read_error(b"").is_empty());
    }

    #[test]
    fn unterminated_tag() {
        assert!(read_error(b"<p><b>Message</b> cut off <b").is_empty());
    }
}
