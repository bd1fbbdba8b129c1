use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

pub const REDACTED: &str = "<REDACTED>";

lazy_static! {
    static ref API_KEY_PARAM: Regex =
        Regex::new(r"([?&]api_key=)[^&#\s)]*").expect("Literal is valid regex");
}

/// Replace the value of any `api_key` query parameter found in `input` with [`REDACTED`].
pub fn redact(input: &str) -> Cow<'_, str> {
    API_KEY_PARAM.replace_all(input, format!("${{1}}{}", REDACTED))
}
