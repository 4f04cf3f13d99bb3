use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Replace `${key}` references with values from `props`.
///
/// Unknown keys are left verbatim so the raw text still shows up in reports.
pub fn resolve_placeholders(text: &str, props: &BTreeMap<String, String>) -> String {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    let Some(re) = RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").ok()) else {
        return text.to_string();
    };

    re.replace_all(text, |caps: &Captures<'_>| {
        props
            .get(&caps[1])
            .cloned()
            .unwrap_or_else(|| caps[0].to_string())
    })
    .into_owned()
}
