//! URL query-string codec.
//!
//! The chart never reads or writes the page URL itself. Hosts that persist the
//! scaling mode in the URL use [`QueryParams`] to parse and rebuild it.
//!
//! ```
//! use deltachart_charts::query::QueryParams;
//!
//! let params = QueryParams::parse("http://a.com/hello.html?first=blah&second=yada&second=meh");
//! assert_eq!(params.first("first"), Some("blah"));
//! assert_eq!(params.all("second"), vec!["yada", "meh"]);
//! assert_eq!(params.to_query_string(), "?first=blah&second=yada&second=meh");
//! ```

use std::borrow::Cow;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use deltachart_core::ScalingMode;

/// Query parameter holding the Y-axis scaling mode.
pub const SCALING_PARAM: &str = "y-axis-scaling";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    Multi(Vec<String>),
}

impl ParamValue {
    pub fn first(&self) -> &str {
        match self {
            ParamValue::Single(v) => v.as_str(),
            ParamValue::Multi(vs) => vs.first().map(String::as_str).unwrap_or(""),
        }
    }

    pub fn values(&self) -> Vec<&str> {
        match self {
            ParamValue::Single(v) => vec![v.as_str()],
            ParamValue::Multi(vs) => vs.iter().map(String::as_str).collect(),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            ParamValue::Single(v) => {
                let prev = std::mem::take(v);
                *self = ParamValue::Multi(vec![prev, value]);
            }
            ParamValue::Multi(vs) => vs.push(value),
        }
    }
}

/// Parsed query parameters, kept in key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, ParamValue>,
}

fn decode(s: &str) -> String {
    match urlencoding::decode(s) {
        Ok(d) => d.into_owned(),
        Err(_) => s.to_string(),
    }
}

fn encode(s: &str) -> Cow<'_, str> {
    urlencoding::encode(s)
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse everything after the first `?` of a URL. No `?` means no parameters.
    ///
    /// Repeated keys collect their values in order. A key without `=` maps to
    /// an empty value.
    pub fn parse(url: &str) -> Self {
        let query = match url.find('?') {
            Some(idx) => &url[idx + 1..],
            None => return Self::default(),
        };
        let query = query.split('#').next().unwrap_or("");

        let mut out = Self::default();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            out.append(decode(key), decode(value));
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    pub fn first(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(ParamValue::first)
    }

    pub fn all(&self, key: &str) -> Vec<&str> {
        self.params.get(key).map(ParamValue::values).unwrap_or_default()
    }

    /// Set `key` to a single value, replacing anything stored before.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params
            .insert(key.into(), ParamValue::Single(value.into()));
    }

    /// Add a value to `key`, turning it into a multi-valued parameter if needed.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.params.entry(key.into()) {
            Entry::Occupied(mut e) => e.get_mut().push(value),
            Entry::Vacant(e) => {
                e.insert(ParamValue::Single(value));
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.params.remove(key)
    }

    /// `?` followed by `key=value` pairs in sorted key order; multi-valued keys repeat.
    pub fn to_query_string(&self) -> String {
        let pairs: Vec<String> = self
            .params
            .iter()
            .flat_map(|(k, v)| {
                v.values()
                    .into_iter()
                    .map(move |val| format!("{}={}", encode(k), encode(val)))
            })
            .collect();
        format!("?{}", pairs.join("&"))
    }

    /// Scaling mode stored in the URL, falling back to the default for unknown names.
    pub fn scaling_mode(&self) -> Option<ScalingMode> {
        self.first(SCALING_PARAM).map(ScalingMode::from_param)
    }

    pub fn set_scaling_mode(&mut self, mode: ScalingMode) {
        self.insert(SCALING_PARAM, mode.as_param());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_without_query_is_empty() {
        assert!(QueryParams::parse("http://a.com/hello.html").is_empty());
        assert!(QueryParams::parse("http://a.com/?").is_empty());
    }

    #[test]
    fn repeated_keys_collect_in_order() {
        let p = QueryParams::parse("?a=1&b=x&a=2&a=3");
        assert_eq!(p.all("a"), vec!["1", "2", "3"]);
        assert_eq!(p.first("a"), Some("1"));
        assert_eq!(p.get("b"), Some(&ParamValue::Single("x".into())));
    }

    #[test]
    fn key_without_value_is_empty_string() {
        let p = QueryParams::parse("?flag&x=1#frag");
        assert_eq!(p.first("flag"), Some(""));
        assert_eq!(p.first("x"), Some("1"));
    }

    #[test]
    fn values_are_percent_coded() {
        let p = QueryParams::parse("?name=cpu%20load&path=%2Ftmp");
        assert_eq!(p.first("name"), Some("cpu load"));
        assert_eq!(p.first("path"), Some("/tmp"));
        assert_eq!(p.to_query_string(), "?name=cpu%20load&path=%2Ftmp");
    }

    #[test]
    fn build_sorts_keys() {
        let mut p = QueryParams::new();
        p.insert("zeta", "1");
        p.append("alpha", "x");
        p.append("alpha", "y");
        assert_eq!(p.to_query_string(), "?alpha=x&alpha=y&zeta=1");

        p.insert("alpha", "z");
        assert_eq!(p.to_query_string(), "?alpha=z&zeta=1");
        assert!(p.remove("zeta").is_some());
        assert_eq!(p.to_query_string(), "?alpha=z");
    }

    #[test]
    fn scaling_mode_param() {
        let mut p = QueryParams::parse("?y-axis-scaling=rescale");
        assert_eq!(p.scaling_mode(), Some(ScalingMode::AutoRescale));

        p.set_scaling_mode(ScalingMode::FixedPadded);
        assert_eq!(p.to_query_string(), "?y-axis-scaling=fixed");

        let bogus = QueryParams::parse("?y-axis-scaling=sideways");
        assert_eq!(bogus.scaling_mode(), Some(ScalingMode::FixedIncludeZero));
        assert_eq!(QueryParams::new().scaling_mode(), None);
    }
}
