/// A backend path plus its query parameters.
///
/// Values are kept unencoded; the HTTP layer encodes them when the request is
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub query: Vec<(&'static str, String)>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_query() {
        let endpoint = Endpoint::new("/api/rooms/available")
            .with_query("checkInDate", "2024-06-01")
            .with_query("checkOutDate", "2024-06-04");
        assert_eq!(
            endpoint.to_string(),
            "/api/rooms/available?checkInDate=2024-06-01&checkOutDate=2024-06-04"
        );
        assert_eq!(endpoint.query_value("checkOutDate"), Some("2024-06-04"));
        assert_eq!(endpoint.query_value("missing"), None);
    }
}
