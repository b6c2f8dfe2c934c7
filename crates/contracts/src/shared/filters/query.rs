//! Ordered query-string parameters with URLSearchParams-like semantics.

/// Query parameters in their original order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parses `?a=b&c=d` (the leading `?` is optional).
    pub fn parse(search: &str) -> Self {
        let pairs = search
            .trim_start_matches('?')
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (key, value) = part.split_once('=').unwrap_or((part, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets `key` to `value`; an empty value deletes the parameter.
    pub fn set(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            self.remove(key);
            return;
        }
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value.to_string();
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = k != key || index == first;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encoded form without the leading `?`
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `pathname` plus the query, with no dangling `?` when there are no parameters
    pub fn to_url(&self, pathname: &str) -> String {
        if self.pairs.is_empty() {
            pathname.to_string()
        } else {
            format!("{}?{}", pathname, self.to_query_string())
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decodes_percent_and_plus() {
        let params = QueryParams::parse("?type=JURIDICO%2CPSICOLOGICO&status=em+an%C3%A1lise&x");
        assert_eq!(params.get("type"), Some("JURIDICO,PSICOLOGICO"));
        assert_eq!(params.get("status"), Some("em análise"));
        assert_eq!(params.get("x"), Some(""));
        assert_eq!(params.get("date"), None);
    }

    #[test]
    fn test_set_and_remove_keep_order() {
        let mut params = QueryParams::parse("a=1&type=denuncia&b=2&type=old");
        params.set("type", "solicitacao");
        assert_eq!(params.to_query_string(), "a=1&type=solicitacao&b=2");

        params.set("date", "2025-05-20");
        assert_eq!(params.to_query_string(), "a=1&type=solicitacao&b=2&date=2025-05-20");

        params.set("type", "");
        assert_eq!(params.to_query_string(), "a=1&b=2&date=2025-05-20");
    }

    #[test]
    fn test_to_url_without_params() {
        assert_eq!(QueryParams::default().to_url("/records"), "/records");
        let params = QueryParams::parse("status=em análise");
        assert_eq!(params.to_url("/admin"), "/admin?status=em%20an%C3%A1lise");
    }
}
