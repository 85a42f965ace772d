//! Discovery document construction for the API root.
//!
//! In a Codespace the public URL is not the bound socket, so the resolver
//! templates the Codespace name into the fixed forwarding hostname. Locally
//! it builds URLs from the request's own scheme and host.

use crate::collection::Collection;
use serde_json::{Map, Value};

/// Fixed port the Codespace forwards to the backend.
const CODESPACE_PORT: u16 = 8000;

/// Path suffix for one resource, e.g. "/api/users/".
pub fn resource_path(collection: Collection) -> String {
    format!("/api/{}/", collection.path_segment())
}

/// Public base URL for a named Codespace, always HTTPS.
pub fn codespace_base_url(name: &str) -> String {
    format!("https://{}-{}.app.github.dev", name, CODESPACE_PORT)
}

/// Build the discovery document: five resource keys, each an absolute URL.
///
/// With a (non-empty) Codespace name the URLs use the Codespace forwarding
/// host. Otherwise they resolve against the request's scheme and host, with
/// an optional response-format hint appended as a query parameter.
pub fn resolve_api_root(
    codespace: Option<&str>,
    scheme: &str,
    host: &str,
    format_hint: Option<&str>,
) -> Value {
    let mut doc = Map::new();
    match codespace.filter(|s| !s.is_empty()) {
        Some(name) => {
            let base = codespace_base_url(name);
            for collection in Collection::ALL {
                doc.insert(
                    collection.resource_key().to_string(),
                    Value::String(format!("{}{}", base, resource_path(collection))),
                );
            }
        }
        None => {
            for collection in Collection::ALL {
                let mut url = format!("{}://{}{}", scheme, host, resource_path(collection));
                if let Some(fmt) = format_hint {
                    url.push_str(&format!("?format={}", fmt));
                }
                doc.insert(collection.resource_key().to_string(), Value::String(url));
            }
        }
    }
    Value::Object(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 5] = ["users", "teams", "activities", "leaderboard", "workouts"];

    #[test]
    fn codespace_branch_builds_forwarding_urls() {
        let doc = resolve_api_root(Some("myspace"), "http", "localhost:8000", None);
        assert_eq!(
            doc["users"],
            "https://myspace-8000.app.github.dev/api/users/"
        );
        assert_eq!(
            doc["leaderboard"],
            "https://myspace-8000.app.github.dev/api/leaderboard/"
        );
        assert_eq!(
            doc["workouts"],
            "https://myspace-8000.app.github.dev/api/workouts/"
        );
    }

    #[test]
    fn local_branch_uses_request_host_and_scheme() {
        let doc = resolve_api_root(None, "http", "127.0.0.1:8000", None);
        assert_eq!(doc["teams"], "http://127.0.0.1:8000/api/teams/");
        assert_eq!(doc["activities"], "http://127.0.0.1:8000/api/activities/");
    }

    #[test]
    fn empty_codespace_name_falls_back_to_local() {
        let doc = resolve_api_root(Some(""), "https", "example.com", None);
        assert_eq!(doc["users"], "https://example.com/api/users/");
    }

    #[test]
    fn format_hint_appended_locally_only() {
        let local = resolve_api_root(None, "http", "localhost:8000", Some("json"));
        assert_eq!(local["users"], "http://localhost:8000/api/users/?format=json");
        let hosted = resolve_api_root(Some("myspace"), "http", "localhost:8000", Some("json"));
        assert_eq!(
            hosted["users"],
            "https://myspace-8000.app.github.dev/api/users/"
        );
    }

    #[test]
    fn document_has_exactly_five_keys() {
        let doc = resolve_api_root(Some("myspace"), "http", "x", None);
        let obj = doc.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        for key in KEYS {
            assert!(obj.contains_key(key), "missing {}", key);
        }
    }
}
