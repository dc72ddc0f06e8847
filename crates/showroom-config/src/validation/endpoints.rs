//! Listener and URL validation.

use crate::schema::ShowroomConfig;

/// Path the server always mounts next to the chat route.
const HEALTH_PATH: &str = "/health";

/// Characters the router reads as captures or wildcards.
const ROUTE_SYNTAX: [char; 4] = ['{', '}', '*', ':'];

pub(crate) fn validate_server(errors: &mut Vec<String>, config: &ShowroomConfig) {
    if config.server.port == 0 {
        errors.push("server.port must be non-zero".into());
    }
    if !config.server.chat_path.starts_with('/') {
        errors.push(format!(
            "server.chat_path = '{}' must start with '/'",
            config.server.chat_path
        ));
    }
    if config.server.chat_path.contains(ROUTE_SYNTAX) {
        errors.push(format!(
            "server.chat_path = '{}' must be a literal path (no '{{', '}}', '*' or ':')",
            config.server.chat_path
        ));
    }
    if config.server.chat_path == HEALTH_PATH {
        errors.push(format!("server.chat_path must not be {HEALTH_PATH}"));
    }
}

pub(crate) fn validate_urls(errors: &mut Vec<String>, config: &ShowroomConfig) {
    check_http_url(errors, "assistant.api_base", &config.assistant.api_base);
    check_http_url(errors, "catalog.feed_url", &config.catalog.feed_url);
}

fn check_http_url(errors: &mut Vec<String>, name: &str, value: &str) {
    let ok = ["https://", "http://"]
        .iter()
        .any(|scheme| value.len() > scheme.len() && value.starts_with(scheme));
    if !ok {
        errors.push(format!("{name} = '{value}' is not an http(s) URL"));
    }
}
