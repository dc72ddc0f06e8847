//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub fn default_config_toml() -> &'static str {
    r##"# Showroom assistant configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Credentials are never read from this file: set OPENAI_API_KEY and
# OPENAI_ASSISTANT_ID in the environment (or a .env file).

[server]
# host = "0.0.0.0"
# port = 8888
# chat_path = "/api/chat"

[assistant]
# api_base = "https://api.openai.com/v1"
# request_timeout_secs = 8
# poll_interval_ms = 500     # fixed delay between run status checks
# budget_ms = 9500           # must stay below platform_limit_ms
# platform_limit_ms = 10000
# tool_output = "Done."

[catalog]
# feed_url = "https://sale.peugeot.bg/ecommerce/fb/product_feed.xml"
# timeout_secs = 7           # must stay below the assistant budget
# max_results = 4            # 1-4

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
}
