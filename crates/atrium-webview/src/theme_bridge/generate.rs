//! Token export and injection script generation.

use atrium_theme::StyleToken;

// =============================================================================
// TOKEN EXPORT
// =============================================================================

/// The whole table as a JSON object, wire name to class string.
fn tokens_to_value() -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for token in StyleToken::ALL {
        map.insert(token.name().to_owned(), token.class().into());
    }
    serde_json::Value::Object(map)
}

/// Serialize the token table to a pretty-printed JSON string.
pub fn tokens_to_json() -> String {
    serde_json::to_string_pretty(&tokens_to_value())
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize tokens: {e}\"}}"))
}

// =============================================================================
// SCRIPT GENERATION
// =============================================================================

/// Generate a JavaScript snippet that publishes the token table to a panel.
///
/// Assigns the table to `window.__atrium_theme` and, when the Atrium IPC
/// bridge is present, dispatches it so panels restyle without a reload.
pub fn generate_token_injection_js() -> String {
    let json_str = serde_json::to_string(&tokens_to_value()).unwrap_or_else(|_| "{}".to_string());
    tracing::debug!(tokens = StyleToken::ALL.len(), "generated theme injection script");
    format!(
        "window.__atrium_theme = {json_str}; \
        if (window.atrium && window.atrium.ipc) {{ \
            window.atrium.ipc._dispatch('theme', {json_str}); \
        }}"
    )
}

/// Join the class strings of several tokens into one `class` attribute value.
pub fn generate_class_list(tokens: &[StyleToken]) -> String {
    let mut classes = String::new();
    for token in tokens {
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(token.class());
    }
    classes
}

// =============================================================================
// TESTS
// =============================================================================
