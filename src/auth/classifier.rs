//! Login response classification
//!
//! The server answers the login call with one `LoginStatusVO` document
//! whose "extra" slot may hold a ban record, a descriptive error, or, when
//! something upstream broke entirely, a raw `html/body` page. The slots
//! are disambiguated in strict priority order (ban, then description, then
//! the HTML fallback) before any message text is inspected; a legitimate
//! description must never be mistaken for a generic error just because the
//! text looks unusual.

use crate::models::AuthOutcome;
use roxmltree::{Document, Node};

/// Exact marker the server sends when it detects a modified launcher
const TAMPERING_MARKER: &str = "Please use MeTonaTOR's launcher. Or, are you tampering?";
/// Exact marker for a rejected e-mail/password pair
const INVALID_LOGIN_MARKER: &str = "LOGIN ERROR";

/// Shown when the server never replied at all
pub(crate) const NO_REPLY_MESSAGE: &str = "Failed to get reply from server. Please retry.";
/// Shown when the server replied with an empty body
const OFFLINE_MESSAGE: &str = "Server seems to be offline.";

/// Classify one raw login reply into a terminal [`AuthOutcome`]
///
/// Pure and idempotent: identical input always yields an identical
/// outcome. The HTTP status code is threaded through explicitly and only
/// carried for display; the body decides the classification.
#[must_use]
pub fn classify_login_response(raw_body: &str, http_status: Option<u16>) -> AuthOutcome {
    if raw_body.trim().is_empty() {
        return AuthOutcome::TransportFailure {
            message: OFFLINE_MESSAGE.to_string(),
        };
    }

    let code = http_status.unwrap_or(500);

    match Document::parse(raw_body) {
        Ok(document) => classify_document(&document, code),
        Err(_) => AuthOutcome::ServerError {
            code,
            message: "malformed response".to_string(),
        },
    }
}

fn classify_document(document: &Document, code: u16) -> AuthOutcome {
    let ban_node = select(document, &["LoginStatusVO", "Ban"]);
    let description_node = select(document, &["LoginStatusVO", "Description"]);
    let fallback_node = select(document, &["html", "body"]);

    // Presence priority: ban, then description, then the generic page body
    let (extra_node, used_fallback) = match (ban_node, description_node) {
        (Some(ban), _) => (Some(ban), false),
        (None, Some(description)) => (Some(description), false),
        (None, None) => (fallback_node, true),
    };

    let extra_text = extra_node.map(inner_text).unwrap_or_default();

    if !extra_text.is_empty() {
        if let Some(ban) = ban_node {
            return classify_ban(ban, &extra_text);
        }
        if extra_text == TAMPERING_MARKER {
            return AuthOutcome::TamperingDetected;
        }
        if !used_fallback && extra_text == INVALID_LOGIN_MARKER {
            return AuthOutcome::InvalidCredentials;
        }
        // Either an unexpected page instead of the structured schema, or a
        // structured error we have no special handling for; both carry the
        // server's text verbatim.
        return AuthOutcome::ServerError {
            code,
            message: extra_text,
        };
    }

    classify_success(document, code)
}

fn classify_ban(ban: Node<'_, '_>, ban_text: &str) -> AuthOutcome {
    let reason = ban
        .children()
        .find(|child| child.has_tag_name("Reason"))
        .map_or_else(|| ban_text.to_string(), inner_text);

    // A missing Expires element means the ban is permanent
    let expires_at = ban
        .children()
        .find(|child| child.has_tag_name("Expires"))
        .map(inner_text);

    AuthOutcome::Banned { reason, expires_at }
}

fn classify_success(document: &Document, code: u16) -> AuthOutcome {
    let user_id = select(document, &["LoginStatusVO", "UserId"]).map(inner_text);
    let login_token = select(document, &["LoginStatusVO", "LoginToken"]).map(inner_text);

    match (user_id, login_token) {
        (Some(user_id), Some(login_token)) => {
            let warning = select(document, &["LoginStatusVO", "Warning"]).map(inner_text);
            AuthOutcome::Success {
                user_id,
                login_token,
                warning,
            }
        }
        // A reply with no error text must carry both token fields
        _ => AuthOutcome::ServerError {
            code,
            message: "malformed response".to_string(),
        },
    }
}

/// Walk an element path from the document root, `LoginStatusVO/Ban` style
fn select<'a, 'input>(
    document: &'a Document<'input>,
    path: &[&str],
) -> Option<Node<'a, 'input>> {
    let mut node = document.root();
    for name in path {
        node = node.children().find(|child| child.has_tag_name(*name))?;
    }
    Some(node)
}

/// Concatenated text of a node and all its descendants, trimmed
fn inner_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|text| text.text())
        .collect::<String>()
        .trim()
        .to_string()
}
