use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::Url;
use url::form_urlencoded;

use super::NOTIFICATIONS_PATH;
use crate::domain::StatusQueryOptions;

// RFC 3986 path segment: everything outside unreserved/sub-delims, plus `/`.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `/v2/notifications` plus the non-empty filters, in a fixed key order.
pub fn encode_status_query_path(options: &StatusQueryOptions) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    push_filter(&mut query, "older_than", options.older_than.as_deref());
    push_filter(&mut query, "reference", options.reference.as_deref());
    push_filter(&mut query, "status", options.status.as_deref());
    push_filter(&mut query, "template_type", options.template_type.as_deref());

    let query = query.finish();
    if query.is_empty() {
        NOTIFICATIONS_PATH.to_owned()
    } else {
        format!("{NOTIFICATIONS_PATH}?{query}")
    }
}

fn push_filter(query: &mut form_urlencoded::Serializer<'_, String>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        query.append_pair(key, value);
    }
}

pub fn encode_status_by_id_path(id: &str) -> String {
    format!(
        "{NOTIFICATIONS_PATH}/{}",
        utf8_percent_encode(id, PATH_SEGMENT)
    )
}

/// Turn a server-supplied `next` link into a path for the configured host.
///
/// The link is followed verbatim: only the scheme/host part is dropped. A
/// link that already is a relative path is returned unchanged.
pub fn next_page_path(host: &str, next: &str) -> String {
    let same_host = next
        .strip_prefix(host)
        .filter(|rest| rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'));
    if let Some(rest) = same_host {
        return rest.to_owned();
    }

    match Url::parse(next) {
        Ok(url) if url.has_host() => match url.query() {
            Some(query) => format!("{}?{query}", url.path()),
            None => url.path().to_owned(),
        },
        _ => next.to_owned(),
    }
}
