use std::fmt::Display;

/// Filter part matching directory entries of one tracked process
pub const PROCESS_ID_FILTER_PART: &str = "process_id eq guid'{}'";
/// Backend entity set linking processes to their events
pub const PROCESS_EVENT_DIRECTORY_URI: &str = "/ProcessEventDirectory";

/// Characters allowed verbatim in a URI query component (RFC 3986)
const QUERY_SAFE: &str = "-._~!$&'()*+,;=:@/?";

/// FilterBuilder - Splits large id lists into several `$filter` expressions
///
/// Gateways in front of the backend reject overly long URLs, so a filter over
/// hundreds of ids is issued as several smaller requests instead of one.
#[derive(Debug, Clone, Copy)]
pub struct FilterBuilder {
    max_parts_per_filter: usize,
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_PARTS)
    }
}

impl FilterBuilder {
    pub const DEFAULT_MAX_PARTS: usize = 50;

    /// Creates a builder putting at most `max_parts_per_filter` parts into one
    /// expression. Zero is treated as one.
    pub fn new(max_parts_per_filter: usize) -> Self {
        Self {
            max_parts_per_filter: max_parts_per_filter.max(1),
        }
    }

    pub fn max_parts_per_filter(&self) -> usize {
        self.max_parts_per_filter
    }

    /// Renders every id through `template` (`{}` marks the id) and joins the
    /// parts of each chunk with `operator`.
    ///
    /// Every id lands in exactly one expression, in input order. An empty
    /// slice yields no expressions.
    pub fn split_large_filter<I: Display>(
        &self,
        template: &str,
        operator: &str,
        ids: &[I],
    ) -> Vec<String> {
        let joiner = format!(" {} ", operator);
        ids.chunks(self.max_parts_per_filter)
            .map(|chunk| {
                chunk
                    .iter()
                    .map(|id| template.replacen("{}", &id.to_string(), 1))
                    .collect::<Vec<_>>()
                    .join(&joiner)
            })
            .collect()
    }

    /// Builds the encoded directory URI returning deletion and undeletion
    /// events of the processes matched by `filter`.
    pub fn event_directory_uri(model_namespace: &str, filter: &str) -> String {
        let query = format!(
            "$expand=event&$filter=(event/eventType eq '{ns}.PurchaseOrderItem.DeletionEvent' \
             or event/eventType eq '{ns}.PurchaseOrderItem.UndeletionEvent') and ({filter})",
            ns = model_namespace,
            filter = filter
        );
        format!(
            "{}?{}",
            PROCESS_EVENT_DIRECTORY_URI,
            encode_query_component(&query)
        )
    }
}

/// Percent-encodes everything a query component may not carry verbatim.
fn encode_query_component(query: &str) -> String {
    let mut encoded = String::with_capacity(query.len());
    for c in query.chars() {
        if c.is_ascii_alphanumeric() || QUERY_SAFE.contains(c) {
            encoded.push(c);
        } else {
            let mut buf = [0u8; 4];
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    encoded
}
