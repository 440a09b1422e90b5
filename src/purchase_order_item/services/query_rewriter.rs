/// Navigation property resolved locally for receiving locations
pub const RECEIVING_LOCATION: &str = "receivingLocation";
/// Navigation property resolved locally for supplier locations
pub const SUPPLIER_LOCATION: &str = "supplierLocation";
/// Navigation property resolved locally for plant locations of delivery items
pub const PLANT_LOCATION: &str = "plantLocation";
/// Navigation property resolved by the inbound delivery item handler
pub const ARRIVAL_TIMES: &str = "arrivalTimes";

const VIRTUAL_FIELDS: [&str; 4] = [
    RECEIVING_LOCATION,
    SUPPLIER_LOCATION,
    PLANT_LOCATION,
    ARRIVAL_TIMES,
];
const LOCATION_FIELDS: [&str; 3] = [RECEIVING_LOCATION, SUPPLIER_LOCATION, PLANT_LOCATION];

const COMMA: &str = ",";
const COMMA_ENCODED: &str = "%2C";
const DIV: &str = "/";
const DIV_ENCODED: &str = "%2F";
const EXPAND_KEYS: [&str; 2] = ["$expand", "%24expand"];

/// Which locally resolved sub-resources the caller asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandRequest {
    pub wants_locations: bool,
    pub wants_arrival_times: bool,
}

impl ExpandRequest {
    /// Inspects the `$expand` option of the URI as sent by the caller.
    pub fn from_uri(uri: &str) -> Self {
        let mut request = Self::default();
        let Some(expand) = find_expand_value(uri) else {
            return request;
        };

        for segment in split_any(expand, &[COMMA, COMMA_ENCODED]).pieces {
            for step in split_any(segment, &[DIV, DIV_ENCODED]).pieces {
                let step = decode_step(step);
                if LOCATION_FIELDS.contains(&step.as_str()) {
                    request.wants_locations = true;
                }
                if step == ARRIVAL_TIMES {
                    request.wants_arrival_times = true;
                }
            }
        }

        request
    }
}

/// QueryRewriter - Removes expansions the backend cannot serve
///
/// Locations and arrival times are virtual navigation properties: the backend
/// has no association for them, so asking it to expand them fails. They are
/// stripped before forwarding and resolved locally afterwards.
pub struct QueryRewriter;

impl QueryRewriter {
    /// Rewrites the `$expand` option of `uri`, leaving everything else intact.
    ///
    /// - Segments starting with a virtual field are removed
    /// - Segments navigating into a virtual field are cut back to their parent
    ///   (`inboundDeliveryItems/plantLocation` becomes `inboundDeliveryItems`)
    /// - Empty and duplicate segments are dropped
    /// - Survivors are joined with the first separator (`,` or `%2C`) found in
    ///   the input list, so a mixed list comes back in one style
    /// - An `$expand` left without segments is removed from the query
    pub fn remove_virtual_expands(uri: &str) -> String {
        let Some((path, query)) = uri.split_once('?') else {
            return uri.to_string();
        };

        let params: Vec<String> = query
            .split('&')
            .filter_map(|param| match param.split_once('=') {
                Some((key, value)) if is_expand_key(key) => {
                    rewrite_expand_value(value).map(|value| format!("{}={}", key, value))
                }
                _ => Some(param.to_string()),
            })
            .filter(|param| !param.is_empty())
            .collect();

        if params.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, params.join("&"))
        }
    }
}

/// Returns the rewritten list, or None when nothing is left to expand.
fn rewrite_expand_value(value: &str) -> Option<String> {
    let split = split_any(value, &[COMMA, COMMA_ENCODED]);
    let separator = split.first_separator.unwrap_or(COMMA);

    let mut kept: Vec<String> = Vec::new();
    for segment in split.pieces {
        if decode_step(segment).is_empty() {
            continue;
        }
        if let Some(segment) = strip_virtual_steps(segment) {
            let decoded = decode_step(&segment);
            if !kept.iter().any(|existing| decode_step(existing) == decoded) {
                kept.push(segment);
            }
        }
    }

    if kept.is_empty() {
        None
    } else {
        Some(kept.join(separator))
    }
}

/// Cuts a navigation path at its first virtual step.
fn strip_virtual_steps(segment: &str) -> Option<String> {
    let split = split_any(segment, &[DIV, DIV_ENCODED]);
    let virtual_at = split
        .pieces
        .iter()
        .position(|step| VIRTUAL_FIELDS.contains(&decode_step(step).as_str()));

    match virtual_at {
        None => Some(segment.to_string()),
        Some(0) => None,
        Some(index) => {
            let divider = split.first_separator.unwrap_or(DIV);
            Some(split.pieces[..index].join(divider))
        }
    }
}

fn find_expand_value(uri: &str) -> Option<&str> {
    let (_, query) = uri.split_once('?')?;
    query.split('&').find_map(|param| {
        let (key, value) = param.split_once('=')?;
        is_expand_key(key).then_some(value)
    })
}

fn is_expand_key(key: &str) -> bool {
    EXPAND_KEYS
        .iter()
        .any(|expand| key.eq_ignore_ascii_case(expand))
}

/// Decodes a query step, reading `+` as a space (form encoding).
fn decode_step(step: &str) -> String {
    let step = step.replace('+', " ");
    urlencoding::decode(&step)
        .map(|decoded| decoded.trim().to_string())
        .unwrap_or_else(|_| step.trim().to_string())
}

struct Split<'a> {
    pieces: Vec<&'a str>,
    first_separator: Option<&'static str>,
}

/// Splits on any of `separators`; percent-encoded ones match case-insensitively.
fn split_any<'a>(input: &'a str, separators: &[&'static str]) -> Split<'a> {
    let bytes = input.as_bytes();
    let mut pieces = Vec::new();
    let mut first_separator = None;
    let mut start = 0;
    let mut index = 0;

    while index < bytes.len() {
        let matched = separators.iter().find(|separator| {
            bytes[index..].len() >= separator.len()
                && bytes[index..index + separator.len()].eq_ignore_ascii_case(separator.as_bytes())
        });

        match matched {
            Some(separator) => {
                pieces.push(&input[start..index]);
                first_separator.get_or_insert(*separator);
                index += separator.len();
                start = index;
            }
            None => index += 1,
        }
    }
    pieces.push(&input[start..]);

    Split {
        pieces,
        first_separator,
    }
}
