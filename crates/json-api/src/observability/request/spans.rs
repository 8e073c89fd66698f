//! Route templates for span names and metric labels.

use uuid::Uuid;

/// Collection segments whose identifier child is named after the resource.
const RESOURCES: [(&str, &str); 2] = [("products", "{product}"), ("categories", "{category}")];

/// Placeholder for identifiers outside a known collection.
const ID_PLACEHOLDER: &str = "{id}";

/// A request path with its identifiers replaced by route placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RouteName {
    /// Template such as `/products/{product}`
    pub(super) route: String,

    /// `METHOD route`, used as the OpenTelemetry span name
    pub(super) span_name: String,
}

impl RouteName {
    pub(super) fn new(method: &str, path: &str) -> Self {
        let route = route_template(path);
        let span_name = format!("{method} {route}");

        Self { route, span_name }
    }
}

fn route_template(path: &str) -> String {
    let mut previous = "";
    let mut route = String::with_capacity(path.len());

    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        route.push('/');

        if Uuid::parse_str(segment).is_ok() {
            let placeholder = RESOURCES
                .iter()
                .find(|(collection, _)| *collection == previous)
                .map_or(ID_PLACEHOLDER, |(_, placeholder)| *placeholder);

            route.push_str(placeholder);
        } else {
            route.push_str(segment);
        }

        previous = segment;
    }

    if route.is_empty() {
        route.push('/');
    }

    route
}
