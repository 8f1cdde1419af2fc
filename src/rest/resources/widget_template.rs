//! Widget template resource implementation.
//!
//! Widget templates are the reusable Handlebars layouts behind Page Builder
//! widgets. They live under the content API and are addressed by UUID.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A widget template.
///
/// `uuid`, `date_created`, `date_modified`, and `current_version_uuid` are
/// assigned by the API.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::WidgetTemplate;
///
/// let template = WidgetTemplate {
///     name: Some("Header Images".to_string()),
///     template: Some("{{#each images}}<img src={{image_url}} />{{/each}}".to_string()),
///     ..Default::default()
/// };
///
/// let body = serde_json::to_value(&template).unwrap();
/// assert!(body.get("uuid").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WidgetTemplate {
    /// The unique identifier of the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Page Builder schema: an array of tabs, sections, and settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Vec<Value>>,

    /// Handlebars template source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// GraphQL Storefront API query whose result is passed to the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storefront_api_query: Option<String>,

    /// Template kind, e.g. `custom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Creation time, normalized to UTC. The API's offset is not kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,

    /// Last modification time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,

    /// UUID of the current template version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version_uuid: Option<String>,

    /// Icon shown in Page Builder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
}

impl RestResource for WidgetTemplate {
    type Id = String;
    type ListParams = WidgetTemplateListParams;

    const NAME: &'static str = "WidgetTemplate";
    const ID_FIELD: &'static str = "uuid";

    // The collection path keeps its trailing slash.
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            "/content/widget-templates/{uuid}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, "/content/widget-templates/"),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            "/content/widget-templates/",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            "/content/widget-templates/{uuid}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            "/content/widget-templates/{uuid}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.uuid.clone()
    }
}

/// Parameters for listing widget templates.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WidgetTemplateListParams {
    /// One-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,

    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Filter by template kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget_template_kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;
    use serde_json::json;

    fn sample_json() -> &'static str {
        r#"{
            "uuid": "0a1b2c3d-0000-4000-8000-000000000001",
            "name": "Simple List",
            "schema": [{"type": "tab", "label": "Content", "sections": []}],
            "template": "<ul>{{#each items}}<li>{{name}}</li>{{/each}}</ul>",
            "storefront_api_query": "",
            "kind": "custom",
            "date_created": "2019-05-13T21:12:55.793Z",
            "date_modified": "2019-05-14T08:01:02Z",
            "current_version_uuid": "0a1b2c3d-0000-4000-8000-0000000000ff",
            "icon_name": "default"
        }"#
    }

    #[test]
    fn test_widget_template_deserialization_from_api_response() {
        let template: WidgetTemplate = serde_json::from_str(sample_json()).unwrap();

        assert_eq!(
            template.uuid.as_deref(),
            Some("0a1b2c3d-0000-4000-8000-000000000001")
        );
        assert_eq!(template.kind.as_deref(), Some("custom"));
        assert_eq!(template.schema.as_ref().map(Vec::len), Some(1));
        assert_eq!(
            template.date_modified,
            Some(
                DateTime::parse_from_rfc3339("2019-05-14T08:01:02Z")
                    .unwrap()
                    .with_timezone(&Utc)
            )
        );
    }

    #[test]
    fn test_widget_template_round_trip() {
        let template: WidgetTemplate = serde_json::from_str(sample_json()).unwrap();

        let json = serde_json::to_string(&template).unwrap();
        let decoded: WidgetTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, template);
    }

    #[test]
    fn test_widget_template_dates_with_offset_and_fraction() {
        let template: WidgetTemplate = serde_json::from_value(json!({
            "date_created": "2024-06-01T12:30:45.250+00:00",
            "date_modified": "2024-06-01T14:30:45.250+02:00"
        }))
        .unwrap();

        assert_eq!(template.date_created, template.date_modified);
        assert_eq!(
            template.date_created.map(|d| d.timestamp_millis()),
            Some(1_717_245_045_250)
        );

        let body = serde_json::to_value(&template).unwrap();
        assert_eq!(body["date_created"], json!("2024-06-01T12:30:45.250Z"));
        assert_eq!(body["date_modified"], json!("2024-06-01T12:30:45.250Z"));
    }

    #[test]
    fn test_widget_template_unparseable_date_is_error() {
        let result = serde_json::from_value::<WidgetTemplate>(json!({"date_created": ""}));
        assert!(result.is_err());
    }

    #[test]
    fn test_widget_template_create_body_has_only_set_fields() {
        let template = WidgetTemplate {
            name: Some("Banner".to_string()),
            template: Some("<h1>{{title}}</h1>".to_string()),
            schema: Some(vec![json!({"type": "tab"})]),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&template).unwrap(),
            json!({
                "name": "Banner",
                "template": "<h1>{{title}}</h1>",
                "schema": [{"type": "tab"}]
            })
        );
    }

    #[test]
    fn test_widget_template_is_addressed_by_uuid() {
        assert_eq!(WidgetTemplate::ID_FIELD, "uuid");

        let template = WidgetTemplate {
            uuid: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(template.get_id(), Some("abc".to_string()));

        let find = get_path(WidgetTemplate::PATHS, ResourceOperation::Get).unwrap();
        assert_eq!(find.template, "/content/widget-templates/{uuid}");

        let list = get_path(WidgetTemplate::PATHS, ResourceOperation::List).unwrap();
        assert_eq!(list.template, "/content/widget-templates/");
    }
}
