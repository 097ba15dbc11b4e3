use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchStandardsParams {
    /// Keyword to look for in topic keys, titles and standard texts (case-insensitive).
    pub query: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TopicParams {
    /// Topic key such as "risk", "stakeholders" or "planning".
    pub topic: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InsightsParams {
    /// Topic key. Omit for the global insights across all topics.
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GenerateRecommendationParams {
    /// Project type: "agile", "waterfall", "hybrid" or "research".
    pub project_type: String,
    /// Project size: "small", "medium" or "large". Only affects the heading.
    pub size: String,
    /// Optional focus areas: "risk", "stakeholder", "quality", "change".
    #[serde(default)]
    pub focus_areas: Vec<String>,
}

/// One topic with its text per standard. Used for search cards and table rows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TopicEntry {
    pub key: String,
    pub title: String,
    pub pmbok: String,
    pub prince2: String,
    pub iso: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchStandardsResponse {
    pub query: String,
    pub results: Vec<TopicEntry>,
    /// Set when a non-empty query matched nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub markdown: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ComparisonResponse {
    pub columns: Vec<String>,
    pub rows: Vec<TopicEntry>,
    pub markdown: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TopicDetailResponse {
    pub topic: TopicEntry,
    pub markdown: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InsightsResponse {
    /// Topic the insights were computed for; `None` for the global view.
    pub topic: Option<String>,
    pub similarities: Vec<String>,
    pub differences: Vec<String>,
    pub unique_points: Vec<String>,
    pub markdown: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NavigateResponse {
    pub topic: String,
    /// `false` when the key is not a known topic; nothing else is populated then.
    pub found: bool,
    /// Zero-based position of the row in the comparison table.
    pub row_index: Option<usize>,
    pub row: Option<TopicEntry>,
    pub insights: Option<InsightsResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BookmarkEntry {
    pub key: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BookmarksResponse {
    pub bookmarks: Vec<BookmarkEntry>,
    pub markdown: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddBookmarkResponse {
    pub topic: String,
    /// `false` when the topic was already bookmarked.
    pub added: bool,
    pub bookmarks: Vec<BookmarkEntry>,
    pub markdown: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StandardsGuidance {
    pub pmbok: String,
    pub prince2: String,
    pub iso: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RecommendationResponse {
    pub heading: String,
    pub project_type: String,
    pub size: String,
    pub approach: String,
    pub processes: Vec<String>,
    pub standards: StandardsGuidance,
    /// Omitted when no requested focus area produced a recommendation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub focus_recommendations: Vec<String>,
    pub markdown: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OptionEntry {
    pub tag: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OptionsResponse {
    pub topics: Vec<OptionEntry>,
    pub project_types: Vec<OptionEntry>,
    pub sizes: Vec<OptionEntry>,
    pub focus_areas: Vec<OptionEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_areas_default_to_empty() {
        let params: GenerateRecommendationParams =
            serde_json::from_str(r#"{"project_type":"agile","size":"small"}"#).unwrap();
        assert!(params.focus_areas.is_empty());
    }

    #[test]
    fn empty_focus_section_is_not_serialized() {
        let response = RecommendationResponse {
            heading: "h".to_string(),
            project_type: "agile".to_string(),
            size: "small".to_string(),
            approach: "a".to_string(),
            processes: vec![],
            standards: StandardsGuidance {
                pmbok: "p".to_string(),
                prince2: "p2".to_string(),
                iso: "i".to_string(),
            },
            focus_recommendations: vec![],
            markdown: String::new(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("focus_recommendations").is_none());
    }
}
