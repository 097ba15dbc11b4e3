/// MCP server exposing the PM standards comparison.
///
/// Every tool returns structured data plus a markdown rendering of it. The only
/// per-session state is the bookmark set.
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::bookmarks::BookmarkSet;
use crate::comparison::{self, build_comparison};
use crate::data;
use crate::error::AppError;
use crate::insights;
use crate::model::{self, FocusArea, Insights, ProjectSize, ProjectType, Tag, Topic, TopicKey};
use crate::recommend::{self, FocusPolicy, Recommendation};
use crate::render;
use crate::search;
use mcp_common::mcp_api::{
    AddBookmarkResponse, BookmarkEntry, BookmarksResponse, ComparisonResponse,
    GenerateRecommendationParams, InsightsParams, InsightsResponse, NavigateResponse, OptionEntry,
    OptionsResponse, RecommendationResponse, SearchStandardsParams, SearchStandardsResponse,
    StandardsGuidance, TopicDetailResponse, TopicEntry, TopicParams,
};

/// Per-session state. Bookmarks are replaced by the value `BookmarkSet::add` returns.
#[derive(Debug, Default)]
pub struct SessionState {
    pub bookmarks: BookmarkSet,
}

#[derive(Clone)]
pub struct PmStandardsServer {
    state: Arc<RwLock<SessionState>>,
    focus_policy: FocusPolicy,
    tool_router: ToolRouter<PmStandardsServer>,
}

impl PmStandardsServer {
    pub fn new(focus_policy: FocusPolicy) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState {
                bookmarks: BookmarkSet::new(),
            })),
            focus_policy,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl PmStandardsServer {
    #[tool(description = "Search PMBOK 7, PRINCE2 and ISO 21500/21502 topics by keyword (case-insensitive substring). An empty query returns no results.")]
    async fn search_standards(
        &self,
        Parameters(params): Parameters<SearchStandardsParams>,
    ) -> Result<Json<SearchStandardsResponse>, String> {
        let results = search::search(&params.query);
        let message = (!params.query.is_empty() && results.is_empty())
            .then(|| search::no_results_message(&params.query));
        let markdown = render::search_results(&params.query, &results);

        Ok(Json(SearchStandardsResponse {
            results: results.into_iter().map(to_api_topic).collect(),
            query: params.query,
            message,
            markdown,
        }))
    }

    #[tool(description = "Get the comparison table: one row per topic with the PMBOK 7, PRINCE2 and ISO 21500/21502 positions.")]
    async fn get_comparison(&self) -> Result<Json<ComparisonResponse>, String> {
        let table = build_comparison();
        Ok(Json(ComparisonResponse {
            columns: table.columns().into_iter().map(String::from).collect(),
            rows: table.rows.iter().copied().map(to_api_topic).collect(),
            markdown: render::comparison_table(&table),
        }))
    }

    #[tool(description = "Get a single topic by key (e.g. 'risk', 'stakeholders', 'planning').")]
    async fn get_topic(
        &self,
        Parameters(params): Parameters<TopicParams>,
    ) -> Result<Json<TopicDetailResponse>, String> {
        let key = parse_topic(&params.topic)?;
        let topic = data::topic(key);
        Ok(Json(TopicDetailResponse {
            topic: to_api_topic(topic),
            markdown: render::topic_card(topic),
        }))
    }

    #[tool(description = "Get similarities, differences and unique points across the standards. Omit the topic for the global view; an unknown topic yields empty lists.")]
    async fn get_insights(
        &self,
        Parameters(params): Parameters<InsightsParams>,
    ) -> Result<Json<InsightsResponse>, String> {
        let insights = insights::insights_for(params.topic.as_deref());
        Ok(Json(to_api_insights(params.topic, &insights)))
    }

    #[tool(description = "Jump to a topic's row in the comparison table and refresh the insights for it. Unknown topics are ignored (found = false).")]
    async fn navigate_topic(
        &self,
        Parameters(params): Parameters<TopicParams>,
    ) -> Result<Json<NavigateResponse>, String> {
        let Some(nav) = comparison::navigate(&params.topic) else {
            debug!(topic = %params.topic, "navigation to unknown topic skipped");
            return Ok(Json(NavigateResponse {
                topic: params.topic,
                found: false,
                row_index: None,
                row: None,
                insights: None,
            }));
        };

        let key = nav.topic.key.as_str().to_string();
        Ok(Json(NavigateResponse {
            found: true,
            row_index: Some(nav.row_index),
            row: Some(to_api_topic(nav.topic)),
            insights: Some(to_api_insights(Some(key.clone()), &nav.insights)),
            topic: key,
        }))
    }

    #[tool(description = "Bookmark a topic for quick navigation. Adding an existing bookmark is a no-op (added = false).")]
    async fn add_bookmark(
        &self,
        Parameters(params): Parameters<TopicParams>,
    ) -> Result<Json<AddBookmarkResponse>, String> {
        let key = parse_topic(&params.topic)?;

        let mut state = self.state.write().await;
        let added = !state.bookmarks.contains(key);
        let current = std::mem::take(&mut state.bookmarks);
        state.bookmarks = current.add(key);
        if added {
            info!(topic = key.as_str(), bookmarks = state.bookmarks.len(), "bookmark added");
        }

        Ok(Json(AddBookmarkResponse {
            topic: key.as_str().to_string(),
            added,
            bookmarks: to_api_bookmarks(&state.bookmarks),
            markdown: render::bookmarks(&state.bookmarks),
        }))
    }

    #[tool(description = "List bookmarked topics in the order they were added.")]
    async fn list_bookmarks(&self) -> Result<Json<BookmarksResponse>, String> {
        let state = self.state.read().await;
        Ok(Json(BookmarksResponse {
            bookmarks: to_api_bookmarks(&state.bookmarks),
            markdown: render::bookmarks(&state.bookmarks),
        }))
    }

    #[tool(description = "Generate a process recommendation for a project type ('agile', 'waterfall', 'hybrid', 'research') and size ('small', 'medium', 'large'), with optional focus areas ('risk', 'stakeholder', 'quality', 'change'). Unknown focus areas are ignored.")]
    async fn generate_recommendation(
        &self,
        Parameters(params): Parameters<GenerateRecommendationParams>,
    ) -> Result<Json<RecommendationResponse>, String> {
        let rec = recommend::generate_from_tags(
            &params.project_type,
            &params.size,
            params.focus_areas.iter().map(String::as_str),
            self.focus_policy,
        )
        .map_err(|e| describe(&e))?;

        info!(
            project_type = rec.project_type.as_str(),
            size = rec.size.as_str(),
            focus = rec.focus_recommendations.len(),
            "recommendation generated"
        );
        Ok(Json(to_api_recommendation(&rec)))
    }

    #[tool(description = "List the valid topics, project types, sizes and focus areas with their display labels.")]
    async fn list_options(&self) -> Result<Json<OptionsResponse>, String> {
        Ok(Json(OptionsResponse {
            topics: options::<TopicKey>(),
            project_types: options::<ProjectType>(),
            sizes: options::<ProjectSize>(),
            focus_areas: options::<FocusArea>(),
        }))
    }
}

fn parse_topic(raw: &str) -> Result<TopicKey, String> {
    TopicKey::parse(raw).ok_or_else(|| describe(&AppError::UnknownTopic(raw.to_string())))
}

/// Error text for a tool failure, listing the accepted tags where that helps.
fn describe(err: &AppError) -> String {
    let available = match err {
        AppError::UnknownTopic(_) => model::available::<TopicKey>(),
        AppError::UnknownProjectType(_) => model::available::<ProjectType>(),
        AppError::UnknownProjectSize(_) => model::available::<ProjectSize>(),
        _ => return err.to_string(),
    };
    format!("{err}. Available: {available}")
}

fn options<T: Tag>() -> Vec<OptionEntry> {
    T::ALL
        .iter()
        .map(|tag| OptionEntry {
            tag: tag.as_str().to_string(),
            label: tag.label().to_string(),
        })
        .collect()
}

fn to_api_topic(topic: &Topic) -> TopicEntry {
    TopicEntry {
        key: topic.key.as_str().to_string(),
        title: topic.title.to_string(),
        pmbok: topic.pmbok.to_string(),
        prince2: topic.prince2.to_string(),
        iso: topic.iso.to_string(),
    }
}

fn to_api_insights(topic: Option<String>, insights: &Insights) -> InsightsResponse {
    InsightsResponse {
        topic,
        similarities: owned(insights.similarities),
        differences: owned(insights.differences),
        unique_points: owned(insights.unique_points),
        markdown: render::insights(insights),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn to_api_bookmarks(set: &BookmarkSet) -> Vec<BookmarkEntry> {
    set.topics()
        .map(|topic| BookmarkEntry {
            key: topic.key.as_str().to_string(),
            title: topic.title.to_string(),
        })
        .collect()
}

fn to_api_recommendation(rec: &Recommendation) -> RecommendationResponse {
    let guidance = &rec.profile.guidance;
    RecommendationResponse {
        heading: rec.heading(),
        project_type: rec.project_type.as_str().to_string(),
        size: rec.size.as_str().to_string(),
        approach: rec.profile.approach.to_string(),
        processes: owned(rec.profile.processes),
        standards: StandardsGuidance {
            pmbok: guidance.pmbok.to_string(),
            prince2: guidance.prince2.to_string(),
            iso: guidance.iso.to_string(),
        },
        focus_recommendations: owned(&rec.focus_recommendations),
        markdown: render::recommendation(rec),
    }
}

#[tool_handler]
impl ServerHandler for PmStandardsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "pm-standards".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Project management standards navigator comparing PMBOK 7, PRINCE2 and \
                 ISO 21500/21502. Use search_standards for keyword lookup, get_comparison for \
                 the side-by-side table, get_insights and navigate_topic for per-topic \
                 analysis, add_bookmark/list_bookmarks to keep topics at hand, and \
                 generate_recommendation (see list_options) for a tailored process outline."
                    .to_string(),
            ),
        }
    }
}
