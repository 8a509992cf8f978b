//! MCP tool definitions and dispatch.
//!
//! Argument structs double as the published input schemas (via `schemars`).
//! Whatever happens inside a tool, the caller gets back a JSON string.

use std::sync::Arc;

use outreach_core::{ErrorEnvelope, ProfileFetcher};
use rmcp::model::{JsonObject, Tool};
use rmcp::ErrorData as McpError;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::config::DefaultsConfig;

pub const TWITTER_TOOL: &str = "scrape_twitter_handles";
pub const LINKEDIN_TOOL: &str = "scrape_linkedin_profile";
pub const TWITTER_RAW_TOOL: &str = "scrape_twitter_raw";

/// Arguments of `scrape_twitter_handles`.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TwitterArgs {
    /// Twitter/X handle (without @), profile URL, or display name.
    #[serde(default, alias = "twitterHandle")]
    pub handle: String,
    /// Maximum number of tweets to scrape before picking the latest original one.
    #[serde(default)]
    pub max_items: Option<u32>,
}

/// Arguments of `scrape_linkedin_profile`.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInArgs {
    /// LinkedIn username, profile URL, or display name.
    #[serde(default)]
    pub username: String,
    /// Maximum number of posts to scrape.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Total posts to page through on the profile.
    #[serde(default, alias = "total_posts")]
    pub total_posts: Option<u32>,
}

/// Arguments of `scrape_twitter_raw`.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TwitterRawArgs {
    /// Twitter/X handles to scrape (without @).
    #[serde(default)]
    pub twitter_handles: Vec<String>,
    /// Maximum number of tweets to retrieve.
    #[serde(default)]
    pub max_items: Option<u32>,
}

pub struct OutreachTools {
    fetcher: Arc<ProfileFetcher>,
    defaults: DefaultsConfig,
}

impl OutreachTools {
    pub fn new(fetcher: Arc<ProfileFetcher>, defaults: DefaultsConfig) -> Self {
        Self { fetcher, defaults }
    }

    /// Tool list for `tools/list`.
    pub fn definitions(&self) -> Vec<Tool> {
        vec![
            Tool::new(
                TWITTER_TOOL,
                format!(
                    "Fetch the latest original tweet of a Twitter/X profile together with \
                     instructions for writing an outreach message about it. \
                     maxItems defaults to {}.",
                    self.defaults.twitter_max_items
                ),
                input_schema::<TwitterArgs>(),
            ),
            Tool::new(
                LINKEDIN_TOOL,
                format!(
                    "Fetch the latest post of a LinkedIn profile together with instructions \
                     for writing an outreach message about it. limit defaults to {}.",
                    self.defaults.linkedin_limit
                ),
                input_schema::<LinkedInArgs>(),
            ),
            Tool::new(
                TWITTER_RAW_TOOL,
                format!(
                    "Scrape tweets from one or more Twitter/X handles and return the raw \
                     scraped items as JSON. maxItems defaults to {}.",
                    self.defaults.raw_max_items
                ),
                input_schema::<TwitterRawArgs>(),
            ),
        ]
    }

    /// Run one tool. Only an unknown tool name is a protocol error; bad
    /// arguments come back as an error envelope like any other failure.
    #[tracing::instrument(name = "tool_call", skip(self, name, arguments), fields(tool = name))]
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<String, McpError> {
        info!("Tool call");
        let output = match name {
            TWITTER_TOOL => match parse_args::<TwitterArgs>(arguments) {
                Ok(args) => {
                    let max_items = args.max_items.unwrap_or(self.defaults.twitter_max_items);
                    self.fetcher.latest_tweet(&args.handle, max_items).await
                }
                Err(envelope) => envelope,
            },
            LINKEDIN_TOOL => match parse_args::<LinkedInArgs>(arguments) {
                Ok(args) => {
                    let limit = args.limit.unwrap_or(self.defaults.linkedin_limit);
                    self.fetcher
                        .latest_linkedin_post(&args.username, limit, args.total_posts)
                        .await
                }
                Err(envelope) => envelope,
            },
            TWITTER_RAW_TOOL => match parse_args::<TwitterRawArgs>(arguments) {
                Ok(args) => {
                    let max_items = args.max_items.unwrap_or(self.defaults.raw_max_items);
                    self.fetcher.raw_tweets(&args.twitter_handles, max_items).await
                }
                Err(envelope) => envelope,
            },
            other => {
                return Err(McpError::invalid_params(
                    format!("Unknown tool: {other}"),
                    None,
                ))
            }
        };
        Ok(output)
    }
}

fn input_schema<T: JsonSchema>() -> Arc<JsonObject> {
    let schema = match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(schema)) => schema,
        _ => {
            let mut schema = JsonObject::new();
            schema.insert("type".to_string(), Value::from("object"));
            schema
        }
    };
    Arc::new(schema)
}

/// Missing arguments count as an empty object so that absent identifiers
/// surface as "No ... provided" rather than a type error.
fn parse_args<T: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<T, String> {
    serde_json::from_value(Value::Object(arguments.unwrap_or_default()))
        .map_err(|e| ErrorEnvelope::new(format!("Invalid arguments: {e}")).to_json())
}

#[cfg(test)]
mod tests {
    use super::*;
    use outreach_core::testing::MockBackend;
    use outreach_core::PromptVariant;
    use rmcp::model::ErrorCode;
    use serde_json::json;

    fn tools(backend: Arc<MockBackend>) -> OutreachTools {
        let fetcher = ProfileFetcher::new(backend, PromptVariant::default());
        OutreachTools::new(Arc::new(fetcher), DefaultsConfig::default())
    }

    fn args(value: Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    fn parse(output: &str) -> Value {
        serde_json::from_str(output).unwrap()
    }

    #[test]
    fn definitions_publish_schemas() {
        let defs = tools(Arc::new(MockBackend::empty())).definitions();
        let names: Vec<&str> = defs.iter().map(|d| d.name.as_ref()).collect();
        assert_eq!(names, vec![TWITTER_TOOL, LINKEDIN_TOOL, TWITTER_RAW_TOOL]);

        let twitter_schema = &defs[0].input_schema;
        assert_eq!(twitter_schema.get("type"), Some(&json!("object")));
        let properties = &twitter_schema["properties"];
        assert!(properties.get("handle").is_some());
        assert!(properties.get("maxItems").is_some());

        let linkedin_properties = &defs[1].input_schema["properties"];
        assert!(linkedin_properties.get("totalPosts").is_some());
    }

    #[tokio::test]
    async fn default_max_items_applied() {
        let backend = Arc::new(MockBackend::with_items(vec![json!({ "text": "hi" })]));
        tools(backend.clone())
            .call(TWITTER_TOOL, args(json!({ "handle": "elonmusk" })))
            .await
            .unwrap();
        assert_eq!(backend.requests()[0].input["maxItems"], 3);
    }

    #[tokio::test]
    async fn legacy_argument_names_accepted() {
        let backend = Arc::new(MockBackend::with_items(vec![json!({ "text": "hi" })]));
        let out = tools(backend.clone())
            .call(TWITTER_TOOL, args(json!({ "twitterHandle": "nossa_ym", "maxItems": 2 })))
            .await
            .unwrap();
        assert_eq!(parse(&out)["latest_tweet"]["text"], "hi");
        assert_eq!(backend.requests()[0].input["twitterHandles"], json!(["nossa_ym"]));
        assert_eq!(backend.requests()[0].input["maxItems"], 2);
    }

    #[tokio::test]
    async fn missing_arguments_become_missing_input() {
        let backend = Arc::new(MockBackend::empty());
        let out = tools(backend.clone())
            .call(LINKEDIN_TOOL, None)
            .await
            .unwrap();
        assert_eq!(parse(&out)["error"], "No LinkedIn username provided");
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn mistyped_arguments_become_envelope() {
        let out = tools(Arc::new(MockBackend::empty()))
            .call(TWITTER_TOOL, args(json!({ "handle": "x", "maxItems": -4 })))
            .await
            .unwrap();
        let error = parse(&out)["error"].as_str().unwrap().to_string();
        assert!(error.starts_with("Invalid arguments:"), "{error}");
    }

    #[tokio::test]
    async fn unknown_tool_is_protocol_error() {
        let err = tools(Arc::new(MockBackend::empty()))
            .call("scrape_instagram", args(json!({})))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn raw_tool_uses_its_own_default() {
        let backend = Arc::new(MockBackend::with_items(vec![json!({ "text": "a" })]));
        let out = tools(backend.clone())
            .call(TWITTER_RAW_TOOL, args(json!({ "twitterHandles": ["nossa_ym"] })))
            .await
            .unwrap();
        assert_eq!(parse(&out)[0]["text"], "a");
        assert_eq!(backend.requests()[0].input["maxItems"], 100);
    }
}
