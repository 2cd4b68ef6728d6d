use modular_agent_core::{
    Agent, AgentContext, AgentData, AgentError, AgentOutput, AgentSpec, AgentValue, AsAgent,
    Message, ModularAgent, async_trait, modular_agent,
};
use tracing::{debug, warn};

use crate::mrkdwn::{self, Rule};
use crate::users::UserDirectory;

static CATEGORY: &str = "Slack";

static PORT_VALUE: &str = "value";
static PORT_USERS: &str = "users";
static PORT_MARKDOWN: &str = "markdown";

static CONFIG_EMOJI: &str = "emoji";

/// Agent for converting Slack mrkdwn text to Markdown.
///
/// # Configuration
/// - `emoji`: Replace `:shortcode:` with Unicode emoji (default: true)
///
/// # Input
/// - `value`: String, Message, Slack message object with `text` (and optional
///   `users`), or an array of those
/// - `users`: User directory as `{"U123": "Alice"}`, an array of Slack member
///   objects, or a `users.list` response with `members`
///
/// # Output
/// - `markdown`: The input with every text converted to Markdown
#[modular_agent(
    title = "ToMarkdown",
    category = CATEGORY,
    inputs = [PORT_VALUE, PORT_USERS],
    outputs = [PORT_MARKDOWN],
    boolean_config(name = CONFIG_EMOJI, default = true),
)]
struct SlackToMarkdownAgent {
    data: AgentData,
    users: UserDirectory,
}

#[async_trait]
impl AsAgent for SlackToMarkdownAgent {
    fn new(ma: ModularAgent, id: String, spec: AgentSpec) -> Result<Self, AgentError> {
        Ok(Self {
            data: AgentData::new(ma, id, spec),
            users: UserDirectory::new(),
        })
    }

    async fn process(
        &mut self,
        ctx: AgentContext,
        port: String,
        value: AgentValue,
    ) -> Result<(), AgentError> {
        if port == PORT_USERS {
            self.users = directory_from_value(&value)?;
            debug!(users = self.users.len(), "user directory loaded");
            return Ok(());
        }

        let config = self.configs()?;
        let rules = rules_for(config.get_bool_or(CONFIG_EMOJI, true));

        let markdown = if let Some(arr) = value.as_array() {
            let converted: im::Vector<AgentValue> = arr
                .iter()
                .filter_map(|v| match convert_value(v, &self.users, &rules) {
                    Ok(v) => Some(v),
                    Err(e) => {
                        warn!("Skipping element: {}", e);
                        None
                    }
                })
                .collect();
            AgentValue::array(converted)
        } else {
            convert_value(&value, &self.users, &rules)?
        };

        self.output(ctx, PORT_MARKDOWN, markdown).await
    }
}

fn rules_for(emoji: bool) -> Vec<Rule> {
    Rule::ALL
        .into_iter()
        .filter(|rule| emoji || *rule != Rule::Emoji)
        .collect()
}

fn convert_value(
    value: &AgentValue,
    users: &UserDirectory,
    rules: &[Rule],
) -> Result<AgentValue, AgentError> {
    match value {
        AgentValue::String(s) => Ok(AgentValue::string(mrkdwn::convert_with(
            s,
            Some(users),
            rules,
        ))),
        AgentValue::Message(msg) => {
            let mut message = Message::clone(msg);
            message.content = mrkdwn::convert_with(&message.content, Some(users), rules);
            Ok(AgentValue::message(message))
        }
        AgentValue::Object(obj) => {
            let text = obj.get("text").and_then(|v| v.as_str()).unwrap_or("");

            // Per-message directory entries take precedence over the stored ones.
            let merged;
            let users = match obj.get("users") {
                Some(inline) => {
                    let mut combined = users.clone();
                    combined.extend(
                        directory_from_value(inline)?
                            .iter()
                            .map(|(id, name)| (id.to_string(), name.to_string())),
                    );
                    merged = combined;
                    &merged
                }
                None => users,
            };

            let markdown = mrkdwn::convert_with(text, Some(users), rules);

            let mut out = im::HashMap::new();
            for (key, v) in obj.iter() {
                out.insert(key.clone(), v.clone());
            }
            out.insert("text".into(), AgentValue::string(markdown));
            Ok(AgentValue::object(out))
        }
        _ => Err(AgentError::InvalidValue(
            "Expected string, message, or object for Slack message".to_string(),
        )),
    }
}

fn directory_from_value(value: &AgentValue) -> Result<UserDirectory, AgentError> {
    UserDirectory::from_json_value(&value.to_json()).ok_or_else(|| {
        AgentError::InvalidValue(
            "Expected user map, member array, or users.list response".to_string(),
        )
    })
}
