// Scripted model client shared by handler tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use debugbot_ai::{AiConfig, AiService, LlmClient, LlmError};

use crate::config::Settings;
use crate::state::AppState;

pub enum Reply {
    Text(String),
    Fail,
}

pub struct ScriptedClient {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail => Err(LlmError::ApiError("quota exceeded".to_string())),
        }
    }

    fn model(&self) -> &str {
        "scripted"
    }

    fn provider(&self) -> &str {
        "scripted"
    }
}

pub fn test_settings() -> Settings {
    Settings {
        project_name: "VS Code Debug Bot".to_string(),
        api_v1_str: "/api/v1".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        api_key: None,
        ai: AiConfig::default(),
    }
}

pub fn test_state(reply: Reply) -> (Arc<AppState>, Arc<ScriptedClient>) {
    test_state_with_key(reply, None)
}

pub fn test_state_with_key(
    reply: Reply,
    api_key: Option<&str>,
) -> (Arc<AppState>, Arc<ScriptedClient>) {
    let client = Arc::new(ScriptedClient {
        reply,
        prompts: Mutex::new(Vec::new()),
    });
    let settings = Settings {
        api_key: api_key.map(str::to_string),
        ..test_settings()
    };
    let state = Arc::new(AppState {
        service: AiService::new(client.clone()),
        settings,
    });
    (state, client)
}
