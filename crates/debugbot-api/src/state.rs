use debugbot_ai::AiService;

use crate::config::Settings;

pub struct AppState {
    pub service: AiService,
    pub settings: Settings,
}
