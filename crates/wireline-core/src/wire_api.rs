use strum::{AsRefStr, Display, EnumString};

/// Request/response shape an OpenAI-compatible backend expects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum WireApi {
    /// Legacy chat completions shape, supported by nearly every compatible backend
    #[default]
    Chat,
    /// Responses shape
    Responses,
}

impl WireApi {
    /// Path appended to the provider base URL for this variant
    pub const fn path_suffix(self) -> &'static str {
        match self {
            Self::Chat => "chat/completions",
            Self::Responses => "responses",
        }
    }
}
