use rehab_domain::{BreakInterval, Frequency, Schedule};

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub default_frequency: u32,
    pub default_break_interval: u32,
}

impl Settings {
    /// Schedule a new program starts with.
    ///
    /// A stored frequency of zero falls back to the regular default.
    #[must_use]
    pub fn default_schedule(&self) -> Schedule {
        Schedule {
            days: std::collections::BTreeSet::new(),
            frequency: Frequency::new(self.default_frequency).unwrap_or_default(),
            break_interval: BreakInterval::new(self.default_break_interval),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: String::from("http://localhost:3001/api"),
            default_frequency: 1,
            default_break_interval: 30,
        }
    }
}
