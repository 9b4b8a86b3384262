use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::resolver::ResolverConfig;

pub mod dictionary;
pub mod resolver;

#[derive(Default, Serialize, Deserialize)]
pub struct Config {
    pub resolver: ResolverConfig,
    pub dictionary: DictionaryConfig,
}

impl Config {
    /// Read configuration from the process environment, loading a `.env`
    /// file first when one is present.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        Config {
            resolver: ResolverConfig::new(),
            dictionary: DictionaryConfig::new(),
        }
    }
}
