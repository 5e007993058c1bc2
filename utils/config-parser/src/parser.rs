use {
    crate::{ConfigParserError, ConfigParserResult},
    config::{Config, Environment, File, FileFormat},
    std::path::Path,
};

pub struct ConfigParser;

impl ConfigParser {
    /// Load a TOML file, then apply overrides from environment variables.
    ///
    /// Nested keys are separated by double underscores in variable names, e.g.
    /// `PAIR__SWAP_FEE_RATE_BPS=25` overrides `swap_fee_rate_bps` under the
    /// `[pair]` table.
    pub fn parse<D, P>(path: P) -> ConfigParserResult<D>
    where
        D: serde::de::DeserializeOwned,
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(ConfigParserError::NotFound {
                path: path.display().to_string(),
            });
        }

        let env_override = Environment::default().separator("__");

        let config = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(env_override)
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
