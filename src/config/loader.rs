//! Load simulation configs from JSON

use super::{ConfigError, SimulationConfig};
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load a config from a JSON file
///
/// Missing fields take their defaults. The result is not validated; call
/// [`SimulationConfig::validate`] before trusting user-supplied values.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SimulationConfig, ConfigError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let config = load_config_from_reader(BufReader::new(file))?;
    debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Load a config from any JSON reader
pub fn load_config_from_reader<R: Read>(reader: R) -> Result<SimulationConfig, ConfigError> {
    Ok(serde_json::from_reader(reader)?)
}
