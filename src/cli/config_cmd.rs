//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;
use crate::domain::recorder::RecorderKind;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    // Validate value based on key type
    validate_config_value(key, value)?;

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "recorder" => config.recorder = Some(value.to_string()),
        "recordings_dir" => config.recordings_dir = Some(value.into()),
        "sound" => {
            config.sound = Some(parse_bool(value).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be 'true' or 'false'".to_string(),
            })?)
        }
        "stop_timeout" => config.stop_timeout = Some(parse_secs(key, value)?),
        "action_timeout" => config.action_timeout = Some(parse_secs(key, value)?),
        _ => unreachable!(), // Already validated
    }

    // Save config
    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "recorder" => config.recorder,
        "recordings_dir" => config
            .recordings_dir
            .map(|p| p.to_string_lossy().into_owned()),
        "sound" => config.sound.map(|b| b.to_string()),
        "stop_timeout" => config.stop_timeout.map(|s| s.to_string()),
        "action_timeout" => config.action_timeout.map(|s| s.to_string()),
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "recorder",
        config.recorder.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "recordings_dir",
        &config
            .recordings_dir
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "sound",
        &config
            .sound
            .map(|b| b.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "stop_timeout",
        &config
            .stop_timeout
            .map(|s| s.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "action_timeout",
        &config
            .action_timeout
            .map(|s| s.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "recorder" => {
            value
                .parse::<RecorderKind>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        "sound" => {
            parse_bool(value).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be 'true' or 'false'".to_string(),
            })?;
        }
        "stop_timeout" | "action_timeout" => {
            parse_secs(key, value)?;
        }
        _ => {} // recordings_dir accepts any path
    }
    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

/// Parse a timeout in whole seconds
fn parse_secs(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be a number of seconds".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("yes"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("invalid").is_err());
    }

    #[test]
    fn validate_recorder_valid() {
        assert!(validate_config_value("recorder", "wl-screenrec").is_ok());
        assert!(validate_config_value("recorder", "wf-recorder").is_ok());
    }

    #[test]
    fn validate_recorder_invalid() {
        assert!(validate_config_value("recorder", "obs").is_err());
    }

    #[test]
    fn validate_timeout_valid() {
        assert!(validate_config_value("stop_timeout", "30").is_ok());
        assert!(validate_config_value("action_timeout", "0").is_ok());
    }

    #[test]
    fn validate_timeout_invalid() {
        assert!(validate_config_value("stop_timeout", "30s").is_err());
        assert!(validate_config_value("action_timeout", "-1").is_err());
    }

    #[test]
    fn validate_recordings_dir_accepts_any_path() {
        assert!(validate_config_value("recordings_dir", "/tmp/recordings").is_ok());
    }
}
