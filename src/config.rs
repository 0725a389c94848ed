use confique::{yaml::FormatOptions, Config as _};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Confique(#[from] confique::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not determine config dir parent path")]
    ParentPath,

    #[error(transparent)]
    Xdg(#[from] xdg::BaseDirectoriesError),
}

#[derive(Clone, Debug, Serialize, Deserialize, confique::Config)]
pub struct Config {
    /// Site title shown in the page title and navbar. Defaults to "Scoreboard"
    #[config(env = "SCOREBOARD_TITLE")]
    pub title: Option<String>,

    /// Enable team support
    #[config(env = "SCOREBOARD_TEAMS", default = false)]
    pub teams: bool,

    /// Address the HTTP server listens on
    #[config(env = "SCOREBOARD_BIND_ADDRESS", default = "127.0.0.1:3000")]
    pub bind_address: String,

    /// Directory served under /static
    #[config(default = "static")]
    pub static_dir: PathBuf,

    /// Only send the session cookie over HTTPS
    #[config(env = "SCOREBOARD_SECURE_COOKIES", default = false)]
    pub secure_cookies: bool,

    /// Base64 encoded session key (at least 64 bytes once decoded)
    #[config(env = "SCOREBOARD_SESSION_KEY")]
    pub session_key: Option<String>,
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Config> {
        let config_path = get_config_path(config_path)?;
        let config = Config::builder().env().file(config_path).load()?;

        Ok(config)
    }
}

pub fn init_config(config_path: Option<PathBuf>) -> Result<()> {
    // @TODO this will overwrite an existing config with no warning.
    let config_path = write_config_template(config_path)?;

    println!("Configuration file created: {}", config_path.display());

    Ok(())
}

pub fn get_config_template() -> String {
    confique::yaml::template::<Config>(FormatOptions::default())
}

pub fn print_config_template() {
    println!("{}", get_config_template());
}

pub fn get_config_path(config_path: Option<PathBuf>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path),
        None => {
            let xdg_dirs = xdg::BaseDirectories::with_prefix("scoreboard")?;
            Ok(xdg_dirs.get_config_file("config.yml"))
        }
    }
}

pub fn write_config_template(config_path: Option<PathBuf>) -> Result<PathBuf> {
    let config_path = get_config_path(config_path)?;
    let config_template = get_config_template();

    let config_path_dir = config_path.parent().ok_or(Error::ParentPath)?;

    std::fs::create_dir_all(config_path_dir)?;
    std::fs::write(config_path.clone(), config_template)?;

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Loads only the file layer so the environment cannot leak in.
    fn load_file(path: &std::path::Path) -> Config {
        Config::builder().file(path).load().unwrap()
    }

    #[test]
    fn template_documents_every_key() {
        let template = get_config_template();

        for key in [
            "title",
            "teams",
            "bind_address",
            "static_dir",
            "secure_cookies",
            "session_key",
        ] {
            assert!(template.contains(key), "missing {key} in template");
        }
    }

    #[test]
    fn explicit_path_is_used_as_is() {
        let path = PathBuf::from("/tmp/custom.yml");

        assert_eq!(get_config_path(Some(path.clone())).unwrap(), path);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("defaults.yml");
        std::fs::write(&path, "bind_address: \"0.0.0.0:8080\"\n").unwrap();

        let config = load_file(&path);

        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert!(config.title.is_none());
        assert!(!config.teams);
        assert!(!config.secure_cookies);
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.yml");
        std::fs::write(
            &path,
            "title: Hack the Planet\nteams: true\nsecure_cookies: true\n",
        )
        .unwrap();

        let config = load_file(&path);

        assert_eq!(config.title.as_deref(), Some("Hack the Planet"));
        assert!(config.teams);
        assert!(config.secure_cookies);
    }

    #[test]
    fn written_template_lands_at_requested_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.yml");

        let written = write_config_template(Some(path.clone())).unwrap();

        assert_eq!(written, path);
        assert_eq!(std::fs::read_to_string(path).unwrap(), get_config_template());
    }
}
