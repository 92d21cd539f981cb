//! Filesystem locations.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "ncosearch";

/// Directory for trace files.
///
/// `$XDG_DATA_HOME/ncosearch` when set, else `~/.local/share/ncosearch`,
/// else `./.ncosearch` when no home directory is known.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env::var_os("XDG_DATA_HOME"), env::var_os("HOME"))
}

fn data_dir_from(xdg_data_home: Option<std::ffi::OsString>, home: Option<std::ffi::OsString>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    match home.filter(|v| !v.is_empty()) {
        Some(home) => PathBuf::from(home).join(".local").join("share").join(APP_DIR),
        None => PathBuf::from(format!(".{APP_DIR}")),
    }
}

/// Default config file: `$XDG_CONFIG_HOME/ncosearch/config.toml`, else
/// `~/.config/ncosearch/config.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(xdg) = env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg).join(APP_DIR).join("config.toml"));
    }
    env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(|home| PathBuf::from(home).join(".config").join(APP_DIR).join("config.toml"))
}

/// Expands a leading `~` to the home directory. Other paths, and all paths
/// when `HOME` is unset, are returned unchanged.
///
/// # Examples
///
/// ```
/// use ncosearch::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/etc/ncosearch.toml"), "/etc/ncosearch.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, env::var("HOME").ok().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> String {
    match (path, home) {
        ("~", Some(home)) => home.to_string(),
        (p, Some(home)) if p.starts_with("~/") => format!("{home}{}", &p[1..]),
        (p, _) => p.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xdg_data_home_wins() {
        let dir = data_dir_from(Some("/xdg".into()), Some("/home/asha".into()));
        assert_eq!(dir, PathBuf::from("/xdg/ncosearch"));
    }

    #[test]
    fn falls_back_to_home_then_cwd() {
        assert_eq!(
            data_dir_from(None, Some("/home/asha".into())),
            PathBuf::from("/home/asha/.local/share/ncosearch")
        );
        assert_eq!(data_dir_from(Some("".into()), None), PathBuf::from(".ncosearch"));
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde_with("~/themes/x.toml", Some("/home/asha")), "/home/asha/themes/x.toml");
        assert_eq!(expand_tilde_with("~", Some("/home/asha")), "/home/asha");
        assert_eq!(expand_tilde_with("~/x", None), "~/x");
        assert_eq!(expand_tilde_with("/abs", Some("/home/asha")), "/abs");
    }
}
