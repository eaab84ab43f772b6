use crate::config::{DirEntry, NotaConfig, OptionSection, CONFIG_FILENAME};
use crate::error::{NotaError, Result};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Overrides the platform config directory when set.
pub const CONFIG_HOME_ENV: &str = "NOTA_CONFIG_HOME";

const BUNDLED_TEMPLATES: &[(&str, &str)] = &[
    ("defect.md", include_str!("templates/defect.md")),
    ("bug.md", include_str!("templates/bug.md")),
    ("story.md", include_str!("templates/story.md")),
    ("feature.md", include_str!("templates/feature.md")),
];

/// Where the configuration and the bundled templates live.
pub fn config_home() -> Result<PathBuf> {
    if let Some(home) = env::var_os(CONFIG_HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("", "", "nota")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(NotaError::ConfigHome)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    /// True when the config home was populated during this call.
    pub bootstrapped: bool,
}

/// Find an existing config file without touching the filesystem.
///
/// An explicit path must exist. Otherwise `<config-home>/config.json` is returned when
/// present, and `None` when it is not.
pub fn find_config(
    explicit: Option<&Path>,
    config_home: &Path,
) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(NotaError::ConfigNotFound(path.to_path_buf()));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let path = config_home.join(CONFIG_FILENAME);
    Ok(path.exists().then_some(path))
}

/// Resolve the config file to load, bootstrapping the config home on first run.
pub fn locate_config(explicit: Option<&Path>, config_home: &Path) -> Result<ConfigLocation> {
    if let Some(path) = find_config(explicit, config_home)? {
        return Ok(ConfigLocation {
            path,
            bootstrapped: false,
        });
    }

    let path = bootstrap(config_home)?;
    Ok(ConfigLocation {
        path,
        bootstrapped: true,
    })
}

/// Copy the bundled templates into `config_home` (keeping any that already exist)
/// and write the default config file.
pub fn bootstrap(config_home: &Path) -> Result<PathBuf> {
    fs::create_dir_all(config_home)?;

    for (file, contents) in BUNDLED_TEMPLATES {
        let target = config_home.join(file);
        if !target.exists() {
            fs::write(&target, contents)?;
        }
    }

    let path = config_home.join(CONFIG_FILENAME);
    default_config(config_home).save(&path)?;
    info!(home = %config_home.display(), "bootstrapped configuration");
    Ok(path)
}

pub fn default_config(config_home: &Path) -> NotaConfig {
    let mut config = NotaConfig::default();
    config.sections.insert(
        "defect".to_string(),
        OptionSection {
            template: Some(
                config_home
                    .join("defect.md")
                    .to_string_lossy()
                    .into_owned(),
            ),
            directories: Some(DirEntry::from(vec!["logs"])),
            filename: Some("defect_$id.md".to_string()),
        },
    );
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("custom.json");

        let err = locate_config(Some(&missing), temp.path()).unwrap_err();
        assert!(matches!(err, NotaError::ConfigNotFound(_)));
        assert!(!temp.path().join(CONFIG_FILENAME).exists());
    }

    #[test]
    fn test_explicit_config_used_as_is() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("custom.json");
        fs::write(&custom, "{}").unwrap();

        let location = locate_config(Some(&custom), temp.path()).unwrap();
        assert_eq!(location.path, custom);
        assert!(!location.bootstrapped);
    }

    #[test]
    fn test_first_run_bootstraps() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("nota");

        let location = locate_config(None, &home).unwrap();

        assert!(location.bootstrapped);
        assert_eq!(location.path, home.join(CONFIG_FILENAME));
        for (file, _) in BUNDLED_TEMPLATES {
            assert!(home.join(file).is_file(), "missing {file}");
        }
        let config = NotaConfig::load(&location.path).unwrap();
        assert_eq!(config, default_config(&home));
    }

    #[test]
    fn test_second_run_reuses_config() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().to_path_buf();
        fs::write(home.join(CONFIG_FILENAME), r#"{"root": "/x"}"#).unwrap();

        let location = locate_config(None, &home).unwrap();
        assert!(!location.bootstrapped);
        assert!(!home.join("bug.md").exists());
    }

    #[test]
    fn test_find_config_never_bootstraps() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("nota");

        assert_eq!(find_config(None, &home).unwrap(), None);
        assert!(!home.exists());

        let missing = temp.path().join("custom.json");
        let err = find_config(Some(&missing), &home).unwrap_err();
        assert!(matches!(err, NotaError::ConfigNotFound(_)));

        fs::create_dir_all(&home).unwrap();
        fs::write(home.join(CONFIG_FILENAME), "{}").unwrap();
        assert_eq!(
            find_config(None, &home).unwrap(),
            Some(home.join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_bootstrap_keeps_user_templates() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bug.md"), "mine").unwrap();

        bootstrap(temp.path()).unwrap();

        assert_eq!(fs::read_to_string(temp.path().join("bug.md")).unwrap(), "mine");
    }

    #[test]
    fn test_default_config_shape() {
        let config = default_config(Path::new("/cfg"));
        let defect = config.section("defect").unwrap();
        assert_eq!(defect.template.as_deref(), Some("/cfg/defect.md"));
        assert_eq!(defect.filename.as_deref(), Some("defect_$id.md"));
        assert_eq!(defect.directories, Some(DirEntry::from(vec!["logs"])));
    }
}
