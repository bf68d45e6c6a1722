use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use crate::io;
use anyhow::Result;
use std::path::Path;

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(Path::new(CONFIG_FILE_NAME), force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG_TEMPLATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);

        init_config_at(&path, false).unwrap();
        let config = load_config_from(&path).unwrap();
        assert!(config.inputs.is_some());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "# mine").unwrap();

        assert!(init_config_at(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        init_config_at(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("[policy]"));
    }
}
