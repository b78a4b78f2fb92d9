//! Loads the project configuration from a `deitheon.yaml` file, searching
//! upward from the invocation directory so the tool can be run from anywhere
//! inside the project tree.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use url::Url;

const PROJECT_FILE: &str = "deitheon.yaml";

#[derive(Deserialize)]
struct BaseDate(NaiveDate);
impl Default for BaseDate {
    fn default() -> Self {
        BaseDate(NaiveDate::from_ymd_opt(2025, 11, 8).unwrap())
    }
}

#[derive(Deserialize)]
struct FeaturedPerCategory(usize);
impl Default for FeaturedPerCategory {
    fn default() -> Self {
        FeaturedPerCategory(2)
    }
}

#[derive(Deserialize)]
struct Project {
    pub site_root: Url,

    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    #[serde(default)]
    pub base_date: BaseDate,

    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub featured_per_category: FeaturedPerCategory,
}

pub struct Config {
    pub site_root: Url,
    pub output_directory: PathBuf,
    pub base_date: NaiveDate,
    pub seed: Option<u64>,
    pub featured_per_category: usize,
}

impl Config {
    /// Searches `dir` and its parents for a `deitheon.yaml` project file and
    /// loads it. `seed` overrides the project file's seed when given.
    pub fn from_directory(dir: &Path, seed: Option<u64>) -> Result<Config> {
        let path = dir.join(PROJECT_FILE);
        if path.exists() {
            match Config::from_project_file(&path, seed) {
                Ok(config) => Ok(config),
                Err(e) => Err(anyhow!("Loading configuration: {:?}", e)),
            }
        } else {
            match dir.parent() {
                Some(parent) => Config::from_directory(parent, seed),
                None => Err(anyhow!(
                    "Could not find `{}` in any parent directory",
                    PROJECT_FILE
                )),
            }
        }
    }

    pub fn from_project_file(path: &Path, seed: Option<u64>) -> Result<Config> {
        let file = File::open(path)
            .map_err(|e| anyhow!("Opening project file `{}`: {}", path.display(), e))?;
        let project: Project = serde_yaml::from_reader(file)?;
        match path.parent() {
            None => Err(anyhow!(
                "Can't get parent directory for provided project file path '{:?}'",
                path
            )),
            Some(project_root) => Ok(Config {
                site_root: project.site_root,
                output_directory: match project.output_directory {
                    // Relative paths in the project file resolve against the
                    // project root, not the working directory.
                    Some(dir) => project_root.join(dir),
                    None => project_root.to_path_buf(),
                },
                base_date: project.base_date.0,
                seed: seed.or(project.seed),
                featured_per_category: project.featured_per_category.0,
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn test_loads_from_parent_directory() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join(PROJECT_FILE),
            "site_root: https://deitheon.com\nseed: 7\n",
        )
        .unwrap();
        let nested = tmp.path().join("articles/science");
        fs::create_dir_all(&nested).unwrap();

        let config = Config::from_directory(&nested, None).unwrap();
        assert_eq!("https://deitheon.com/", config.site_root.as_str());
        assert_eq!(tmp.path(), config.output_directory);
        assert_eq!(Some(7), config.seed);
        assert_eq!(NaiveDate::from_ymd_opt(2025, 11, 8).unwrap(), config.base_date);
        assert_eq!(2, config.featured_per_category);
    }

    #[test]
    fn test_flag_seed_overrides_project_seed() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(PROJECT_FILE);
        fs::write(&path, "site_root: https://deitheon.com\nseed: 7\n").unwrap();
        let config = Config::from_project_file(&path, Some(42)).unwrap();
        assert_eq!(Some(42), config.seed);
    }

    #[test]
    fn test_explicit_fields_respected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(PROJECT_FILE);
        fs::write(
            &path,
            "site_root: https://deitheon.com\n\
             output_directory: public\n\
             base_date: 2024-01-15\n\
             featured_per_category: 3\n",
        )
        .unwrap();
        let config = Config::from_project_file(&path, None).unwrap();
        assert_eq!(tmp.path().join("public"), config.output_directory);
        assert_eq!(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), config.base_date);
        assert_eq!(None, config.seed);
        assert_eq!(3, config.featured_per_category);
    }

    #[test]
    fn test_missing_project_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(Config::from_directory(tmp.path(), None).is_err());
    }
}
