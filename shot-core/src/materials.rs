//! Ball and condition configuration loader.
//!
//! Loads ball properties and simulation conditions from YAML files, so new
//! balls or playing conditions need no recompile.
//!
//! ## Directory Structure
//!
//! ```text
//! materials/
//! ├── balls/
//! │   ├── regulation.yaml
//! │   └── range_ball.yaml
//! └── conditions/
//!     ├── sea_level.yaml
//!     └── high_altitude.yaml
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::error::MaterialError;
use crate::simulation::{ShotSimulator, SimulationConfig};
use crate::types::BallProperties;

/// Material loader with configurable base directory.
pub struct MaterialLoader {
    base_path: PathBuf,
}

impl MaterialLoader {
    /// Create a new loader with the given base path.
    ///
    /// The base path should contain `balls/` and `conditions/` subdirectories.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Load and validate a ball by name (without .yaml extension).
    ///
    /// # Example
    /// ```ignore
    /// let loader = MaterialLoader::new("materials");
    /// let ball = loader.load_ball("regulation")?;
    /// ```
    pub fn load_ball(&self, name: &str) -> Result<BallProperties, MaterialError> {
        let ball: BallProperties = self.load("balls", name)?;
        ball.validate()?;
        Ok(ball)
    }

    /// Load and validate simulation conditions by name.
    ///
    /// Fields missing from the file take their default values.
    pub fn load_conditions(&self, name: &str) -> Result<SimulationConfig, MaterialError> {
        let config: SimulationConfig = self.load("conditions", name)?;
        config.validate(name)?;
        Ok(config)
    }

    /// Build a simulator from a named ball and named conditions.
    pub fn simulator(&self, ball: &str, conditions: &str) -> Result<ShotSimulator, MaterialError> {
        Ok(ShotSimulator::new(
            self.load_ball(ball)?,
            self.load_conditions(conditions)?,
        ))
    }

    /// List all available balls.
    pub fn list_balls(&self) -> Result<Vec<String>, MaterialError> {
        self.list_materials("balls")
    }

    /// List all available conditions.
    pub fn list_conditions(&self) -> Result<Vec<String>, MaterialError> {
        self.list_materials("conditions")
    }

    fn load<T: DeserializeOwned>(&self, subdir: &str, name: &str) -> Result<T, MaterialError> {
        let path = self.base_path.join(subdir).join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(MaterialError::NotFound(name.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        let value = serde_yaml::from_str(&contents)?;
        info!("Loaded {} '{}' from {}", subdir, name, path.display());
        Ok(value)
    }

    fn list_materials(&self, subdir: &str) -> Result<Vec<String>, MaterialError> {
        let path = self.base_path.join(subdir);
        if !path.exists() {
            debug!("No {} directory at {}", subdir, path.display());
            return Ok(vec![]);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if let Some(stem) = name.strip_suffix(".yaml") {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// Tests
// =============================================================================
