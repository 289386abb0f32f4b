// Target configurations - the collection goals a run measures progress against
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::errors::{Result, TrackerError};
use crate::v_debug;

/// Authored goal document: item id to required quantity, split by namespace.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TargetConfiguration {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub currencies: BTreeMap<String, i64>,
    #[serde(default)]
    pub materials: BTreeMap<String, i64>,
}

impl TargetConfiguration {
    pub fn currency_ids(&self) -> HashSet<String> {
        self.currencies.keys().cloned().collect()
    }

    pub fn material_ids(&self) -> HashSet<String> {
        self.materials.keys().cloned().collect()
    }

    pub fn from_json(path: &str, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TrackerError::Targets {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

/// File names of the target configurations directly inside `dir`, sorted by
/// name. Symlinks to files are included; subdirectories are not searched.
pub fn discover(dir: &str) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| TrackerError::Targets {
        path: dir.to_string(),
        reason: e.to_string(),
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.path().is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    if names.is_empty() {
        return Err(TrackerError::Targets {
            path: dir.to_string(),
            reason: "no target configurations found".to_string(),
        });
    }
    v_debug!("📁 Found {} target configurations in {}", names.len(), dir);
    Ok(names)
}

pub fn load(dir: &str, name: &str) -> Result<TargetConfiguration> {
    let path = Path::new(dir).join(name);
    let display = path.display().to_string();
    let json = fs::read_to_string(&path).map_err(|e| TrackerError::Targets {
        path: display.clone(),
        reason: e.to_string(),
    })?;
    TargetConfiguration::from_json(&display, &json)
}

/// Picks one of the discovered configurations.
pub trait TargetSelector {
    /// Index into `available` of the configuration to load.
    fn select(&self, available: &[String]) -> Result<usize>;
}

/// Non-interactive choice, by position or by file name.
#[derive(Debug, Clone, PartialEq)]
pub enum FixedSelector {
    Index(usize),
    Name(String),
}

impl FixedSelector {
    /// A purely numeric argument selects by index, anything else by name.
    pub fn parse(arg: &str) -> Self {
        match arg.trim().parse::<usize>() {
            Ok(index) => FixedSelector::Index(index),
            Err(_) => FixedSelector::Name(arg.to_string()),
        }
    }
}

impl TargetSelector for FixedSelector {
    fn select(&self, available: &[String]) -> Result<usize> {
        match self {
            FixedSelector::Index(index) if *index < available.len() => Ok(*index),
            FixedSelector::Index(index) => Err(TrackerError::Targets {
                path: index.to_string(),
                reason: format!("no configuration with ID {} ({} available)", index, available.len()),
            }),
            FixedSelector::Name(name) => available
                .iter()
                .position(|candidate| candidate == name)
                .ok_or_else(|| TrackerError::Targets {
                    path: name.clone(),
                    reason: "no configuration with that name".to_string(),
                }),
        }
    }
}

/// Lists the configurations and reads the chosen ID from stdin.
pub struct PromptSelector;

impl TargetSelector for PromptSelector {
    fn select(&self, available: &[String]) -> Result<usize> {
        print_available(available);
        print!("Enter the ID corresponding to the configuration to load: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        let index = input.trim().parse::<usize>().map_err(|_| TrackerError::Targets {
            path: input.trim().to_string(),
            reason: "expected a numeric configuration ID".to_string(),
        })?;
        FixedSelector::Index(index).select(available)
    }
}

pub fn print_available(available: &[String]) {
    for (index, name) in available.iter().enumerate() {
        println!("Choose ID: {} for {}.", index, name);
    }
}

/// Discover, select and load in one step.
pub fn choose(dir: &str, selector: &dyn TargetSelector) -> Result<TargetConfiguration> {
    let available = discover(dir)?;
    let index = selector.select(&available)?;
    let name = available.get(index).ok_or_else(|| TrackerError::Targets {
        path: dir.to_string(),
        reason: format!("selected ID {} is out of range", index),
    })?;
    load(dir, name)
}
