//! Enemy catalog - enemy templates keyed by type, plus level banding

mod template;

pub use template::EnemyTemplate;

use crate::combatant::Enemy;
use crate::error::{GameError, Result};
use std::collections::HashMap;

/// Enemy type registry
#[derive(Debug, Clone, Default)]
pub struct EnemyCatalog {
    /// Mapping from enemy type key to template
    templates: HashMap<String, EnemyTemplate>,
}

impl EnemyCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        EnemyCatalog {
            templates: HashMap::new(),
        }
    }

    /// The built-in goblin / orc / dragon catalog
    pub fn with_defaults() -> Self {
        crate::config::default_enemy_catalog()
    }

    /// Register an enemy type, replacing any template with the same id
    pub fn register(&mut self, template: EnemyTemplate) {
        self.templates.insert(template.id.clone(), template);
    }

    pub fn get(&self, id: &str) -> Option<&EnemyTemplate> {
        self.templates.get(id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Enemy type keys, weakest tier first
    pub fn ids(&self) -> Vec<&str> {
        let mut templates: Vec<&EnemyTemplate> = self.templates.values().collect();
        templates.sort_by(|a, b| a.min_level.cmp(&b.min_level).then_with(|| a.id.cmp(&b.id)));
        templates.into_iter().map(|t| t.id.as_str()).collect()
    }

    /// Create a fresh enemy of the given type
    pub fn create_enemy(&self, id: &str) -> Result<Enemy> {
        self.get(id)
            .map(EnemyTemplate::spawn)
            .ok_or_else(|| GameError::InvalidTarget(id.to_string()))
    }

    /// Pick the tier for a character level
    ///
    /// The template with the highest `min_level` not above `level` wins. Levels
    /// below every tier get the weakest tier.
    pub fn template_for_level(&self, level: u32) -> Option<&EnemyTemplate> {
        self.templates
            .values()
            .filter(|t| t.min_level <= level)
            .max_by(|a, b| a.min_level.cmp(&b.min_level).then_with(|| b.id.cmp(&a.id)))
            .or_else(|| {
                self.templates
                    .values()
                    .min_by(|a, b| a.min_level.cmp(&b.min_level).then_with(|| a.id.cmp(&b.id)))
            })
    }

    /// Create a fresh enemy appropriate for a character level
    pub fn enemy_for_level(&self, level: u32) -> Result<Enemy> {
        self.template_for_level(level)
            .map(EnemyTemplate::spawn)
            .ok_or_else(|| GameError::InvalidTarget(format!("no enemy for level {}", level)))
    }
}
