//! Process-wide theme schema registry.
//!
//! # Responsibility
//! - Resolve a theme id to its ordered field schema.
//! - Build the partial record of declared defaults for a theme.
//!
//! # Invariants
//! - Built once on first use and never mutated afterwards.
//! - Lookups never fail: unknown ids resolve to the generic schema.

use crate::model::value::FieldMap;
use crate::theme::catalog::{GENERIC_FIELDS, THEMES};
use crate::theme::schema::{FieldSchema, ThemeId, ThemeInfo};
use log::debug;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::builtin);

/// Read-only index over the built-in theme catalog.
#[derive(Debug)]
pub struct ThemeRegistry {
    themes: BTreeMap<ThemeId, &'static ThemeInfo>,
}

impl ThemeRegistry {
    fn builtin() -> Self {
        let themes = THEMES.iter().map(|theme| (theme.id, theme)).collect();
        Self { themes }
    }

    pub fn get(&self, id: ThemeId) -> Option<&'static ThemeInfo> {
        self.themes.get(&id).copied()
    }

    /// Resolves a user-facing theme id string.
    pub fn lookup(&self, theme_id: &str) -> Option<&'static ThemeInfo> {
        theme_id
            .parse::<ThemeId>()
            .ok()
            .and_then(|id| self.get(id))
    }

    /// Ordered schema for `theme_id`, or the generic schema when unknown.
    pub fn schema_for(&self, theme_id: &str) -> &'static [FieldSchema] {
        match self.lookup(theme_id) {
            Some(theme) => theme.fields,
            None => {
                debug!(
                    "event=theme_lookup module=theme status=fallback requested_len={}",
                    theme_id.len()
                );
                GENERIC_FIELDS
            }
        }
    }

    /// Declared defaults of `theme_id`, in schema order.
    pub fn defaults_for(&self, theme_id: &str) -> FieldMap {
        self.schema_for(theme_id)
            .iter()
            .filter_map(|field| {
                field
                    .default
                    .map(|value| (field.key.to_string(), value.to_field_value()))
            })
            .collect()
    }

    /// Catalog entries in display order.
    pub fn themes(&self) -> impl Iterator<Item = &'static ThemeInfo> + '_ {
        self.themes.values().copied()
    }
}

/// Returns the shared registry, building it on first access.
pub fn registry() -> &'static ThemeRegistry {
    &REGISTRY
}

pub fn schema_for(theme_id: &str) -> &'static [FieldSchema] {
    registry().schema_for(theme_id)
}

pub fn defaults_for(theme_id: &str) -> FieldMap {
    registry().defaults_for(theme_id)
}

pub fn list_themes() -> Vec<&'static ThemeInfo> {
    registry().themes().collect()
}
