//! The icon catalog.
//!
//! A [`Catalog`] is an immutable, ordered list of [`IconRecord`]s with unique
//! names. The crate ships a bundled dataset (`data/icons.toml`) which is parsed
//! and validated by [`Catalog::load`]; hosts can also supply their own dataset
//! in the same format through [`Catalog::from_toml_str`].
//!
//! # Dataset Format
//!
//! ```toml
//! [[icon]]
//! name = "account"
//! codepoint = 0xF0004
//! keywords = ["person", "user"]
//! ```
//!
//! Only `name` is required.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, OnceLock};

use mdi_picker_core::PerfSpan;
use mdi_picker_core::logging::targets;
use serde::Deserialize;

use crate::error::CatalogError;

/// The bundled MDI dataset.
const BUNDLED_DATASET: &str = include_str!("../data/icons.toml");

/// Prefix MDI stylesheets use for icon classes.
pub const CSS_CLASS_PREFIX: &str = "mdi-";

/// A single selectable icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRecord {
    name: String,
    codepoint: Option<u32>,
    keywords: BTreeSet<String>,
    /// Lowercased name, precomputed for filtering.
    folded_name: String,
    /// Lowercased keywords, precomputed for filtering.
    folded_keywords: Vec<String>,
}

impl IconRecord {
    /// Creates a record from a name and its keywords.
    ///
    /// Keywords are trimmed and blank keywords are dropped.
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into().trim().to_string();
        let keywords: BTreeSet<String> = keywords
            .into_iter()
            .map(|k| k.into().trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        let folded_keywords = keywords.iter().map(|k| k.to_lowercase()).collect();
        Self {
            folded_name: name.to_lowercase(),
            name,
            codepoint: None,
            keywords,
            folded_keywords,
        }
    }

    /// Sets the glyph codepoint.
    pub fn with_codepoint(mut self, codepoint: u32) -> Self {
        self.codepoint = Some(codepoint);
        self
    }

    /// The unique, stable identifier of this icon.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The searchable keywords of this icon.
    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }

    /// The glyph position in the MDI webfont, if known.
    pub fn codepoint(&self) -> Option<u32> {
        self.codepoint
    }

    /// The glyph as a `char`, if the codepoint is a valid scalar value.
    pub fn glyph(&self) -> Option<char> {
        self.codepoint.and_then(char::from_u32)
    }

    /// The stylesheet class for this icon, e.g. `mdi-account`.
    pub fn css_class(&self) -> String {
        format!("{CSS_CLASS_PREFIX}{}", self.name)
    }

    /// Whether this record matches an already normalised (trimmed,
    /// lowercased) needle. An empty needle matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        self.folded_name.contains(needle)
            || self.folded_keywords.iter().any(|k| k.contains(needle))
    }
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default, rename = "icon")]
    icons: Vec<RawIcon>,
}

#[derive(Debug, Deserialize)]
struct RawIcon {
    name: Option<String>,
    codepoint: Option<u32>,
    #[serde(default)]
    keywords: Vec<String>,
}

/// An ordered, immutable set of icon records with unique names.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<IconRecord>,
    by_name: HashMap<String, usize>,
}

static BUNDLED: OnceLock<Arc<Catalog>> = OnceLock::new();

impl Catalog {
    /// Parses and validates the bundled dataset.
    pub fn load() -> Result<Self, CatalogError> {
        let _span = PerfSpan::new("catalog_load");
        let catalog = Self::from_toml_str(BUNDLED_DATASET)?;
        tracing::debug!(
            target: targets::CATALOG,
            icons = catalog.len(),
            "loaded bundled icon catalog"
        );
        Ok(catalog)
    }

    /// Returns the process-wide bundled catalog, loading it on first use.
    pub fn bundled() -> Result<Arc<Self>, CatalogError> {
        if let Some(catalog) = BUNDLED.get() {
            return Ok(Arc::clone(catalog));
        }
        let loaded = Arc::new(Self::load()?);
        Ok(Arc::clone(BUNDLED.get_or_init(|| loaded)))
    }

    /// Parses a dataset in the bundled TOML format.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(source)?;
        let mut records = Vec::with_capacity(raw.icons.len());

        for (index, icon) in raw.icons.into_iter().enumerate() {
            let name = icon
                .name
                .filter(|n| !n.trim().is_empty())
                .ok_or_else(|| CatalogError::missing_field(index, "name"))?;
            let mut record = IconRecord::new(name, icon.keywords);
            if let Some(codepoint) = icon.codepoint {
                record = record.with_codepoint(codepoint);
            }
            records.push(record);
        }

        Self::from_records(records)
    }

    /// Builds a catalog from records, validating that names are present and unique.
    pub fn from_records(records: Vec<IconRecord>) -> Result<Self, CatalogError> {
        let mut by_name = HashMap::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if record.name.is_empty() {
                return Err(CatalogError::missing_field(index, "name"));
            }
            if let Some(&first) = by_name.get(&record.name) {
                tracing::error!(
                    target: targets::CATALOG,
                    name = %record.name,
                    first,
                    second = index,
                    "duplicate icon name"
                );
                return Err(CatalogError::duplicate(&record.name, first, index));
            }
            by_name.insert(record.name.clone(), index);
        }

        Ok(Self { records, by_name })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[IconRecord] {
        &self.records
    }

    /// Iterates over records in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, IconRecord> {
        self.records.iter()
    }

    /// Looks up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&IconRecord> {
        self.position(name).map(|i| &self.records[i])
    }

    /// Whether a record with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Position of the named record in catalog order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a IconRecord;
    type IntoIter = std::slice::Iter<'a, IconRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Catalog: Send, Sync);
