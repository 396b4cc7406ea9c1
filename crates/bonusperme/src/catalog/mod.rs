//! Benefit catalog: hand-authored national and regional templates plus the live snapshot cache.

pub mod cache;
mod national;
mod regional;

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::matcher::deadline;

pub use cache::{CacheStatus, CatalogCache, CatalogSource, SourceStatus, StaticCatalog};

/// Fixed category vocabulary shared by national and regional entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Famiglia,
    Casa,
    Salute,
    Istruzione,
    Spesa,
    Lavoro,
    Sostegno,
    Trasporti,
    Altro,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::Famiglia => "famiglia",
            Category::Casa => "casa",
            Category::Salute => "salute",
            Category::Istruzione => "istruzione",
            Category::Spesa => "spesa",
            Category::Lavoro => "lavoro",
            Category::Sostegno => "sostegno",
            Category::Trasporti => "trasporti",
            Category::Altro => "altro",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a deadline behaves over time (`tipo_scadenza` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineKind {
    Permanente,
    EsaurimentoFondi,
    BandoAnnuale,
    DataFissa,
}

impl DeadlineKind {
    pub const fn label(self) -> &'static str {
        match self {
            DeadlineKind::Permanente => "permanente",
            DeadlineKind::EsaurimentoFondi => "esaurimento_fondi",
            DeadlineKind::BandoAnnuale => "bando_annuale",
            DeadlineKind::DataFissa => "data_fissa",
        }
    }
}

/// One catalog entry. Fields below `deadline_kind` are refreshed out-of-band or computed per match
/// on a private copy; the shared catalog never carries a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitRecord {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "descrizione")]
    pub description: String,
    #[serde(rename = "importo")]
    pub amount: String,
    #[serde(rename = "scadenza")]
    pub deadline: String,
    #[serde(rename = "tipo_scadenza")]
    pub deadline_kind: DeadlineKind,
    #[serde(rename = "requisiti")]
    pub requirements: Vec<String>,
    #[serde(rename = "come_richiederlo")]
    pub how_to_apply: Vec<String>,
    #[serde(rename = "documenti", default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<String>,
    #[serde(
        rename = "riferimenti_normativi",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub legal_refs: Vec<String>,
    #[serde(rename = "ente")]
    pub authority: String,
    #[serde(rename = "link_ufficiale")]
    pub official_link: String,
    #[serde(rename = "link_ricerca", default, skip_serializing_if = "String::is_empty")]
    pub search_link: String,
    #[serde(rename = "regioni", default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<String>,
    #[serde(rename = "soglia_isee", default, skip_serializing_if = "Option::is_none")]
    pub isee_ceiling: Option<f64>,
    #[serde(
        rename = "ultimo_aggiornamento",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<String>,
    #[serde(rename = "stato", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "fonte_url", default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(rename = "link_verificato", default, skip_serializing_if = "Option::is_none")]
    pub link_verified: Option<bool>,
    #[serde(
        rename = "link_verificato_al",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub link_verified_on: Option<NaiveDate>,
    #[serde(rename = "compatibilita", default)]
    pub score: u8,
    #[serde(rename = "importo_reale", default, skip_serializing_if = "Option::is_none")]
    pub exact_amount: Option<String>,
    #[serde(rename = "risparmio_annuo", default)]
    pub estimated_saving: f64,
    #[serde(rename = "scaduto", default)]
    pub expired: bool,
}

impl BenefitRecord {
    /// Entries with a region list are only shown to residents of those regions.
    pub fn is_regional(&self) -> bool {
        !self.regions.is_empty()
    }

    /// Case-insensitive membership test against the applicable regions.
    pub fn applies_to_region(&self, region: &str) -> bool {
        let region = region.trim();
        if region.is_empty() {
            return false;
        }
        self.regions
            .iter()
            .any(|candidate| candidate.trim().eq_ignore_ascii_case(region))
    }
}

/// Static description used to author the built-in catalog.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BenefitTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub amount: &'static str,
    pub deadline: &'static str,
    pub requirements: &'static [&'static str],
    pub how_to_apply: &'static [&'static str],
    pub documents: &'static [&'static str],
    pub legal_refs: &'static [&'static str],
    pub authority: &'static str,
    pub official_link: &'static str,
    pub search_link: &'static str,
    pub regions: &'static [&'static str],
    pub isee_ceiling: Option<f64>,
}

impl BenefitTemplate {
    pub(crate) fn into_record(self) -> BenefitRecord {
        let owned = |items: &[&str]| items.iter().map(|item| item.to_string()).collect();
        BenefitRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category,
            description: self.description.to_string(),
            amount: self.amount.to_string(),
            deadline: self.deadline.to_string(),
            deadline_kind: deadline::classify(self.deadline),
            requirements: owned(self.requirements),
            how_to_apply: owned(self.how_to_apply),
            documents: owned(self.documents),
            legal_refs: owned(self.legal_refs),
            authority: self.authority.to_string(),
            official_link: self.official_link.to_string(),
            search_link: self.search_link.to_string(),
            regions: owned(self.regions),
            isee_ceiling: self.isee_ceiling,
            last_updated: None,
            status: None,
            source_url: None,
            link_verified: None,
            link_verified_on: None,
            score: 0,
            exact_amount: None,
            estimated_saving: 0.0,
            expired: false,
        }
    }
}

static BUILTIN: Lazy<Arc<[BenefitRecord]>> = Lazy::new(|| {
    national::templates()
        .into_iter()
        .chain(regional::templates())
        .map(BenefitTemplate::into_record)
        .collect::<Vec<_>>()
        .into()
});

/// The compiled-in catalog (national entries first, then regional ones).
pub fn builtin() -> Arc<[BenefitRecord]> {
    Arc::clone(&BUILTIN)
}

/// National entries only.
pub fn national() -> Vec<BenefitRecord> {
    builtin()
        .iter()
        .filter(|record| !record.is_regional())
        .cloned()
        .collect()
}

/// Regional entries only.
pub fn regional() -> Vec<BenefitRecord> {
    builtin()
        .iter()
        .filter(|record| record.is_regional())
        .cloned()
        .collect()
}

pub fn find<'a>(records: &'a [BenefitRecord], id: &str) -> Option<&'a BenefitRecord> {
    records.iter().find(|record| record.id == id)
}

/// Lowercase ASCII slug: every run of other characters collapses to one `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = builtin();
        let mut seen = HashSet::new();
        for record in catalog.iter() {
            assert!(seen.insert(record.id.as_str()), "duplicate id {}", record.id);
        }
        assert_eq!(national().len() + regional().len(), catalog.len());
    }

    #[test]
    fn builtin_templates_carry_scores_only_after_matching() {
        for record in builtin().iter() {
            assert_eq!(record.score, 0, "{} ships with a score", record.id);
            assert!(record.exact_amount.is_none());
            assert!(!record.expired);
            assert!(!record.official_link.is_empty(), "{} lacks a link", record.id);
        }
    }

    #[test]
    fn deadline_kinds_are_classified_at_load() {
        let catalog = builtin();
        let kind = |id: &str| find(&catalog, id).map(|record| record.deadline_kind);
        assert_eq!(kind("bonus-animali"), Some(DeadlineKind::Permanente));
        assert_eq!(kind("bonus-psicologo"), Some(DeadlineKind::BandoAnnuale));
        assert_eq!(kind("bonus-colonnine"), Some(DeadlineKind::EsaurimentoFondi));
        assert_eq!(kind("bonus-nido"), Some(DeadlineKind::DataFissa));
    }

    #[test]
    fn region_match_ignores_case_and_padding() {
        let catalog = builtin();
        let dote = find(&catalog, "lombardia-dote-scuola").expect("regional entry present");
        assert!(dote.applies_to_region(" lombardia "));
        assert!(dote.applies_to_region("LOMBARDIA"));
        assert!(!dote.applies_to_region("Lazio"));
        assert!(!dote.applies_to_region(""));
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Bonus Asilo Nido!! 2026 "), "bonus-asilo-nido-2026");
        assert_eq!(slugify("Città & Più"), "citt-pi");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn wire_format_uses_italian_field_names() {
        let catalog = builtin();
        let record = find(&catalog, "assegno-unico").expect("present");
        let json = serde_json::to_value(record).expect("serializes");
        assert_eq!(json["nome"], "Assegno Unico Universale");
        assert_eq!(json["categoria"], "famiglia");
        assert_eq!(json["tipo_scadenza"], "permanente");
        assert!(json.get("regioni").is_none());
        assert!(json.get("importo_reale").is_none());
    }
}
