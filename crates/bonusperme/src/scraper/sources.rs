use serde::Serialize;

/// Who publishes a source; drives how much its pages are trusted during merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Inps,
    Ade,
    Mef,
    Editorial,
}

/// A page fetched on every refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    pub name: String,
    pub url: String,
    pub kind: SourceKind,
    /// 1 = primary, 2 = secondary, 3 = backup.
    pub priority: u8,
}

impl Source {
    pub fn new(name: &str, url: &str, kind: SourceKind, priority: u8) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            kind,
            priority,
        }
    }

    /// Authority label stamped on entries found on this page.
    pub fn authority(&self) -> &'static str {
        match self.kind {
            SourceKind::Inps => "INPS",
            SourceKind::Ade => "Agenzia delle Entrate",
            SourceKind::Mef => "MEF",
            SourceKind::Editorial => "Fonte editoriale",
        }
    }
}

pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new(
            "INPS Genitori",
            "https://www.inps.it/it/it/sostegni-sussidi-indennita/per-genitori.html",
            SourceKind::Inps,
            1,
        ),
        Source::new(
            "INPS Famiglie",
            "https://www.inps.it/it/it/sostegni-sussidi-indennita/per-famiglie.html",
            SourceKind::Inps,
            1,
        ),
        Source::new(
            "AdE Casa",
            "https://www.agenziaentrate.gov.it/portale/web/guest/aree-tematiche/casa/agevolazioni",
            SourceKind::Ade,
            1,
        ),
        Source::new(
            "AdE Agevolazioni",
            "https://www.agenziaentrate.gov.it/portale/web/guest/agevolazioni",
            SourceKind::Ade,
            1,
        ),
        Source::new("MEF", "https://www.mef.gov.it", SourceKind::Mef, 1),
        Source::new(
            "Ti Consiglio",
            "https://www.ticonsiglio.com/bonus-2025/",
            SourceKind::Editorial,
            2,
        ),
        Source::new(
            "Fisco e Tasse",
            "https://www.fiscoetasse.com/new-rassegna-stampa/1542-legge-di-bilancio-2025-le-misure-per-le-famiglie.html",
            SourceKind::Editorial,
            2,
        ),
    ]
}
