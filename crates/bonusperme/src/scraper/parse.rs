//! Naive HTML extraction tuned for the listing pages of the public portals.
//!
//! Only `<a>` and `<h2>`-`<h4>` elements are inspected; nested markup inside them is flattened to
//! text. Pages are small enough that a regex scan is cheaper than building a DOM.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Url;

use crate::catalog::{BenefitRecord, Category};
use crate::matcher::deadline;

pub(crate) const PLACEHOLDER_AMOUNT: &str = "Vedi sito ufficiale";
pub(crate) const PLACEHOLDER_DEADLINE: &str = "Verificare sul sito ufficiale";

const KEYWORDS: &[&str] = &[
    "bonus",
    "agevolazione",
    "detrazione",
    "contributo",
    "assegno",
    "carta",
];
const MAX_SLUG_LEN: usize = 60;

static ELEMENTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["a", "h2", "h3", "h4"]
        .iter()
        .map(|tag| {
            Regex::new(&format!(r"(?is)<{tag}\b([^>]*)>(.*?)</{tag}\s*>"))
                .expect("element pattern compiles")
        })
        .collect()
});

static HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bhref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#)
        .expect("href pattern compiles")
});

/// Extract candidate benefits from a page, in document order.
pub fn extract_benefits(html: &str, authority: &str) -> Vec<BenefitRecord> {
    let mut found: Vec<(usize, BenefitRecord)> = Vec::new();

    for (index, pattern) in ELEMENTS.iter().enumerate() {
        let is_anchor = index == 0;
        for captures in pattern.captures_iter(html) {
            let (Some(whole), Some(inner)) = (captures.get(0), captures.get(2)) else {
                continue;
            };
            let text = strip_tags(inner.as_str());
            if !is_candidate(&text) {
                continue;
            }
            let link = if is_anchor {
                captures
                    .get(1)
                    .and_then(|attrs| href(attrs.as_str()))
                    .unwrap_or_default()
            } else {
                String::new()
            };
            found.push((whole.start(), scraped_record(&text, authority, link)));
        }
    }

    found.sort_by_key(|(offset, _)| *offset);
    found.into_iter().map(|(_, record)| record).collect()
}

fn is_candidate(text: &str) -> bool {
    let length = text.chars().count();
    if !(11..200).contains(&length) {
        return false;
    }
    let lower = text.to_lowercase();
    KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

fn scraped_record(text: &str, authority: &str, link: String) -> BenefitRecord {
    let lower = text.to_lowercase();
    BenefitRecord {
        id: slug(text),
        name: text.to_string(),
        category: categorize(&lower),
        description: format!(
            "Informazione trovata su {authority}. Verificare sul sito ufficiale per dettagli aggiornati."
        ),
        amount: PLACEHOLDER_AMOUNT.to_string(),
        deadline: PLACEHOLDER_DEADLINE.to_string(),
        deadline_kind: deadline::classify(PLACEHOLDER_DEADLINE),
        requirements: vec!["Consultare il sito ufficiale per i requisiti aggiornati".to_string()],
        how_to_apply: vec!["Visitare il sito ufficiale dell'ente erogatore".to_string()],
        documents: Vec::new(),
        legal_refs: Vec::new(),
        authority: authority.to_string(),
        official_link: link,
        search_link: String::new(),
        regions: Vec::new(),
        isee_ceiling: None,
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

/// Catalog slug capped at 60 characters.
pub(crate) fn slug(text: &str) -> String {
    let mut slug = crate::catalog::slugify(text);
    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        let trimmed = slug.trim_end_matches('-').len();
        slug.truncate(trimmed);
    }
    slug
}

/// Keyword heuristics, first match wins.
pub(crate) fn categorize(lower: &str) -> Category {
    let has = |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));

    if has(&["famiglia", "figlio", "nido", "nascita", "mamma"]) {
        Category::Famiglia
    } else if has(&["casa", "ristruttur", "affitto", "abitazione"]) {
        Category::Casa
    } else if has(&["salute", "psicolog"]) {
        Category::Salute
    } else if has(&["studio", "cultura", "istruzione"]) {
        Category::Istruzione
    } else if has(&["spesa", "alimentar"]) {
        Category::Spesa
    } else if has(&["lavoro", "formazione"]) {
        Category::Lavoro
    } else {
        Category::Altro
    }
}

fn href(attributes: &str) -> Option<String> {
    let captures = HREF.captures(attributes)?;
    let value = captures
        .get(1)
        .or_else(|| captures.get(2))
        .or_else(|| captures.get(3))?
        .as_str()
        .trim();
    (!value.is_empty()).then(|| decode_entities(value))
}

/// Resolve a scraped link against the page it was found on.
pub(crate) fn absolutize(base: &str, link: &str) -> String {
    if link.is_empty() {
        return String::new();
    }
    match Url::parse(base).and_then(|base| base.join(link)) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => url.to_string(),
        Ok(_) => String::new(),
        Err(_) => link.to_string(),
    }
}

/// Remove tags, decode common entities and collapse whitespace.
pub(crate) fn strip_tags(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&decode_entities(&out))
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&egrave;", "è")
        .replace("&agrave;", "à")
        .replace("&ugrave;", "ù")
        .replace("&ograve;", "ò")
        .replace("&igrave;", "ì")
        .replace("&euro;", "€")
        .replace("&amp;", "&")
}

fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
