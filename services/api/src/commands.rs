use std::sync::Arc;

use bonusperme::catalog::{builtin, BenefitRecord, CatalogCache};
use bonusperme::config::AppConfig;
use bonusperme::error::AppError;
use bonusperme::matcher::{
    deadline, MatchEngine, MatchResult, ProfileGuard, SimulationResult, UserProfile,
};
use bonusperme::scraper::Scraper;
use bonusperme::telemetry;
use chrono::{DateTime, Utc};
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct MatchArgs {
    /// Age of the applicant
    #[arg(long)]
    pub(crate) eta: u32,
    /// Region of residence (e.g. Lombardia)
    #[arg(long, default_value = "")]
    pub(crate) regione: String,
    /// Municipality of residence
    #[arg(long, default_value = "")]
    pub(crate) comune: String,
    /// Marital status: single, sposato, convivente, separato, divorziato, vedovo
    #[arg(long, default_value = "altro")]
    pub(crate) stato_civile: String,
    /// Employment: dipendente, autonomo, disoccupato, inoccupato, pensionato, studente
    #[arg(long, default_value = "altro")]
    pub(crate) occupazione: String,
    /// Number of dependent children
    #[arg(long, default_value_t = 0)]
    pub(crate) figli: u32,
    /// Children under 18
    #[arg(long, default_value_t = 0)]
    pub(crate) figli_minorenni: u32,
    /// Children under 3
    #[arg(long, default_value_t = 0)]
    pub(crate) figli_under3: u32,
    /// Household members over 65
    #[arg(long, default_value_t = 0)]
    pub(crate) over65: u32,
    /// Household ISEE in euro (0 = not declared)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) isee: f64,
    /// Gross yearly income in euro
    #[arg(long, default_value_t = 0.0)]
    pub(crate) reddito: f64,
    #[arg(long)]
    pub(crate) affittuario: bool,
    #[arg(long)]
    pub(crate) prima_casa: bool,
    #[arg(long)]
    pub(crate) ristrutturazione: bool,
    #[arg(long)]
    pub(crate) studente: bool,
    #[arg(long)]
    pub(crate) disabilita: bool,
    /// A child was born or adopted in 2025
    #[arg(long)]
    pub(crate) nuovo_nato: bool,
    /// What-if ISEE; prints the difference against the declared one
    #[arg(long)]
    pub(crate) isee_simulato: Option<f64>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

impl MatchArgs {
    pub(crate) fn profile(&self) -> UserProfile {
        UserProfile {
            age: self.eta,
            region: self.regione.clone(),
            municipality: self.comune.clone(),
            marital_status: self.stato_civile.parse().unwrap_or_default(),
            employment: self.occupazione.parse().unwrap_or_default(),
            children: self.figli,
            minor_children: self.figli_minorenni,
            children_under_3: self.figli_under3,
            disability: self.disabilita,
            over_65: self.over65,
            isee: self.isee,
            annual_income: self.reddito,
            renter: self.affittuario,
            first_home: self.prima_casa,
            renovating: self.ristrutturazione,
            student: self.studente,
            newborn_2025: self.nuovo_nato,
            simulated_isee: self.isee_simulato,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Only show national entries plus the ones of this region
    #[arg(long)]
    pub(crate) regione: Option<String>,
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let guard = ProfileGuard::from_config(&config.profile);
    let profile = guard.admit(args.profile())?;

    let engine = MatchEngine::default();
    let catalog = builtin();
    let now = Utc::now();

    if profile.simulated_isee.is_some() {
        let outcome = engine.simulate(&profile, &catalog, now);
        if args.json {
            print_json(&outcome)?;
        } else {
            render_simulation(&outcome);
        }
        return Ok(());
    }

    let result = engine.run(&profile, &catalog, now);
    if args.json {
        print_json(&result)?;
    } else {
        render_result(&result);
    }
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let now = Utc::now();
    let catalog = builtin();
    let entries: Vec<&BenefitRecord> = catalog
        .iter()
        .filter(|record| match &args.regione {
            Some(region) => !record.is_regional() || record.applies_to_region(region),
            None => true,
        })
        .collect();

    println!("Catalogo BonusPerMe ({} voci)", entries.len());
    for record in entries {
        println!("{}", catalog_line(record, now));
    }
    Ok(())
}

pub(crate) async fn run_scrape() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let cache = Arc::new(CatalogCache::new());
    let scraper = Scraper::new(cache.clone(), &config.scraper, &config.linkcheck)?;
    let report = scraper.run_cycle().await;

    println!(
        "Ciclo completato: {} fonti ok, {} fallite, {} voci trovate, {} pubblicate",
        report.sources_ok, report.sources_failed, report.scraped, report.published
    );
    if let Some(broken) = report.broken_links {
        println!("Link ufficiali non raggiungibili: {broken}");
    }
    for (name, status) in cache.status(scraper.interval()).sources {
        let outcome = if status.success { "ok" } else { "errore" };
        println!(
            "  {:<20} {:<6} {:>3} voci  {}",
            name,
            outcome,
            status.bonus_found,
            status.error.unwrap_or_default()
        );
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(|err| AppError::Io(err.into()))?;
    println!("{rendered}");
    Ok(())
}

fn render_result(result: &MatchResult) {
    println!(
        "Bonus trovati: {} (attivi {}, scaduti {})",
        result.matched, result.active, result.expired
    );
    println!("Risparmio stimato: {}", result.estimated_saving);
    if let Some(lost) = &result.lost_so_far {
        println!("Perso finora quest'anno: {lost}");
    }
    for benefit in &result.benefits {
        println!("{}", result_line(benefit));
    }
}

fn render_simulation(outcome: &SimulationResult) {
    println!(
        "ISEE dichiarato: {} bonus, {}",
        outcome.real.matched, outcome.real.estimated_saving
    );
    println!(
        "ISEE simulato:   {} bonus, {}",
        outcome.simulated.matched, outcome.simulated.estimated_saving
    );
    println!(
        "Differenza: +{} bonus, {} in più",
        outcome.extra_benefits, outcome.extra_saving
    );
    for id in &outcome.new_benefit_ids {
        println!("  nuovo: {id}");
    }
}

fn result_line(benefit: &BenefitRecord) -> String {
    let amount = benefit.exact_amount.as_deref().unwrap_or(&benefit.amount);
    let marker = if benefit.expired { " [scaduto]" } else { "" };
    format!(
        "  {:>3}  {:<40} {:<11} {}{}",
        benefit.score,
        benefit.name,
        benefit.category.label(),
        amount,
        marker
    )
}

fn catalog_line(record: &BenefitRecord, now: DateTime<Utc>) -> String {
    let status = if deadline::is_expired(&record.deadline, now) {
        "scaduto"
    } else {
        "attivo"
    };
    let scope = if record.is_regional() {
        record.regions.join(", ")
    } else {
        "nazionale".to_string()
    };
    format!(
        "  {:<32} {:<11} {:<18} {:<8} {}",
        record.id,
        record.category.label(),
        record.deadline_kind.label(),
        status,
        scope
    )
}
