use super::{BenefitTemplate, Category};

pub(super) fn templates() -> Vec<BenefitTemplate> {
    vec![
        BenefitTemplate {
            id: "lombardia-dote-scuola",
            name: "Dote Scuola Lombardia",
            category: Category::Istruzione,
            description: "Contributo regionale per libri di testo, dotazioni tecnologiche e strumenti per la didattica degli studenti delle scuole secondarie.",
            amount: "da €150 a €500 per studente",
            deadline: "Bando annuale (primavera)",
            requirements: &[
                "Residenza in Lombardia",
                "Figli iscritti a scuola secondaria",
                "ISEE ≤ €15.748,78",
            ],
            how_to_apply: &[
                "Portale Bandi e Servizi di Regione Lombardia",
                "Accesso con SPID/CIE",
                "Domanda online nel periodo del bando",
            ],
            documents: &["ISEE in corso di validità", "Dati di iscrizione scolastica"],
            legal_refs: &["L.R. Lombardia 6 agosto 2007, n. 19"],
            authority: "Regione Lombardia",
            official_link: "https://www.regione.lombardia.it",
            search_link: "https://www.bandi.regione.lombardia.it",
            regions: &["Lombardia"],
            isee_ceiling: Some(15_748.78),
        },
        BenefitTemplate {
            id: "lombardia-nidi-gratis",
            name: "Nidi Gratis Lombardia",
            category: Category::Famiglia,
            description: "Azzeramento della retta del nido per le famiglie con ISEE basso, a integrazione del Bonus Asilo Nido INPS.",
            amount: "retta del nido azzerata",
            deadline: "Bando annuale",
            requirements: &[
                "Residenza in Lombardia",
                "Figli iscritti a nido aderente",
                "ISEE ≤ €20.000",
            ],
            how_to_apply: &[
                "Portale Bandi e Servizi di Regione Lombardia",
                "Domanda dopo l'iscrizione al nido",
            ],
            documents: &["ISEE minorenni", "Domanda Bonus Nido INPS"],
            legal_refs: &[],
            authority: "Regione Lombardia",
            official_link: "https://www.regione.lombardia.it",
            search_link: "https://www.bandi.regione.lombardia.it",
            regions: &["Lombardia"],
            isee_ceiling: Some(20_000.0),
        },
        BenefitTemplate {
            id: "emilia-romagna-rette-nido",
            name: "Al Nido con la Regione",
            category: Category::Famiglia,
            description: "Abbattimento delle rette dei nidi d'infanzia per le famiglie emiliano-romagnole con ISEE fino a €26.000.",
            amount: "riduzione della retta fino al 100%",
            deadline: "In vigore",
            requirements: &["Residenza in Emilia-Romagna", "Figli iscritti al nido", "ISEE ≤ €26.000"],
            how_to_apply: &["Domanda presso il Comune di residenza", "Riduzione applicata in retta"],
            documents: &["ISEE minorenni"],
            legal_refs: &[],
            authority: "Regione Emilia-Romagna",
            official_link: "https://www.regione.emilia-romagna.it",
            search_link: "https://www.regione.emilia-romagna.it/ricerca",
            regions: &["Emilia-Romagna"],
            isee_ceiling: Some(26_000.0),
        },
        BenefitTemplate {
            id: "emilia-romagna-salta-su",
            name: "Salta Su! Abbonamento Gratuito",
            category: Category::Trasporti,
            description: "Abbonamento annuale gratuito al trasporto pubblico locale per studenti fino a 19 anni residenti in Emilia-Romagna.",
            amount: "abbonamento annuale gratuito",
            deadline: "In vigore",
            requirements: &["Residenza in Emilia-Romagna", "Età fino a 19 anni", "Studente"],
            how_to_apply: &["Richiesta online all'azienda di trasporto locale"],
            documents: &["Documento d'identità", "Foto tessera"],
            legal_refs: &[],
            authority: "Regione Emilia-Romagna",
            official_link: "https://www.regione.emilia-romagna.it",
            search_link: "https://www.regione.emilia-romagna.it/ricerca",
            regions: &["Emilia-Romagna"],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "toscana-pacchetto-scuola",
            name: "Pacchetto Scuola Toscana",
            category: Category::Istruzione,
            description: "Incentivo economico per studenti di famiglie a basso reddito per l'acquisto di libri e materiale didattico.",
            amount: "da €150 a €350",
            deadline: "Bando comunale annuale",
            requirements: &["Residenza in Toscana", "Studenti 3-20 anni", "ISEE ≤ €15.748,78"],
            how_to_apply: &["Domanda al Comune di residenza", "Modulo online nel periodo del bando"],
            documents: &["ISEE in corso di validità"],
            legal_refs: &["L.R. Toscana 26 luglio 2002, n. 32"],
            authority: "Regione Toscana",
            official_link: "https://www.regione.toscana.it",
            search_link: "https://www.regione.toscana.it/ricerca",
            regions: &["Toscana"],
            isee_ceiling: Some(15_748.78),
        },
        BenefitTemplate {
            id: "lazio-contributo-affitto",
            name: "Contributo Affitto Lazio",
            category: Category::Casa,
            description: "Contributo regionale a integrazione dei canoni di locazione per nuclei in difficoltà economica.",
            amount: "fino a €2.000/anno",
            deadline: "Bando comunale",
            requirements: &["Residenza nel Lazio", "Contratto di locazione registrato", "ISEE ≤ €14.000"],
            how_to_apply: &["Domanda al Comune di residenza", "Allegare contratto e ricevute"],
            documents: &["Contratto di locazione", "Ricevute dei canoni", "ISEE"],
            legal_refs: &["L. 9 dicembre 1998, n. 431, art. 11"],
            authority: "Regione Lazio",
            official_link: "https://www.regione.lazio.it",
            search_link: "https://www.regione.lazio.it/cerca",
            regions: &["Lazio"],
            isee_ceiling: Some(14_000.0),
        },
        BenefitTemplate {
            id: "campania-trasporto-studenti",
            name: "Abbonamento Studenti Campania",
            category: Category::Trasporti,
            description: "Abbonamento agevolato al trasporto pubblico regionale per studenti residenti in Campania.",
            amount: "abbonamento gratuito o scontato",
            deadline: "In vigore",
            requirements: &["Residenza in Campania", "Studente", "ISEE ≤ €35.000"],
            how_to_apply: &["Richiesta sul portale UnicoCampania"],
            documents: &["Certificato di iscrizione", "ISEE"],
            legal_refs: &[],
            authority: "Regione Campania",
            official_link: "https://www.regione.campania.it",
            search_link: "https://www.regione.campania.it/regione/it/cerca",
            regions: &["Campania"],
            isee_ceiling: Some(35_000.0),
        },
        BenefitTemplate {
            id: "veneto-buono-libri",
            name: "Buono Libri Veneto",
            category: Category::Istruzione,
            description: "Contributo per l'acquisto dei libri di testo per studenti delle scuole secondarie residenti in Veneto.",
            amount: "fino al costo dei libri adottati",
            deadline: "Bando annuale",
            requirements: &["Residenza in Veneto", "Figli iscritti a scuola secondaria", "ISEE ≤ €15.748,78"],
            how_to_apply: &["Domanda online sul portale regionale", "Conferma presso il Comune"],
            documents: &["ISEE", "Fatture dei libri"],
            legal_refs: &[],
            authority: "Regione Veneto",
            official_link: "https://www.regione.veneto.it",
            search_link: "https://www.regione.veneto.it/web/guest/ricerca",
            regions: &["Veneto"],
            isee_ceiling: Some(15_748.78),
        },
        BenefitTemplate {
            id: "piemonte-voucher-scuola",
            name: "Voucher Scuola Piemonte",
            category: Category::Istruzione,
            description: "Voucher per iscrizione e frequenza o per libri e trasporti degli studenti piemontesi.",
            amount: "da €150 a €2.000",
            deadline: "Bando annuale",
            requirements: &["Residenza in Piemonte", "Figli studenti", "ISEE ≤ €26.000"],
            how_to_apply: &["Domanda online su Piemonte Tu", "Accesso con SPID"],
            documents: &["ISEE"],
            legal_refs: &["L.R. Piemonte 28 dicembre 2007, n. 28"],
            authority: "Regione Piemonte",
            official_link: "https://www.regione.piemonte.it",
            search_link: "https://www.regione.piemonte.it/web/cerca",
            regions: &["Piemonte"],
            isee_ceiling: Some(26_000.0),
        },
        BenefitTemplate {
            id: "puglia-reddito-dignita",
            name: "Reddito di Dignità Puglia",
            category: Category::Sostegno,
            description: "Misura regionale di inclusione sociale attiva per nuclei in condizione di povertà, con percorso di tirocinio.",
            amount: "fino a €500/mese",
            deadline: "Fino ad esaurimento fondi",
            requirements: &["Residenza in Puglia da almeno 12 mesi", "ISEE ≤ €9.360"],
            how_to_apply: &["Piattaforma regionale Red", "Colloquio presso l'Ambito territoriale"],
            documents: &["ISEE", "Documento d'identità"],
            legal_refs: &["L.R. Puglia 14 marzo 2016, n. 3"],
            authority: "Regione Puglia",
            official_link: "https://www.regione.puglia.it",
            search_link: "https://www.regione.puglia.it/cerca",
            regions: &["Puglia"],
            isee_ceiling: Some(9_360.0),
        },
        BenefitTemplate {
            id: "sicilia-caro-voli",
            name: "Caro Voli Sicilia",
            category: Category::Trasporti,
            description: "Sconto sui biglietti aerei da e per la Sicilia per studenti fuori sede, lavoratori e persone con disabilità.",
            amount: "sconto 25-50% sul biglietto",
            deadline: "Fino ad esaurimento fondi",
            requirements: &["Residenza in Sicilia", "Volo da/per aeroporti siciliani"],
            how_to_apply: &["Domanda online sulla piattaforma regionale", "Allegare biglietto e carta d'imbarco"],
            documents: &["Biglietto aereo", "Carta d'imbarco", "ISEE (per lo sconto maggiorato)"],
            legal_refs: &[],
            authority: "Regione Siciliana",
            official_link: "https://www.regione.sicilia.it",
            search_link: "https://www.regione.sicilia.it/cerca",
            regions: &["Sicilia"],
            isee_ceiling: None,
        },
    ]
}
