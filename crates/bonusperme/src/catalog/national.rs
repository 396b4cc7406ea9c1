use super::{BenefitTemplate, Category};

const INPS_SEARCH: &str = "https://www.inps.it/it/it/ricerca.html";
const ADE_SEARCH: &str = "https://www.agenziaentrate.gov.it/portale/ricerca";

pub(super) fn templates() -> Vec<BenefitTemplate> {
    vec![
        BenefitTemplate {
            id: "assegno-unico",
            name: "Assegno Unico Universale",
            category: Category::Famiglia,
            description: "Assegno mensile per ogni figlio a carico fino a 21 anni. Importo da €57 a €199,4/mese per figlio in base all'ISEE, con maggiorazioni per famiglie numerose e figli piccoli.",
            amount: "da €57 a €199,4/mese per figlio",
            deadline: "Domanda entro il 28 febbraio per arretrati",
            requirements: &[
                "Figli a carico sotto i 21 anni",
                "Residenza in Italia",
                "ISEE valido (facoltativo)",
            ],
            how_to_apply: &[
                "Portale INPS con SPID/CIE",
                "Sezione 'Assegno Unico'",
                "Compilare domanda online",
            ],
            documents: &[
                "SPID, CIE o CNS",
                "Codici fiscali dei figli",
                "DSU/ISEE in corso di validità",
                "IBAN per l'accredito",
            ],
            legal_refs: &["D.Lgs. 29 dicembre 2021, n. 230"],
            authority: "INPS",
            official_link: "https://www.inps.it/it/it/schede/prestazioni-e-servizi/assegno-unico-e-universale-per-i-figli-a-carico.html",
            search_link: INPS_SEARCH,
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "bonus-nido",
            name: "Bonus Asilo Nido",
            category: Category::Famiglia,
            description: "Contributo per rette asilo nido pubblico/privato o supporto domiciliare per bimbi sotto 3 anni con patologie croniche.",
            amount: "fino a €3.600/anno (ISEE ≤ €25.000)",
            deadline: "31 dicembre 2026",
            requirements: &[
                "Figli sotto i 3 anni",
                "Iscrizione asilo nido",
                "ISEE in corso di validità",
            ],
            how_to_apply: &[
                "Portale INPS con SPID/CIE",
                "Sezione 'Bonus Nido'",
                "Allegare ricevute rette + ISEE",
            ],
            documents: &[
                "Ricevute di pagamento delle rette",
                "ISEE minorenni",
                "Certificato di iscrizione al nido",
            ],
            legal_refs: &["L. 11 dicembre 2016, n. 232, art. 1, c. 355"],
            authority: "INPS",
            official_link: "https://www.inps.it/it/it/schede/prestazioni-e-servizi/bonus-asilo-nido-e-forme-di-supporto-presso-la-propria-abitazione.html",
            search_link: INPS_SEARCH,
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "bonus-nascita",
            name: "Carta per i Nuovi Nati",
            category: Category::Famiglia,
            description: "Contributo una tantum di €1.000 per ogni figlio nato o adottato dal 2025 per nuclei con ISEE fino a €40.000.",
            amount: "€1.000 una tantum",
            deadline: "Entro 60 giorni dalla nascita",
            requirements: &[
                "Figlio nato/adottato dal 2025",
                "ISEE fino a €40.000",
                "Residenza in Italia",
            ],
            how_to_apply: &[
                "Portale INPS con SPID/CIE",
                "Sezione 'Carta nuovi nati'",
                "Domanda online entro 60 giorni",
            ],
            documents: &["Certificato di nascita o provvedimento di adozione", "ISEE minorenni"],
            legal_refs: &["L. 30 dicembre 2024, n. 207, art. 1, c. 206"],
            authority: "INPS",
            official_link: "https://www.inps.it",
            search_link: INPS_SEARCH,
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "bonus-mamma",
            name: "Bonus Mamme Lavoratrici",
            category: Category::Famiglia,
            description: "Esonero totale contributi previdenziali (fino a €3.000/anno) per madri lavoratrici dipendenti con almeno 2 figli.",
            amount: "fino a €3.000/anno",
            deadline: "In vigore",
            requirements: &[
                "Madre lavoratrice dipendente",
                "Almeno 2 figli",
                "Figlio più piccolo sotto i 10 anni",
            ],
            how_to_apply: &[
                "Comunicare al datore di lavoro i CF dei figli",
                "Esonero automatico in busta paga",
            ],
            documents: &["Codici fiscali dei figli"],
            legal_refs: &["L. 30 dicembre 2023, n. 213, art. 1, c. 180"],
            authority: "INPS",
            official_link: "https://www.inps.it",
            search_link: INPS_SEARCH,
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "bonus-ristrutturazione",
            name: "Bonus Ristrutturazione",
            category: Category::Casa,
            description: "Detrazione IRPEF 50% sulle spese di ristrutturazione edilizia fino a €96.000 per unità immobiliare (prima casa). 36% per seconde case dal 2025.",
            amount: "detrazione 50% fino a €96.000",
            deadline: "31 dicembre 2026",
            requirements: &[
                "Proprietario/titolare diritto reale",
                "Lavori manutenzione straordinaria",
                "Pagamento con bonifico parlante",
            ],
            how_to_apply: &[
                "Pagare con bonifico parlante",
                "Conservare fatture",
                "Indicare in dichiarazione dei redditi",
            ],
            documents: &[
                "Fatture dei lavori",
                "Ricevute dei bonifici parlanti",
                "Titolo abilitativo (CILA/SCIA) se richiesto",
            ],
            legal_refs: &["D.P.R. 22 dicembre 1986, n. 917, art. 16-bis"],
            authority: "Agenzia delle Entrate",
            official_link: "https://www.agenziaentrate.gov.it/portale/ristrutturazioni-edilizie",
            search_link: ADE_SEARCH,
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "bonus-mobili",
            name: "Bonus Mobili ed Elettrodomestici",
            category: Category::Casa,
            description: "Detrazione 50% su acquisto mobili e grandi elettrodomestici per immobile in ristrutturazione, fino a €5.000.",
            amount: "detrazione 50% fino a €5.000",
            deadline: "31 dicembre 2026",
            requirements: &[
                "Lavori di ristrutturazione avviati",
                "Elettrodomestici classe A+ (A per forni)",
                "Pagamento tracciabile",
            ],
            how_to_apply: &[
                "Pagamenti tracciabili",
                "Conservare ricevute",
                "Indicare in dichiarazione dei redditi",
            ],
            documents: &["Fatture d'acquisto", "Ricevute di pagamento tracciabile"],
            legal_refs: &["D.L. 4 giugno 2013, n. 63, art. 16, c. 2"],
            authority: "Agenzia delle Entrate",
            official_link: "https://www.agenziaentrate.gov.it/portale/bonus-mobili",
            search_link: ADE_SEARCH,
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "bonus-affitto-giovani",
            name: "Bonus Affitto Giovani Under 31",
            category: Category::Casa,
            description: "Detrazione fino a €2.000/anno per 4 anni per giovani tra 20 e 31 anni che prendono in affitto un'abitazione principale.",
            amount: "fino a €2.000/anno per 4 anni",
            deadline: "In vigore",
            requirements: &[
                "Età 20-31 anni",
                "Reddito ≤ €15.493,71",
                "Contratto di locazione registrato",
            ],
            how_to_apply: &[
                "Indicare in dichiarazione dei redditi",
                "Conservare contratto registrato",
            ],
            documents: &["Contratto di locazione registrato", "Ricevute dei canoni"],
            legal_refs: &["D.P.R. 22 dicembre 1986, n. 917, art. 16, c. 1-ter"],
            authority: "Agenzia delle Entrate",
            official_link: "https://www.agenziaentrate.gov.it",
            search_link: ADE_SEARCH,
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "prima-casa-under36",
            name: "Agevolazioni Prima Casa Under 36",
            category: Category::Casa,
            description: "Esenzione imposte registro, ipotecaria e catastale per acquisto prima casa under 36 con ISEE fino a €40.000.",
            amount: "esenzione imposte (risparmio €2.000-€8.000)",
            deadline: "31 dicembre 2026",
            requirements: &[
                "Età sotto 36 anni",
                "ISEE fino a €40.000",
                "Acquisto prima abitazione",
            ],
            how_to_apply: &[
                "Dichiarare requisiti nell'atto notarile",
                "Presentare ISEE valido",
            ],
            documents: &["ISEE in corso di validità", "Dichiarazioni nell'atto di acquisto"],
            legal_refs: &["D.L. 25 maggio 2021, n. 73, art. 64"],
            authority: "Agenzia delle Entrate",
            official_link: "https://www.agenziaentrate.gov.it",
            search_link: ADE_SEARCH,
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "ecobonus",
            name: "Ecobonus",
            category: Category::Casa,
            description: "Detrazione dal 50% al 65% per interventi di efficientamento energetico: caldaie, infissi, cappotto termico, pannelli solari.",
            amount: "detrazione 50-65% fino a €100.000",
            deadline: "31 dicembre 2026",
            requirements: &[
                "Immobile esistente",
                "Interventi di efficientamento energetico",
                "Asseverazione tecnica",
            ],
            how_to_apply: &[
                "Comunicazione ENEA entro 90 giorni da fine lavori",
                "Bonifico parlante",
                "Dichiarazione dei redditi",
            ],
            documents: &[
                "Asseverazione del tecnico abilitato",
                "Ricevuta trasmissione ENEA",
                "Fatture e bonifici parlanti",
            ],
            legal_refs: &["L. 27 dicembre 2006, n. 296, art. 1, c. 344-347"],
            authority: "Agenzia delle Entrate / ENEA",
            official_link: "https://www.agenziaentrate.gov.it",
            search_link: ADE_SEARCH,
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "bonus-verde",
            name: "Bonus Verde",
            category: Category::Casa,
            description: "Detrazione 36% su spese per sistemazione a verde di giardini, terrazze, coperture, impianti di irrigazione.",
            amount: "detrazione 36% fino a €5.000",
            deadline: "31 dicembre 2026",
            requirements: &[
                "Proprietario o nudo proprietario",
                "Interventi di sistemazione a verde",
                "Pagamento tracciabile",
            ],
            how_to_apply: &[
                "Pagamento tracciabile",
                "Conservare fatture",
                "Dichiarazione dei redditi",
            ],
            documents: &["Fatture", "Ricevute di pagamento tracciabile"],
            legal_refs: &["L. 27 dicembre 2017, n. 205, art. 1, c. 12"],
            authority: "Agenzia delle Entrate",
            official_link: "https://www.agenziaentrate.gov.it",
            search_link: ADE_SEARCH,
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "bonus-psicologo",
            name: "Bonus Psicologo",
            category: Category::Salute,
            description: "Contributo fino a €1.500 per sessioni di psicoterapia con professionisti iscritti all'albo. Importo variabile in base all'ISEE.",
            amount: "fino a €1.500 (ISEE ≤ €15.000)",
            deadline: "Bando annuale",
            requirements: &[
                "ISEE valido",
                "Residenza in Italia",
                "Psicoterapeuta iscritto all'albo",
            ],
            how_to_apply: &[
                "Portale INPS con SPID/CIE",
                "Sezione 'Bonus Psicologo'",
                "Domanda nel periodo di apertura",
            ],
            documents: &["ISEE in corso di validità", "SPID, CIE o CNS"],
            legal_refs: &["D.L. 30 dicembre 2021, n. 228, art. 1-quater"],
            authority: "INPS",
            official_link: "https://www.inps.it",
            search_link: INPS_SEARCH,
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "carta-dedicata",
            name: "Carta Dedicata a Te",
            category: Category::Spesa,
            description: "Carta prepagata €500 per acquisto beni alimentari di prima necessità e carburante per nuclei con ISEE fino a €15.000.",
            amount: "€500 su carta prepagata",
            deadline: "Erogazione automatica",
            requirements: &[
                "ISEE fino a €15.000",
                "Nessun altro sostegno al reddito",
                "Nucleo ≥ 3 persone",
            ],
            how_to_apply: &[
                "Erogazione automatica dal Comune",
                "Ritiro presso uffici postali",
                "Nessuna domanda necessaria",
            ],
            documents: &["Documento d'identità per il ritiro"],
            legal_refs: &["L. 29 dicembre 2022, n. 197, art. 1, c. 450"],
            authority: "Comune / MEF",
            official_link: "https://www.mef.gov.it",
            search_link: "https://www.mef.gov.it/ricerca",
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "carta-cultura",
            name: "Carta della Cultura / Merito",
            category: Category::Istruzione,
            description: "€500 Carta Cultura per neodiciottenni (ISEE ≤ €35.000) + €500 Carta Merito (diploma con 100). Cumulabili fino a €1.000.",
            amount: "€500 (fino a €1.000 cumulate)",
            deadline: "Entro 30 giugno dell'anno successivo ai 18 anni",
            requirements: &[
                "18 anni compiuti nell'anno precedente",
                "ISEE ≤ €35.000 (Carta Cultura)",
                "Diploma con 100 (Carta Merito)",
            ],
            how_to_apply: &[
                "Registrarsi su cartacultura.gov.it",
                "Accesso con SPID",
                "Generare buoni per acquisti culturali",
            ],
            documents: &["SPID o CIE", "ISEE in corso di validità"],
            legal_refs: &["D.L. 15 settembre 2023, n. 121"],
            authority: "Ministero della Cultura",
            official_link: "https://www.cartacultura.gov.it",
            search_link: "https://www.cultura.gov.it/cerca",
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "borsa-studio",
            name: "Borse di Studio Universitarie",
            category: Category::Istruzione,
            description: "Borsa di studio regionale per studenti universitari meritevoli e con basso ISEE. Copre tasse, vitto e alloggio.",
            amount: "da €2.000 a €6.000/anno + esenzione tasse",
            deadline: "Bando regionale (luglio-settembre)",
            requirements: &[
                "Iscrizione università/AFAM",
                "ISEE universitario ≤ €23.000-€26.000",
                "Requisiti di merito (CFU minimi)",
            ],
            how_to_apply: &[
                "Portale ente regionale diritto allo studio",
                "Domanda online nel periodo del bando",
                "Allegare ISEE universitario",
            ],
            documents: &["ISEE per prestazioni universitarie", "Certificato di iscrizione"],
            legal_refs: &["D.Lgs. 29 marzo 2012, n. 68"],
            authority: "Regione / Ente DSU",
            official_link: "https://www.miur.gov.it",
            search_link: "https://www.mur.gov.it/it/ricerca",
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "bonus-decoder-tv",
            name: "Bonus TV / Decoder",
            category: Category::Altro,
            description: "Contributo per acquisto TV e decoder compatibili con il nuovo digitale terrestre DVB-T2 per famiglie con ISEE fino a €20.000.",
            amount: "fino a €50 (decoder) / €100 (TV)",
            deadline: "Fino ad esaurimento fondi",
            requirements: &[
                "ISEE ≤ €20.000",
                "Residenza in Italia",
                "Rottamazione vecchio apparecchio (per bonus TV)",
            ],
            how_to_apply: &[
                "Acquistare presso rivenditori aderenti",
                "Presentare autocertificazione ISEE",
                "Sconto diretto in negozio",
            ],
            documents: &["Autocertificazione ISEE", "Documento d'identità"],
            legal_refs: &[],
            authority: "MISE",
            official_link: "https://www.mise.gov.it",
            search_link: "https://www.mimit.gov.it/it/cerca",
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "adi",
            name: "Assegno di Inclusione (ADI)",
            category: Category::Sostegno,
            description: "Sostegno economico per nuclei con minori, disabili, over 60 o in condizione di svantaggio. Sostituisce il Reddito di Cittadinanza.",
            amount: "fino a €6.000/anno (+ integrazione affitto fino a €3.360)",
            deadline: "In vigore",
            requirements: &[
                "ISEE ≤ €9.360",
                "Nucleo con minori, disabili, over 60",
                "Residenza in Italia da almeno 5 anni",
                "Patrimonio mobiliare ≤ €6.000",
            ],
            how_to_apply: &[
                "Portale INPS o patronato",
                "Iscrizione al SIISL",
                "Colloquio presso servizi sociali",
            ],
            documents: &[
                "DSU/ISEE in corso di validità",
                "Patto di attivazione digitale",
                "Contratto di locazione (per l'integrazione affitto)",
            ],
            legal_refs: &["D.L. 4 maggio 2023, n. 48, art. 1"],
            authority: "INPS",
            official_link: "https://www.inps.it",
            search_link: INPS_SEARCH,
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "sfl",
            name: "Supporto Formazione e Lavoro",
            category: Category::Lavoro,
            description: "Indennità di €350/mese per 12 mesi per persone tra 18 e 59 anni occupabili che partecipano a percorsi di formazione o lavoro.",
            amount: "€350/mese per 12 mesi",
            deadline: "In vigore",
            requirements: &[
                "Età 18-59 anni",
                "ISEE ≤ €6.000",
                "Non beneficiario ADI",
                "Partecipazione a percorsi formativi",
            ],
            how_to_apply: &[
                "Portale INPS o patronato",
                "Iscrizione al SIISL",
                "Adesione a percorso formativo/lavorativo",
            ],
            documents: &["DSU/ISEE in corso di validità", "Patto di attivazione digitale"],
            legal_refs: &["D.L. 4 maggio 2023, n. 48, art. 12"],
            authority: "INPS",
            official_link: "https://www.inps.it",
            search_link: INPS_SEARCH,
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "bonus-animali",
            name: "Bonus Animali Domestici",
            category: Category::Altro,
            description: "Detrazione del 19% sulle spese veterinarie per animali domestici legalmente detenuti, fino a €550.",
            amount: "detrazione 19% fino a €550",
            deadline: "In vigore (annuale)",
            requirements: &[
                "Possesso legale di animale domestico",
                "Spese veterinarie documentate",
                "Franchigia di €129,11",
            ],
            how_to_apply: &[
                "Conservare fatture/scontrini veterinario",
                "Indicare in dichiarazione dei redditi",
            ],
            documents: &["Fatture del veterinario", "Scontrini parlanti dei farmaci"],
            legal_refs: &["D.P.R. 22 dicembre 1986, n. 917, art. 15, c. 1, lett. c-bis"],
            authority: "Agenzia delle Entrate",
            official_link: "https://www.agenziaentrate.gov.it",
            search_link: ADE_SEARCH,
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "bonus-colonnine",
            name: "Bonus Colonnine Ricarica Elettrica",
            category: Category::Casa,
            description: "Contributo fino all'80% (max €1.500 per privati) per installazione di infrastrutture di ricarica per veicoli elettrici in ambito domestico.",
            amount: "fino a €1.500 (80% delle spese)",
            deadline: "Fino ad esaurimento fondi",
            requirements: &[
                "Persona fisica residente in Italia",
                "Installazione in ambito domestico",
                "Installatore qualificato",
            ],
            how_to_apply: &[
                "Portale del Ministero dell'Ambiente",
                "Domanda online con documentazione",
                "Erogazione post-installazione",
            ],
            documents: &["Fattura dell'installatore", "Dichiarazione di conformità dell'impianto"],
            legal_refs: &[],
            authority: "MASE",
            official_link: "https://www.mase.gov.it",
            search_link: "https://www.mase.gov.it/cerca",
            regions: &[],
            isee_ceiling: None,
        },
        BenefitTemplate {
            id: "bonus-acqua-potabile",
            name: "Bonus Acqua Potabile",
            category: Category::Casa,
            description: "Credito d'imposta del 50% sulle spese per sistemi di filtraggio e mineralizzazione dell'acqua potabile, fino a €1.000.",
            amount: "credito d'imposta 50% fino a €1.000",
            deadline: "31 dicembre 2026",
            requirements: &[
                "Acquisto sistemi filtraggio/mineralizzazione",
                "Comunicazione spese all'Agenzia delle Entrate",
            ],
            how_to_apply: &[
                "Comunicazione spese su sito Agenzia Entrate entro febbraio anno successivo",
                "Indicare in dichiarazione dei redditi",
            ],
            documents: &["Fattura d'acquisto e installazione"],
            legal_refs: &["L. 30 dicembre 2020, n. 178, art. 1, c. 1087"],
            authority: "Agenzia delle Entrate",
            official_link: "https://www.agenziaentrate.gov.it",
            search_link: ADE_SEARCH,
            regions: &[],
            isee_ceiling: None,
        },
    ]
}
