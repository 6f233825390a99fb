mod loader;

pub use loader::BenchmarkError;

use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::normalizer::{find_contained, normalize_text};

static BUILTIN_TABLES: OnceLock<BenchmarkTables> = OnceLock::new();

const DEFAULT_SECTOR_LABEL: &str = "default";
const MIN_LEADING_LABEL_LEN: usize = 3;

/// Monthly SGD salary benchmark split by career stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBand {
    pub early_career: f64,
    pub experienced: f64,
}

impl SalaryBand {
    pub const fn new(early_career: f64, experienced: f64) -> Self {
        Self {
            early_career,
            experienced,
        }
    }

    pub fn for_stage(&self, experienced: bool) -> f64 {
        if experienced {
            self.experienced
        } else {
            self.early_career
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorBenchmark {
    pub sector: String,
    pub band: SalaryBand,
}

/// Sector band chosen for an industry label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorMatch<'a> {
    pub sector: &'a str,
    pub band: SalaryBand,
    pub fallback: bool,
}

/// Static reference data shared by every scoring call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkTables {
    sectors: Vec<SectorBenchmark>,
    default_band: SalaryBand,
    institutions: BTreeSet<String>,
    certifications: BTreeSet<String>,
    shortage_occupations: BTreeSet<String>,
}

impl BenchmarkTables {
    /// Empty tables carrying only a default sector band.
    pub fn new(default_band: SalaryBand) -> Self {
        Self {
            sectors: Vec::new(),
            default_band,
            institutions: BTreeSet::new(),
            certifications: BTreeSet::new(),
            shortage_occupations: BTreeSet::new(),
        }
    }

    pub fn builtin() -> &'static BenchmarkTables {
        BUILTIN_TABLES.get_or_init(build_builtin)
    }

    /// Adds a sector band; a sector already present keeps its first band.
    pub fn with_sector(mut self, sector: &str, band: SalaryBand) -> Self {
        self.push_sector(sector, band);
        self
    }

    pub fn with_institution(mut self, name: &str) -> Self {
        insert_normalized(&mut self.institutions, name);
        self
    }

    pub fn with_certification(mut self, name: &str) -> Self {
        insert_normalized(&mut self.certifications, name);
        self
    }

    pub fn with_shortage_occupation(mut self, phrase: &str) -> Self {
        insert_normalized(&mut self.shortage_occupations, phrase);
        self
    }

    pub(crate) fn push_sector(&mut self, sector: &str, band: SalaryBand) {
        let sector = normalize_text(sector);
        if sector.is_empty() || self.sectors.iter().any(|entry| entry.sector == sector) {
            return;
        }
        self.sectors.push(SectorBenchmark { sector, band });
    }

    pub(crate) fn set_default_band(&mut self, band: SalaryBand) {
        self.default_band = band;
    }

    pub fn sectors(&self) -> &[SectorBenchmark] {
        &self.sectors
    }

    pub fn default_band(&self) -> SalaryBand {
        self.default_band
    }

    pub fn institutions(&self) -> &BTreeSet<String> {
        &self.institutions
    }

    pub fn certifications(&self) -> &BTreeSet<String> {
        &self.certifications
    }

    pub fn shortage_occupations(&self) -> &BTreeSet<String> {
        &self.shortage_occupations
    }

    /// First sector, in table order, whose key appears in the industry label, or whose
    /// leading words the label spells out (`"financial"` for `"financial services"`).
    pub fn resolve_sector(&self, industry: Option<&str>) -> SectorMatch<'_> {
        let industry = industry.map(normalize_text).unwrap_or_default();

        if !industry.is_empty() {
            let found = self.sectors.iter().find(|entry| {
                industry.contains(entry.sector.as_str()) || abbreviates(&entry.sector, &industry)
            });
            if let Some(entry) = found {
                return SectorMatch {
                    sector: &entry.sector,
                    band: entry.band,
                    fallback: false,
                };
            }
        }

        SectorMatch {
            sector: DEFAULT_SECTOR_LABEL,
            band: self.default_band,
            fallback: true,
        }
    }

    pub fn recognized_institution(&self, institution: &str) -> Option<&str> {
        find_contained(&normalize_text(institution), &self.institutions)
    }

    pub fn recognized_certification<'a>(&'a self, certifications: &[String]) -> Option<&'a str> {
        certifications
            .iter()
            .find_map(|cert| find_contained(&normalize_text(cert), &self.certifications))
    }

    /// Shortage phrase contained in any of the given texts.
    pub fn shortage_match<'a, I>(&self, texts: I) -> Option<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        texts
            .into_iter()
            .find_map(|text| find_contained(&normalize_text(text), &self.shortage_occupations))
    }
}

fn abbreviates(sector: &str, industry: &str) -> bool {
    industry.len() >= MIN_LEADING_LABEL_LEN
        && sector.strip_prefix(industry).is_some_and(|rest| rest.starts_with(' '))
}

fn insert_normalized(set: &mut BTreeSet<String>, value: &str) {
    let normalized = normalize_text(value);
    if !normalized.is_empty() {
        set.insert(normalized);
    }
}

fn build_builtin() -> BenchmarkTables {
    const SECTORS: &[(&str, f64, f64)] = &[
        ("financial services", 6200.0, 11800.0),
        ("technology", 5600.0, 10500.0),
        ("information and communications", 5600.0, 10500.0),
        ("professional services", 5300.0, 9800.0),
        ("healthcare", 5000.0, 9000.0),
        ("manufacturing", 4800.0, 8600.0),
    ];
    const INSTITUTIONS: &[&str] = &[
        "National University of Singapore",
        "Nanyang Technological University",
        "Singapore Management University",
        "Massachusetts Institute of Technology",
        "Stanford University",
        "University of Oxford",
        "University of Cambridge",
        "Harvard University",
        "Imperial College London",
        "ETH Zurich",
        "Tsinghua University",
    ];
    const CERTIFICATIONS: &[&str] = &[
        "Chartered Financial Analyst",
        "Certified Information Systems Security Professional",
        "Project Management Professional",
        "AWS Certified Solutions Architect",
        "Certified Kubernetes Administrator",
        "Google Professional Machine Learning Engineer",
    ];
    const SHORTAGE: &[&str] = &[
        "machine learning engineer",
        "ai engineer",
        "data scientist",
        "data engineer",
        "cybersecurity specialist",
        "cloud architect",
        "devops engineer",
        "registered nurse",
        "quantitative analyst",
        "semiconductor process engineer",
    ];

    let mut tables = BenchmarkTables::new(SalaryBand::new(5000.0, 9000.0));
    for (sector, early, experienced) in SECTORS {
        tables.push_sector(sector, SalaryBand::new(*early, *experienced));
    }
    for name in INSTITUTIONS {
        insert_normalized(&mut tables.institutions, name);
    }
    for name in CERTIFICATIONS {
        insert_normalized(&mut tables.certifications, name);
    }
    for phrase in SHORTAGE {
        insert_normalized(&mut tables.shortage_occupations, phrase);
    }
    tables
}
