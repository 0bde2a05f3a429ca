// Named process templates with the expected dwell time per area.
//
// A template never blocks a transfer. It only feeds the percentage-elapsed
// indicators: warning from 80 % of the area's maximum, overdue from 100 %.

use crate::shared::core::clock::MILLIS_PER_DAY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const WARNING_THRESHOLD_PERCENT: f64 = 80.0;
pub const OVERDUE_THRESHOLD_PERCENT: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DwellRange {
    pub min_days: u32,
    pub max_days: u32,
    pub label: String,
}

impl DwellRange {
    pub fn new(min_days: u32, max_days: u32, label: impl Into<String>) -> Self {
        Self {
            min_days,
            max_days,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessTemplate {
    pub id: String,
    pub name: String,
    /// `None` means the area takes part in the process without a time limit.
    pub dwell_by_area: BTreeMap<String, Option<DwellRange>>,
}

impl ProcessTemplate {
    pub fn max_days(&self, area: &str) -> Option<u32> {
        self.dwell_by_area
            .get(area)
            .and_then(|range| range.as_ref())
            .map(|range| range.max_days)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaLevel {
    Untracked,
    OnTrack,
    Warning,
    Overdue,
}

impl SlaLevel {
    pub fn from_percent(percent: Option<f64>) -> Self {
        match percent {
            None => SlaLevel::Untracked,
            Some(p) if p >= OVERDUE_THRESHOLD_PERCENT => SlaLevel::Overdue,
            Some(p) if p >= WARNING_THRESHOLD_PERCENT => SlaLevel::Warning,
            Some(_) => SlaLevel::OnTrack,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SlaLevel::Untracked => "untracked",
            SlaLevel::OnTrack => "on_track",
            SlaLevel::Warning => "warning",
            SlaLevel::Overdue => "overdue",
        }
    }
}

impl fmt::Display for SlaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn percent_elapsed(elapsed_millis: i64, max_days: Option<u32>) -> Option<f64> {
    match max_days {
        Some(days) if days > 0 => {
            Some(elapsed_millis as f64 / (days as i64 * MILLIS_PER_DAY) as f64 * 100.0)
        }
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCatalog {
    templates: Vec<ProcessTemplate>,
}

impl ProcessCatalog {
    pub fn new(templates: Vec<ProcessTemplate>) -> Self {
        Self { templates }
    }

    pub fn builtin() -> Self {
        let school_construction = template(
            "proceso_1",
            "Gestión de Construcción Nuevo Proyecto: Escuela o Politécnico",
            vec![
                ("Dirección General", Some(DwellRange::new(1, 2, "1–2 días"))),
                ("Departamento de Diseño y Arquitectura", Some(DwellRange::new(40, 60, "40–60 días"))),
                ("Departamento de Planificación y Desarrollo", Some(DwellRange::new(0, 90, "Hasta 90 días"))),
                ("Departamento Administrativo y Financiero", Some(DwellRange::new(75, 85, "70–75 + 5–10 días"))),
                ("Departamento Jurídico", Some(DwellRange::new(10, 20, "10–20 días"))),
                ("Departamento Supervisión de Obras", Some(DwellRange::new(3, 5, "3–5 días"))),
            ],
        );
        let site_documents = template(
            "proceso_2",
            "Gestión Documental de Obra",
            vec![
                ("Departamento de Gestión de Infraestructura Escolar", None),
                ("Departamento Fiscalización de Obras", Some(DwellRange::new(1, 1, "1 día"))),
                ("Departamento de Diseño y Arquitectura", Some(DwellRange::new(1, 1, "1 día"))),
                ("Dirección General", Some(DwellRange::new(1, 2, "1–2 días"))),
                ("Departamento Administrativo y Financiero", Some(DwellRange::new(1, 2, "1–2 días"))),
                (
                    "Departamento Administrativo y Financiero (Sección Contabilidad)",
                    Some(DwellRange::new(5, 5, "5 días")),
                ),
                (
                    "Departamento Administrativo y Financiero (Sección Presupuesto)",
                    Some(DwellRange::new(1, 15, "1–15 días")),
                ),
                (
                    "Departamento Administrativo y Financiero (Revisión final Contabilidad/Presupuesto)",
                    Some(DwellRange::new(1, 2, "1–2 días")),
                ),
            ],
        );
        Self::new(vec![school_construction, site_documents])
    }

    pub fn get(&self, id: &str) -> Option<&ProcessTemplate> {
        self.templates.iter().find(|template| template.id == id)
    }

    pub fn templates(&self) -> &[ProcessTemplate] {
        &self.templates
    }

    pub fn max_days(&self, template_id: &str, area: &str) -> Option<u32> {
        self.get(template_id).and_then(|template| template.max_days(area))
    }
}

impl Default for ProcessCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn template(id: &str, name: &str, areas: Vec<(&str, Option<DwellRange>)>) -> ProcessTemplate {
    ProcessTemplate {
        id: id.to_string(),
        name: name.to_string(),
        dwell_by_area: areas
            .into_iter()
            .map(|(area, range)| (area.to_string(), range))
            .collect(),
    }
}
