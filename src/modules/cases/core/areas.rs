// Organizational areas a case can be routed to, and their short codes.
//
// The short code of the creator's area prefixes every case code.

use serde::{Deserialize, Serialize};

pub const FALLBACK_PREFIX: &str = "TR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
    pub code: String,
}

impl Area {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaCatalog {
    areas: Vec<Area>,
}

impl AreaCatalog {
    pub fn new(areas: Vec<Area>) -> Self {
        Self { areas }
    }

    pub fn builtin() -> Self {
        Self::new(
            [
                ("Dirección General", "DIGE"),
                ("Oficina de Libre Acceso a la Información Pública", "OAIP"),
                ("Departamento Jurídico", "JURI"),
                ("Departamento de Recursos Humanos", "RRHH"),
                ("Departamento de Planificación y Desarrollo", "PYDE"),
                ("División Control de Gestión Interna", "COGI"),
                ("División de Seguridad", "SEFI"),
                ("División de Tecnologías de la Información y Comunicación", "TECO"),
                ("Departamento Administrativo y Financiero", "ADFI"),
                ("Departamento de Diseño y Arquitectura", "DIAR"),
                ("Departamento de Gestión de Infraestructura Escolar", "GEIE"),
                ("Departamento Gestión de Riesgo", "GERI"),
                ("Departamento de Mantenimiento de Obras", "MANO"),
                ("Departamento Supervisión de Obras", "SUPO"),
                ("Departamento Fiscalización de Obras", "FISO"),
                ("Departamento de Cubicaciones", "CUBI"),
                ("Departamento de Coordinación Regional", "COOR"),
            ]
            .into_iter()
            .map(|(name, code)| Area::new(name, code))
            .collect(),
        )
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn contains(&self, name: &str) -> bool {
        self.areas.iter().any(|area| area.name == name)
    }

    /// Short code of an area, or `TR` when the area is not in the catalog.
    pub fn code_for(&self, name: &str) -> &str {
        self.areas
            .iter()
            .find(|area| area.name == name)
            .map(|area| area.code.as_str())
            .unwrap_or(FALLBACK_PREFIX)
    }
}

impl Default for AreaCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
