use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseState {
    EnTransito,
    Detenido,
    Firmado,
    Procesado,
    Completado,
}

impl CaseState {
    pub const ALL: [CaseState; 5] = [
        CaseState::EnTransito,
        CaseState::Detenido,
        CaseState::Firmado,
        CaseState::Procesado,
        CaseState::Completado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseState::EnTransito => "en_transito",
            CaseState::Detenido => "detenido",
            CaseState::Firmado => "firmado",
            CaseState::Procesado => "procesado",
            CaseState::Completado => "completado",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CaseState::Completado)
    }
}

impl fmt::Display for CaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown case state `{0}`")]
pub struct UnknownCaseState(pub String);

impl FromStr for CaseState {
    type Err = UnknownCaseState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| UnknownCaseState(s.to_string()))
    }
}

/// Which state changes a transfer may request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Any state may follow any state, including leaving `completado`.
    #[default]
    Permissive,
    /// Like `Permissive`, except nothing leaves `completado`.
    SealCompleted,
}

impl FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "permissive" => Ok(TransitionPolicy::Permissive),
            "seal_completed" => Ok(TransitionPolicy::SealCompleted),
            other => Err(format!("unknown transition policy `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("case cannot move from {from} to {to}")]
pub struct TransitionRejected {
    pub from: CaseState,
    pub to: CaseState,
}

pub fn validate_transition(
    from: CaseState,
    to: CaseState,
    policy: TransitionPolicy,
) -> Result<(), TransitionRejected> {
    match policy {
        TransitionPolicy::Permissive => Ok(()),
        TransitionPolicy::SealCompleted if from.is_terminal() => Err(TransitionRejected { from, to }),
        TransitionPolicy::SealCompleted => Ok(()),
    }
}
