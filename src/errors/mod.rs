use thiserror::Error;

/// Errors surfaced by the standings, pairing and registration operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("Cannot pair an odd number of players ({count})")]
    OddPlayerCount { count: usize },

    #[error("Player name is empty after sanitization")]
    EmptyPlayerName,

    #[error("Referential integrity violated: {0}")]
    ReferentialIntegrity(String),

    #[error("Data access failed: {0:#}")]
    DataAccess(anyhow::Error),
}

impl TournamentError {
    /// True for errors caused by the caller's input rather than storage.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            TournamentError::OddPlayerCount { .. } | TournamentError::EmptyPlayerName
        )
    }
}

pub type Result<T> = std::result::Result<T, TournamentError>;

/// Wrap a storage result as a data access failure
pub fn with_data_access<T>(result: anyhow::Result<T>) -> Result<T> {
    result.map_err(TournamentError::DataAccess)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_classification() {
        assert!(TournamentError::OddPlayerCount { count: 3 }.is_invalid_input());
        assert!(TournamentError::EmptyPlayerName.is_invalid_input());
        assert!(!TournamentError::ReferentialIntegrity("x".to_string()).is_invalid_input());
        assert!(!TournamentError::DataAccess(anyhow::anyhow!("boom")).is_invalid_input());
    }

    #[test]
    fn test_data_access_keeps_context_chain() {
        let result: anyhow::Result<()> =
            Err(anyhow::anyhow!("disk full")).map_err(|e| e.context("Failed to insert match"));
        let err = with_data_access(result).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Data access failed: Failed to insert match: disk full"
        );
    }
}
