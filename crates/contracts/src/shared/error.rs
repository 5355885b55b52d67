use thiserror::Error;

/// Fixed text shown in the list area when the catalog cannot be loaded.
pub const LOAD_ERROR_USER_MESSAGE: &str = "No se pudieron cargar los precios de renta. Por favor, contacta directamente para consultar disponibilidad.";

/// Ошибки загрузки каталога
///
/// `Display` is the technical detail; the UI pairs it with
/// [`LoadError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid catalog{}: {reason}", item_suffix(.index))]
    Schema {
        index: Option<usize>,
        reason: String,
    },
}

/// Coarse failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    Transport,
    Parse,
    Schema,
}

impl LoadError {
    pub fn schema(index: Option<usize>, reason: impl Into<String>) -> Self {
        LoadError::Schema {
            index,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::Transport(_) | LoadError::Status(_) => LoadErrorKind::Transport,
            LoadError::Parse(_) => LoadErrorKind::Parse,
            LoadError::Schema { .. } => LoadErrorKind::Schema,
        }
    }

    pub fn user_message(&self) -> &'static str {
        LOAD_ERROR_USER_MESSAGE
    }

    pub fn detail(&self) -> String {
        self.to_string()
    }
}

fn item_suffix(index: &Option<usize>) -> String {
    index.map(|i| format!(" (item #{i})")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups_status_with_transport() {
        assert_eq!(LoadError::Status(404).kind(), LoadErrorKind::Transport);
        assert_eq!(LoadError::Transport("offline".into()).kind(), LoadErrorKind::Transport);
        assert_eq!(LoadError::Parse("eof".into()).kind(), LoadErrorKind::Parse);
        assert_eq!(LoadError::schema(None, "x").kind(), LoadErrorKind::Schema);
    }

    #[test]
    fn test_detail_text() {
        assert_eq!(LoadError::Status(500).detail(), "HTTP error: 500");
        assert_eq!(
            LoadError::schema(Some(2), "name must not be empty").detail(),
            "Invalid catalog (item #2): name must not be empty"
        );
        assert_eq!(
            LoadError::schema(None, "missing `herramientas` array").detail(),
            "Invalid catalog: missing `herramientas` array"
        );
    }

    #[test]
    fn test_user_message_is_fixed() {
        assert_eq!(LoadError::Status(404).user_message(), LOAD_ERROR_USER_MESSAGE);
        assert_eq!(LoadError::Parse("x".into()).user_message(), LOAD_ERROR_USER_MESSAGE);
    }
}
