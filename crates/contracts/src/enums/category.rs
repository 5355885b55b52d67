use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Категория позиции каталога
///
/// Unknown or missing codes fall back to [`Category::Tools`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Tools,
    Equipment,
    Gardening,
    Cleaning,
}

impl Category {
    /// Код категории в файле каталога
    pub fn code(&self) -> &'static str {
        match self {
            Category::Tools => "herramientas",
            Category::Equipment => "equipo",
            Category::Gardening => "jardineria",
            Category::Cleaning => "limpieza",
        }
    }

    /// Текст бейджа категории
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Tools => "HERRAMIENTA",
            Category::Equipment => "EQUIPO",
            Category::Gardening => "JARDINERÍA",
            Category::Cleaning => "LIMPIEZA",
        }
    }

    /// CSS class of the category badge
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Tools => "category-herramientas",
            Category::Equipment => "category-equipo",
            Category::Gardening => "category-jardineria",
            Category::Cleaning => "category-limpieza",
        }
    }

    /// Парсинг из строки (испанские коды и английские имена)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "herramientas" | "tools" => Some(Category::Tools),
            "equipo" | "equipment" => Some(Category::Equipment),
            "jardineria" | "jardinería" | "gardening" => Some(Category::Gardening),
            "limpieza" | "cleaning" => Some(Category::Cleaning),
            _ => None,
        }
    }

    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Any non-string value is treated like an unknown code.
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(raw
            .as_ref()
            .and_then(|v| v.as_str())
            .map(Category::from_code_or_default)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_both_vocabularies() {
        assert_eq!(Category::from_code("equipo"), Some(Category::Equipment));
        assert_eq!(Category::from_code("Gardening"), Some(Category::Gardening));
        assert_eq!(Category::from_code(" limpieza "), Some(Category::Cleaning));
        assert_eq!(Category::from_code("vehiculos"), None);
    }

    #[test]
    fn test_unknown_category_falls_back_to_tools() {
        let parsed: Category = serde_json::from_str("\"vehiculos\"").unwrap();
        assert_eq!(parsed, Category::Tools);
        assert_eq!(parsed.display_name(), "HERRAMIENTA");
        assert_eq!(parsed.css_class(), "category-herramientas");

        let parsed: Category = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, Category::Tools);
    }

    #[test]
    fn test_serializes_as_code() {
        for category in [
            Category::Tools,
            Category::Equipment,
            Category::Gardening,
            Category::Cleaning,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.code()));
        }
    }
}
