use plantsim_schemas::{EnvironmentKey, PlantStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Locale {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "ar" | "arabic" => Some(Self::Arabic),
            _ => None,
        }
    }
}

pub fn status_label(status: PlantStatus, locale: Locale) -> &'static str {
    match locale {
        Locale::English => match status {
            PlantStatus::Healthy => "Healthy",
            PlantStatus::Fruiting => "Fruiting",
            PlantStatus::Wilted => "Wilted",
            PlantStatus::Frozen => "Frozen",
            PlantStatus::Dried => "Dried",
            PlantStatus::Broken => "Broken",
            PlantStatus::Windy => "Windy",
        },
        Locale::Arabic => match status {
            PlantStatus::Healthy => "صحي",
            PlantStatus::Fruiting => "مثمر",
            PlantStatus::Wilted => "ذابل",
            PlantStatus::Frozen => "متجمد",
            PlantStatus::Dried => "جاف",
            PlantStatus::Broken => "متكسر",
            PlantStatus::Windy => "عاصف",
        },
    }
}

pub fn key_label(key: EnvironmentKey, locale: Locale) -> &'static str {
    match (locale, key) {
        (Locale::English, EnvironmentKey::Temperature) => "Temperature",
        (Locale::English, EnvironmentKey::Water) => "Water level",
        (Locale::English, EnvironmentKey::Wind) => "Wind speed",
        (Locale::Arabic, EnvironmentKey::Temperature) => "درجة الحرارة",
        (Locale::Arabic, EnvironmentKey::Water) => "مستوى الماء",
        (Locale::Arabic, EnvironmentKey::Wind) => "قوة الرياح",
    }
}

pub fn unit_label(key: EnvironmentKey, locale: Locale) -> &'static str {
    match (locale, key) {
        (Locale::English, key) => key.unit(),
        (Locale::Arabic, EnvironmentKey::Temperature) => "°م",
        (Locale::Arabic, EnvironmentKey::Water) => "%",
        (Locale::Arabic, EnvironmentKey::Wind) => "كم/س",
    }
}

pub fn title(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "Plant Environment Simulator",
        Locale::Arabic => "محاكي تأثير البيئة على النبات",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_distinct_labels() {
        for locale in [Locale::English, Locale::Arabic] {
            let mut labels: Vec<_> = PlantStatus::ALL.iter().map(|s| status_label(*s, locale)).collect();
            labels.sort();
            labels.dedup();
            assert_eq!(labels.len(), PlantStatus::ALL.len());
        }
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("AR"), Some(Locale::Arabic));
        assert_eq!(Locale::from_code("en"), Some(Locale::English));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(status_label(PlantStatus::Frozen, Locale::Arabic), "متجمد");
    }
}
