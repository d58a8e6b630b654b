use comfort_engine::{AmbientLevel, AmbientToken};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ambient light as it appears in config files and request bodies.
///
/// Either a luminance proxy (`0.4`) or a token name (`"dim"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AmbientSetting {
    /// Luminance proxy, clamped to 0..=1 when scored
    Level(f64),
    /// `dark`, `dim`, `medium` or `bright`
    Name(String),
}

impl AmbientSetting {
    /// Resolve to an engine level. Unknown names resolve to `None`, which
    /// the scorer treats as the default ambient.
    pub fn to_level(&self) -> Option<AmbientLevel> {
        let level = match self {
            AmbientSetting::Level(value) if value.is_nan() => None,
            AmbientSetting::Level(value) => Some(AmbientLevel::Numeric(*value)),
            AmbientSetting::Name(name) => AmbientLevel::parse(name),
        };
        if level.is_none() {
            tracing::debug!(ambient = ?self, "Unrecognized ambient, using default");
        }
        level
    }
}

impl From<AmbientToken> for AmbientSetting {
    fn from(token: AmbientToken) -> Self {
        AmbientSetting::Name(token.as_str().to_string())
    }
}

/// Resolve an optional request/CLI ambient string, falling back to `fallback`
/// when the string is absent.
pub fn resolve_ambient(
    input: Option<&str>,
    fallback: Option<&AmbientSetting>,
) -> Option<AmbientLevel> {
    match input {
        Some(raw) => AmbientSetting::Name(raw.to_string()).to_level(),
        None => fallback.and_then(AmbientSetting::to_level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_level() {
        assert_eq!(
            AmbientSetting::Level(0.4).to_level(),
            Some(AmbientLevel::Numeric(0.4))
        );
        assert_eq!(
            AmbientSetting::Name("Dim".to_string()).to_level(),
            Some(AmbientLevel::Named(AmbientToken::Dim))
        );
        assert_eq!(AmbientSetting::Name("foggy".to_string()).to_level(), None);
        assert_eq!(AmbientSetting::Level(f64::NAN).to_level(), None);
    }

    #[test]
    fn test_deserialize_untagged() {
        let level: AmbientSetting = serde_yaml::from_str("0.25").unwrap();
        assert_eq!(level, AmbientSetting::Level(0.25));

        let name: AmbientSetting = serde_yaml::from_str("bright").unwrap();
        assert_eq!(name, AmbientSetting::Name("bright".to_string()));

        let json: AmbientSetting = serde_json::from_str("1").unwrap();
        assert_eq!(json, AmbientSetting::Level(1.0));
    }

    #[test]
    fn test_resolve_prefers_input() {
        let fallback = AmbientSetting::from(AmbientToken::Dark);
        assert_eq!(
            resolve_ambient(Some("0.9"), Some(&fallback)),
            Some(AmbientLevel::Numeric(0.9))
        );
        assert_eq!(
            resolve_ambient(None, Some(&fallback)),
            Some(AmbientLevel::Named(AmbientToken::Dark))
        );
        assert_eq!(resolve_ambient(None, None), None);
    }

    #[test]
    fn test_resolve_unknown_input_does_not_use_fallback() {
        let fallback = AmbientSetting::from(AmbientToken::Dark);
        assert_eq!(resolve_ambient(Some("twilight"), Some(&fallback)), None);
    }
}
