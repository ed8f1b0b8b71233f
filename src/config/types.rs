use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Smallest column count accepted for `wrap-width`.
pub const MIN_WRAP_WIDTH: usize = 40;

/// Effective viewer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Ask the engine for untranslated field names and values
    pub raw_view: bool,

    /// Wrap long lines when printing views
    pub word_wrap: bool,

    /// Column to wrap at when `word_wrap` is on
    pub wrap_width: usize,

    /// Explicit mediainfo binary; `PATH` is searched when unset
    pub mediainfo: Option<PathBuf>,

    /// Seconds a single file load may take
    #[serde(rename = "load-timeout")]
    pub load_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            raw_view: false,
            word_wrap: false,
            wrap_width: 100,
            mediainfo: None,
            load_timeout_secs: 30,
        }
    }
}

/// The keys a settings file may set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    RawView,
    WordWrap,
    WrapWidth,
    Mediainfo,
    LoadTimeout,
}

impl SettingKey {
    pub const ALL: [SettingKey; 5] = [
        SettingKey::RawView,
        SettingKey::WordWrap,
        SettingKey::WrapWidth,
        SettingKey::Mediainfo,
        SettingKey::LoadTimeout,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::RawView => "raw-view",
            SettingKey::WordWrap => "word-wrap",
            SettingKey::WrapWidth => "wrap-width",
            SettingKey::Mediainfo => "mediainfo",
            SettingKey::LoadTimeout => "load-timeout",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A settings line that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingError {
    #[error("line {line}: unknown setting '{key}'")]
    UnknownKey { line: usize, key: String },

    #[error("line {line}: invalid value '{value}' for {key} (expected {expected})")]
    InvalidValue {
        line: usize,
        key: SettingKey,
        value: String,
        expected: &'static str,
    },
}

impl Settings {
    /// Parse `key = value` text, logging and skipping lines that fail.
    pub fn parse(text: &str) -> Self {
        let (settings, errors) = Self::parse_with_errors(text);
        for err in errors {
            tracing::warn!("Ignoring setting: {err}");
        }
        settings
    }

    /// Parse `key = value` text, returning the rejected lines alongside.
    ///
    /// Lines without `=` are ignored. A rejected line leaves the previous
    /// value of its key in place; later lines override earlier ones.
    pub fn parse_with_errors(text: &str) -> (Self, Vec<SettingError>) {
        let mut settings = Self::default();
        let mut errors = Vec::new();

        for (i, line) in text.lines().enumerate() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            let line = i + 1;

            let result = match SettingKey::from_key(key) {
                Some(key) => settings.apply(key, value, line),
                None => Err(SettingError::UnknownKey {
                    line,
                    key: key.to_string(),
                }),
            };
            if let Err(err) = result {
                errors.push(err);
            }
        }

        (settings, errors)
    }

    fn apply(&mut self, key: SettingKey, value: &str, line: usize) -> Result<(), SettingError> {
        let invalid = |expected| SettingError::InvalidValue {
            line,
            key,
            value: value.to_string(),
            expected,
        };

        match key {
            SettingKey::RawView => {
                self.raw_view = parse_bool(value).ok_or_else(|| invalid("yes or no"))?
            }
            SettingKey::WordWrap => {
                self.word_wrap = parse_bool(value).ok_or_else(|| invalid("yes or no"))?
            }
            SettingKey::WrapWidth => {
                self.wrap_width = value
                    .parse()
                    .ok()
                    .filter(|w| *w >= MIN_WRAP_WIDTH)
                    .ok_or_else(|| invalid("a column count of at least 40"))?
            }
            SettingKey::Mediainfo => {
                self.mediainfo = (!value.is_empty()).then(|| PathBuf::from(value))
            }
            SettingKey::LoadTimeout => {
                self.load_timeout_secs = value
                    .parse()
                    .ok()
                    .filter(|s| *s > 0)
                    .ok_or_else(|| invalid("a positive number of seconds"))?
            }
        }
        Ok(())
    }

    /// Render as settings file text.
    pub fn to_conf(&self) -> String {
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        let mut out = String::new();
        for key in SettingKey::ALL {
            let value = match key {
                SettingKey::RawView => yes_no(self.raw_view).to_string(),
                SettingKey::WordWrap => yes_no(self.word_wrap).to_string(),
                SettingKey::WrapWidth => self.wrap_width.to_string(),
                SettingKey::Mediainfo => self
                    .mediainfo
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
                SettingKey::LoadTimeout => self.load_timeout_secs.to_string(),
            };
            out.push_str(&format!("{key} = {value}\n"));
        }
        out
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "yes" | "true" | "on" => Some(true),
        "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_for_empty_text() {
        assert_eq!(Settings::parse(""), Settings::default());
    }

    #[test]
    fn typed_values() {
        let text = "\nraw-view = yes\nword-wrap=TRUE\nwrap-width = 120\nmediainfo = /opt/mi/mediainfo\nload-timeout = 5\n";
        let (settings, errors) = Settings::parse_with_errors(text);
        assert!(errors.is_empty(), "{errors:?}");
        assert!(settings.raw_view);
        assert!(settings.word_wrap);
        assert_eq!(settings.wrap_width, 120);
        assert_eq!(settings.mediainfo, Some(PathBuf::from("/opt/mi/mediainfo")));
        assert_eq!(settings.load_timeout_secs, 5);
    }

    #[test]
    fn bad_lines_are_skipped() {
        let text = "font = Consolas\nraw-view = maybe\nwrap-width = 10\nload-timeout = 0\nword-wrap = yes";
        let (settings, errors) = Settings::parse_with_errors(text);

        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors[0],
            SettingError::UnknownKey {
                line: 1,
                key: "font".into()
            }
        );
        assert!(matches!(
            errors[1],
            SettingError::InvalidValue {
                key: SettingKey::RawView,
                line: 2,
                ..
            }
        ));
        assert!(!settings.raw_view);
        assert_eq!(settings.wrap_width, 100);
        assert_eq!(settings.load_timeout_secs, 30);
        assert!(settings.word_wrap);
    }

    #[test]
    fn error_messages() {
        let (_, errors) = Settings::parse_with_errors("raw-view = maybe");
        assert_eq!(
            errors[0].to_string(),
            "line 1: invalid value 'maybe' for raw-view (expected yes or no)"
        );
    }

    #[test]
    fn lines_without_equals_are_ignored() {
        let (settings, errors) = Settings::parse_with_errors("# comment\nraw-view yes\n");
        assert!(errors.is_empty());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn later_lines_override() {
        let settings = Settings::parse("raw-view = yes\nraw-view = no\n");
        assert!(!settings.raw_view);
    }

    #[test]
    fn empty_mediainfo_means_path_lookup() {
        let settings = Settings::parse("mediainfo = /x\nmediainfo =\n");
        assert_eq!(settings.mediainfo, None);
    }

    #[test]
    fn conf_text_parses_back() {
        let settings = Settings {
            raw_view: true,
            word_wrap: true,
            wrap_width: 80,
            mediainfo: Some(PathBuf::from("/usr/bin/mediainfo")),
            load_timeout_secs: 12,
        };
        assert_eq!(Settings::parse(&settings.to_conf()), settings);
    }
}
