use derive_builder::Builder;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Presentation settings for [`Matrix`](crate::algebra::Matrix) and
/// [`Vector`](crate::algebra::Vector) display strings.
///
/// __Example usage__ :
///
/// ```
/// use densealg::algebra::*;
///
/// let settings = FormatSettingsBuilder::default()
///     .precision(2)
///     .column_marker("'")
///     .build()
///     .unwrap();
///
/// let v = Vector::from_values(vec![1.0, 2.5]).unwrap();
/// assert_eq!(v.to_display_with(&settings), "[1.00, 2.50]'");
/// ```

#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatSettings {
    ///fixed number of decimal places, or shortest representation if unset
    #[builder(default, setter(strip_option))]
    pub precision: Option<usize>,

    ///separator placed between elements
    #[builder(default = "String::from(\", \")", setter(into))]
    pub separator: String,

    ///marker appended to column vectors
    #[builder(default = "String::from(\"T\")", setter(into))]
    pub column_marker: String,
}

impl Default for FormatSettings {
    fn default() -> FormatSettings {
        FormatSettingsBuilder::default().build().unwrap()
    }
}

impl FormatSettingsBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.separator {
            Some(sep) if sep.is_empty() => Err("separator must not be empty".to_string()),
            _ => Ok(()),
        }
    }
}

impl FormatSettings {
    pub(crate) fn format_value<T: std::fmt::Display>(&self, v: T) -> String {
        match self.precision {
            Some(p) => format!("{v:.p$}"),
            None => format!("{v}"),
        }
    }

    pub(crate) fn format_list<T, I>(&self, values: I) -> String
    where
        T: std::fmt::Display,
        I: IntoIterator<Item = T>,
    {
        let items: Vec<String> = values.into_iter().map(|v| self.format_value(v)).collect();
        format!("[{}]", items.join(&self.separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = FormatSettings::default();
        assert_eq!(settings.precision, None);
        assert_eq!(settings.separator, ", ");
        assert_eq!(settings.column_marker, "T");
    }

    #[test]
    fn test_empty_separator_rejected() {
        let result = FormatSettingsBuilder::default().separator("").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_format_list() {
        let settings = FormatSettingsBuilder::default()
            .precision(1)
            .separator(";")
            .build()
            .unwrap();
        assert_eq!(settings.format_list([1.0, -2.26]), "[1.0;-2.3]");
        assert_eq!(settings.format_list(Vec::<f64>::new()), "[]");
    }
}
