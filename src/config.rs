//! Configuration types for log-to-HTML rendering.
//!
//! All rendering behaviour is controlled through [`RenderConfig`], built via
//! its [`RenderConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share configs between the library API and the CLI, and to diff
//! two runs to understand why their outputs differ.
//!
//! # Design choice: builder over constructor
//! Callers usually want the defaults (built-in template, label from the file
//! name, machine-local timezone). The builder lets them override exactly the
//! fields they care about and keeps `build()` as the single place where a
//! custom template is validated.

use crate::error::Bole2HtmlError;
use crate::template;

/// Configuration for a log-to-HTML rendering run.
///
/// Built via [`RenderConfig::builder()`] or using
/// [`RenderConfig::default()`].
///
/// # Example
/// ```rust
/// use bole2html::RenderConfig;
///
/// let config = RenderConfig::builder()
///     .source_label("api-server.log")
///     .utc_offset_minutes(120)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Custom document template text. `None` uses [`template::DEFAULT_TEMPLATE`].
    ///
    /// A template is any HTML (or other text) containing the placeholder
    /// tokens [`template::FILE_TOKEN`] and [`template::BODY_TOKEN`]. Only the
    /// first occurrence of each token is substituted; the CSS class names the
    /// line markup emits are listed in [`template`].
    pub template: Option<String>,

    /// Label substituted for the filename placeholder. `None` uses the input
    /// path as given by the caller.
    pub source_label: Option<String>,

    /// Fixed UTC offset in minutes (east positive) for the time-of-day
    /// column. Default: `None`.
    ///
    /// `None` reads the machine's *current* local offset each run, which is
    /// what a developer opening their own logs expects — but it makes output
    /// depend on where and when the conversion runs. Pin an explicit offset
    /// for reproducible output (CI, golden files, sharing reports across
    /// timezones). Note the current offset is applied to every record, even
    /// ones logged under a different DST offset.
    pub utc_offset_minutes: Option<i32>,
}

impl RenderConfig {
    /// Create a new builder for `RenderConfig`.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder {
            config: Self::default(),
        }
    }

    /// The template text in effect: the custom one, or the built-in default.
    pub fn template_text(&self) -> &str {
        self.template.as_deref().unwrap_or(template::DEFAULT_TEMPLATE)
    }
}

/// Builder for [`RenderConfig`].
#[derive(Debug)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.config.template = Some(template.into());
        self
    }

    pub fn source_label(mut self, label: impl Into<String>) -> Self {
        self.config.source_label = Some(label.into());
        self
    }

    pub fn utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.config.utc_offset_minutes = Some(minutes);
        self
    }

    /// Build the configuration, validating constraints.
    ///
    /// A custom template that contains *neither* placeholder token would
    /// silently produce the template verbatim for every input, so it is
    /// rejected here rather than discovered in the output.
    pub fn build(self) -> Result<RenderConfig, Bole2HtmlError> {
        if let Some(ref tpl) = self.config.template {
            if !tpl.contains(template::FILE_TOKEN) && !tpl.contains(template::BODY_TOKEN) {
                return Err(Bole2HtmlError::InvalidConfig(format!(
                    "custom template contains neither '{}' nor '{}'",
                    template::FILE_TOKEN,
                    template::BODY_TOKEN
                )));
            }
        }
        if let Some(mins) = self.config.utc_offset_minutes {
            // Real-world offsets span UTC-12:00 to UTC+14:00.
            if !(-720..=840).contains(&mins) {
                return Err(Bole2HtmlError::InvalidConfig(format!(
                    "UTC offset must be -720..=840 minutes, got {mins}"
                )));
            }
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_builtin_template() {
        let config = RenderConfig::default();
        assert_eq!(config.template_text(), template::DEFAULT_TEMPLATE);
    }

    #[test]
    fn builder_accepts_template_with_body_token() {
        let config = RenderConfig::builder()
            .template("<pre>%body%</pre>")
            .build()
            .unwrap();
        assert_eq!(config.template_text(), "<pre>%body%</pre>");
    }

    #[test]
    fn builder_rejects_template_without_tokens() {
        let err = RenderConfig::builder()
            .template("<html>static page</html>")
            .build()
            .unwrap_err();
        assert!(matches!(err, Bole2HtmlError::InvalidConfig(_)));
    }

    #[test]
    fn builder_rejects_absurd_offset() {
        let err = RenderConfig::builder()
            .utc_offset_minutes(100_000)
            .build()
            .unwrap_err();
        assert!(matches!(err, Bole2HtmlError::InvalidConfig(_)));
    }

    #[test]
    fn builder_accepts_extreme_real_offsets() {
        assert!(RenderConfig::builder().utc_offset_minutes(-720).build().is_ok());
        assert!(RenderConfig::builder().utc_offset_minutes(840).build().is_ok());
    }
}
