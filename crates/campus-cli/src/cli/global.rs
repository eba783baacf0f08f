use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    /// Parse a config-file spelling (`"json"`, `"table"`, `"raw"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "table" => Some(Self::Table),
            "raw" => Some(Self::Raw),
            _ => None,
        }
    }
}

/// Global flags available before or after subcommands, with config
/// defaults already resolved.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub default_limit: u32,
}

impl GlobalFlags {
    /// Effective row limit: per-command arg → global flag → config default.
    #[must_use]
    pub fn effective_limit(&self, arg: Option<u32>) -> usize {
        arg.or(self.limit).unwrap_or(self.default_limit) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_accepts_known_formats() {
        assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name(" TABLE "), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }

    #[test]
    fn effective_limit_prefers_the_most_specific_source() {
        let flags = GlobalFlags {
            format: OutputFormat::Table,
            limit: Some(50),
            default_limit: 20,
        };
        assert_eq!(flags.effective_limit(Some(5)), 5);
        assert_eq!(flags.effective_limit(None), 50);

        let no_flag = GlobalFlags { limit: None, ..flags };
        assert_eq!(no_flag.effective_limit(None), 20);
    }
}
