use anyhow::Context;
use form_config::FormConfig;
use form_store::FormRepository;

use crate::cli::{GlobalFlags, OutputFormat};

/// Shared application resources initialized once at startup.
#[derive(Debug)]
pub struct AppContext {
    pub config: FormConfig,
    pub repo: FormRepository,
}

impl AppContext {
    /// Load layered configuration, apply `--root`, and open the stores.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = FormConfig::load_with_dotenv().context("failed to load configuration")?;
        Self::from_config(config, flags)
    }

    /// Open the stores for an already loaded configuration.
    pub fn from_config(mut config: FormConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if let Some(root) = &flags.root {
            config.storage.root.clone_from(root);
        }
        tracing::debug!(root = %config.storage.root.display(), "opening storage");

        let repo = FormRepository::open(&config.storage).with_context(|| {
            format!(
                "failed to open storage under {}",
                config.storage.root.display()
            )
        })?;
        Ok(Self { config, repo })
    }

    /// Output format for this invocation.
    #[must_use]
    pub fn format(&self, flags: &GlobalFlags) -> OutputFormat {
        flags.output_format(self.config.general.pretty)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn flags(root: Option<&std::path::Path>) -> GlobalFlags {
        GlobalFlags {
            format: None,
            quiet: false,
            verbose: false,
            root: root.map(std::path::Path::to_path_buf),
        }
    }

    #[test]
    fn root_flag_overrides_configured_root() {
        let tmp = TempDir::new().expect("tempdir should create");
        let ctx = AppContext::from_config(FormConfig::default(), &flags(Some(tmp.path())))
            .expect("context should init");

        assert_eq!(ctx.config.storage.root, tmp.path());
        assert!(tmp.path().join("schema").is_dir());
        assert!(tmp.path().join("data").is_dir());
    }

    #[test]
    fn pretty_setting_picks_default_format() {
        let tmp = TempDir::new().expect("tempdir should create");
        let mut config = FormConfig::default();
        config.general.pretty = false;
        let ctx = AppContext::from_config(config, &flags(Some(tmp.path()))).unwrap();
        assert_eq!(ctx.format(&flags(None)), OutputFormat::Raw);
    }
}
