//! fossview - Entry Point

use clap::Parser;
use fossview::model::AppError;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::info;

/// Terminal client for the Fossensite blog
#[derive(Parser, Debug)]
#[command(name = "fossview")]
#[command(version)]
#[command(about = "Browse the Fossensite blog in the terminal")]
pub struct Args {
    /// Location to open, e.g. /article/3/ (defaults to the configured start path)
    pub path: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Articles per listing page (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = fossview::config::load_config_with_precedence(args.config.clone())
            .map_err(AppError::from)?;
        let merged = fossview::config::merge_config(config_file);
        let with_env = fossview::config::apply_env_overrides(merged);
        fossview::config::apply_cli_overrides(
            with_env,
            args.page_size,
            args.no_color,
            args.path.clone(),
        )
    };

    let _log_guard = fossview::logging::init(&config.log_file_path).map_err(AppError::from)?;
    fossview::logging::install_panic_hook(fossview::view::reset_terminal);

    info!(config = ?config, "Configuration loaded and resolved");

    let catalog = Rc::new(fossview::pages::Catalog::sample());
    let routes =
        fossview::pages::site_routes(catalog, config.page_size).map_err(AppError::from)?;

    let options = fossview::view::ShellOptions::from_config(&config);
    fossview::view::run(routes, options)?;

    info!("exit");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let err = Args::try_parse_from(["fossview", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let err = Args::try_parse_from(["fossview", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["fossview"]);
        assert_eq!(args.path, None);
        assert_eq!(args.config, None);
        assert!(!args.no_color);
        assert_eq!(args.page_size, None);
    }

    #[test]
    fn test_path_is_positional() {
        let args = Args::parse_from(["fossview", "/article/3/"]);
        assert_eq!(args.path.as_deref(), Some("/article/3/"));
    }

    #[test]
    fn test_page_size_rejects_zero() {
        let err = Args::try_parse_from(["fossview", "--page-size", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "fossview",
            "/article/search/?q=rust",
            "--config",
            "/custom/config.toml",
            "--no-color",
            "--page-size",
            "15",
        ]);
        assert_eq!(args.path.as_deref(), Some("/article/search/?q=rust"));
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
        assert!(args.no_color);
        assert_eq!(args.page_size, Some(15));
    }

    #[test]
    fn test_cli_flags_win_over_config_file() {
        use fossview::config::{apply_cli_overrides, merge_config, ConfigFile};

        let file = ConfigFile {
            page_size: Some(20),
            no_color: Some(false),
            ..ConfigFile::default()
        };
        let args = Args::parse_from(["fossview", "--page-size", "5", "--no-color", "/article/"]);
        let resolved = apply_cli_overrides(merge_config(Some(file)), args.page_size, args.no_color, args.path);
        assert_eq!(resolved.page_size, 5);
        assert!(resolved.no_color);
        assert_eq!(resolved.start_path, "/article/");
    }
}
