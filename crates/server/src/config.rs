use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tbm_live_core::transit::FileDatasetSource;
use tracing::level_filters::LevelFilter;

/// Dashboard settings, from the command line or the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "tbm-live")]
#[command(author, version, about = "TBM : un diaporama du réseau", long_about = None)]
pub struct ShellConfig {
    /// Address the dashboard listens on
    #[arg(long, env = "TBM_BIND", default_value = "127.0.0.1:8501")]
    pub bind: SocketAddr,

    /// Directory holding the station table and the line geometry
    #[arg(long, env = "TBM_DATA_DIR", default_value = "Data")]
    pub data_dir: PathBuf,

    /// Station table, overrides the file in the data directory
    #[arg(long, env = "TBM_STATIONS_FILE")]
    pub stations_file: Option<PathBuf>,

    /// Line geometry, overrides the file in the data directory
    #[arg(long, env = "TBM_LINES_FILE")]
    pub lines_file: Option<PathBuf>,

    /// Directory served under /assets (Images/, Video/)
    #[arg(long, env = "TBM_ASSETS_DIR", default_value = ".")]
    pub assets_dir: PathBuf,

    /// Line-delimited fun facts shown on the network view
    #[arg(long, env = "TBM_FACTS_FILE", default_value = "facts.txt")]
    pub facts_file: PathBuf,

    /// MapTiler key for the light basemap
    #[arg(long, env = "MAPTILER_API_KEY", hide_env_values = true)]
    pub maptiler_api_key: Option<String>,

    /// Debug logging (ignored when RUST_LOG is set)
    #[arg(short, long)]
    pub verbose: bool,
}

impl ShellConfig {
    pub fn dataset_source(&self) -> FileDatasetSource {
        let defaults = FileDatasetSource::in_dir(&self.data_dir);
        FileDatasetSource::new(
            self.stations_file
                .clone()
                .unwrap_or_else(|| defaults.stations_path().to_path_buf()),
            self.lines_file
                .clone()
                .unwrap_or_else(|| defaults.lines_path().to_path_buf()),
        )
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_data_dir_defaults() {
        let config =
            ShellConfig::try_parse_from(["tbm-live", "--data-dir", "/srv/tbm"]).unwrap();
        let source = config.dataset_source();

        assert_eq!(source.stations_path(), Path::new("/srv/tbm/stations_VCube.csv"));
        assert_eq!(source.lines_path(), Path::new("/srv/tbm/gdfbustrambat.json"));
        assert_eq!(config.log_level(), LevelFilter::INFO);
    }

    #[test]
    fn test_file_overrides() {
        let config = ShellConfig::try_parse_from([
            "tbm-live",
            "--stations-file",
            "/tmp/v3.csv",
            "--bind",
            "0.0.0.0:9000",
            "-v",
        ])
        .unwrap();
        let source = config.dataset_source();

        assert_eq!(source.stations_path(), Path::new("/tmp/v3.csv"));
        assert!(source.lines_path().ends_with("gdfbustrambat.json"));
        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.log_level(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        assert!(ShellConfig::try_parse_from(["tbm-live", "--bind", "nowhere"]).is_err());
    }
}
