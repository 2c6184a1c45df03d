use clap::Parser;
use crate::prelude::*;

#[derive(Clone, Debug, Parser)]
pub struct SessionOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[arg(short, long)]
    pub rows: Option<usize>,

    #[arg(short, long)]
    pub columns: Option<usize>,

    #[arg(short, long)]
    pub spawn_col: Option<i32>,

    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Settings a session plays by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub rows: usize,
    pub columns: usize,

    /// Column new pieces appear at; centred on the board when unset.
    pub spawn_col: Option<i32>,

    /// Print the board after every command that changes it.
    pub verbose: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            spawn_col: None,
            verbose: false,
        }
    }
}

impl SessionOptions {
    pub fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::default();

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if self.spawn_col.is_some() {
            config.spawn_col = self.spawn_col;
        }
        if self.verbose {
            config.verbose = true;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let options = SessionOptions::parse_from(["blocks", "--rows", "12", "-s", "3", "-v"]);
        let config = options.session_config();
        assert_eq!(config.rows, 12);
        assert_eq!(config.columns, DEFAULT_COLUMNS);
        assert_eq!(config.spawn_col, Some(3));
        assert!(config.verbose);
    }

    #[test]
    fn no_flags_means_defaults() {
        let options = SessionOptions::parse_from(["blocks"]);
        assert_eq!(options.session_config(), SessionConfig::default());
        assert!(options.log_level.is_none());
    }
}
