//! Startup configuration read once from the environment.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `BLOCKFALL_HIGHSCORE_PATH` | High-score file (default: `$XDG_CONFIG_HOME/blockfall/highscore.json`) |
//! | `BLOCKFALL_SEED` | `u64` seed for a reproducible piece sequence |
//! | `BLOCKFALL_CELL_WIDTH` | Terminal columns per board cell, 1-4 (default 2) |

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::term::MAX_CELL_SIZE;

pub const HIGHSCORE_PATH_VAR: &str = "BLOCKFALL_HIGHSCORE_PATH";
pub const SEED_VAR: &str = "BLOCKFALL_SEED";
pub const CELL_WIDTH_VAR: &str = "BLOCKFALL_CELL_WIDTH";

const DEFAULT_CELL_WIDTH: u16 = 2;
const MAX_CELL_WIDTH: u16 = MAX_CELL_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub highscore_path: PathBuf,
    /// `None` seeds the piece sequence from OS entropy.
    pub seed: Option<u64>,
    pub cell_width: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Result<Self> {
        let highscore_path = match lookup(HIGHSCORE_PATH_VAR) {
            Some(explicit) => PathBuf::from(explicit),
            None => default_highscore_path(&lookup),
        };

        let seed = match lookup(SEED_VAR) {
            Some(raw) => Some(parse_var::<u64>(SEED_VAR, raw)?),
            None => None,
        };

        let cell_width = match lookup(CELL_WIDTH_VAR) {
            Some(raw) => {
                let width = parse_var::<u16>(CELL_WIDTH_VAR, raw)?;
                if !(1..=MAX_CELL_WIDTH).contains(&width) {
                    bail!("{CELL_WIDTH_VAR} must be between 1 and {MAX_CELL_WIDTH}, got {width}");
                }
                width
            }
            None => DEFAULT_CELL_WIDTH,
        };

        Ok(Self {
            highscore_path,
            seed,
            cell_width,
        })
    }
}

fn default_highscore_path(lookup: &impl Fn(&str) -> Option<OsString>) -> PathBuf {
    let base = lookup("XDG_CONFIG_HOME").map(PathBuf::from).or_else(|| {
        lookup("HOME").map(|home| {
            let mut p = PathBuf::from(home);
            p.push(".config");
            p
        })
    });

    match base {
        Some(mut path) => {
            path.push("blockfall");
            path.push("highscore.json");
            path
        }
        None => PathBuf::from("highscore.json"),
    }
}

fn parse_var<T>(name: &str, raw: OsString) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let text = raw
        .into_string()
        .map_err(|_| anyhow::anyhow!("{name} is not valid UTF-8"))?;
    text.trim()
        .parse()
        .with_context(|| format!("Invalid {name}: {text:?}"))
}
