//! `nrt convert` — NEUT container files → RooTracker JSON lines.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use nrt_convert::{ConvertConfig, JsonlSink, run};
use nrt_neut::JsonChainSource;

/// Parse a comma-separated mode list like `"1,2,27"`.
fn parse_mode_list(s: &str) -> Result<Vec<i32>> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<i32>().with_context(|| format!("bad interaction mode '{p}'")))
        .collect()
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_convert(
    inputs: &[PathBuf],
    output: &Path,
    max_events: Option<u64>,
    gev: bool,
    lite: bool,
    emulate_nuwro: bool,
    skip_non_fs: bool,
    save_isbound: bool,
    ignore_modes: Option<&str>,
) -> Result<()> {
    let mut cfg = ConvertConfig::new();
    if gev {
        cfg = cfg.gev();
    }
    if lite {
        cfg = cfg.lite();
    }
    if emulate_nuwro {
        cfg = cfg.nuwro();
    }
    if skip_non_fs {
        cfg = cfg.skip_non_fs();
    }
    if save_isbound {
        cfg = cfg.save_is_bound();
    }
    if let Some(modes) = ignore_modes {
        let modes = parse_mode_list(modes)?;
        tracing::info!(?modes, "ignoring interactions with these modes");
        cfg = cfg.ignore_modes(&modes);
    }
    if let Some(n) = max_events {
        cfg = cfg.max_events(n);
    }

    tracing::info!("reading {} input file(s)", inputs.len());
    let mut source = JsonChainSource::open(inputs)?;

    let mut sink = JsonlSink::create(output)?;

    let summary = run(&mut source, &mut sink, &cfg)?;

    eprintln!(
        "Wrote {} events to {}{}",
        summary.written,
        output.display(),
        if summary.ignored > 0 {
            format!(" ({} ignored by interaction mode)", summary.ignored)
        } else {
            String::new()
        },
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_modes() {
        assert_eq!(parse_mode_list("1,2,27").unwrap(), vec![1, 2, 27]);
        assert_eq!(parse_mode_list(" -1, 16 ").unwrap(), vec![-1, 16]);
        assert_eq!(parse_mode_list("").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn rejects_non_numeric_modes() {
        assert!(parse_mode_list("1,x").is_err());
    }
}
