//! Journey document loading.
//!
//! TOML documents map directly onto [`Journey`]. Markdown files are accepted
//! as a lighter format: the first `#` heading is the title, every `##`
//! heading starts a stop, and the lines below it become the stop body.

use anyhow::{Context, Result, bail};
use journey_core::{Journey, Stop};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub fn load_journey(path: &Path) -> Result<Journey> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journey at {}", path.display()))?;

    let journey = if is_markdown(path) {
        info!(path = %path.display(), "Loading markdown journey");
        parse_markdown_journey(&raw)
            .with_context(|| format!("Invalid markdown journey {}", path.display()))?
    } else {
        info!(path = %path.display(), "Loading TOML journey");
        Journey::from_toml_str(&raw)
            .with_context(|| format!("Invalid journey document {}", path.display()))?
    };

    info!(
        title = %journey.title,
        stops = journey.stops.len(),
        "Journey loaded"
    );
    Ok(journey)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "md" | "markdown"))
        .unwrap_or(false)
}

pub(crate) fn parse_markdown_journey(raw: &str) -> Result<Journey> {
    let mut title = None;
    let mut subtitle = Vec::new();
    let mut stops: Vec<Stop> = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();
        if let Some(heading) = trimmed.strip_prefix("## ") {
            let heading = heading.trim();
            let id = unique_slug(heading, &stops);
            debug!(%id, "Markdown stop");
            stops.push(Stop {
                id,
                label: None,
                title: heading.to_string(),
                lines: Vec::new(),
            });
        } else if let Some(heading) = trimmed.strip_prefix("# ") {
            if title.is_none() {
                title = Some(heading.trim().to_string());
            }
        } else if trimmed.is_empty() {
            continue;
        } else if let Some(stop) = stops.last_mut() {
            let body = trimmed.trim_start_matches(['-', '*']).trim();
            stop.lines.push(body.to_string());
        } else if title.is_some() {
            subtitle.push(trimmed.to_string());
        }
    }

    let Some(title) = title else {
        bail!("Markdown journey needs a '# Title' heading");
    };
    let journey = Journey {
        title,
        subtitle: subtitle.join(" "),
        start_label: None,
        stops,
    };
    journey.validate()?;
    Ok(journey)
}

fn unique_slug(heading: &str, existing: &[Stop]) -> String {
    let mut base = String::with_capacity(heading.len());
    for ch in heading.chars() {
        if ch.is_alphanumeric() {
            base.extend(ch.to_lowercase());
        } else if !base.ends_with('-') && !base.is_empty() {
            base.push('-');
        }
    }
    let base = base.trim_end_matches('-').to_string();
    let base = if base.is_empty() {
        format!("stop-{}", existing.len() + 1)
    } else {
        base
    };

    let mut candidate = base.clone();
    let mut suffix = 2;
    while existing.iter().any(|stop| stop.id == candidate) {
        candidate = format!("{base}-{suffix}");
        suffix += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_headings_become_stops() {
        let raw = "# My Career\nA road trip through work.\n\n## First Job\n- Wrote tests\n- Shipped code\n\n## First Job\nAgain\n";
        let journey = parse_markdown_journey(raw).expect("markdown journey");
        assert_eq!(journey.title, "My Career");
        assert_eq!(journey.subtitle, "A road trip through work.");
        assert_eq!(journey.stops.len(), 2);
        assert_eq!(journey.stops[0].id, "first-job");
        assert_eq!(journey.stops[1].id, "first-job-2");
        assert_eq!(journey.stops[0].lines, vec!["Wrote tests", "Shipped code"]);
    }

    #[test]
    fn markdown_without_title_is_rejected() {
        let err = parse_markdown_journey("## Orphan\n").expect_err("missing title");
        assert!(err.to_string().contains("Title"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_journey(Path::new("nope/journey.toml")).expect_err("missing file");
        assert!(format!("{err:#}").contains("nope/journey.toml"));
    }

    #[test]
    fn bundled_sample_journey_loads() {
        let journey = load_journey(Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/conf/journey.toml"
        )))
        .expect("sample journey");
        assert!(journey.stops.len() >= 3);
    }
}
