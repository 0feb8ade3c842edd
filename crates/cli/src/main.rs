// ABOUTME: CLI for validating article images using the copydesk content resolver.
// ABOUTME: Loads articles from JSON, scans content images, and optionally HEAD-checks them.

use std::fs;
use std::io::{self, Read};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use copydesk_content::{resolve_src, scan_image_sources, Article};
use serde_json::{json, Value};

/// Scan article content for images and report their status as JSON.
#[derive(Parser, Debug)]
#[command(name = "copydesk-cli")]
#[command(about = "Validate images referenced in article content", long_about = None)]
struct Args {
    /// Article JSON file(s), each a single article object or an array of
    /// articles. Use "-" to read one target from stdin.
    #[arg(required = true)]
    targets: Vec<String>,

    /// Issue a HEAD request per image URL and mark each ok or broken.
    #[arg(long, default_value_t = false)]
    check: bool,

    /// Request timeout in seconds, used with --check.
    #[arg(long, default_value_t = 5)]
    timeout_secs: u64,

    /// Base URL for resolving relative image sources.
    #[arg(long)]
    base_url: Option<String>,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let client = if args.check {
        Some(
            reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(args.timeout_secs))
                .build()
                .context("building HTTP client")?,
        )
    } else {
        None
    };

    let mut reports = Vec::new();
    let mut total_images = 0usize;
    let mut broken = 0usize;

    for target in &args.targets {
        for article in load_articles(target)? {
            let sources = scan_image_sources(&article.content);
            total_images += sources.len();

            let images: Vec<Value> = sources
                .iter()
                .map(|src| {
                    let resolved = resolve_src(src, args.base_url.as_deref());
                    let (status, detail) = image_status(client.as_ref(), resolved.as_deref());
                    if status == "broken" {
                        broken += 1;
                    }
                    json!({
                        "src": src,
                        "resolved": resolved,
                        "status": status,
                        "detail": detail,
                    })
                })
                .collect();

            reports.push(json!({
                "slug": article.slug,
                "title": article.title,
                "image_count": images.len(),
                "images": images,
            }));
        }
    }

    let output = json!({
        "articles": reports,
        "total_articles": reports.len(),
        "total_images": total_images,
        "broken": broken,
        "checked": args.check,
    });

    if args.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

/// Status for one image source. Without --check every resolvable source is
/// "found"; with --check a HEAD request decides ok/broken. Sources that
/// cannot be resolved to an absolute URL are "skipped", as are data URLs.
fn image_status(
    client: Option<&reqwest::blocking::Client>,
    resolved: Option<&str>,
) -> (&'static str, Option<String>) {
    let Some(url) = resolved else {
        return ("skipped", Some("unresolvable relative source".to_string()));
    };
    let Some(client) = client else {
        return ("found", None);
    };
    if url.starts_with("data:") {
        return ("skipped", Some("data URL".to_string()));
    }
    match client.head(url).send() {
        Ok(resp) if resp.status().is_success() => ("ok", None),
        Ok(resp) => ("broken", Some(format!("status {}", resp.status().as_u16()))),
        Err(err) => ("broken", Some(err.to_string())),
    }
}

/// Loads one target as either a single article object or an array of articles.
fn load_articles(target: &str) -> Result<Vec<Article>> {
    let bytes = if target == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        fs::read(target).with_context(|| format!("reading {target}"))?
    };

    let value: Value =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing JSON from {target}"))?;

    let articles = if value.is_array() {
        serde_json::from_value(value).with_context(|| format!("decoding articles from {target}"))?
    } else {
        vec![serde_json::from_value(value)
            .with_context(|| format!("decoding article from {target}"))?]
    };

    Ok(articles)
}
