//! wok-quote: configure a wok range from the terminal and print its layout,
//! quote and warnings.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wok_core::{evaluate, BurnerSpec, ConstructionStyle, RangeOptions, Report, TopMaterial};

#[derive(Parser)]
#[command(name = "wok-quote")]
#[command(about = "Lay out and price a modular wok range", long_about = None)]
struct Cli {
    /// JSON options file used as the starting configuration
    #[arg(long)]
    options: Option<PathBuf>,

    /// Burner slots, left to right, e.g. `15,17:spread-160,13:focused`
    #[arg(short, long, value_delimiter = ',')]
    burners: Vec<String>,

    /// Resize the burner list (new slots copy the last one)
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Available kitchen width in inches
    #[arg(short, long)]
    kitchen_width: Option<f32>,

    /// Scene units per inch
    #[arg(long)]
    scale: Option<f32>,

    /// `california` or `newyork`
    #[arg(short, long)]
    style: Option<String>,

    /// `black` or `stainless`
    #[arg(short, long)]
    top: Option<String>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let options = build_options(&cli)?;
    let report = evaluate(&options);
    log::debug!("evaluated {} burner(s)", report.options.burner_count());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn build_options(cli: &Cli) -> Result<RangeOptions> {
    let mut options = match &cli.options {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            RangeOptions::from_json(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => RangeOptions::default(),
    };

    if !cli.burners.is_empty() {
        let specs = cli
            .burners
            .iter()
            .map(|s| s.parse::<BurnerSpec>())
            .collect::<Result<Vec<_>, _>>()?;
        options.replace_burners(specs);
    }
    if let Some(count) = cli.count {
        options.set_burner_count(count);
    }
    if let Some(width) = cli.kitchen_width {
        options.kitchen_width_in = width;
    }
    if let Some(scale) = cli.scale {
        options.unit_scale = scale;
    }
    if let Some(style) = &cli.style {
        options.style = style.parse::<ConstructionStyle>()?;
    }
    if let Some(top) = &cli.top {
        options.top = top.parse::<TopMaterial>()?;
    }
    Ok(options)
}

fn print_report(report: &Report) {
    let o = &report.options;
    let layout = &report.layout;
    println!(
        "{} style, {} top, {} burner(s)",
        o.style,
        o.top,
        o.burner_count()
    );
    println!(
        "Chassis: {:.1}\" required, {:.1}\" available ({:.3} x {:.3} scene units)",
        report.required_width_in, o.kitchen_width_in, layout.chassis.width, layout.chassis.depth
    );
    println!();
    println!("  #  size  kind            x        z        radius");
    for (i, (spec, slot)) in o.burners.iter().zip(&layout.burners).enumerate() {
        println!(
            "  {}  {:<4}  {:<14}  {:>7.3}  {:>7.3}  {:>7.3}{}",
            i + 1,
            spec.size.to_string(),
            spec.kind.label(),
            slot.x,
            slot.z,
            slot.radius,
            if slot.is_clamped() { " *" } else { "" }
        );
    }
    let faucets: Vec<String> = layout.faucets.iter().map(|f| format!("{:.3}", f.x)).collect();
    println!("Faucets at x = [{}]", faucets.join(", "));
    println!("Legs: {}", layout.legs.len());
    println!();
    for (label, amount) in report.price_lines() {
        println!("  {label:<24}{amount:>10}");
    }
    if !report.warnings.is_empty() {
        println!();
        for w in &report.warnings {
            println!("warning: {w}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wok_core::{BurnerKind, BurnerSize};

    fn cli() -> Cli {
        Cli {
            options: None,
            burners: Vec::new(),
            count: None,
            kitchen_width: None,
            scale: None,
            style: None,
            top: None,
            json: false,
        }
    }

    fn options_file(name: &str, json: &str) -> PathBuf {
        let file = format!("wok-quote-{}-{name}.json", std::process::id());
        let path = std::env::temp_dir().join(file);
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn no_flags_gives_defaults() {
        assert_eq!(build_options(&cli()).unwrap(), RangeOptions::default());
    }

    #[test]
    fn flags_override_the_options_file() {
        let path = options_file(
            "override",
            r#"{"burners": [{"size": 13, "kind": "focused"}], "kitchenWidthIn": 48,
                "style": "newyork", "top": "black"}"#,
        );
        let options = build_options(&Cli {
            options: Some(path.clone()),
            kitchen_width: Some(72.0),
            top: Some("stainless".to_string()),
            ..cli()
        })
        .unwrap();
        std::fs::remove_file(&path).ok();

        // from the file
        assert_eq!(options.style, ConstructionStyle::NewYork);
        assert_eq!(
            options.burners,
            vec![BurnerSpec::new(BurnerSize::In13, BurnerKind::Focused)]
        );
        // from flags
        assert_eq!(options.kitchen_width_in, 72.0);
        assert_eq!(options.top, TopMaterial::Stainless);
    }

    #[test]
    fn count_resizes_after_burner_list() {
        let options = build_options(&Cli {
            burners: vec!["17:spread-160".to_string(), "13".to_string()],
            count: Some(4),
            ..cli()
        })
        .unwrap();
        assert_eq!(options.burner_count(), 4);
        assert_eq!(options.burners[0].kind, BurnerKind::Spread160);
        assert_eq!(
            options.burners[3],
            BurnerSpec::new(BurnerSize::In13, BurnerKind::StraightShoot)
        );
    }

    #[test]
    fn bad_labels_are_errors() {
        let bad_style = Cli {
            style: Some("texas".to_string()),
            ..cli()
        };
        assert!(build_options(&bad_style).is_err());
        let bad_burner = Cli {
            burners: vec!["16".to_string()],
            ..cli()
        };
        assert!(build_options(&bad_burner).is_err());
        let missing = Cli {
            options: Some(PathBuf::from("/nonexistent/wok-options.json")),
            ..cli()
        };
        assert!(build_options(&missing).is_err());
    }
}
