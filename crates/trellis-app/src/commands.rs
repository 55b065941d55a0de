//! Subcommand implementations. Each returns the text to print.

use trellis_breadcrumbs::{collapse, BreadcrumbItem, Segment};
use trellis_common::{Platform, Result, TrellisError};
use trellis_config::TrellisConfig;
use trellis_platform::{
    format_label, BindingOptions, KeyEvent, KeyTarget, ShortcutRegistry,
};

/// Build a trail from labels. Every item but the last links to its
/// cumulative path; the last is the current page.
pub fn trail_from_labels(labels: &[String]) -> Vec<BreadcrumbItem> {
    let mut path = String::new();
    let last = labels.len().saturating_sub(1);
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let slug = slugify(label);
            path.push('/');
            path.push_str(&slug);
            let item = BreadcrumbItem::new(format!("{i}-{slug}"), label.as_str());
            if i == last {
                item
            } else {
                item.with_href(path.clone())
            }
        })
        .collect()
}

fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

pub fn run_collapse(
    config: &TrellisConfig,
    max_visible: Option<usize>,
    json: bool,
    labels: &[String],
) -> Result<String> {
    let max_visible = max_visible.unwrap_or(config.breadcrumbs.max_visible as usize);
    let result = collapse(&trail_from_labels(labels), max_visible);

    if json {
        return serde_json::to_string_pretty(&result)
            .map_err(|e| TrellisError::Other(format!("failed to serialize result: {e}")));
    }

    let parts: Vec<String> = result
        .segments()
        .into_iter()
        .map(|segment| match segment {
            Segment::Item { item, current: true } => format!("[{}]", item.label),
            Segment::Item { item, .. } => item.label.clone(),
            Segment::Overflow(_) => "\u{2026}".to_string(), // …
        })
        .collect();

    let mut out = parts.join(" / ");
    if result.is_collapsed() {
        let hidden: Vec<&str> = result
            .collapsed_items
            .iter()
            .map(|i| i.label.as_str())
            .collect();
        out.push_str(&format!("\nhidden: {}", hidden.join(", ")));
    }
    Ok(out)
}

pub fn run_label(config: &TrellisConfig, platform: Option<Platform>, combo: &str) -> String {
    format_label(combo, resolve_platform(config, platform))
}

/// Key event and focus target for `run_match`.
pub struct MatchInput<'a> {
    pub event: KeyEvent,
    pub target: KeyTarget,
    pub combo: &'a str,
}

/// Mount the combo as the only binding and dispatch the event to it.
///
/// A malformed combo is an error rather than a quiet "no match".
pub fn run_match(
    config: &TrellisConfig,
    platform: Option<Platform>,
    input: MatchInput<'_>,
) -> Result<bool> {
    let mut registry = ShortcutRegistry::new(resolve_platform(config, platform));
    let options = BindingOptions {
        ignore_while_typing: config.shortcuts.ignore_while_typing,
    };
    let id = registry.mount(input.combo, (), options)?;
    let matched = !registry.dispatch(&input.event, &input.target).is_empty();
    registry.unmount(id);
    Ok(matched)
}

pub fn run_bindings(config: &TrellisConfig, platform: Option<Platform>) -> String {
    let mut shortcuts = config.shortcuts.clone();
    if let Some(p) = platform {
        shortcuts.platform = p.into();
    }

    let registry = trellis_config::build_registry(&shortcuts);
    registry
        .bindings()
        .map(|(_, shortcut, action)| format!("{action:<12} {}", shortcut.label(registry.platform())))
        .collect::<Vec<_>>()
        .join("\n")
}

fn resolve_platform(config: &TrellisConfig, platform: Option<Platform>) -> Platform {
    platform.unwrap_or_else(|| config.shortcuts.platform.resolve())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn trail_links_all_but_last() {
        let trail = trail_from_labels(&labels(&["Home", "User Guide", "Install"]));
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[1].id, "1-user-guide");
        assert!(trail[1].is_interactive(false));
        assert_eq!(
            trail[1].target,
            Some(trellis_breadcrumbs::NavigationTarget::Href("/home/user-guide".into()))
        );
        assert!(trail[2].target.is_none());
    }

    #[test]
    fn collapse_text_output() {
        let config = TrellisConfig::default();
        let out = run_collapse(
            &config,
            Some(3),
            false,
            &labels(&[
                "Home",
                "Category",
                "Subcategory",
                "ProductType",
                "Brand",
                "CurrentProduct",
            ]),
        )
        .unwrap();
        assert_eq!(
            out,
            "Home / \u{2026} / Brand / [CurrentProduct]\nhidden: Category, Subcategory, ProductType"
        );
    }

    #[test]
    fn collapse_uses_config_default() {
        let config = TrellisConfig::default();
        let out = run_collapse(&config, None, false, &labels(&["A", "B", "C", "D"])).unwrap();
        assert_eq!(out, "A / B / C / [D]");
    }

    #[test]
    fn collapse_json_output() {
        let config = TrellisConfig::default();
        let out = run_collapse(&config, Some(1), true, &labels(&["A", "B", "C"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["visible_items"].as_array().unwrap().len(), 2);
        assert_eq!(value["collapsed_items"][0]["label"], "B");
    }

    #[test]
    fn label_respects_platform_flag() {
        let config = TrellisConfig::default();
        assert_eq!(run_label(&config, Some(Platform::Apple), "mod+E"), "\u{2318}E");
        assert_eq!(run_label(&config, Some(Platform::Other), "mod+E"), "Ctrl + E");
    }

    #[test]
    fn match_reports_result() {
        let config = TrellisConfig::default();
        let input = || MatchInput {
            event: KeyEvent::new("e").with_meta(),
            target: KeyTarget::Document,
            combo: "mod+E",
        };
        assert!(run_match(&config, Some(Platform::Apple), input()).unwrap());
        assert!(!run_match(&config, Some(Platform::Other), input()).unwrap());
    }

    #[test]
    fn match_skips_text_fields_by_default() {
        let mut config = TrellisConfig::default();
        let input = || MatchInput {
            event: KeyEvent::new("s").with_ctrl(),
            target: KeyTarget::element("input"),
            combo: "mod+S",
        };
        assert!(!run_match(&config, Some(Platform::Other), input()).unwrap());

        config.shortcuts.ignore_while_typing = false;
        assert!(run_match(&config, Some(Platform::Other), input()).unwrap());
    }

    #[test]
    fn match_rejects_malformed_combo() {
        let config = TrellisConfig::default();
        let input = MatchInput {
            event: KeyEvent::new("a"),
            target: KeyTarget::Document,
            combo: "a+b",
        };
        let err = run_match(&config, None, input).unwrap_err();
        assert!(matches!(err, TrellisError::Shortcut(_)));
    }

    #[test]
    fn bindings_lists_defaults() {
        let config = TrellisConfig::default();
        let out = run_bindings(&config, Some(Platform::Other));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("delete"));
        assert!(out.contains("Ctrl + Shift + Z"));
    }
}
