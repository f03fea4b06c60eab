//! Locale bundle checks.
//!
//! Every shipped locale must parse cleanly, define every message the fallback
//! (en-US) defines, and format each of them without resolver errors when
//! given the variables the fallback message uses.
//!
//! If you add a locale, register its file in `LOCALES`.

use std::collections::BTreeSet;

use fluent::{FluentArgs, FluentBundle, FluentResource};
use unic_langid::LanguageIdentifier;

const EN_US: &str = include_str!("../i18n/en-US/myapp-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/myapp-ui.ftl");
const FR_FR: &str = include_str!("../i18n/fr-FR/myapp-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("en-US", EN_US), ("es-ES", ES_ES), ("fr-FR", FR_FR)];

/// Message ids in declaration order, with duplicates reported separately.
fn message_ids(src: &str) -> (Vec<String>, BTreeSet<String>) {
    let mut seen = BTreeSet::new();
    let mut ids = Vec::new();
    let mut dups = BTreeSet::new();
    for line in src.lines() {
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some((id, _)) = line.split_once('=') {
            let id = id.trim().to_string();
            if !seen.insert(id.clone()) {
                dups.insert(id);
            } else {
                ids.push(id);
            }
        }
    }
    (ids, dups)
}

fn bundle(locale: &str, src: &str) -> FluentBundle<FluentResource> {
    let lang: LanguageIdentifier = locale.parse().expect("valid locale tag");
    let resource = FluentResource::try_new(src.to_string())
        .unwrap_or_else(|(_, errors)| panic!("{locale} failed to parse: {errors:?}"));
    let mut bundle = FluentBundle::new(vec![lang]);
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .unwrap_or_else(|errors| panic!("{locale} has conflicting entries: {errors:?}"));
    bundle
}

#[test]
fn no_locale_defines_a_key_twice() {
    for (locale, src) in LOCALES {
        let (_, dups) = message_ids(src);
        assert!(dups.is_empty(), "{locale} redefines: {dups:?}");
    }
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let (fallback, _) = message_ids(EN_US);
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let bundle = bundle(locale, src);
        let missing: Vec<&str> = fallback
            .iter()
            .filter(|id| !bundle.has_message(id))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing: {}", missing.join(", ")));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n{}\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n")
    );
}

#[test]
fn every_message_formats_without_errors() {
    let (fallback, _) = message_ids(EN_US);
    let mut args = FluentArgs::new();
    args.set("path", "/missing");

    for (locale, src) in LOCALES {
        let bundle = bundle(locale, src);
        for id in &fallback {
            let Some(message) = bundle.get_message(id) else {
                continue;
            };
            let pattern = message
                .value()
                .unwrap_or_else(|| panic!("{locale}: {id} has no value"));
            let mut errors = vec![];
            let text = bundle.format_pattern(pattern, Some(&args), &mut errors);
            assert!(errors.is_empty(), "{locale}: {id} -> {errors:?}");
            assert!(!text.trim().is_empty(), "{locale}: {id} is blank");
        }
    }
}

#[test]
fn not_found_message_mentions_the_path() {
    let mut args = FluentArgs::new();
    args.set("path", "/missing");
    for (locale, src) in LOCALES {
        let bundle = bundle(locale, src);
        let message = bundle
            .get_message("page-not-found-body")
            .expect("page-not-found-body");
        let mut errors = vec![];
        let text = bundle.format_pattern(message.value().unwrap(), Some(&args), &mut errors);
        assert!(text.contains("/missing"), "{locale}: {text}");
    }
}
