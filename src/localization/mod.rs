use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

type Bundle = FluentBundle<FluentResource>;

const SUPPORTED_LANGS: [&str; 2] = ["en", "ru"];
const FALLBACK_LANG: &str = "en";

fn load_ftl_source(lang: &str) -> &'static str {
    match lang {
        "ru" => include_str!("resources/ru.ftl"),
        _ => include_str!("resources/en.ftl"),
    }
}

/// Primary language subtag of a locale code, if it is one we ship.
/// "en-US" / "ru_RU.UTF-8" -> "en" / "ru"; "english" -> None.
fn supported_language(code: &str) -> Option<&'static str> {
    let tag = code.split('.').next().unwrap_or_default().replace('_', "-");
    let langid: LanguageIdentifier = tag.parse().ok()?;
    let lang = langid.language.as_str();
    SUPPORTED_LANGS.iter().copied().find(|l| *l == lang)
}

fn normalize_lang(code: &str) -> &'static str {
    supported_language(code).unwrap_or(FALLBACK_LANG)
}

fn detect_system_lang() -> &'static str {
    normalize_lang(&sys_locale::get_locale().unwrap_or_default())
}

struct LocalizationManager {
    current: &'static str,
    bundles: HashMap<&'static str, Bundle>,
}

impl LocalizationManager {
    fn new() -> Self {
        let mut bundles = HashMap::new();
        for code in SUPPORTED_LANGS {
            match build_bundle(code) {
                Ok(bundle) => {
                    bundles.insert(code, bundle);
                }
                Err(e) => log::error!("Skipping '{code}' translations: {e}"),
            }
        }
        Self {
            current: FALLBACK_LANG,
            bundles,
        }
    }

    fn set_current(&mut self, code: &str) -> Result<(), LocalizationError> {
        let short = supported_language(code)
            .filter(|l| self.bundles.contains_key(l))
            .ok_or_else(|| LocalizationError::UnsupportedLanguage(code.to_string()))?;
        self.current = short;
        Ok(())
    }

    fn format(&self, id: &str, args: Option<&FluentArgs>) -> String {
        for code in [self.current, FALLBACK_LANG] {
            let Some(bundle) = self.bundles.get(code) else { continue };
            let Some(pattern) = bundle.get_message(id).and_then(|m| m.value()) else {
                continue;
            };
            let mut errors = vec![];
            return bundle.format_pattern(pattern, args, &mut errors).into_owned();
        }
        format!("[missing: {}]", id)
    }
}

fn build_bundle(code: &str) -> Result<Bundle, LocalizationError> {
    let langid: LanguageIdentifier = code
        .parse()
        .map_err(|e| LocalizationError::InitError(format!("{code}: {e}")))?;
    let res = FluentResource::try_new(load_ftl_source(code).to_string())
        .map_err(|(_, errs)| LocalizationError::InitError(format!("{code}: {errs:?}")))?;
    let mut bundle: Bundle = FluentBundle::new(vec![langid]);
    // Keep output free of bidi isolation marks; strings are shown as-is in egui.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(res)
        .map_err(|errs| LocalizationError::InitError(format!("{code}: {errs:?}")))?;
    Ok(bundle)
}

thread_local! {
    static LOCALIZATION: RefCell<LocalizationManager> = RefCell::new(LocalizationManager::new());
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Initialization error: {0}")]
    InitError(String),
}

/// Initialize localization for the calling (UI) thread. `None` follows the system
/// locale. An unsupported preference falls back to English and is reported.
pub fn initialize_localization(preferred_lang: Option<&str>) -> Result<(), LocalizationError> {
    LOCALIZATION.with(|cell| {
        let mut mgr = cell.borrow_mut();
        match preferred_lang {
            Some(code) => mgr.set_current(code).inspect_err(|_| {
                mgr.current = FALLBACK_LANG;
            }),
            None => {
                mgr.current = detect_system_lang();
                Ok(())
            }
        }
    })
}

/// Current language code ("en", "ru").
pub fn current_language() -> &'static str {
    LOCALIZATION.with(|cell| cell.borrow().current)
}

/// Translate a message without arguments.
pub fn translate(message_id: &str) -> String {
    LOCALIZATION.with(|cell| cell.borrow().format(message_id, None))
}

/// Translate a message with arguments given as (&str, String) pairs.
pub fn translate_with(message_id: &str, args: &[(&str, String)]) -> String {
    let mut fargs = FluentArgs::new();
    for (k, v) in args {
        fargs.set(*k, v.clone());
    }
    LOCALIZATION.with(|cell| cell.borrow().format(message_id, Some(&fargs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_the_default() {
        assert_eq!(current_language(), "en");
        assert_eq!(translate("continue-button"), "Continue");
    }

    #[test]
    fn arguments_are_substituted() {
        let s = translate_with("continue-body", &[("name", "Blog".to_string())]);
        assert_eq!(s, "Selected use case: Blog");
    }

    #[test]
    fn switching_language_and_fallbacks() {
        initialize_localization(Some("ru-RU")).unwrap();
        assert_eq!(current_language(), "ru");
        assert_eq!(translate("card-select"), "Выбрать");

        assert!(initialize_localization(Some("de")).is_err());
        assert_eq!(current_language(), "en");
    }

    #[test]
    fn unknown_keys_are_marked() {
        assert_eq!(translate("no-such-key"), "[missing: no-such-key]");
    }

    #[test]
    fn lang_codes_are_normalized() {
        assert_eq!(normalize_lang("ru_RU.UTF-8"), "ru");
        assert_eq!(normalize_lang("EN-us"), "en");
        assert_eq!(normalize_lang("fr-FR"), "en");
    }

    #[test]
    fn words_sharing_a_prefix_are_not_languages() {
        assert!(initialize_localization(Some("rusty")).is_err());
        assert_eq!(current_language(), "en");
        assert!(initialize_localization(Some("english")).is_err());
        assert!(initialize_localization(Some("RU")).is_ok());
        assert_eq!(current_language(), "ru");
    }
}
