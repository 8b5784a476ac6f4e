use std::collections::HashMap;

/// Information about a supported language
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "es",
            LanguageInfo {
                code: "es",
                translation: include_str!("../translations/es.json"),
                native_name: "Español",
            },
        ),
        (
            "en",
            LanguageInfo {
                code: "en",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
        key.split('.').try_fold(root, |node, part| node.get(part))
    }

    fn leaf_keys(prefix: &str, value: &Value, keys: &mut Vec<String>) {
        if let Value::Object(map) = value {
            for (name, child) in map {
                let path = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                leaf_keys(&path, child, keys);
            }
        } else {
            keys.push(prefix.to_string());
        }
    }

    #[test]
    fn test_spanish_labels_match_storefront_wording() {
        let info = get_language_info("es").unwrap();
        let root: Value = serde_json::from_str(info.translation).unwrap();

        assert_eq!(lookup(&root, "auth.signup.submit").unwrap(), "Registrarse");
        assert_eq!(lookup(&root, "auth.signup.submitting").unwrap(), "Procesando...");
        assert_eq!(lookup(&root, "auth.login.submit").unwrap(), "Ingresar");
        assert_eq!(lookup(&root, "auth.login.submitting").unwrap(), "Ingresando...");
        assert_eq!(
            lookup(&root, "errors.network").unwrap(),
            "Ocurrió un error de red. Inténtalo de nuevo."
        );
    }

    #[test]
    fn test_languages_share_the_same_keys() {
        let languages = supported_languages();
        let mut reference = None;
        for info in languages.values() {
            let root: Value = serde_json::from_str(info.translation).unwrap();
            let mut keys = Vec::new();
            leaf_keys("", &root, &mut keys);
            keys.sort();
            match &reference {
                None => reference = Some(keys),
                Some(expected) => assert_eq!(&keys, expected, "{} differs", info.code),
            }
        }
    }

    #[test]
    fn test_unknown_language() {
        assert!(get_language_info("de").is_none());
        assert_eq!(get_language_info("en").unwrap().native_name, "English");
    }
}
