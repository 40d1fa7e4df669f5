use wasm_bindgen::prelude::*;

/// Space-joins the tokens that are present, skipping `None` and empty ones.
pub fn class_names<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    tokens
        .into_iter()
        .flatten()
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(
            class_names([Some("a"), None, Some(""), Some("b")]),
            "a b".to_string(),
        );
        assert_eq!(class_names([None, None]), String::new());
        assert_eq!(
            class_names([Some("slds-tabs__item"), true.then_some("slds-active")]),
            "slds-tabs__item slds-active".to_string(),
        );
    }
}
