use quick_xml::{escape::unescape, events::BytesStart};

/// Read the (unescaped) value of the XML attribute `key` of a tag
///
/// Returns `None` if the attribute is not present (or malformed).
pub fn get_attribute_string(t: &BytesStart<'_>, key: &str) -> Option<String> {
    match t.try_get_attribute(key) {
        Ok(Some(attr)) => {
            let value = String::from_utf8_lossy(&attr.value).to_string();
            let unescaped = unescape(value.as_str()).map(|v| v.into_owned()).ok();
            Some(unescaped.unwrap_or(value))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_and_unescapes_attribute() {
        let tag = BytesStart::from_content(r#"string key="concept:name" value="a &amp; b""#, 6);
        assert_eq!(
            get_attribute_string(&tag, "key").as_deref(),
            Some("concept:name")
        );
        assert_eq!(get_attribute_string(&tag, "value").as_deref(), Some("a & b"));
        assert_eq!(get_attribute_string(&tag, "missing"), None);
    }
}
