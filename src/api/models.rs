use serde::Deserialize;

use crate::paging::Page;

/// A character in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comics: ComicsSummary,
}

impl Character {
    /// The server sends an empty string rather than omitting the field.
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// Per-character comics availability summary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComicsSummary {
    #[serde(default)]
    pub available: usize,
}

/// One comic appearance of a character.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comic {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub page_count: usize,
}

/// Response envelope: every collection endpoint wraps its page in
/// `{ "data": { "results": [...], "total": n } }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: PageBody<T>,
}

/// The paged payload inside the envelope.
#[derive(Debug, Deserialize)]
pub struct PageBody<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    pub total: usize,
}

impl<T> From<Envelope<T>> for Page<T> {
    fn from(envelope: Envelope<T>) -> Self {
        Page {
            items: envelope.data.results,
            total: envelope.data.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_page_decodes() {
        let body = r#"{
            "data": {
                "offset": 0,
                "limit": 30,
                "total": 1562,
                "count": 2,
                "results": [
                    {
                        "id": 1011334,
                        "name": "3-D Man",
                        "description": "",
                        "comics": { "available": 12 }
                    },
                    {
                        "id": 1017100,
                        "name": "A-Bomb (HAS)",
                        "description": "Rick Jones has been Hulk's best bud.",
                        "comics": { "available": 4 }
                    }
                ]
            }
        }"#;
        let envelope: Envelope<Character> = serde_json::from_str(body).expect("decode");
        let page: Page<Character> = envelope.into();
        assert_eq!(page.total, 1562);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "3-D Man");
        assert!(!page.items[0].has_description());
        assert!(page.items[1].has_description());
        assert_eq!(page.items[1].comics.available, 4);
    }

    #[test]
    fn comic_page_decodes_camel_case() {
        let body = r#"{
            "data": {
                "total": 12,
                "results": [
                    { "id": 21366, "title": "Avengers: The Initiative (2007) #14", "pageCount": 32 }
                ]
            }
        }"#;
        let envelope: Envelope<Comic> = serde_json::from_str(body).expect("decode");
        assert_eq!(envelope.data.results[0].page_count, 32);
        assert_eq!(envelope.data.total, 12);
    }

    #[test]
    fn missing_optional_fields_default() {
        let body = r#"{ "data": { "total": 0, "results": [ { "id": 1, "name": "X" } ] } }"#;
        let envelope: Envelope<Character> = serde_json::from_str(body).expect("decode");
        let character = &envelope.data.results[0];
        assert_eq!(character.description, "");
        assert_eq!(character.comics.available, 0);
    }

    #[test]
    fn malformed_body_is_an_error() {
        let body = r#"{ "data": { "results": "not an array" } }"#;
        assert!(serde_json::from_str::<Envelope<Character>>(body).is_err());
    }
}
