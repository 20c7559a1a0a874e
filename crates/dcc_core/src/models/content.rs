use serde::Deserialize;

// ---------------------------------------------------------------------------
// Localized text wrapper: <dcc:name><dcc:content lang="en">..</dcc:content></dcc:name>
// The schema allows one entry per language; only the first entry is read
// (multi-language certificates are not disambiguated).
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize, Default)]
pub struct LocalizedText {
    #[serde(rename = "content", default)]
    pub content: Vec<Content>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Content {
    #[serde(rename = "@lang")]
    pub lang: Option<String>,

    #[serde(rename = "$text", default)]
    pub value: String,
}

impl LocalizedText {
    /// Text of the first language entry, if any.
    pub fn first(&self) -> Option<&str> {
        self.content.first().map(|c| c.value.as_str())
    }
}
