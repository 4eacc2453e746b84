//! Static catalogue of emoticon categories and HTML5 entities.

mod table;

enum GlyphSource {
    /// Every `char` of the string is one glyph.
    Chars(&'static str),
    /// Multi-character glyphs, one per entry.
    Strings(&'static [&'static str]),
}

struct CategorySpec {
    name: &'static str,
    glyphs: GlyphSource,
    copy_all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub glyphs: Vec<String>,
    /// Adds a synthetic entry copying every glyph of the category at once.
    pub copy_all: bool,
}

impl Category {
    pub fn new<I, S>(name: &str, glyphs: I, copy_all: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            glyphs: glyphs.into_iter().map(Into::into).collect(),
            copy_all,
        }
    }

    pub fn title(&self) -> String {
        title_case(&self.name)
    }
}

impl CategorySpec {
    fn to_category(&self) -> Category {
        let glyphs: Vec<String> = match self.glyphs {
            GlyphSource::Chars(s) => s.chars().map(String::from).collect(),
            GlyphSource::Strings(items) => items.iter().map(|s| s.to_string()).collect(),
        };
        Category {
            name: self.name.to_string(),
            glyphs,
            copy_all: self.copy_all,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlEntity {
    pub entity: &'static str,
    pub character: &'static str,
}

pub fn categories() -> Vec<Category> {
    table::CATEGORIES.iter().map(CategorySpec::to_category).collect()
}

pub fn html_entities() -> Vec<HtmlEntity> {
    table::HTML_ENTITIES
        .iter()
        .map(|&(entity, character)| HtmlEntity { entity, character })
        .collect()
}

/// Uppercases the first letter of every word, where any non-alphabetic
/// character starts a new word.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
