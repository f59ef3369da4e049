use std::fs;
use std::path::Path;
use scraper::{ElementRef, Html, Selector};
use crate::errors::WeatherError;

/// A parsed portal page offering the structural queries used by the extraction
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a markup document
    ///
    /// # Arguments
    ///
    /// * 'markup' - the complete page markup
    pub fn parse(markup: &str) -> Document {
        Document { html: Html::parse_document(markup) }
    }

    /// Reads and parses a previously downloaded page
    ///
    /// # Arguments
    ///
    /// * 'path' - path to the page file
    pub fn from_file(path: &Path) -> Result<Document, WeatherError> {
        let bytes = fs::read(path)?;
        Ok(Document::parse(&String::from_utf8_lossy(&bytes)))
    }

    /// Returns the rows of all tables within the matching sections, each row holding the
    /// inner markup of its direct child cells in document order.
    ///
    /// None is returned if no section matches.
    ///
    /// # Arguments
    ///
    /// * 'section' - css selector for the section, e.g. "div#yjw_week"
    pub fn section_rows(&self, section: &str) -> Result<Option<Vec<Vec<String>>>, WeatherError> {
        let section_sel = selector(section)?;
        let row_sel = selector("tr")?;

        let mut found = false;
        let mut rows: Vec<Vec<String>> = Vec::new();
        for s in self.html.select(&section_sel) {
            found = true;
            for tr in s.select(&row_sel) {
                let cells = tr
                    .children()
                    .filter_map(ElementRef::wrap)
                    .map(|cell| cell.inner_html())
                    .collect::<Vec<String>>();
                rows.push(cells);
            }
        }

        Ok(if found { Some(rows) } else { None })
    }

    /// Returns every term (dt) below the children of the matching sections paired with the text of the
    /// element following it, an empty string if there is none. Both texts are trimmed of surrounding
    /// whitespace, inner whitespace is kept.
    ///
    /// # Arguments
    ///
    /// * 'section' - css selector for the section, e.g. "div#wrnrpt"
    pub fn term_pairs(&self, section: &str) -> Result<Vec<(String, String)>, WeatherError> {
        let pair_sel = selector(&format!("{} > * dt", section))?;

        let pairs = self.html
            .select(&pair_sel)
            .map(|dt| {
                let value = dt
                    .next_siblings()
                    .find_map(ElementRef::wrap)
                    .map_or(String::new(), |dd| element_text(&dd));
                (element_text(&dt), value)
            })
            .collect();

        Ok(pairs)
    }

    /// Returns the inner markup of the page title, empty if the page has none
    pub fn title(&self) -> Result<String, WeatherError> {
        let title_sel = selector("title")?;

        Ok(self.html
            .select(&title_sel)
            .next()
            .map_or(String::new(), |t| t.inner_html()))
    }

    /// Returns text and href of all anchors matching the given selector
    ///
    /// # Arguments
    ///
    /// * 'path' - css selector path for the anchors
    pub fn links(&self, path: &str) -> Result<Vec<(String, String)>, WeatherError> {
        let link_sel = selector(path)?;

        Ok(self.html
            .select(&link_sel)
            .map(|a| (element_text(&a), a.value().attr("href").unwrap_or("").to_string()))
            .collect())
    }
}

/// Parses a css selector, mapping failures to a document error
///
/// # Arguments
///
/// * 'path' - the css selector
fn selector(path: &str) -> Result<Selector, WeatherError> {
    Selector::parse(path).map_err(|e| WeatherError::Document(format!("invalid selector '{}': {}", path, e)))
}

/// Concatenated text of an element with leading and trailing whitespace removed
fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
