use crate::models::ExtractedCountry;
use crate::render::{self, COUNTRY_ELEMENT};
use anyhow::{Context, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs;
use std::path::{Path, PathBuf};

/// Render countries as XML and write them to `path`, creating parent directories.
///
/// Returns `Ok(None)` without touching the filesystem when `countries` is empty.
pub fn save_xml<P: AsRef<Path>>(
    countries: &[ExtractedCountry],
    path: P,
) -> Result<Option<PathBuf>> {
    let path = path.as_ref();
    if countries.is_empty() {
        return Ok(None);
    }
    let xml = render::render_document(countries)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    fs::write(path, xml).with_context(|| format!("write {}", path.display()))?;
    Ok(Some(path.to_path_buf()))
}

/// Count `<Countries>` elements (at any depth) in an XML file.
pub fn count_countries<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let xml = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    count_countries_in(&xml).with_context(|| format!("parse {}", path.display()))
}

/// Same as [`count_countries`] for an in-memory document.
pub fn count_countries_in(xml: &str) -> Result<usize> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut count = 0;
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e)
                if e.name().as_ref() == COUNTRY_ELEMENT.as_bytes() =>
            {
                count += 1
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(count)
}
