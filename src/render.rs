//! XML rendering of extracted countries.
//!
//! Output shape (two-space indentation):
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <CountriesCollection>
//!   <Countries>
//!     <Code>IN</Code>
//!     <OriginalName>Republic of India</OriginalName>
//!     <CommonName>India</CommonName>
//!     <LocalName>भारत गणराज्य</LocalName>
//!     <OfficialCurrency>
//!       <Code>INR</Code>
//!       <Name>Indian rupee</Name>
//!       <Symbol>₹</Symbol>
//!     </OfficialCurrency>
//!   </Countries>
//! </CountriesCollection>
//! ```
//!
//! Every leaf element is written even when its value is empty. Text content is
//! escaped by quick-xml, so `&`, `<` and `>` in names are safe.

use crate::models::{Currency, ExtractedCountry};
use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use std::io::{self, Write};

/// Root element wrapping all country blocks.
pub const ROOT_ELEMENT: &str = "CountriesCollection";
/// Element name of one country block.
pub const COUNTRY_ELEMENT: &str = "Countries";

/// Render a complete XML document (declaration, root, one block per country).
pub fn render_document(countries: &[ExtractedCountry]) -> Result<String> {
    let mut buf = Vec::with_capacity(256 + countries.len() * 320);
    write_document(&mut buf, countries).context("render xml")?;
    buf.push(b'\n');
    String::from_utf8(buf).context("rendered xml is not utf-8")
}

fn write_document<W: Write>(out: W, countries: &[ExtractedCountry]) -> io::Result<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer
        .create_element(ROOT_ELEMENT)
        .write_inner_content(|w| {
            for country in countries {
                write_country(w, country)?;
            }
            Ok(())
        })?;
    Ok(())
}

fn write_country<W: Write>(writer: &mut Writer<W>, c: &ExtractedCountry) -> io::Result<()> {
    writer
        .create_element(COUNTRY_ELEMENT)
        .write_inner_content(|w| {
            write_text_element(w, "Code", &c.code)?;
            write_text_element(w, "OriginalName", &c.original_name)?;
            write_text_element(w, "CommonName", &c.common_name)?;
            write_text_element(w, "LocalName", &c.local_name)?;
            write_currency(w, &c.currency)
        })?;
    Ok(())
}

fn write_currency<W: Write>(writer: &mut Writer<W>, cur: &Currency) -> io::Result<()> {
    writer
        .create_element("OfficialCurrency")
        .write_inner_content(|w| {
            write_text_element(w, "Code", &cur.code)?;
            write_text_element(w, "Name", &cur.name)?;
            write_text_element(w, "Symbol", &cur.symbol)
        })?;
    Ok(())
}

/// Write `<tag>text</tag>`; empty text still yields an open/close pair.
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}
