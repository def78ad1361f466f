//! OOXML text extraction: Word and PowerPoint files are zip containers of
//! XML parts. We open the container, scan the relevant part(s), and collect
//! the text runs: `w:t` elements in `word/document.xml`, `a:t` elements in
//! `ppt/slides/slideN.xml`.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::ExtractError;

/// Extract paragraphs from a `.docx` file, one line per paragraph.
pub fn docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let xml = read_part(&mut archive, "word/document.xml")?;
    let paragraphs = collect_runs(&xml, b"w:t", b"w:p")?;
    Ok(paragraphs.join("\n"))
}

/// Extract text from a `.pptx` file, slides in order, one line per
/// paragraph.
pub fn pptx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut slides: Vec<(usize, String)> = archive
        .file_names()
        .filter_map(|name| {
            let number = name
                .strip_prefix("ppt/slides/slide")?
                .strip_suffix(".xml")?
                .parse()
                .ok()?;
            Some((number, name.to_owned()))
        })
        .collect();
    slides.sort_by_key(|(number, _)| *number);

    let mut lines = Vec::new();
    for (_, name) in slides {
        let xml = read_part(&mut archive, &name)?;
        lines.extend(collect_runs(&xml, b"a:t", b"a:p")?);
    }
    Ok(lines.join("\n"))
}

fn read_part(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    name: &str,
) -> Result<String, ExtractError> {
    let mut part = archive.by_name(name)?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Scan an XML part, gathering the text of every `run_tag` element and
/// breaking lines at each closing `block_tag`.
fn collect_runs(xml: &str, run_tag: &[u8], block_tag: &[u8]) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    let mut buf = Vec::new();

    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut in_run = false;
    let mut saw_block = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == run_tag => in_run = true,
            Event::End(e) if e.name().as_ref() == run_tag => in_run = false,
            Event::Start(e) if e.name().as_ref() == block_tag => saw_block = true,
            Event::End(e) if e.name().as_ref() == block_tag => {
                blocks.push(std::mem::take(&mut current));
            }
            Event::Text(t) if in_run => current.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    // Text runs outside any block element still count as one line.
    if !saw_block && !current.is_empty() {
        blocks.push(current);
    }
    Ok(blocks)
}
