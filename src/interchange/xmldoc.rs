//! XML documentation files.
//!
//! The standard compiler-emitted layout:
//!
//! ```text
//! <doc>
//!   <assembly><name>Lib</name></assembly>
//!   <members>
//!     <member name="M:N.Foo.Bar(System.Int32)">
//!       <summary>Bars the <see cref="T:N.Foo"/>.</summary>
//!       <param name="x">How much, see <paramref name="x"/>.</param>
//!       <returns>The result.</returns>
//!     </member>
//!   </members>
//! </doc>
//! ```
//!
//! Section text is flattened to plain text: inline references render as the
//! referenced name and whitespace runs collapse to single spaces. A member
//! whose `name` is not a valid identifier is skipped with a warning; the rest
//! of the file still loads.

use super::InterchangeError;
use crate::docs::Documentation;

/// XML documentation handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDocs;

impl XmlDocs {
    pub fn extensions(&self) -> &'static [&'static str] {
        &["xml"]
    }

    pub fn handles(&self, path: &str) -> bool {
        path.rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("xml"))
    }

    pub fn read(&self, input: &[u8]) -> Result<Documentation, InterchangeError> {
        #[cfg(feature = "interchange")]
        {
            reader::read(input)
        }
        #[cfg(not(feature = "interchange"))]
        {
            let _ = input;
            Err(InterchangeError::feature_disabled("XML documentation reading"))
        }
    }

    pub fn write(&self, documentation: &Documentation) -> Result<Vec<u8>, InterchangeError> {
        #[cfg(feature = "interchange")]
        {
            writer::write(documentation)
        }
        #[cfg(not(feature = "interchange"))]
        {
            let _ = documentation;
            Err(InterchangeError::feature_disabled("XML documentation writing"))
        }
    }
}

// ============================================================================
// READER (requires interchange feature)
// ============================================================================

#[cfg(feature = "interchange")]
mod reader {
    use super::*;
    use crate::docs::{DocEntry, MemberIdentifier, normalize_text};
    use quick_xml::Reader;
    use quick_xml::events::{BytesStart, Event};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Section {
        Summary,
        Remarks,
        Value,
        Returns,
        Param(String),
        TypeParam(String),
    }

    /// The member currently being read, if its name parsed.
    struct OpenMember {
        entry: Option<DocEntry>,
        depth: usize,
    }

    struct OpenSection {
        section: Section,
        depth: usize,
        text: String,
    }

    pub fn read(input: &[u8]) -> Result<Documentation, InterchangeError> {
        let mut reader = Reader::from_reader(input);
        let mut buf = Vec::new();
        let mut documentation = Documentation::new();
        let mut depth = 0usize;
        let mut member: Option<OpenMember> = None;
        let mut section: Option<OpenSection> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    depth += 1;
                    let documenting = member.as_ref().is_some_and(|open| open.entry.is_some());
                    if member.is_none() && e.name().as_ref() == b"member" {
                        member = Some(OpenMember {
                            entry: open_member(e)?,
                            depth,
                        });
                    } else if documenting && section.is_none() {
                        section = open_section(e)?.map(|section| OpenSection {
                            section,
                            depth,
                            text: String::new(),
                        });
                    }
                    // Inline formatting inside a section (<c>, <para>) contributes its text only.
                }
                Ok(Event::Empty(ref e)) => {
                    if let Some(open) = section.as_mut() {
                        if let Some(inline) = inline_reference(e)? {
                            open.text.push_str(&inline);
                        }
                    } else if member.is_none() && e.name().as_ref() == b"member" {
                        if let Some(entry) = open_member(e)? {
                            documentation.insert(entry);
                        }
                    }
                }
                Ok(Event::Text(ref e)) => {
                    if let Some(open) = section.as_mut() {
                        let text = e
                            .unescape()
                            .map_err(|e| InterchangeError::xml(format!("Text error: {e}")))?;
                        open.text.push_str(&text);
                    }
                }
                Ok(Event::CData(ref e)) => {
                    if let Some(open) = section.as_mut() {
                        open.text.push_str(&String::from_utf8_lossy(e.as_ref()));
                    }
                }
                Ok(Event::End(_)) => {
                    if section.as_ref().is_some_and(|open| open.depth == depth) {
                        if let (Some(open), Some(OpenMember { entry: Some(entry), .. })) =
                            (section.take(), member.as_mut())
                        {
                            close_section(entry, open);
                        }
                    } else if member.as_ref().is_some_and(|open| open.depth == depth) {
                        if let Some(OpenMember { entry: Some(entry), .. }) = member.take() {
                            documentation.insert(entry);
                        }
                    }
                    depth = depth.saturating_sub(1);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(InterchangeError::xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        tracing::debug!(entries = documentation.len(), "documentation read");
        Ok(documentation)
    }

    fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, InterchangeError> {
        for attr_result in e.attributes() {
            let attr = attr_result
                .map_err(|e| InterchangeError::xml(format!("Attribute error: {e}")))?;
            if attr.key.as_ref() == key {
                let value = attr
                    .unescape_value()
                    .map_err(|e| InterchangeError::xml(format!("Attribute value error: {e}")))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    fn open_member(e: &BytesStart<'_>) -> Result<Option<DocEntry>, InterchangeError> {
        let name = attribute(e, b"name")?;
        let identifier = name.as_deref().and_then(MemberIdentifier::parse);
        if identifier.is_none() {
            tracing::warn!(name = ?name, "documentation member with malformed name skipped");
        }
        Ok(identifier.map(DocEntry::new))
    }

    fn open_section(e: &BytesStart<'_>) -> Result<Option<Section>, InterchangeError> {
        let section = match e.name().as_ref() {
            b"summary" => Section::Summary,
            b"remarks" => Section::Remarks,
            b"value" => Section::Value,
            b"returns" => Section::Returns,
            b"param" => match attribute(e, b"name")? {
                Some(name) => Section::Param(name),
                None => return Ok(None),
            },
            b"typeparam" => match attribute(e, b"name")? {
                Some(name) => Section::TypeParam(name),
                None => return Ok(None),
            },
            _ => return Ok(None),
        };
        Ok(Some(section))
    }

    /// Text standing in for a self-closing inline element.
    fn inline_reference(e: &BytesStart<'_>) -> Result<Option<String>, InterchangeError> {
        match e.name().as_ref() {
            b"see" | b"seealso" => {
                if let Some(cref) = attribute(e, b"cref")? {
                    let name = MemberIdentifier::parse(&cref)
                        .map_or(cref.clone(), |id| id.full_name().to_string());
                    return Ok(Some(name));
                }
                attribute(e, b"langword")
            }
            b"paramref" | b"typeparamref" => attribute(e, b"name"),
            _ => Ok(None),
        }
    }

    fn close_section(entry: &mut DocEntry, open: OpenSection) {
        let text = normalize_text(&open.text);
        match open.section {
            Section::Summary => entry.summary = Some(text),
            Section::Remarks => entry.remarks = Some(text),
            Section::Value => entry.value = Some(text),
            Section::Returns => entry.returns = Some(text),
            Section::Param(name) => entry.params.push((name, text)),
            Section::TypeParam(name) => entry.type_params.push((name, text)),
        }
    }
}

// ============================================================================
// WRITER (requires interchange feature)
// ============================================================================

#[cfg(feature = "interchange")]
mod writer {
    use super::*;
    use crate::docs::DocEntry;
    use quick_xml::Writer;
    use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
    use std::io::Cursor;

    type XmlWriter<'a> = Writer<&'a mut Cursor<Vec<u8>>>;

    fn emit(writer: &mut XmlWriter<'_>, event: Event<'_>) -> Result<(), InterchangeError> {
        writer
            .write_event(event)
            .map_err(|e| InterchangeError::xml(format!("Write error: {e}")))
    }

    fn text_element(
        writer: &mut XmlWriter<'_>,
        tag: &str,
        name: Option<&str>,
        text: &str,
    ) -> Result<(), InterchangeError> {
        let mut start = BytesStart::new(tag);
        if let Some(name) = name {
            start.push_attribute(("name", name));
        }
        emit(writer, Event::Start(start))?;
        emit(writer, Event::Text(BytesText::new(text)))?;
        emit(writer, Event::End(BytesEnd::new(tag)))
    }

    fn write_entry(writer: &mut XmlWriter<'_>, entry: &DocEntry) -> Result<(), InterchangeError> {
        let id = entry.identifier.to_string();
        emit(
            writer,
            Event::Start(BytesStart::new("member").with_attributes([("name", id.as_str())])),
        )?;
        let sections = [
            ("summary", &entry.summary),
            ("remarks", &entry.remarks),
            ("value", &entry.value),
            ("returns", &entry.returns),
        ];
        for (tag, text) in sections {
            if let Some(text) = text {
                text_element(writer, tag, None, text)?;
            }
        }
        for (name, text) in &entry.type_params {
            text_element(writer, "typeparam", Some(name), text)?;
        }
        for (name, text) in &entry.params {
            text_element(writer, "param", Some(name), text)?;
        }
        emit(writer, Event::End(BytesEnd::new("member")))
    }

    pub fn write(documentation: &Documentation) -> Result<Vec<u8>, InterchangeError> {
        let mut buffer = Cursor::new(Vec::new());
        let mut writer = Writer::new_with_indent(&mut buffer, b' ', 2);

        emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        emit(&mut writer, Event::Start(BytesStart::new("doc")))?;
        emit(&mut writer, Event::Start(BytesStart::new("members")))?;
        for entry in documentation.iter() {
            write_entry(&mut writer, entry)?;
        }
        emit(&mut writer, Event::End(BytesEnd::new("members")))?;
        emit(&mut writer, Event::End(BytesEnd::new("doc")))?;

        let mut output = buffer.into_inner();
        output.push(b'\n');
        Ok(output)
    }
}
