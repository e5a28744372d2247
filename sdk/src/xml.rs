//! Wire codec for the FasaPay XML dialect.
//!
//! Both directions go through quick-xml's serde support. Requests are written
//! compactly with no declaration or indentation, so the output can be compared
//! byte for byte. Responses are first read into a [`Document`], which checks
//! well-formedness, records the root element and keeps leaf text verbatim.

use {
    crate::{DecodeError, EncodeError},
    quick_xml::{
        events::{BytesCData, Event},
        Reader,
        Writer,
    },
    serde::{de::DeserializeOwned, Serialize},
};

/// Serialize `value` as the `<root>` element.
pub fn to_xml<T: Serialize>(root: &str, value: &T) -> Result<Vec<u8>, EncodeError> {
    quick_xml::se::to_string_with_root(root, value)
        .map(String::into_bytes)
        .map_err(EncodeError::from_display)
}

/// A well-formed XML document with a single root element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    root: String,
    xml: String,
}

impl Document {
    /// Read `bytes` into a document.
    ///
    /// Declarations, comments, processing instructions and doctypes are
    /// dropped. The text of every leaf element is re-emitted as CDATA so the
    /// deserializer does not trim it.
    pub fn parse(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader::from_reader(bytes);
        let mut buf = Vec::new();
        let mut events = Vec::new();

        loop {
            match reader.read_event_into(&mut buf).map_err(DecodeError::xml)? {
                Event::Eof => break,
                Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
                event => events.push(event.into_owned()),
            }

            buf.clear();
        }

        let mut writer = Writer::new(Vec::new());
        let mut root = None;
        let mut depth = 0usize;

        for (index, event) in events.iter().enumerate() {
            match event {
                Event::Start(start) | Event::Empty(start) if depth == 0 => {
                    if root.is_some() {
                        return Err(DecodeError::Xml("more than one root element".to_string()));
                    }

                    root = Some(String::from_utf8(start.name().as_ref().to_vec()).map_err(DecodeError::xml)?);
                }
                Event::Text(_) | Event::CData(_) if depth == 0 => continue,
                _ => {}
            }

            match event {
                Event::Start(_) => depth += 1,
                Event::End(_) => depth = depth.saturating_sub(1),
                Event::Text(text) if is_leaf(&events, index) => {
                    let text = text.unescape().map_err(DecodeError::xml)?;
                    write_cdata(&mut writer, &text)?;

                    continue;
                }
                _ => {}
            }

            writer.write_event(event).map_err(DecodeError::xml)?;
        }

        if depth != 0 {
            return Err(DecodeError::Xml("unexpected end of document".to_string()));
        }

        let root = root.ok_or(DecodeError::Empty)?;
        let xml = String::from_utf8(writer.into_inner()).map_err(DecodeError::xml)?;

        Ok(Self { root, xml })
    }

    /// Name of the root element.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Deserialize the root element into `T`. Unknown elements and
    /// attributes are ignored.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        quick_xml::de::from_str(&self.xml).map_err(DecodeError::xml)
    }
}

/// Text directly enclosed by a start and an end tag.
fn is_leaf(events: &[Event<'static>], index: usize) -> bool {
    index > 0
        && matches!(events[index - 1], Event::Start(_))
        && matches!(events.get(index + 1), Some(Event::End(_)))
}

/// A CDATA section cannot hold `]]>`, so the text is split right after `]]`.
fn write_cdata(writer: &mut Writer<Vec<u8>>, text: &str) -> Result<(), DecodeError> {
    let mut rest = text;

    while let Some(at) = rest.find("]]>") {
        let (head, tail) = rest.split_at(at + 2);
        writer
            .write_event(Event::CData(BytesCData::new(head)))
            .map_err(DecodeError::xml)?;
        rest = tail;
    }

    writer
        .write_event(Event::CData(BytesCData::new(rest)))
        .map_err(DecodeError::xml)
}
