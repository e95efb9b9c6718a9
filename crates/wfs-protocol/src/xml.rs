//! XML to JSON-like tree conversion.
//!
//! Produces the loosely-typed tree the capabilities projections read from.
//! The conversion is structural only and performs no validation:
//! - the root element's content is returned, the root name itself is dropped
//! - namespace prefixes are stripped from element and attribute names
//! - an element without attributes or child elements becomes its text
//! - a child name seen once is a bare value, seen more than once an array
//! - attributes become string keys, mixed text is kept under [`TEXT_KEY`]

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};
use thiserror::Error;

/// Key under which an element's own text is stored when it also has
/// attributes or children.
pub const TEXT_KEY: &str = "#text";

/// Failure to read a document as XML.
#[derive(Debug, Error)]
pub enum XmlTreeError {
    #[error("XML syntax error at byte {position}: {source}")]
    Syntax {
        position: usize,
        source: quick_xml::Error,
    },

    #[error("Document has no root element")]
    NoRoot,

    #[error("Unexpected end of document inside <{0}>")]
    Unclosed(String),
}

#[derive(Debug, Default)]
struct Frame {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<(String, Value)>,
    text: String,
}

impl Frame {
    fn open(start: &BytesStart<'_>, position: usize) -> Result<Self, XmlTreeError> {
        let mut frame = Frame {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            ..Default::default()
        };

        for attr in start.attributes() {
            let attr = attr.map_err(|err| XmlTreeError::Syntax {
                position,
                source: err.into(),
            })?;
            let key = attr.key.as_ref();
            if key == b"xmlns" || key.starts_with(b"xmlns:") {
                continue;
            }
            let name = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|source| XmlTreeError::Syntax { position, source })?
                .into_owned();
            frame.attributes.push((name, value));
        }

        Ok(frame)
    }

    fn into_value(self) -> Value {
        if self.attributes.is_empty() && self.children.is_empty() {
            return Value::String(self.text);
        }

        let mut map = Map::new();
        for (name, value) in self.children {
            match map.get_mut(&name) {
                Some(Value::Array(items)) => items.push(value),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
                None => {
                    map.insert(name, value);
                }
            }
        }
        // Child elements win over attributes of the same name.
        for (name, value) in self.attributes {
            map.entry(name).or_insert(Value::String(value));
        }
        if !self.text.is_empty() {
            map.entry(TEXT_KEY).or_insert(Value::String(self.text));
        }

        Value::Object(map)
    }
}

/// Convert an XML document into a generic tree rooted at the document
/// element's content.
pub fn xml_to_tree(xml: &str) -> Result<Value, XmlTreeError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<Value> = None;

    loop {
        let position = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|source| XmlTreeError::Syntax { position, source })?;

        match event {
            Event::Start(start) => {
                stack.push(Frame::open(&start, position)?);
            }
            Event::Empty(start) => {
                let frame = Frame::open(&start, position)?;
                close(frame, &mut stack, &mut root);
            }
            Event::End(_) => {
                if let Some(frame) = stack.pop() {
                    close(frame, &mut stack, &mut root);
                }
            }
            Event::Text(text) => {
                if let Some(frame) = stack.last_mut() {
                    let text = text
                        .unescape()
                        .map_err(|source| XmlTreeError::Syntax { position, source })?;
                    frame.text.push_str(&text);
                }
            }
            Event::CData(data) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(String::from_utf8_lossy(&data).trim());
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes
            // carry nothing the tree keeps.
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(XmlTreeError::Unclosed(open.name));
    }
    root.ok_or(XmlTreeError::NoRoot)
}

fn close(frame: Frame, stack: &mut [Frame], root: &mut Option<Value>) {
    let name = frame.name.clone();
    let value = frame.into_value();
    match stack.last_mut() {
        Some(parent) => parent.children.push((name, value)),
        None => {
            if root.is_none() {
                *root = Some(value);
            }
        }
    }
}
