use std::io::Cursor;

use anyhow::Result;
use breakdowns_lib::reader::ReaderView;
use breakdowns_lib::types::Post;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;

/// Singularize array field names for XML child elements.
fn singular(field: &str) -> &str {
    match field {
        "tags" => "tag",
        "catalysts" => "catalyst",
        "risks" => "risk",
        "peers" => "peer",
        "quickMetrics" => "metric",
        "links" => "link",
        "sections" => "section",
        "stats" => "stat",
        "rows" => "row",
        "dcf" => "line",
        "sectors" | "methods" => "option",
        _ => field,
    }
}

fn write_text<W: std::io::Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Recursively write a serde_json::Value as XML elements.
fn write_value<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &serde_json::Value,
) -> Result<()> {
    match value {
        // Absent optionals are omitted, not written empty.
        serde_json::Value::Null => {}
        serde_json::Value::Bool(b) => write_text(writer, tag, if *b { "true" } else { "false" })?,
        serde_json::Value::Number(n) => write_text(writer, tag, &n.to_string())?,
        serde_json::Value::String(s) => write_text(writer, tag, s)?,
        serde_json::Value::Array(arr) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            let child_tag = singular(tag);
            for item in arr {
                write_value(writer, child_tag, item)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        serde_json::Value::Object(map) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            for (key, val) in map {
                write_value(writer, key, val)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
    }
    Ok(())
}

fn new_writer() -> Result<Writer<Cursor<Vec<u8>>>> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(writer)
}

fn finish(writer: Writer<Cursor<Vec<u8>>>) -> Result<String> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Serialize a slice of Serialize items into an XML string.
fn items_to_xml<T: Serialize>(root_tag: &str, item_tag: &str, items: &[T]) -> Result<String> {
    let mut writer = new_writer()?;

    if items.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(root_tag)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(root_tag)))?;
        for item in items {
            let val = serde_json::to_value(item)?;
            write_value(&mut writer, item_tag, &val)?;
        }
        writer.write_event(Event::End(BytesEnd::new(root_tag)))?;
    }

    finish(writer)
}

pub fn posts_to_xml(posts: &[&Post]) -> Result<String> {
    items_to_xml("posts", "post", posts)
}

pub fn options_to_xml(kind: &str, options: &[String]) -> Result<String> {
    let root = format!("{}s", kind.to_ascii_lowercase());
    items_to_xml(&root, singular(&root), options)
}

pub fn reader_to_xml(view: &ReaderView) -> Result<String> {
    let mut writer = new_writer()?;
    let val = serde_json::to_value(view)?;
    write_value(&mut writer, "reader", &val)?;
    finish(writer)
}
