//! XML representation
//!
//! Layout, with two-space indentation:
//!
//! ```text
//! <Request path="/widgets">
//!   <headers>
//!     <header>
//!       <Key>accept</Key>
//!       <Value>application/xml</Value>
//!     </header>
//!   </headers>
//!   <body>hello</body>
//!   <method>POST</method>
//!   <host>localhost:3000</host>
//!   <params>
//!     <param>
//!       <Key>color</Key>
//!       <Value>red</Value>
//!       <Value>blue</Value>
//!     </param>
//!   </params>
//!   <proto>HTTP/1.1</proto>
//! </Request>
//! ```

use crate::echo::error::RenderError;
use crate::echo::model::CanonicalRequest;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const INDENT_SIZE: usize = 2;

pub fn render(request: &CanonicalRequest) -> Result<Vec<u8>, RenderError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);

    emit(
        &mut writer,
        Event::Start(BytesStart::from_content(
            format!("Request path=\"{}\"", escape(&request.path)),
            "Request".len(),
        )),
    )?;

    write_entries(
        &mut writer,
        "headers",
        "header",
        request.headers.iter().map(|h| (h.key.as_str(), h.value.as_slice())),
    )?;
    write_text_element(&mut writer, "body", &request.body)?;
    write_text_element(&mut writer, "method", &request.method)?;
    write_text_element(&mut writer, "host", &request.host)?;
    write_entries(
        &mut writer,
        "params",
        "param",
        request.params.iter().map(|(k, v)| (k.as_str(), v.as_slice())),
    )?;
    write_text_element(&mut writer, "proto", &request.proto)?;

    emit(&mut writer, Event::End(BytesEnd::new("Request")))?;
    Ok(writer.into_inner())
}

/// `<wrapper><item><Key>..</Key><Value>..</Value>*</item>*</wrapper>`
fn write_entries<'a>(
    writer: &mut Writer<Vec<u8>>,
    wrapper: &str,
    item: &str,
    entries: impl ExactSizeIterator<Item = (&'a str, &'a [String])>,
) -> Result<(), RenderError> {
    if entries.len() == 0 {
        return emit(writer, Event::Empty(BytesStart::new(wrapper)));
    }

    emit(writer, Event::Start(BytesStart::new(wrapper)))?;
    for (key, values) in entries {
        emit(writer, Event::Start(BytesStart::new(item)))?;
        write_text_element(writer, "Key", key)?;
        for value in values {
            write_text_element(writer, "Value", value)?;
        }
        emit(writer, Event::End(BytesEnd::new(item)))?;
    }
    emit(writer, Event::End(BytesEnd::new(wrapper)))
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), RenderError> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    emit(writer, Event::Text(BytesText::from_escaped(escape(text))))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

/// Escape markup and whitespace control characters; characters XML 1.0
/// cannot carry at all become U+FFFD
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            c if is_xml_char(c) => out.push(c),
            _ => out.push(char::REPLACEMENT_CHARACTER),
        }
    }
    out
}

/// The XML 1.0 `Char` production, minus the whitespace handled above
const fn is_xml_char(c: char) -> bool {
    matches!(c, '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), RenderError> {
    writer
        .write_event(event)
        .map_err(|e| RenderError::Xml(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::echo::model::{Header, Params};
    use quick_xml::Reader;

    fn widgets_request() -> CanonicalRequest {
        let mut params = Params::new();
        params.insert("color".to_string(), vec!["red".to_string(), "blue".to_string()]);
        CanonicalRequest::new(
            "POST",
            "localhost:3000",
            "/widgets",
            "HTTP/1.1",
            vec![Header::new("accept", vec!["application/xml".to_string()])],
            params,
            "hello",
        )
    }

    #[test]
    fn test_document_layout() {
        let out = String::from_utf8(render(&widgets_request()).unwrap()).unwrap();
        let expected = [
            r#"<Request path="/widgets">"#,
            "  <headers>",
            "    <header>",
            "      <Key>accept</Key>",
            "      <Value>application/xml</Value>",
            "    </header>",
            "  </headers>",
            "  <body>hello</body>",
            "  <method>POST</method>",
            "  <host>localhost:3000</host>",
            "  <params>",
            "    <param>",
            "      <Key>color</Key>",
            "      <Value>red</Value>",
            "      <Value>blue</Value>",
            "    </param>",
            "  </params>",
            "  <proto>HTTP/1.1</proto>",
            "</Request>",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_special_characters_escaped() {
        let request = CanonicalRequest::new(
            "GET",
            "h",
            "/a\"b",
            "HTTP/1.1",
            Vec::new(),
            Params::new(),
            "<b>&</b>",
        );
        let out = String::from_utf8(render(&request).unwrap()).unwrap();
        assert!(out.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(out.contains(r#"path="/a&quot;b""#));
    }

    /// Text of the first `<name>` element, as an XML parser reads it back
    fn read_back(xml: &str, name: &str) -> String {
        let mut reader = Reader::from_str(xml);
        let mut inside = false;
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) if e.name().as_ref() == name.as_bytes() => inside = true,
                Event::Text(t) if inside => return t.unescape().unwrap().into_owned(),
                Event::End(_) if inside => return String::new(),
                Event::Eof => panic!("no <{name}> element"),
                _ => {}
            }
        }
    }

    #[test]
    fn test_control_characters_survive_parsing() {
        let request = CanonicalRequest::new(
            "GET",
            "h",
            "/p\u{1}q",
            "HTTP/1.1",
            vec![Header::new("x-tab", vec!["a\tb".to_string()])],
            Params::new(),
            "a\u{1}b\rc\nd",
        );
        let out = String::from_utf8(render(&request).unwrap()).unwrap();
        assert!(!out.contains('\u{1}'));
        assert!(!out.contains('\r'));
        assert!(out.contains("<body>a\u{FFFD}b&#xD;c&#xA;d</body>"));
        assert!(out.contains("path=\"/p\u{FFFD}q\""));

        assert_eq!(read_back(&out, "body"), "a\u{FFFD}b\rc\nd");
        assert_eq!(read_back(&out, "Value"), "a\tb");
    }

    #[test]
    fn test_empty_body_and_collections() {
        let request =
            CanonicalRequest::new("GET", "h", "/", "HTTP/1.1", Vec::new(), Params::new(), "");
        let out = String::from_utf8(render(&request).unwrap()).unwrap();
        assert!(out.contains("  <headers/>"));
        assert!(out.contains("  <params/>"));
        assert!(out.contains("  <body></body>"));
    }
}
