//! Legacy packages.config parsing
//!
//! Declarations are `package` elements directly under the root, each
//! identified by `id` and `version` attributes. Entries missing either
//! attribute, or whose version fails validation, are silently skipped.

use crate::models::Package;
use crate::parsers::version::is_version_like;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse package declarations from packages.config content.
pub fn parse(content: &str) -> Result<Vec<Package>, quick_xml::Error> {
    let mut packages = Vec::new();
    let mut reader = Reader::from_str(content);
    let mut buf = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                depth += 1;
                if depth == 2 && local_name(&e) == "package" {
                    package_from_attributes(&e, &mut packages);
                }
            }
            Event::Empty(e) => {
                if depth == 1 && local_name(&e) == "package" {
                    package_from_attributes(&e, &mut packages);
                }
            }
            Event::End(_) => depth -= 1,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(packages)
}

fn package_from_attributes(e: &BytesStart, packages: &mut Vec<Package>) {
    let Some(id) = attr_value(e, "id") else {
        return;
    };
    let Some(version) = attr_value(e, "version") else {
        return;
    };
    if is_version_like(&version) {
        packages.push(Package::new(id, version));
    }
}

fn local_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).to_string()
}

fn attr_value(e: &BytesStart, key: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == key.as_bytes())
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}
