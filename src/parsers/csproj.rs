//! SDK-style project file parsing (*.csproj)
//!
//! Only SDK-style projects are supported: the root element must carry an
//! `Sdk` attribute, otherwise the file yields nothing. Legacy verbose
//! project files are an explicit limitation, not an error.
//!
//! A `PackageReference` may declare its version two ways, as a `Version`
//! attribute or as a nested `<Version>` child element. When both are
//! present each produces its own declaration; deduplication happens
//! later at aggregation.

use crate::models::Package;
use crate::parsers::version::is_version_like;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse package references from project-file content.
pub fn parse(content: &str) -> Result<Vec<Package>, quick_xml::Error> {
    let mut packages = Vec::new();
    let mut reader = Reader::from_str(content);
    let mut buf = Vec::new();

    let mut depth = 0usize;
    let mut in_item_group = false;
    // Include name of the reference element we are currently inside
    let mut current_include: Option<String> = None;
    // Only the first <Version> child of a reference counts
    let mut child_version_used = false;
    let mut in_version_child = false;
    let mut version_text = String::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                depth += 1;
                let name = local_name(&e);
                if depth == 1 {
                    // Root without the SDK marker: legacy project, unsupported
                    if attr_value(&e, "Sdk").is_none() {
                        return Ok(Vec::new());
                    }
                } else if depth == 2 && name == "ItemGroup" {
                    in_item_group = true;
                } else if depth == 3 && in_item_group && name == "PackageReference" {
                    current_include = reference_from_attributes(&e, &mut packages);
                    child_version_used = false;
                } else if depth == 4
                    && name == "Version"
                    && current_include.is_some()
                    && !child_version_used
                {
                    in_version_child = true;
                    version_text.clear();
                }
            }
            Event::Empty(e) => {
                // Self-closing element; its depth is one below the cursor
                let name = local_name(&e);
                if depth == 0 {
                    // Self-closing root cannot contain references
                    return Ok(Vec::new());
                }
                if depth == 2 && in_item_group && name == "PackageReference" {
                    reference_from_attributes(&e, &mut packages);
                }
            }
            Event::Text(e) if in_version_child => {
                if let Ok(text) = e.unescape() {
                    version_text.push_str(text.trim());
                }
            }
            Event::End(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if depth == 4 && in_version_child && name == "Version" {
                    in_version_child = false;
                    child_version_used = true;
                    if is_version_like(&version_text) {
                        if let Some(include) = &current_include {
                            packages.push(Package::new(include.clone(), version_text.clone()));
                        }
                    }
                } else if depth == 3 && name == "PackageReference" {
                    current_include = None;
                } else if depth == 2 && name == "ItemGroup" {
                    in_item_group = false;
                }
                depth -= 1;
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(packages)
}

/// Emit the attribute-style declaration of a reference element if its
/// `Version` attribute passes validation, and return the `Include` name
/// for possible child-element emission.
fn reference_from_attributes(e: &BytesStart, packages: &mut Vec<Package>) -> Option<String> {
    let include = attr_value(e, "Include")?;
    if let Some(version) = attr_value(e, "Version") {
        if is_version_like(&version) {
            packages.push(Package::new(include.clone(), version));
        }
    }
    Some(include)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_style_reference() {
        let content = r#"
<Project Sdk="Microsoft.NET.Sdk">
    <ItemGroup>
        <PackageReference Include="Foo" Version="1.0.0" />
    </ItemGroup>
</Project>
"#;
        let packages = parse(content).unwrap();
        assert_eq!(packages, vec![Package::new("Foo", "1.0.0")]);
    }

    #[test]
    fn child_element_version() {
        let content = r#"
<Project Sdk="Microsoft.NET.Sdk">
    <ItemGroup>
        <PackageReference Include="Bar">
            <Version>2.0.0</Version>
        </PackageReference>
    </ItemGroup>
</Project>
"#;
        let packages = parse(content).unwrap();
        assert_eq!(packages, vec![Package::new("Bar", "2.0.0")]);
    }

    #[test]
    fn attribute_and_child_both_emit() {
        let content = r#"
<Project Sdk="Microsoft.NET.Sdk">
    <ItemGroup>
        <PackageReference Include="Foo" Version="1.0.0">
            <Version>1.1.0</Version>
        </PackageReference>
    </ItemGroup>
</Project>
"#;
        let packages = parse(content).unwrap();
        assert_eq!(
            packages,
            vec![Package::new("Foo", "1.0.0"), Package::new("Foo", "1.1.0")]
        );
    }

    #[test]
    fn non_sdk_project_yields_nothing() {
        let content = r#"
<Project ToolsVersion="15.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
    <ItemGroup>
        <PackageReference Include="Foo" Version="1.0.0" />
    </ItemGroup>
</Project>
"#;
        let packages = parse(content).unwrap();
        assert!(packages.is_empty());
    }

    #[test]
    fn missing_include_is_skipped() {
        let content = r#"
<Project Sdk="Microsoft.NET.Sdk">
    <ItemGroup>
        <PackageReference Version="1.0.0" />
        <PackageReference Include="Kept" Version="2.0.0" />
    </ItemGroup>
</Project>
"#;
        let packages = parse(content).unwrap();
        assert_eq!(packages, vec![Package::new("Kept", "2.0.0")]);
    }

    #[test]
    fn invalid_version_text_is_skipped() {
        let content = r#"
<Project Sdk="Microsoft.NET.Sdk">
    <ItemGroup>
        <PackageReference Include="Foo" Version="$(SharedVersion)" />
        <PackageReference Include="Bar" Version="abc" />
        <PackageReference Include="Baz" Version="1.2.3-beta" />
    </ItemGroup>
</Project>
"#;
        let packages = parse(content).unwrap();
        assert_eq!(packages, vec![Package::new("Baz", "1.2.3-beta")]);
    }

    #[test]
    fn references_outside_item_group_are_ignored() {
        let content = r#"
<Project Sdk="Microsoft.NET.Sdk">
    <PropertyGroup>
        <PackageReference Include="Foo" Version="1.0.0" />
    </PropertyGroup>
</Project>
"#;
        let packages = parse(content).unwrap();
        assert!(packages.is_empty());
    }

    #[test]
    fn multiple_item_groups() {
        let content = r#"
<Project Sdk="Microsoft.NET.Sdk">
    <ItemGroup>
        <PackageReference Include="A" Version="1.0.0" />
    </ItemGroup>
    <ItemGroup>
        <PackageReference Include="B" Version="2.0.0" />
    </ItemGroup>
</Project>
"#;
        let packages = parse(content).unwrap();
        assert_eq!(
            packages,
            vec![Package::new("A", "1.0.0"), Package::new("B", "2.0.0")]
        );
    }

    #[test]
    fn malformed_xml_is_an_error() {
        // mismatched end tag
        assert!(parse("<Project Sdk=\"x\"><ItemGroup></Project>").is_err());
        // truncated mid-tag
        assert!(parse("<Project Sdk=\"x\"><PackageReference Include=\"A\"").is_err());
    }
}
