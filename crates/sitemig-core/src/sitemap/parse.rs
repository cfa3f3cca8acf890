//! Event-based sitemap parsing (quick-xml, no DOM).

use quick_xml::events::Event;
use quick_xml::Reader;

use super::{SitemapDoc, SitemapRef, UrlEntry};

/// Error parsing a sitemap document.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("document root is neither <urlset> nor <sitemapindex>")]
    UnrecognizedRoot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    UrlSet,
    Index,
}

/// Parses a sitemap document into its recognized shape.
///
/// `<loc>` text is unescaped and trimmed; entries without a nonempty `<loc>`
/// are ignored. Element names are matched by local name, so namespace
/// prefixes do not matter.
pub fn parse_sitemap(xml: &str) -> Result<SitemapDoc, ParseError> {
    let mut reader = Reader::from_str(xml);

    let mut root: Option<Root> = None;
    let mut urls: Vec<UrlEntry> = Vec::new();
    let mut refs: Vec<SitemapRef> = Vec::new();
    let mut in_entry = false;
    let mut in_loc = false;
    let mut loc = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name();
                match (root, name.as_ref()) {
                    (None, b"urlset") => root = Some(Root::UrlSet),
                    (None, b"sitemapindex") => root = Some(Root::Index),
                    (None, _) => return Err(ParseError::UnrecognizedRoot),
                    (Some(Root::UrlSet), b"url") | (Some(Root::Index), b"sitemap") => {
                        in_entry = true;
                        loc.clear();
                    }
                    (Some(_), b"loc") if in_entry => in_loc = true,
                    _ => {}
                }
            }
            Event::Empty(e) => {
                let name = e.local_name();
                match (root, name.as_ref()) {
                    (None, b"urlset") => root = Some(Root::UrlSet),
                    (None, b"sitemapindex") => root = Some(Root::Index),
                    (None, _) => return Err(ParseError::UnrecognizedRoot),
                    // Self-closing <url/> or <sitemap/> carries no <loc>; ignored.
                    _ => {}
                }
            }
            Event::Text(t) if in_loc => loc.push_str(&t.unescape()?),
            Event::CData(t) if in_loc => {
                loc.push_str(&String::from_utf8_lossy(t.into_inner().as_ref()))
            }
            Event::End(e) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"loc" => in_loc = false,
                    b"url" | b"sitemap" if in_entry => {
                        in_entry = false;
                        let value = loc.trim();
                        if !value.is_empty() {
                            match root {
                                Some(Root::UrlSet) => urls.push(UrlEntry {
                                    loc: value.to_string(),
                                }),
                                Some(Root::Index) => refs.push(SitemapRef {
                                    loc: value.to_string(),
                                }),
                                None => {}
                            }
                        }
                        loc.clear();
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    match root {
        Some(Root::UrlSet) => Ok(SitemapDoc::UrlSet(urls)),
        Some(Root::Index) => Ok(SitemapDoc::Index(refs)),
        None => Err(ParseError::UnrecognizedRoot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(doc: SitemapDoc) -> Vec<String> {
        match doc {
            SitemapDoc::UrlSet(entries) => entries.into_iter().map(|e| e.loc).collect(),
            SitemapDoc::Index(_) => panic!("expected urlset"),
        }
    }

    fn refs(doc: SitemapDoc) -> Vec<String> {
        match doc {
            SitemapDoc::Index(entries) => entries.into_iter().map(|e| e.loc).collect(),
            SitemapDoc::UrlSet(_) => panic!("expected sitemapindex"),
        }
    }

    #[test]
    fn parse_urlset_document_order() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://old.example/</loc></url>
  <url>
    <loc>https://old.example/about</loc>
    <lastmod>2024-01-01</lastmod>
  </url>
  <url>
    <loc>
      https://old.example/blog/1
    </loc>
  </url>
</urlset>"#;
        let got = urls(parse_sitemap(xml).unwrap());
        assert_eq!(
            got,
            vec![
                "https://old.example/",
                "https://old.example/about",
                "https://old.example/blog/1",
            ]
        );
    }

    #[test]
    fn parse_urlset_single_entry() {
        let xml = r#"<urlset><url><loc>https://old.example/only</loc></url></urlset>"#;
        assert_eq!(
            urls(parse_sitemap(xml).unwrap()),
            vec!["https://old.example/only"]
        );
    }

    #[test]
    fn parse_urlset_empty() {
        let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"></urlset>"#;
        assert_eq!(urls(parse_sitemap(xml).unwrap()), Vec::<String>::new());
    }

    #[test]
    fn parse_urlset_entry_without_loc_ignored() {
        let xml = r#"<urlset>
  <url><lastmod>2024-01-01</lastmod></url>
  <url><loc>https://old.example/kept</loc></url>
  <url><loc>   </loc></url>
</urlset>"#;
        assert_eq!(
            urls(parse_sitemap(xml).unwrap()),
            vec!["https://old.example/kept"]
        );
    }

    #[test]
    fn parse_urlset_unescapes_entities() {
        let xml = r#"<urlset><url><loc>https://old.example/search?a=1&amp;b=2</loc></url></urlset>"#;
        assert_eq!(
            urls(parse_sitemap(xml).unwrap()),
            vec!["https://old.example/search?a=1&b=2"]
        );
    }

    #[test]
    fn parse_index_document_order() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap><loc>https://old.example/page-sitemap.xml</loc></sitemap>
  <sitemap>
    <loc>https://old.example/post-sitemap.xml</loc>
    <lastmod>2024-02-02</lastmod>
  </sitemap>
</sitemapindex>"#;
        let got = refs(parse_sitemap(xml).unwrap());
        assert_eq!(
            got,
            vec![
                "https://old.example/page-sitemap.xml",
                "https://old.example/post-sitemap.xml",
            ]
        );
    }

    #[test]
    fn parse_index_single_child() {
        let xml =
            r#"<sitemapindex><sitemap><loc>https://old.example/one.xml</loc></sitemap></sitemapindex>"#;
        assert_eq!(
            refs(parse_sitemap(xml).unwrap()),
            vec!["https://old.example/one.xml"]
        );
    }

    #[test]
    fn parse_unrecognized_root() {
        let err = parse_sitemap("<html><body>not a sitemap</body></html>").unwrap_err();
        assert!(matches!(err, ParseError::UnrecognizedRoot));
    }

    #[test]
    fn parse_empty_input() {
        let err = parse_sitemap("").unwrap_err();
        assert!(matches!(err, ParseError::UnrecognizedRoot));
    }

    #[test]
    fn parse_malformed_xml() {
        let err = parse_sitemap("<urlset><url><loc>https://x</url></urlset>").unwrap_err();
        assert!(matches!(err, ParseError::Xml(_)));
    }

    #[test]
    fn parse_namespaced_prefix() {
        let xml = r#"<sm:urlset xmlns:sm="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sm:url><sm:loc>https://old.example/p</sm:loc></sm:url>
</sm:urlset>"#;
        assert_eq!(
            urls(parse_sitemap(xml).unwrap()),
            vec!["https://old.example/p"]
        );
    }
}
