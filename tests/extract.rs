// tests/extract.rs
use schema_scrape::{extract_term_list, extract_term_record, PropertyEntry, ScrapeError};

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Full Hierarchy - Schema.org</title></head>
<body>
  <div id="mainContent">
    <h3>Schema.org Type Hierarchy</h3>
    <div id="thing_tree">
      <ul><li class="tbranch"><a href="/Thing">Thing</a>
        <ul>
          <li class="tbranch"><a href="/CreativeWork">CreativeWork</a>
            <ul><li class="tleaf"><a href="/Book">Book</a></li></ul>
          </li>
          <li class="tleaf"><a href="/Person">Person</a></li>
          <li class="tleaf"><a href="/Person">Person</a></li>
        </ul>
      </li></ul>
    </div>
    <div id="datatype_tree"><ul><li class="tleaf"><a href="/Text">Text</a></li></ul></div>
  </div>
</body></html>"#;

const PERSON_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Person - Schema.org Type</title>
<script type="application/ld+json">{"@context": "https://schema.org", "a<b": 1}</script>
</head>
<body>
<h1 class="page-title">Person</h1>
<table class="definition-table">
  <thead>
    <tr><th>Property</th><th>Expected Type</th><th>Description</th></tr>
  </thead>
  <tbody class="supertype">
    <tr class="supertype">
      <th class="supertype-name" colspan="3">Properties from <a href="/Person">Person</a></th>
    </tr>
  </tbody>
  <tbody>
    <tr typeof="rdfs:Property" resource="https://schema.org/additionalName">
      <th class="prop-nam" scope="row"><code property="rdfs:label"><a href="/additionalName">additionalName</a></code></th>
      <td class="prop-ect"><a href="/Text">Text</a>&nbsp;</td>
      <td class="prop-desc" property="rdfs:comment">An additional name for a Person, can be used for a middle name.</td>
    </tr>
    <tr typeof="rdfs:Property" resource="https://schema.org/address">
      <th class="prop-nam" scope="row"><code property="rdfs:label"><a href="/address">address</a></code></th>
      <td class="prop-ect"><a href="/PostalAddress">PostalAddress</a>&nbsp; or <br/>
        <a href="/Text">Text</a>&nbsp;</td>
      <td class="prop-desc" property="rdfs:comment">Physical address of the item.</td>
    </tr>
    <tr typeof="rdfs:Property" resource="https://schema.org/knowsAbout">
      <th class="prop-nam" scope="row"><code property="rdfs:label"><a href="/knowsAbout">knowsAbout</a></code></th>
      <td class="prop-ect">&nbsp;</td>
      <td class="prop-desc">Of a <a href="/Person">Person</a>, and less typically of an <a href="/Organization">Organization</a>.</td>
    </tr>
  </tbody>
</table>
</body></html>"#;

#[test]
fn index_lists_tree_terms_in_document_order() {
    let terms = extract_term_list(INDEX_PAGE).unwrap();
    assert_eq!(terms, vec!["Thing", "CreativeWork", "Book", "Person", "Person"]);
}

#[test]
fn term_page_rows_in_order() {
    let rec = extract_term_record("Person", PERSON_PAGE).unwrap();
    assert_eq!(rec.term(), "Person");
    assert_eq!(
        rec.properties(),
        &[
            PropertyEntry::new("", vec![]),
            PropertyEntry::new("additionalName", vec!["Text".to_string()]),
            PropertyEntry::new("address", vec!["PostalAddress".to_string(), "Text".to_string()]),
            PropertyEntry::new("knowsAbout", vec![]),
        ]
    );
}

#[test]
fn typed_and_untyped_rows_keep_their_order() {
    let page = r#"
        <table class="definition-table"><tbody>
          <tr><th><code>p1</code></th><td class="prop-ect"><a>T1</a> or <a>T2</a></td></tr>
          <tr><th><code>p2</code></th><td class="prop-ect">none</td></tr>
        </tbody></table>"#;
    let rec = extract_term_record("Thing", page).unwrap();
    assert_eq!(
        rec.properties(),
        &[
            PropertyEntry::new("p1", vec!["T1".to_string(), "T2".to_string()]),
            PropertyEntry::new("p2", vec![]),
        ]
    );
}

#[test]
fn missing_structure_is_empty_not_an_error() {
    let page = "<html><body><p>Nothing to see here.</p></body></html>";
    assert!(extract_term_list(page).unwrap().is_empty());
    let rec = extract_term_record("Thing", page).unwrap();
    assert_eq!(rec.term(), "Thing");
    assert!(rec.properties().is_empty());
}

#[test]
fn empty_container_and_wrong_table_class() {
    assert!(extract_term_list(r#"<div id="thing_tree"><ul></ul></div>"#).unwrap().is_empty());
    let rec = extract_term_record("X", r#"<table class="definition"><tr><th><code>p</code></th></tr></table>"#).unwrap();
    assert!(rec.is_empty());
}

#[test]
fn row_without_header_or_type_cell_still_counts() {
    let page = r#"<table class="definition-table">
        <tr><td class="prop-ect">Text</td></tr>
        <tr><th><code>orphan</code></th></tr>
    </table>"#;
    let rec = extract_term_record("X", page).unwrap();
    assert_eq!(
        rec.properties(),
        &[PropertyEntry::new("", vec!["Text".to_string()]), PropertyEntry::new("orphan", vec![])]
    );
}

#[test]
fn unparseable_input_fails_both_extractors() {
    let truncated = r#"<div id="thing_tree"><a href="/Thing">Thing</a><a href="/Per"#;
    let err = extract_term_list(truncated).unwrap_err();
    assert!(matches!(err, ScrapeError::DocumentUnparseable { .. }), "{err}");

    let truncated = r#"<table class="definition-table"><tr><th><code>name</code></th><td class="prop-ect"#;
    let err = extract_term_record("Person", truncated).unwrap_err();
    assert!(matches!(err, ScrapeError::DocumentUnparseable { .. }), "{err}");

    let not_utf8: &[u8] = b"<table class=\"definition-table\">\xc3\x28</table>";
    assert!(extract_term_record("Person", not_utf8).unwrap_err().is_unparseable());
    assert!(extract_term_list(not_utf8).unwrap_err().is_unparseable());
}

#[test]
fn runaway_nesting_is_reported_not_fatal() {
    let index = format!(r#"<div id="other">{}</div>"#, "<div>".repeat(20_000));
    assert!(extract_term_list(&index).unwrap_err().is_unparseable());

    let page = format!(
        r#"<table class="definition-table"><tr><th><code>p</code></th><td class="prop-ect">{}Text</td></tr></table>"#,
        "<span>".repeat(50_000)
    );
    assert!(extract_term_record("Deep", &page).unwrap_err().is_unparseable());
}
