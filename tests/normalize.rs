// tests/normalize.rs
use schema_scrape::normalize;

#[test]
fn documented_examples() {
    assert_eq!(normalize("additionalName"), "additional_name");
    assert_eq!(normalize("HTTPRequest"), "http_request");
    assert_eq!(normalize("Foo::Bar"), "foo/bar");
    assert_eq!(normalize(""), "");
}

#[test]
fn schema_org_identifiers() {
    let cases = [
        ("Person", "person"),
        ("PostalAddress", "postal_address"),
        ("gtin13", "gtin13"),
        ("isAccessibleForFree", "is_accessible_for_free"),
        ("3DModel", "3_d_model"),
        ("URL", "url"),
        ("WebAPI", "web_api"),
        ("MedicalWebPage", "medical_web_page"),
    ];
    for (input, want) in cases {
        assert_eq!(normalize(input), want, "normalize({input:?})");
    }
}

#[test]
fn lowercase_snake_input_is_a_fixed_point() {
    for s in ["thing", "postal_address", "gtin13", "a_1_b", "foo/bar_baz", "_x_"] {
        assert_eq!(normalize(s), s);
    }
}

#[test]
fn repeated_calls_agree() {
    for s in ["XMLHttpRequest", "Foo::BarBAZ", "schema-org", "aB", "ABc"] {
        let first = normalize(s);
        assert_eq!(normalize(s), first);
    }
}
