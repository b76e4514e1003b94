// src/render/schema.rs
//! Best-effort `create table` text for human review; not checked against any
//! SQL grammar. Properties without an expected type get no column.

use crate::model::TermRecord;
use crate::normalize::normalize;

pub fn render_schema_text(record: &TermRecord) -> String {
    let columns: Vec<String> = record
        .properties()
        .iter()
        .filter_map(|p| {
            let ty = p.first_type()?;
            Some(join!("  ", &normalize(&p.name), " ", &normalize(ty)))
        })
        .collect();

    join!(
        "create table ",
        &normalize(record.term()),
        " (\n",
        &columns.join(",\n"),
        "\n);",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyEntry;

    #[test]
    fn first_type_becomes_column_type() {
        let rec = TermRecord::new(
            "Person",
            vec![
                PropertyEntry::new("additionalName", vec![s!("Text")]),
                PropertyEntry::new("address", vec![s!("PostalAddress"), s!("Text")]),
            ],
        );
        assert_eq!(
            render_schema_text(&rec),
            "create table person (\n  additional_name text,\n  address postal_address\n);"
        );
    }

    #[test]
    fn untyped_properties_are_omitted() {
        let rec = TermRecord::new(
            "MedicalEntity",
            vec![
                PropertyEntry::new("p1", vec![s!("T1"), s!("T2")]),
                PropertyEntry::new("p2", vec![]),
            ],
        );
        assert_eq!(render_schema_text(&rec), "create table medical_entity (\n  p1 t1\n);");
    }

    #[test]
    fn no_columns_keeps_the_wrapper() {
        assert_eq!(render_schema_text(&TermRecord::empty("Thing")), "create table thing (\n\n);");
    }
}
