//! Example: build a small address book table at runtime and query it

use duke_tables::prelude::*;

fn main() -> Result<()> {
    let mut catalog = Catalog::new();
    let mut contacts = catalog.create_table("contacts", "address book")?;

    contacts.bulk_add_columns(
        &["name", "age", "vip", "since"],
        &["char", "int", "bool", "date"],
    )?;

    let mut row = RowValues::new();
    row.insert("name".into(), Value::from("Sam"));
    row.insert("age".into(), Value::from(34));
    row.insert("vip".into(), Value::from(true));
    row.insert("since".into(), Value::from("2020-03-14"));
    contacts.add_row(&row)?;

    let mut row = RowValues::new();
    row.insert("name".into(), Value::from("Alex"));
    row.insert("age".into(), Value::from("41"));
    contacts.add_row(&row)?;

    let info = contacts.info();
    println!(
        "{}: {} columns x {} rows",
        contacts.name(),
        info.columns,
        info.rows
    );

    for id in contacts.row_ids() {
        let cells = contacts.get_row_cells(id)?;
        let rendered: Vec<String> = cells
            .iter()
            .map(|c| format!("{}={}", c.column_name(), c.value()))
            .collect();
        println!("row {id}: {}", rendered.join(", "));
    }

    // schema changes apply to rows created afterwards
    contacts.add_column("city", "char")?;
    let mut row = RowValues::new();
    row.insert("name".into(), Value::from("Kim"));
    row.insert("city".into(), Value::from("Oslo"));
    contacts.add_row(&row)?;
    let columns: Vec<String> = contacts.columns().iter().map(|c| c.to_string()).collect();
    println!("columns now: {}", columns.join(", "));

    contacts.delete_row(None)?;
    println!("rows after delete: {}", contacts.info().rows);

    Ok(())
}
