//! Fragment Example
//!
//! Two fragments, one spreading the other, attached after the query body.
//! The query is validated before printing so a misspelled spread shows up
//! as an error instead of a server-side rejection.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example fragment --package crucible-dql
//! ```

use crucible_dql::{Attribute, Fragment, Query, QueryBlock};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let fragment_b = Fragment::new("TestFragB").with_attribute("country");

    let fragment_a = Fragment::new("TestFrag")
        .with_attributes([Attribute::new("initial_release_date"), fragment_b.spread()]);

    let block = QueryBlock::new("debug", "uid(1)")
        .with_attributes([Attribute::new("name@en"), fragment_a.spread()]);

    let query = Query::named("query", block).with_fragments([fragment_a, fragment_b]);

    query.validate()?;
    tracing::info!("fragment spreads resolved");

    println!("{}", query.pretty_print());
    Ok(())
}
