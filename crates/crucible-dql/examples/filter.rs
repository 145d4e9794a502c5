//! Filter Example
//!
//! Builds a query block with a root filter and a nested filtered edge,
//! then prints the indented query.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example filter --package crucible-dql
//! ```

use crucible_dql::{Attribute, Query, QueryBlock};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let director_film = Attribute::new("director.film")
        .with_directive(r#"@filter(allofterms(name@en, "jones indiana"))"#)
        .with_attribute("name@en");

    let block = QueryBlock::new("me", r#"eq(name@en, "Steven Spielberg")"#)
        .with_directive("@filter(has(director.film))")
        .with_attributes([Attribute::new("name@en"), director_film]);

    let query = Query::new(block);

    println!("{}", query.pretty_print());
}
