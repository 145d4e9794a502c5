//! Pagination Example
//!
//! Orders and limits nested edges with attribute directives.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example pagination --package crucible-dql
//! ```

use crucible_dql::{Attribute, Query, QueryBlock};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let genre = Attribute::new("genre")
        .with_directives(["(orderasc: name@en)", "(first: 3)"])
        .with_attribute("name@en");

    let director_film = Attribute::new("director.film")
        .with_directive("(first: -2)")
        .with_attributes([
            Attribute::new("name@en"),
            Attribute::new("initial_release_date"),
            genre,
        ]);

    let block = QueryBlock::new("me", r#"allofterms(name@en, "Steven Spielberg")"#)
        .with_attribute(director_film);

    let query = Query::new(block);

    println!("{}", query.pretty_print());
}
