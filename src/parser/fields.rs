use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::text;
use crate::record::Field;

static COPY_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.copy").unwrap());
static NAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"span[itemprop="name"]"#).unwrap());
static LINK_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// How a value is pulled out of the second cell of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// First `span.copy`.
    Copy,
    /// `span[itemprop=name]`, preferring its inner link text.
    Name,
    /// First `a`.
    FirstLink,
    /// Whole cell, whitespace-collapsed.
    FullText,
}

/// Checked in order; the first phrase contained in the label wins.
const LABELED: [(Field, Rule); 9] = [
    (Field::TaxCode, Rule::Copy),
    (Field::Address, Rule::Copy),
    (Field::Representative, Rule::Name),
    (Field::Phone, Rule::Copy),
    (Field::RegistrationDate, Rule::Copy),
    (Field::ManagedBy, Rule::Copy),
    (Field::EntityType, Rule::FirstLink),
    (Field::Status, Rule::FirstLink),
    (Field::Industry, Rule::FullText),
];

/// Match a label cell's text. Substring match: the site prefixes labels with icons.
pub fn match_label(label: &str) -> Option<(Field, Rule)> {
    LABELED
        .iter()
        .find(|(field, _)| label.contains(field.header()))
        .copied()
}

/// `None` when the element the rule looks for is missing from the cell.
pub fn apply(rule: Rule, cell: ElementRef) -> Option<String> {
    match rule {
        Rule::Copy => cell.select(&COPY_SEL).next().map(text::stripped),
        Rule::Name => cell.select(&NAME_SEL).next().map(|name| {
            match name.select(&LINK_SEL).next() {
                Some(link) => text::stripped(link),
                None => text::stripped(name),
            }
        }),
        Rule::FirstLink => cell.select(&LINK_SEL).next().map(text::stripped),
        Rule::FullText => Some(text::collapse_ws(&text::joined(cell, " "))),
    }
}
