//! Screen templates and their rendering contexts.

use crate::catalog::domain::{CatalogStatistics, LocationCount, MonkeyRecord, group_thousands};
use minijinja::{Environment, context};
use serde::Serialize;

const WIDE_RULE_WIDTH: usize = 80;
const RULE_WIDTH: usize = 50;

const WELCOME: &str = "\
Welcome to the Amazing Monkey App!
Successfully loaded {{ count }} monkeys!";

const MENU: &str = "\
{{ rule }}
MAIN MENU
{{ rule }}
1. List all monkeys
2. Get details for a specific monkey by name
3. Get a random monkey
4. Show statistics
5. Exit app";

const LIST: &str = "\
ALL MONKEYS
{{ wide_rule }}
{{ header }}
{{ thin_rule }}
{% for row in rows %}{{ row }}
{% endfor %}{{ thin_rule }}
Total: {{ rows|length }} monkeys";

const DETAILS: &str = "\
{{ name }}
{{ rule }}
Location: {{ location }}
Population: {{ population }}
Coordinates: {{ coordinates }}
Type: {{ kind }}
Image: {{ image }}

Details:
   {{ details }}";

const RANDOM: &str = "\
Random monkey selected! (Access count: {{ access_count }})

{{ details }}";

const NOT_FOUND: &str = "\
No monkey found with name '{{ query }}'.
{%- if suggestions %}

Did you mean:
{%- for name in suggestions %}
   - {{ name }}
{%- endfor %}
{%- endif %}";

const STATISTICS: &str = "\
Monkey Collection Statistics:
- Total Monkeys: {{ stats.total_records }}
- Wild Species: {{ stats.wild_species }}
- Individual Monkeys: {{ stats.individuals }}
- Total Population: {{ total_population }}
- Average Population: {{ average_population }}
- Random Access Count: {{ stats.random_access_count }}
{%- if locations %}

Top Locations:
{%- for entry in locations %}
- {{ entry.location }}: {{ entry.count }}
{%- endfor %}
{%- endif %}";

fn render<S: Serialize>(template: &str, context: S) -> Result<String, minijinja::Error> {
    Environment::new().render_str(template, context)
}

fn rule(width: usize, ch: char) -> String {
    std::iter::repeat_n(ch, width).collect()
}

const fn kind_label(record: &MonkeyRecord) -> &'static str {
    if record.is_wild_species() {
        "Wild Species"
    } else {
        "Individual Monkey"
    }
}

pub(super) fn welcome(count: usize) -> Result<String, minijinja::Error> {
    render(WELCOME, context! { count })
}

pub(super) fn menu() -> Result<String, minijinja::Error> {
    render(MENU, context! { rule => rule(RULE_WIDTH, '=') })
}

pub(super) fn list(records: &[MonkeyRecord]) -> Result<String, minijinja::Error> {
    let header = format!(
        "{:<20} {:<25} {:<12} {}",
        "Name", "Location", "Population", "Type"
    );
    let rows: Vec<String> = records
        .iter()
        .map(|record| {
            let kind = if record.is_wild_species() {
                "Wild"
            } else {
                "Individual"
            };
            format!(
                "{:<20} {:<25} {:<12} {kind}",
                record.name(),
                record.location(),
                record.formatted_population()
            )
        })
        .collect();

    render(
        LIST,
        context! {
            wide_rule => rule(WIDE_RULE_WIDTH, '='),
            thin_rule => rule(WIDE_RULE_WIDTH, '-'),
            header,
            rows,
        },
    )
}

pub(super) fn details(record: &MonkeyRecord) -> Result<String, minijinja::Error> {
    render(
        DETAILS,
        context! {
            name => record.name(),
            rule => rule(RULE_WIDTH, '-'),
            location => record.location(),
            population => record.formatted_population(),
            coordinates => record
                .formatted_coordinates()
                .unwrap_or_else(|| "unknown".to_owned()),
            kind => kind_label(record),
            image => record.image().unwrap_or("none"),
            details => record.details(),
        },
    )
}

pub(super) fn random(record: &MonkeyRecord, access_count: u64) -> Result<String, minijinja::Error> {
    let body = details(record)?;
    render(RANDOM, context! { access_count, details => body })
}

pub(super) fn not_found(query: &str, suggestions: &[&str]) -> Result<String, minijinja::Error> {
    render(NOT_FOUND, context! { query, suggestions })
}

pub(super) fn statistics(
    stats: &CatalogStatistics,
    locations: &[LocationCount],
) -> Result<String, minijinja::Error> {
    render(
        STATISTICS,
        context! {
            stats,
            total_population => group_thousands(stats.total_population),
            average_population => group_thousands(stats.average_population),
            locations,
        },
    )
}
