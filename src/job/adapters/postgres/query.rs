//! Renders a [`JobQuery`] into a Diesel statement.

use super::schema::jobs;
use crate::job::domain::{JobQuery, JobSort, SortDirection, SortField};
use diesel::dsl::sql;
use diesel::expression::SqlLiteral;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Text;

/// Boxed `SELECT` over the jobs table.
pub(super) type BoxedJobQuery = jobs::BoxedQuery<'static, Pg>;

/// Builds the filtered, ordered and paginated listing statement.
pub(super) fn list_statement(query: &JobQuery) -> BoxedJobQuery {
    let filter = query.filter();
    let mut statement = jobs::table.into_boxed::<Pg>();

    if let Some(status) = filter.status() {
        statement = statement.filter(jobs::status.eq(status.as_str()));
    }
    if let Some(company) = filter.company() {
        statement = statement.filter(jobs::company.ilike(contains_pattern(company)));
    }
    if let Some(text) = filter.text() {
        let pattern = contains_pattern(text);
        // NULL notes make their branch NULL, which WHERE treats as false.
        statement = statement.filter(
            jobs::title
                .ilike(pattern.clone())
                .or(jobs::company.ilike(pattern.clone()))
                .or(jobs::notes.assume_not_null().ilike(pattern)),
        );
    }

    let offset = i64::try_from(query.offset()).unwrap_or(i64::MAX);
    order(statement, query.sort())
        .limit(i64::from(query.limit()))
        .offset(offset)
}

fn order(statement: BoxedJobQuery, sort: JobSort) -> BoxedJobQuery {
    let descending = sort.direction() == SortDirection::Descending;
    let ordered = match (sort.field(), descending) {
        (SortField::Id, false) => return statement.order_by(jobs::id.asc()),
        (SortField::Id, true) => return statement.order_by(jobs::id.desc()),
        (SortField::AppliedOn, false) => statement.order_by(jobs::applied_on.asc()),
        (SortField::AppliedOn, true) => statement.order_by(jobs::applied_on.desc()),
        (SortField::Company, false) => statement.order_by(code_point_order("company").asc()),
        (SortField::Company, true) => statement.order_by(code_point_order("company").desc()),
        (SortField::Title, false) => statement.order_by(code_point_order("title").asc()),
        (SortField::Title, true) => statement.order_by(code_point_order("title").desc()),
    };
    ordered.then_order_by(jobs::id.asc())
}

/// Orders a text column by code point under the `C` collation, independent
/// of the database locale, so both stores agree with `str::cmp`.
fn code_point_order(column: &'static str) -> SqlLiteral<Text> {
    sql::<Text>(&format!(r#""jobs"."{column}" COLLATE "C""#))
}

/// Wraps `needle` in `%` wildcards, escaping the `LIKE` metacharacters it
/// contains so it matches literally.
pub(super) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
