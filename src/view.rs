use crate::model::{AreaBreakdown, Metrics, ProjectRecord, StatusCounts, Table};

/// What the search section should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchView<'a> {
    /// No query typed.
    Idle,
    /// A query matched nothing.
    NotFound,
    Matches(Vec<&'a ProjectRecord>),
}

/// Everything derived from the table for one frame.
#[derive(Debug, Clone)]
pub struct RenderModel<'a> {
    pub records: &'a [ProjectRecord],
    pub search: SearchView<'a>,
    pub metrics: Metrics,
    pub by_area: Vec<AreaBreakdown>,
    pub by_status: StatusCounts,
}

impl<'a> RenderModel<'a> {
    pub fn build(table: &'a Table, query: &str) -> Self {
        let search = if query.is_empty() {
            SearchView::Idle
        } else {
            match table.search(query) {
                hits if hits.is_empty() => SearchView::NotFound,
                hits => SearchView::Matches(hits),
            }
        };
        Self {
            records: table.records(),
            search,
            metrics: Metrics::from_table(table),
            by_area: AreaBreakdown::from_table(table),
            by_status: StatusCounts::from_table(table),
        }
    }
}
