use super::record::{Area, Status};
use super::table::Table;

/// Number of records in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn from_table(table: &Table) -> Self {
        let mut counts = Self::default();
        for record in table.records() {
            counts.bump(record.status);
        }
        counts
    }

    fn bump(&mut self, status: Status) {
        match status {
            Status::Pending => self.pending += 1,
            Status::InProgress => self.in_progress += 1,
            Status::Completed => self.completed += 1,
        }
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Pending => self.pending,
            Status::InProgress => self.in_progress,
            Status::Completed => self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.completed
    }
}

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    /// Mean progress truncated toward zero; `None` for an empty table.
    pub average_progress: Option<u8>,
}

impl Metrics {
    pub fn from_table(table: &Table) -> Self {
        let counts = StatusCounts::from_table(table);
        let sum: u64 = table.records().iter().map(|r| u64::from(r.progress)).sum();
        let average_progress = if table.is_empty() {
            None
        } else {
            // integer division floors because progress is never negative
            u8::try_from(sum / table.len() as u64).ok()
        };
        Self {
            total: table.len(),
            completed: counts.completed,
            in_progress: counts.in_progress,
            pending: counts.pending,
            average_progress,
        }
    }
}

/// Per-area status counts backing the area bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaBreakdown {
    pub area: Area,
    pub counts: StatusCounts,
}

impl AreaBreakdown {
    /// One entry per department, in the fixed department order.
    pub fn from_table(table: &Table) -> Vec<AreaBreakdown> {
        Area::all()
            .iter()
            .map(|&area| {
                let mut counts = StatusCounts::default();
                for record in table.records().iter().filter(|r| r.area == area) {
                    counts.bump(record.status);
                }
                AreaBreakdown { area, counts }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::table::tests::record;

    fn with(status: Status, progress: u8, area: Area, n: u64) -> crate::model::ProjectRecord {
        let mut r = record(n, "p");
        r.status = status;
        r.progress = progress;
        r.area = area;
        r
    }

    #[test]
    fn counts_by_status() {
        let table = Table::new(vec![
            with(Status::Completed, 100, Area::Planning, 1),
            with(Status::Completed, 100, Area::Planning, 2),
            with(Status::InProgress, 40, Area::Outreach, 3),
            with(Status::Pending, 0, Area::Outreach, 4),
            with(Status::Pending, 5, Area::Outreach, 5),
            with(Status::Pending, 10, Area::Planning, 6),
        ]);
        let m = Metrics::from_table(&table);
        assert_eq!(m.total, 6);
        assert_eq!(m.completed, 2);
        assert_eq!(m.in_progress, 1);
        assert_eq!(m.pending, 3);
        assert_eq!(m.total, m.completed + m.in_progress + m.pending);
    }

    #[test]
    fn average_truncates() {
        // mean is 59.9 over ten rows
        let mut rows: Vec<_> = (0..9).map(|n| with(Status::Pending, 60, Area::Planning, n)).collect();
        rows.push(with(Status::Pending, 59, Area::Planning, 9));
        let m = Metrics::from_table(&Table::new(rows));
        assert_eq!(m.average_progress, Some(59));

        let table = Table::new(vec![
            with(Status::Pending, 0, Area::Planning, 1),
            with(Status::Pending, 1, Area::Planning, 2),
        ]);
        assert_eq!(Metrics::from_table(&table).average_progress, Some(0));
    }

    #[test]
    fn empty_table_has_no_average() {
        let m = Metrics::from_table(&Table::default());
        assert_eq!(m.total, 0);
        assert_eq!(m.average_progress, None);
    }

    #[test]
    fn area_breakdown_covers_every_area() {
        let table = Table::new(vec![
            with(Status::Completed, 100, Area::Planning, 1),
            with(Status::Pending, 0, Area::Planning, 2),
            with(Status::InProgress, 40, Area::GeneralDirectorate, 3),
        ]);
        let bars = AreaBreakdown::from_table(&table);
        assert_eq!(bars.len(), Area::all().len());
        assert_eq!(bars[0].area, Area::Planning);
        assert_eq!(bars[0].counts.completed, 1);
        assert_eq!(bars[0].counts.pending, 1);
        let directorate = bars.iter().find(|b| b.area == Area::GeneralDirectorate).unwrap();
        assert_eq!(directorate.counts.get(Status::InProgress), 1);
        let sum: usize = bars.iter().map(|b| b.counts.total()).sum();
        assert_eq!(sum, table.len());
    }
}
