use crate::domain::model::ProjectRecord;

pub const GRID_COLUMNS: usize = 2;

/// Everything a collapsible project panel displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPanel {
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub details: Vec<String>,
    pub link: String,
    pub category: String,
}

impl From<&ProjectRecord> for ProjectPanel {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            title: record.name.clone(),
            description: record.description.clone(),
            technologies: record.technologies_line(),
            details: record.details.clone(),
            link: record.link.clone(),
            category: record.category.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
    pub panel: ProjectPanel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectGrid {
    pub rows: Vec<GridRow>,
}

impl ProjectGrid {
    /// 第 i 筆放在第 i / 2 列、第 i % 2 欄
    pub fn layout(records: &[&ProjectRecord]) -> Self {
        let rows = records
            .chunks(GRID_COLUMNS)
            .enumerate()
            .map(|(row, chunk)| GridRow {
                cells: chunk
                    .iter()
                    .enumerate()
                    .map(|(column, record)| GridCell {
                        row,
                        column,
                        panel: ProjectPanel::from(*record),
                    })
                    .collect(),
            })
            .collect();

        Self { rows }
    }

    pub fn panel_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[cfg(test)]
    fn cell(&self, index: usize) -> Option<&GridCell> {
        self.rows
            .get(index / GRID_COLUMNS)
            .and_then(|row| row.cells.get(index % GRID_COLUMNS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::ProjectCatalog;

    #[test]
    fn test_layout_places_records_two_per_row() {
        let catalog = ProjectCatalog::builtin();
        let records: Vec<&ProjectRecord> = catalog.records().iter().take(5).collect();
        let grid = ProjectGrid::layout(&records);

        assert_eq!(grid.rows.len(), 3);
        assert_eq!(grid.panel_count(), 5);
        assert_eq!(grid.rows[2].cells.len(), 1);

        for (i, record) in records.iter().enumerate() {
            let cell = grid.cell(i).unwrap();
            assert_eq!(cell.row, i / 2);
            assert_eq!(cell.column, i % 2);
            assert_eq!(cell.panel.title, record.name);
        }
        assert!(grid.cell(5).is_none());
    }

    #[test]
    fn test_panel_carries_display_fields() {
        let catalog = ProjectCatalog::builtin();
        let panel = ProjectPanel::from(&catalog.records()[1]);

        assert_eq!(panel.title, "Finance Trading Bot");
        assert_eq!(panel.technologies, "Django | CrewAI | CCXT | Machine Learning");
        assert_eq!(panel.details.len(), 3);
        assert_eq!(panel.link, "https://github.com/username/ai-trading-bot");
        assert_eq!(panel.category, "Financial Technology");
    }

    #[test]
    fn test_empty_input_has_no_panels() {
        let grid = ProjectGrid::layout(&[]);
        assert!(grid.is_empty());
        assert_eq!(grid.panel_count(), 0);
    }
}
