use pgtypes_core::Table;

/// Table selection by name.
///
/// A table is selected when `include` is empty or names it, and `exclude`
/// does not name it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl TableFilter {
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self { include, exclude }
    }

    /// A filter that selects every table.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn include(&self) -> &[String] {
        &self.include
    }

    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    /// First name present in both lists.
    pub fn conflict(&self) -> Option<&str> {
        self.include
            .iter()
            .find(|name| self.exclude.contains(name))
            .map(String::as_str)
    }

    pub fn is_selected(&self, name: &str) -> bool {
        let included = self.include.is_empty() || self.include.iter().any(|t| t == name);
        included && !self.exclude.iter().any(|t| t == name)
    }

    /// Keep the selected tables, preserving order.
    pub fn apply(&self, tables: Vec<Table>) -> Vec<Table> {
        tables
            .into_iter()
            .filter(|t| self.is_selected(t.name()))
            .collect()
    }

    /// Included names that matched none of the tables.
    pub fn unmatched<'a>(&'a self, tables: &[Table]) -> Vec<&'a str> {
        self.include
            .iter()
            .filter(|name| !tables.iter().any(|t| t.name() == name.as_str()))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> Vec<Table> {
        ["users", "orders", "schema_migrations"]
            .into_iter()
            .map(|name| Table::new(name, vec![]))
            .collect()
    }

    fn names(tables: &[Table]) -> Vec<&str> {
        tables.iter().map(|t| t.name()).collect()
    }

    #[test]
    fn test_all() {
        assert_eq!(
            names(&TableFilter::all().apply(tables())),
            vec!["users", "orders", "schema_migrations"]
        );
    }

    #[test]
    fn test_include() {
        let filter = TableFilter::new(vec!["orders".into(), "users".into()], vec![]);
        // Input order wins over list order.
        assert_eq!(names(&filter.apply(tables())), vec!["users", "orders"]);
    }

    #[test]
    fn test_exclude() {
        let filter = TableFilter::new(vec![], vec!["schema_migrations".into()]);
        assert_eq!(names(&filter.apply(tables())), vec!["users", "orders"]);
    }

    #[test]
    fn test_conflict() {
        let filter = TableFilter::new(vec!["users".into()], vec!["users".into()]);
        assert_eq!(filter.conflict(), Some("users"));
        assert!(TableFilter::all().conflict().is_none());
    }

    #[test]
    fn test_unmatched() {
        let filter = TableFilter::new(vec!["users".into(), "ghosts".into()], vec![]);
        assert_eq!(filter.unmatched(&tables()), vec!["ghosts"]);
    }
}
