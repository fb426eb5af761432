//! Test category definitions
//!
//! Defines the fixed set of test categories, their subcommand chains, and
//! the CLI selector-to-category mapping.

use std::fmt;

/// All six test categories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Unit,
    Integration,
    Coverage,
    Performance,
    Security,
    CrossComponent,
}

/// Primary toolchain driving a category
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lane {
    Go,
    Java,
    Python,
    Mixed,
}

impl Category {
    /// Category name as used in reports and log lines
    pub fn name(&self) -> &'static str {
        match self {
            Category::Unit => "unit",
            Category::Integration => "integration",
            Category::Coverage => "coverage",
            Category::Performance => "performance",
            Category::Security => "security",
            Category::CrossComponent => "cross_component",
        }
    }

    /// Toolchain lane, used by the language selector flags
    pub fn lane(&self) -> Lane {
        match self {
            Category::Unit | Category::Integration | Category::Performance => Lane::Go,
            Category::Coverage => Lane::Java,
            Category::CrossComponent => Lane::Python,
            Category::Security => Lane::Mixed,
        }
    }

    /// Subcommands executed sequentially for this category
    pub fn subcommands(&self) -> Vec<String> {
        let commands: &[&str] = match self {
            Category::Unit => &[
                "go test -coverprofile=coverage.out ./pkg/... ./cmd/...",
                "go tool cover -func=coverage.out",
            ],
            Category::Integration => &["go test -run Integration -timeout 120s ./test/..."],
            Category::Coverage => &["mvn clean test jacoco:report"],
            Category::Performance => &["go test -run Performance -timeout 300s ./test/..."],
            Category::Security => &["govulncheck ./...", "pip-audit"],
            Category::CrossComponent => &["pytest tests/cross_component -v --tb=short"],
        };
        commands.iter().map(|c| c.to_string()).collect()
    }

    /// All categories in dispatch order
    pub fn all() -> Vec<Category> {
        vec![
            Category::Unit,
            Category::Integration,
            Category::Coverage,
            Category::Performance,
            Category::Security,
            Category::CrossComponent,
        ]
    }

    /// Build the dispatchable spec for this category
    pub fn spec(&self) -> CategorySpec {
        CategorySpec {
            name: self.name().to_string(),
            commands: self.subcommands(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A named, ordered chain of subcommands as consumed by the orchestrator
#[derive(Clone, Debug)]
pub struct CategorySpec {
    pub name: String,
    pub commands: Vec<String>,
}

impl CategorySpec {
    pub fn new(name: impl Into<String>, commands: Vec<String>) -> Self {
        Self {
            name: name.into(),
            commands,
        }
    }
}

/// Category selection derived from the CLI selector flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    GoOnly,
    JavaOnly,
    PythonOnly,
    PerformanceOnly,
    IntegrationOnly,
    SecurityOnly,
}

impl CategoryFilter {
    /// Resolve the filter to the categories it selects, in dispatch order
    pub fn select(&self) -> Vec<Category> {
        match self {
            CategoryFilter::All => Category::all(),
            CategoryFilter::GoOnly => Category::all()
                .into_iter()
                .filter(|c| c.lane() == Lane::Go)
                .collect(),
            CategoryFilter::JavaOnly => Category::all()
                .into_iter()
                .filter(|c| c.lane() == Lane::Java)
                .collect(),
            CategoryFilter::PythonOnly => Category::all()
                .into_iter()
                .filter(|c| c.lane() == Lane::Python)
                .collect(),
            CategoryFilter::PerformanceOnly => vec![Category::Performance],
            CategoryFilter::IntegrationOnly => vec![Category::Integration],
            CategoryFilter::SecurityOnly => vec![Category::Security],
        }
    }

    /// Resolve to dispatchable category specs
    pub fn specs(&self) -> Vec<CategorySpec> {
        self.select().iter().map(Category::spec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_categories() {
        let all = Category::all();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Category::Unit);
        assert_eq!(all[5], Category::CrossComponent);
    }

    #[test]
    fn test_category_names_match_report_keys() {
        assert_eq!(Category::Unit.name(), "unit");
        assert_eq!(Category::CrossComponent.name(), "cross_component");
    }

    #[test]
    fn test_unit_runs_tests_before_coverage_report() {
        let commands = Category::Unit.subcommands();
        assert_eq!(commands.len(), 2);
        assert!(commands[0].starts_with("go test"));
        assert!(commands[1].starts_with("go tool cover"));
    }

    #[test]
    fn test_filter_all() {
        assert_eq!(CategoryFilter::All.select().len(), 6);
    }

    #[test]
    fn test_language_filters_select_by_lane() {
        let go = CategoryFilter::GoOnly.select();
        assert_eq!(
            go,
            vec![Category::Unit, Category::Integration, Category::Performance]
        );
        assert_eq!(CategoryFilter::JavaOnly.select(), vec![Category::Coverage]);
        assert_eq!(
            CategoryFilter::PythonOnly.select(),
            vec![Category::CrossComponent]
        );
    }

    #[test]
    fn test_category_filters_select_by_name() {
        assert_eq!(
            CategoryFilter::PerformanceOnly.select(),
            vec![Category::Performance]
        );
        assert_eq!(
            CategoryFilter::IntegrationOnly.select(),
            vec![Category::Integration]
        );
        assert_eq!(
            CategoryFilter::SecurityOnly.select(),
            vec![Category::Security]
        );
    }

    #[test]
    fn test_specs_carry_commands() {
        let specs = CategoryFilter::SecurityOnly.specs();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].name, "security");
        assert_eq!(specs[0].commands.len(), 2);
    }
}
