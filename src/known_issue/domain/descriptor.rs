//! Test and suite descriptors with inherited issue annotations.

use crate::issue::domain::IssueId;
use std::collections::BTreeSet;
use std::iter;
use std::sync::Arc;

/// Something that declares issue annotations and may inherit more from an
/// enclosing suite.
pub trait HasIssueIds {
    /// Issues declared directly on this item.
    fn declared_issue_ids(&self) -> &BTreeSet<IssueId>;

    /// Nearest enclosing suite, if any.
    fn parent(&self) -> Option<&SuiteDescriptor>;

    /// Enclosing suites, nearest first.
    fn ancestors(&self) -> impl Iterator<Item = &SuiteDescriptor> {
        iter::successors(self.parent(), |suite| suite.parent())
    }

    /// Issues declared on this item or any enclosing suite.
    fn issue_ids(&self) -> BTreeSet<IssueId> {
        let mut issues = self.declared_issue_ids().clone();
        for suite in self.ancestors() {
            issues.extend(suite.declared_issue_ids().iter().cloned());
        }
        issues
    }
}

/// A group of tests, optionally nested inside (or extending) another suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteDescriptor {
    name: String,
    issues: BTreeSet<IssueId>,
    parent: Option<Arc<SuiteDescriptor>>,
}

impl SuiteDescriptor {
    /// Creates a top-level suite with no annotations.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            issues: BTreeSet::new(),
            parent: None,
        }
    }

    /// Makes this suite inherit the annotations of `parent`.
    #[must_use]
    pub fn extending(mut self, parent: Arc<Self>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Annotates the suite with an issue.
    #[must_use]
    pub fn with_issue(mut self, issue: IssueId) -> Self {
        self.issues.insert(issue);
        self
    }

    /// Annotates the suite with several issues.
    #[must_use]
    pub fn with_issues(mut self, issues: impl IntoIterator<Item = IssueId>) -> Self {
        self.issues.extend(issues);
        self
    }

    /// Returns the suite name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl HasIssueIds for SuiteDescriptor {
    fn declared_issue_ids(&self) -> &BTreeSet<IssueId> {
        &self.issues
    }

    fn parent(&self) -> Option<&SuiteDescriptor> {
        self.parent.as_deref()
    }
}

/// A single test and the suite it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDescriptor {
    name: String,
    issues: BTreeSet<IssueId>,
    suite: Option<Arc<SuiteDescriptor>>,
}

impl TestDescriptor {
    /// Creates an unannotated test outside any suite.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            issues: BTreeSet::new(),
            suite: None,
        }
    }

    /// Places the test in a suite whose annotations it inherits.
    #[must_use]
    pub fn in_suite(mut self, suite: Arc<SuiteDescriptor>) -> Self {
        self.suite = Some(suite);
        self
    }

    /// Annotates the test with an issue.
    #[must_use]
    pub fn with_issue(mut self, issue: IssueId) -> Self {
        self.issues.insert(issue);
        self
    }

    /// Annotates the test with several issues.
    #[must_use]
    pub fn with_issues(mut self, issues: impl IntoIterator<Item = IssueId>) -> Self {
        self.issues.extend(issues);
        self
    }

    /// Returns the test name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the suite the test belongs to.
    #[must_use]
    pub fn suite(&self) -> Option<&SuiteDescriptor> {
        self.suite.as_deref()
    }
}

impl HasIssueIds for TestDescriptor {
    fn declared_issue_ids(&self) -> &BTreeSet<IssueId> {
        &self.issues
    }

    fn parent(&self) -> Option<&SuiteDescriptor> {
        self.suite()
    }
}
