//! Query options and plan selection
//!
//! A fetch call carries a [`QueryOptions`] value holding up to three
//! documents: a filter, a projection, and a grouping. Which retrieval
//! strategy runs is decided exactly once, before dispatch, by computing a
//! tagged [`QueryPlan`]:
//!
//! - no options set: full scan
//! - only a filter: direct filtered find (never aggregation)
//! - anything else: aggregation with stages ordered `$match`, `$project`,
//!   `$group`, each emitted only when its document is present

use mongodb::bson::{Document, doc};

/// Optional query documents for one fetch call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    filter: Option<Document>,
    project: Option<Document>,
    group: Option<Document>,
}

/// The retrieval strategy selected from a set of query options.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryPlan {
    /// Every document in the collection, in cursor order.
    FullScan,

    /// A direct find with the given filter.
    Find(Document),

    /// An aggregation with the given ordered pipeline stages.
    Aggregate(Vec<Document>),
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter document (`$match` when aggregating).
    pub fn with_filter(mut self, filter: Document) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set the projection document (`$project` stage).
    pub fn with_project(mut self, project: Document) -> Self {
        self.project = Some(project);
        self
    }

    /// Set the grouping document (`$group` stage).
    pub fn with_group(mut self, group: Document) -> Self {
        self.group = Some(group);
        self
    }

    /// True when no option is set and a fetch means a full scan.
    pub fn is_empty(&self) -> bool {
        self.filter.is_none() && self.project.is_none() && self.group.is_none()
    }

    /// Select the retrieval strategy for these options.
    pub fn plan(&self) -> QueryPlan {
        match (&self.filter, &self.project, &self.group) {
            (None, None, None) => QueryPlan::FullScan,
            (Some(filter), None, None) => QueryPlan::Find(filter.clone()),
            (filter, project, group) => {
                let mut stages = Vec::new();
                if let Some(filter) = filter {
                    stages.push(doc! { "$match": filter.clone() });
                }
                if let Some(project) = project {
                    stages.push(doc! { "$project": project.clone() });
                }
                if let Some(group) = group {
                    stages.push(doc! { "$group": group.clone() });
                }
                QueryPlan::Aggregate(stages)
            }
        }
    }
}
