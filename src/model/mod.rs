//! Descriptor hierarchy for browsing a server
//!
//! These types describe what a server holds: databases by name, collections
//! by name. They carry no driver handles and no caching; every enumeration
//! builds the hierarchy from scratch, and identity is name equality.

use bson::Document;

/// A server and the databases it reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    /// Server hostname
    pub host: String,

    /// Server port
    pub port: u16,

    /// Databases in the order the server listed them
    pub databases: Vec<DatabaseInfo>,
}

/// A database and the collections it reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseInfo {
    /// Database name
    pub name: String,

    /// Collections in the order the server listed them
    pub collections: Vec<CollectionInfo>,
}

/// A collection, addressed by name within its database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionInfo {
    /// Collection name
    pub name: String,

    /// Name of the database holding the collection
    pub database: String,
}

/// The ordered documents returned by one fetch call.
///
/// Documents are appended in the order the server returned them. There is no
/// deduplication, no size limit, and no pagination.
#[derive(Debug, Clone)]
pub struct CollectionResult {
    /// Name of the source collection
    pub collection: String,

    /// Returned documents in server order
    pub documents: Vec<Document>,
}

impl ServerInfo {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            databases: Vec::new(),
        }
    }

    pub fn add_database(&mut self, database: DatabaseInfo) {
        self.databases.push(database);
    }

    /// Look up a database by name.
    pub fn database(&self, name: &str) -> Option<&DatabaseInfo> {
        self.databases.iter().find(|db| db.name == name)
    }
}

impl DatabaseInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: Vec::new(),
        }
    }

    pub fn add_collection(&mut self, collection: CollectionInfo) {
        self.collections.push(collection);
    }

    /// Look up a collection by name.
    pub fn collection(&self, name: &str) -> Option<&CollectionInfo> {
        self.collections.iter().find(|coll| coll.name == name)
    }
}

impl CollectionInfo {
    pub fn new(name: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            database: database.into(),
        }
    }
}

impl CollectionResult {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            documents: Vec::new(),
        }
    }

    /// Append one document, preserving arrival order.
    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_hierarchy_building() {
        let mut server = ServerInfo::new("localhost", 27017);
        let mut orders = DatabaseInfo::new("orders");
        orders.add_collection(CollectionInfo::new("invoices", "orders"));
        orders.add_collection(CollectionInfo::new("customers", "orders"));
        server.add_database(orders);
        server.add_database(DatabaseInfo::new("empty"));

        assert_eq!(server.databases.len(), 2);
        let orders = server.database("orders").unwrap();
        assert_eq!(orders.collections.len(), 2);
        assert_eq!(
            orders.collection("invoices").unwrap().database,
            "orders"
        );
        assert!(server.database("missing").is_none());
        assert!(server.database("empty").unwrap().collections.is_empty());
    }

    #[test]
    fn test_name_equality() {
        let a = CollectionInfo::new("invoices", "orders");
        let b = CollectionInfo::new("invoices", "orders");
        let c = CollectionInfo::new("invoices", "archive");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_result_preserves_order() {
        let mut result = CollectionResult::new("invoices");
        assert!(result.is_empty());

        result.push(doc! { "seq": 1 });
        result.push(doc! { "seq": 2 });
        result.push(doc! { "seq": 1 }); // duplicates are kept

        assert_eq!(result.len(), 3);
        assert_eq!(result.collection, "invoices");
        let seqs: Vec<i32> = result
            .documents
            .iter()
            .map(|d| d.get_i32("seq").unwrap())
            .collect();
        assert_eq!(seqs, vec![1, 2, 1]);
    }
}
