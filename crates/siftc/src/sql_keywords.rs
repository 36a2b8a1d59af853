//! Built-in reserved words, used when no keyword file is configured.
//!
//! Covers the SQL:2003 reserved words most dialects share plus the PL/SQL
//! block keywords that show up in `.pls`/`.pkb` sources.

use sift_lexer::KeywordSet;

pub const SQL_KEYWORDS: &[&str] = &[
    // Queries
    "select", "distinct", "from", "where", "group", "by", "having", "order", "asc", "desc",
    "limit", "offset", "fetch", "first", "next", "rows", "only", "union", "intersect", "except",
    "all", "any", "some", "as", "on", "using", "with", "recursive",
    // Joins
    "join", "inner", "outer", "left", "right", "full", "cross", "natural",
    // Predicates and operators
    "and", "or", "not", "in", "is", "null", "like", "between", "exists", "escape", "true",
    "false", "unknown",
    // Expressions
    "case", "when", "then", "else", "end", "cast", "collate", "over", "partition", "window",
    // Data manipulation
    "insert", "into", "values", "update", "set", "delete", "merge", "matched", "returning",
    // Data definition
    "create", "alter", "drop", "table", "view", "index", "sequence", "schema", "database",
    "column", "constraint", "primary", "foreign", "key", "references", "unique", "check",
    "default", "temporary", "replace", "cascade", "restrict", "trigger",
    // Types
    "integer", "int", "smallint", "bigint", "decimal", "numeric", "real", "float", "double",
    "precision", "char", "character", "varchar", "varying", "boolean", "date", "time",
    "timestamp", "interval", "zone", "blob", "clob",
    // Transactions and access
    "begin", "commit", "rollback", "savepoint", "transaction", "grant", "revoke", "to",
    // Procedural
    "declare", "procedure", "function", "package", "body", "return", "returns", "if", "elsif",
    "loop", "while", "for", "exit", "cursor", "open", "close", "exception", "raise", "type",
    "record", "constant", "out", "inout",
];

/// The built-in list as a [`KeywordSet`].
pub fn default_keywords() -> KeywordSet {
    KeywordSet::new(SQL_KEYWORDS)
}
