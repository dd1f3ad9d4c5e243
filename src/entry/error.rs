/// Errors raised while building a record instance
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Caller supplied a field name the archetype does not declare
    #[error("unknown field `{field}` for entry type `{kind}`")]
    UnknownField {
        /// Catalog name of the entry type
        kind: &'static str,
        /// The offending field name
        field: String,
    },
}
