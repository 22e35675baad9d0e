vocabulary! {
    /// The semantic storage type of a column.
    ///
    /// The name selects which [`super::Type`] modifiers are meaningful and which
    /// representation a column default is coerced to.
    pub enum TypeName: UnknownTypeName {
        Bit => "bit",
        Boolean => "boolean",
        Blob => "blob",
        Date => "date",
        DateTime => "datetime",
        Decimal => "decimal",
        Enum => "enum",
        Float => "float",
        Integer => "integer",
        Set => "set",
        String => "string",
        Time => "time",
        Timestamp => "timestamp",
        Year => "year",
    }
}
