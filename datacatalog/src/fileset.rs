use std::fmt::{Display, Formatter};

use google_cloud_googleapis::cloud::datacatalog::v1::entry::{EntryType as EntryTypeOneof, TypeSpec};
use google_cloud_googleapis::cloud::datacatalog::v1::{
    ColumnSchema, Entry, EntryGroup, EntryType, GcsFilesetSpec, Schema,
};

pub const FILESET_ENTRY_GROUP_DISPLAY_NAME: &str = "My Fileset Entry Group";
pub const FILESET_ENTRY_GROUP_DESCRIPTION: &str = "This Entry Group consists of ....";
pub const FILESET_DISPLAY_NAME: &str = "My Fileset";
pub const FILESET_DESCRIPTION: &str = "This fileset consists of ....";
pub const FILESET_FILE_PATTERN: &str = "gs://cloud-samples-data/*";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("column {column} has type {column_type}, only RECORD columns can have sub-columns")]
    SubcolumnsOnScalar { column: String, column_type: ColumnType },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnMode {
    Required,
    Nullable,
    Repeated,
}

impl ColumnMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnMode::Required => "REQUIRED",
            ColumnMode::Nullable => "NULLABLE",
            ColumnMode::Repeated => "REPEATED",
        }
    }
}

impl Display for ColumnMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
    Date,
    Bytes,
    Record,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::String => "STRING",
            ColumnType::Integer => "INTEGER",
            ColumnType::Float => "FLOAT",
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::Timestamp => "TIMESTAMP",
            ColumnType::Date => "DATE",
            ColumnType::Bytes => "BYTES",
            ColumnType::Record => "RECORD",
        }
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder for a [`ColumnSchema`]. Only RECORD columns accept sub-columns.
#[derive(Clone, Debug)]
pub struct Column {
    name: String,
    description: String,
    mode: ColumnMode,
    column_type: ColumnType,
    subcolumns: Vec<ColumnSchema>,
}

pub fn column(
    name: impl Into<String>,
    description: impl Into<String>,
    mode: ColumnMode,
    column_type: ColumnType,
) -> Column {
    Column {
        name: name.into(),
        description: description.into(),
        mode,
        column_type,
        subcolumns: vec![],
    }
}

impl Column {
    pub fn with_subcolumns(mut self, subcolumns: impl IntoIterator<Item = ColumnSchema>) -> Result<Self, Error> {
        if self.column_type != ColumnType::Record {
            return Err(Error::SubcolumnsOnScalar {
                column: self.name,
                column_type: self.column_type,
            });
        }
        self.subcolumns.extend(subcolumns);
        Ok(self)
    }

    pub fn build(self) -> ColumnSchema {
        ColumnSchema {
            column: self.name,
            r#type: self.column_type.as_str().to_string(),
            description: self.description,
            mode: self.mode.as_str().to_string(),
            subcolumns: self.subcolumns,
            ..Default::default()
        }
    }
}

impl From<Column> for ColumnSchema {
    fn from(value: Column) -> Self {
        value.build()
    }
}

pub fn fileset_entry_group() -> EntryGroup {
    EntryGroup {
        display_name: FILESET_ENTRY_GROUP_DISPLAY_NAME.to_string(),
        description: FILESET_ENTRY_GROUP_DESCRIPTION.to_string(),
        ..Default::default()
    }
}

/// Person records with a repeated nested address.
pub fn fileset_schema() -> Result<Schema, Error> {
    let addresses = column("addresses", "Addresses", ColumnMode::Repeated, ColumnType::Record).with_subcolumns([
        column("city", "City", ColumnMode::Nullable, ColumnType::String).build(),
        column("state", "State", ColumnMode::Nullable, ColumnType::String).build(),
    ])?;
    Ok(Schema {
        columns: vec![
            column("first_name", "First name", ColumnMode::Required, ColumnType::String).build(),
            column("last_name", "Last name", ColumnMode::Required, ColumnType::String).build(),
            addresses.build(),
        ],
    })
}

pub fn fileset_entry() -> Result<Entry, Error> {
    Ok(Entry {
        display_name: FILESET_DISPLAY_NAME.to_string(),
        description: FILESET_DESCRIPTION.to_string(),
        schema: Some(fileset_schema()?),
        entry_type: Some(EntryTypeOneof::Type(EntryType::Fileset.into())),
        type_spec: Some(TypeSpec::GcsFilesetSpec(GcsFilesetSpec {
            file_patterns: vec![FILESET_FILE_PATTERN.to_string()],
            sample_gcs_file_specs: vec![],
        })),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use google_cloud_googleapis::cloud::datacatalog::v1::entry::{EntryType as EntryTypeOneof, TypeSpec};
    use google_cloud_googleapis::cloud::datacatalog::v1::EntryType;

    use crate::fileset::{column, fileset_entry, fileset_entry_group, fileset_schema, ColumnMode, ColumnType, Error};

    fn assert_column(
        c: &google_cloud_googleapis::cloud::datacatalog::v1::ColumnSchema,
        name: &str,
        mode: &str,
        ty: &str,
    ) {
        assert_eq!(name, c.column);
        assert_eq!(mode, c.mode);
        assert_eq!(ty, c.r#type);
    }

    #[test]
    fn test_fileset_schema() {
        let schema = fileset_schema().unwrap();
        assert_eq!(3, schema.columns.len());
        assert_column(&schema.columns[0], "first_name", "REQUIRED", "STRING");
        assert_column(&schema.columns[1], "last_name", "REQUIRED", "STRING");
        assert_column(&schema.columns[2], "addresses", "REPEATED", "RECORD");
        assert!(schema.columns[0].subcolumns.is_empty());
        assert!(schema.columns[1].subcolumns.is_empty());

        let sub = &schema.columns[2].subcolumns;
        assert_eq!(2, sub.len());
        assert_column(&sub[0], "city", "NULLABLE", "STRING");
        assert_column(&sub[1], "state", "NULLABLE", "STRING");
        assert_eq!("City", sub[0].description);
        assert_eq!("State", sub[1].description);
    }

    #[test]
    fn test_fileset_entry() {
        let entry = fileset_entry().unwrap();
        assert_eq!("My Fileset", entry.display_name);
        assert_eq!("This fileset consists of ....", entry.description);
        assert!(entry.name.is_empty());
        assert_eq!(Some(EntryTypeOneof::Type(EntryType::Fileset as i32)), entry.entry_type);
        match entry.type_spec {
            Some(TypeSpec::GcsFilesetSpec(spec)) => {
                assert_eq!(vec!["gs://cloud-samples-data/*".to_string()], spec.file_patterns)
            }
            other => panic!("unexpected type spec {other:?}"),
        }
    }

    #[test]
    fn test_fileset_entry_group() {
        let group = fileset_entry_group();
        assert_eq!("My Fileset Entry Group", group.display_name);
        assert_eq!("This Entry Group consists of ....", group.description);
        assert!(group.name.is_empty());
    }

    #[test]
    fn test_subcolumns_on_scalar() {
        let result = column("name", "", ColumnMode::Nullable, ColumnType::String)
            .with_subcolumns([column("x", "", ColumnMode::Nullable, ColumnType::String).build()]);
        assert_eq!(
            Error::SubcolumnsOnScalar {
                column: "name".to_string(),
                column_type: ColumnType::String
            },
            result.unwrap_err()
        );
    }
}
